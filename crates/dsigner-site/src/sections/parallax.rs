//! Parallax statement band.

use crate::content::ParallaxContent;
use crate::html::html_escape;

/// The background drifts with scroll; the copy reveals on entry.
pub fn render_parallax(content: &ParallaxContent) -> String {
    format!(
        r#"<section class="parallax" data-section="parallax">
    <div class="parallax-bg"></div>
    <div class="parallax-content">
        <h2 data-reveal>{} <span class="accent">{}</span></h2>
        <p data-reveal>{}</p>
        <a href="{}" class="btn-outline-light" data-reveal>{}</a>
    </div>
</section>"#,
        html_escape(&content.title),
        html_escape(&content.accent),
        html_escape(&content.lead),
        html_escape(&content.cta_url),
        html_escape(&content.cta_text)
    )
}
