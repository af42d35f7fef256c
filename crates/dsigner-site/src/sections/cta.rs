//! Closing call to action.

use crate::content::CtaContent;
use crate::html::{heading, html_escape};

/// Render the call-to-action section.
pub fn render_cta(content: &CtaContent) -> String {
    let assurances: String = content
        .assurances
        .iter()
        .map(|a| format!(r#"<li data-reveal>{}</li>"#, html_escape(a)))
        .collect();

    format!(
        r#"<section id="begin" class="cta" data-section="cta">
    <div class="cta-glow"></div>
    <div class="cta-content">
        {}
        <p class="cta-lead" data-reveal>{}</p>
        <span class="magnetic" data-magnetic><a href="{}" class="btn-primary" data-reveal>{}</a></span>
        <ul class="assurances">{}</ul>
    </div>
</section>"#,
        heading("h2", &content.eyebrow, &content.title, &content.accent),
        html_escape(&content.lead),
        html_escape(&content.cta_url),
        html_escape(&content.cta_text),
        assurances
    )
}
