//! Collection grid on the home page.

use crate::content::CollectionsContent;
use crate::html::{heading, html_escape};

/// Render the series cards.
pub fn render_collections(content: &CollectionsContent) -> String {
    let cards: String = content
        .collections
        .iter()
        .map(|c| {
            format!(
                r#"<a href="{}" class="collection-card" data-reveal>
            <img src="{}" alt="{}" class="collection-img" loading="lazy">
            <div class="collection-overlay">
                <div class="collection-badges">
                    <span>{} Models</span>
                    <span>From {}</span>
                </div>
                <h3>{}</h3>
                <p>{}</p>
            </div>
        </a>"#,
                html_escape(&c.url),
                html_escape(&c.image),
                html_escape(&c.name),
                c.model_count,
                c.price_from.display(),
                html_escape(&c.name),
                html_escape(&c.description)
            )
        })
        .collect();

    format!(
        r#"<section id="collections" class="collections" data-section="collections">
    <div class="section-header">
        {}
        <p class="section-subtitle" data-reveal>{}</p>
    </div>
    <div class="collections-grid">
        {}
    </div>
    <div class="section-cta">
        <a href="{}" class="btn-outline">{}</a>
    </div>
</section>"#,
        heading("h2", &content.eyebrow, &content.title, &content.accent),
        html_escape(&content.subtitle),
        cards,
        html_escape(&content.cta_url),
        html_escape(&content.cta_text)
    )
}
