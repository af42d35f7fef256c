//! Features section and stat rows.

use crate::content::{FeaturesContent, Stat};
use crate::html::{heading, html_escape};

/// Render the features section with its stats row.
pub fn render_features(content: &FeaturesContent) -> String {
    let cards: String = content
        .features
        .iter()
        .map(|f| {
            format!(
                r#"<div class="feature-card" data-reveal>
            <span class="feature-icon">{}</span>
            <span class="feature-highlight">{}</span>
            <h3 class="feature-title">{}</h3>
            <p class="feature-description">{}</p>
        </div>"#,
                html_escape(&f.icon),
                html_escape(&f.highlight),
                html_escape(&f.title),
                html_escape(&f.description)
            )
        })
        .collect();

    format!(
        r#"<section id="features" class="features" data-section="features">
    <div class="section-header">
        {}
        <p class="section-subtitle" data-reveal>{}</p>
    </div>
    <div class="features-grid">
        {}
    </div>
    {}
</section>"#,
        heading("h2", &content.eyebrow, &content.title, &content.accent),
        html_escape(&content.subtitle),
        cards,
        render_stats(&content.stats)
    )
}

/// Render a row of big-number stats.
pub fn render_stats(stats: &[Stat]) -> String {
    let items: String = stats
        .iter()
        .map(|s| {
            format!(
                r#"<div class="stat" data-reveal><p class="stat-value">{}</p><p class="stat-label">{}</p></div>"#,
                html_escape(&s.value),
                html_escape(&s.label)
            )
        })
        .collect();

    format!(r#"<div class="stats-row">{}</div>"#, items)
}
