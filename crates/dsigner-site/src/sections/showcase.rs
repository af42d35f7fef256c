//! Designer showcase and texture blocks, and closing banners.

use crate::content::{HeroContent, ShowcaseContent};
use crate::html::{heading, html_escape};

/// Featured product block. The image scales with scroll.
pub fn render_showcase(content: &ShowcaseContent, reserve_href: &str) -> String {
    format!(
        r#"<section id="showcase" class="showcase" data-section="showcase">
    <div class="showcase-media">
        <img src="{}" alt="{}" class="showcase-img" loading="lazy">
    </div>
    <div class="showcase-text">
        {}
        <p data-reveal>{}</p>
        <p class="badge" data-reveal>{}</p>
        <a href="{}" class="btn-primary" data-reveal>{}</a>
    </div>
</section>"#,
        html_escape(&content.image),
        html_escape(&content.title),
        heading("h2", &content.eyebrow, &content.title, ""),
        html_escape(&content.lead),
        html_escape(&content.badge),
        html_escape(reserve_href),
        html_escape(&content.cta_text)
    )
}

/// Full-bleed image band with a short statement.
pub fn render_texture(content: &HeroContent) -> String {
    let image = content
        .image
        .as_ref()
        .map(|src| {
            format!(
                r#"<img src="{}" alt="Macro Detail" class="texture-img" loading="lazy">"#,
                html_escape(src)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<section id="texture" class="texture" data-section="texture">
    {}
    <div class="texture-copy">
        {}
        <p data-reveal>{}</p>
    </div>
</section>"#,
        image,
        heading("h2", &content.eyebrow, &content.title, &content.accent),
        html_escape(&content.lead)
    )
}

/// Closing banner with a primary and an optional secondary action.
pub fn render_closing_banner(content: &HeroContent, secondary: Option<(&str, &str)>) -> String {
    let primary = match (&content.cta_text, &content.cta_url) {
        (Some(text), Some(url)) => format!(
            r#"<a href="{}" class="btn-primary" data-reveal>{}</a>"#,
            html_escape(url),
            html_escape(text)
        ),
        _ => String::new(),
    };
    let secondary = secondary
        .map(|(text, url)| {
            format!(
                r#"<a href="{}" class="btn-outline" data-reveal>{}</a>"#,
                html_escape(url),
                html_escape(text)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<section id="closing" class="closing-banner" data-section="closing">
    {}
    <div class="closing-actions">{}{}</div>
</section>"#,
        heading("h2", &content.eyebrow, &content.title, &content.accent),
        primary,
        secondary
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{DesignerContent, EscortContent};

    #[test]
    fn test_showcase_reserve_link() {
        let content = DesignerContent::default();
        let html = render_showcase(&content.showcase, "/designer?selected=3");
        assert!(html.contains(r#"href="/designer?selected=3" class="btn-primary""#));
        assert!(html.contains("showcase-img"));
        assert!(html.contains("Limited Inventory"));
    }

    #[test]
    fn test_closing_banner_actions() {
        let content = EscortContent::default();
        let html = render_closing_banner(&content.closing, Some(("Customer Service", "/contact")));
        assert!(html.contains("Shop All Products"));
        assert!(html.contains(r#"href="/contact" class="btn-outline""#));
    }
}
