//! Hero banner.

use crate::content::HeroContent;
use crate::html::{heading, html_escape};

/// Render a hero banner.
///
/// `variant` becomes a modifier class (`hero-home`, `hero-designer`, ...).
/// Items marked `data-reveal` play the load entrance; a hero image gets the
/// ambient light sweep.
pub fn render_hero(content: &HeroContent, variant: &str, note: Option<&str>) -> String {
    let lead = if content.lead.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="hero-lead" data-reveal>{}</p>"#, html_escape(&content.lead))
    };

    let cta = match (&content.cta_text, &content.cta_url) {
        (Some(text), Some(url)) => format!(
            r#"<a href="{}" class="btn-primary" data-reveal>{}</a>"#,
            html_escape(url),
            html_escape(text)
        ),
        _ => String::new(),
    };

    let note = note
        .map(|n| format!(r#"<p class="hero-note" data-reveal>{}</p>"#, html_escape(n)))
        .unwrap_or_default();

    let media = content
        .image
        .as_ref()
        .map(|src| {
            format!(
                r#"<div class="hero-media" data-reveal>
            <img src="{}" alt="{}" class="hero-img">
            <div class="light-sweep"></div>
        </div>"#,
                html_escape(src),
                html_escape(&content.eyebrow)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<section class="hero hero-{}" data-hero data-section="hero">
    <div class="hero-spotlight"></div>
    <div class="hero-inner">
        <div class="hero-copy">
            {}
            {}
            {}
            {}
        </div>
        {}
    </div>
</section>"#,
        variant,
        heading("h1", &content.eyebrow, &content.title, &content.accent),
        lead,
        cta,
        note,
        media
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_hero() {
        let content = HeroContent::new(
            "Escort Everyday Collection",
            "Built for Comfort.",
            "Made to Last.",
            "Lead",
        )
        .with_cta("View Collection", "#collection")
        .with_image("/watch-hero-silver.png");
        let html = render_hero(&content, "escort", Some("Join 50k+ daily owners"));

        assert!(html.contains(r#"class="hero hero-escort" data-hero"#));
        assert!(html.contains(r#"<span class="accent">Made to Last.</span>"#));
        assert!(html.contains(r##"<a href="#collection" class="btn-primary" data-reveal>View Collection</a>"##));
        assert!(html.contains("Join 50k+ daily owners"));
        assert!(html.contains("light-sweep"));
    }

    #[test]
    fn test_text_only_hero() {
        let content = HeroContent::new("Get In Touch", "Contact", "DSIGNER'S", "");
        let html = render_hero(&content, "contact", None);
        assert!(!html.contains("hero-lead"));
        assert!(!html.contains("btn-primary"));
        assert!(!html.contains("light-sweep"));
    }
}
