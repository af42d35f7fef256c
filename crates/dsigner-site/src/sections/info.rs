//! Content blocks for the about, strengths and contact pages.

use crate::content::{
    AboutContent, ComparisonTable, ContactContent, EnquiryForm, FieldKind, Heading, InfoCard,
    Milestone, Stat,
};
use crate::html::{heading, html_escape};
use crate::sections::render_stats;

/// Render a headed grid of icon cards.
pub fn render_card_grid(id: &str, head: &Heading, cards: &[InfoCard]) -> String {
    let items: String = cards
        .iter()
        .map(|c| {
            format!(
                r#"<div class="info-card" data-reveal>
            <span class="info-icon">{}</span>
            <h3>{}</h3>
            <p>{}</p>
        </div>"#,
                html_escape(&c.icon),
                html_escape(&c.title),
                html_escape(&c.description)
            )
        })
        .collect();

    format!(
        r#"<section id="{}" class="info-section" data-section="{}">
    <div class="section-header">{}</div>
    <div class="info-grid">{}</div>
</section>"#,
        id,
        id,
        heading("h2", &head.eyebrow, &head.title, &head.accent),
        items
    )
}

/// Story block: image, philosophy paragraphs and stats.
pub fn render_story(about: &AboutContent) -> String {
    let paragraphs: String = about
        .story_paragraphs
        .iter()
        .map(|p| format!(r#"<p data-reveal>{}</p>"#, html_escape(p)))
        .collect();

    format!(
        r#"<section id="story" class="story" data-section="story">
    <div class="story-media" data-reveal>
        <img src="{}" alt="Craftsmanship" loading="lazy">
    </div>
    <div class="story-copy">
        {}
        {}
        {}
    </div>
</section>"#,
        html_escape(&about.story_image),
        heading("h2", &about.story.eyebrow, &about.story.title, &about.story.accent),
        paragraphs,
        render_stats(&about.story_stats)
    )
}

/// Alternating milestone timeline.
pub fn render_milestones(head: &Heading, milestones: &[Milestone]) -> String {
    let items: String = milestones
        .iter()
        .enumerate()
        .map(|(i, m)| {
            format!(
                r#"<li class="milestone milestone-{}" data-reveal>
            <span class="milestone-year">{}</span>
            <div><h3>{}</h3><p>{}</p></div>
        </li>"#,
                if i % 2 == 0 { "left" } else { "right" },
                html_escape(&m.year),
                html_escape(&m.title),
                html_escape(&m.description)
            )
        })
        .collect();

    format!(
        r#"<section id="milestones" class="milestones" data-section="milestones">
    <div class="section-header">{}</div>
    <ol class="timeline">{}</ol>
</section>"#,
        heading("h2", &head.eyebrow, &head.title, &head.accent),
        items
    )
}

/// Stats band between sections.
pub fn render_stats_band(stats: &[Stat]) -> String {
    format!(
        r#"<section id="stats" class="stats-band" data-section="stats">{}</section>"#,
        render_stats(stats)
    )
}

/// Render an enquiry form. It has no submission endpoint.
pub fn render_enquiry_form(id: &str, form: &EnquiryForm) -> String {
    let fields: String = form
        .fields
        .iter()
        .map(|f| {
            let control = match &f.kind {
                FieldKind::Text | FieldKind::Email => format!(
                    r#"<input type="{}" id="{}-{}" name="{}" placeholder="{}">"#,
                    if f.kind == FieldKind::Email { "email" } else { "text" },
                    id,
                    f.name,
                    f.name,
                    html_escape(&f.placeholder)
                ),
                FieldKind::TextArea => format!(
                    r#"<textarea id="{}-{}" name="{}" rows="5" placeholder="{}"></textarea>"#,
                    id,
                    f.name,
                    f.name,
                    html_escape(&f.placeholder)
                ),
                FieldKind::Select(options) => {
                    let opts: String = options
                        .iter()
                        .map(|o| format!("<option>{}</option>", html_escape(o)))
                        .collect();
                    format!(r#"<select id="{}-{}" name="{}">{}</select>"#, id, f.name, f.name, opts)
                }
            };
            format!(
                r#"<div class="form-field" data-reveal><label for="{}-{}">{}</label>{}</div>"#,
                id,
                f.name,
                html_escape(&f.label),
                control
            )
        })
        .collect();

    format!(
        r#"<section id="{}" class="enquiry" data-section="{}">
    <div class="section-header">{}</div>
    <form class="enquiry-form" onsubmit="return false">
        {}
        <button type="submit" class="btn-primary">{}</button>
    </form>
</section>"#,
        id,
        id,
        heading("h2", &form.heading.eyebrow, &form.heading.title, &form.heading.accent),
        fields,
        html_escape(&form.submit)
    )
}

/// Headquarters details next to the inquiry form.
pub fn render_contact_details(contact: &ContactContent) -> String {
    fn lines(items: &[String]) -> String {
        items
            .iter()
            .map(|l| format!("<p>{}</p>", html_escape(l)))
            .collect()
    }

    format!(
        r#"<section id="contact-details" class="contact-details" data-section="contact-details">
    <div class="contact-info">
        <h2 data-reveal>Headquarters</h2>
        <div class="contact-item" data-reveal><h3>Address</h3>{}</div>
        <div class="contact-item" data-reveal><h3>Phone</h3>{}</div>
        <div class="contact-item" data-reveal><h3>Email</h3><p><a href="mailto:{}">{}</a></p></div>
        <div class="contact-item" data-reveal><h3>Hours</h3>{}</div>
        <p class="contact-note" data-reveal>{}</p>
    </div>
</section>"#,
        lines(&contact.address),
        lines(&contact.phones),
        html_escape(&contact.email),
        html_escape(&contact.email),
        lines(&contact.hours),
        html_escape(&contact.exports_note)
    )
}

/// Studio location band.
pub fn render_map(contact: &ContactContent) -> String {
    let query = urlencoding::encode(&contact.address.join(" ")).into_owned();
    format!(
        r#"<section id="map" class="map-band" data-section="map">
    <h3>Locate Our Studio</h3>
    <p>{}</p>
    <a href="https://maps.google.com/?q={}" class="btn-outline" rel="noopener">Open in Maps</a>
</section>"#,
        html_escape(&contact.studio_area),
        query
    )
}

/// Side-by-side model comparison.
pub fn render_comparison(table: &ComparisonTable) -> String {
    let head: String = table
        .columns
        .iter()
        .map(|c| format!("<th>{}</th>", html_escape(c)))
        .collect();
    let rows: String = table
        .rows
        .iter()
        .map(|(label, values)| {
            let cells: String = values
                .iter()
                .map(|v| format!("<td>{}</td>", html_escape(v)))
                .collect();
            format!("<tr><th scope=\"row\">{}</th>{}</tr>", html_escape(label), cells)
        })
        .collect();

    format!(
        r#"<section id="comparison" class="comparison" data-section="comparison">
    <h2 data-reveal>{}</h2>
    <table class="comparison-table" data-reveal>
        <thead><tr>{}</tr></thead>
        <tbody>{}</tbody>
    </table>
</section>"#,
        html_escape(&table.title),
        head,
        rows
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{EscortContent, StrengthsContent};

    #[test]
    fn test_milestones_alternate() {
        let about = AboutContent::default();
        let html = render_milestones(&about.milestones, &about.milestone_list);
        assert_eq!(html.matches("milestone-left").count(), 3);
        assert_eq!(html.matches("milestone-right").count(), 2);
        assert!(html.contains(r#"<span class="milestone-year">1979</span>"#));
    }

    #[test]
    fn test_enquiry_form_controls() {
        let strengths = StrengthsContent::default();
        let html = render_enquiry_form("partner", &strengths.partner_form);
        assert!(html.contains(r#"<input type="email" id="partner-email" name="email""#));
        assert!(html.contains("<option>Private Label Client</option>"));
        assert!(html.contains(r#"<textarea id="partner-message""#));
        assert!(html.contains("Submit Enquiry"));
    }

    #[test]
    fn test_comparison_table() {
        let html = render_comparison(&EscortContent::default().comparison);
        assert!(html.contains("<th>Rose Gold</th>"));
        assert!(html.contains(r#"<tr><th scope="row">Strap</th><td>Steel</td><td>Sport Mesh</td><td>Italian Leather</td></tr>"#));
    }

    #[test]
    fn test_contact_details() {
        let html = render_contact_details(&ContactContent::default());
        assert!(html.contains("<p>+91 99204 14447</p>"));
        assert!(html.contains(r#"href="mailto:info@designerworld.in""#));
    }
}
