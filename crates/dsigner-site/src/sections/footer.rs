//! Site footer.

use crate::content::FooterContent;
use crate::html::html_escape;

/// Render the footer. The newsletter form is markup only.
pub fn render_footer(content: &FooterContent, brand: &str, year: i32) -> String {
    let columns: String = content
        .columns
        .iter()
        .map(|col| {
            let links: String = col
                .links
                .iter()
                .map(|(label, href)| {
                    format!(
                        r#"<li><a href="{}">{}</a></li>"#,
                        html_escape(href),
                        html_escape(label)
                    )
                })
                .collect();
            format!(
                r#"<div class="footer-column"><h4>{}</h4><ul>{}</ul></div>"#,
                html_escape(&col.heading),
                links
            )
        })
        .collect();

    format!(
        r#"<footer class="site-footer">
    <div class="footer-container">
        <div class="footer-brand">
            <a href="/" class="logo">{brand}</a>
            <p>{tagline}</p>
        </div>
        {columns}
        <div class="footer-column">
            <h4>Newsletter</h4>
            <p>{newsletter}</p>
            <form class="newsletter-form" onsubmit="return false">
                <input type="email" name="email" placeholder="Email Address" aria-label="Email Address">
                <button type="submit" aria-label="Subscribe">&#10148;</button>
            </form>
        </div>
    </div>
    <div class="footer-bottom">
        <p>&copy; {year} {brand}. All Rights Reserved.</p>
        <div class="footer-legal">
            <a href="/privacy">Privacy</a>
            <a href="/terms">Terms</a>
        </div>
        <p class="footer-motto">{motto}</p>
    </div>
</footer>"#,
        brand = html_escape(brand),
        tagline = html_escape(&content.tagline),
        columns = columns,
        newsletter = html_escape(&content.newsletter),
        year = year,
        motto = html_escape(&content.motto)
    )
}
