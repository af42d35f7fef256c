//! Site navigation bar and mobile menu.

use dsigner_core::Route;

use crate::html::{active_class, html_escape};

/// Render the navigation bar with `active` highlighted.
///
/// `data-nav` lets the runtime add the scrolled state; the mobile menu
/// opens through `data-menu-toggle`.
pub fn render_navigation(brand: &str, active: Option<Route>, menu_contact: &[String]) -> String {
    let links = Route::nav_links(active);

    let desktop: String = links
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}" class="nav-link{}"{}>{}</a>"#,
                link.route.path(),
                active_class(link.active),
                if link.active { r#" aria-current="page""# } else { "" },
                link.route.nav_label()
            )
        })
        .collect();

    let mobile: String = links
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}" class="mobile-link{}">{}</a>"#,
                link.route.path(),
                active_class(link.active),
                link.route.nav_label()
            )
        })
        .collect();

    let contact: String = menu_contact
        .iter()
        .map(|line| format!("<p>{}</p>", html_escape(line)))
        .collect();

    // No checkout exists, so the cart badge always reads 0.
    format!(
        r#"<header class="site-nav" data-nav>
    <nav class="nav-container">
        <a href="/" class="logo">{brand}</a>
        <div class="nav-links">{desktop}</div>
        <div class="nav-actions">
            <span class="cart-button" aria-label="Cart">&#128717;<span class="cart-badge">0</span></span>
            <button type="button" class="menu-toggle" data-menu-toggle aria-controls="mobile-menu" aria-expanded="false" aria-label="Menu">&#9776;</button>
        </div>
    </nav>
</header>
<div id="mobile-menu" class="mobile-menu">
    <nav class="mobile-links">{mobile}</nav>
    <div class="mobile-contact"><p class="eyebrow">Connect with us</p>{contact}</div>
</div>
"#,
        brand = html_escape(brand),
        desktop = desktop,
        mobile = mobile,
        contact = contact
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_only_active_route() {
        let html = render_navigation("DSIGNER'S", Some(Route::Escort), &[]);
        assert!(html.contains(r#"<a href="/escort" class="nav-link active" aria-current="page">Escort</a>"#));
        assert_eq!(html.matches("aria-current").count(), 1);
        assert!(html.contains(r#"<a href="/about" class="nav-link">About Us</a>"#));
    }

    #[test]
    fn test_has_runtime_hooks() {
        let html = render_navigation("DSIGNER'S", None, &["hello@dsigners.in".to_string()]);
        assert!(html.contains("data-nav"));
        assert!(html.contains("data-menu-toggle"));
        assert!(html.contains(r#"id="mobile-menu""#));
        assert!(html.contains(r#"<span class="cart-badge">0</span>"#));
        assert!(html.contains("<p>hello@dsigners.in</p>"));
        assert!(!html.contains("aria-current"));
    }
}
