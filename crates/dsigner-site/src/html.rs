//! HTML helpers shared by the section renderers.

/// Escape text for element content and double-quoted attributes.
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Join a path and a query string, dropping an empty query.
pub(crate) fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

/// Class attribute suffix for an active element.
pub(crate) fn active_class(active: bool) -> &'static str {
    if active {
        " active"
    } else {
        ""
    }
}

/// "heritage" -> "Heritage".
pub(crate) fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Eyebrow, headline and accented tail shared by most sections.
///
/// Empty parts are left out.
pub(crate) fn heading(tag: &str, eyebrow: &str, title: &str, accent: &str) -> String {
    let mut html = String::new();
    if !eyebrow.is_empty() {
        html.push_str(&format!(
            r#"<p class="eyebrow" data-reveal>{}</p>"#,
            html_escape(eyebrow)
        ));
    }
    let accent_html = if accent.is_empty() {
        String::new()
    } else {
        format!(r#" <span class="accent">{}</span>"#, html_escape(accent))
    };
    html.push_str(&format!(
        "<{tag} data-reveal>{}{}</{tag}>",
        html_escape(title),
        accent_html,
        tag = tag
    ));
    html
}

/// An image that swaps to `fallback` if it fails to load.
pub(crate) fn image_with_fallback(src: &str, alt: &str, class: &str, fallback: &str) -> String {
    // JSON string syntax is valid JS; escaping it again makes it attribute-safe.
    let fallback_js = serde_json::to_string(fallback).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"<img src="{}" alt="{}" class="{}" loading="lazy" onerror="this.onerror=null;this.src={}">"#,
        html_escape(src),
        html_escape(alt),
        class,
        html_escape(&fallback_js)
    )
}
