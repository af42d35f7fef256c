//! Designer detail overlay and sticky purchase bar.

use dsigner_catalog::prelude::*;

use crate::content::DesignerContent;
use crate::html::{html_escape, image_with_fallback, title_case};
use crate::sections::render_wishlist_button;

/// Render the detail overlay for an open product.
///
/// Closing is a link to `close_href`; toggling the wishlist returns to
/// `return_to`, which keeps the overlay open.
pub fn render_detail(
    product: &DesignerProduct,
    content: &DesignerContent,
    liked: bool,
    close_href: &str,
    return_to: &str,
    fallback: &str,
) -> String {
    let specs = [
        ("Movement", content.movement.as_str()),
        ("Strap", product.strap.label()),
        ("Glass", content.glass.as_str()),
        ("Resistance", content.resistance.as_str()),
    ];
    let spec_grid: String = specs
        .iter()
        .map(|(label, value)| {
            format!(
                "<div><dt>{}</dt><dd>{}</dd></div>",
                label,
                html_escape(value)
            )
        })
        .collect();

    format!(
        r#"<div class="detail-overlay" role="dialog" aria-modal="true" aria-labelledby="detail-title" data-section="detail">
    <a href="{close}" class="detail-backdrop" aria-label="Close"></a>
    <div class="detail-panel">
        <a href="{close}" class="detail-close" aria-label="Close">&#10005;</a>
        <div class="detail-media">{image}</div>
        <div class="detail-body">
            <p class="eyebrow">{series} Series</p>
            <h2 id="detail-title">{name}</h2>
            <p class="detail-price">{price}</p>
            <p class="detail-description">{description}</p>
            <dl class="spec-grid">{specs}</dl>
            <div class="detail-actions">
                <button type="button" class="btn-primary">Add to Cart</button>
                {wishlist}
            </div>
        </div>
    </div>
</div>"#,
        close = html_escape(close_href),
        image = image_with_fallback(product.image.src(), &product.name, "detail-img", fallback),
        series = title_case(product.category.as_str()),
        name = html_escape(&product.name),
        price = product.price.display(),
        description = html_escape(&product.description),
        specs = spec_grid,
        wishlist = render_wishlist_button(product.id, liked, return_to)
    )
}

/// Render the sticky purchase bar shown while a product is open.
pub fn render_sticky_bar(product: &DesignerProduct, close_href: &str, fallback: &str) -> String {
    format!(
        r#"<div class="sticky-bar" data-section="sticky-bar">
    {}
    <div class="sticky-info"><h4>{}</h4><p>{}</p></div>
    <button type="button" class="btn-primary">Add to Cart</button>
    <a href="{}" class="sticky-close" aria-label="Close">&#10005;</a>
</div>"#,
        image_with_fallback(product.image.src(), &product.name, "sticky-img", fallback),
        html_escape(&product.name),
        product.price.display(),
        html_escape(close_href)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_spec_grid() {
        let catalog = designer_catalog();
        let product = catalog.find(ProductId::new(6)).unwrap();
        let html = render_detail(
            product,
            &DesignerContent::default(),
            true,
            "/designer?category=elite",
            "/designer?category=elite&selected=6",
            "/watch-hero-black.png",
        );

        assert!(html.contains("<dt>Strap</dt><dd>Leather</dd>"));
        assert!(html.contains("<dt>Resistance</dt><dd>10 ATM (100m)</dd>"));
        assert!(html.contains("Elite Series"));
        assert!(html.contains("₹3,49,999"));
        assert!(html.contains(r#"href="/designer?category=elite" class="detail-close""#));
        assert!(html.contains(r#"value="/designer?category=elite&amp;selected=6""#));
        assert!(html.contains(r#"aria-pressed="true""#));
    }

    #[test]
    fn test_sticky_bar() {
        let catalog = designer_catalog();
        let product = catalog.find(ProductId::new(1)).unwrap();
        let html = render_sticky_bar(product, "/designer", "/watch-hero-black.png");
        assert!(html.contains("<h4>Chrono X7 Onyx</h4>"));
        assert!(html.contains(r#"href="/designer" class="sticky-close""#));
    }
}
