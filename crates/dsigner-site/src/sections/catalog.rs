//! Product grid, cards and the catalog toolbars.

use dsigner_catalog::prelude::*;

use crate::html::{active_class, html_escape, image_with_fallback, title_case};
use crate::state::PageState;
use crate::toggle::TOGGLE_PATH;

/// Per-card rendering inputs.
#[derive(Debug, Clone)]
pub struct CardOptions<'a> {
    /// Whether the product is in the wishlist.
    pub liked: bool,
    /// Where the wishlist toggle redirects back to.
    pub return_to: String,
    /// Image used when the product image fails to load.
    pub fallback: &'a str,
    /// Link that opens the detail view, if the line has one.
    pub detail_href: Option<String>,
    /// Label of the purchase button.
    pub action_label: &'a str,
}

/// Anchor id of a product card.
pub fn card_anchor(id: ProductId) -> String {
    format!("product-{}", id)
}

/// Render the wishlist toggle for one product.
///
/// A plain form POST, so it works without script; the endpoint redirects
/// back to `return_to`.
pub fn render_wishlist_button(id: ProductId, liked: bool, return_to: &str) -> String {
    format!(
        r#"<form method="post" action="{}" class="wishlist-form">
                <input type="hidden" name="id" value="{}">
                <input type="hidden" name="return_to" value="{}">
                <button type="submit" class="wishlist-btn{}" aria-pressed="{}" aria-label="{} wishlist">{}</button>
            </form>"#,
        TOGGLE_PATH,
        id,
        html_escape(return_to),
        active_class(liked),
        liked,
        if liked { "Remove from" } else { "Add to" },
        if liked { "&#9829;" } else { "&#9825;" }
    )
}

/// Render one product card.
pub fn render_product_card<T: CatalogItem>(product: &T, opts: &CardOptions<'_>) -> String {
    let image = image_with_fallback(
        product.image().src(),
        product.name(),
        "product-img",
        opts.fallback,
    );

    let media = match &opts.detail_href {
        Some(href) => format!(
            r#"<a href="{}" class="product-media">{}<span class="quick-view">Quick View</span></a>"#,
            html_escape(href),
            image
        ),
        None => format!(r#"<div class="product-media">{}</div>"#, image),
    };

    let series = product
        .category()
        .map(|c| format!(r#"<p class="product-series">{}</p>"#, title_case(c.as_str())))
        .unwrap_or_default();

    format!(
        r#"<article id="{}" class="product-card">
            {}
            <div class="product-info">
                {}
                <h3 class="product-name">{}</h3>
                <p class="product-price">{}</p>
            </div>
            <div class="product-actions">
                <button type="button" class="btn-buy">{}</button>
                {}
            </div>
        </article>"#,
        card_anchor(product.id()),
        media,
        series,
        html_escape(product.name()),
        product.price().display(),
        html_escape(opts.action_label),
        render_wishlist_button(product.id(), opts.liked, &opts.return_to)
    )
}

/// Render the catalog section: toolbar and grid.
///
/// An empty view renders an empty-state message instead of a grid.
pub fn render_catalog(toolbar: &str, cards: &[String]) -> String {
    let grid = if cards.is_empty() {
        r#"<p class="grid-empty">No timepieces match this selection.</p>"#.to_string()
    } else {
        format!(r#"<div class="product-grid" data-grid>{}</div>"#, cards.concat())
    };

    format!(
        r#"<section id="collection" class="catalog" data-section="catalog">
    {}
    {}
</section>"#,
        toolbar, grid
    )
}

/// Designer category tabs. Each tab is a link, so filtering needs no script.
pub fn render_designer_filters(state: &PageState) -> String {
    let tabs: String = CategoryFilter::<DesignerCategory>::tabs()
        .into_iter()
        .map(|tab| {
            let href = PageState::designer_url(&state.designer.set_category(tab));
            let active = tab == state.designer.active_category;
            format!(
                r##"<a href="{}#collection" class="filter-tab{}"{}>{}</a>"##,
                href,
                active_class(active),
                if active { r#" aria-current="true""# } else { "" },
                tab.as_str()
            )
        })
        .collect();

    format!(
        r#"<nav class="filter-bar" aria-label="Filter by series">{}</nav>"#,
        tabs
    )
}

/// Escort style tabs and sort control.
///
/// Style tabs are kept in the URL but do not narrow the list.
pub fn render_escort_toolbar(state: &PageState) -> String {
    let tabs: String = CategoryFilter::<EscortStyle>::tabs()
        .into_iter()
        .map(|tab| {
            let href = PageState::escort_url(&state.escort.set_category(tab));
            format!(
                r##"<a href="{}#collection" class="filter-tab{}">{}</a>"##,
                href,
                active_class(tab == state.escort.active_category),
                tab.as_str()
            )
        })
        .collect();

    let style_input = match state.escort.active_category {
        CategoryFilter::Only(style) => format!(
            r#"<input type="hidden" name="style" value="{}">"#,
            style.as_str()
        ),
        CategoryFilter::All => String::new(),
    };

    let options: String = SortKey::ALL
        .iter()
        .map(|key| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                key.as_str(),
                if *key == state.escort.sort_key { " selected" } else { "" },
                key.display_name()
            )
        })
        .collect();

    format!(
        r##"<div class="catalog-toolbar">
        <nav class="filter-bar" aria-label="Style">{}</nav>
        <form method="get" action="/escort#collection" class="sort-form">
            {}
            <label for="sort">Sort by</label>
            <select id="sort" name="sort" onchange="this.form.submit()">{}</select>
            <noscript><button type="submit">Apply</button></noscript>
        </form>
    </div>"##,
        tabs, style_input, options
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsigner_core::QueryParams;

    fn state(query: &str) -> PageState {
        PageState::from_query(&QueryParams::parse(query))
    }

    fn options<'a>(liked: bool) -> CardOptions<'a> {
        CardOptions {
            liked,
            return_to: "/escort#product-104".to_string(),
            fallback: "/watch-hero-black.png",
            detail_href: None,
            action_label: "Add To Cart",
        }
    }

    #[test]
    fn test_wishlist_button_reflects_state() {
        let off = render_wishlist_button(ProductId::new(104), false, "/escort");
        assert!(off.contains(r#"aria-pressed="false""#));
        assert!(off.contains(r#"<input type="hidden" name="id" value="104">"#));
        assert!(off.contains(r#"action="/wishlist""#));

        let on = render_wishlist_button(ProductId::new(104), true, "/escort");
        assert!(on.contains(r#"class="wishlist-btn active""#));
        assert!(on.contains("Remove from wishlist"));
    }

    #[test]
    fn test_card_escapes_return_to() {
        let catalog = escort_catalog();
        let product = catalog.find(ProductId::new(104)).unwrap();
        let mut opts = options(true);
        opts.return_to = "/escort?style=sport&sort=price-low".to_string();
        let html = render_product_card(product, &opts);

        assert!(html.contains(r#"id="product-104""#));
        assert!(html.contains("Escort Rose Gold"));
        assert!(html.contains("₹8,999"));
        assert!(html.contains(r#"value="/escort?style=sport&amp;sort=price-low""#));
        assert!(!html.contains("product-series"));
        assert!(!html.contains("Quick View"));
    }

    #[test]
    fn test_designer_card_links_to_detail() {
        let catalog = designer_catalog();
        let product = catalog.find(ProductId::new(2)).unwrap();
        let mut opts = options(false);
        opts.detail_href = Some("/designer?selected=2".to_string());
        let html = render_product_card(product, &opts);

        assert!(html.contains(r#"<a href="/designer?selected=2" class="product-media">"#));
        assert!(html.contains(r#"<p class="product-series">Heritage</p>"#));
        assert!(html.contains("₹1,09,999"));
    }

    #[test]
    fn test_empty_catalog_shows_message() {
        let html = render_catalog("", &[]);
        assert!(html.contains("grid-empty"));
        assert!(!html.contains("data-grid"));
    }

    #[test]
    fn test_designer_filters_mark_active_tab() {
        let html = render_designer_filters(&state("category=elite&selected=3"));
        assert!(html.contains(r##"<a href="/designer?category=elite#collection" class="filter-tab active" aria-current="true">elite</a>"##));
        assert!(html.contains(r##"<a href="/designer#collection" class="filter-tab">all</a>"##));
    }

    #[test]
    fn test_escort_toolbar_keeps_sort_and_style() {
        let html = render_escort_toolbar(&state("style=leather&sort=price-high"));
        assert!(html.contains(r##"href="/escort?style=sport&sort=price-high#collection""##));
        assert!(html.contains(r#"<input type="hidden" name="style" value="leather">"#));
        assert!(html.contains(r#"<option value="price-high" selected>Price: High</option>"#));
        assert!(html.contains(r#"class="filter-tab active">leather</a>"#));
    }
}
