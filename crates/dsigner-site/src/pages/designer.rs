//! Designer page: showcase, filterable collection and detail view.

use dsigner_catalog::prelude::*;
use dsigner_motion::{RevealCoordinator, StyleState};

use super::{Composition, RenderContext};
use crate::error::SiteError;
use crate::motion::{
    grid_reveal, hero_entrance, hero_tilt, light_sweep, parallax_scrub, section_reveal,
    SECTION_THRESHOLD,
};
use crate::sections::{
    card_anchor, render_card_grid, render_catalog, render_designer_filters, render_detail,
    render_hero, render_product_card, render_showcase, render_sticky_bar, render_texture,
    CardOptions,
};

pub(super) fn compose(
    ctx: &RenderContext<'_>,
    motion: &mut RevealCoordinator,
) -> Result<Composition, SiteError> {
    let designer = &ctx.content.designer;
    let state = ctx.state;
    let fallback = ctx.fallback_image();
    let catalog = designer_catalog();
    let selection = state.selection(&catalog);
    let current_url = state.designer_url_with(selection);
    let mut page = Composition::default();

    page.push("hero", render_hero(&designer.hero, "designer", None));
    hero_entrance(motion)?;
    light_sweep(motion)?;
    hero_tilt(motion, "designer")?;

    let featured = Selection::Closed.select(ProductId::new(designer.showcase.product_id));
    page.push(
        "showcase",
        render_showcase(&designer.showcase, &state.designer_url_with(featured)),
    );
    section_reveal(motion, "#showcase", SECTION_THRESHOLD)?;
    parallax_scrub(
        motion,
        ".showcase-img",
        StyleState::new().scale(1.0),
        StyleState::new().scale(1.02),
    )?;

    let cards: Vec<String> = derive(&catalog, &state.designer)
        .into_iter()
        .map(|product| {
            let opts = CardOptions {
                liked: ctx.wishlist.contains(product.id),
                return_to: format!("{}#{}", current_url, card_anchor(product.id)),
                fallback,
                detail_href: Some(state.designer_url_with(selection.select(product.id))),
                action_label: "Buy Now",
            };
            render_product_card(product, &opts)
        })
        .collect();
    page.push("catalog", render_catalog(&render_designer_filters(state), &cards));
    grid_reveal(motion)?;

    page.push("texture", render_texture(&designer.texture));
    section_reveal(motion, "#texture", SECTION_THRESHOLD)?;
    parallax_scrub(
        motion,
        ".texture-img",
        StyleState::new().y(-40.0),
        StyleState::new().y(40.0),
    )?;

    page.push("craft", render_card_grid("craft", &designer.craft, &designer.craft_cards));
    section_reveal(motion, "#craft", SECTION_THRESHOLD)?;

    if let Some(product) = selection.product(&catalog) {
        let close_href = state.designer_url_with(selection.dismiss());
        page.push(
            "detail",
            render_detail(
                product,
                designer,
                ctx.wishlist.contains(product.id),
                &close_href,
                &current_url,
                fallback,
            ),
        );
        page.push("sticky-bar", render_sticky_bar(product, &close_href, fallback));
    }

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::super::tests::Fixture;
    use dsigner_core::Route;

    fn card_ids(html: &str) -> Vec<i64> {
        html.match_indices(r#"<article id="product-"#)
            .map(|(i, m)| {
                let rest = &html[i + m.len()..];
                rest[..rest.find('"').unwrap()].parse().unwrap()
            })
            .collect()
    }

    #[test]
    fn test_all_products_in_catalog_order() {
        let html = Fixture::new("").page(Some(Route::Designer)).render();
        assert_eq!(card_ids(&html), vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(html.contains("₹2,99,999"));
    }

    #[test]
    fn test_heritage_filter() {
        let html = Fixture::new("category=heritage").page(Some(Route::Designer)).render();
        assert_eq!(card_ids(&html), vec![2, 5, 8]);
        assert!(html.contains(r##"class="filter-tab active" aria-current="true">heritage</a>"##));
    }

    #[test]
    fn test_sort_param_is_ignored() {
        let html = Fixture::new("sort=price-high").page(Some(Route::Designer)).render();
        assert_eq!(card_ids(&html), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_closed_by_default() {
        let page = Fixture::new("").page(Some(Route::Designer));
        assert!(!page.sections.iter().any(|s| s.name == "detail" || s.name == "sticky-bar"));
    }

    #[test]
    fn test_selected_opens_detail_and_sticky_bar() {
        let page = Fixture::new("category=elite&selected=6").page(Some(Route::Designer));
        let names: Vec<&str> = page.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names[names.len() - 2..], ["detail", "sticky-bar"]);

        let html = page.render();
        assert!(html.contains(r#"<h2 id="detail-title">Elite Midnight</h2>"#));
        assert!(html.contains(r#"href="/designer?category=elite" class="detail-close""#));
        assert!(html.contains(r#"value="/designer?category=elite&amp;selected=6""#));
    }

    #[test]
    fn test_stale_selection_stays_closed() {
        let page = Fixture::new("selected=104").page(Some(Route::Designer));
        assert!(!page.render().contains("detail-overlay"));
    }

    #[test]
    fn test_quick_view_keeps_filter() {
        let html = Fixture::new("category=chrono").page(Some(Route::Designer)).render();
        assert!(html.contains(r#"<a href="/designer?category=chrono&amp;selected=4" class="product-media">"#));
    }

    #[test]
    fn test_liked_state_on_card_and_detail() {
        let html = Fixture::new("selected=3")
            .liking(&[3])
            .page(Some(Route::Designer))
            .render();
        assert_eq!(html.matches(r#"class="wishlist-btn active""#).count(), 2);
        assert!(html.contains(r#"value="/designer?selected=3#product-3""#));
    }

    #[test]
    fn test_showcase_reserves_featured_product() {
        let html = Fixture::new("category=heritage").page(Some(Route::Designer)).render();
        assert!(html.contains(r#"href="/designer?category=heritage&amp;selected=3" class="btn-primary""#));
    }

    #[test]
    fn test_hero_tilt_reaches_runtime() {
        let html = Fixture::new("").page(Some(Route::Designer)).render();
        assert!(html.contains(r#"<div class="hero-spotlight"></div>"#));
        assert!(html.contains(r#""kind":"tilt","area":".hero-designer""#));
    }

    #[test]
    fn test_fallback_image_configured() {
        let mut fixture = Fixture::new("");
        fixture.config.assets.fallback_image = "/fallback.png".to_string();
        let html = fixture.page(Some(Route::Designer)).render();
        assert!(html.contains("this.src=&quot;/fallback.png&quot;"));
    }
}
