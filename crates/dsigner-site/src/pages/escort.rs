//! Escort page: sortable everyday collection.

use dsigner_catalog::prelude::*;
use dsigner_motion::RevealCoordinator;

use super::{Composition, RenderContext};
use crate::error::SiteError;
use crate::motion::{grid_reveal, hero_entrance, light_sweep, section_reveal, SECTION_THRESHOLD};
use crate::sections::{
    card_anchor, render_card_grid, render_catalog, render_closing_banner, render_comparison,
    render_escort_toolbar, render_hero, render_product_card, CardOptions,
};
use crate::state::PageState;

pub(super) fn compose(
    ctx: &RenderContext<'_>,
    motion: &mut RevealCoordinator,
) -> Result<Composition, SiteError> {
    let escort = &ctx.content.escort;
    let state = ctx.state;
    let catalog = escort_catalog();
    let current_url = PageState::escort_url(&state.escort);
    let mut page = Composition::default();

    page.push("hero", render_hero(&escort.hero, "escort", Some(&escort.social_proof)));
    hero_entrance(motion)?;
    light_sweep(motion)?;

    let cards: Vec<String> = derive(&catalog, &state.escort)
        .into_iter()
        .map(|product| {
            let opts = CardOptions {
                liked: ctx.wishlist.contains(product.id),
                return_to: format!("{}#{}", current_url, card_anchor(product.id)),
                fallback: ctx.fallback_image(),
                detail_href: None,
                action_label: "Add To Cart",
            };
            render_product_card(product, &opts)
        })
        .collect();
    page.push("catalog", render_catalog(&render_escort_toolbar(state), &cards));
    grid_reveal(motion)?;

    page.push("comfort", render_card_grid("comfort", &escort.comfort, &escort.comfort_cards));
    section_reveal(motion, "#comfort", SECTION_THRESHOLD)?;

    page.push("comparison", render_comparison(&escort.comparison));
    section_reveal(motion, "#comparison", SECTION_THRESHOLD)?;

    let (text, url) = &escort.secondary_cta;
    page.push(
        "closing",
        render_closing_banner(&escort.closing, Some((text.as_str(), url.as_str()))),
    );
    section_reveal(motion, "#closing", SECTION_THRESHOLD)?;

    Ok(page)
}
