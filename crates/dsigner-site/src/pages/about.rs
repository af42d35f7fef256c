//! About page: philosophy, values and milestones.

use dsigner_motion::{RevealCoordinator, StyleState};

use super::{Composition, RenderContext};
use crate::error::SiteError;
use crate::motion::{hero_entrance, parallax_scrub, section_reveal, SECTION_THRESHOLD};
use crate::sections::{render_card_grid, render_hero, render_milestones, render_story};

pub(super) fn compose(
    ctx: &RenderContext<'_>,
    motion: &mut RevealCoordinator,
) -> Result<Composition, SiteError> {
    let about = &ctx.content.about;
    let mut page = Composition::default();

    page.push("hero", render_hero(&about.hero, "about", None));
    hero_entrance(motion)?;

    page.push("story", render_story(about));
    section_reveal(motion, "#story", SECTION_THRESHOLD)?;
    parallax_scrub(
        motion,
        ".story-media img",
        StyleState::new().scale(1.1),
        StyleState::new().scale(1.0),
    )?;

    page.push("values", render_card_grid("values", &about.values, &about.value_cards));
    section_reveal(motion, "#values", SECTION_THRESHOLD)?;

    page.push("milestones", render_milestones(&about.milestones, &about.milestone_list));
    section_reveal(motion, "#milestones", SECTION_THRESHOLD)?;

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::super::tests::Fixture;
    use dsigner_core::Route;

    #[test]
    fn test_about_content() {
        let page = Fixture::new("").page(Some(Route::About));
        let html = page.render();
        assert!(html.contains("Crafting Time"));
        assert!(html.contains(r#"id="values""#));
        assert!(html.contains("Swiss Integration"));
        assert!(html.contains(r#"class="nav-link active" aria-current="page">About Us</a>"#));
        assert!(!html.contains("data-carousel"));
    }
}
