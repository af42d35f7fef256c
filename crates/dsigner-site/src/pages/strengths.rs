//! Strengths page: scale, infrastructure, divisions and the partner enquiry.

use dsigner_motion::{Edge, RevealCoordinator, ThresholdSpec};

use super::{Composition, RenderContext};
use crate::error::SiteError;
use crate::motion::{hero_entrance, section_reveal, SECTION_THRESHOLD};
use crate::sections::{render_card_grid, render_enquiry_form, render_hero, render_stats_band};

pub(super) fn compose(
    ctx: &RenderContext<'_>,
    motion: &mut RevealCoordinator,
) -> Result<Composition, SiteError> {
    let strengths = &ctx.content.strengths;
    let mut page = Composition::default();

    page.push("hero", render_hero(&strengths.hero, "strengths", None));
    hero_entrance(motion)?;

    page.push("stats", render_stats_band(&strengths.stats));
    section_reveal(motion, "#stats", ThresholdSpec::new(Edge::Top, 0.85))?;

    page.push(
        "infrastructure",
        render_card_grid(
            "infrastructure",
            &strengths.infrastructure,
            &strengths.infrastructure_cards,
        ),
    );
    section_reveal(motion, "#infrastructure", SECTION_THRESHOLD)?;

    page.push(
        "divisions",
        render_card_grid("divisions", &strengths.divisions, &strengths.division_cards),
    );
    section_reveal(motion, "#divisions", SECTION_THRESHOLD)?;

    page.push("partner", render_enquiry_form("partner", &strengths.partner_form));
    section_reveal(motion, "#partner", SECTION_THRESHOLD)?;

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::super::tests::Fixture;
    use dsigner_core::Route;

    #[test]
    fn test_strengths_sections() {
        let page = Fixture::new("").page(Some(Route::Strengths));
        let names: Vec<&str> = page.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["hero", "stats", "infrastructure", "divisions", "partner"]);

        let html = page.render();
        assert!(html.contains("OEM / ODM Manufacturing"));
        assert!(html.contains("Private Label Client"));
    }
}
