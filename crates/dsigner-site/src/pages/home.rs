//! Home page.

use dsigner_core::Route;
use dsigner_motion::{
    AutoAdvance, Carousel, CarouselSpec, Edge, RevealCoordinator, StyleState, ThresholdSpec,
};

use super::{Composition, RenderContext};
use crate::error::SiteError;
use crate::motion::{
    glow_pulse, hero_entrance, light_sweep, magnetic_buttons, parallax_scrub, section_reveal,
    SECTION_THRESHOLD,
};
use crate::sections::{
    render_collections, render_cta, render_features, render_hero, render_parallax,
    render_testimonials, CAROUSEL_TARGET,
};

pub(super) fn compose(
    ctx: &RenderContext<'_>,
    motion: &mut RevealCoordinator,
) -> Result<Composition, SiteError> {
    let content = ctx.content;
    let mut page = Composition::default();

    page.push("hero", render_hero(&content.hero, "home", None));
    hero_entrance(motion)?;
    light_sweep(motion)?;

    page.push("collections", render_collections(&content.collections));
    section_reveal(motion, "#collections", SECTION_THRESHOLD)?;

    page.push("features", render_features(&content.features));
    section_reveal(motion, "#features", ThresholdSpec::new(Edge::Top, 0.75))?;

    page.push("parallax", render_parallax(&content.parallax));
    parallax_scrub(
        motion,
        ".parallax-bg",
        StyleState::new().y(-80.0),
        StyleState::new().y(80.0),
    )?;
    section_reveal(motion, ".parallax", ThresholdSpec::new(Edge::Top, 0.6))?;

    let carousel = Carousel::starting_at(content.testimonials.testimonials.len(), ctx.state.slide)?;
    page.push(
        "testimonials",
        render_testimonials(&content.testimonials, &carousel, Route::Home.path()),
    );
    section_reveal(motion, "#testimonials", SECTION_THRESHOLD)?;
    page.carousel = Some(CarouselSpec::new(
        CAROUSEL_TARGET,
        &carousel,
        &AutoAdvance::new(ctx.config.carousel.interval_ms),
    ));

    page.push("cta", render_cta(&content.cta));
    section_reveal(motion, "#begin", ThresholdSpec::new(Edge::Top, 0.85))?;
    glow_pulse(motion)?;
    magnetic_buttons(motion, "#begin")?;

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::super::tests::Fixture;
    use dsigner_core::Route;

    #[test]
    fn test_section_order() {
        let page = Fixture::new("").page(Some(Route::Home));
        let names: Vec<&str> = page.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["hero", "collections", "features", "parallax", "testimonials", "cta"]
        );
    }

    #[test]
    fn test_home_nav_is_active() {
        let html = Fixture::new("").page(Some(Route::Home)).render();
        assert!(html.contains(r#"class="nav-link active" aria-current="page">Home</a>"#));
    }

    #[test]
    fn test_slide_query_selects_testimonial() {
        let page = Fixture::new("slide=2").page(Some(Route::Home));
        let html = page.render();
        assert!(html.contains(r#"data-slide="2">"#));
        assert!(html.contains(r#"data-slide="0" hidden>"#));
        assert!(html.contains(r#""start":2"#));
    }

    #[test]
    fn test_out_of_range_slide_starts_at_first() {
        let html = Fixture::new("slide=40").page(Some(Route::Home)).render();
        assert!(html.contains(r#"data-slide="0">"#));
        assert!(html.contains(r#""start":0"#));
    }

    #[test]
    fn test_cta_button_is_magnetic() {
        let html = Fixture::new("").page(Some(Route::Home)).render();
        assert!(html.contains(r##""kind":"magnetic","target":"#begin [data-magnetic]""##));
        assert!(!html.contains(r#""kind":"tilt""#));
    }

    #[test]
    fn test_configured_interval_reaches_runtime() {
        let mut fixture = Fixture::new("");
        fixture.config.carousel.interval_ms = 8000;
        let html = fixture.page(Some(Route::Home)).render();
        assert!(html.contains(r#""interval_ms":8000"#));
    }
}
