//! Animation presets shared by the pages.

use dsigner_motion::{
    Ease, Edge, MotionError, PointerEffect, RevealCoordinator, StyleState, ThresholdSpec, Tween,
    REPEAT_FOREVER,
};

/// Line a section crosses before its content reveals.
pub const SECTION_THRESHOLD: ThresholdSpec = ThresholdSpec::new(Edge::Top, 0.7);

/// Line a product card crosses before it reveals.
pub const GRID_THRESHOLD: ThresholdSpec = ThresholdSpec::new(Edge::Top, 0.85);

/// Staggered fade-in of the hero copy on load.
pub fn hero_entrance(motion: &mut RevealCoordinator) -> Result<(), MotionError> {
    motion.on_load(
        "[data-hero] [data-reveal]",
        Tween::fade_up(30.0)
            .duration(1.0)
            .stagger(0.15)
            .delay(0.3)
            .ease(Ease::Power3Out),
    )?;
    Ok(())
}

/// Seconds the light sweep rests between passes.
pub const LIGHT_SWEEP_REST: f64 = 7.0;

/// Light streak that crosses hero images forever, resting between passes.
pub fn light_sweep(motion: &mut RevealCoordinator) -> Result<(), MotionError> {
    motion.on_load(
        ".light-sweep",
        Tween::new(StyleState::new().left_pct(-100.0), StyleState::new().left_pct(200.0))
            .duration(2.5)
            .ease(Ease::Power2InOut)
            .repeat(REPEAT_FOREVER)
            .repeat_delay(LIGHT_SWEEP_REST),
    )?;
    Ok(())
}

/// One-shot reveal of the `[data-reveal]` elements inside `scope`.
pub fn section_reveal(
    motion: &mut RevealCoordinator,
    scope: &str,
    threshold: ThresholdSpec,
) -> Result<(), MotionError> {
    motion.on_enter_viewport(
        &format!("{} [data-reveal]", scope),
        threshold,
        Tween::fade_up(40.0).duration(0.9).stagger(0.12).ease(Ease::Power2Out),
        true,
    )?;
    Ok(())
}

/// Batch reveal of product cards.
///
/// The grid is rendered fresh for every filter or sort change, so each new
/// page load re-arms it.
pub fn grid_reveal(motion: &mut RevealCoordinator) -> Result<(), MotionError> {
    motion.on_enter_viewport(
        "[data-grid] .product-card",
        GRID_THRESHOLD,
        Tween::new(
            StyleState::new().opacity(0.0).y(30.0).scale(0.98),
            StyleState::new().opacity(1.0).y(0.0).scale(1.0),
        )
        .duration(0.6)
        .stagger(0.08)
        .ease(Ease::Power2Out),
        true,
    )?;
    Ok(())
}

/// Scroll-bound drift of a background or image while it passes the viewport.
pub fn parallax_scrub(
    motion: &mut RevealCoordinator,
    target: &str,
    from: StyleState,
    to: StyleState,
) -> Result<(), MotionError> {
    motion.scrub(
        target,
        ThresholdSpec::new(Edge::Top, 1.0),
        ThresholdSpec::new(Edge::Bottom, 0.0),
        Tween::new(from, to),
    )?;
    Ok(())
}

/// Hero image tilts toward the pointer while the spotlight follows it.
pub fn hero_tilt(motion: &mut RevealCoordinator, variant: &str) -> Result<(), MotionError> {
    let hero = format!(".hero-{}", variant);
    motion.on_pointer(PointerEffect::tilt(
        &hero,
        &format!("{} .hero-img", hero),
        Some(&format!("{} .hero-spotlight", hero)),
    ))
}

/// Buttons wrapped in `[data-magnetic]` lean toward the pointer.
pub fn magnetic_buttons(motion: &mut RevealCoordinator, scope: &str) -> Result<(), MotionError> {
    motion.on_pointer(PointerEffect::magnetic(&format!("{} [data-magnetic]", scope)))
}

/// Slow pulse of the CTA glow.
pub fn glow_pulse(motion: &mut RevealCoordinator) -> Result<(), MotionError> {
    motion.on_load(
        ".cta-glow",
        Tween::new(
            StyleState::new().opacity(0.4).scale(1.0),
            StyleState::new().opacity(0.8).scale(1.1),
        )
        .duration(3.0)
        .ease(Ease::Power2InOut)
        .repeat(REPEAT_FOREVER)
        .yoyo(true),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsigner_motion::{TargetBox, Viewport};

    #[test]
    fn test_presets_register() {
        let mut motion = RevealCoordinator::new();
        hero_entrance(&mut motion).unwrap();
        light_sweep(&mut motion).unwrap();
        section_reveal(&mut motion, "#features", SECTION_THRESHOLD).unwrap();
        grid_reveal(&mut motion).unwrap();
        glow_pulse(&mut motion).unwrap();
        parallax_scrub(
            &mut motion,
            ".parallax-bg",
            StyleState::new().y(-60.0),
            StyleState::new().y(60.0),
        )
        .unwrap();
        assert_eq!(motion.len(), 6);
    }

    #[test]
    fn test_pointer_presets() {
        let mut motion = RevealCoordinator::new();
        hero_tilt(&mut motion, "designer").unwrap();
        magnetic_buttons(&mut motion, "#begin").unwrap();
        assert_eq!(
            motion.pointer_effects(),
            &[
                PointerEffect::tilt(
                    ".hero-designer",
                    ".hero-designer .hero-img",
                    Some(".hero-designer .hero-spotlight"),
                ),
                PointerEffect::magnetic("#begin [data-magnetic]"),
            ]
        );
        assert!(motion.is_empty());
    }

    #[test]
    fn test_grid_reveal_fires_once() {
        let mut motion = RevealCoordinator::new();
        grid_reveal(&mut motion).unwrap();
        let card = TargetBox::new(1000.0, 300.0);

        assert!(motion.observe(&Viewport::new(0.0, 800.0), |_| Some(card)).is_empty());
        let viewport = Viewport::new(400.0, 800.0);
        assert_eq!(motion.observe(&viewport, |_| Some(card)).len(), 1);
        assert!(motion.observe(&viewport.scrolled_to(0.0), |_| Some(card)).is_empty());
        assert!(motion.observe(&viewport, |_| Some(card)).is_empty());
    }

    #[test]
    fn test_looping_presets() {
        let mut motion = RevealCoordinator::new();
        light_sweep(&mut motion).unwrap();
        glow_pulse(&mut motion).unwrap();
        assert!(motion.triggers().iter().all(|t| t.tween.iterations().is_none()));
        assert!(motion.triggers()[1].tween.yoyo);
    }

    #[test]
    fn test_light_sweep_rests_before_each_pass() {
        let mut motion = RevealCoordinator::new();
        light_sweep(&mut motion).unwrap();
        let tween = &motion.triggers()[0].tween;
        assert_eq!(tween.repeat_delay, 7.0);
        assert!((tween.cycle() - 9.5).abs() < 1e-9);
    }
}
