//! Scroll-reveal coordination.

use std::ops::{Deref, DerefMut};

use serde::Serialize;

use crate::carousel::CarouselSpec;
use crate::error::MotionError;
use crate::pointer::PointerEffect;
use crate::threshold::{TargetBox, ThresholdSpec, Viewport};
use crate::tween::Tween;

/// Handle to a registered trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TriggerId(usize);

/// What starts a tween.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TriggerKind {
    /// Plays once when the page loads.
    Load,
    /// Plays when the target crosses `threshold`.
    Enter { threshold: ThresholdSpec, once: bool },
    /// Progress tracks scrolling between `start` and `end`.
    Scrub {
        start: ThresholdSpec,
        end: ThresholdSpec,
    },
}

/// A registered trigger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trigger {
    pub id: TriggerId,
    /// CSS selector; every match animates, staggered in document order.
    pub target: String,
    #[serde(flatten)]
    pub kind: TriggerKind,
    pub tween: Tween,
    #[serde(skip)]
    inside: bool,
    #[serde(skip)]
    fired: u32,
}

impl Trigger {
    /// Times this trigger has fired.
    pub fn fire_count(&self) -> u32 {
        self.fired
    }
}

/// Collects a page's animation triggers and decides when they fire.
///
/// A coordinator lives for one page view. `teardown` detaches every
/// trigger; afterwards nothing fires and nothing can be registered.
#[derive(Debug, Default)]
pub struct RevealCoordinator {
    triggers: Vec<Trigger>,
    pointer: Vec<PointerEffect>,
    next_id: usize,
    torn_down: bool,
}

impl RevealCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    fn register(
        &mut self,
        target: &str,
        kind: TriggerKind,
        tween: Tween,
    ) -> Result<TriggerId, MotionError> {
        if self.torn_down {
            return Err(MotionError::TornDown);
        }
        tween.validate()?;
        let id = TriggerId(self.next_id);
        self.next_id += 1;
        self.triggers.push(Trigger {
            id,
            target: target.to_string(),
            kind,
            tween,
            inside: false,
            fired: 0,
        });
        Ok(id)
    }

    /// Play `tween` on page load.
    pub fn on_load(&mut self, target: &str, tween: Tween) -> Result<TriggerId, MotionError> {
        self.register(target, TriggerKind::Load, tween)
    }

    /// Play `tween` when `target` crosses `threshold`.
    ///
    /// With `once`, the trigger fires at most once per page view; otherwise
    /// it fires each time the target re-enters.
    pub fn on_enter_viewport(
        &mut self,
        target: &str,
        threshold: ThresholdSpec,
        tween: Tween,
        once: bool,
    ) -> Result<TriggerId, MotionError> {
        self.register(target, TriggerKind::Enter { threshold, once }, tween)
    }

    /// Bind `tween` progress to scrolling between two thresholds.
    pub fn scrub(
        &mut self,
        target: &str,
        start: ThresholdSpec,
        end: ThresholdSpec,
        tween: Tween,
    ) -> Result<TriggerId, MotionError> {
        self.register(target, TriggerKind::Scrub { start, end }, tween.scrub())
    }

    /// Attach a pointer effect for this page view.
    pub fn on_pointer(&mut self, effect: PointerEffect) -> Result<(), MotionError> {
        if self.torn_down {
            return Err(MotionError::TornDown);
        }
        self.pointer.push(effect);
        Ok(())
    }

    pub fn pointer_effects(&self) -> &[PointerEffect] {
        &self.pointer
    }

    /// Evaluate triggers against a viewport. Returns the ids that fire.
    ///
    /// `layout` gives the document box of a target, or `None` if the
    /// target is not on the page.
    pub fn observe<F>(&mut self, viewport: &Viewport, layout: F) -> Vec<TriggerId>
    where
        F: Fn(&str) -> Option<TargetBox>,
    {
        if self.torn_down {
            return Vec::new();
        }

        let mut fired = Vec::new();
        for trigger in &mut self.triggers {
            let fires = match &trigger.kind {
                TriggerKind::Load => trigger.fired == 0,
                TriggerKind::Enter { threshold, once } => {
                    let crossed = layout(&trigger.target)
                        .map(|b| threshold.crossed(&b, viewport))
                        .unwrap_or(false);
                    let entering = crossed && !trigger.inside;
                    trigger.inside = crossed;
                    entering && !(*once && trigger.fired > 0)
                }
                TriggerKind::Scrub { .. } => false,
            };
            if fires {
                trigger.fired += 1;
                fired.push(trigger.id);
            }
        }
        fired
    }

    /// Scrub progress from 0.0 to 1.0 for a scrub trigger.
    pub fn scrub_progress(
        &self,
        id: TriggerId,
        viewport: &Viewport,
        target: &TargetBox,
    ) -> Option<f64> {
        if self.torn_down {
            return None;
        }
        let trigger = self.triggers.iter().find(|t| t.id == id)?;
        let TriggerKind::Scrub { start, end } = &trigger.kind else {
            return None;
        };

        let scroll_at = |spec: &ThresholdSpec| {
            target.top + target.height * spec.edge.fraction() - viewport.height * spec.offset
        };
        let (from, to) = (scroll_at(start), scroll_at(end));
        if to <= from {
            return Some(if viewport.scroll_y >= to { 1.0 } else { 0.0 });
        }
        Some(((viewport.scroll_y - from) / (to - from)).clamp(0.0, 1.0))
    }

    /// Detach every trigger. Returns how many were detached.
    pub fn teardown(&mut self) -> usize {
        self.torn_down = true;
        let detached = self.triggers.len() + self.pointer.len();
        self.triggers.clear();
        self.pointer.clear();
        detached
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn triggers(&self) -> &[Trigger] {
        &self.triggers
    }

    pub fn trigger(&self, id: TriggerId) -> Option<&Trigger> {
        self.triggers.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// Borrow the coordinator for a page view; dropping the guard tears it down.
    pub fn scope(&mut self) -> TeardownGuard<'_> {
        TeardownGuard { coordinator: self }
    }

    /// Snapshot for the client runtime.
    pub fn manifest(&self) -> RevealManifest {
        RevealManifest {
            triggers: self.triggers.clone(),
            pointer: self.pointer.clone(),
            carousel: None,
            nav_scrolled_at: NAV_SCROLLED_AT,
        }
    }
}

/// Tears the coordinator down when dropped, on every exit path.
pub struct TeardownGuard<'a> {
    coordinator: &'a mut RevealCoordinator,
}

impl Deref for TeardownGuard<'_> {
    type Target = RevealCoordinator;

    fn deref(&self) -> &RevealCoordinator {
        self.coordinator
    }
}

impl DerefMut for TeardownGuard<'_> {
    fn deref_mut(&mut self) -> &mut RevealCoordinator {
        self.coordinator
    }
}

impl Drop for TeardownGuard<'_> {
    fn drop(&mut self) {
        self.coordinator.teardown();
    }
}

/// Scroll offset in pixels past which the navigation switches to its compact style.
pub const NAV_SCROLLED_AT: u32 = 100;

/// Everything the client runtime needs for one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevealManifest {
    pub triggers: Vec<Trigger>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pointer: Vec<PointerEffect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carousel: Option<CarouselSpec>,
    pub nav_scrolled_at: u32,
}

impl RevealManifest {
    pub fn with_carousel(mut self, carousel: CarouselSpec) -> Self {
        self.carousel = Some(carousel);
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// JSON data block read by the runtime at startup.
    pub fn to_script_tag(&self) -> Result<String, serde_json::Error> {
        let json = self.to_json()?.replace("</", "<\\/");
        Ok(format!(
            r#"<script type="application/json" id="{}">{}</script>"#,
            MANIFEST_ELEMENT_ID, json
        ))
    }
}

/// Element id of the manifest data block.
pub const MANIFEST_ELEMENT_ID: &str = "motion-manifest";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tween::StyleState;

    fn layout_at(top: f64) -> impl Fn(&str) -> Option<TargetBox> {
        move |target| (target == ".card").then_some(TargetBox::new(top, 100.0))
    }

    fn viewport() -> Viewport {
        Viewport::new(0.0, 1000.0)
    }

    #[test]
    fn test_once_fires_at_most_once() {
        let mut reveal = RevealCoordinator::new();
        let id = reveal
            .on_enter_viewport(".card", ThresholdSpec::default(), Tween::fade_up(30.0), true)
            .unwrap();

        assert!(reveal.observe(&viewport(), layout_at(1200.0)).is_empty());
        assert_eq!(reveal.observe(&viewport().scrolled_to(600.0), layout_at(1200.0)), vec![id]);
        // scroll away and back
        assert!(reveal.observe(&viewport(), layout_at(1200.0)).is_empty());
        assert!(reveal.observe(&viewport().scrolled_to(600.0), layout_at(1200.0)).is_empty());
        assert_eq!(reveal.trigger(id).map(|t| t.fire_count()), Some(1));
    }

    #[test]
    fn test_repeatable_fires_on_each_entry() {
        let mut reveal = RevealCoordinator::new();
        let id = reveal
            .on_enter_viewport(".card", ThresholdSpec::default(), Tween::fade_up(30.0), false)
            .unwrap();

        let below = viewport();
        let at = viewport().scrolled_to(600.0);
        assert_eq!(reveal.observe(&at, layout_at(1200.0)), vec![id]);
        assert!(reveal.observe(&at, layout_at(1200.0)).is_empty());
        reveal.observe(&below, layout_at(1200.0));
        assert_eq!(reveal.observe(&at, layout_at(1200.0)), vec![id]);
    }

    #[test]
    fn test_missing_target_never_fires() {
        let mut reveal = RevealCoordinator::new();
        reveal
            .on_enter_viewport(".gone", ThresholdSpec::default(), Tween::fade_up(30.0), true)
            .unwrap();
        assert!(reveal.observe(&viewport(), layout_at(0.0)).is_empty());
    }

    #[test]
    fn test_load_fires_on_first_observe() {
        let mut reveal = RevealCoordinator::new();
        let id = reveal.on_load(".hero-fade", Tween::fade_up(30.0)).unwrap();
        assert_eq!(reveal.observe(&viewport(), |_| None), vec![id]);
        assert!(reveal.observe(&viewport(), |_| None).is_empty());
    }

    #[test]
    fn test_teardown_stops_everything() {
        let mut reveal = RevealCoordinator::new();
        reveal
            .on_enter_viewport(".card", ThresholdSpec::default(), Tween::fade_up(30.0), false)
            .unwrap();
        assert_eq!(reveal.teardown(), 1);
        assert!(reveal.is_torn_down());
        assert!(reveal.observe(&viewport(), layout_at(0.0)).is_empty());
        assert_eq!(
            reveal.on_load(".x", Tween::fade_up(10.0)),
            Err(MotionError::TornDown)
        );
    }

    #[test]
    fn test_guard_tears_down_on_drop() {
        let mut reveal = RevealCoordinator::new();
        {
            let mut guard = reveal.scope();
            guard
                .on_enter_viewport(".card", ThresholdSpec::default(), Tween::fade_up(30.0), true)
                .unwrap();
            assert_eq!(guard.len(), 1);
        }
        assert!(reveal.is_torn_down());
        assert!(reveal.is_empty());
    }

    #[test]
    fn test_guard_tears_down_on_early_return() {
        fn build(reveal: &mut RevealCoordinator) -> Result<(), MotionError> {
            let mut guard = reveal.scope();
            guard.on_load(".ok", Tween::fade_up(10.0))?;
            guard.on_load(".bad", Tween::fade_up(10.0).duration(-1.0))?;
            Ok(())
        }
        let mut reveal = RevealCoordinator::new();
        assert!(build(&mut reveal).is_err());
        assert!(reveal.is_torn_down());
    }

    #[test]
    fn test_scrub_progress() {
        let mut reveal = RevealCoordinator::new();
        let id = reveal
            .scrub(
                ".parallax",
                "top bottom".parse().unwrap(),
                "bottom top".parse().unwrap(),
                Tween::new(StyleState::new().y(0.0), StyleState::new().y(-100.0)),
            )
            .unwrap();
        let target = TargetBox::new(2000.0, 500.0);
        // starts at scroll 1000, ends at 2500
        let at = |y| reveal.scrub_progress(id, &Viewport::new(y, 1000.0), &target).unwrap();
        assert_eq!(at(0.0), 0.0);
        assert!((at(1750.0) - 0.5).abs() < 1e-9);
        assert_eq!(at(4000.0), 1.0);
        assert!(reveal.trigger(id).unwrap().tween.scrub);
    }

    #[test]
    fn test_manifest_json() {
        let mut reveal = RevealCoordinator::new();
        reveal
            .on_enter_viewport(".card", ThresholdSpec::default(), Tween::fade_up(30.0), true)
            .unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&reveal.manifest().to_json().unwrap()).unwrap();
        let trigger = &json["triggers"][0];
        assert_eq!(trigger["kind"], "enter");
        assert_eq!(trigger["target"], ".card");
        assert_eq!(trigger["once"], true);
        assert_eq!(trigger["threshold"]["edge"], "top");
        assert_eq!(json["nav_scrolled_at"], 100);
        assert!(json.get("carousel").is_none());
        assert!(json.get("pointer").is_none());
    }

    #[test]
    fn test_pointer_effects_follow_the_page_view() {
        let mut reveal = RevealCoordinator::new();
        {
            let mut guard = reveal.scope();
            guard.on_pointer(PointerEffect::magnetic("[data-magnetic]")).unwrap();
            let json = serde_json::to_value(guard.manifest()).unwrap();
            assert_eq!(json["pointer"][0]["kind"], "magnetic");
        }
        assert!(reveal.pointer_effects().is_empty());
        assert_eq!(
            reveal.on_pointer(PointerEffect::magnetic(".cta")),
            Err(MotionError::TornDown)
        );
    }

    #[test]
    fn test_script_tag_escapes_closing_tags() {
        let mut reveal = RevealCoordinator::new();
        reveal.on_load("</script>", Tween::fade_up(10.0)).unwrap();
        let tag = reveal.manifest().to_script_tag().unwrap();
        assert_eq!(tag.matches("</script>").count(), 1);
    }
}
