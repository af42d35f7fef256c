//! Slide carousel with timed auto-advance.

use serde::Serialize;

use crate::error::MotionError;

/// Length of a slide transition (fade out, then in).
pub const TRANSITION_MS: u64 = 700;

/// Slide position and transition guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
    transition_left_ms: u64,
}

impl Carousel {
    pub fn new(len: usize) -> Result<Self, MotionError> {
        Self::starting_at(len, 0)
    }

    /// Start on `index`; out-of-range indices start on the first slide.
    pub fn starting_at(len: usize, index: usize) -> Result<Self, MotionError> {
        if len == 0 {
            return Err(MotionError::EmptyCarousel);
        }
        Ok(Self {
            len,
            active: if index < len { index } else { 0 },
            transition_left_ms: 0,
        })
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_animating(&self) -> bool {
        self.transition_left_ms > 0
    }

    /// Move to `index`. Ignored while a transition runs, for the current
    /// slide, and for out-of-range indices.
    pub fn go_to(&mut self, index: usize) -> bool {
        if self.is_animating() || index == self.active || index >= self.len {
            return false;
        }
        self.active = index;
        self.transition_left_ms = TRANSITION_MS;
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.next_index())
    }

    pub fn prev(&mut self) -> bool {
        self.go_to(self.prev_index())
    }

    pub fn next_index(&self) -> usize {
        (self.active + 1) % self.len
    }

    pub fn prev_index(&self) -> usize {
        (self.active + self.len - 1) % self.len
    }

    /// Let time pass for the running transition.
    pub fn elapse(&mut self, ms: u64) {
        self.transition_left_ms = self.transition_left_ms.saturating_sub(ms);
    }
}

/// Timer that advances a carousel every `interval_ms`.
///
/// A tick that lands during a transition is skipped. Once cancelled the
/// timer never touches the carousel again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoAdvance {
    interval_ms: u64,
    elapsed_ms: u64,
    cancelled: bool,
}

impl AutoAdvance {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0,
            cancelled: false,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Advance time. Returns whether the carousel moved.
    pub fn tick(&mut self, ms: u64, carousel: &mut Carousel) -> bool {
        if self.cancelled {
            return false;
        }
        carousel.elapse(ms);
        self.elapsed_ms += ms;
        if self.elapsed_ms < self.interval_ms {
            return false;
        }
        // Keep the overshoot so ticks stay on the interval grid.
        self.elapsed_ms = self.elapsed_ms.checked_rem(self.interval_ms).unwrap_or(0);
        !carousel.is_animating() && carousel.next()
    }

    /// Start the interval over, e.g. after manual navigation.
    pub fn restart(&mut self) {
        self.elapsed_ms = 0;
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// Carousel settings handed to the client runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselSpec {
    /// CSS selector of the carousel root.
    pub target: String,
    pub len: usize,
    pub start: usize,
    pub interval_ms: u64,
    pub transition_ms: u64,
}

impl CarouselSpec {
    pub fn new(target: impl Into<String>, carousel: &Carousel, timer: &AutoAdvance) -> Self {
        Self {
            target: target.into(),
            len: carousel.len(),
            start: carousel.active(),
            interval_ms: timer.interval_ms(),
            transition_ms: TRANSITION_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        let mut c = Carousel::new(4).unwrap();
        assert!(c.prev());
        assert_eq!(c.active(), 3);
        c.elapse(TRANSITION_MS);
        assert!(c.next());
        assert_eq!(c.active(), 0);
    }

    #[test]
    fn test_navigation_blocked_while_animating() {
        let mut c = Carousel::new(4).unwrap();
        assert!(c.go_to(2));
        assert!(c.is_animating());
        assert!(!c.next());
        assert_eq!(c.active(), 2);
        c.elapse(TRANSITION_MS);
        assert!(!c.is_animating());
        assert!(c.next());
        assert_eq!(c.active(), 3);
    }

    #[test]
    fn test_go_to_current_or_out_of_range() {
        let mut c = Carousel::new(4).unwrap();
        assert!(!c.go_to(0));
        assert!(!c.go_to(9));
        assert!(!c.is_animating());
    }

    #[test]
    fn test_starting_at() {
        assert_eq!(Carousel::starting_at(4, 2).unwrap().active(), 2);
        assert_eq!(Carousel::starting_at(4, 7).unwrap().active(), 0);
        assert_eq!(Carousel::new(0), Err(MotionError::EmptyCarousel));
    }

    #[test]
    fn test_auto_advance_every_interval() {
        let mut c = Carousel::new(4).unwrap();
        let mut timer = AutoAdvance::new(5000);
        assert!(!timer.tick(4999, &mut c));
        assert!(timer.tick(1, &mut c));
        assert_eq!(c.active(), 1);
        assert!(!timer.tick(4000, &mut c));
        assert!(timer.tick(1000, &mut c));
        assert_eq!(c.active(), 2);
    }

    #[test]
    fn test_auto_advance_keeps_overshoot() {
        let mut c = Carousel::new(4).unwrap();
        let mut timer = AutoAdvance::new(5000);
        assert!(timer.tick(7000, &mut c));
        assert!(timer.tick(3000, &mut c));
        assert_eq!(c.active(), 2);
    }

    #[test]
    fn test_auto_advance_skips_during_transition() {
        let mut c = Carousel::new(4).unwrap();
        let mut timer = AutoAdvance::new(1000);
        timer.tick(500, &mut c);
        assert!(c.go_to(3));
        // transition still has 200ms left when the interval elapses
        assert!(!timer.tick(500, &mut c));
        assert_eq!(c.active(), 3);
    }

    #[test]
    fn test_restart_after_manual_navigation() {
        let mut c = Carousel::new(4).unwrap();
        let mut timer = AutoAdvance::new(5000);
        timer.tick(4000, &mut c);
        c.next();
        timer.restart();
        assert!(!timer.tick(4000, &mut c));
        assert_eq!(c.active(), 1);
    }

    #[test]
    fn test_cancelled_timer_never_mutates() {
        let mut c = Carousel::new(4).unwrap();
        let mut timer = AutoAdvance::new(5000);
        timer.cancel();
        let before = c.clone();
        for _ in 0..10 {
            assert!(!timer.tick(5000, &mut c));
        }
        assert_eq!(c, before);
        assert!(timer.is_cancelled());
    }
}
