//! Animation descriptors.

use serde::Serialize;

use crate::error::MotionError;

/// Style values at one end of a tween. Unset properties are left alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StyleState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Horizontal translation in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Vertical translation in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// CSS `left` as a percentage of the containing block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_pct: Option<f64>,
}

impl StyleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, value: f64) -> Self {
        self.opacity = Some(value);
        self
    }

    pub fn x(mut self, px: f64) -> Self {
        self.x = Some(px);
        self
    }

    pub fn y(mut self, px: f64) -> Self {
        self.y = Some(px);
        self
    }

    pub fn scale(mut self, value: f64) -> Self {
        self.scale = Some(value);
        self
    }

    pub fn left_pct(mut self, pct: f64) -> Self {
        self.left_pct = Some(pct);
        self
    }

    /// Hidden and shifted down by `y` pixels.
    pub fn hidden_below(y: f64) -> Self {
        Self::new().opacity(0.0).y(y)
    }

    /// Fully visible at rest.
    pub fn shown() -> Self {
        Self::new().opacity(1.0).y(0.0)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Easing curve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Ease {
    #[serde(rename = "linear")]
    Linear,
    #[default]
    #[serde(rename = "power2.out")]
    Power2Out,
    #[serde(rename = "power2.inOut")]
    Power2InOut,
    #[serde(rename = "power3.out")]
    Power3Out,
}

impl Ease {
    /// Equivalent CSS timing function.
    pub fn css(&self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::Power2Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Ease::Power2InOut => "cubic-bezier(0.645, 0.045, 0.355, 1)",
            Ease::Power3Out => "cubic-bezier(0.165, 0.84, 0.44, 1)",
        }
    }
}

/// Repeat count meaning "forever".
pub const REPEAT_FOREVER: i32 = -1;

/// A from/to animation applied to every element matching a target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tween {
    pub from: StyleState,
    pub to: StyleState,
    /// Seconds.
    pub duration: f64,
    pub ease: Ease,
    /// Seconds before the first element starts.
    pub delay: f64,
    /// Seconds between consecutive elements.
    pub stagger: f64,
    /// Extra plays after the first; `REPEAT_FOREVER` loops.
    pub repeat: i32,
    /// Seconds held at `from` before every play, repeats included.
    pub repeat_delay: f64,
    /// Alternate direction on each repeat.
    pub yoyo: bool,
    /// Progress follows scroll position instead of time.
    pub scrub: bool,
}

impl Tween {
    pub fn new(from: StyleState, to: StyleState) -> Self {
        Self {
            from,
            to,
            duration: 1.0,
            ease: Ease::default(),
            delay: 0.0,
            stagger: 0.0,
            repeat: 0,
            repeat_delay: 0.0,
            yoyo: false,
            scrub: false,
        }
    }

    /// Fade in while rising `y` pixels.
    pub fn fade_up(y: f64) -> Self {
        Self::new(StyleState::hidden_below(y), StyleState::shown())
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds;
        self
    }

    pub fn stagger(mut self, seconds: f64) -> Self {
        self.stagger = seconds;
        self
    }

    pub fn repeat(mut self, count: i32) -> Self {
        self.repeat = count;
        self
    }

    pub fn repeat_delay(mut self, seconds: f64) -> Self {
        self.repeat_delay = seconds;
        self
    }

    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    pub fn scrub(mut self) -> Self {
        self.scrub = true;
        self.ease = Ease::Linear;
        self
    }

    /// Start time of the `index`-th matched element, in seconds.
    pub fn start_offset(&self, index: usize) -> f64 {
        self.delay + self.stagger * index as f64
    }

    /// Seconds one play takes, including its hold.
    pub fn cycle(&self) -> f64 {
        self.repeat_delay + self.duration
    }

    /// Total plays, or `None` when looping forever.
    pub fn iterations(&self) -> Option<u32> {
        if self.repeat < 0 {
            None
        } else {
            Some(self.repeat as u32 + 1)
        }
    }

    /// Check durations and repeat count.
    pub fn validate(&self) -> Result<(), MotionError> {
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(MotionError::InvalidTween(format!(
                "duration must be positive, got {}",
                self.duration
            )));
        }
        if self.delay < 0.0 || self.stagger < 0.0 || self.repeat_delay < 0.0 {
            return Err(MotionError::InvalidTween(
                "delays and stagger must not be negative".to_string(),
            ));
        }
        if self.repeat < REPEAT_FOREVER {
            return Err(MotionError::InvalidTween(format!(
                "repeat must be -1 or more, got {}",
                self.repeat
            )));
        }
        if self.to.is_empty() {
            return Err(MotionError::InvalidTween("nothing to animate".to_string()));
        }
        Ok(())
    }
}
