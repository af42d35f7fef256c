//! Viewport thresholds.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::MotionError;

/// Edge of the target element that is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

impl Edge {
    /// Fraction of the element height from its top.
    pub fn fraction(&self) -> f64 {
        match self {
            Edge::Top => 0.0,
            Edge::Center => 0.5,
            Edge::Bottom => 1.0,
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "top" => Some(Edge::Top),
            "center" => Some(Edge::Center),
            "bottom" => Some(Edge::Bottom),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Center => "center",
            Edge::Bottom => "bottom",
        }
    }
}

/// When a target counts as "entered": its `edge` has scrolled above the
/// line `offset` of the way down the viewport.
///
/// Parsed from strings like `"top 70%"` or `"top bottom"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdSpec {
    pub edge: Edge,
    /// Viewport line as a fraction of its height, 0.0 (top) to 1.0 (bottom).
    pub offset: f64,
}

impl ThresholdSpec {
    pub const fn new(edge: Edge, offset: f64) -> Self {
        Self { edge, offset }
    }

    /// Whether a target at `target` has crossed the line in `viewport`.
    pub fn crossed(&self, target: &TargetBox, viewport: &Viewport) -> bool {
        let edge_y = target.top + target.height * self.edge.fraction();
        let line_y = viewport.scroll_y + viewport.height * self.offset;
        edge_y <= line_y
    }
}

impl Default for ThresholdSpec {
    fn default() -> Self {
        Self::new(Edge::Top, 0.7)
    }
}

impl FromStr for ThresholdSpec {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MotionError::InvalidThreshold(s.to_string());
        let mut parts = s.split_whitespace();
        let (Some(edge), Some(line), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };

        let edge = Edge::parse(edge).ok_or_else(invalid)?;
        let offset = match Edge::parse(line) {
            Some(keyword) => keyword.fraction(),
            None => {
                let pct: f64 = line
                    .strip_suffix('%')
                    .and_then(|n| n.parse().ok())
                    .ok_or_else(invalid)?;
                if !(0.0..=100.0).contains(&pct) {
                    return Err(invalid());
                }
                pct / 100.0
            }
        };

        Ok(Self { edge, offset })
    }
}

impl fmt::Display for ThresholdSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}%", self.edge.as_str(), (self.offset * 100.0).round())
    }
}

/// Visible region of the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Document offset of the viewport top.
    pub scroll_y: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(scroll_y: f64, height: f64) -> Self {
        Self { scroll_y, height }
    }

    pub fn scrolled_to(self, scroll_y: f64) -> Self {
        Self { scroll_y, ..self }
    }
}

/// Document position of a target element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetBox {
    pub top: f64,
    pub height: f64,
}

impl TargetBox {
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percent() {
        let spec: ThresholdSpec = "top 70%".parse().unwrap();
        assert_eq!(spec.edge, Edge::Top);
        assert!((spec.offset - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_parse_keyword() {
        let spec: ThresholdSpec = "top bottom".parse().unwrap();
        assert_eq!(spec, ThresholdSpec::new(Edge::Top, 1.0));
        let spec: ThresholdSpec = "center center".parse().unwrap();
        assert_eq!(spec, ThresholdSpec::new(Edge::Center, 0.5));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "top", "left 50%", "top 70", "top 170%", "top 70% extra"] {
            assert!(bad.parse::<ThresholdSpec>().is_err(), "{bad}");
        }
    }

    #[test]
    fn test_crossed() {
        let spec = ThresholdSpec::default();
        let viewport = Viewport::new(0.0, 1000.0);
        assert!(spec.crossed(&TargetBox::new(600.0, 200.0), &viewport));
        assert!(!spec.crossed(&TargetBox::new(800.0, 200.0), &viewport));
        assert!(spec.crossed(&TargetBox::new(1500.0, 200.0), &viewport.scrolled_to(900.0)));
    }

    #[test]
    fn test_bottom_edge() {
        let spec: ThresholdSpec = "bottom top".parse().unwrap();
        let viewport = Viewport::new(500.0, 1000.0);
        assert!(spec.crossed(&TargetBox::new(200.0, 200.0), &viewport));
        assert!(!spec.crossed(&TargetBox::new(400.0, 200.0), &viewport));
    }

    #[test]
    fn test_display() {
        assert_eq!(ThresholdSpec::default().to_string(), "top 70%");
    }
}
