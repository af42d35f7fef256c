//! Pointer-driven effects: a tilting hero with a following spotlight, and
//! magnetic buttons.
//!
//! The runtime applies these through inline transforms with CSS
//! transitions, so they never stack with the Web Animations used by
//! triggers.

use serde::Serialize;

/// Pointer offset from the viewport centre is scaled by this.
pub const POINTER_DAMPING: f64 = 0.08;

/// Tilt in degrees for a damped offset equal to half the viewport.
pub const TILT_RANGE_DEG: f64 = 15.0;

/// Viewports narrower than this get no tilt.
pub const TILT_MIN_WIDTH: f64 = 1024.0;

/// Share of the pointer's offset from its centre a magnetic element follows.
pub const MAGNETIC_PULL: f64 = 0.3;

/// Spotlight drift in percent per damped pixel.
const SPOTLIGHT_DRIFT: f64 = 0.01;

/// A pointer effect handed to the client runtime.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PointerEffect {
    /// Pointer movement over `area` tilts `target` and moves `spotlight`.
    Tilt {
        area: String,
        target: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        spotlight: Option<String>,
        damping: f64,
        range_deg: f64,
        min_width: f64,
    },
    /// `target` leans toward the pointer while hovered and springs back on leave.
    Magnetic { target: String, pull: f64 },
}

impl PointerEffect {
    pub fn tilt(area: &str, target: &str, spotlight: Option<&str>) -> Self {
        PointerEffect::Tilt {
            area: area.to_string(),
            target: target.to_string(),
            spotlight: spotlight.map(str::to_string),
            damping: POINTER_DAMPING,
            range_deg: TILT_RANGE_DEG,
            min_width: TILT_MIN_WIDTH,
        }
    }

    pub fn magnetic(target: &str) -> Self {
        PointerEffect::Magnetic {
            target: target.to_string(),
            pull: MAGNETIC_PULL,
        }
    }
}

/// Tilt and spotlight position for one pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    /// Degrees around the horizontal axis.
    pub rotate_x: f64,
    /// Degrees around the vertical axis.
    pub rotate_y: f64,
    /// Spotlight centre, percent of the area's width.
    pub spot_x_pct: f64,
    /// Spotlight centre, percent of the area's height.
    pub spot_y_pct: f64,
}

/// Tilt for a pointer at (`x`, `y`) in a `width` x `height` viewport.
///
/// `None` below `TILT_MIN_WIDTH`.
pub fn tilt_at(x: f64, y: f64, width: f64, height: f64) -> Option<Tilt> {
    if width < TILT_MIN_WIDTH || height <= 0.0 {
        return None;
    }
    let (cx, cy) = (width / 2.0, height / 2.0);
    let dx = (x - cx) * POINTER_DAMPING;
    let dy = (y - cy) * POINTER_DAMPING;
    Some(Tilt {
        rotate_x: dy / cy * TILT_RANGE_DEG,
        rotate_y: -dx / cx * TILT_RANGE_DEG,
        spot_x_pct: 50.0 + dx * SPOTLIGHT_DRIFT,
        spot_y_pct: 50.0 + dy * SPOTLIGHT_DRIFT,
    })
}

/// Element box in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Translation of a magnetic element for a pointer at (`x`, `y`).
pub fn magnetic_offset(x: f64, y: f64, rect: &ClientRect) -> (f64, f64) {
    let dx = x - rect.left - rect.width / 2.0;
    let dy = y - rect.top - rect.height / 2.0;
    (dx * MAGNETIC_PULL, dy * MAGNETIC_PULL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centre_is_neutral() {
        let tilt = tilt_at(720.0, 450.0, 1440.0, 900.0).unwrap();
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
        assert_eq!((tilt.spot_x_pct, tilt.spot_y_pct), (50.0, 50.0));
    }

    #[test]
    fn test_corner_tilt_stays_small() {
        let tilt = tilt_at(1440.0, 900.0, 1440.0, 900.0).unwrap();
        // damped to 8% of the full range
        assert!((tilt.rotate_x - 1.2).abs() < 1e-9);
        assert!((tilt.rotate_y + 1.2).abs() < 1e-9);
        assert!(tilt.spot_x_pct > 50.0 && tilt.spot_y_pct > 50.0);
    }

    #[test]
    fn test_no_tilt_on_narrow_viewports() {
        assert!(tilt_at(10.0, 10.0, 800.0, 900.0).is_none());
    }

    #[test]
    fn test_magnetic_pull() {
        let rect = ClientRect { left: 100.0, top: 100.0, width: 200.0, height: 60.0 };
        assert_eq!(magnetic_offset(200.0, 130.0, &rect), (0.0, 0.0));
        let (x, y) = magnetic_offset(300.0, 160.0, &rect);
        assert!((x - 30.0).abs() < 1e-9);
        assert!((y - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(PointerEffect::tilt(".hero", ".hero-img", None)).unwrap();
        assert_eq!(json["kind"], "tilt");
        assert_eq!(json["min_width"], 1024.0);
        assert!(json.get("spotlight").is_none());

        let json = serde_json::to_value(PointerEffect::magnetic("[data-magnetic]")).unwrap();
        assert_eq!(json["kind"], "magnetic");
        assert_eq!(json["pull"], 0.3);
    }
}
