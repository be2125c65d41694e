//! Box geometry for the zoom overlay.
//!
//! Everything here is in CSS viewport pixels. The target computation fits an
//! image of a given aspect ratio inside two ceilings (a fraction of the
//! viewport and a fixed pixel cap, whichever is smaller) and centers it.

use crate::constants::{
    ASPECT_TOLERANCE, DEFAULT_ASPECT, ZOOM_BACKDROP_FADE_MS, ZOOM_EASING, ZOOM_MAX_HEIGHT_PX,
    ZOOM_MAX_WIDTH_PX, ZOOM_TRANSITION_MS, ZOOM_VIEWPORT_HEIGHT_FRACTION,
    ZOOM_VIEWPORT_WIDTH_FRACTION,
};
use glam::DVec2;

/// Axis-aligned box captured from an element's bounding client rect.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: DVec2, size: DVec2) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    /// Width over height, or `None` for a degenerate box.
    pub fn aspect(&self) -> Option<f64> {
        (self.width > 0.0 && self.height > 0.0).then(|| self.width / self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }
}

/// CSS `cubic-bezier()` timing function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub p1: DVec2,
    pub p2: DVec2,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            p1: DVec2::new(x1, y1),
            p2: DVec2::new(x2, y2),
        }
    }

    pub fn css(&self) -> String {
        format!(
            "cubic-bezier({},{},{},{})",
            self.p1.x, self.p1.y, self.p2.x, self.p2.y
        )
    }
}

/// Properties animated when the box moves from origin to target.
pub const ANIMATED_PROPERTIES: [&str; 4] = ["left", "top", "width", "height"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_ms: u32,
    pub easing: CubicBezier,
}

impl Transition {
    /// CSS `transition` value applying the same timing to every box property.
    pub fn css(&self) -> String {
        let easing = self.easing.css();
        ANIMATED_PROPERTIES
            .iter()
            .map(|prop| format!("{} {}ms {}", prop, self.duration_ms, easing))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Tuning for the zoom overlay; `Default` uses the values in `constants.rs`.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomConfig {
    pub viewport_width_fraction: f64,
    pub max_width_px: f64,
    pub viewport_height_fraction: f64,
    pub max_height_px: f64,
    pub transition: Transition,
    pub backdrop_fade_ms: u32,
    pub aspect_tolerance: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        let [x1, y1, x2, y2] = ZOOM_EASING;
        Self {
            viewport_width_fraction: ZOOM_VIEWPORT_WIDTH_FRACTION,
            max_width_px: ZOOM_MAX_WIDTH_PX,
            viewport_height_fraction: ZOOM_VIEWPORT_HEIGHT_FRACTION,
            max_height_px: ZOOM_MAX_HEIGHT_PX,
            transition: Transition {
                duration_ms: ZOOM_TRANSITION_MS,
                easing: CubicBezier::new(x1, y1, x2, y2),
            },
            backdrop_fade_ms: ZOOM_BACKDROP_FADE_MS,
            aspect_tolerance: ASPECT_TOLERANCE,
        }
    }
}

impl ZoomConfig {
    /// Largest box the overlay may occupy in this viewport.
    pub fn max_size(&self, viewport: Viewport) -> DVec2 {
        DVec2::new(
            (viewport.width * self.viewport_width_fraction).min(self.max_width_px),
            (viewport.height * self.viewport_height_fraction).min(self.max_height_px),
        )
    }
}

/// Natural image size to aspect ratio; unknown or empty sizes count as square.
pub fn aspect_ratio(natural_width: u32, natural_height: u32) -> f64 {
    if natural_width > 0 && natural_height > 0 {
        natural_width as f64 / natural_height as f64
    } else {
        DEFAULT_ASPECT
    }
}

/// Centered, aspect-preserving box that fits inside both ceilings.
pub fn centered_target(viewport: Viewport, aspect: f64, config: &ZoomConfig) -> Rect {
    let aspect = if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        DEFAULT_ASPECT
    };
    let max = config.max_size(viewport);
    let width = max.x.min(max.y * aspect);
    let size = DVec2::new(width, width / aspect);
    let origin = (viewport.size() - size) / 2.0;
    Rect::from_origin_size(origin, size)
}
