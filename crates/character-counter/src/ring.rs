//! Circle geometry for the progress ring.
//!
//! The SVG draws two concentric circles; the visible fill fraction comes
//! from `stroke-dasharray`/`stroke-dashoffset`, so all the markup needs
//! from here is the radius, the circumference and the offset for a given
//! progress value.

use std::f64::consts::PI;

/// Intrinsic ring diameter in CSS pixels, used when `--counter-size`
/// is not set on the host.
pub const DEFAULT_DIAMETER: f64 = 24.0;

/// Intrinsic stroke width, used when `--counter-stroke-width` is not set.
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

/// Resolved ring dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub diameter: f64,
    pub stroke_width: f64,
}

impl Ring {
    pub fn new(diameter: f64, stroke_width: f64) -> Self {
        Ring {
            diameter,
            stroke_width,
        }
    }

    /// Circle radius, inset so the stroke stays inside the viewBox.
    ///
    /// Clamped at zero so a stroke wider than the diameter degrades to an
    /// invisible ring instead of negative geometry.
    pub fn radius(&self) -> f64 {
        ((self.diameter - self.stroke_width) / 2.0).max(0.0)
    }

    /// Center coordinate (the ring is drawn in a square viewBox).
    pub fn center(&self) -> f64 {
        self.diameter / 2.0
    }

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius()
    }

    /// Dash offset hiding the unfilled share of the circumference.
    ///
    /// Progress above 1 is clamped by the caller; negative progress yields
    /// an offset past the full circumference, which SVG renders as empty.
    pub fn dash_offset(&self, progress: f64) -> f64 {
        let circumference = self.circumference();
        circumference - progress * circumference
    }
}

impl Default for Ring {
    fn default() -> Self {
        Ring::new(DEFAULT_DIAMETER, DEFAULT_STROKE_WIDTH)
    }
}
