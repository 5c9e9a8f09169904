//! Marker appearance (pure Rust, no FFI).
//!
//! The marker has exactly one look per run; `MarkerStyle::default()` is the
//! reference configuration and nothing outside the crate changes it.

use super::constants::*;
use crate::clamp;

/// Radius, fill color and opacity of the marker dot.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    /// Circle radius in pixels.
    pub radius: u32,
    /// Fill color - red component.
    pub red: u8,
    /// Fill color - green component.
    pub green: u8,
    /// Fill color - blue component.
    pub blue: u8,
    /// Opacity [0.0, 1.0] applied to every channel (premultiplied).
    pub opacity: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            red: DEFAULT_COLOR.0,
            green: DEFAULT_COLOR.1,
            blue: DEFAULT_COLOR.2,
            opacity: DEFAULT_OPACITY,
        }
    }
}

impl MarkerStyle {
    /// Validates and clamps all values to valid ranges.
    pub fn validate(&mut self) {
        self.radius = self.radius.clamp(MIN_RADIUS, MAX_RADIUS);
        self.opacity = if self.opacity.is_nan() {
            DEFAULT_OPACITY
        } else {
            clamp(self.opacity, MIN_OPACITY, MAX_OPACITY)
        };
    }

    /// Side length of the square marker image (and of the window).
    pub fn diameter(&self) -> u32 {
        self.radius * 2
    }

    /// Returns the fill color as a tuple (r, g, b).
    pub fn color(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }
}
