//! Configuration constants and default values.
//!
//! This module contains the reference marker appearance, the Win32 window
//! identity strings, and validation limits.

// === Visual Defaults ===

/// Default circle radius in pixels. The marker image is `2 * radius` wide.
pub const DEFAULT_RADIUS: u32 = 20;

/// Default marker color (R, G, B) - orange.
pub const DEFAULT_COLOR: (u8, u8, u8) = (255, 128, 0);

/// Default marker opacity [0.0, 1.0].
pub const DEFAULT_OPACITY: f64 = 0.5;

// === Window Identity ===

/// Window class registered for the marker surface.
pub const WINDOW_CLASS_NAME: &str = "ScreenMarker";

/// Window title (never shown: the window has no caption).
pub const WINDOW_TITLE: &str = "Screen Marker";

// === Validation Limits ===

/// Minimum radius value in pixels.
pub const MIN_RADIUS: u32 = 1;

/// Maximum radius value in pixels.
pub const MAX_RADIUS: u32 = 512;

/// Minimum opacity.
pub const MIN_OPACITY: f64 = 0.0;

/// Maximum opacity.
pub const MAX_OPACITY: f64 = 1.0;
