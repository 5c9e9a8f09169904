//! Pure helpers used by the app. Everything outside `platform` is free of
//! Win32 FFI so tests can run as normal integration tests on any host.

pub mod app;
pub mod events;
pub mod handlers;
pub mod image;
pub mod input;
pub mod model;

#[cfg(target_os = "windows")]
pub mod platform;

// Re-export model types for convenience
pub use model::{MarkerStyle, ScreenPoint, ScreenSize};

// Re-export event types for convenience
pub use events::{Effect, InputEvent, Key};

pub use app::MarkerWindow;
pub use handlers::{Flow, OverlayHost};

/// Clamp a value to [lo, hi]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Format an RGB color plus opacity [0..1] as #RRGGBB or #RRGGBBAA (if opacity < 1).
pub fn color_to_hex(red: u8, green: u8, blue: u8, opacity: f64) -> String {
    let ai = (clamp(opacity, 0.0, 1.0) * 255.0).round() as u8;
    if ai == 255 {
        format!("#{:02X}{:02X}{:02X}", red, green, blue)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", red, green, blue, ai)
    }
}
