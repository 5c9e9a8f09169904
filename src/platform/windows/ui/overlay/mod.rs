//! Marker window: class registration, creation, presentation and the
//! `OverlayHost` implementation.

pub mod host;
pub mod renderer;
pub mod window;

pub use host::Win32Host;
pub use renderer::present_marker;
pub use window::{create_marker_window, register_marker_class, screen_size};
