//! Per-window application context.
//!
//! Holds the state that the window procedure needs across messages. The
//! platform layer owns exactly one `MarkerWindow` for the life of the window.

pub mod context;

pub use context::MarkerWindow;
