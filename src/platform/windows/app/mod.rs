//! Window context storage for the Win32 marker window.

pub mod state;

pub use state::{attach_context, context, detach_context, OverlayContext};
