//! Windows-specific implementation using Win32 and GDI.
//!
//! This module contains all Windows-specific code:
//! - Window context storage (`GWLP_USERDATA`)
//! - Message translation into marker input events
//! - The layered marker window and its `UpdateLayeredWindow` presentation

pub mod app;
pub mod input;
pub mod ui;

// Re-export commonly used items
pub use ui::*;
