//! Application domain model.
//!
//! This module contains pure business logic (no FFI dependencies):
//! the marker style, screen geometry, and configuration constants.

pub mod constants;
pub mod geometry;
pub mod marker_style;

pub use constants::*;
pub use geometry::{ScreenPoint, ScreenSize};
pub use marker_style::MarkerStyle;
