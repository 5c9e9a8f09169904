//! Input handling module.
//!
//! - drag.rs: the Idle/Dragging state machine that turns pointer and
//!   keyboard events into window effects

pub mod drag;

pub use drag::{transition, DragState};
