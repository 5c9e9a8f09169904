//! Event handlers and dispatching.
//!
//! This module contains the dispatcher that runs input events through the
//! drag state machine and applies the resulting effects to the window.

pub mod dispatcher;

pub use dispatcher::{dispatch_event, Flow, OverlayHost};
