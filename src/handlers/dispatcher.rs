//! Event dispatcher for the marker window.
//!
//! The dispatcher feeds one input event through the drag state machine and
//! applies the resulting effects to an `OverlayHost`, in order.
//!
//! # Architecture
//!
//! ```text
//! InputEvent → drag::transition() → [Effect] → OverlayHost
//! ```
//!
//! The host is the only part that touches the windowing system. The Win32
//! window implements it for real; tests implement it with a recorder.

use std::fmt::Display;

use log::{info, warn};

use crate::events::{Effect, InputEvent};
use crate::input::drag::{transition, DragState};
use crate::model::ScreenPoint;

/// Window operations the marker needs from the platform.
pub trait OverlayHost {
    type Error: Display;

    /// Route all pointer input to the marker window and focus it.
    fn capture_pointer(&mut self) -> Result<(), Self::Error>;

    fn release_pointer(&mut self) -> Result<(), Self::Error>;

    /// Move the window without resizing it or changing its z-order.
    fn move_window(&mut self, top_left: ScreenPoint) -> Result<(), Self::Error>;

    /// Ask the event loop to stop after the current message.
    fn request_exit(&mut self);
}

/// Whether the event loop should keep running after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Dispatch one event: update `state` and apply every resulting effect.
///
/// Platform failures while applying an effect are logged and skipped; only
/// resource acquisition at startup is fatal. Returns the window origin after
/// the last successful move, if any.
pub fn dispatch_event<H: OverlayHost>(
    state: &mut DragState,
    host: &mut H,
    event: &InputEvent,
) -> (Flow, Option<ScreenPoint>) {
    let (next, effects) = transition(*state, event);
    *state = next;

    let mut flow = Flow::Continue;
    let mut moved_to = None;

    for effect in effects {
        match effect {
            Effect::CapturePointer => {
                if let Err(e) = host.capture_pointer() {
                    warn!("failed to capture pointer: {e}");
                }
            }
            Effect::ReleasePointer => {
                if let Err(e) = host.release_pointer() {
                    warn!("failed to release pointer capture: {e}");
                }
            }
            Effect::MoveWindow { top_left } => match host.move_window(top_left) {
                Ok(()) => moved_to = Some(top_left),
                Err(e) => warn!("failed to move marker to {top_left:?}: {e}"),
            },
            Effect::Exit => {
                info!("exit requested: {}", event.description());
                host.request_exit();
                flow = Flow::Exit;
            }
        }
    }

    (flow, moved_to)
}
