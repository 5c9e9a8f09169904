//! Input events and the effects they produce.
//!
//! The window procedure translates raw platform messages into `InputEvent`s;
//! the drag state machine answers with `Effect`s for the host to carry out.
//! This module is pure Rust with no FFI dependencies, so synthetic events can
//! be injected in tests without a windowing system.

use crate::model::ScreenPoint;

/// Keys the marker distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    /// Any other key, by platform virtual-key code.
    Other(u16),
}

/// Input delivered to the marker window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button went down inside the window.
    PrimaryPress {
        pointer: ScreenPoint,
        window_origin: ScreenPoint,
    },

    /// Primary button went up.
    PrimaryRelease,

    /// Pointer moved (delivered beyond the window bounds while captured).
    PointerMove { pointer: ScreenPoint },

    /// The platform took pointer capture away from the window.
    CaptureLost,

    /// A key was pressed while the window had focus.
    KeyDown(Key),

    /// The window was asked to close.
    CloseRequested,

    /// The window is being destroyed.
    Destroyed,
}

impl InputEvent {
    /// Returns true if this event ends the program regardless of drag state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            InputEvent::KeyDown(Key::Escape) | InputEvent::CloseRequested | InputEvent::Destroyed
        )
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            InputEvent::PrimaryPress { .. } => "Primary button pressed",
            InputEvent::PrimaryRelease => "Primary button released",
            InputEvent::PointerMove { .. } => "Pointer moved",
            InputEvent::CaptureLost => "Pointer capture lost",
            InputEvent::KeyDown(Key::Escape) => "Escape pressed",
            InputEvent::KeyDown(Key::Other(_)) => "Key pressed",
            InputEvent::CloseRequested => "Close requested",
            InputEvent::Destroyed => "Window destroyed",
        }
    }
}

/// Side effects requested by a state transition, applied in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Route all pointer input to the marker window and give it keyboard focus.
    CapturePointer,

    /// Stop routing pointer input to the marker window.
    ReleasePointer,

    /// Move the window so its top-left corner lands at `top_left`.
    MoveWindow { top_left: ScreenPoint },

    /// Leave the event loop and terminate normally.
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_events() {
        assert!(InputEvent::KeyDown(Key::Escape).is_terminal());
        assert!(InputEvent::CloseRequested.is_terminal());
        assert!(InputEvent::Destroyed.is_terminal());
    }

    #[test]
    fn test_non_terminal_events() {
        assert!(!InputEvent::KeyDown(Key::Other(0x41)).is_terminal());
        assert!(!InputEvent::PrimaryRelease.is_terminal());
        assert!(!InputEvent::CaptureLost.is_terminal());
        assert!(!InputEvent::PointerMove {
            pointer: ScreenPoint::ORIGIN
        }
        .is_terminal());
    }

    #[test]
    fn test_all_events_have_descriptions() {
        let events = [
            InputEvent::PrimaryPress {
                pointer: ScreenPoint::ORIGIN,
                window_origin: ScreenPoint::ORIGIN,
            },
            InputEvent::PrimaryRelease,
            InputEvent::PointerMove {
                pointer: ScreenPoint::ORIGIN,
            },
            InputEvent::CaptureLost,
            InputEvent::KeyDown(Key::Escape),
            InputEvent::KeyDown(Key::Other(0x20)),
            InputEvent::CloseRequested,
            InputEvent::Destroyed,
        ];

        for event in events {
            assert!(!event.description().is_empty());
        }
    }
}
