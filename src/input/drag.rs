//! Drag state machine for the marker window.
//!
//! Two states, `Idle` and `Dragging`. `transition` is a pure function from
//! the current state and one input event to the next state plus the effects
//! the host must apply, so every path is testable with synthetic events.

use log::debug;

use crate::events::{Effect, InputEvent};
use crate::model::ScreenPoint;

/// Whether the marker is currently being dragged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    /// `offset` is pointer minus window top-left, recorded at press time.
    Dragging { offset: ScreenPoint },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// The recorded drag offset, if dragging.
    pub fn offset(&self) -> Option<ScreenPoint> {
        match self {
            DragState::Dragging { offset } => Some(*offset),
            DragState::Idle => None,
        }
    }
}

/// Compute the next state and the effects for one event.
///
/// A second press while already dragging is a no-op: the offset recorded at
/// the first press is kept. Release, move and capture loss while idle are
/// ignored. Terminal events release capture first when it is held.
pub fn transition(state: DragState, event: &InputEvent) -> (DragState, Vec<Effect>) {
    if event.is_terminal() {
        let effects = if state.is_dragging() {
            vec![Effect::ReleasePointer, Effect::Exit]
        } else {
            vec![Effect::Exit]
        };
        return (DragState::Idle, effects);
    }

    match (state, *event) {
        (
            DragState::Idle,
            InputEvent::PrimaryPress {
                pointer,
                window_origin,
            },
        ) => {
            let offset = pointer - window_origin;
            debug!("drag start: pointer={pointer:?} offset={offset:?}");
            (DragState::Dragging { offset }, vec![Effect::CapturePointer])
        }

        (DragState::Dragging { offset }, InputEvent::PointerMove { pointer }) => (
            state,
            vec![Effect::MoveWindow {
                top_left: pointer - offset,
            }],
        ),

        (DragState::Dragging { .. }, InputEvent::PrimaryRelease) => {
            debug!("drag end");
            (DragState::Idle, vec![Effect::ReleasePointer])
        }

        (DragState::Dragging { .. }, InputEvent::CaptureLost) => {
            debug!("drag cancelled: capture lost");
            (DragState::Idle, Vec::new())
        }

        _ => (state, Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Key;

    fn press(px: i32, py: i32, wx: i32, wy: i32) -> InputEvent {
        InputEvent::PrimaryPress {
            pointer: ScreenPoint::new(px, py),
            window_origin: ScreenPoint::new(wx, wy),
        }
    }

    #[test]
    fn test_press_records_offset_and_captures() {
        let (state, effects) = transition(DragState::Idle, &press(950, 530, 940, 520));
        assert_eq!(
            state,
            DragState::Dragging {
                offset: ScreenPoint::new(10, 10)
            }
        );
        assert_eq!(effects, vec![Effect::CapturePointer]);
    }

    #[test]
    fn test_second_press_keeps_first_offset() {
        let (state, _) = transition(DragState::Idle, &press(950, 530, 940, 520));
        let (again, effects) = transition(state, &press(1000, 600, 940, 520));
        assert_eq!(again, state);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_move_while_idle_is_ignored() {
        let (state, effects) = transition(
            DragState::Idle,
            &InputEvent::PointerMove {
                pointer: ScreenPoint::new(5, 5),
            },
        );
        assert_eq!(state, DragState::Idle);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_release_while_idle_does_not_release_capture() {
        let (state, effects) = transition(DragState::Idle, &InputEvent::PrimaryRelease);
        assert_eq!(state, DragState::Idle);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_capture_lost_cancels_drag_without_effects() {
        let dragging = DragState::Dragging {
            offset: ScreenPoint::new(3, 4),
        };
        let (state, effects) = transition(dragging, &InputEvent::CaptureLost);
        assert_eq!(state, DragState::Idle);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_escape_while_dragging_releases_then_exits() {
        let dragging = DragState::Dragging {
            offset: ScreenPoint::new(3, 4),
        };
        let (state, effects) = transition(dragging, &InputEvent::KeyDown(Key::Escape));
        assert_eq!(state, DragState::Idle);
        assert_eq!(effects, vec![Effect::ReleasePointer, Effect::Exit]);
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let (state, effects) = transition(DragState::Idle, &InputEvent::KeyDown(Key::Other(0x41)));
        assert_eq!(state, DragState::Idle);
        assert!(effects.is_empty());
    }
}
