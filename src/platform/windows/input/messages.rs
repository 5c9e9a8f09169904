//! Translation of Win32 window messages into marker input events.

use log::warn;
use windows::Win32::Foundation::{HWND, LPARAM, POINT, RECT, WPARAM};
use windows::Win32::UI::Input::KeyboardAndMouse::VK_ESCAPE;
use windows::Win32::UI::WindowsAndMessaging::{
    GetCursorPos, GetWindowRect, WM_CAPTURECHANGED, WM_CLOSE, WM_DESTROY, WM_KEYDOWN,
    WM_LBUTTONDOWN, WM_LBUTTONUP, WM_MOUSEMOVE,
};

use crate::events::{InputEvent, Key};
use crate::model::ScreenPoint;

/// Current pointer position in screen coordinates.
pub fn cursor_position() -> Option<ScreenPoint> {
    let mut cursor = POINT::default();
    match unsafe { GetCursorPos(&mut cursor) } {
        Ok(()) => Some(ScreenPoint::new(cursor.x, cursor.y)),
        Err(e) => {
            warn!("GetCursorPos failed: {e}");
            None
        }
    }
}

/// Top-left corner of `hwnd` in screen coordinates.
pub fn window_origin(hwnd: HWND) -> Option<ScreenPoint> {
    let mut rect = RECT::default();
    match unsafe { GetWindowRect(hwnd, &mut rect) } {
        Ok(()) => Some(ScreenPoint::new(rect.left, rect.top)),
        Err(e) => {
            warn!("GetWindowRect failed: {e}");
            None
        }
    }
}

/// Map a virtual-key code to a marker key.
pub fn key_from_vk(vk: u16) -> Key {
    if vk == VK_ESCAPE.0 {
        Key::Escape
    } else {
        Key::Other(vk)
    }
}

/// Translate one message for the marker window, or `None` if the marker
/// does not react to it (the caller then defers to `DefWindowProcW`).
///
/// Positions are read with `GetCursorPos` rather than from `lparam` so they
/// are in screen coordinates even while the pointer is captured outside the
/// window.
pub fn translate_message(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> Option<InputEvent> {
    match msg {
        WM_LBUTTONDOWN => Some(InputEvent::PrimaryPress {
            pointer: cursor_position()?,
            window_origin: window_origin(hwnd)?,
        }),

        WM_LBUTTONUP => Some(InputEvent::PrimaryRelease),

        WM_MOUSEMOVE => Some(InputEvent::PointerMove {
            pointer: cursor_position()?,
        }),

        // lparam carries the window gaining capture.
        WM_CAPTURECHANGED if lparam.0 as *mut std::ffi::c_void != hwnd.0 => {
            Some(InputEvent::CaptureLost)
        }

        WM_KEYDOWN => Some(InputEvent::KeyDown(key_from_vk(wparam.0 as u16))),

        WM_CLOSE => Some(InputEvent::CloseRequested),

        WM_DESTROY => Some(InputEvent::Destroyed),

        _ => None,
    }
}
