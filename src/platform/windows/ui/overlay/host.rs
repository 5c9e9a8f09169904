//! `OverlayHost` backed by a real Win32 window.

use log::debug;
use windows::core::Result;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Input::KeyboardAndMouse::{ReleaseCapture, SetCapture, SetFocus};
use windows::Win32::UI::WindowsAndMessaging::{
    PostQuitMessage, SetWindowPos, SWP_NOSIZE, SWP_NOZORDER,
};

use crate::handlers::OverlayHost;
use crate::model::ScreenPoint;

/// Applies drag effects to the marker window.
pub struct Win32Host {
    hwnd: HWND,
}

impl Win32Host {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }
}

impl OverlayHost for Win32Host {
    type Error = windows::core::Error;

    fn capture_pointer(&mut self) -> Result<()> {
        unsafe {
            SetCapture(self.hwnd);
            // Keyboard focus so Escape reaches the window. A null return only
            // means nothing had focus before.
            let _ = SetFocus(Some(self.hwnd));
        }
        Ok(())
    }

    fn release_pointer(&mut self) -> Result<()> {
        unsafe { ReleaseCapture() }
    }

    fn move_window(&mut self, top_left: ScreenPoint) -> Result<()> {
        debug!("moving marker to ({}, {})", top_left.x, top_left.y);
        unsafe {
            SetWindowPos(
                self.hwnd,
                None,
                top_left.x,
                top_left.y,
                0,
                0,
                SWP_NOSIZE | SWP_NOZORDER,
            )
        }
    }

    fn request_exit(&mut self) {
        unsafe { PostQuitMessage(0) };
    }
}
