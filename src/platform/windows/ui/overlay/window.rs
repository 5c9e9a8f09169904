//! Marker window class registration and creation.

use std::cell::RefCell;

use windows::core::{Error, Result, PCWSTR};
use windows::Win32::Foundation::{GetLastError, HINSTANCE, HWND};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, GetSystemMetrics, LoadCursorW, RegisterClassW, IDC_ARROW, SM_CXSCREEN,
    SM_CYSCREEN, WNDCLASSW, WNDPROC, WS_EX_LAYERED, WS_EX_TOOLWINDOW, WS_EX_TOPMOST, WS_POPUP,
};

use crate::model::constants::{WINDOW_CLASS_NAME, WINDOW_TITLE};
use crate::model::{ScreenPoint, ScreenSize};
use crate::platform::windows::app::OverlayContext;

/// NUL-terminated UTF-16 copy of `s`.
fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Primary display size in pixels.
pub fn screen_size() -> ScreenSize {
    unsafe { ScreenSize::new(GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) }
}

/// Register the marker window class with `wndproc`.
pub fn register_marker_class(instance: HINSTANCE, wndproc: WNDPROC) -> Result<()> {
    let class_name = wide(WINDOW_CLASS_NAME);

    unsafe {
        let wc = WNDCLASSW {
            lpfnWndProc: wndproc,
            hInstance: instance,
            hCursor: LoadCursorW(None, IDC_ARROW)?,
            lpszClassName: PCWSTR(class_name.as_ptr()),
            ..Default::default()
        };

        if RegisterClassW(&wc) == 0 {
            return Err(Error::from(GetLastError().to_hresult()));
        }
    }

    Ok(())
}

/// Create the borderless, topmost, layered marker window.
///
/// `ctx` is passed as the creation parameter so the window procedure can
/// attach it in `WM_NCCREATE`. The window is created hidden.
pub fn create_marker_window(
    instance: HINSTANCE,
    origin: ScreenPoint,
    size: ScreenSize,
    ctx: &RefCell<OverlayContext>,
) -> Result<HWND> {
    let class_name = wide(WINDOW_CLASS_NAME);
    let title = wide(WINDOW_TITLE);

    // Layered for per-pixel alpha, tool window to stay out of the taskbar
    // and Alt+Tab.
    let ex_style = WS_EX_LAYERED | WS_EX_TOPMOST | WS_EX_TOOLWINDOW;

    unsafe {
        CreateWindowExW(
            ex_style,
            PCWSTR(class_name.as_ptr()),
            PCWSTR(title.as_ptr()),
            WS_POPUP,
            origin.x,
            origin.y,
            size.width,
            size.height,
            None,
            None,
            Some(instance),
            Some(ctx as *const RefCell<OverlayContext> as *const std::ffi::c_void),
        )
    }
}
