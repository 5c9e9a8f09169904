//! Windows runtime state management.
//!
//! The context is owned by the run loop and handed to the window through
//! `CreateWindowExW`'s creation parameter. The window procedure finds it again
//! through the window's `GWLP_USERDATA` slot, so no global state is needed.

use std::cell::RefCell;

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::GWLP_USERDATA;

use crate::app::MarkerWindow;

/// Windows-specific runtime state.
///
/// Wraps the platform-independent `MarkerWindow` together with the error, if
/// any, that made `WM_CREATE` refuse the window. `CreateWindowExW` itself only
/// reports that creation failed, not why.
pub struct OverlayContext {
    pub marker: MarkerWindow,
    pub create_error: Option<windows::core::Error>,
}

impl OverlayContext {
    pub fn new(marker: MarkerWindow) -> Self {
        Self {
            marker,
            create_error: None,
        }
    }
}

#[cfg(target_pointer_width = "64")]
unsafe fn store_user_data(hwnd: HWND, value: isize) {
    use windows::Win32::UI::WindowsAndMessaging::SetWindowLongPtrW;
    SetWindowLongPtrW(hwnd, GWLP_USERDATA, value);
}

#[cfg(target_pointer_width = "32")]
unsafe fn store_user_data(hwnd: HWND, value: isize) {
    use windows::Win32::UI::WindowsAndMessaging::SetWindowLongW;
    SetWindowLongW(hwnd, GWLP_USERDATA, value as i32);
}

#[cfg(target_pointer_width = "64")]
unsafe fn load_user_data(hwnd: HWND) -> isize {
    use windows::Win32::UI::WindowsAndMessaging::GetWindowLongPtrW;
    GetWindowLongPtrW(hwnd, GWLP_USERDATA)
}

#[cfg(target_pointer_width = "32")]
unsafe fn load_user_data(hwnd: HWND) -> isize {
    use windows::Win32::UI::WindowsAndMessaging::GetWindowLongW;
    GetWindowLongW(hwnd, GWLP_USERDATA) as isize
}

/// Associate `ctx` with `hwnd`. Called from `WM_NCCREATE`.
///
/// # Safety
/// `ctx` must stay valid until `detach_context` runs for this window.
pub unsafe fn attach_context(hwnd: HWND, ctx: *const RefCell<OverlayContext>) {
    store_user_data(hwnd, ctx as isize);
}

/// The context attached to `hwnd`, if any.
///
/// # Safety
/// Must be called on the thread that owns the window, between
/// `attach_context` and `detach_context`.
pub unsafe fn context<'a>(hwnd: HWND) -> Option<&'a RefCell<OverlayContext>> {
    let ptr = load_user_data(hwnd) as *const RefCell<OverlayContext>;
    ptr.as_ref()
}

/// Forget the context. Called from `WM_NCDESTROY`.
///
/// # Safety
/// Must be called on the thread that owns the window.
pub unsafe fn detach_context(hwnd: HWND) {
    store_user_data(hwnd, 0);
}
