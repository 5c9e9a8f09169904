//! Windows-specific entry point and application logic.
//!
//! Renders the marker dot once into a layered window via UpdateLayeredWindow
//! and runs the message loop until Escape or close.

use std::cell::RefCell;

use anyhow::{bail, Context};
use log::{error, info};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    DefWindowProcW, DestroyWindow, DispatchMessageW, GetMessageW, ShowWindow,
    TranslateMessage, CREATESTRUCTW, MSG, SW_SHOW, WM_CREATE, WM_NCCREATE, WM_NCDESTROY,
};

use marker_dot::color_to_hex;
use marker_dot::platform::windows::app::{attach_context, context, detach_context, OverlayContext};
use marker_dot::platform::windows::input::translate_message;
use marker_dot::platform::windows::ui::overlay::{
    create_marker_window, present_marker, register_marker_class, screen_size, Win32Host,
};
use marker_dot::{MarkerStyle, MarkerWindow};

/// Main entry point for Windows.
pub fn run() {
    if let Err(e) = run_app() {
        error!("marker-dot: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> anyhow::Result<()> {
    let instance = unsafe { GetModuleHandleW(None) }.context("failed to get module handle")?;

    register_marker_class(instance.into(), Some(wndproc))
        .context("failed to register marker window class")?;

    let screen = screen_size();
    let marker = MarkerWindow::new(MarkerStyle::default(), screen);
    let origin = marker.origin();
    let size = marker.size();
    let style = marker.style().clone();

    // Owned here for the whole life of the window; the window procedure
    // borrows it through GWLP_USERDATA.
    let ctx = Box::new(RefCell::new(OverlayContext::new(marker)));

    let hwnd = match create_marker_window(instance.into(), origin, size, &ctx) {
        Ok(hwnd) => hwnd,
        Err(e) => {
            let cause = ctx.borrow_mut().create_error.take().unwrap_or(e);
            return Err(cause).context("failed to create marker window");
        }
    };

    info!(
        "marker {}x{} {} at ({}, {}) on {}x{} screen",
        size.width,
        size.height,
        color_to_hex(style.red, style.green, style.blue, style.opacity),
        origin.x,
        origin.y,
        screen.width,
        screen.height
    );

    unsafe {
        let _ = ShowWindow(hwnd, SW_SHOW);

        // Message loop
        let mut msg = MSG::default();
        loop {
            let ret = GetMessageW(&mut msg, None, 0, 0);
            if ret.0 == -1 {
                bail!("GetMessageW failed");
            }
            if ret.0 == 0 {
                break;
            }
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }

        // Cleanup: fails harmlessly if the window is already gone.
        let _ = DestroyWindow(hwnd);
    }

    let last = ctx.borrow().marker.origin();
    info!("marker closed at ({}, {})", last.x, last.y);
    Ok(())
}

/// Render and present the image for a freshly created window.
fn on_create(hwnd: HWND) -> LRESULT {
    let Some(cell) = (unsafe { context(hwnd) }) else {
        return LRESULT(-1);
    };
    let mut ctx = cell.borrow_mut();
    let origin = ctx.marker.origin();
    let result = present_marker(hwnd, ctx.marker.render(), origin);
    match result {
        Ok(()) => LRESULT(0),
        Err(e) => {
            ctx.create_error = Some(e);
            LRESULT(-1)
        }
    }
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        match msg {
            WM_NCCREATE => {
                let create = &*(lparam.0 as *const CREATESTRUCTW);
                attach_context(hwnd, create.lpCreateParams as *const RefCell<OverlayContext>);
                DefWindowProcW(hwnd, msg, wparam, lparam)
            }

            WM_CREATE => on_create(hwnd),

            WM_NCDESTROY => {
                detach_context(hwnd);
                DefWindowProcW(hwnd, msg, wparam, lparam)
            }

            _ => match translate_message(hwnd, msg, wparam, lparam) {
                Some(event) => {
                    // Re-entrant messages (ReleaseCapture sends WM_CAPTURECHANGED
                    // synchronously) find the context borrowed and are dropped;
                    // the drag state already reflects them.
                    if let Some(Ok(mut ctx)) = context(hwnd).map(RefCell::try_borrow_mut) {
                        ctx.marker.handle_event(&mut Win32Host::new(hwnd), &event);
                    }
                    LRESULT(0)
                }
                None => DefWindowProcW(hwnd, msg, wparam, lparam),
            },
        }
    }
}
