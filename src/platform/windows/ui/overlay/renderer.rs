//! Layered-window presentation of the marker image.
//!
//! Copies the premultiplied pixels into a 32-bpp DIB section and hands it to
//! `UpdateLayeredWindow` with per-pixel alpha.

use windows::core::{Error, Result};
use windows::Win32::Foundation::{COLORREF, E_FAIL, HWND, POINT, SIZE};
use windows::Win32::Graphics::Gdi::{
    CreateCompatibleDC, CreateDIBSection, DeleteDC, DeleteObject, GetDC, ReleaseDC, SelectObject,
    AC_SRC_ALPHA, AC_SRC_OVER, BITMAPINFO, BITMAPINFOHEADER, BI_RGB, BLENDFUNCTION,
    DIB_RGB_COLORS, HBITMAP, HDC, HGDIOBJ,
};
use windows::Win32::UI::WindowsAndMessaging::{UpdateLayeredWindow, ULW_ALPHA};

use crate::image::PixelBuffer;
use crate::model::ScreenPoint;

/// Screen DC, released on drop.
struct ScreenDc(HDC);

impl Drop for ScreenDc {
    fn drop(&mut self) {
        unsafe {
            ReleaseDC(None, self.0);
        }
    }
}

/// Memory DC, deleted on drop.
struct MemoryDc(HDC);

impl Drop for MemoryDc {
    fn drop(&mut self) {
        unsafe {
            let _ = DeleteDC(self.0);
        }
    }
}

/// DIB section, deleted on drop. Must outlive its `Selection`.
struct DibSection(HBITMAP);

impl Drop for DibSection {
    fn drop(&mut self) {
        unsafe {
            let _ = DeleteObject(self.0.into());
        }
    }
}

/// Restores the DC's previous object on drop.
struct Selection {
    dc: HDC,
    previous: HGDIOBJ,
}

impl Drop for Selection {
    fn drop(&mut self) {
        unsafe {
            SelectObject(self.dc, self.previous);
        }
    }
}

/// Composite `image` onto `hwnd` at screen position `origin`.
///
/// Every GDI object acquired here is released before returning, on success
/// and on every error path.
pub fn present_marker(hwnd: HWND, image: &PixelBuffer, origin: ScreenPoint) -> Result<()> {
    let width = image.width() as i32;
    let height = image.height() as i32;
    let pixels = image.as_bytes();

    unsafe {
        let screen_dc = ScreenDc(GetDC(None));
        if screen_dc.0.is_invalid() {
            return Err(Error::new(E_FAIL, "GetDC returned no screen DC"));
        }

        let mem_dc = MemoryDc(CreateCompatibleDC(Some(screen_dc.0)));
        if mem_dc.0.is_invalid() {
            return Err(Error::new(E_FAIL, "CreateCompatibleDC failed"));
        }

        let bmi = BITMAPINFO {
            bmiHeader: BITMAPINFOHEADER {
                biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
                biWidth: width,
                biHeight: -height, // Top-down
                biPlanes: 1,
                biBitCount: 32,
                biCompression: BI_RGB.0,
                ..Default::default()
            },
            ..Default::default()
        };

        let mut bits: *mut std::ffi::c_void = std::ptr::null_mut();
        let bitmap = DibSection(CreateDIBSection(
            Some(screen_dc.0),
            &bmi,
            DIB_RGB_COLORS,
            &mut bits,
            None,
            0,
        )?);
        if bits.is_null() {
            return Err(Error::new(E_FAIL, "CreateDIBSection returned no pixel memory"));
        }

        // The DIB is width * height * 4 bytes, exactly the buffer's length.
        std::slice::from_raw_parts_mut(bits.cast::<u8>(), pixels.len()).copy_from_slice(pixels);

        let _selection = Selection {
            dc: mem_dc.0,
            previous: SelectObject(mem_dc.0, bitmap.0.into()),
        };

        let pt_src = POINT { x: 0, y: 0 };
        let pt_dst = POINT {
            x: origin.x,
            y: origin.y,
        };
        let size = SIZE {
            cx: width,
            cy: height,
        };
        let blend = BLENDFUNCTION {
            BlendOp: AC_SRC_OVER as u8,
            BlendFlags: 0,
            SourceConstantAlpha: 255,
            AlphaFormat: AC_SRC_ALPHA as u8,
        };

        UpdateLayeredWindow(
            hwnd,
            Some(screen_dc.0),
            Some(&pt_dst),
            Some(&size),
            Some(mem_dc.0),
            Some(&pt_src),
            COLORREF(0),
            Some(&blend),
            ULW_ALPHA,
        )
    }
}
