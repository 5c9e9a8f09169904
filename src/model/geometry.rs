//! Integer screen coordinates.
//!
//! Points are in virtual-screen pixels with the origin at the top-left of the
//! primary display, matching what `GetCursorPos` and `GetWindowRect` report.

use std::ops::{Add, Sub};

/// A point (or offset) in screen pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const ORIGIN: ScreenPoint = ScreenPoint { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for ScreenPoint {
    type Output = ScreenPoint;

    fn add(self, rhs: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(self.x.wrapping_add(rhs.x), self.y.wrapping_add(rhs.y))
    }
}

impl Sub for ScreenPoint {
    type Output = ScreenPoint;

    fn sub(self, rhs: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(self.x.wrapping_sub(rhs.x), self.y.wrapping_sub(rhs.y))
    }
}

/// Width and height in screen pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: i32,
    pub height: i32,
}

impl ScreenSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// A square of `side` pixels.
    pub const fn square(side: i32) -> Self {
        Self::new(side, side)
    }
}

/// Top-left corner that centers a `window` inside a `screen` anchored at (0, 0).
///
/// Uses truncating integer division, so an odd leftover pixel goes to the
/// right/bottom side. A window larger than the screen yields a negative origin.
pub fn centered_origin(screen: ScreenSize, window: ScreenSize) -> ScreenPoint {
    ScreenPoint::new(
        (screen.width - window.width) / 2,
        (screen.height - window.height) / 2,
    )
}
