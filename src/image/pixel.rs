//! Premultiplied-alpha pixel in DIB byte order.

use bytemuck::{Pod, Zeroable};

/// One 32-bit pixel, laid out B, G, R, A to match a 32-bpp `BI_RGB` DIB.
///
/// Color channels are already multiplied by alpha, which is what
/// `UpdateLayeredWindow` with `AC_SRC_ALPHA` expects.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct PremultipliedPixel {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl PremultipliedPixel {
    /// Fully transparent black.
    pub const TRANSPARENT: PremultipliedPixel = PremultipliedPixel {
        b: 0,
        g: 0,
        r: 0,
        a: 0,
    };

    /// Premultiply a straight RGB color by `opacity` in [0.0, 1.0].
    pub fn from_straight(red: u8, green: u8, blue: u8, opacity: f64) -> Self {
        Self {
            b: scale_channel(blue, opacity),
            g: scale_channel(green, opacity),
            r: scale_channel(red, opacity),
            a: scale_channel(u8::MAX, opacity),
        }
    }

    pub fn is_transparent(&self) -> bool {
        *self == Self::TRANSPARENT
    }
}

/// `round(value * opacity)`, saturated to the byte range.
pub fn scale_channel(value: u8, opacity: f64) -> u8 {
    (f64::from(value) * opacity).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_channel_rounds_half_up() {
        assert_eq!(scale_channel(255, 0.5), 128);
        assert_eq!(scale_channel(128, 0.5), 64);
        assert_eq!(scale_channel(1, 0.5), 1);
    }

    #[test]
    fn test_scale_channel_saturates() {
        assert_eq!(scale_channel(200, 2.0), 255);
        assert_eq!(scale_channel(200, -1.0), 0);
    }

    #[test]
    fn test_pixel_is_four_bytes_bgra() {
        let px = PremultipliedPixel::from_straight(255, 128, 0, 0.5);
        assert_eq!(bytemuck::bytes_of(&px), &[0, 64, 128, 128]);
    }

    #[test]
    fn test_opaque_pixel_keeps_color() {
        let px = PremultipliedPixel::from_straight(10, 20, 30, 1.0);
        assert_eq!((px.r, px.g, px.b, px.a), (10, 20, 30, 255));
    }
}
