//! Hard-edged circle rasterization.

use super::buffer::PixelBuffer;
use super::pixel::PremultipliedPixel;
use crate::model::MarkerStyle;

/// Whether pixel `(x, y)` of a `2r x 2r` image lies on the disc centered at `(r, r)`.
///
/// The test uses the pixel's top-left corner, not its center, and has no
/// anti-aliasing: the edge is a hard step.
pub fn inside_circle(x: u32, y: u32, radius: u32) -> bool {
    let dx = i64::from(x) - i64::from(radius);
    let dy = i64::from(y) - i64::from(radius);
    let r = i64::from(radius);
    dx * dx + dy * dy <= r * r
}

/// Render the marker dot described by `style` into a fresh buffer.
pub fn render_marker(style: &MarkerStyle) -> PixelBuffer {
    let side = style.diameter();
    let mut buffer = PixelBuffer::new(side, side);
    let fill = PremultipliedPixel::from_straight(style.red, style.green, style.blue, style.opacity);

    for y in 0..side {
        for x in 0..side {
            if inside_circle(x, y, style.radius) {
                buffer.set(x, y, fill);
            }
        }
    }

    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_and_corners() {
        assert!(inside_circle(20, 20, 20));
        assert!(!inside_circle(0, 0, 20));
        assert!(!inside_circle(39, 39, 20));
    }

    #[test]
    fn test_edge_is_inclusive() {
        // (0, 20): dx = -20, dy = 0 lies exactly on the circle.
        assert!(inside_circle(0, 20, 20));
        assert!(inside_circle(20, 0, 20));
    }

    #[test]
    fn test_reference_marker_center_pixel() {
        let buf = render_marker(&MarkerStyle::default());
        let px = buf.get(20, 20).unwrap();
        assert_eq!((px.r, px.g, px.b, px.a), (128, 64, 0, 128));
    }

    #[test]
    fn test_zero_opacity_marker_is_invisible() {
        let style = MarkerStyle {
            opacity: 0.0,
            ..MarkerStyle::default()
        };
        let buf = render_marker(&style);
        assert!(buf.pixels().iter().all(|p| p.is_transparent()));
    }
}
