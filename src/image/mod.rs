//! Marker image generation.
//!
//! Pure Rust (no FFI): produces the premultiplied BGRA pixels that the
//! platform layer copies into a layered window surface.

pub mod buffer;
pub mod circle;
pub mod pixel;

pub use buffer::PixelBuffer;
pub use circle::{inside_circle, render_marker};
pub use pixel::PremultipliedPixel;
