//! Owned, bounds-checked pixel grid.

use super::pixel::PremultipliedPixel;

/// Row-major pixel storage, top row first.
///
/// All access goes through `get`/`set`, which refuse out-of-range
/// coordinates instead of writing past the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<PremultipliedPixel>,
}

impl PixelBuffer {
    /// A fully transparent buffer.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![PremultipliedPixel::TRANSPARENT; len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Option<PremultipliedPixel> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Write one pixel. Returns `false` (and writes nothing) when out of bounds.
    pub fn set(&mut self, x: u32, y: u32, pixel: PremultipliedPixel) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = pixel;
                true
            }
            None => false,
        }
    }

    pub fn pixels(&self) -> &[PremultipliedPixel] {
        &self.pixels
    }

    /// Raw bytes (B, G, R, A per pixel), ready for a top-down 32-bpp DIB.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Iterate `(x, y, pixel)` in row-major order.
    pub fn enumerate(&self) -> impl Iterator<Item = (u32, u32, PremultipliedPixel)> + '_ {
        let width = self.width.max(1);
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, px)| ((i as u32) % width, (i as u32) / width, *px))
    }
}
