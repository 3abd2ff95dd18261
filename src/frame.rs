//! Frame buffer for the 4x8 LED grid.
//!
//! The grid is addressed row-major:
//!
//! ```text
//!  0  1  2  3  4  5  6  7
//!  8  9 10 11 12 13 14 15
//! 16 17 18 19 20 21 22 23
//! 24 25 26 27 28 29 30 31
//! ```

use crate::color::{OFF, Rgb8};
use crate::hal::PixelSurface;

/// Number of grid rows.
pub const GRID_ROWS: usize = 4;

/// Number of grid columns.
pub const GRID_COLS: usize = 8;

/// Number of pixels on the grid.
pub const PIXEL_COUNT: usize = GRID_ROWS * GRID_COLS;

/// Returns the strip index of a grid cell.
#[inline]
pub const fn grid_index(row: usize, col: usize) -> usize {
    row * GRID_COLS + col
}

/// A full frame of pixel colors, drawn off-screen and presented at once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pixels: [Rgb8; PIXEL_COUNT],
}

impl Frame {
    /// Creates a frame with every pixel off.
    pub const fn new() -> Self {
        Self {
            pixels: [OFF; PIXEL_COUNT],
        }
    }

    /// Turns every pixel off.
    pub fn clear(&mut self) {
        self.fill(OFF);
    }

    /// Sets every pixel to `color`.
    pub fn fill(&mut self, color: Rgb8) {
        self.pixels = [color; PIXEL_COUNT];
    }

    /// Sets a pixel by strip index. Out-of-range indices are ignored.
    #[inline]
    pub fn set(&mut self, index: usize, color: Rgb8) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    /// Sets a pixel by grid cell. Cells outside the grid are ignored.
    #[inline]
    pub fn set_cell(&mut self, row: usize, col: usize, color: Rgb8) {
        if row < GRID_ROWS && col < GRID_COLS {
            self.pixels[grid_index(row, col)] = color;
        }
    }

    /// Returns the color of a pixel, or `None` past the end of the grid.
    pub fn get(&self, index: usize) -> Option<Rgb8> {
        self.pixels.get(index).copied()
    }

    /// Lights the first `lit` pixels with `color` and clears the rest.
    pub fn fill_bar(&mut self, lit: usize, color: Rgb8) {
        for (index, pixel) in self.pixels.iter_mut().enumerate() {
            *pixel = if index < lit { color } else { OFF };
        }
    }

    /// Draws `color` wherever `bitmap` is set and clears everything else.
    pub fn draw_bitmap(&mut self, bitmap: &[u8; PIXEL_COUNT], color: Rgb8) {
        for (pixel, &bit) in self.pixels.iter_mut().zip(bitmap.iter()) {
            *pixel = if bit != 0 { color } else { OFF };
        }
    }

    /// Returns the pixel colors in strip order.
    pub fn pixels(&self) -> &[Rgb8] {
        &self.pixels
    }

    /// Writes the frame to `surface` and flushes it once.
    ///
    /// Pixels beyond the surface's own length are dropped.
    pub fn present<S: PixelSurface>(&self, surface: &mut S) {
        let count = usize::from(surface.pixel_count()).min(PIXEL_COUNT);
        for (index, &color) in self.pixels[..count].iter().enumerate() {
            surface.write_pixel(index as u16, color);
        }
        surface.flush();
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of bar pixels lit for `numerator / denominator` of the strip.
///
/// Rounds down and saturates at a full strip.
#[inline]
pub fn bar_length(numerator: u64, denominator: u64) -> usize {
    if denominator == 0 || numerator >= denominator {
        return PIXEL_COUNT;
    }
    (PIXEL_COUNT as u64 * numerator / denominator) as usize
}
