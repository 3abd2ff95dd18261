//! Brightness level bar.

use crate::color::DIM_WHITE;
use crate::frame::{Frame, PIXEL_COUNT};

/// Pixels lit for a brightness level, rounding down.
pub(crate) fn bar_pixels(level: f32) -> usize {
    ((PIXEL_COUNT as f32 * level.clamp(0.0, 1.0)) as usize).min(PIXEL_COUNT)
}

pub(crate) fn draw(frame: &mut Frame, level: f32) {
    frame.fill_bar(bar_pixels(level), DIM_WHITE);
}
