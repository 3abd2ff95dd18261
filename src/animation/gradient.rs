//! Rotating gradient with a travelling wave and sparkles.

use crate::color::{Rgb8, blend, brighten, scale};
use crate::frame::{GRID_COLS, GRID_ROWS, Frame, grid_index};

const SPARKLE_GAIN: f32 = 1.5;

/// Positional band pattern, cycled every two rotation ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bands {
    Horizontal,
    Vertical,
    Diagonal,
    Radial,
}

impl Bands {
    fn at(rotate: u32) -> Self {
        match (rotate / 2) % 4 {
            0 => Bands::Horizontal,
            1 => Bands::Vertical,
            2 => Bands::Diagonal,
            _ => Bands::Radial,
        }
    }

    fn value(self, row: usize, col: usize, rotate: usize) -> usize {
        match self {
            Bands::Horizontal => (row + rotate) % 4,
            Bands::Vertical => (col + rotate) % 8,
            Bands::Diagonal => (row + col + rotate) % 4,
            Bands::Radial => {
                // Distance from the grid centre (1.5, 3.5); always a whole number.
                let distance = ((2 * row).abs_diff(3) + (2 * col).abs_diff(7)) / 2;
                (distance + rotate) % 4
            }
        }
    }
}

/// Length of one full rotation for a palette.
pub(crate) fn rotation_period(palette: &[Rgb8]) -> u32 {
    (palette.len().max(1) * 4) as u32
}

pub(crate) fn draw(frame: &mut Frame, palette: &[Rgb8], rotate: u32) {
    if palette.is_empty() {
        frame.clear();
        return;
    }

    let bands = Bands::at(rotate);
    let rotate = rotate as usize;
    let sparkle_phase = rotate % 3;
    let wave_pos = rotate % 8;

    let index = (rotate / 4) % palette.len();
    let next = (index + 1) % palette.len();
    let mid = blend(palette[index], palette[next], (rotate % 4) as f32 / 4.0);
    let bright = brighten(mid, SPARKLE_GAIN);

    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            let wave_distance = 4usize.abs_diff((col + wave_pos) % 8);
            let intensity = wave_distance as f32 / 4.0;
            let pattern = bands.value(row, col, rotate) as f32 / 4.0;

            let sparkle = (row + col + sparkle_phase) % 3 == 0 && wave_distance < 2;
            let color = if sparkle {
                bright
            } else {
                scale(mid, (pattern + intensity) / 2.0)
            };
            frame.set(grid_index(row, col), color);
        }
    }
}
