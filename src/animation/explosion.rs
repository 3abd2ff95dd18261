//! Firework animation.
//!
//! The palette phase drives an 8-step cycle, two phase ticks per step:
//!
//! | step | stage                                     |
//! |------|-------------------------------------------|
//! | 0-3  | shell rises up column 3 leaving a trail   |
//! | 4-5  | burst: 9-point star around the apex       |
//! | 6    | expanding ring, Manhattan radius 2        |
//! | 7    | sparkles on 8 edge points, fading out     |

use crate::color::{OFF, Rgb8, blend, scale};
use crate::frame::{GRID_COLS, GRID_ROWS, Frame, grid_index};
use crate::registry::ExplosionPalette;

const LAUNCH_COL: usize = 3;
const APEX: (usize, usize) = (0, LAUNCH_COL);
const BURST_RADIUS: usize = 2;
const TRAIL_LEVEL: f32 = 0.7;

const BURST_OFFSETS: [(isize, isize); 9] = [
    (0, 0),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

const SPARKLE_PIXELS: [usize; 8] = [
    grid_index(0, 1),
    grid_index(0, 6),
    grid_index(3, 1),
    grid_index(3, 6),
    grid_index(1, 0),
    grid_index(1, 7),
    grid_index(2, 0),
    grid_index(2, 7),
];

/// Stage of the firework cycle for a palette phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stage {
    Launch(usize),
    Burst,
    Expand,
    Sparkle,
}

impl Stage {
    pub(crate) fn at(phase: u32) -> Self {
        match (phase / 2) % 8 {
            step @ 0..=3 => Stage::Launch(step as usize),
            4 | 5 => Stage::Burst,
            6 => Stage::Expand,
            _ => Stage::Sparkle,
        }
    }
}

/// Shell and spark colors for a phase, blended toward the next palette entry.
fn phase_colors(palette: &ExplosionPalette, phase: u32) -> (Rgb8, Rgb8) {
    let len = palette.colors.len().min(palette.sparks.len()).max(1);
    let index = (phase as usize / 4) % len;
    let next = (index + 1) % len;
    let factor = (phase % 4) as f32 / 4.0;

    let color = match (palette.colors.get(index), palette.colors.get(next)) {
        (Some(&a), Some(&b)) => blend(a, b, factor),
        _ => OFF,
    };
    let spark = match (palette.sparks.get(index), palette.sparks.get(next)) {
        (Some(&a), Some(&b)) => blend(a, b, factor),
        _ => OFF,
    };
    (color, spark)
}

pub(crate) fn draw(frame: &mut Frame, palette: &ExplosionPalette, phase: u32) {
    frame.clear();

    let (color, spark) = phase_colors(palette, phase);
    let spark_phase = (phase % 4) as usize;

    match Stage::at(phase) {
        Stage::Launch(height) => {
            let head = GRID_ROWS - 1 - height;
            frame.set_cell(head, LAUNCH_COL, color);
            for row in head + 1..GRID_ROWS {
                let distance = (row - head) as f32 / 3.0;
                frame.set_cell(row, LAUNCH_COL, scale(color, (1.0 - distance) * TRAIL_LEVEL));
            }
        }
        Stage::Burst => {
            let tint = if spark_phase % 2 == 0 { color } else { spark };
            for (dr, dc) in BURST_OFFSETS {
                let row = APEX.0 as isize + dr;
                let col = APEX.1 as isize + dc;
                if row >= 0 && col >= 0 {
                    frame.set_cell(row as usize, col as usize, tint);
                }
            }
        }
        Stage::Expand => {
            for row in 0..GRID_ROWS {
                for col in 0..GRID_COLS {
                    if row.abs_diff(APEX.0) + col.abs_diff(APEX.1) > BURST_RADIUS {
                        continue;
                    }
                    let index = grid_index(row, col);
                    let tint = if (index + spark_phase) % 3 == 0 { spark } else { color };
                    frame.set(index, tint);
                }
            }
        }
        Stage::Sparkle => {
            // Full strength on the first tick of the step, half on the second.
            let fade = if phase % 2 == 0 { 1.0 } else { 0.5 };
            for index in SPARKLE_PIXELS {
                let tint = if (index + spark_phase) % 2 == 0 { spark } else { color };
                frame.set(index, scale(tint, fade));
            }
        }
    }
}
