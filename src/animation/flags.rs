//! Static flag bitmaps.

use crate::color::{OFF, Rgb8};
use crate::frame::{GRID_COLS, GRID_ROWS, Frame};
use crate::registry::flag_palette;

#[inline]
fn pick(palette: &[Rgb8], index: usize) -> Rgb8 {
    palette
        .get(index)
        .or_else(|| palette.last())
        .copied()
        .unwrap_or(OFF)
}

/// Draws the flag for `set_index`. Indices past the last flag draw the last.
pub(crate) fn draw(frame: &mut Frame, set_index: u8) {
    let palette = flag_palette(set_index);
    frame.clear();

    match set_index {
        0 => france(frame, palette),
        1 => philippines(frame, palette),
        2 => canada(frame, palette),
        3 => usa(frame, palette),
        _ => europe(frame, palette),
    }
}

fn france(frame: &mut Frame, palette: &[Rgb8]) {
    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            let stripe = match col {
                0..=2 => 0,
                3..=4 => 1,
                _ => 2,
            };
            frame.set_cell(row, col, pick(palette, stripe));
        }
    }
}

fn philippines(frame: &mut Frame, palette: &[Rgb8]) {
    let triangle = pick(palette, 0);

    for row in 0..GRID_ROWS {
        let field = if row < 2 { pick(palette, 1) } else { pick(palette, 2) };
        for col in 0..GRID_COLS {
            frame.set_cell(row, col, field);
        }
    }

    // White hoist triangle pointing right.
    for row in 0..GRID_ROWS {
        frame.set_cell(row, 0, triangle);
    }
    for row in 0..3 {
        frame.set_cell(row, 1, triangle);
    }
    for row in 1..3 {
        frame.set_cell(row, 2, triangle);
    }
    frame.set_cell(1, 3, triangle);

    // Sun
    frame.set_cell(1, 2, pick(palette, 3));
}

fn canada(frame: &mut Frame, palette: &[Rgb8]) {
    let red = pick(palette, 0);
    frame.fill(pick(palette, 1));

    for row in 0..GRID_ROWS {
        for col in [0, 1, 6, 7] {
            frame.set_cell(row, col, red);
        }
    }

    // Maple leaf
    for (row, col) in [(1, 3), (1, 4), (2, 3), (2, 4)] {
        frame.set_cell(row, col, red);
    }
}

fn usa(frame: &mut Frame, palette: &[Rgb8]) {
    let stripes = [pick(palette, 1), pick(palette, 2)];

    for row in 0..GRID_ROWS {
        let start_col = if row < 2 { 3 } else { 0 };
        for col in 0..start_col {
            frame.set_cell(row, col, pick(palette, 0));
        }
        for col in start_col..GRID_COLS {
            frame.set_cell(row, col, stripes[row % 2]);
        }
    }
}

fn europe(frame: &mut Frame, palette: &[Rgb8]) {
    const STARS: [(usize, usize); 8] = [
        (1, 2),
        (1, 5),
        (2, 2),
        (2, 5),
        (0, 3),
        (0, 4),
        (3, 3),
        (3, 4),
    ];

    frame.fill(pick(palette, 0));
    for (row, col) in STARS {
        frame.set_cell(row, col, pick(palette, 1));
    }
}
