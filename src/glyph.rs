//! 4x8 pixel-font glyphs for mode ("m0".."m3") and set ("S0".."S5") numbers.
//!
//! Each glyph is a row-major bitmap matching the grid layout in
//! [`frame`](crate::frame).

use crate::frame::PIXEL_COUNT;

/// A one-bit-per-pixel grid bitmap.
pub type Glyph = [u8; PIXEL_COUNT];

#[rustfmt::skip]
const MODE_GLYPHS: [Glyph; 4] = [
    // m0
    [
        1, 0, 0, 1, 0, 0, 1, 0,
        1, 1, 1, 1, 0, 1, 0, 1,
        1, 0, 1, 1, 0, 1, 0, 1,
        1, 0, 0, 1, 0, 0, 1, 0,
    ],
    // m1
    [
        1, 0, 0, 1, 0, 0, 1, 0,
        1, 1, 1, 1, 0, 1, 1, 0,
        1, 0, 1, 1, 0, 0, 1, 0,
        1, 0, 0, 1, 0, 1, 1, 1,
    ],
    // m2
    [
        1, 0, 0, 1, 0, 1, 1, 0,
        1, 1, 1, 1, 0, 0, 0, 1,
        1, 0, 1, 1, 0, 1, 1, 0,
        1, 0, 0, 1, 0, 1, 1, 1,
    ],
    // m3
    [
        1, 0, 0, 1, 0, 1, 1, 1,
        1, 1, 1, 1, 0, 0, 1, 1,
        1, 0, 1, 1, 0, 0, 0, 1,
        1, 0, 0, 1, 0, 1, 1, 1,
    ],
];

#[rustfmt::skip]
const SET_GLYPHS: [Glyph; 6] = [
    // S0
    [
        1, 1, 1, 1, 0, 0, 1, 0,
        1, 1, 0, 0, 0, 1, 0, 1,
        0, 0, 1, 1, 0, 1, 0, 1,
        1, 1, 1, 1, 0, 0, 1, 0,
    ],
    // S1
    [
        1, 1, 1, 1, 0, 0, 1, 0,
        1, 1, 0, 0, 0, 1, 1, 0,
        0, 0, 1, 1, 0, 0, 1, 0,
        1, 1, 1, 1, 0, 1, 1, 1,
    ],
    // S2
    [
        1, 1, 1, 1, 0, 1, 1, 0,
        1, 1, 0, 0, 0, 0, 0, 1,
        0, 0, 1, 0, 0, 1, 1, 0,
        1, 1, 1, 1, 0, 1, 1, 1,
    ],
    // S3
    [
        1, 1, 1, 1, 0, 1, 1, 1,
        1, 1, 0, 0, 0, 0, 1, 1,
        0, 0, 1, 1, 0, 0, 0, 1,
        1, 1, 1, 1, 0, 1, 1, 1,
    ],
    // S4
    [
        1, 1, 1, 1, 0, 0, 0, 1,
        1, 1, 0, 0, 0, 0, 1, 1,
        0, 0, 1, 1, 0, 1, 1, 1,
        1, 1, 1, 1, 0, 0, 0, 1,
    ],
    // S5
    [
        1, 1, 1, 1, 0, 1, 1, 1,
        1, 1, 0, 0, 0, 1, 1, 0,
        0, 0, 1, 1, 0, 0, 0, 1,
        1, 1, 1, 1, 0, 1, 1, 0,
    ],
];

/// Glyph for mode number `index`, clamped to the last mode glyph.
pub fn mode_glyph(index: usize) -> &'static Glyph {
    &MODE_GLYPHS[index.min(MODE_GLYPHS.len() - 1)]
}

/// Glyph for set number `index`, clamped to the last set glyph.
pub fn set_glyph(index: usize) -> &'static Glyph {
    &SET_GLYPHS[index.min(SET_GLYPHS.len() - 1)]
}
