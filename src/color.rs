//! Color helpers.
//!
//! Pixels are 8-bit sRGB (`palette::Srgb<u8>`), which is what addressable
//! LED drivers consume. Blending widens to an unnormalized `Srgb<f32>` so
//! interpolation uses palette's `Mix` implementation.

use palette::{Mix, Srgb};

/// An 8-bit RGB pixel value.
pub type Rgb8 = Srgb<u8>;

/// All channels off.
pub const OFF: Rgb8 = Srgb::new(0, 0, 0);

/// Full white, used for the wake flash.
pub const WHITE: Rgb8 = Srgb::new(255, 255, 255);

/// Dim blue: short-press band and set glyphs.
pub const FEEDBACK_BLUE: Rgb8 = Srgb::new(0, 0, 64);

/// Dim yellow: medium-press band and mode glyphs.
pub const FEEDBACK_YELLOW: Rgb8 = Srgb::new(64, 64, 0);

/// Dim red: long-press band.
pub const FEEDBACK_RED: Rgb8 = Srgb::new(64, 0, 0);

/// Dim white: brightness bar.
pub const DIM_WHITE: Rgb8 = Srgb::new(64, 64, 64);

/// Linearly interpolates from `from` to `to`.
///
/// `factor` is clamped to 0.0-1.0; 0.0 yields `from`, 1.0 yields `to`.
/// Channels are mixed on the 0-255 scale and truncated toward zero.
#[inline]
pub fn blend(from: Rgb8, to: Rgb8, factor: f32) -> Rgb8 {
    let widen = |c: Rgb8| Srgb::new(f32::from(c.red), f32::from(c.green), f32::from(c.blue));
    let mixed = widen(from).mix(widen(to), factor.clamp(0.0, 1.0));
    Srgb::new(mixed.red as u8, mixed.green as u8, mixed.blue as u8)
}

/// Scales a color toward black. `factor` is clamped to 0.0-1.0.
#[inline]
pub fn scale(color: Rgb8, factor: f32) -> Rgb8 {
    blend(OFF, color, factor)
}

/// Multiplies every channel by `factor`, saturating at 255.
pub fn brighten(color: Rgb8, factor: f32) -> Rgb8 {
    let lift = |channel: u8| {
        let value = f32::from(channel) * factor;
        if value >= 255.0 { 255 } else { value as u8 }
    };
    Srgb::new(lift(color.red), lift(color.green), lift(color.blue))
}
