//! Static mode and palette tables.

use palette::Srgb;

use crate::color::Rgb8;

/// Number of display modes.
pub const MODE_COUNT: usize = 4;

/// Display mode selected by medium presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Static national flags.
    Flags,
    /// Firework bursts in flag colors.
    Explosion,
    /// Rotating bands, waves and sparkles.
    Gradient,
    /// Global brightness selection.
    Brightness,
}

impl Mode {
    /// Every mode in cycle order.
    pub const ALL: [Mode; MODE_COUNT] = [
        Mode::Flags,
        Mode::Explosion,
        Mode::Gradient,
        Mode::Brightness,
    ];

    /// Get the next mode in the cycle
    pub fn next(self) -> Self {
        match self {
            Mode::Flags => Mode::Explosion,
            Mode::Explosion => Mode::Gradient,
            Mode::Gradient => Mode::Brightness,
            Mode::Brightness => Mode::Flags,
        }
    }

    /// Position of the mode in the cycle.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Number of selectable sets in this mode.
    pub fn set_count(self) -> u8 {
        match self {
            Mode::Flags | Mode::Explosion | Mode::Gradient => FLAG_SETS.len() as u8,
            Mode::Brightness => BRIGHTNESS_LEVELS.len() as u8,
        }
    }
}

const BLUE: Rgb8 = Srgb::new(0, 0, 255);
const WHITE: Rgb8 = Srgb::new(255, 255, 255);
const RED: Rgb8 = Srgb::new(255, 0, 0);
const SUN_YELLOW: Rgb8 = Srgb::new(255, 200, 0);
const EU_BLUE: Rgb8 = Srgb::new(0, 51, 153);
const EU_YELLOW: Rgb8 = Srgb::new(255, 255, 0);

/// Flag colors. The index doubles as the set index in Flags and Gradient
/// modes.
pub const FLAG_SETS: [&[Rgb8]; 5] = [
    // France
    &[BLUE, WHITE, RED],
    // Philippines: triangle, top, bottom, sun
    &[WHITE, BLUE, RED, SUN_YELLOW],
    // Canada
    &[RED, WHITE, RED],
    // USA: canton, stripe, stripe
    &[BLUE, RED, WHITE],
    // EU: field, stars, field
    &[EU_BLUE, EU_YELLOW, EU_BLUE],
];

/// Palette for `set_index`, clamped to the last flag.
pub fn flag_palette(set_index: u8) -> &'static [Rgb8] {
    FLAG_SETS[usize::from(set_index).min(FLAG_SETS.len() - 1)]
}

/// Shell and spark colors for one firework set.
#[derive(Debug, Clone, Copy)]
pub struct ExplosionPalette {
    /// Main shell colors, cycled in order.
    pub colors: &'static [Rgb8],
    /// Lighter spark tints, one per shell color.
    pub sparks: &'static [Rgb8],
}

/// Firework palettes, indexed like [`FLAG_SETS`].
pub const EXPLOSION_SETS: [ExplosionPalette; 5] = [
    ExplosionPalette {
        colors: &[BLUE, WHITE, RED],
        sparks: &[
            Srgb::new(192, 192, 255),
            Srgb::new(255, 255, 255),
            Srgb::new(255, 192, 192),
        ],
    },
    ExplosionPalette {
        colors: &[WHITE, BLUE, RED, SUN_YELLOW],
        sparks: &[
            Srgb::new(255, 255, 220),
            Srgb::new(192, 192, 255),
            Srgb::new(255, 192, 192),
            Srgb::new(255, 220, 160),
        ],
    },
    ExplosionPalette {
        colors: &[RED, WHITE],
        sparks: &[Srgb::new(255, 160, 160), Srgb::new(255, 255, 220)],
    },
    ExplosionPalette {
        colors: &[BLUE, RED, WHITE],
        sparks: &[
            Srgb::new(160, 160, 255),
            Srgb::new(255, 160, 160),
            Srgb::new(255, 255, 220),
        ],
    },
    ExplosionPalette {
        colors: &[EU_BLUE, EU_YELLOW],
        sparks: &[Srgb::new(160, 180, 255), Srgb::new(255, 255, 160)],
    },
];

/// Firework palette for `set_index`, clamped to the last set.
pub fn explosion_palette(set_index: u8) -> &'static ExplosionPalette {
    &EXPLOSION_SETS[usize::from(set_index).min(EXPLOSION_SETS.len() - 1)]
}

/// Global brightness per Brightness-mode set.
pub const BRIGHTNESS_LEVELS: [f32; 6] = [0.04, 0.12, 0.25, 0.50, 0.75, 1.00];

/// Brightness for `set_index`, clamped to the brightest level.
pub fn brightness_level(set_index: u8) -> f32 {
    BRIGHTNESS_LEVELS[usize::from(set_index).min(BRIGHTNESS_LEVELS.len() - 1)]
}

/// First color shown when a set is selected, or `None` for modes without a
/// palette preview.
pub fn preview_color(mode: Mode, set_index: u8) -> Option<Rgb8> {
    match mode {
        Mode::Brightness => None,
        Mode::Flags | Mode::Gradient => flag_palette(set_index).first().copied(),
        Mode::Explosion => explosion_palette(set_index).colors.first().copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_cycle_visits_every_mode_once() {
        let mut mode = Mode::Flags;
        for expected in Mode::ALL.iter().skip(1) {
            mode = mode.next();
            assert_eq!(mode, *expected);
        }
        assert_eq!(mode.next(), Mode::Flags);
    }

    #[test]
    fn set_counts_match_tables() {
        assert_eq!(Mode::Flags.set_count(), 5);
        assert_eq!(Mode::Explosion.set_count(), 5);
        assert_eq!(Mode::Gradient.set_count(), 5);
        assert_eq!(Mode::Brightness.set_count(), 6);
    }

    #[test]
    fn spark_tables_match_color_tables() {
        for set in EXPLOSION_SETS.iter() {
            assert_eq!(set.colors.len(), set.sparks.len());
        }
    }

    #[test]
    fn lookups_clamp_out_of_range_indices() {
        assert_eq!(flag_palette(200).len(), FLAG_SETS[4].len());
        assert_eq!(brightness_level(99), 1.0);
    }

    #[test]
    fn brightness_mode_has_no_preview() {
        assert_eq!(preview_color(Mode::Brightness, 0), None);
        assert_eq!(preview_color(Mode::Flags, 0), Some(BLUE));
    }
}
