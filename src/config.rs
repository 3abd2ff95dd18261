//! Timing and brightness configuration.
//!
//! All timing parameters live here so they can be tuned in one place. The
//! defaults suit a 4x8 board with a tactile switch; boards with a
//! noisier switch or a slower strip can adjust them through
//! [`BoardConfig::builder`].

/// Minimum time between two accepted button edges (ms).
pub const DEFAULT_DEBOUNCE_MS: u64 = 20;

/// Presses shorter than this are short presses (ms).
pub const DEFAULT_SHORT_PRESS_MS: u64 = 500;

/// Presses at least this long are long presses; also the wake hold (ms).
pub const DEFAULT_LONG_PRESS_MS: u64 = 1500;

/// Minimum time between animation frames, 50 Hz (ms).
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 20;

/// Palette cadence in Flags mode (ms).
pub const DEFAULT_FLAG_CADENCE_MS: u64 = 600;

/// Firework step in Explosion mode (ms).
pub const DEFAULT_EXPLOSION_STEP_MS: u64 = 80;

/// How long a mode or set glyph stays on the grid (ms).
pub const DEFAULT_GLYPH_HOLD_MS: u32 = 400;

/// Pause between the mode glyph and the set glyph (ms).
pub const DEFAULT_GLYPH_GAP_MS: u32 = 300;

/// How long the first color of a newly selected set is shown (ms).
pub const DEFAULT_COLOR_PREVIEW_MS: u32 = 200;

/// Status flash after waking up (ms).
pub const DEFAULT_WAKE_FLASH_MS: u32 = 120;

/// Sleep between coordinator iterations (ms).
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 1;

/// Global brightness applied at startup.
pub const DEFAULT_INITIAL_BRIGHTNESS: f32 = 0.25;

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Debounce interval of zero.
    ZeroDebounce,

    /// Short-press threshold not strictly between zero and the long-press
    /// threshold.
    ThresholdOrder {
        /// Configured short-press threshold (ms).
        short_ms: u64,
        /// Configured long-press threshold (ms).
        long_ms: u64,
    },

    /// Frame interval of zero.
    ZeroFrameInterval,

    /// Initial brightness outside 0.0-1.0.
    BrightnessOutOfRange,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroDebounce => {
                write!(f, "debounce interval must be non-zero")
            }
            ConfigError::ThresholdOrder { short_ms, long_ms } => {
                write!(
                    f,
                    "short-press threshold ({} ms) must be non-zero and below the long-press threshold ({} ms)",
                    short_ms, long_ms
                )
            }
            ConfigError::ZeroFrameInterval => {
                write!(f, "frame interval must be non-zero")
            }
            ConfigError::BrightnessOutOfRange => {
                write!(f, "initial brightness must be within 0.0-1.0")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Validated board configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardConfig {
    pub(crate) debounce_ms: u64,
    pub(crate) short_press_ms: u64,
    pub(crate) long_press_ms: u64,
    pub(crate) frame_interval_ms: u64,
    pub(crate) flag_cadence_ms: u64,
    pub(crate) explosion_step_ms: u64,
    pub(crate) glyph_hold_ms: u32,
    pub(crate) glyph_gap_ms: u32,
    pub(crate) color_preview_ms: u32,
    pub(crate) wake_flash_ms: u32,
    pub(crate) poll_interval_ms: u32,
    pub(crate) initial_brightness: f32,
}

impl BoardConfig {
    /// Creates a builder starting from the defaults.
    pub fn builder() -> BoardConfigBuilder {
        BoardConfigBuilder::new()
    }

    /// Minimum time between two accepted button edges (ms).
    pub fn debounce_ms(&self) -> u64 {
        self.debounce_ms
    }

    /// Upper bound (exclusive) of a short press (ms).
    pub fn short_press_ms(&self) -> u64 {
        self.short_press_ms
    }

    /// Lower bound (inclusive) of a long press and the wake hold (ms).
    pub fn long_press_ms(&self) -> u64 {
        self.long_press_ms
    }

    /// Minimum time between animation frames (ms).
    pub fn frame_interval_ms(&self) -> u64 {
        self.frame_interval_ms
    }

    /// Sleep between coordinator iterations (ms).
    pub fn poll_interval_ms(&self) -> u32 {
        self.poll_interval_ms
    }

    /// Global brightness applied at startup.
    pub fn initial_brightness(&self) -> f32 {
        self.initial_brightness
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            short_press_ms: DEFAULT_SHORT_PRESS_MS,
            long_press_ms: DEFAULT_LONG_PRESS_MS,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            flag_cadence_ms: DEFAULT_FLAG_CADENCE_MS,
            explosion_step_ms: DEFAULT_EXPLOSION_STEP_MS,
            glyph_hold_ms: DEFAULT_GLYPH_HOLD_MS,
            glyph_gap_ms: DEFAULT_GLYPH_GAP_MS,
            color_preview_ms: DEFAULT_COLOR_PREVIEW_MS,
            wake_flash_ms: DEFAULT_WAKE_FLASH_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            initial_brightness: DEFAULT_INITIAL_BRIGHTNESS,
        }
    }
}

/// Builder for constructing a validated [`BoardConfig`].
#[derive(Debug)]
pub struct BoardConfigBuilder {
    config: BoardConfig,
}

impl BoardConfigBuilder {
    /// Creates a builder holding the default configuration.
    pub fn new() -> Self {
        Self {
            config: BoardConfig::default(),
        }
    }

    /// Sets the debounce interval.
    pub fn debounce_ms(mut self, ms: u64) -> Self {
        self.config.debounce_ms = ms;
        self
    }

    /// Sets the short/medium and medium/long press boundaries.
    pub fn press_thresholds_ms(mut self, short_ms: u64, long_ms: u64) -> Self {
        self.config.short_press_ms = short_ms;
        self.config.long_press_ms = long_ms;
        self
    }

    /// Sets the animation frame interval.
    pub fn frame_interval_ms(mut self, ms: u64) -> Self {
        self.config.frame_interval_ms = ms;
        self
    }

    /// Sets the Flags-mode palette cadence.
    pub fn flag_cadence_ms(mut self, ms: u64) -> Self {
        self.config.flag_cadence_ms = ms;
        self
    }

    /// Sets the Explosion-mode step interval.
    pub fn explosion_step_ms(mut self, ms: u64) -> Self {
        self.config.explosion_step_ms = ms;
        self
    }

    /// Sets glyph hold time and the gap between mode and set glyphs.
    pub fn glyph_timing_ms(mut self, hold_ms: u32, gap_ms: u32) -> Self {
        self.config.glyph_hold_ms = hold_ms;
        self.config.glyph_gap_ms = gap_ms;
        self
    }

    /// Sets how long a new set's first color is previewed.
    pub fn color_preview_ms(mut self, ms: u32) -> Self {
        self.config.color_preview_ms = ms;
        self
    }

    /// Sets the wake flash duration.
    pub fn wake_flash_ms(mut self, ms: u32) -> Self {
        self.config.wake_flash_ms = ms;
        self
    }

    /// Sets the sleep between coordinator iterations.
    pub fn poll_interval_ms(mut self, ms: u32) -> Self {
        self.config.poll_interval_ms = ms;
        self
    }

    /// Sets the global brightness applied at startup.
    pub fn initial_brightness(mut self, brightness: f32) -> Self {
        self.config.initial_brightness = brightness;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `ZeroDebounce` - Debounce interval is zero
    /// * `ThresholdOrder` - Short-press threshold is zero or not below the long-press threshold
    /// * `ZeroFrameInterval` - Frame interval is zero
    /// * `BrightnessOutOfRange` - Initial brightness outside 0.0-1.0
    pub fn build(self) -> Result<BoardConfig, ConfigError> {
        let config = self.config;

        if config.debounce_ms == 0 {
            return Err(ConfigError::ZeroDebounce);
        }

        if config.short_press_ms == 0 || config.short_press_ms >= config.long_press_ms {
            return Err(ConfigError::ThresholdOrder {
                short_ms: config.short_press_ms,
                long_ms: config.long_press_ms,
            });
        }

        if config.frame_interval_ms == 0 {
            return Err(ConfigError::ZeroFrameInterval);
        }

        if !(0.0..=1.0).contains(&config.initial_brightness) {
            return Err(ConfigError::BrightnessOutOfRange);
        }

        Ok(config)
    }
}

impl Default for BoardConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
