//! Per-mode animation rendering.
//!
//! Provides [`AnimationEngine`], which turns the shared [`DisplayState`] into
//! one frame per tick. The engine rate-limits itself, so it can be called on
//! every coordinator iteration without flooding the LED strip.

mod brightness;
mod explosion;
mod flags;
mod gradient;

use crate::config::BoardConfig;
use crate::frame::Frame;
use crate::hal::PixelSurface;
use crate::registry::{Mode, brightness_level, explosion_palette, flag_palette};
use crate::state::DisplayState;
use crate::time::{TimeInstant, is_due};

/// Renders the current mode onto the pixel surface.
pub struct AnimationEngine {
    frame_interval_ms: u64,
    flag_cadence_ms: u64,
    explosion_step_ms: u64,
    frame: Frame,
}

impl AnimationEngine {
    /// Creates an engine using the frame and cadence timings from `config`.
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            frame_interval_ms: config.frame_interval_ms,
            flag_cadence_ms: config.flag_cadence_ms,
            explosion_step_ms: config.explosion_step_ms,
            frame: Frame::new(),
        }
    }

    /// Renders one frame if the frame interval has elapsed.
    ///
    /// The frame timestamp is updated whenever the interval has elapsed,
    /// even while the display is off; an inactive display is left untouched.
    ///
    /// # Returns
    /// `true` if a frame was written and flushed to `surface`.
    pub fn render_frame<I: TimeInstant, S: PixelSurface>(
        &mut self,
        state: &mut DisplayState<I>,
        surface: &mut S,
        now: I,
    ) -> bool {
        if !is_due(now, state.last_frame_time, self.frame_interval_ms) {
            return false;
        }
        state.last_frame_time = Some(now);

        if !state.active {
            return false;
        }

        match state.mode {
            Mode::Flags => {
                flags::draw(&mut self.frame, state.set_index);
                self.advance_palette(state, now, self.flag_cadence_ms);
            }
            Mode::Explosion => {
                explosion::draw(
                    &mut self.frame,
                    explosion_palette(state.set_index),
                    state.palette_phase,
                );
                self.advance_palette(state, now, self.explosion_step_ms);
            }
            Mode::Gradient => {
                let palette = flag_palette(state.set_index);
                gradient::draw(&mut self.frame, palette, state.rotate_phase);
                state.rotate_phase = (state.rotate_phase + 1) % gradient::rotation_period(palette);
            }
            Mode::Brightness => {
                let level = brightness_level(state.set_index);
                if level != state.brightness {
                    info!("brightness {} -> {}", state.brightness, level);
                    state.brightness = level;
                    surface.set_global_brightness(level);
                }
                brightness::draw(&mut self.frame, level);
            }
        }

        self.frame.present(surface);
        true
    }

    fn advance_palette<I: TimeInstant>(&self, state: &mut DisplayState<I>, now: I, cadence_ms: u64) {
        if is_due(now, state.last_palette_tick, cadence_ms) {
            state.palette_phase = state.palette_phase.wrapping_add(1);
            state.last_palette_tick = Some(now);
        }
    }
}
