//! Transient button feedback.
//!
//! Two kinds of output live here:
//!
//! - **Progress bars**, redrawn on every tick while the button is held.
//!   These never block.
//! - **Scripts**, short fixed sequences of glyphs, color previews and
//!   flashes played after a press has been dispatched. Each step holds the
//!   display for a fixed time through the blocking [`DelayNs`] and a script
//!   always runs to completion.

use embedded_hal::delay::DelayNs;
use heapless::Vec;
use palette::Srgb;

use crate::color::{FEEDBACK_BLUE, FEEDBACK_RED, FEEDBACK_YELLOW, OFF, Rgb8, WHITE};
use crate::command::BoardCommand;
use crate::config::BoardConfig;
use crate::frame::{Frame, PIXEL_COUNT, bar_length};
use crate::glyph::{mode_glyph, set_glyph};
use crate::hal::PixelSurface;
use crate::registry::{Mode, preview_color};
use crate::state::DisplayState;
use crate::time::TimeInstant;

/// Longest script any command produces.
pub const MAX_SCRIPT_STEPS: usize = 4;

/// One step of a post-press feedback script.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeedbackStep {
    /// Show the glyph for a mode number in yellow.
    ModeGlyph(u8),
    /// Show the glyph for a set number in blue.
    SetGlyph(u8),
    /// Fill the grid and status pixel with a color.
    PaletteColor(Rgb8),
    /// Hold whatever is on the grid for the glyph gap.
    Pause,
    /// Blink the status LED and status pixel white.
    Flash,
    /// Turn the grid, status pixel and status LED off.
    Blank,
}

/// Steps played after a command, in order.
pub type FeedbackScript = Vec<FeedbackStep, MAX_SCRIPT_STEPS>;

/// Builds the feedback script for `command`, which has already been applied
/// to `state`.
pub fn script_for<I: TimeInstant>(command: BoardCommand, state: &DisplayState<I>) -> FeedbackScript {
    let mut script = FeedbackScript::new();
    let mut push = |step| {
        // Capacity covers the longest script below.
        let _ = script.push(step);
    };

    match command {
        BoardCommand::NextSet => {
            push(FeedbackStep::SetGlyph(state.set_index()));
            if let Some(color) = preview_color(state.mode(), state.set_index()) {
                push(FeedbackStep::PaletteColor(color));
            }
        }
        BoardCommand::NextMode => {
            push(FeedbackStep::ModeGlyph(state.mode().index() as u8));
            if state.mode() != Mode::Brightness {
                push(FeedbackStep::Pause);
                push(FeedbackStep::SetGlyph(state.set_index()));
            }
        }
        BoardCommand::ShutOff => push(FeedbackStep::Blank),
        BoardCommand::Wake { .. } => push(FeedbackStep::Flash),
    }

    script
}

/// Progress bar length and color while a press is held.
///
/// Blue fills over the short band, yellow refills over the medium band, and
/// the whole strip turns red once the press qualifies as long.
pub fn press_progress(elapsed_ms: u64, short_ms: u64, long_ms: u64) -> (usize, Rgb8) {
    if elapsed_ms < short_ms {
        (bar_length(elapsed_ms, short_ms), FEEDBACK_BLUE)
    } else if elapsed_ms < long_ms {
        (
            bar_length(elapsed_ms - short_ms, long_ms - short_ms),
            FEEDBACK_YELLOW,
        )
    } else {
        (PIXEL_COUNT, FEEDBACK_RED)
    }
}

/// Progress bar length and color while a wake press is held.
///
/// The first half ramps blue up to 32; the second half mixes in white up to
/// (64, 64, 64).
pub fn wake_progress(held_ms: u64, long_ms: u64) -> (usize, Rgb8) {
    let long_ms = long_ms.max(1);
    let held_ms = held_ms.min(long_ms);
    let lit = bar_length(held_ms, long_ms);

    let color = if 2 * held_ms < long_ms {
        Srgb::new(0, 0, (64 * held_ms / long_ms) as u8)
    } else {
        let white = (64 * (2 * held_ms - long_ms) / long_ms).min(64) as u8;
        Srgb::new(white, white, 64)
    };

    (lit, color)
}

/// Renders feedback and plays scripts on a pixel surface.
pub struct Feedback {
    glyph_hold_ms: u32,
    glyph_gap_ms: u32,
    color_preview_ms: u32,
    wake_flash_ms: u32,
    frame: Frame,
}

impl Feedback {
    /// Creates a renderer using the hold times from `config`.
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            glyph_hold_ms: config.glyph_hold_ms,
            glyph_gap_ms: config.glyph_gap_ms,
            color_preview_ms: config.color_preview_ms,
            wake_flash_ms: config.wake_flash_ms,
            frame: Frame::new(),
        }
    }

    /// Draws a bar of `lit` pixels and mirrors `status` on the status pixel.
    pub fn show_bar<S: PixelSurface>(&mut self, surface: &mut S, lit: usize, color: Rgb8, status: Rgb8) {
        self.frame.fill_bar(lit, color);
        self.frame.present(surface);
        surface.set_status_pixel(status);
    }

    /// Clears the grid and the status pixel.
    pub fn clear<S: PixelSurface>(&mut self, surface: &mut S) {
        self.frame.clear();
        self.frame.present(surface);
        surface.set_status_pixel(OFF);
    }

    /// Plays `script` to completion.
    pub fn play<S: PixelSurface, D: DelayNs>(
        &mut self,
        script: &[FeedbackStep],
        surface: &mut S,
        delay: &mut D,
    ) {
        for &step in script {
            match step {
                FeedbackStep::ModeGlyph(index) => {
                    self.frame.draw_bitmap(mode_glyph(usize::from(index)), FEEDBACK_YELLOW);
                    self.frame.present(surface);
                    delay.delay_ms(self.glyph_hold_ms);
                }
                FeedbackStep::SetGlyph(index) => {
                    self.frame.draw_bitmap(set_glyph(usize::from(index)), FEEDBACK_BLUE);
                    self.frame.present(surface);
                    delay.delay_ms(self.glyph_hold_ms);
                }
                FeedbackStep::PaletteColor(color) => {
                    self.frame.fill(color);
                    self.frame.present(surface);
                    surface.set_status_pixel(color);
                    delay.delay_ms(self.color_preview_ms);
                    surface.set_status_pixel(OFF);
                }
                FeedbackStep::Pause => {
                    delay.delay_ms(self.glyph_gap_ms);
                }
                FeedbackStep::Flash => {
                    surface.set_status_led(true);
                    surface.set_status_pixel(WHITE);
                    delay.delay_ms(self.wake_flash_ms);
                    surface.set_status_led(false);
                    surface.set_status_pixel(OFF);
                }
                FeedbackStep::Blank => {
                    self.clear(surface);
                    surface.set_status_led(false);
                }
            }
        }
    }
}
