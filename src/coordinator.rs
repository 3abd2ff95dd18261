//! Main control loop.
//!
//! Provides [`Coordinator`], which owns the hardware, the shared
//! [`DisplayState`], the [`ButtonStateMachine`] and the [`AnimationEngine`],
//! and runs them in a single cooperative polling loop.

use embedded_hal::delay::DelayNs;

use crate::animation::AnimationEngine;
use crate::button::{ButtonPhase, ButtonStateMachine};
use crate::color::OFF;
use crate::command::BoardCommand;
use crate::config::BoardConfig;
use crate::frame::Frame;
use crate::hal::{ButtonInput, PixelSurface};
use crate::state::DisplayState;
use crate::time::{TimeInstant, TimeSource};

/// What happened during one coordinator iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepOutcome {
    /// Command dispatched by the button state machine, if a press completed.
    pub command: Option<BoardCommand>,
    /// True if the animation engine presented a frame.
    pub frame_rendered: bool,
}

/// Ties the clock, button, animation engine and pixel surface together.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `B` - Button implementation type
/// * `S` - Pixel surface implementation type
/// * `D` - Blocking delay used for feedback holds and loop pacing
pub struct Coordinator<'t, I, T, B, S, D>
where
    I: TimeInstant,
    T: TimeSource<I>,
    B: ButtonInput,
    S: PixelSurface,
    D: DelayNs,
{
    time_source: &'t T,
    button: B,
    surface: S,
    delay: D,
    machine: ButtonStateMachine<I>,
    engine: AnimationEngine,
    state: DisplayState<I>,
    poll_interval_ms: u32,
}

impl<'t, I, T, B, S, D> Coordinator<'t, I, T, B, S, D>
where
    I: TimeInstant,
    T: TimeSource<I>,
    B: ButtonInput,
    S: PixelSurface,
    D: DelayNs,
{
    /// Creates a coordinator, clears the display and applies the initial
    /// brightness.
    pub fn new(config: &BoardConfig, time_source: &'t T, button: B, mut surface: S, delay: D) -> Self {
        surface.set_global_brightness(config.initial_brightness);
        Frame::new().present(&mut surface);
        surface.set_status_pixel(OFF);
        surface.set_status_led(false);

        info!(
            "light show ready: {} pixels, brightness {}",
            surface.pixel_count(),
            config.initial_brightness
        );

        Self {
            time_source,
            button,
            surface,
            delay,
            machine: ButtonStateMachine::new(config),
            engine: AnimationEngine::new(config),
            state: DisplayState::new(config.initial_brightness),
            poll_interval_ms: config.poll_interval_ms,
        }
    }

    /// Runs one iteration: button first, then animation unless the button
    /// machine wrote to the surface this tick.
    ///
    /// The machine writes whenever a press is held before or after the tick
    /// (bar, release clear) and whenever it dispatches a command (script).
    pub fn step(&mut self) -> StepOutcome {
        let now = self.time_source.now();
        let pressed = self.button.is_pressed();
        let held_before = self.machine.is_showing_feedback();

        let command = self.machine.tick(
            now,
            pressed,
            &mut self.state,
            &mut self.surface,
            &mut self.delay,
        );

        let button_wrote = held_before || command.is_some() || self.machine.is_showing_feedback();
        let frame_rendered = if button_wrote {
            false
        } else {
            self.engine.render_frame(&mut self.state, &mut self.surface, now)
        };

        StepOutcome {
            command,
            frame_rendered,
        }
    }

    /// Runs the light show forever, sleeping the poll interval between
    /// iterations.
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
            self.delay.delay_ms(self.poll_interval_ms);
        }
    }

    /// Returns the shared display state.
    pub fn state(&self) -> &DisplayState<I> {
        &self.state
    }

    /// Returns the current button phase.
    pub fn button_phase(&self) -> ButtonPhase {
        self.machine.phase()
    }

    /// Returns true while button feedback owns the surface.
    pub fn is_showing_feedback(&self) -> bool {
        self.machine.is_showing_feedback()
    }

    /// Returns a reference to the pixel surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns a mutable reference to the button.
    pub fn button_mut(&mut self) -> &mut B {
        &mut self.button
    }

    /// Returns a reference to the delay provider.
    pub fn delay(&self) -> &D {
        &self.delay
    }
}
