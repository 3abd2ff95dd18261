//! Single-button state machine.
//!
//! Polls a raw button level once per tick, debounces edges, measures how
//! long each press lasted and turns it into a [`BoardCommand`]:
//!
//! | held              | kind   | command                          |
//! |-------------------|--------|----------------------------------|
//! | < short           | Short  | [`BoardCommand::NextSet`]        |
//! | short ..< long    | Medium | [`BoardCommand::NextMode`]       |
//! | >= long           | Long   | [`BoardCommand::ShutOff`]        |
//!
//! After a long press the machine waits for another press of at least the
//! long threshold and then issues [`BoardCommand::Wake`]; shorter presses
//! while waiting are dropped.
//!
//! While a press is held the machine draws a progress bar and owns the
//! pixel surface; see [`ButtonStateMachine::is_showing_feedback`].

use embedded_hal::delay::DelayNs;

use crate::color::OFF;
use crate::command::BoardCommand;
use crate::config::BoardConfig;
use crate::feedback::{Feedback, press_progress, script_for, wake_progress};
use crate::hal::PixelSurface;
use crate::registry::Mode;
use crate::state::DisplayState;
use crate::time::{TimeInstant, is_due};

/// Press duration category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressKind {
    /// Shorter than the short-press threshold.
    Short,
    /// At least the short-press threshold, shorter than the long one.
    Medium,
    /// At least the long-press threshold.
    Long,
}

impl PressKind {
    /// Classifies a press that lasted `held_ms`. Each band includes its
    /// lower bound.
    pub fn classify(held_ms: u64, short_ms: u64, long_ms: u64) -> Self {
        if held_ms < short_ms {
            PressKind::Short
        } else if held_ms < long_ms {
            PressKind::Medium
        } else {
            PressKind::Long
        }
    }
}

/// The current phase of the button state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonPhase {
    /// Button released, display on.
    Idle,
    /// Button held, progress bar showing.
    Pressed,
    /// Display off, waiting for a long press to wake up.
    WaitingWake,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Press,
    Release,
}

/// Accepts a level change only if the previous accepted change is at least
/// `debounce_ms` old.
#[derive(Debug, Clone, Copy)]
struct Debouncer<I: TimeInstant> {
    pressed: bool,
    last_edge: Option<I>,
    debounce_ms: u64,
}

impl<I: TimeInstant> Debouncer<I> {
    fn new(debounce_ms: u64) -> Self {
        Self {
            pressed: false,
            last_edge: None,
            debounce_ms,
        }
    }

    fn update(&mut self, raw_pressed: bool, now: I) -> Option<Edge> {
        if raw_pressed == self.pressed || !is_due(now, self.last_edge, self.debounce_ms) {
            return None;
        }

        self.pressed = raw_pressed;
        self.last_edge = Some(now);
        Some(if raw_pressed { Edge::Press } else { Edge::Release })
    }
}

/// Debounced press tracker driving mode and set selection.
pub struct ButtonStateMachine<I: TimeInstant> {
    debouncer: Debouncer<I>,
    phase: ButtonPhase,
    press_started_at: Option<I>,
    pre_shutoff: Option<(Mode, u8)>,
    short_press_ms: u64,
    long_press_ms: u64,
    feedback: Feedback,
}

impl<I: TimeInstant> ButtonStateMachine<I> {
    /// Creates an idle machine using the thresholds and hold times from
    /// `config`.
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            debouncer: Debouncer::new(config.debounce_ms),
            phase: ButtonPhase::Idle,
            press_started_at: None,
            pre_shutoff: None,
            short_press_ms: config.short_press_ms,
            long_press_ms: config.long_press_ms,
            feedback: Feedback::new(config),
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> ButtonPhase {
        self.phase
    }

    /// Returns true while a press is held and its progress bar owns the
    /// surface. Animation must not render while this holds.
    pub fn is_showing_feedback(&self) -> bool {
        match self.phase {
            ButtonPhase::Pressed => true,
            ButtonPhase::WaitingWake => self.press_started_at.is_some(),
            ButtonPhase::Idle => false,
        }
    }

    /// Selection saved when the display was shut off, if it is off.
    pub fn pre_shutoff(&self) -> Option<(Mode, u8)> {
        self.pre_shutoff
    }

    /// Advances the machine by one poll.
    ///
    /// `raw_pressed` is the undebounced button level for this tick. Any
    /// dispatched command has been applied to `state` and its feedback
    /// script has finished playing by the time this returns.
    ///
    /// # Returns
    /// The command dispatched this tick, if a press completed.
    pub fn tick<S: PixelSurface, D: DelayNs>(
        &mut self,
        now: I,
        raw_pressed: bool,
        state: &mut DisplayState<I>,
        surface: &mut S,
        delay: &mut D,
    ) -> Option<BoardCommand> {
        let edge = self.debouncer.update(raw_pressed, now);

        match (self.phase, edge) {
            (ButtonPhase::Idle, Some(Edge::Press)) => {
                debug!("button pressed");
                self.phase = ButtonPhase::Pressed;
                self.press_started_at = Some(now);
                self.render_press(now, surface);
                None
            }
            (ButtonPhase::Pressed, Some(Edge::Release)) => {
                let held_ms = self.finish_press(now, surface);
                self.phase = ButtonPhase::Idle;

                let kind = PressKind::classify(held_ms, self.short_press_ms, self.long_press_ms);
                info!("{:?} press ({} ms)", kind, held_ms);
                Some(self.dispatch(kind, now, state, surface, delay))
            }
            (ButtonPhase::Pressed, _) => {
                self.render_press(now, surface);
                None
            }
            (ButtonPhase::WaitingWake, Some(Edge::Press)) => {
                debug!("wake press started");
                self.press_started_at = Some(now);
                self.render_wake(now, surface);
                None
            }
            (ButtonPhase::WaitingWake, Some(Edge::Release)) => {
                let held_ms = self.finish_press(now, surface);
                if held_ms < self.long_press_ms {
                    debug!("wake press too short ({} ms), ignored", held_ms);
                    return None;
                }
                Some(self.wake(now, state, surface, delay))
            }
            (ButtonPhase::WaitingWake, None) => {
                self.render_wake(now, surface);
                None
            }
            (ButtonPhase::Idle, _) => None,
        }
    }

    fn dispatch<S: PixelSurface, D: DelayNs>(
        &mut self,
        kind: PressKind,
        now: I,
        state: &mut DisplayState<I>,
        surface: &mut S,
        delay: &mut D,
    ) -> BoardCommand {
        let command = match kind {
            PressKind::Short => BoardCommand::NextSet,
            PressKind::Medium => BoardCommand::NextMode,
            PressKind::Long => {
                self.pre_shutoff = Some((state.mode(), state.set_index()));
                self.phase = ButtonPhase::WaitingWake;
                BoardCommand::ShutOff
            }
        };

        state.apply(command, now);
        info!(
            "{:?}: mode {:?}, set {}, active {}",
            command,
            state.mode(),
            state.set_index(),
            state.is_active()
        );

        let script = script_for(command, state);
        self.feedback.play(&script, surface, delay);
        command
    }

    fn wake<S: PixelSurface, D: DelayNs>(
        &mut self,
        now: I,
        state: &mut DisplayState<I>,
        surface: &mut S,
        delay: &mut D,
    ) -> BoardCommand {
        let (mode, set_index) = self
            .pre_shutoff
            .take()
            .unwrap_or((state.mode(), state.set_index()));
        let command = BoardCommand::Wake { mode, set_index };

        state.apply(command, now);
        self.phase = ButtonPhase::Idle;
        info!("waking up: mode {:?}, set {}", mode, set_index);

        let script = script_for(command, state);
        self.feedback.play(&script, surface, delay);
        command
    }

    /// Ends the tracked press, clears its bar and returns how long it lasted.
    fn finish_press<S: PixelSurface>(&mut self, now: I, surface: &mut S) -> u64 {
        let held_ms = self
            .press_started_at
            .take()
            .map_or(0, |start| now.millis_since(start));
        self.feedback.clear(surface);
        held_ms
    }

    fn render_press<S: PixelSurface>(&mut self, now: I, surface: &mut S) {
        let Some(start) = self.press_started_at else {
            return;
        };
        let (lit, color) = press_progress(now.millis_since(start), self.short_press_ms, self.long_press_ms);
        self.feedback.show_bar(surface, lit, color, color);
    }

    fn render_wake<S: PixelSurface>(&mut self, now: I, surface: &mut S) {
        let Some(start) = self.press_started_at else {
            return;
        };
        let (lit, color) = wake_progress(now.millis_since(start), self.long_press_ms);
        let status = if lit > 0 { color } else { OFF };
        self.feedback.show_bar(surface, lit, color, status);
    }
}
