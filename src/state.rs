//! Shared display state.
//!
//! One [`DisplayState`] exists for the lifetime of the board. The button
//! state machine changes the selection through [`DisplayState::apply`]; the
//! animation engine owns the phase counters, cadence timestamps and applied
//! brightness while it renders.

use crate::command::BoardCommand;
use crate::registry::{MODE_COUNT, Mode};
use crate::time::TimeInstant;

/// Current selection and animation bookkeeping.
#[derive(Debug, Clone, Copy)]
pub struct DisplayState<I: TimeInstant> {
    pub(crate) mode: Mode,
    pub(crate) set_index: u8,
    pub(crate) mode_saved_set: [u8; MODE_COUNT],
    pub(crate) palette_phase: u32,
    pub(crate) rotate_phase: u32,
    pub(crate) active: bool,
    pub(crate) last_frame_time: Option<I>,
    pub(crate) last_palette_tick: Option<I>,
    pub(crate) brightness: f32,
}

impl<I: TimeInstant> DisplayState<I> {
    /// Creates the startup state: Flags mode, first set, display on.
    pub fn new(brightness: f32) -> Self {
        Self {
            mode: Mode::Flags,
            set_index: 0,
            mode_saved_set: [0; MODE_COUNT],
            palette_phase: 0,
            rotate_phase: 0,
            active: true,
            last_frame_time: None,
            last_palette_tick: None,
            brightness: brightness.clamp(0.0, 1.0),
        }
    }

    /// Applies a transition.
    ///
    /// `now` is only used by [`BoardCommand::Wake`], which restarts the
    /// palette cadence from the moment of waking.
    pub fn apply(&mut self, command: BoardCommand, now: I) {
        match command {
            BoardCommand::NextSet => {
                self.set_index = (self.set_index + 1) % self.mode.set_count();
                self.palette_phase = 0;
            }
            BoardCommand::NextMode => {
                self.mode_saved_set[self.mode.index()] = self.set_index;
                self.mode = self.mode.next();
                self.set_index = self.clamp_set(self.mode, self.mode_saved_set[self.mode.index()]);
                self.reset_phases();
                self.last_palette_tick = None;
            }
            BoardCommand::ShutOff => {
                self.active = false;
            }
            BoardCommand::Wake { mode, set_index } => {
                self.mode = mode;
                self.set_index = self.clamp_set(mode, set_index);
                self.reset_phases();
                self.active = true;
                self.last_palette_tick = Some(now);
            }
        }
    }

    fn reset_phases(&mut self) {
        self.palette_phase = 0;
        self.rotate_phase = 0;
    }

    fn clamp_set(&self, mode: Mode, set_index: u8) -> u8 {
        set_index.min(mode.set_count() - 1)
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current set within the mode.
    pub fn set_index(&self) -> u8 {
        self.set_index
    }

    /// Set remembered for `mode` the last time it was left.
    pub fn saved_set(&self, mode: Mode) -> u8 {
        self.mode_saved_set[mode.index()]
    }

    /// Palette phase counter.
    pub fn palette_phase(&self) -> u32 {
        self.palette_phase
    }

    /// Rotation phase counter.
    pub fn rotate_phase(&self) -> u32 {
        self.rotate_phase
    }

    /// Returns false while the display is shut off.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Global brightness last applied to the surface.
    pub fn brightness(&self) -> f32 {
        self.brightness
    }
}
