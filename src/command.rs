//! State transitions triggered by classified button presses.

use crate::registry::Mode;

/// A transition of the shared [`DisplayState`](crate::DisplayState).
///
/// Produced by the button state machine and applied with
/// [`DisplayState::apply`](crate::DisplayState::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardCommand {
    /// Advance to the next set of the current mode.
    NextSet,
    /// Remember the current set and advance to the next mode.
    NextMode,
    /// Turn the display off.
    ShutOff,
    /// Turn the display back on with the given selection.
    Wake {
        /// Mode to restore.
        mode: Mode,
        /// Set to restore within `mode`.
        set_index: u8,
    },
}
