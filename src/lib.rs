#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Coordinator`**: The control loop. Polls the button, runs the button state machine and renders animation frames
//! - **`ButtonStateMachine`**: Debounces the button, classifies presses as short/medium/long and draws press feedback
//! - **`AnimationEngine`**: Renders the current mode (flags, fireworks, gradient, brightness) at up to 50 Hz
//! - **`DisplayState`**: The selected mode and set plus animation phase counters, shared by both of the above
//! - **`BoardCommand`**: A state transition produced by a classified press
//! - **`BoardConfig`**: Validated timing thresholds and hold durations
//! - **`PixelSurface`**: Trait to implement for your LED grid, status pixel and status LED
//! - **`ButtonInput`**: Trait to implement for your button (or wrap an `InputPin` in `ActiveLowButton`)
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Pixels are 8-bit `Srgb<u8>` values (`Rgb8`), which is what addressable LED
//! drivers consume directly.

mod fmt;

pub mod animation;
pub mod button;
pub mod color;
pub mod command;
pub mod config;
pub mod coordinator;
pub mod feedback;
pub mod frame;
pub mod glyph;
pub mod hal;
pub mod registry;
pub mod state;
pub mod time;

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub use animation::AnimationEngine;
pub use button::{ButtonPhase, ButtonStateMachine, PressKind};
pub use color::Rgb8;
pub use command::BoardCommand;
pub use config::{BoardConfig, BoardConfigBuilder, ConfigError};
pub use coordinator::{Coordinator, StepOutcome};
pub use feedback::{FeedbackScript, FeedbackStep};
pub use frame::{GRID_COLS, GRID_ROWS, PIXEL_COUNT};
pub use hal::{ActiveLowButton, ButtonInput, NullSurface, PixelSurface, ReleasedButton};
pub use registry::{MODE_COUNT, Mode};
pub use state::DisplayState;
pub use time::{TimeDuration, TimeInstant, TimeSource};

#[cfg(feature = "std")]
pub use time::StdClock;

#[cfg(feature = "embassy-time")]
pub use time::EmbassyClock;
