//! Hardware seams.
//!
//! The light show talks to the board through two small traits:
//! [`PixelSurface`] for the LED grid, status pixel and status LED, and
//! [`ButtonInput`] for the single pushbutton. Both are infallible by
//! contract. Board support code is expected to swallow peripheral errors (or
//! fall back to [`NullSurface`] / [`ReleasedButton`]) before handing the
//! implementations to the [`Coordinator`](crate::Coordinator).

use embedded_hal::digital::InputPin;

use crate::color::Rgb8;

/// Trait for abstracting an addressable LED surface.
///
/// Writes are buffered until [`flush`](PixelSurface::flush) is called.
pub trait PixelSurface {
    /// Number of addressable pixels on the surface.
    fn pixel_count(&self) -> u16;

    /// Sets one pixel in the pending frame. Out-of-range indices are ignored.
    fn write_pixel(&mut self, index: u16, color: Rgb8);

    /// Pushes the pending frame to the LEDs.
    fn flush(&mut self);

    /// Sets the single on-board status pixel.
    fn set_status_pixel(&mut self, color: Rgb8);

    /// Switches the plain on-board status LED.
    fn set_status_led(&mut self, on: bool);

    /// Sets the global brightness scale (0.0-1.0) applied to every flush.
    fn set_global_brightness(&mut self, brightness: f32);
}

/// Trait for abstracting the pushbutton.
pub trait ButtonInput {
    /// Returns true while the button is held down.
    fn is_pressed(&mut self) -> bool;
}

/// Pushbutton wired to ground with a pull-up: a low level means pressed.
///
/// Pin read errors are reported as "released" so a flaky input can never
/// lock the light show in a press.
pub struct ActiveLowButton<P: InputPin> {
    pin: P,
}

impl<P: InputPin> ActiveLowButton<P> {
    /// Wraps an input pin.
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Releases the wrapped pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> ButtonInput for ActiveLowButton<P> {
    fn is_pressed(&mut self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }
}

/// Stub button for boards without one. Never pressed.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReleasedButton;

impl ButtonInput for ReleasedButton {
    fn is_pressed(&mut self) -> bool {
        false
    }
}

/// Stub surface for boards without a display. Accepts and drops everything.
#[derive(Debug, Clone, Copy)]
pub struct NullSurface {
    pixel_count: u16,
}

impl NullSurface {
    /// Creates a stub reporting `pixel_count` pixels.
    pub const fn new(pixel_count: u16) -> Self {
        Self { pixel_count }
    }
}

impl PixelSurface for NullSurface {
    fn pixel_count(&self) -> u16 {
        self.pixel_count
    }

    fn write_pixel(&mut self, _index: u16, _color: Rgb8) {}

    fn flush(&mut self) {}

    fn set_status_pixel(&mut self, _color: Rgb8) {}

    fn set_status_led(&mut self, _on: bool) {}

    fn set_global_brightness(&mut self, _brightness: f32) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::{Error, ErrorKind, ErrorType};

    struct LevelPin(bool);

    impl ErrorType for LevelPin {
        type Error = Infallible;
    }

    impl InputPin for LevelPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.0)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.0)
        }
    }

    #[derive(Debug)]
    struct PinFault;

    impl Error for PinFault {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    struct BrokenPin;

    impl ErrorType for BrokenPin {
        type Error = PinFault;
    }

    impl InputPin for BrokenPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Err(PinFault)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Err(PinFault)
        }
    }

    #[test]
    fn low_level_reads_as_pressed() {
        let mut button = ActiveLowButton::new(LevelPin(false));
        assert!(button.is_pressed());

        let mut button = ActiveLowButton::new(LevelPin(true));
        assert!(!button.is_pressed());
    }

    #[test]
    fn pin_errors_read_as_released() {
        let mut button = ActiveLowButton::new(BrokenPin);
        assert!(!button.is_pressed());
    }

    #[test]
    fn stubs_are_inert() {
        let mut surface = NullSurface::new(32);
        surface.write_pixel(0, crate::color::WHITE);
        surface.flush();
        assert_eq!(surface.pixel_count(), 32);
        assert!(!ReleasedButton.is_pressed());
    }
}
