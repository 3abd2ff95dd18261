//! Shared test infrastructure for rgb-lightshow integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use embedded_hal::delay::DelayNs;
use rgb_lightshow::color::OFF;
use rgb_lightshow::{
    BoardConfig, ButtonInput, Coordinator, PIXEL_COUNT, PixelSurface, Rgb8, StepOutcome,
    TimeDuration, TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn millis(&self) -> u64 {
        self.current_time.get().0
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Blocking delay that advances the mock clock and records every call
pub struct MockDelay<'a> {
    clock: &'a MockTimeSource,
    calls: heapless::Vec<u32, 64>,
}

impl<'a> MockDelay<'a> {
    pub fn new(clock: &'a MockTimeSource) -> Self {
        Self {
            clock,
            calls: heapless::Vec::new(),
        }
    }

    pub fn calls(&self) -> &[u32] {
        &self.calls
    }

    pub fn total_ms(&self) -> u64 {
        self.calls.iter().map(|&ms| u64::from(ms)).sum()
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.advance(u64::from(ns).div_ceil(1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        let _ = self.calls.push(ms);
        self.clock.advance(u64::from(ms));
    }
}

// ============================================================================
// Mock Button
// ============================================================================

/// Button whose level is set directly by the test
pub struct MockButton {
    pressed: bool,
}

impl MockButton {
    pub fn new() -> Self {
        Self { pressed: false }
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

impl ButtonInput for MockButton {
    fn is_pressed(&mut self) -> bool {
        self.pressed
    }
}

// ============================================================================
// Mock Surface
// ============================================================================

/// Pixel surface that keeps the last flushed frame and counts activity
pub struct MockSurface {
    pending: [Rgb8; PIXEL_COUNT],
    shown: [Rgb8; PIXEL_COUNT],
    writes: usize,
    flushes: usize,
    status_pixel: Rgb8,
    status_led: bool,
    status_led_history: heapless::Vec<bool, 32>,
    brightness: f32,
    brightness_history: heapless::Vec<f32, 32>,
}

impl MockSurface {
    pub fn new() -> Self {
        Self {
            pending: [OFF; PIXEL_COUNT],
            shown: [OFF; PIXEL_COUNT],
            writes: 0,
            flushes: 0,
            status_pixel: OFF,
            status_led: false,
            status_led_history: heapless::Vec::new(),
            brightness: 1.0,
            brightness_history: heapless::Vec::new(),
        }
    }

    /// Colors of the last flushed frame
    pub fn shown(&self) -> &[Rgb8] {
        &self.shown
    }

    /// Number of lit pixels in the last flushed frame
    pub fn lit_count(&self) -> usize {
        self.shown.iter().filter(|&&p| p != OFF).count()
    }

    pub fn is_dark(&self) -> bool {
        self.lit_count() == 0 && self.status_pixel == OFF && !self.status_led
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }

    pub fn status_pixel(&self) -> Rgb8 {
        self.status_pixel
    }

    pub fn status_led_history(&self) -> &[bool] {
        &self.status_led_history
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn brightness_history(&self) -> &[f32] {
        &self.brightness_history
    }
}

impl PixelSurface for MockSurface {
    fn pixel_count(&self) -> u16 {
        PIXEL_COUNT as u16
    }

    fn write_pixel(&mut self, index: u16, color: Rgb8) {
        if let Some(pixel) = self.pending.get_mut(usize::from(index)) {
            *pixel = color;
            self.writes += 1;
        }
    }

    fn flush(&mut self) {
        self.shown = self.pending;
        self.flushes += 1;
    }

    fn set_status_pixel(&mut self, color: Rgb8) {
        self.status_pixel = color;
    }

    fn set_status_led(&mut self, on: bool) {
        self.status_led = on;
        let _ = self.status_led_history.push(on);
    }

    fn set_global_brightness(&mut self, brightness: f32) {
        self.brightness = brightness;
        let _ = self.brightness_history.push(brightness);
    }
}

// ============================================================================
// Coordinator Helpers
// ============================================================================

pub type TestCoordinator<'a> =
    Coordinator<'a, TestInstant, MockTimeSource, MockButton, MockSurface, MockDelay<'a>>;

/// Coordinator with default configuration and fresh mocks
pub fn new_coordinator(clock: &MockTimeSource) -> TestCoordinator<'_> {
    Coordinator::new(
        &BoardConfig::default(),
        clock,
        MockButton::new(),
        MockSurface::new(),
        MockDelay::new(clock),
    )
}

/// Step the coordinator with the button released for `millis`, 5 ms per step
pub fn idle_for(show: &mut TestCoordinator<'_>, clock: &MockTimeSource, millis: u64) {
    show.button_mut().set_pressed(false);
    let mut elapsed = 0;
    while elapsed < millis {
        let stride = (millis - elapsed).min(5);
        clock.advance(stride);
        elapsed += stride;
        show.step();
    }
}

/// Idle 50 ms, then hold the button for exactly `held_ms` (stepping every
/// 5 ms) and release it. Returns the outcome of the release step.
pub fn press_for(show: &mut TestCoordinator<'_>, clock: &MockTimeSource, held_ms: u64) -> StepOutcome {
    idle_for(show, clock, 50);

    show.button_mut().set_pressed(true);
    show.step();

    let mut elapsed = 0;
    while elapsed < held_ms {
        let stride = (held_ms - elapsed).min(5);
        clock.advance(stride);
        elapsed += stride;
        show.step();
    }

    show.button_mut().set_pressed(false);
    show.step()
}
