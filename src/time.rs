//! Time abstraction traits for platform-agnostic timing.
//!
//! The light show only ever needs "how many milliseconds since then", so the
//! traits are deliberately small. Implementations are provided for
//! `std::time::Instant` (feature `std`) and `embassy_time::Instant`
//! (feature `embassy-time`).

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Milliseconds elapsed since an earlier instant.
    #[inline]
    fn millis_since(&self, earlier: Self) -> u64 {
        self.duration_since(earlier).as_millis()
    }
}

/// Returns true when `interval_ms` has passed since `last`, or when there is
/// no previous instant at all.
#[inline]
pub(crate) fn is_due<I: TimeInstant>(now: I, last: Option<I>, interval_ms: u64) -> bool {
    match last {
        Some(last) => now.millis_since(last) >= interval_ms,
        None => true,
    }
}

#[cfg(feature = "std")]
mod std_impl {
    use super::{TimeDuration, TimeInstant, TimeSource};

    impl TimeDuration for std::time::Duration {
        fn as_millis(&self) -> u64 {
            u64::try_from(std::time::Duration::as_millis(self)).unwrap_or(u64::MAX)
        }
    }

    impl TimeInstant for std::time::Instant {
        type Duration = std::time::Duration;

        fn duration_since(&self, earlier: Self) -> Self::Duration {
            self.saturating_duration_since(earlier)
        }
    }

    /// Wall-clock time source backed by `std::time::Instant`.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct StdClock;

    impl TimeSource<std::time::Instant> for StdClock {
        fn now(&self) -> std::time::Instant {
            std::time::Instant::now()
        }
    }
}

#[cfg(feature = "std")]
pub use std_impl::StdClock;

#[cfg(feature = "embassy-time")]
mod embassy_impl {
    use super::{TimeDuration, TimeInstant, TimeSource};

    impl TimeDuration for embassy_time::Duration {
        fn as_millis(&self) -> u64 {
            embassy_time::Duration::as_millis(self)
        }
    }

    impl TimeInstant for embassy_time::Instant {
        type Duration = embassy_time::Duration;

        fn duration_since(&self, earlier: Self) -> Self::Duration {
            self.checked_duration_since(earlier)
                .unwrap_or(embassy_time::Duration::from_ticks(0))
        }
    }

    /// Time source backed by the embassy time driver.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct EmbassyClock;

    impl TimeSource<embassy_time::Instant> for EmbassyClock {
        fn now(&self) -> embassy_time::Instant {
            embassy_time::Instant::now()
        }
    }
}

#[cfg(feature = "embassy-time")]
pub use embassy_impl::EmbassyClock;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Ms(u64);

    impl TimeDuration for Ms {
        fn as_millis(&self) -> u64 {
            self.0
        }
    }

    #[derive(Debug, Clone, Copy)]
    struct At(u64);

    impl TimeInstant for At {
        type Duration = Ms;

        fn duration_since(&self, earlier: Self) -> Self::Duration {
            Ms(self.0.saturating_sub(earlier.0))
        }
    }

    #[test]
    fn first_tick_is_always_due() {
        assert!(is_due(At(0), None, 20));
    }

    #[test]
    fn interval_boundary_is_inclusive() {
        assert!(!is_due(At(119), Some(At(100)), 20));
        assert!(is_due(At(120), Some(At(100)), 20));
    }
}
