// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Monotonic time abstraction for deterministic stopwatch tests.
//!
//! This module provides a `Clock` trait and `FakeClock` implementation that allows
//! tests to control time progression without wall-clock delays.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};
use std::time::{Duration, Instant};

/// Process-wide origin for [`SystemClock`] readings
static ORIGIN: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Clock trait for time abstraction
pub trait Clock: Send + Sync {
    /// Time elapsed since the clock's origin
    fn now(&self) -> Duration;

    /// Current reading in nanoseconds
    fn now_nanos(&self) -> u128 {
        self.now().as_nanos()
    }
}

/// Real monotonic clock
#[derive(Clone, Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        ORIGIN.elapsed()
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone, Debug, Default)]
pub struct FakeClock {
    /// Current reading in nanoseconds, shared between clones
    current_nanos: Arc<AtomicU64>,
}

impl FakeClock {
    /// Create a fake clock at a given reading
    pub fn new(start: Duration) -> Self {
        Self {
            current_nanos: Arc::new(AtomicU64::new(saturating_nanos(start))),
        }
    }

    /// Create a fake clock reading zero
    pub fn at_origin() -> Self {
        Self::default()
    }

    /// Advance time by a duration
    pub fn advance(&self, duration: Duration) {
        self.current_nanos
            .fetch_add(saturating_nanos(duration), Ordering::SeqCst);
    }

    /// Advance time by milliseconds
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Set the absolute reading
    pub fn set(&self, reading: Duration) {
        self.current_nanos
            .store(saturating_nanos(reading), Ordering::SeqCst);
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.current_nanos.load(Ordering::SeqCst))
    }
}

/// Clock handle that can be either real or fake
#[derive(Clone, Debug)]
pub enum ClockHandle {
    System(SystemClock),
    Fake(FakeClock),
}

impl ClockHandle {
    /// Create a system clock handle
    pub fn system() -> Self {
        Self::System(SystemClock)
    }

    /// Create a fake clock handle reading zero
    pub fn fake() -> Self {
        Self::Fake(FakeClock::at_origin())
    }

    /// Get as fake clock for manipulation (returns None for system clock)
    pub fn as_fake(&self) -> Option<&FakeClock> {
        match self {
            Self::Fake(f) => Some(f),
            Self::System(_) => None,
        }
    }

    /// Check if this is a fake clock
    pub fn is_fake(&self) -> bool {
        matches!(self, Self::Fake(_))
    }
}

impl Clock for ClockHandle {
    fn now(&self) -> Duration {
        match self {
            Self::System(c) => c.now(),
            Self::Fake(c) => c.now(),
        }
    }
}

impl Default for ClockHandle {
    fn default() -> Self {
        Self::system()
    }
}

impl From<FakeClock> for ClockHandle {
    fn from(clock: FakeClock) -> Self {
        Self::Fake(clock)
    }
}

fn saturating_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
