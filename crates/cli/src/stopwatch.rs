// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stopwatch for timing test sections.

use crate::time::{Clock, ClockHandle};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Errors raised by stopwatch misuse
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StopwatchError {
    #[error("invalid stopwatch state: {0}")]
    InvalidState(&'static str),
}

/// Unit for [`Stopwatch::elapsed_in`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
}

impl TimeUnit {
    /// Convert a duration to a whole number of this unit, truncating
    pub fn convert(self, duration: Duration) -> u128 {
        match self {
            Self::Nanoseconds => duration.as_nanos(),
            Self::Microseconds => duration.as_micros(),
            Self::Milliseconds => duration.as_millis(),
            Self::Seconds => u128::from(duration.as_secs()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WatchState {
    Unstarted,
    Running { started: Duration },
    Stopped { started: Duration, stopped: Duration },
}

/// A start/stop stopwatch over a [`Clock`].
///
/// A new watch counts as stopped. Stopping a watch that is not running and
/// reading the elapsed time before the first start are
/// [`StopwatchError::InvalidState`].
#[derive(Clone, Debug)]
pub struct Stopwatch {
    clock: ClockHandle,
    state: WatchState,
}

impl Stopwatch {
    /// Create a stopped, never-started watch on the system clock
    pub fn new() -> Self {
        Self::with_clock(ClockHandle::system())
    }

    /// Create a watch that is already running on the system clock
    pub fn started() -> Self {
        let mut watch = Self::new();
        watch.state = WatchState::Running {
            started: watch.clock.now(),
        };
        watch
    }

    /// Create a stopped, never-started watch on the given clock
    pub fn with_clock(clock: ClockHandle) -> Self {
        Self {
            clock,
            state: WatchState::Unstarted,
        }
    }

    /// Start timing from now
    pub fn start(&mut self) -> Result<(), StopwatchError> {
        if self.is_running() {
            return Err(StopwatchError::InvalidState("stopwatch is already running"));
        }
        self.state = WatchState::Running {
            started: self.clock.now(),
        };
        Ok(())
    }

    /// Stop timing, returning the elapsed time
    pub fn stop(&mut self) -> Result<Duration, StopwatchError> {
        match self.state {
            WatchState::Running { started } => {
                let stopped = self.clock.now();
                self.state = WatchState::Stopped { started, stopped };
                Ok(stopped.saturating_sub(started))
            }
            WatchState::Unstarted => {
                Err(StopwatchError::InvalidState("stopwatch was never started"))
            }
            WatchState::Stopped { .. } => {
                Err(StopwatchError::InvalidState("stopwatch is already stopped"))
            }
        }
    }

    /// Forget any timing and return to the never-started state
    pub fn reset(&mut self) {
        self.state = WatchState::Unstarted;
    }

    /// Time between start and stop, or between start and now while running
    pub fn elapsed(&self) -> Result<Duration, StopwatchError> {
        match self.state {
            WatchState::Unstarted => {
                Err(StopwatchError::InvalidState("stopwatch was never started"))
            }
            WatchState::Running { started } => Ok(self.clock.now().saturating_sub(started)),
            WatchState::Stopped { started, stopped } => Ok(stopped.saturating_sub(started)),
        }
    }

    /// [`elapsed`](Self::elapsed) as a whole number of `unit`
    pub fn elapsed_in(&self, unit: TimeUnit) -> Result<u128, StopwatchError> {
        self.elapsed().map(|elapsed| unit.convert(elapsed))
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, WatchState::Running { .. })
    }

    pub fn is_stopped(&self) -> bool {
        !self.is_running()
    }

    /// Clock reading at the last start
    pub fn started_at(&self) -> Option<Duration> {
        match self.state {
            WatchState::Unstarted => None,
            WatchState::Running { started } | WatchState::Stopped { started, .. } => Some(started),
        }
    }

    /// Clock reading at the last stop
    pub fn stopped_at(&self) -> Option<Duration> {
        match self.state {
            WatchState::Stopped { stopped, .. } => Some(stopped),
            _ => None,
        }
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats the elapsed time as `H:MM:SS.mmm`, zero before the first start
/// Format a duration as `H:MM:SS.mmm`
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    format!(
        "{}:{:02}:{:02}.{:03}",
        total_secs / 3600,
        (total_secs / 60) % 60,
        total_secs % 60,
        elapsed.subsec_millis()
    )
}

impl fmt::Display for Stopwatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_elapsed(self.elapsed().unwrap_or_default()))
    }
}

#[cfg(test)]
#[path = "stopwatch_tests.rs"]
mod tests;
