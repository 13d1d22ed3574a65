// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output channel with a replaceable target.

use crate::capture::{CaptureState, OutputCapture};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// Shared destination for output written through a channel.
///
/// Clones refer to the same underlying writer.
#[derive(Clone)]
pub struct Sink {
    writer: Arc<Mutex<dyn Write + Send>>,
}

impl Sink {
    /// Wrap a writer as a sink
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Arc::new(Mutex::new(writer)),
        }
    }

    /// Sink writing to the process's standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Check if both sinks refer to the same writer
    pub fn same_as(&self, other: &Sink) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }

    /// Write all bytes and flush
    pub fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(bytes)?;
        writer.flush()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("writer", &Arc::as_ptr(&self.writer).cast::<()>())
            .finish()
    }
}

/// Process output channel.
///
/// Everything that prints goes through [`OutputChannel::write_str`] and
/// friends, which forward to the current target. The target is swapped by
/// the channel's capture (see [`OutputChannel::capture`]) or directly with
/// [`OutputChannel::replace`].
pub struct OutputChannel {
    target: RwLock<Sink>,
    capture: Mutex<CaptureState>,
}

impl OutputChannel {
    /// Create a channel writing to `sink`
    pub fn new(sink: Sink) -> Self {
        Self {
            target: RwLock::new(sink),
            capture: Mutex::new(CaptureState::default()),
        }
    }

    /// Create a channel writing to the process's standard output
    pub fn stdout() -> Self {
        Self::new(Sink::stdout())
    }

    /// The live target
    pub fn current(&self) -> Sink {
        self.target.read().clone()
    }

    /// Install a new target, returning the previous one
    pub fn replace(&self, sink: Sink) -> Sink {
        std::mem::replace(&mut *self.target.write(), sink)
    }

    /// Write text to the current target
    pub fn write_str(&self, text: &str) -> io::Result<()> {
        // Clone out of the lock so a concurrent replace never waits on I/O
        self.current().write_all(text.as_bytes())
    }

    /// Write text followed by a newline
    pub fn println(&self, text: &str) -> io::Result<()> {
        let mut line = String::with_capacity(text.len() + 1);
        line.push_str(text);
        line.push('\n');
        self.write_str(&line)
    }

    /// Write formatted text, allowing `write!(channel, ...)`
    pub fn write_fmt(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        match args.as_str() {
            Some(text) => self.write_str(text),
            None => self.write_str(&args.to_string()),
        }
    }

    /// Handle onto this channel's capture.
    ///
    /// There is exactly one capture per channel; every handle observes and
    /// mutates the same state.
    pub fn capture(&self) -> OutputCapture<'_> {
        OutputCapture::new(self)
    }

    pub(crate) fn capture_state(&self) -> &Mutex<CaptureState> {
        &self.capture
    }
}

impl Default for OutputChannel {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for OutputChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Capture state is locked before the target everywhere else; never
        // hold both here.
        let target = self.current();
        let capture = self.capture.lock();
        f.debug_struct("OutputChannel")
            .field("target", &target)
            .field("capture", &*capture)
            .finish()
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
