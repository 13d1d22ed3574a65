// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture of an output channel into an in-memory buffer.

use crate::buffer::CaptureBuffer;
use crate::channel::{OutputChannel, Sink};

/// Per-channel capture state.
#[derive(Debug, Default)]
pub(crate) struct CaptureState {
    active: bool,
    /// Allocated on the first start, kept across stops, dropped by reset
    buffer: Option<CaptureBuffer>,
    /// Target recorded on the first start; the restore target until reset
    original: Option<Sink>,
}

/// Handle onto the capture of one [`OutputChannel`].
///
/// Capture is not reentrant: a second `start` while capturing is a no-op, and
/// so is `stop` while idle. Callers sharing a channel share its one capture,
/// and their output interleaves into the one buffer.
#[derive(Clone, Copy, Debug)]
pub struct OutputCapture<'a> {
    channel: &'a OutputChannel,
}

impl<'a> OutputCapture<'a> {
    pub(crate) fn new(channel: &'a OutputChannel) -> Self {
        Self { channel }
    }

    /// Redirect the channel into the capture buffer.
    ///
    /// The channel's target at the very first start is recorded as the
    /// original and every later `stop` restores it, until [`reset`] forgets
    /// it. If another component replaces the channel target between capture
    /// cycles, the restore still targets the first recorded original.
    ///
    /// [`reset`]: OutputCapture::reset
    pub fn start(&self) {
        let mut state = self.channel.capture_state().lock();
        if state.active {
            log::debug!("capture already active, start ignored");
            return;
        }

        let buffer = state.buffer.get_or_insert_with(CaptureBuffer::new).clone();
        let previous = self.channel.replace(Sink::new(buffer));
        if state.original.is_none() {
            state.original = Some(previous);
        }
        state.active = true;
        log::debug!("capture started");
    }

    /// Restore the original target, keeping the buffered text.
    pub fn stop(&self) {
        let mut state = self.channel.capture_state().lock();
        if !state.active {
            return;
        }

        if let Some(original) = state.original.clone() {
            self.channel.replace(original);
        }
        state.active = false;
        log::debug!("capture stopped");
    }

    /// Captured text, or `None` if no buffer has been allocated since the
    /// last reset.
    pub fn read(&self) -> Option<String> {
        self.channel
            .capture_state()
            .lock()
            .buffer
            .as_ref()
            .map(CaptureBuffer::contents)
    }

    /// Restore the original target if capturing, then discard the buffer and
    /// the recorded original.
    pub fn reset(&self) {
        let mut state = self.channel.capture_state().lock();
        if state.active {
            if let Some(original) = state.original.as_ref() {
                self.channel.replace(original.clone());
            }
        }
        *state = CaptureState::default();
        log::debug!("capture reset");
    }

    /// Check if the channel is currently redirected into the buffer
    pub fn is_capturing(&self) -> bool {
        self.channel.capture_state().lock().active
    }

    /// Start capturing and return a guard that stops on drop.
    ///
    /// If a capture is already active the guard joins it, and dropping the
    /// guard stops it.
    pub fn scoped(&self) -> CaptureGuard<'a> {
        self.start();
        CaptureGuard { capture: *self }
    }
}

/// Stops the capture it was created from when dropped.
#[derive(Debug)]
#[must_use = "dropping the guard stops the capture immediately"]
pub struct CaptureGuard<'a> {
    capture: OutputCapture<'a>,
}

impl CaptureGuard<'_> {
    /// Stop capturing and return the captured text
    pub fn finish(self) -> String {
        self.capture.stop();
        self.capture.read().unwrap_or_default()
    }

    /// Text captured so far, without stopping
    pub fn peek(&self) -> String {
        self.capture.read().unwrap_or_default()
    }
}

impl Drop for CaptureGuard<'_> {
    fn drop(&mut self) {
        self.capture.stop();
    }
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod tests;
