// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory sink for captured output.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Growable byte buffer that receives captured output.
///
/// Clones share the same storage, so a clone installed as a channel target
/// and the clone kept by the capture state see the same bytes.
#[derive(Clone, Debug, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffered bytes decoded as UTF-8, replacing invalid sequences
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Number of buffered bytes
    pub fn len(&self) -> usize {
        self.bytes.lock().len()
    }

    /// Check if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    /// Discard buffered bytes
    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
