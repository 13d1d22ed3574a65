// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output redirection and capture for unit test output.
//!
//! An [`OutputChannel`] stands in for the process-wide output stream: code
//! that prints writes through the channel, and the channel's single
//! [`OutputCapture`] can swap its target for an in-memory buffer and later
//! restore it. The host constructs one channel and shares it by reference.

mod buffer;
mod capture;
mod channel;

pub use buffer::CaptureBuffer;
pub use capture::{CaptureGuard, OutputCapture};
pub use channel::{OutputChannel, Sink};
