// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit test support utilities.
//!
//! - [`banner`]: bordered, column-aligned banners
//! - [`capture`]: output channel capture, re-exported from `unitkit-capture`
//! - [`stopwatch`]: start/stop timing over a [`time::Clock`]
//! - [`support`]: the [`TestSupport`] facade that gates printing on the
//!   "show output" flag
//! - [`text`], [`files`], [`naming`]: small helpers
//!
//! ```
//! use std::sync::Arc;
//! use unitkit::capture::{CaptureBuffer, OutputChannel, Sink};
//! use unitkit::{SupportConfig, TestSupport};
//!
//! let channel = Arc::new(OutputChannel::new(Sink::new(CaptureBuffer::new())));
//! let support = TestSupport::new(channel, &SupportConfig::default());
//! support.force_show_output();
//!
//! support.capture_stdout();
//! support.write_banner("doc_example()").unwrap();
//! let captured = support.release_stdout();
//!
//! assert_eq!(captured, "*****************\n* doc_example() *\n*****************\n");
//! ```

pub mod banner;
/// Re-exported capture types from the unitkit-capture crate.
pub mod capture {
    pub use unitkit_capture::{CaptureBuffer, CaptureGuard, OutputCapture, OutputChannel, Sink};
}
#[doc(hidden)]
pub mod cli;
pub mod config;
pub mod env;
pub mod files;
pub mod naming;
pub mod stopwatch;
pub mod support;
pub mod text;
pub mod time;

pub use banner::{Banner, BannerBuilder, BannerError};
pub use config::{ConfigError, SupportConfig};
pub use stopwatch::{Stopwatch, StopwatchError, TimeUnit};
pub use support::TestSupport;
