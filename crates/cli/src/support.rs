// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test support facade.
//!
//! Composes banners, output capture and the stopwatch behind the
//! "show output" flag. Every print path checks the flag first, so tests stay
//! quiet unless output is enabled through configuration, the environment, or
//! [`TestSupport::force_show_output`].

use crate::banner::{Banner, BannerError};
use crate::config::{BannerConfig, ConfigError, SupportConfig};
use crate::stopwatch::{format_elapsed, Stopwatch, StopwatchError, TimeUnit};
use crate::text;
use parking_lot::Mutex;
use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use unitkit_capture::OutputChannel;

/// Printing, capture and timing helpers shared by a test suite
pub struct TestSupport {
    channel: Arc<OutputChannel>,
    show_output: AtomicBool,
    override_force: bool,
    /// Flag value saved by `force_show_output`
    saved_show_output: Mutex<Option<bool>>,
    banner: BannerConfig,
}

impl TestSupport {
    /// Create a facade printing through `channel`
    pub fn new(channel: Arc<OutputChannel>, config: &SupportConfig) -> Self {
        Self {
            channel,
            show_output: AtomicBool::new(config.output.show),
            override_force: config.output.override_force,
            saved_show_output: Mutex::new(None),
            banner: config.banner.clone(),
        }
    }

    /// Facade over the process's standard output with resolved configuration
    pub fn stdout() -> Result<Self, ConfigError> {
        let config = SupportConfig::resolve()?;
        Ok(Self::new(Arc::new(OutputChannel::stdout()), &config))
    }

    /// The channel every print path writes through
    pub fn channel(&self) -> &Arc<OutputChannel> {
        &self.channel
    }

    pub fn is_show_output(&self) -> bool {
        self.show_output.load(Ordering::SeqCst)
    }

    pub fn is_hide_output(&self) -> bool {
        !self.is_show_output()
    }

    pub fn set_show_output(&self, show: bool) {
        self.show_output.store(show, Ordering::SeqCst);
    }

    /// Turn output on, remembering the previous flag for
    /// [`restore_show_output`](Self::restore_show_output).
    ///
    /// Has no effect when the override flag is set.
    pub fn force_show_output(&self) {
        if self.override_force {
            log::debug!("force_show_output ignored: override is set");
            return;
        }
        *self.saved_show_output.lock() = Some(self.is_show_output());
        self.set_show_output(true);
    }

    /// Restore the flag saved by the last `force_show_output`, if any
    pub fn restore_show_output(&self) {
        if let Some(show) = self.saved_show_output.lock().take() {
            self.set_show_output(show);
        }
    }

    pub fn write(&self, value: impl Display) {
        self.emit(&value.to_string());
    }

    pub fn writeln(&self, value: impl Display) {
        self.emit(&format!("{}\n", value));
    }

    pub fn blank_line(&self) {
        self.emit("\n");
    }

    /// Print a title-only banner using the configured characters
    pub fn write_banner(&self, title: &str) -> Result<(), BannerError> {
        let banner = self.banner.builder().title(title).build()?;
        self.write_banner_spec(&banner);
        Ok(())
    }

    pub fn write_banner_spec(&self, banner: &Banner) {
        self.writeln(banner.render());
    }

    pub fn write_underlined(&self, message: &str) {
        self.writeln(text::underline_default(message));
    }

    pub fn write_underlined_with(&self, message: &str, underline_char: char) {
        self.writeln(text::underline(message, underline_char));
    }

    pub fn show_result(&self, result: impl Display) {
        self.write_heading("Result:");
        self.writeln(format_args!("  {}", result));
        self.blank_line();
    }

    pub fn show_results<I>(&self, results: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.write_heading("Results:");
        for result in results {
            self.writeln(format_args!("  {}", result));
        }
        self.blank_line();
    }

    /// Print the watch's elapsed times followed by the result.
    ///
    /// Fails before printing anything if the watch was never started.
    pub fn show_timed_result(
        &self,
        watch: &Stopwatch,
        result: impl Display,
    ) -> Result<(), StopwatchError> {
        self.show_elapsed_times(watch)?;
        self.show_result(result);
        Ok(())
    }

    pub fn show_timed_results<I>(&self, watch: &Stopwatch, results: I) -> Result<(), StopwatchError>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.show_elapsed_times(watch)?;
        self.show_results(results);
        Ok(())
    }

    /// Redirect the channel into its capture buffer
    pub fn capture_stdout(&self) {
        self.channel.capture().start();
    }

    /// Stop capturing and return everything captured so far
    pub fn release_stdout(&self) -> String {
        let capture = self.channel.capture();
        capture.stop();
        capture.read().unwrap_or_default()
    }

    fn show_elapsed_times(&self, watch: &Stopwatch) -> Result<(), StopwatchError> {
        // One clock reading for every line, even while the watch runs
        let elapsed = watch.elapsed()?;

        self.writeln(format_args!(
            "time elapsed in nanoseconds : {}",
            TimeUnit::Nanoseconds.convert(elapsed)
        ));
        self.writeln(format_args!(
            "time elapsed in microseconds: {}",
            TimeUnit::Microseconds.convert(elapsed)
        ));
        self.writeln(format_args!(
            "time elapsed in milliseconds: {}",
            TimeUnit::Milliseconds.convert(elapsed)
        ));
        self.writeln(format_args!("time elapsed: {}", format_elapsed(elapsed)));
        Ok(())
    }

    fn write_heading(&self, heading: &str) {
        let rule = text::repeat('=', text::display_width(heading));
        self.writeln(&rule);
        self.writeln(heading);
        self.writeln(&rule);
    }

    fn emit(&self, text: &str) {
        if self.is_hide_output() {
            return;
        }
        if let Err(e) = self.channel.write_str(text) {
            log::warn!("failed to write test output: {}", e);
        }
    }
}

#[cfg(test)]
#[path = "support_tests.rs"]
mod tests;
