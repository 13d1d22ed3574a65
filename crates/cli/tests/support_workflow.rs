// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! End-to-end use of the support facade the way a test suite drives it.

use std::sync::Arc;
use unitkit::capture::{CaptureBuffer, OutputChannel, Sink};
use unitkit::config::OutputConfig;
use unitkit::time::FakeClock;
use unitkit::{function_name, Banner, Stopwatch, SupportConfig, TestSupport};

struct Suite {
    support: TestSupport,
    console: CaptureBuffer,
}

impl Suite {
    fn set_up() -> Self {
        let console = CaptureBuffer::new();
        let channel = Arc::new(OutputChannel::new(Sink::new(console.clone())));
        let support = TestSupport::new(channel, &SupportConfig::default());
        support.force_show_output();
        Self { support, console }
    }

    fn tear_down(self) -> String {
        self.support.restore_show_output();
        assert!(self.support.is_hide_output());
        self.console.contents()
    }
}

#[test]
fn banner_then_capture_then_report() {
    let suite = Suite::set_up();
    suite.support.write_banner(&function_name!()).unwrap();

    suite.support.capture_stdout();
    suite.support.writeln("First thing captured is me!");
    suite.support.capture_stdout();
    suite.support.writeln("This is only a test.");
    let captured = suite.support.release_stdout();

    suite.support.writeln(format_args!("captured {} bytes", captured.len()));
    let console = suite.tear_down();

    assert_eq!(captured, "First thing captured is me!\nThis is only a test.\n");
    let expected_banner = Banner::new("banner_then_capture_then_report()")
        .unwrap()
        .render();
    assert_eq!(console, format!("{}\ncaptured 49 bytes\n", expected_banner));
}

#[test]
fn timed_results_with_fake_clock() {
    let suite = Suite::set_up();
    let clock = FakeClock::at_origin();
    let mut watch = Stopwatch::with_clock(clock.clone().into());
    watch.start().unwrap();
    clock.advance_ms(1_234);
    watch.stop().unwrap();

    suite
        .support
        .show_timed_results(&watch, ["0", "1", "2", "3"])
        .unwrap();
    let console = suite.tear_down();

    assert!(console.contains("time elapsed in milliseconds: 1234\n"));
    assert!(console.contains("time elapsed: 0:00:01.234\n"));
    assert!(console.ends_with("========\nResults:\n========\n  0\n  1\n  2\n  3\n\n"));
}

#[test]
fn quiet_suite_captures_nothing() {
    let console = CaptureBuffer::new();
    let channel = Arc::new(OutputChannel::new(Sink::new(console.clone())));
    let config = SupportConfig {
        output: OutputConfig {
            show: false,
            override_force: true,
        },
        ..SupportConfig::default()
    };
    let support = TestSupport::new(channel, &config);

    support.force_show_output();
    support.capture_stdout();
    support.writeln("never printed");
    let captured = support.release_stdout();

    assert_eq!(captured, "");
    assert!(console.is_empty());
}

#[test]
fn scoped_capture_on_shared_channel() {
    let console = CaptureBuffer::new();
    let channel = Arc::new(OutputChannel::new(Sink::new(console.clone())));
    let support = TestSupport::new(Arc::clone(&channel), &SupportConfig::default());
    support.set_show_output(true);

    let guard = channel.capture().scoped();
    support.write_underlined("Heading");
    let captured = guard.finish();

    support.writeln("after");
    assert_eq!(captured, "Heading\n=======\n");
    assert_eq!(console.contents(), "after\n");
}
