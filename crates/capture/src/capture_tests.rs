// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use proptest::prelude::*;
use rstest::rstest;

/// Channel whose original target is an inspectable in-memory console
fn console_channel() -> (OutputChannel, CaptureBuffer) {
    let console = CaptureBuffer::new();
    (OutputChannel::new(Sink::new(console.clone())), console)
}

#[test]
fn read_before_any_start_is_none() {
    let (channel, _console) = console_channel();
    assert_eq!(channel.capture().read(), None);
    assert!(!channel.capture().is_capturing());
}

#[test]
fn start_then_stop_without_writes_reads_empty() {
    let (channel, _console) = console_channel();
    let capture = channel.capture();

    capture.start();
    capture.stop();

    assert_eq!(capture.read(), Some(String::new()));
}

#[test]
fn captured_writes_do_not_reach_original() {
    let (channel, console) = console_channel();
    let capture = channel.capture();

    capture.start();
    channel.println("captured line").unwrap();
    capture.stop();

    assert_eq!(capture.read().as_deref(), Some("captured line\n"));
    assert!(console.is_empty());
}

#[test]
fn double_start_single_stop_restores_original() {
    let (channel, console) = console_channel();
    let original = channel.current();
    let capture = channel.capture();

    capture.start();
    capture.start();
    channel.println("inside").unwrap();
    capture.stop();

    assert!(!capture.is_capturing());
    assert!(channel.current().same_as(&original));

    channel.println("after stop").unwrap();
    assert_eq!(console.contents(), "after stop\n");
    assert_eq!(capture.read().as_deref(), Some("inside\n"));
}

#[test]
fn stop_while_idle_is_noop() {
    let (channel, console) = console_channel();
    let capture = channel.capture();

    capture.stop();
    channel.println("direct").unwrap();

    assert_eq!(console.contents(), "direct\n");
    assert_eq!(capture.read(), None);
}

#[test]
fn buffer_is_retained_across_cycles() {
    let (channel, _console) = console_channel();
    let capture = channel.capture();

    capture.start();
    channel.write_str("one ").unwrap();
    capture.stop();
    capture.start();
    channel.write_str("two").unwrap();
    capture.stop();

    assert_eq!(capture.read().as_deref(), Some("one two"));
}

#[test]
fn read_while_capturing_sees_current_text() {
    let (channel, _console) = console_channel();
    let capture = channel.capture();

    capture.start();
    channel.write_str("partial").unwrap();

    assert!(capture.is_capturing());
    assert_eq!(capture.read().as_deref(), Some("partial"));
    capture.stop();
}

#[test]
fn reset_restores_target_and_discards_buffer() {
    let (channel, console) = console_channel();
    let capture = channel.capture();

    capture.start();
    channel.println("dropped").unwrap();
    capture.reset();

    assert!(!capture.is_capturing());
    assert_eq!(capture.read(), None);
    channel.println("visible").unwrap();
    assert_eq!(console.contents(), "visible\n");
}

#[test]
fn reset_forgets_recorded_original() {
    let (channel, _console) = console_channel();
    let capture = channel.capture();
    capture.start();
    capture.stop();
    capture.reset();

    let replacement = CaptureBuffer::new();
    channel.replace(Sink::new(replacement.clone()));
    capture.start();
    capture.stop();

    channel.println("to replacement").unwrap();
    assert_eq!(replacement.contents(), "to replacement\n");
}

#[test]
fn stop_restores_first_recorded_original_even_if_target_changed() {
    let (channel, console) = console_channel();
    let capture = channel.capture();
    capture.start();
    capture.stop();

    // Another component swaps the target between cycles
    let other = CaptureBuffer::new();
    channel.replace(Sink::new(other.clone()));
    capture.start();
    capture.stop();

    channel.println("where").unwrap();
    assert_eq!(console.contents(), "where\n");
    assert!(other.is_empty());
}

#[test]
fn handles_share_one_capture() {
    let (channel, _console) = console_channel();
    let first = channel.capture();
    let second = channel.capture();

    first.start();
    second.start();
    channel.write_str("shared").unwrap();

    assert!(second.is_capturing());
    second.stop();
    assert!(!first.is_capturing());
    assert_eq!(first.read().as_deref(), Some("shared"));
}

#[test]
fn guard_finish_returns_text() {
    let (channel, console) = console_channel();
    let guard = channel.capture().scoped();
    channel.println("scoped").unwrap();
    assert_eq!(guard.peek(), "scoped\n");

    let text = guard.finish();

    assert_eq!(text, "scoped\n");
    assert!(!channel.capture().is_capturing());
    assert!(console.is_empty());
}

#[test]
fn guard_drop_stops_capture() {
    let (channel, console) = console_channel();
    {
        let _guard = channel.capture().scoped();
        channel.write_str("inside").unwrap();
    }
    channel.write_str("outside").unwrap();

    assert_eq!(console.contents(), "outside");
    assert_eq!(channel.capture().read().as_deref(), Some("inside"));
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(3)]
fn repeated_starts_need_one_stop(#[case] extra_starts: usize) {
    let (channel, console) = console_channel();
    let capture = channel.capture();

    for _ in 0..=extra_starts {
        capture.start();
    }
    capture.stop();

    channel.write_str("x").unwrap();
    assert_eq!(console.contents(), "x");
}

proptest! {
    #[test]
    fn captured_text_is_concatenation_of_writes(chunks in prop::collection::vec("[a-z ]{0,8}", 0..16)) {
        let (channel, console) = console_channel();
        let capture = channel.capture();

        capture.start();
        for chunk in &chunks {
            channel.write_str(chunk).unwrap();
        }
        capture.stop();

        prop_assert_eq!(capture.read().unwrap_or_default(), chunks.concat());
        prop_assert!(console.is_empty());
    }
}
