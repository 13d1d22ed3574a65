// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::panic)]

use super::*;
use rstest::rstest;

#[rstest]
#[case('*', 0, "")]
#[case('*', 3, "***")]
#[case('-', 5, "-----")]
fn repeat_builds_runs(#[case] ch: char, #[case] count: usize, #[case] expected: &str) {
    assert_eq!(repeat(ch, count), expected);
}

#[rstest]
#[case("ab", 5, "ab   ")]
#[case("abc", 3, "abc")]
#[case("abcdef", 3, "abcdef")]
#[case("", 2, "  ")]
fn pad_right_pads_to_width(#[case] text: &str, #[case] width: usize, #[case] expected: &str) {
    assert_eq!(pad_right(text, width), expected);
}

#[test]
fn pad_right_counts_wide_glyphs_as_two_columns() {
    // Each CJK ideograph occupies two columns
    assert_eq!(pad_right("日本", 6), "日本  ");
}

#[test]
fn max_length_of_empty_is_zero() {
    assert_eq!(max_length(Vec::<String>::new()), 0);
}

#[test]
fn max_length_finds_widest() {
    assert_eq!(max_length(["a", "abcd", "ab"]), 4);
}

#[test]
fn underline_matches_message_width() {
    assert_eq!(underline("Result:", '-'), "Result:\n-------");
    assert_eq!(underline_default("abc"), "abc\n===");
}

#[test]
fn simple_banner_wraps_message() {
    assert_eq!(simple_banner("testFoo"), "***********\n* testFoo *\n***********");
}

#[test]
fn multi_line_banner_aligns_messages() {
    let expected = "\
*************
* Message 1 *
* M2        *
*************
";
    assert_eq!(multi_line_banner(["Message 1", "M2"]), expected);
}

#[test]
fn multi_line_banner_without_messages_has_only_borders() {
    assert_eq!(multi_line_banner(Vec::<&str>::new()), "****\n****\n");
}
