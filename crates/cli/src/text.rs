// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Width-aware text helpers shared by banners and the support facade.
//!
//! Widths are terminal display columns, so wide glyphs count double and
//! combining marks count zero. For ASCII text this is the byte length.

use unicode_width::UnicodeWidthStr;

/// Default underline character
pub const UNDERLINE_CHAR: char = '=';

/// Border character used by [`simple_banner`] and [`multi_line_banner`]
pub const SIMPLE_BORDER_CHAR: char = '*';

/// Repeat `ch` `count` times.
pub fn repeat(ch: char, count: usize) -> String {
    ch.to_string().repeat(count)
}

/// Display width of `text`.
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Pad `text` with trailing spaces to `width` columns.
///
/// Text already at least `width` wide is returned unchanged.
pub fn pad_right(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(text));
    format!("{}{}", text, " ".repeat(pad))
}

/// Widest entry in `lines`, or 0 when there are none.
pub fn max_length<I, S>(lines: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| display_width(line.as_ref()))
        .max()
        .unwrap_or(0)
}

/// Message followed by a line of `ch` as wide as the message.
pub fn underline(message: &str, ch: char) -> String {
    format!("{}\n{}", message, repeat(ch, display_width(message)))
}

/// [`underline`] with [`UNDERLINE_CHAR`].
pub fn underline_default(message: &str) -> String {
    underline(message, UNDERLINE_CHAR)
}

/// Single-line banner:
///
/// ```text
/// ***********
/// * message *
/// ***********
/// ```
pub fn simple_banner(message: &str) -> String {
    let border = repeat(SIMPLE_BORDER_CHAR, display_width(message) + 4);
    format!(
        "{border}\n{b} {message} {b}\n{border}",
        b = SIMPLE_BORDER_CHAR
    )
}

/// Bordered block of messages aligned to the widest one, ending in a newline.
pub fn multi_line_banner<I, S>(messages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let messages: Vec<S> = messages.into_iter().collect();
    let width = max_length(messages.iter().map(AsRef::as_ref));
    let border = repeat(SIMPLE_BORDER_CHAR, width + 4);

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    for message in &messages {
        out.push(SIMPLE_BORDER_CHAR);
        out.push(' ');
        out.push_str(&pad_right(message.as_ref(), width));
        out.push(' ');
        out.push(SIMPLE_BORDER_CHAR);
        out.push('\n');
    }
    out.push_str(&border);
    out.push('\n');
    out
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
