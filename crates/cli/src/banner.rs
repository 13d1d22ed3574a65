// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bordered, column-aligned text banners for separating test output.
//!
//! ```text
//! *************
//! * testFoo   *
//! * --------- *
//! * Message 1 *
//! * Message 2 *
//! *************
//! ```

use crate::text::{pad_right, repeat};
use std::fmt;
use thiserror::Error;
use unicode_width::UnicodeWidthChar;

/// Default border character
pub const DEFAULT_BORDER_CHAR: char = '*';

/// Default character for the line between the title and the messages
pub const DEFAULT_SEPARATOR_CHAR: char = '-';

/// Errors raised while building a banner
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BannerError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// A banner ready to render.
///
/// Built with [`Banner::builder`] or one of the shorthand constructors, and
/// immutable afterwards. Rendering is pure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    border_char: char,
    separator_char: char,
    title: String,
    trailing_blank_lines: usize,
    messages: Vec<String>,
}

impl Banner {
    /// Start building a banner with default characters and no content
    pub fn builder() -> BannerBuilder {
        BannerBuilder::default()
    }

    /// Title-only banner with default characters
    pub fn new(title: impl Into<String>) -> Result<Self, BannerError> {
        Self::builder().title(title).build()
    }

    /// Banner with a title and a single message
    pub fn with_message(
        title: impl Into<String>,
        trailing_blank_lines: usize,
        message: impl Into<String>,
    ) -> Result<Self, BannerError> {
        Self::builder()
            .title(title)
            .trailing_blank_lines(trailing_blank_lines)
            .message(message)
            .build()
    }

    pub fn border_char(&self) -> char {
        self.border_char
    }

    pub fn separator_char(&self) -> char {
        self.separator_char
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn trailing_blank_lines(&self) -> usize {
        self.trailing_blank_lines
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Interior width: the widest of the title and the messages
    pub fn width(&self) -> usize {
        crate::text::display_width(&self.title).max(crate::text::max_length(&self.messages))
    }

    /// Render the banner.
    ///
    /// The closing border is not followed by a newline; exactly
    /// `trailing_blank_lines` newlines are appended after it.
    pub fn render(&self) -> String {
        let width = self.width();
        let border = repeat(self.border_char, width + 4);
        let line_count = 3 + self.messages.len();
        let mut out = String::with_capacity((width + 5) * line_count + self.trailing_blank_lines);

        out.push_str(&border);
        out.push('\n');

        if !self.title.is_empty() {
            self.push_line(&mut out, &self.title, width);
        }

        if !self.messages.is_empty() {
            self.push_line(&mut out, &repeat(self.separator_char, width), width);
            for message in &self.messages {
                self.push_line(&mut out, message, width);
            }
        }

        out.push_str(&border);
        out.push_str(&"\n".repeat(self.trailing_blank_lines));
        out
    }

    fn push_line(&self, out: &mut String, text: &str, width: usize) {
        out.push(self.border_char);
        out.push(' ');
        out.push_str(&pad_right(text, width));
        out.push(' ');
        out.push(self.border_char);
        out.push('\n');
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Named, defaulted construction options for [`Banner`]
#[derive(Clone, Debug)]
pub struct BannerBuilder {
    border_char: char,
    separator_char: char,
    title: String,
    trailing_blank_lines: usize,
    messages: Vec<String>,
}

impl Default for BannerBuilder {
    fn default() -> Self {
        Self {
            border_char: DEFAULT_BORDER_CHAR,
            separator_char: DEFAULT_SEPARATOR_CHAR,
            title: String::new(),
            trailing_blank_lines: 0,
            messages: Vec::new(),
        }
    }
}

impl BannerBuilder {
    pub fn border_char(mut self, ch: char) -> Self {
        self.border_char = ch;
        self
    }

    pub fn separator_char(mut self, ch: char) -> Self {
        self.separator_char = ch;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Number of newlines appended after the closing border
    pub fn trailing_blank_lines(mut self, count: usize) -> Self {
        self.trailing_blank_lines = count;
        self
    }

    /// Append one message line
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }

    /// Append message lines in order
    pub fn messages<I, S>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.messages.extend(messages.into_iter().map(Into::into));
        self
    }

    /// Validate and build the banner
    pub fn build(self) -> Result<Banner, BannerError> {
        check_char("border character", self.border_char)?;
        check_char("separator character", self.separator_char)?;
        check_single_line("title", &self.title)?;
        for (index, message) in self.messages.iter().enumerate() {
            check_single_line(&format!("message {}", index), message)?;
        }

        Ok(Banner {
            border_char: self.border_char,
            separator_char: self.separator_char,
            title: self.title,
            trailing_blank_lines: self.trailing_blank_lines,
            messages: self.messages,
        })
    }
}

fn check_char(what: &str, ch: char) -> Result<(), BannerError> {
    if ch.is_control() {
        return Err(BannerError::InvalidArgument(format!(
            "{} must be printable, got {:?}",
            what, ch
        )));
    }
    if ch.width() != Some(1) {
        return Err(BannerError::InvalidArgument(format!(
            "{} must be one column wide, got {:?}",
            what, ch
        )));
    }
    Ok(())
}

fn check_single_line(what: &str, text: &str) -> Result<(), BannerError> {
    if text.contains(['\n', '\r']) {
        return Err(BannerError::InvalidArgument(format!(
            "{} must be a single line, got {:?}",
            what, text
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "banner_tests.rs"]
mod tests;
