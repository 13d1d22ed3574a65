// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface for rendering banners and inspecting fixtures.

use crate::banner::BannerError;
use crate::config::SupportConfig;
use crate::files;
use crate::text;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use thiserror::Error;
use unitkit_capture::OutputChannel;

/// Unit test support utilities
#[derive(Parser, Debug)]
#[command(name = "unitkit", version, about = "Unit test support utilities")]
pub struct Cli {
    /// Support configuration file (overrides UNITKIT_CONFIG)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print a bordered banner
    Banner {
        /// Title line
        #[arg(long, short = 't', default_value = "")]
        title: String,

        /// Message line (can be specified multiple times)
        #[arg(long = "message", short = 'm', value_name = "MESSAGE")]
        messages: Vec<String>,

        /// Border character (default from config, else '*')
        #[arg(long)]
        border: Option<char>,

        /// Title/message separator character (default from config, else '-')
        #[arg(long)]
        separator: Option<char>,

        /// Blank lines to print after the banner
        #[arg(long, default_value_t = 0)]
        trailing: usize,
    },

    /// Print text underlined with a repeated character
    Underline {
        text: String,

        /// Underline character
        #[arg(long = "char", default_value_t = text::UNDERLINE_CHAR)]
        underline_char: char,
    },

    /// Print the line count of each file
    Lines {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

/// Errors from running a command
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Banner(#[from] BannerError),

    #[error("{}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

impl Command {
    /// Run the command, printing through `channel`
    pub fn run(&self, config: &SupportConfig, channel: &OutputChannel) -> Result<(), CommandError> {
        match self {
            Command::Banner {
                title,
                messages,
                border,
                separator,
                trailing,
            } => {
                let mut builder = config.banner.builder();
                if let Some(ch) = border {
                    builder = builder.border_char(*ch);
                }
                if let Some(ch) = separator {
                    builder = builder.separator_char(*ch);
                }
                let banner = builder
                    .title(title.as_str())
                    .messages(messages.iter().map(String::as_str))
                    .trailing_blank_lines(*trailing)
                    .build()?;
                channel.println(&banner.render())?;
            }
            Command::Underline {
                text,
                underline_char,
            } => {
                channel.println(&text::underline(text, *underline_char))?;
            }
            Command::Lines { files: paths } => {
                for path in paths {
                    let count =
                        files::count_lines(path).map_err(|source| CommandError::File {
                            path: path.clone(),
                            source,
                        })?;
                    writeln!(channel, "{}\t{}", count, path.display())?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
