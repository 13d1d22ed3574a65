// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! unitkit binary entry point.

use std::process::ExitCode;

use clap::Parser;

use unitkit::capture::OutputChannel;
use unitkit::cli::Cli;
use unitkit::config::SupportConfig;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SupportConfig::load(path).map(SupportConfig::with_env_overrides),
        None => SupportConfig::resolve(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let channel = OutputChannel::stdout();
    match cli.command.run(&config, &channel) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
