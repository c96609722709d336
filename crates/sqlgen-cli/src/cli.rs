// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, builder::RangedU64ValueParser};
use sqlgen::GenerateOptions;

/// Generate prepared-statement CRUD accessors for record structs.
#[derive(Debug, Parser)]
#[command(name = "sqlgen", version, about, long_about = None)]
pub struct Cli {
    /// Record types to generate, comma separated
    #[arg(short = 't', long = "type", value_delimiter = ',', required = true)]
    pub types: Vec<String>,

    /// Output file (only with a single type); defaults to
    /// `<package dir>/<type>_query.rs`
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Bound of the row and error channels of non-key lookups
    #[arg(
        long,
        default_value_t = 10,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub channel_capacity: usize,

    /// Write generated code without the formatting pass
    #[arg(long)]
    pub no_format: bool,

    /// Raise log verbosity (-v info, -vv debug); `RUST_LOG` takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Package directory or source files
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>
}

impl Cli {
    /// Generation options selected on the command line.
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions {
            channel_capacity: self.channel_capacity,
            format: !self.no_format,
            ..GenerateOptions::default()
        }
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug"
        }
    }

    /// Message for an invalid argument combination clap cannot express.
    pub fn conflict(&self) -> Option<&'static str> {
        (self.output.is_some() && self.types.len() > 1)
            .then_some("--output can only be used with a single --type")
    }
}
