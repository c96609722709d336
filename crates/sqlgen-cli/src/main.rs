// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `sqlgen` command.
//!
//! | Exit status | Meaning |
//! |-------------|---------|
//! | 0 | every requested accessor was written |
//! | 1 | a fatal condition; nothing was written |
//! | 2 | invalid arguments |

mod cli;

use std::{
    fs,
    io::{self, IsTerminal},
    path::PathBuf,
    process::ExitCode
};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, error::ErrorKind};
use cli::Cli;
use sqlgen::{CrudGenerator, Generated, Package, TypeClassifier};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Some(message) = cli.conflict() {
        Cli::command().error(ErrorKind::ArgumentConflict, message).exit();
    }
    init_tracing(cli.log_filter());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("sqlgen: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Generate every requested type in memory, then write them all.
fn run(cli: &Cli) -> Result<()> {
    let package = Package::load(&cli.paths).context("cannot load source package")?;
    let classifier = TypeClassifier::default();
    let options = cli.options();
    let generator = CrudGenerator::new(&options);

    let mut outputs: Vec<(PathBuf, Generated)> = Vec::with_capacity(cli.types.len());
    for type_name in &cli.types {
        let schema = package
            .schema(type_name, &classifier)
            .with_context(|| format!("cannot extract schema of `{type_name}`"))?;
        let generated = generator
            .generate(&schema)
            .with_context(|| format!("cannot generate accessor for `{type_name}`"))?;
        let path = cli
            .output
            .clone()
            .unwrap_or_else(|| package.dir().join(&generated.file_name));
        outputs.push((path, generated));
    }

    for (path, generated) in &outputs {
        fs::write(path, &generated.source)
            .with_context(|| format!("cannot write {}", path.display()))?;
        info!(
            record = %generated.type_name,
            path = %path.display(),
            formatted = generated.formatted,
            "wrote accessor"
        );
    }
    Ok(())
}
