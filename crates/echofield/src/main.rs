//! `echofield` command-line tool.
//!
//! Generates and verifies the theme stylesheet, runs the pre-build hook, and
//! exposes the theme registry and selection chain for inspection.

mod cli;
mod commands;
mod config;
mod logging;

use anyhow::Context;
use clap::Parser;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let cwd = std::env::current_dir().context("failed to read working directory")?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&cli, &cwd, &mut out)
}
