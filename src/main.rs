mod clean;
mod cli;
mod sanitize;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use cli::Cli;

fn main() -> anyhow::Result<ExitCode> {
    // Diagnostics go to stderr; stdout carries only the result line
    env_logger::init();

    // Unknown flags exit 2 here; missing paths are handled by `run`
    let cli = Cli::parse();

    let mut stdout = io::stdout().lock();
    let outcome = cli::run(&cli, &mut stdout).context("Failed to write to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;

    Ok(outcome.exit_code(cli.strict))
}
