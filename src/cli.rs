use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::clean::clean;

pub const USAGE: &str = "Usage: clean-file input_file output_file";

/// Copy a file keeping only printable ASCII, tab, newline and carriage return.
#[derive(Parser, Debug)]
#[command(name = "clean-file", version)]
pub struct Cli {
    /// File to read
    pub input: Option<PathBuf>,

    /// File to create or overwrite with the cleaned bytes
    pub output: Option<PathBuf>,

    #[arg(hide = true)]
    pub extra: Vec<OsString>,

    /// Exit with status 1 when the file cannot be read or written
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Usage,
    Cleaned,
    Failed,
}

impl Outcome {
    pub fn exit_code(self, strict: bool) -> ExitCode {
        match self {
            Outcome::Failed if strict => ExitCode::FAILURE,
            _ => ExitCode::SUCCESS,
        }
    }
}

/// Runs one invocation, writing the user-facing line to `out`.
///
/// I/O failures on the files are reported, not returned. The only error
/// propagated is a failure to write to `out` itself.
pub fn run(cli: &Cli, out: &mut impl Write) -> io::Result<Outcome> {
    let (Some(input), Some(output)) = (&cli.input, &cli.output) else {
        writeln!(out, "{USAGE}")?;
        return Ok(Outcome::Usage);
    };

    if !cli.extra.is_empty() {
        log::debug!("ignoring {} extra argument(s): {:?}", cli.extra.len(), cli.extra);
    }

    match clean(input, output) {
        Ok(report) => {
            log::debug!("dropped {} byte(s)", report.bytes_dropped());
            writeln!(out, "Successfully cleaned {}", input.display())?;
            Ok(Outcome::Cleaned)
        }
        Err(err) => {
            log::debug!("clean failed: {err:?}");
            writeln!(out, "Error: {err}")?;
            Ok(Outcome::Failed)
        }
    }
}
