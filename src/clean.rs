use std::path::{Path, PathBuf};

use crate::sanitize::sanitize_bytes;

#[derive(thiserror::Error, Debug)]
pub enum CleanError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanReport {
    pub bytes_read: usize,
    pub bytes_written: usize,
}

impl CleanReport {
    pub fn bytes_dropped(&self) -> usize {
        self.bytes_read - self.bytes_written
    }
}

/// Reads `input` whole, keeps only allowed bytes and writes them to `output`.
///
/// The input handle is closed before `output` is opened, so a failed read
/// never creates the output file. A failed write may leave it truncated.
pub fn clean(input: &Path, output: &Path) -> Result<CleanReport, CleanError> {
    let content = std::fs::read(input).map_err(|source| CleanError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let cleaned = sanitize_bytes(&content);

    std::fs::write(output, &cleaned).map_err(|source| CleanError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    let report = CleanReport {
        bytes_read: content.len(),
        bytes_written: cleaned.len(),
    };
    log::debug!(
        "cleaned {} -> {}: kept {} of {} bytes",
        input.display(),
        output.display(),
        report.bytes_written,
        report.bytes_read
    );
    Ok(report)
}
