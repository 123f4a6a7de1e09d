use std::{io, path::PathBuf};

use thiserror::Error;

/// Conditions that abort a run. Parse failures are not errors; they are
/// counted and reported.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("could not open log file {path}: {source}")]
    OpenLog { path: PathBuf, source: io::Error },

    #[error("failed while reading the log: {0}")]
    ReadLog(io::Error),

    #[error("failed to write the report: {0}")]
    WriteReport(io::Error),
}
