use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Setup failures. Anything that happens during a scan is logged instead.
#[derive(Debug, Error)]
pub enum CleanError {
    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot resolve current directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("minimum age of {0} days is out of range")]
    InvalidAge(u64),
}
