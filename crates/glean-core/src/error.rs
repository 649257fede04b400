//! Fatal error taxonomy.
//!
//! Only structural failures of the run's input or output live here.
//! Per-line and per-sample extraction failures are swallowed locally and
//! aggregated into [`RunReport`](crate::RunReport) counters instead.

use std::path::PathBuf;

/// A failure that aborts the whole run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input log path could not be opened or read.
    #[error("failed to read input log {path}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input log is not a valid JSON document of the expected shape.
    #[error("input log {path} is not a valid eval log")]
    InputParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The output destination could not be written.
    #[error("failed to write output {path}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
