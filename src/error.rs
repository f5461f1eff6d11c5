use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a run.
///
/// Field-level coercion failures are not represented here; an unusable
/// numeric cell becomes `0.0` at load time and is never an error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to access file {path:?}: {inner}")]
    AccessError {
        path: PathBuf,
        #[source]
        inner: io::Error,
    },

    #[error("Failed to parse {path:?}: {inner}")]
    CsvError {
        path: PathBuf,
        #[source]
        inner: csv::Error,
    },

    /// A baseline series came up empty: either the input table has no rows,
    /// or a positive-denominator filter excluded every record. There is no
    /// meaningful mean to fall back to.
    #[error("Cannot compute the {metric} baseline: no qualifying records")]
    EmptySeries { metric: &'static str },

    #[error("Failed to write report: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to export baselines: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
