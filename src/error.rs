//! Error type shared by the whole crate.
//!
//! Only configuration and input problems are errors. Row-index lookup misses
//! and degenerate data (zero-variance columns, palette exhaustion) are handled
//! in place and never surface here.

use thiserror::Error;

/// Errors raised while building or updating a parallel-coordinates session.
#[derive(Debug, Error)]
pub enum ParCoordsError {
    /// `draw.mode` was neither `print` nor `cluster`.
    #[error("wrong mode value, possible values: 'print', 'cluster', got: '{0}'")]
    InvalidDrawMode(String),

    /// A data row does not have one cell per dimension.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    /// A dimension name that is not part of the dataset.
    #[error("unknown dimension '{0}'")]
    UnknownDimension(String),

    /// The explicit cluster key sequence does not cover every row.
    #[error("cluster assignment has {found} entries, the dataset has {expected} rows")]
    ClusterLengthMismatch { found: usize, expected: usize },

    /// A supplied color scheme has no entry for a cluster key.
    #[error("no color given for cluster '{0}'")]
    MissingClusterColor(String),

    /// A color could not be parsed.
    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ParCoordsError>;
