// File: crates/netplot-core/src/error.rs
// Summary: Error type for loading data and rendering charts.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    /// Input path is missing or cannot be read.
    #[error("cannot read input '{}'", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A field on a data row is not a finite number.
    #[error("line {line}, column {column}: '{token}' is not a number")]
    MalformedRow { line: usize, column: usize, token: String },

    /// CSV input could not be tokenized.
    #[error("malformed CSV input")]
    Csv(#[from] csv::Error),

    /// Not a single row supplied a point to any series.
    #[error("no plottable rows in input")]
    NoData,

    /// Destination cannot be written (missing directory, permissions, full disk).
    #[error("cannot write output '{}'", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Skia surface allocation or encoding failed.
    #[error("render failed: {0}")]
    Render(String),
}

pub type Result<T, E = PlotError> = std::result::Result<T, E>;
