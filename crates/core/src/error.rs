//! Error type shared by the grid model, the codec and the file layer.

use std::path::PathBuf;

use thiserror::Error;

/// Grid axis, used to report out-of-range row/column indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Col => f.write_str("column"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TrackError {
    #[error("file {} not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("{0}")]
    Format(String),

    #[error("tiles and orient must have the same shape ({tiles} vs {orient})")]
    ShapeMismatch { tiles: String, orient: String },

    #[error("{0} is not a valid tile value")]
    InvalidTile(i64),

    #[error("{0} is not a valid orient value")]
    InvalidOrient(i64),

    #[error("{axis} {index} out of range: track has {len}")]
    IndexOutOfBounds { axis: Axis, index: usize, len: usize },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TrackError {
    pub(crate) fn format(msg: impl Into<String>) -> Self {
        TrackError::Format(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, TrackError>;
