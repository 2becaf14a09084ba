use linetrack_core::TrackError;
use linetrack_raster::RasterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid level {0} for a markdown title")]
    TitleLevel(u8),

    #[error("failed to write markdown: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Raster(#[from] RasterError),

    #[error(transparent)]
    Track(#[from] TrackError),

    #[error(transparent)]
    Print(#[from] PrintError),
}

#[derive(Debug, Error)]
pub enum PrintError {
    #[error("no printers found")]
    PrinterUnavailable,

    #[error("printing failed: {0}")]
    PrintJobFailed(String),
}

pub type Result<T> = std::result::Result<T, ExportError>;
