use std::path::PathBuf;

use linetrack_core::TrackError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("tile {0} not found")]
    TileNotFound(u8),

    #[error("tile asset {}: {source}", path.display())]
    Asset {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("tile catalog is not initialised")]
    CatalogUninitialised,

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Track(#[from] TrackError),
}

pub type Result<T> = std::result::Result<T, RasterError>;
