//! Tile artwork and track rasterization.
//!
//! - [`catalog`]: the fixed set of tile artwork, loaded once per process
//! - [`compositor`]: composes a track into a single bitmap and saves it as PNG

pub mod catalog;
pub mod compositor;
pub mod error;

pub use linetrack_core as core;
pub use linetrack_types as types;

pub use catalog::{asset_name, Tile, TileCatalog};
pub use compositor::{thumbnail_size, Compositor, IMAGE_EXTENSION};
pub use error::{RasterError, Result};
