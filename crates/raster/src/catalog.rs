//! Tile catalog - artwork of every valid tile
//!
//! Assets are square PNG files named `linefollowtiles-NN.png` (`NN` is the tile
//! number padded to two digits). A catalog is loaded once and never changes;
//! the process-wide instance lives in a [`OnceLock`].

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use image::{imageops, RgbImage};
use tracing::{debug, info};

use crate::error::{RasterError, Result};
use crate::types::{is_valid_tile, valid_tiles, Orientation};

static GLOBAL: OnceLock<TileCatalog> = OnceLock::new();

/// A tile and its artwork.
#[derive(Clone)]
pub struct Tile {
    number: u8,
    name: String,
    image: RgbImage,
}

impl Tile {
    pub fn new(number: u8, image: RgbImage) -> Self {
        Self {
            number,
            name: asset_name(number),
            image,
        }
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    /// Asset file name, e.g. `linefollowtiles-07.png`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Artwork turned clockwise by `orient`.
    pub fn oriented(&self, orient: Orientation) -> RgbImage {
        match orient {
            Orientation::North => self.image.clone(),
            Orientation::East => imageops::rotate90(&self.image),
            Orientation::South => imageops::rotate180(&self.image),
            Orientation::West => imageops::rotate270(&self.image),
        }
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tile")
            .field("number", &self.number)
            .field("name", &self.name)
            .field("size", &self.image.dimensions())
            .finish()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// File name of the artwork of tile `number`.
pub fn asset_name(number: u8) -> String {
    format!("linefollowtiles-{:02}.png", number)
}

#[derive(Debug, Clone, Default)]
pub struct TileCatalog {
    tiles: BTreeMap<u8, Tile>,
}

impl TileCatalog {
    /// Load the artwork of every valid tile from `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut tiles = BTreeMap::new();
        for number in valid_tiles() {
            let path = dir.join(asset_name(number));
            let image = image::open(&path)
                .map_err(|source| RasterError::Asset {
                    path: path.clone(),
                    source,
                })?
                .to_rgb8();
            debug!(number, path = %path.display(), "Tile loaded");
            tiles.insert(number, Tile::new(number, image));
        }
        info!(dir = %dir.display(), count = tiles.len(), "Tiles loaded");
        Ok(Self { tiles })
    }

    /// Build a catalog from in-memory artwork. Numbers outside the valid set are skipped.
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self {
            tiles: tiles
                .into_iter()
                .filter(|t| is_valid_tile(t.number as i64))
                .map(|t| (t.number, t))
                .collect(),
        }
    }

    pub fn get(&self, number: u8) -> Result<&Tile> {
        self.tiles
            .get(&number)
            .ok_or(RasterError::TileNotFound(number))
    }

    /// Tiles in ascending number order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    pub fn numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.tiles.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl fmt::Display for TileCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tile) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}

/// Load the process-wide catalog from `dir` on first call; later calls return it unchanged.
pub fn init_global(dir: impl AsRef<Path>) -> Result<&'static TileCatalog> {
    if let Some(catalog) = GLOBAL.get() {
        return Ok(catalog);
    }
    let loaded = TileCatalog::load_dir(dir)?;
    // A concurrent initialiser may have won; either catalog is equivalent.
    Ok(GLOBAL.get_or_init(|| loaded))
}

/// Install an already built catalog as the process-wide one, if none is set yet.
pub fn install_global(catalog: TileCatalog) -> &'static TileCatalog {
    GLOBAL.get_or_init(|| catalog)
}

/// The process-wide catalog.
pub fn global() -> Result<&'static TileCatalog> {
    GLOBAL.get().ok_or(RasterError::CatalogUninitialised)
}
