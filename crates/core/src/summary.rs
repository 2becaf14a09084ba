//! Serializable overview of a track: dimensions and the tiles to print.

use serde::{Deserialize, Serialize};

use crate::track::Track;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileCount {
    pub tile: u8,
    pub copies: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSummary {
    pub name: String,
    pub rows: usize,
    pub cols: usize,
    pub width_mm: u32,
    pub height_mm: u32,
    /// Ascending by tile number.
    pub tiles: Vec<TileCount>,
}

impl Track {
    pub fn summary(&self) -> TrackSummary {
        let (width_mm, height_mm) = self.dimensions();
        TrackSummary {
            name: self.name().to_string(),
            rows: self.rows(),
            cols: self.cols(),
            width_mm,
            height_mm,
            tiles: self
                .occurrences()
                .into_iter()
                .map(|(tile, copies)| TileCount { tile, copies })
                .collect(),
        }
    }
}
