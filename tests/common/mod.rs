#![allow(dead_code)]

use std::path::PathBuf;

use image::{Rgb, RgbImage};
use line_track_designer::core::{read_track, Track};
use line_track_designer::raster::{Tile, TileCatalog};
use line_track_designer::types::valid_tiles;

/// Marker painted in the top-left pixel of every synthetic tile.
pub const MARKER: Rgb<u8> = Rgb([255, 0, 0]);

pub fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

pub fn fixture(name: &str) -> Track {
    read_track(data(name), "fixture").unwrap()
}

/// Base color of the synthetic artwork of `tile`.
pub fn tile_color(tile: u8) -> Rgb<u8> {
    Rgb([tile * 7, 100, 255 - tile])
}

/// Catalog of `side`-pixel tiles: a flat color per tile, red top-left corner.
pub fn synthetic_catalog(side: u32) -> TileCatalog {
    TileCatalog::from_tiles(valid_tiles().map(|n| {
        let mut img = RgbImage::from_pixel(side, side, tile_color(n));
        img.put_pixel(0, 0, MARKER);
        Tile::new(n, img)
    }))
}

pub fn sample_track() -> Track {
    Track::new(
        &[vec![3, 2, 3], vec![2, 11, 2], vec![3, 2, 3]],
        &[vec![1, 1, 0], vec![0, 0, 0], vec![2, 1, 3]],
        "Test track",
    )
    .unwrap()
}
