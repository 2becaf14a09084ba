//! Raster compositor - renders a track into one bitmap
//!
//! Each cell is drawn at full resolution (`cell_px` square), turned by its
//! orientation, and pasted at `(col * cell_px, row * cell_px)`. Empty cells use
//! the artwork of [`BLANK_TILE`](crate::types::BLANK_TILE). The finished canvas
//! is then shrunk so its longer side is at most `cell_px`.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbImage;
use linetrack_core::{require_extension, Track};
use tracing::info;

use crate::catalog::TileCatalog;
use crate::error::Result;
use crate::types::CELL_PX;

/// Extension required for image exports.
pub const IMAGE_EXTENSION: &str = "png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compositor {
    /// Side of one cell on the full-resolution canvas, and bound of the final image.
    cell_px: u32,
}

impl Default for Compositor {
    fn default() -> Self {
        Self { cell_px: CELL_PX }
    }
}

impl Compositor {
    pub fn new(cell_px: u32) -> Self {
        Self {
            cell_px: cell_px.max(1),
        }
    }

    pub fn cell_px(&self) -> u32 {
        self.cell_px
    }

    /// Full-resolution canvas, before the final downscale.
    pub fn compose(&self, track: &Track, catalog: &TileCatalog) -> Result<RgbImage> {
        let side = self.cell_px;
        let mut canvas = RgbImage::new(track.cols() as u32 * side, track.rows() as u32 * side);

        for (r, row) in track.iter_rows().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let tile = catalog.get(cell.artwork_tile())?;
                let mut art = tile.oriented(cell.orient);
                if art.dimensions() != (side, side) {
                    art = imageops::resize(&art, side, side, FilterType::Lanczos3);
                }
                imageops::replace(
                    &mut canvas,
                    &art,
                    c as i64 * side as i64,
                    r as i64 * side as i64,
                );
            }
        }
        Ok(canvas)
    }

    /// Render `track` and shrink it to a single-cell-sized preview.
    pub fn export_img(&self, track: &Track, catalog: &TileCatalog) -> Result<RgbImage> {
        let canvas = self.compose(track, catalog)?;
        let (w, h) = thumbnail_size(canvas.dimensions(), self.cell_px);
        let img = if (w, h) == canvas.dimensions() {
            canvas
        } else {
            imageops::resize(&canvas, w, h, FilterType::Lanczos3)
        };
        info!(width = w, height = h, "Track exported to image");
        Ok(img)
    }

    /// Render `track` and write it as a PNG file.
    pub fn save_png(&self, track: &Track, catalog: &TileCatalog, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        require_extension(path, IMAGE_EXTENSION)?;
        let img = self.export_img(track, catalog)?;
        img.save(path)?;
        info!(path = %path.display(), "Track saved as PNG file");
        Ok(())
    }
}

/// Size fitting `(w, h)` into a `bound x bound` box, keeping the aspect ratio.
/// Images already inside the box keep their size.
pub fn thumbnail_size((w, h): (u32, u32), bound: u32) -> (u32, u32) {
    if w <= bound && h <= bound {
        return (w, h);
    }
    let scale = |short: u32, long: u32| {
        let v = (short as u64 * bound as u64 + long as u64 / 2) / long as u64;
        (v as u32).max(1)
    };
    if w >= h {
        (bound, scale(h, w))
    } else {
        (scale(w, h), bound)
    }
}
