//! Track module - the rectangular grid of tiles
//!
//! A track is a `rows x cols` grid where each cell holds a tile number and an
//! orientation. Cells live in one flat vector (row-major, `row * cols + col`);
//! structural edits allocate a buffer of the target shape, copy, and swap it in.
//!
//! Every mutator validates its input before touching the grid, so a failed call
//! leaves the track exactly as it was.
//!
//! A track with no rows or no columns is always stored as `0 x 0`; the text form
//! cannot tell `3 x 0` from `0 x 0`, so neither can the model.

use std::collections::BTreeMap;
use std::fmt;

use tracing::info;

use crate::error::{Axis, Result, TrackError};
use crate::types::{is_valid_tile, Cell, Orientation, EMPTY_TILE, TILE_SIDE_MM};

/// Input grid of raw integers, as produced by the codec or written by hand.
pub type Grid = Vec<Vec<i64>>;

/// Default display name of a track.
pub const DEFAULT_NAME: &str = "track";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    name: String,
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Track {
    /// Build a track from a grid of tile numbers and a grid of orientations.
    ///
    /// Both grids must be rectangular and share the same shape. Tile values must
    /// be `0` or a catalog number, orientations must be in `0..=3`.
    pub fn new(tiles: &[Vec<i64>], orient: &[Vec<i64>], name: impl Into<String>) -> Result<Self> {
        let tiles_shape = shape_of(tiles);
        let orient_shape = shape_of(orient);
        if tiles_shape.is_none() || orient_shape.is_none() || tiles_shape != orient_shape {
            return Err(TrackError::ShapeMismatch {
                tiles: describe_shape(tiles),
                orient: describe_shape(orient),
            });
        }
        let (rows, cols) = tiles_shape.map_or((0, 0), |(r, c)| non_degenerate(r, c));

        let mut cells = Vec::with_capacity(rows * cols);
        for (row_t, row_o) in tiles.iter().zip(orient) {
            for (&t, &o) in row_t.iter().zip(row_o) {
                cells.push(validate_cell(t, o)?);
            }
        }

        info!(rows, cols, "Track created");
        Ok(Self {
            name: name.into(),
            rows,
            cols,
            cells,
        })
    }

    /// Create an empty track (only zeros)
    pub fn zeros(rows: usize, cols: usize, name: impl Into<String>) -> Self {
        let (rows, cols) = non_degenerate(rows, cols);
        Self {
            name: name.into(),
            rows,
            cols,
            cells: vec![Cell::EMPTY; rows * cols],
        }
    }

    /// Largest grid fitting in `width_mm x height_mm`, as `(width / side, height / side)`.
    pub fn max_shape(width_mm: u32, height_mm: u32) -> (u32, u32) {
        (width_mm / TILE_SIDE_MM, height_mm / TILE_SIDE_MM)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`, shared by the tile grid and the orientation grid.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Get cell at `(row, col)`, or `None` if out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows as slices of cells.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        let cols = self.cols;
        (0..self.rows).map(move |r| &self.cells[r * cols..(r + 1) * cols])
    }

    /// Grid of tile numbers.
    pub fn tiles(&self) -> Vec<Vec<u8>> {
        self.iter_rows()
            .map(|row| row.iter().map(|c| c.tile).collect())
            .collect()
    }

    /// Grid of orientations in their numeric form.
    pub fn orient(&self) -> Vec<Vec<u8>> {
        self.iter_rows()
            .map(|row| row.iter().map(|c| c.orient.index()).collect())
            .collect()
    }

    /// Append a column of empty cells on the right edge. An empty track becomes `1 x 1`.
    pub fn add_col(&mut self) {
        self.reshape(self.rows.max(1), self.cols + 1, |r, c| (r, c));
        info!("Column added to track");
    }

    /// Append a row of empty cells on the bottom edge. An empty track becomes `1 x 1`.
    pub fn add_row(&mut self) {
        self.reshape(self.rows + 1, self.cols.max(1), |r, c| (r, c));
        info!("Row added to track");
    }

    /// Delete the column at `col`. Deleting the last column empties the track.
    pub fn del_col(&mut self, col: usize) -> Result<()> {
        if col >= self.cols {
            return Err(TrackError::IndexOutOfBounds {
                axis: Axis::Col,
                index: col,
                len: self.cols,
            });
        }
        self.reshape(self.rows, self.cols - 1, |r, c| {
            (r, if c >= col { c + 1 } else { c })
        });
        info!(col, "Column deleted from track");
        Ok(())
    }

    /// Delete the row at `row`. Deleting the last row empties the track.
    pub fn del_row(&mut self, row: usize) -> Result<()> {
        if row >= self.rows {
            return Err(TrackError::IndexOutOfBounds {
                axis: Axis::Row,
                index: row,
                len: self.rows,
            });
        }
        self.reshape(self.rows - 1, self.cols, |r, c| {
            (if r >= row { r + 1 } else { r }, c)
        });
        info!(row, "Row deleted from track");
        Ok(())
    }

    /// Write `(tile, orient)` at `(row, col)`, growing the grid with empty
    /// rows/columns first if the cell does not exist yet.
    pub fn set_tile(&mut self, row: usize, col: usize, tile: i64, orient: i64) -> Result<()> {
        let cell = validate_cell(tile, orient)?;

        if row >= self.rows || col >= self.cols {
            let (rows, cols) = (self.rows.max(row + 1), self.cols.max(col + 1));
            self.reshape(rows, cols, |r, c| (r, c));
            info!(rows, cols, "Track grown");
        }

        let i = row * self.cols + col;
        self.cells[i] = cell;
        info!(row, col, tile, orient, "Tile set to track");
        Ok(())
    }

    /// Width and height in millimetres.
    pub fn dimensions(&self) -> (u32, u32) {
        (
            self.cols as u32 * TILE_SIDE_MM,
            self.rows as u32 * TILE_SIDE_MM,
        )
    }

    /// Number of cells using each tile, for tiles used at least once.
    pub fn occurrences(&self) -> BTreeMap<u8, usize> {
        let mut occur = BTreeMap::new();
        for cell in self.cells.iter().filter(|c| !c.is_empty()) {
            *occur.entry(cell.tile).or_insert(0) += 1;
        }
        occur
    }

    /// Replace the grid by a `rows x cols` one where each target cell reads the
    /// source cell returned by `source(r, c)`; sources outside the old grid are empty.
    pub(crate) fn reshape(
        &mut self,
        rows: usize,
        cols: usize,
        source: impl Fn(usize, usize) -> (usize, usize),
    ) {
        let (rows, cols) = non_degenerate(rows, cols);
        let mut cells = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                let (sr, sc) = source(r, c);
                cells.push(self.cell(sr, sc).unwrap_or(Cell::EMPTY));
            }
        }
        self.rows = rows;
        self.cols = cols;
        self.cells = cells;
    }

    /// Overwrite every cell in place, keeping the shape.
    pub(crate) fn map_cells(&mut self, f: impl Fn(Cell) -> Cell) {
        for cell in &mut self.cells {
            *cell = f(*cell);
        }
    }
}

impl fmt::Display for Track {
    /// Canonical text form: `tile;orient` cells separated by spaces, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                f.write_str("\n")?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

fn validate_cell(tile: i64, orient: i64) -> Result<Cell> {
    if tile != EMPTY_TILE as i64 && !is_valid_tile(tile) {
        return Err(TrackError::InvalidTile(tile));
    }
    let orient = Orientation::from_index(orient).ok_or(TrackError::InvalidOrient(orient))?;
    // Range checked above, narrowing cannot truncate.
    Ok(Cell::new(tile as u8, orient))
}

/// Collapse `N x 0` and `0 x N` to `0 x 0`.
fn non_degenerate(rows: usize, cols: usize) -> (usize, usize) {
    if rows == 0 || cols == 0 {
        (0, 0)
    } else {
        (rows, cols)
    }
}

/// `(rows, cols)` of a rectangular grid, `None` if rows differ in length.
fn shape_of(grid: &[Vec<i64>]) -> Option<(usize, usize)> {
    let cols = grid.first().map_or(0, Vec::len);
    grid.iter()
        .all(|row| row.len() == cols)
        .then_some((grid.len(), cols))
}

fn describe_shape(grid: &[Vec<i64>]) -> String {
    match shape_of(grid) {
        Some((r, c)) => format!("{}x{}", r, c),
        None => format!("{} ragged rows", grid.len()),
    }
}
