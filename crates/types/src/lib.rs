//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (grid model, raster export, terminal preview).
//!
//! # Physical dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TILE_SIDE_MM` | 200 | Side of a printed tile in millimetres |
//! | `CELL_PX` | 1575 | Side of a tile artwork in pixels |
//!
//! # Tile numbers
//!
//! Valid tiles are numbered 2 to 33. Numbers 10 and 32 exist in the printed
//! set but cannot be used on a track. `0` marks an empty cell; it is rendered
//! with the artwork of [`BLANK_TILE`].
//!
//! # Examples
//!
//! ```
//! use linetrack_types::{is_valid_tile, Orientation, TILE_SIDE_MM};
//!
//! assert!(is_valid_tile(2));
//! assert!(!is_valid_tile(10));
//!
//! let o = Orientation::North.rotate_cw();
//! assert_eq!(o, Orientation::East);
//! assert_eq!(o.index(), 1);
//!
//! assert_eq!(TILE_SIDE_MM, 200);
//! ```

use std::fmt;

/// Side of a physical tile in millimetres.
pub const TILE_SIDE_MM: u32 = 200;

/// Side of a tile artwork in pixels.
pub const CELL_PX: u32 = 1575;

/// Tile used to render empty cells.
pub const BLANK_TILE: u8 = 11;

/// Marker for an empty cell.
pub const EMPTY_TILE: u8 = 0;

/// Lowest valid tile number.
pub const MIN_TILE: u8 = 2;

/// Highest valid tile number.
pub const MAX_TILE: u8 = 33;

/// Tile numbers inside `MIN_TILE..=MAX_TILE` that cannot be used.
pub const EXCLUDED_TILES: [u8; 2] = [10, 32];

/// Returns true if `number` is a tile of the catalog.
///
/// Takes a wide integer so unparsed user input can be checked before narrowing.
pub fn is_valid_tile(number: i64) -> bool {
    (MIN_TILE as i64..=MAX_TILE as i64).contains(&number)
        && !EXCLUDED_TILES.iter().any(|&t| t as i64 == number)
}

/// All valid tile numbers in ascending order.
pub fn valid_tiles() -> impl Iterator<Item = u8> {
    (MIN_TILE..=MAX_TILE).filter(|&t| is_valid_tile(t as i64))
}

/// Quarter-turn applied to a tile's artwork
///
/// - **North**: artwork as printed (0)
/// - **East**: rotated 90° clockwise (1)
/// - **South**: rotated 180° (2)
/// - **West**: rotated 270° clockwise (3)
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Orientation {
    const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    /// Build from the numeric form used in track files (0..=3)
    ///
    /// # Examples
    ///
    /// ```
    /// use linetrack_types::Orientation;
    ///
    /// assert_eq!(Orientation::from_index(2), Some(Orientation::South));
    /// assert_eq!(Orientation::from_index(4), None);
    /// assert_eq!(Orientation::from_index(-1), None);
    /// ```
    pub fn from_index(value: i64) -> Option<Self> {
        usize::try_from(value)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Numeric form used in track files
    pub fn index(&self) -> u8 {
        match self {
            Orientation::North => 0,
            Orientation::East => 1,
            Orientation::South => 2,
            Orientation::West => 3,
        }
    }

    /// Clockwise angle in degrees
    pub fn degrees(&self) -> u32 {
        self.index() as u32 * 90
    }

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use linetrack_types::Orientation;
    ///
    /// assert_eq!(Orientation::North.rotate_cw(), Orientation::East);
    /// assert_eq!(Orientation::West.rotate_cw(), Orientation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        self.rotated(1)
    }

    /// Rotate counter-clockwise (-90° or 270°)
    ///
    /// # Examples
    ///
    /// ```
    /// use linetrack_types::Orientation;
    ///
    /// assert_eq!(Orientation::North.rotate_ccw(), Orientation::West);
    /// assert_eq!(Orientation::East.rotate_ccw(), Orientation::North);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        self.rotated(-1)
    }

    /// Rotate by `k` quarter-turns clockwise; negative `k` turns counter-clockwise.
    pub fn rotated(&self, k: i32) -> Self {
        let i = (self.index() as i32 + k).rem_euclid(4);
        Self::ALL[i as usize]
    }

    /// Arrow pointing where the artwork's top edge ends up.
    pub fn arrow(&self) -> char {
        match self {
            Orientation::North => '↑',
            Orientation::East => '→',
            Orientation::South => '↓',
            Orientation::West => '←',
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// A cell of a track
///
/// `tile` is either [`EMPTY_TILE`] or a valid catalog number; the grid model
/// enforces this on every write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub tile: u8,
    pub orient: Orientation,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        tile: EMPTY_TILE,
        orient: Orientation::North,
    };

    pub const fn new(tile: u8, orient: Orientation) -> Self {
        Self { tile, orient }
    }

    pub fn is_empty(&self) -> bool {
        self.tile == EMPTY_TILE
    }

    /// Tile whose artwork represents this cell.
    pub fn artwork_tile(&self) -> u8 {
        if self.is_empty() {
            BLANK_TILE
        } else {
            self.tile
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{}", self.tile, self.orient)
    }
}
