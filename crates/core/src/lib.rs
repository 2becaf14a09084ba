//! Core track model - pure, deterministic, and testable
//!
//! This crate holds everything about a track that does not involve pixels:
//!
//! - [`track`]: the rectangular grid of `(tile, orientation)` cells and its edits
//! - [`rotate`]: whole-track rotation by quarter-turns
//! - [`codec`]: the plain-text grid format
//! - [`file`]: reading and writing `.txt` track files
//! - [`summary`]: dimensions and tile counts, serializable
//!
//! # Invariants
//!
//! - Every cell holds `0` or a valid tile number, and an orientation in `0..=3`
//! - The tile grid and the orientation grid always share the same shape
//! - A failed edit leaves the track unchanged
//!
//! # Example
//!
//! ```
//! use linetrack_core::Track;
//!
//! let mut track = Track::new(
//!     &[vec![3, 2, 3], vec![2, 11, 2], vec![3, 2, 3]],
//!     &[vec![1, 1, 0], vec![0, 0, 0], vec![2, 1, 3]],
//!     "my track",
//! )
//! .unwrap();
//!
//! assert_eq!(track.to_string(), "3;1 2;1 3;0\n2;0 11;0 2;0\n3;2 2;1 3;3");
//! assert_eq!(track.dimensions(), (600, 600));
//!
//! track.rotate(1);
//! track.set_tile(4, 0, 17, 1).unwrap();
//! assert_eq!(track.shape(), (5, 3));
//! ```

pub mod codec;
pub mod error;
pub mod file;
pub mod rotate;
pub mod summary;
pub mod track;

pub use linetrack_types as types;

// Re-export commonly used types for convenience
pub use codec::{decode, parse, render};
pub use error::{Axis, Result, TrackError};
pub use file::{read_track, require_extension, save_txt};
pub use rotate::rotate;
pub use summary::{TileCount, TrackSummary};
pub use track::{Grid, Track, DEFAULT_NAME};
