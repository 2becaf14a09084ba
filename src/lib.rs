//! Line Track Designer (workspace facade crate).
//!
//! Re-exports the workspace crates under one stable path:
//! `line_track_designer::{core, export, raster, term, types}`.

pub use linetrack_core as core;
pub use linetrack_export as export;
pub use linetrack_raster as raster;
pub use linetrack_term as term;
pub use linetrack_types as types;
