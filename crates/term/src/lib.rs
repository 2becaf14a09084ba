//! Terminal preview of a track.
//!
//! Tracks are drawn into a simple framebuffer that is then flushed to a
//! terminal backend, either inline or in a full-screen viewer.
//!
//! Goals:
//! - Keep `core` free of any terminal concern
//! - Make the layout testable without a terminal
//! - Allow precise control over aspect ratio (4 columns per cell by default)

pub mod fb;
pub mod keys;
pub mod renderer;
pub mod track_view;
pub mod viewer;

pub use linetrack_core as core;
pub use linetrack_types as types;

pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use keys::{handle_key_event, ViewerAction};
pub use renderer::{encode_rows_into, TerminalRenderer};
pub use track_view::{AnchorY, TrackView, Viewport};
pub use viewer::{print_track, run_viewer};
