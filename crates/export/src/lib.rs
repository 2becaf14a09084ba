//! Exports that feed people rather than programs: markdown build sheets and
//! printed tiles.

pub mod error;
pub mod markdown;
pub mod printer;

pub use error::{ExportError, PrintError, Result};
pub use markdown::{save_md, write_document, MarkdownWriter, MARKDOWN_EXTENSION};
pub use printer::{plan_jobs, print_track, CupsSpooler, PrintJob, Spooler, DEFAULT_MEDIA};
