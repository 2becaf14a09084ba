//! Printing the tiles needed to build a track.
//!
//! The printable tile set is one PDF document where page `n` holds tile `n`.
//! For every tile used by a track, one job asks for as many copies of that page
//! as the track has cells with the tile.
//!
//! Jobs go through a [`Spooler`]; [`CupsSpooler`] drives the CUPS command line
//! tools (`lpstat`, `lp`).

use std::path::{Path, PathBuf};
use std::process::Command;

use linetrack_core::Track;
use tracing::info;

use crate::error::PrintError;

/// Default paper format.
pub const DEFAULT_MEDIA: &str = "A4";

/// `lp` sides option; tile pages are printed one-sided.
const SIDES: &str = "one-sided";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintJob {
    pub document: PathBuf,
    pub title: String,
    pub copies: usize,
    /// Page of `document` to print; equals the tile number.
    pub page: u8,
    pub media: String,
}

/// Something that accepts print jobs.
pub trait Spooler {
    fn submit(&self, job: &PrintJob) -> Result<(), PrintError>;
}

/// One job per tile used by `track`, in ascending tile order.
pub fn plan_jobs(track: &Track, document: &Path, media: &str) -> Vec<PrintJob> {
    track
        .occurrences()
        .into_iter()
        .map(|(tile, copies)| PrintJob {
            document: document.to_path_buf(),
            title: track.name().to_string(),
            copies,
            page: tile,
            media: media.to_string(),
        })
        .collect()
}

/// Submit every job of `track`. Stops at the first failure.
pub fn print_track(
    track: &Track,
    spooler: &dyn Spooler,
    document: &Path,
    media: &str,
) -> Result<usize, PrintError> {
    info!(track = track.name(), "Printing track");
    let jobs = plan_jobs(track, document, media);
    for job in &jobs {
        spooler.submit(job)?;
        info!(page = job.page, copies = job.copies, "Pages printed");
    }
    Ok(jobs.len())
}

/// Spooler backed by the CUPS `lp` command.
#[derive(Debug, Clone)]
pub struct CupsSpooler {
    printer: String,
}

impl CupsSpooler {
    pub fn new(printer: impl Into<String>) -> Self {
        Self {
            printer: printer.into(),
        }
    }

    /// Use `name`, or the default destination, or the first printer CUPS knows.
    pub fn discover(name: Option<String>) -> Result<Self, PrintError> {
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            return Ok(Self::new(name));
        }
        let printer = lpstat(&["-d"])
            .as_deref()
            .and_then(parse_default_destination)
            .or_else(|| lpstat(&["-a"]).as_deref().and_then(parse_first_printer))
            .ok_or(PrintError::PrinterUnavailable)?;
        info!(printer = %printer, "Printer found");
        Ok(Self::new(printer))
    }

    pub fn printer(&self) -> &str {
        &self.printer
    }

    fn command(&self, job: &PrintJob) -> Command {
        let mut cmd = Command::new("lp");
        cmd.arg("-d")
            .arg(&self.printer)
            .arg("-n")
            .arg(job.copies.to_string())
            .arg("-P")
            .arg(job.page.to_string())
            .arg("-o")
            .arg(format!("media={}", job.media))
            .arg("-o")
            .arg(format!("sides={}", SIDES))
            .arg("-t")
            .arg(&job.title)
            .arg(&job.document);
        cmd
    }
}

impl Spooler for CupsSpooler {
    fn submit(&self, job: &PrintJob) -> Result<(), PrintError> {
        let output = self
            .command(job)
            .output()
            .map_err(|e| PrintError::PrintJobFailed(format!("cannot run lp: {}", e)))?;
        if output.status.success() {
            Ok(())
        } else {
            Err(PrintError::PrintJobFailed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ))
        }
    }
}

fn lpstat(args: &[&str]) -> Option<String> {
    let output = Command::new("lpstat").args(args).output().ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).into_owned())
}

/// `system default destination: NAME`
fn parse_default_destination(out: &str) -> Option<String> {
    out.lines()
        .find_map(|l| l.split_once("default destination:"))
        .map(|(_, name)| name.trim().to_string())
        .filter(|n| !n.is_empty())
}

/// `NAME accepting requests since ...`
fn parse_first_printer(out: &str) -> Option<String> {
    out.lines()
        .filter_map(|l| l.split_whitespace().next())
        .next()
        .map(str::to_string)
}
