//! Reading and writing track text files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::codec;
use crate::error::{Result, TrackError};
use crate::track::Track;

/// Extension required for track text files.
pub const TRACK_EXTENSION: &str = "txt";

/// Fail with [`TrackError::Format`] unless `path` ends with `.{ext}`.
pub fn require_extension(path: &Path, ext: &str) -> Result<()> {
    if path.extension().and_then(|e| e.to_str()) == Some(ext) {
        Ok(())
    } else {
        Err(TrackError::Format(format!(
            "bad filename extension: requires .{}",
            ext
        )))
    }
}

/// Read the track stored in `path` and name it `name`.
pub fn read_track(path: impl AsRef<Path>, name: impl Into<String>) -> Result<Track> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(TrackError::FileNotFound(path.to_path_buf()));
    }
    require_extension(path, TRACK_EXTENSION)?;

    let text = fs::read_to_string(path).map_err(|source| TrackError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let track = codec::decode(&text, name)?;
    info!(path = %path.display(), "Reading track");
    Ok(track)
}

/// Write the text form of `track` to `path`.
pub fn save_txt(track: &Track, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    require_extension(path, TRACK_EXTENSION)?;
    fs::write(path, codec::render(track)).map_err(|source| TrackError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "Track saved");
    Ok(())
}
