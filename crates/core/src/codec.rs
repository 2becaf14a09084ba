//! Text codec for tracks.
//!
//! One line per row, cells separated by a single space, each cell written as
//! `tile;orient`:
//!
//! ```text
//! 3;1 2;1 3;0
//! 2;0 11;0 2;0
//! 3;2 2;1 3;3
//! ```
//!
//! Parsing only checks the syntax and that the grid is rectangular; values are
//! validated when the [`Track`] is built.

use crate::error::{Result, TrackError};
use crate::track::{Grid, Track};

/// Parse the text form into `(tiles, orient)` grids.
pub fn parse(text: &str) -> Result<(Grid, Grid)> {
    let mut tiles = Grid::new();
    let mut orient = Grid::new();

    for (line_no, line) in text.lines().enumerate() {
        let mut row_t = Vec::new();
        let mut row_o = Vec::new();
        for token in line.split(' ') {
            let (t, o) = parse_cell(token).ok_or_else(|| {
                TrackError::format(format!(
                    "line {}: malformed cell {:?}, expected <tile>;<orient>",
                    line_no + 1,
                    token
                ))
            })?;
            row_t.push(t);
            row_o.push(o);
        }

        if let Some(first) = tiles.first() {
            if first.len() != row_t.len() {
                return Err(TrackError::format(format!(
                    "line {}: {} cells, expected {}",
                    line_no + 1,
                    row_t.len(),
                    first.len()
                )));
            }
        }
        tiles.push(row_t);
        orient.push(row_o);
    }

    Ok((tiles, orient))
}

fn parse_cell(token: &str) -> Option<(i64, i64)> {
    let (t, o) = token.split_once(';')?;
    Some((t.parse().ok()?, o.parse().ok()?))
}

/// Text form of `track`, without trailing newline.
pub fn render(track: &Track) -> String {
    track.to_string()
}

/// Parse `text` and build a validated track named `name`.
pub fn decode(text: &str, name: impl Into<String>) -> Result<Track> {
    let (tiles, orient) = parse(text)?;
    Track::new(&tiles, &orient, name)
}
