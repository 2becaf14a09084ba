//! Markdown export of a track.
//!
//! The document lists the name of the track, a PNG preview, an optional
//! description, the dimensions and the tiles to print.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use linetrack_core::{require_extension, Track};
use linetrack_raster::{Compositor, TileCatalog};
use tracing::info;

use crate::error::{ExportError, Result};

/// Extension required for markdown exports.
pub const MARKDOWN_EXTENSION: &str = "md";

const CREDIT: &str = "Built with line-track-designer";

/// Small markdown emitter. Every block ends with a newline; blocks may be
/// preceded by a blank line.
pub struct MarkdownWriter<W: Write> {
    out: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn write(&mut self, text: &str, break_before: bool) -> Result<()> {
        if break_before {
            self.out.write_all(b"\n")?;
        }
        self.out.write_all(text.as_bytes())?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    /// Paragraph of free text.
    pub fn paragraph(&mut self, text: &str) -> Result<()> {
        self.write(text, true)
    }

    /// Heading of `level` 1 to 6. The text is capitalized.
    pub fn title(&mut self, text: &str, level: u8) -> Result<()> {
        if !(1..=6).contains(&level) {
            return Err(ExportError::TitleLevel(level));
        }
        let line = format!("{} {}", "#".repeat(level as usize), capitalize(text));
        self.write(&line, level != 1)
    }

    pub fn image(&mut self, file: &str, label: &str) -> Result<()> {
        self.write(&format!("![{}]({})", label, file), true)
    }

    pub fn separator(&mut self) -> Result<()> {
        self.write("---", true)
    }

    /// Table with centered columns. With `head`, the first row is the header.
    pub fn table<R, C>(&mut self, rows: R, head: bool) -> Result<()>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: ToString,
    {
        for (i, row) in rows.into_iter().enumerate() {
            let cells: Vec<String> = row.into_iter().map(|c| c.to_string()).collect();
            self.write(&cells.join(" | "), false)?;
            if i == 0 && head {
                self.write(&vec![":---:"; cells.len()].join(" | "), false)?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// First character upper case, the rest lower case.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Write the markdown body describing `track`, referencing `image_file`.
pub fn write_document<W: Write>(
    md: &mut MarkdownWriter<W>,
    track: &Track,
    image_file: &str,
    description: &str,
) -> Result<()> {
    md.title(track.name(), 1)?;
    md.image(image_file, track.name())?;
    if !description.is_empty() {
        md.title("description", 2)?;
        md.paragraph(description)?;
    }

    md.title("dimensions", 2)?;
    let (w, h) = track.dimensions();
    md.table(
        [
            ["Width".to_string(), "Height".to_string()],
            [format!("{} mm", w), format!("{} mm", h)],
        ],
        true,
    )?;

    md.title("tiles", 2)?;
    let header = vec!["Tile number".to_string(), "Number of copies required".to_string()];
    let rows = std::iter::once(header).chain(
        track
            .occurrences()
            .into_iter()
            .map(|(tile, copies)| vec![tile.to_string(), copies.to_string()]),
    );
    md.table(rows, true)?;

    md.paragraph(CREDIT)?;
    Ok(())
}

/// Save `track` as a markdown file, with its PNG image next to it (same stem).
pub fn save_md(
    track: &Track,
    path: impl AsRef<Path>,
    description: &str,
    compositor: &Compositor,
    catalog: &TileCatalog,
) -> Result<()> {
    let path = path.as_ref();
    require_extension(path, MARKDOWN_EXTENSION)?;

    let image_path = path.with_extension(linetrack_raster::IMAGE_EXTENSION);
    compositor.save_png(track, catalog, &image_path)?;
    let image_file = image_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut md = MarkdownWriter::new(BufWriter::new(File::create(path)?));
    write_document(&mut md, track, &image_file, description)?;
    md.flush()?;

    info!(path = %path.display(), "Track saved as markdown file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut MarkdownWriter<Vec<u8>>) -> Result<()>) -> String {
        let mut md = MarkdownWriter::new(Vec::new());
        f(&mut md).unwrap();
        String::from_utf8(md.into_inner()).unwrap()
    }

    #[test]
    fn capitalize_lowercases_the_rest() {
        assert_eq!(capitalize("my TRACK"), "My track");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élan"), "Élan");
    }

    #[test]
    fn titles_respect_levels() {
        assert_eq!(render(|md| md.title("name", 1)), "# Name\n");
        assert_eq!(render(|md| md.title("tiles", 2)), "\n## Tiles\n");

        let mut md = MarkdownWriter::new(Vec::new());
        assert!(matches!(md.title("x", 0), Err(ExportError::TitleLevel(0))));
        assert!(matches!(md.title("x", 7), Err(ExportError::TitleLevel(7))));
    }

    #[test]
    fn table_has_centered_header() {
        let out = render(|md| md.table([["a", "b"], ["1", "2"]], true));
        assert_eq!(out, "a | b\n:---: | :---:\n1 | 2\n");

        let out = render(|md| md.table([["1", "2"]], false));
        assert_eq!(out, "1 | 2\n");
    }

    #[test]
    fn document_lists_dimensions_and_tiles() {
        let track = Track::new(
            &[vec![3, 2, 3], vec![2, 11, 2]],
            &[vec![0, 0, 0], vec![0, 0, 0]],
            "test track",
        )
        .unwrap();
        let out = render(|md| write_document(md, &track, "test.png", "Easy track"));
        let expected = "# Test track\n\
            \n![test track](test.png)\n\
            \n## Description\n\
            \nEasy track\n\
            \n## Dimensions\n\
            Width | Height\n\
            :---: | :---:\n\
            600 mm | 400 mm\n\
            \n## Tiles\n\
            Tile number | Number of copies required\n\
            :---: | :---:\n\
            2 | 3\n\
            3 | 2\n\
            11 | 1\n\
            \nBuilt with line-track-designer\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn empty_description_is_omitted() {
        let track = Track::zeros(1, 1, "t");
        let out = render(|md| write_document(md, &track, "t.png", ""));
        assert!(!out.contains("Description"));
    }
}
