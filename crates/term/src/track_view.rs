//! TrackView: maps a [`Track`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Track;
use crate::fb::{FrameBuffer, GlyphStyle, Rgb};
use crate::types::Cell;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Rows used above the frame for the title line.
const HEADER_ROWS: u16 = 1;

const GRID_BG: Rgb = Rgb::new(30, 30, 40);

/// A lightweight terminal view of a track.
pub struct TrackView {
    /// Track cell width in terminal columns.
    cell_w: u16,
    /// Track cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for TrackView {
    fn default() -> Self {
        // "17→ " fits in four columns
        Self {
            cell_w: 4,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl TrackView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(3),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Smallest viewport showing the whole track with its frame and title.
    pub fn required_size(&self, track: &Track) -> Viewport {
        let (frame_w, frame_h) = self.frame_size(track);
        let title_w = clamp_u16(title(track).chars().count());
        Viewport::new(frame_w.max(title_w), frame_h.saturating_add(HEADER_ROWS))
    }

    /// Frame size in terminal cells, saturating for tracks wider than a terminal.
    fn frame_size(&self, track: &Track) -> (u16, u16) {
        let w = clamp_u16(track.cols()).saturating_mul(self.cell_w).saturating_add(2);
        let h = clamp_u16(track.rows()).saturating_mul(self.cell_h).saturating_add(2);
        (w, h)
    }

    /// Render `track` into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(&self, track: &Track, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(GlyphStyle::PLAIN);

        let (frame_w, frame_h) = self.frame_size(track);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => {
                viewport.height.saturating_sub(frame_h.saturating_add(HEADER_ROWS)) / 2
            }
            AnchorY::Top => 0,
        };

        let header = GlyphStyle::fg(Rgb::new(240, 240, 240)).bold();
        fb.put_str(start_x, start_y, &title(track), header);

        let top = start_y + HEADER_ROWS;
        let inner = GlyphStyle::fg(Rgb::new(80, 80, 90)).on(GRID_BG);
        fb.fill_rect(
            start_x + 1,
            top + 1,
            frame_w.saturating_sub(2),
            frame_h.saturating_sub(2),
            inner,
        );
        fb.draw_box(start_x, top, frame_w, frame_h, GlyphStyle::PLAIN);

        // Cells past the viewport edge are clipped anyway; stop walking them.
        let visible_cols = (viewport.width / self.cell_w) as usize + 1;
        let visible_rows = (viewport.height / self.cell_h) as usize + 1;
        for (r, row) in track.iter_rows().take(visible_rows).enumerate() {
            for (c, cell) in row.iter().take(visible_cols).enumerate() {
                self.draw_cell(fb, start_x, top, c as u16, r as u16, *cell);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, track: &Track, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(track, viewport, &mut fb);
        fb
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16, cell: Cell) {
        let px = start_x
            .saturating_add(1)
            .saturating_add(x.saturating_mul(self.cell_w));
        let py = start_y
            .saturating_add(1)
            .saturating_add(y.saturating_mul(self.cell_h));

        if cell.is_empty() {
            let style = GlyphStyle::fg(Rgb::new(90, 90, 100)).on(GRID_BG).dim();
            fb.put_char(px.saturating_add(1), py, '·', style);
            return;
        }

        let style = GlyphStyle::fg(tile_color(cell.tile)).on(GRID_BG).bold();
        let label = format!("{:>2}{}", cell.tile, cell.orient.arrow());
        fb.put_str(px, py, &label, style);
    }
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn title(track: &Track) -> String {
    let (w, h) = track.dimensions();
    format!("{}  {}x{} mm", track.name(), w, h)
}

/// Stable per-tile color so equal tiles read alike.
fn tile_color(tile: u8) -> Rgb {
    const PALETTE: [Rgb; 7] = [
        Rgb::new(80, 220, 220),
        Rgb::new(240, 220, 80),
        Rgb::new(200, 120, 220),
        Rgb::new(100, 220, 120),
        Rgb::new(220, 80, 80),
        Rgb::new(80, 120, 220),
        Rgb::new(255, 165, 0),
    ];
    PALETTE[tile as usize % PALETTE.len()]
}
