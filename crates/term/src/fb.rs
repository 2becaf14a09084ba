//! Character canvas the track view draws into.
//!
//! The canvas is a grid of styled glyphs stored row by row. Writes that fall
//! outside it are clipped, so a frame larger than the terminal simply gets cut
//! at the edges.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl GlyphStyle {
    /// Light grey on black.
    pub const PLAIN: GlyphStyle = GlyphStyle::fg(Rgb::new(220, 220, 220));

    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }

    pub const fn on(self, bg: Rgb) -> Self {
        Self { bg, ..self }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }

    pub fn glyph(self, ch: char) -> Glyph {
        Glyph { ch, style: self }
    }
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self::PLAIN
    }
}

/// One terminal column of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: GlyphStyle,
}

impl Default for Glyph {
    fn default() -> Self {
        GlyphStyle::PLAIN.glyph(' ')
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    rows: Vec<Vec<Glyph>>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            rows: vec![vec![Glyph::default(); width as usize]; height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        // Built from a u16 height, cannot exceed it.
        self.rows.len() as u16
    }

    /// Change the size; every glyph is reset to a blank.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.rows.resize_with(height as usize, Vec::new);
        for row in &mut self.rows {
            row.clear();
            row.resize(width as usize, Glyph::default());
        }
    }

    /// Blank the whole canvas with `style`.
    pub fn clear(&mut self, style: GlyphStyle) {
        let blank = style.glyph(' ');
        for row in &mut self.rows {
            row.fill(blank);
        }
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.rows.get(y as usize)?.get(x as usize).copied()
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: GlyphStyle) {
        if let Some(slot) = self
            .rows
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
        {
            *slot = style.glyph(ch);
        }
    }

    /// Write `text` from `(x, y)` rightwards, one column per char.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: GlyphStyle) {
        if let Some(row) = self.rows.get_mut(y as usize) {
            for (slot, ch) in row.iter_mut().skip(x as usize).zip(text.chars()) {
                *slot = style.glyph(ch);
            }
        }
    }

    /// Paint a `w x h` block of blanks in `style`.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, style: GlyphStyle) {
        let blank = style.glyph(' ');
        for row in self.rows.iter_mut().skip(y as usize).take(h as usize) {
            for slot in row.iter_mut().skip(x as usize).take(w as usize) {
                *slot = blank;
            }
        }
    }

    /// Box-drawing frame whose outer corners are `(x, y)` and `(x + w - 1, y + h - 1)`.
    pub fn draw_box(&mut self, x: u16, y: u16, w: u16, h: u16, style: GlyphStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        let edge_len = (w as usize - 2).min(self.width as usize);
        let edge: String = std::iter::repeat('─').take(edge_len).collect();
        self.put_str(x.saturating_add(1), y, &edge, style);
        self.put_str(x.saturating_add(1), bottom, &edge, style);
        for row in y.saturating_add(1)..bottom.min(self.height()) {
            self.put_char(x, row, '│', style);
            self.put_char(right, row, '│', style);
        }
        self.put_char(x, y, '┌', style);
        self.put_char(right, y, '┐', style);
        self.put_char(x, bottom, '└', style);
        self.put_char(right, bottom, '┘', style);
    }

    /// Row `y` as plain text, styles dropped.
    pub fn row_text(&self, y: u16) -> String {
        self.rows
            .get(y as usize)
            .map(|row| row.iter().map(|g| g.ch).collect())
            .unwrap_or_default()
    }
}
