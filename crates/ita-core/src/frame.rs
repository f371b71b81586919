use crate::color::{Rgb, ansi_truecolor};

/// Character columns emitted per sampled pixel.
///
/// Monospace terminal glyphs are roughly twice as tall as wide, so each
/// pixel is rendered as two adjacent columns to approximate a square. Every
/// conversion from "requested columns" to "sampled pixels" divides by this
/// constant.
pub const GLYPH_ASPECT: usize = 2;

/// Decoded pixel buffer. RGBA row-major, 4 bytes per pixel.
///
/// Immutable from the pipeline's point of view: render stages read it, never
/// mutate it.
///
/// # Example
/// ```
/// use ita_core::frame::FrameBuffer;
/// let fb = FrameBuffer::new(10, 10);
/// assert_eq!(fb.data.len(), 400);
/// ```
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    /// Pixels RGBA, row-major, 4 bytes per pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameBuffer {
    /// Create a zeroed buffer with the given dimensions.
    ///
    /// # Example
    /// ```
    /// use ita_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(100, 50);
    /// assert_eq!(fb.width, 100);
    /// assert_eq!(fb.height, 50);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; (width * height * 4) as usize],
            width,
            height,
        }
    }

    /// Pixel access (x, y) → (r, g, b, a). Out-of-range reads return black.
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = ((y * self.width + x) * 4) as usize;
        if idx + 3 >= self.data.len() {
            return (0, 0, 0, 0);
        }
        (
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }

    /// Pixel access without the alpha channel.
    #[inline(always)]
    #[must_use]
    pub fn rgb(&self, x: u32, y: u32) -> Rgb {
        let (r, g, b, _) = self.pixel(x, y);
        (r, g, b)
    }

    /// Rec.601 integer luminance, matching the classic 8-bit grayscale
    /// conversion (299/587/114).
    ///
    /// # Example
    /// ```
    /// use ita_core::frame::FrameBuffer;
    /// let mut fb = FrameBuffer::new(1, 1);
    /// fb.data[0] = 255; fb.data[1] = 255; fb.data[2] = 255; fb.data[3] = 255;
    /// assert_eq!(fb.luminance(0, 0), 255);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn luminance(&self, x: u32, y: u32) -> u8 {
        let (r, g, b, _) = self.pixel(x, y);
        ((u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000) as u8
    }
}

/// One rendered grid position: a glyph pair plus an optional color.
///
/// The standard ramp path stores the same character twice; the
/// custom-character path stores two independently advanced cycle characters.
/// `fg == None` means monochrome — consumers emit plain text.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    /// Characters for this cell, one per output column.
    pub glyphs: [char; GLYPH_ASPECT],
    /// Foreground color, if a color directive was requested.
    pub fg: Option<Rgb>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyphs: [' '; GLYPH_ASPECT],
            fg: None,
        }
    }
}

/// Rendered output grid. Row-major, one `Cell` per sampled pixel.
///
/// Ephemeral: built by one render call, consumed by one sink.
///
/// # Example
/// ```
/// use ita_core::frame::{Cell, Grid};
/// let mut grid = Grid::new(2, 1);
/// grid.set(0, 0, Cell { glyphs: ['#', '#'], fg: None });
/// assert_eq!(grid.get(0, 0).glyphs, ['#', '#']);
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    /// Flat array of cells, row-major.
    pub cells: Vec<Cell>,
    /// Width in sampled pixels (character width is `GLYPH_ASPECT ×` this).
    pub width: u32,
    /// Height in rows.
    pub height: u32,
}

impl Grid {
    /// Create a grid of default (blank, colorless) cells.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cells: vec![Cell::default(); width as usize * height as usize],
            width,
            height,
        }
    }

    /// Set the cell at (x, y).
    #[inline(always)]
    pub fn set(&mut self, x: u32, y: u32, cell: Cell) {
        self.cells[(y * self.width + x) as usize] = cell;
    }

    /// Cell reference at (x, y).
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> &Cell {
        &self.cells[(y * self.width + x) as usize]
    }

    /// Serialize for a truecolor terminal. Colored cells are wrapped in an
    /// escape-glyphs-reset triple; colorless cells are emitted bare. Rows are
    /// newline-terminated.
    #[must_use]
    pub fn to_ansi(&self) -> String {
        // Escape + reset cost ~24 bytes per colored cell.
        let mut out =
            String::with_capacity(self.cells.len() * (GLYPH_ASPECT + 24) + self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = self.get(x, y);
                match cell.fg {
                    Some(rgb) => {
                        let mut glyphs = String::with_capacity(GLYPH_ASPECT * 4);
                        glyphs.extend(cell.glyphs);
                        out.push_str(&ansi_truecolor(&glyphs, rgb));
                    }
                    None => out.extend(cell.glyphs),
                }
            }
            out.push('\n');
        }
        out
    }

    /// Serialize as plain text: glyphs only, never any color directive,
    /// newline-terminated rows.
    #[must_use]
    pub fn to_plain(&self) -> String {
        let mut out =
            String::with_capacity(self.cells.len() * GLYPH_ASPECT + self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                out.extend(self.get(x, y).glyphs);
            }
            out.push('\n');
        }
        out
    }
}
