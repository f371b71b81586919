use ita_core::charset::{CHARSET_ASCII, CHARSET_BLOCKS, LuminanceRamp};
use ita_core::color::ColorMode;
use ita_core::error::ConvertError;
use ita_core::frame::{Cell, FrameBuffer, GLYPH_ASPECT, Grid};
use ita_source::resize::{WidthLimit, grid_dimensions, resize_nearest};

/// Glyph selection strategy for a render.
#[derive(Clone, Debug)]
pub enum GlyphMode {
    /// Luminance ramp: block-density when `filled`, else the ASCII ramp.
    /// The chosen character fills both cell columns.
    Ramp {
        /// Use the block-density ramp instead of the ASCII ramp.
        filled: bool,
    },
    /// Round-robin over a caller-supplied character cycle: one continuous
    /// glyph stream across the whole render, two glyphs per sampled pixel.
    Cycle(String),
}

/// Round-robin cursor over a character cycle.
///
/// One cursor is scoped to one render call and never resets: it advances
/// across pixels and rows alike, wrapping modulo the cycle length.
///
/// # Example
/// ```
/// use ita_render::renderer::CharCycle;
/// let mut cycle = CharCycle::new("AB").unwrap();
/// assert_eq!(cycle.next_glyph(), 'A');
/// assert_eq!(cycle.next_glyph(), 'B');
/// assert_eq!(cycle.next_glyph(), 'A');
/// ```
pub struct CharCycle {
    glyphs: Vec<char>,
    cursor: usize,
}

impl CharCycle {
    /// Build a cursor over `chars`.
    ///
    /// # Errors
    /// `EmptyCharset` when `chars` is empty.
    pub fn new(chars: &str) -> Result<Self, ConvertError> {
        let glyphs: Vec<char> = chars.chars().collect();
        if glyphs.is_empty() {
            return Err(ConvertError::EmptyCharset);
        }
        Ok(Self { glyphs, cursor: 0 })
    }

    /// Next glyph in the cycle, advancing the shared cursor.
    #[inline]
    pub fn next_glyph(&mut self) -> char {
        let ch = self.glyphs[self.cursor];
        self.cursor = (self.cursor + 1) % self.glyphs.len();
        ch
    }
}

/// Render an image into a glyph grid.
///
/// Resamples `frame` to the dimensions derived from `cols` and `limit`
/// (nearest-neighbor), then maps every sampled pixel to one [`Cell`]. The
/// resulting grid always satisfies `width ≥ 1`, `height ≥ 1`, and a row
/// character count of `GLYPH_ASPECT × width`.
///
/// # Errors
/// `InvalidDimension` for a zero column request or zero-sized source;
/// `EmptyCharset` for an empty `GlyphMode::Cycle`.
///
/// # Example
/// ```
/// use ita_core::ColorMode;
/// use ita_core::frame::FrameBuffer;
/// use ita_render::renderer::{GlyphMode, render};
/// use ita_source::resize::WidthLimit;
///
/// let frame = FrameBuffer::new(8, 4);
/// let grid = render(
///     &frame,
///     8,
///     WidthLimit::Native,
///     &GlyphMode::Ramp { filled: false },
///     ColorMode::Mono,
/// )
/// .unwrap();
/// assert_eq!((grid.width, grid.height), (4, 2));
/// ```
pub fn render(
    frame: &FrameBuffer,
    cols: u32,
    limit: WidthLimit,
    mode: &GlyphMode,
    color: ColorMode,
) -> Result<Grid, ConvertError> {
    let (width, height) = grid_dimensions(frame.width, frame.height, cols, limit)?;
    let sampled = resize_nearest(frame, width, height)?;
    log::debug!("rendering {width}×{height} grid ({mode:?}, {color:?})");

    let mut grid = Grid::new(width, height);
    match mode {
        GlyphMode::Ramp { filled } => {
            let ramp = LuminanceRamp::new(if *filled { CHARSET_BLOCKS } else { CHARSET_ASCII });
            for y in 0..height {
                for x in 0..width {
                    let luma = sampled.luminance(x, y);
                    let ch = ramp.map(luma);
                    grid.set(
                        x,
                        y,
                        Cell {
                            glyphs: [ch; GLYPH_ASPECT],
                            fg: color.paint(sampled.rgb(x, y), luma),
                        },
                    );
                }
            }
        }
        GlyphMode::Cycle(chars) => {
            let mut cycle = CharCycle::new(chars)?;
            for y in 0..height {
                for x in 0..width {
                    let luma = sampled.luminance(x, y);
                    // Both columns advance the cursor independently but share
                    // the pixel's single color sample.
                    let mut glyphs = [' '; GLYPH_ASPECT];
                    for slot in &mut glyphs {
                        *slot = cycle.next_glyph();
                    }
                    grid.set(
                        x,
                        y,
                        Cell {
                            glyphs,
                            fg: color.paint(sampled.rgb(x, y), luma),
                        },
                    );
                }
            }
        }
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> FrameBuffer {
        let mut fb = FrameBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let v = (x * 255 / width.max(1)) as u8;
                let idx = ((y * width + x) * 4) as usize;
                fb.data[idx] = v;
                fb.data[idx + 1] = v;
                fb.data[idx + 2] = v;
                fb.data[idx + 3] = 255;
            }
        }
        fb
    }

    #[test]
    fn standard_grid_dimensions_and_row_length() {
        let frame = gradient(8, 4);
        let grid = render(
            &frame,
            8,
            WidthLimit::Native,
            &GlyphMode::Ramp { filled: false },
            ColorMode::Mono,
        )
        .unwrap();
        assert_eq!((grid.width, grid.height), (4, 2));
        for line in grid.to_plain().lines() {
            assert_eq!(line.chars().count(), GLYPH_ASPECT * 4);
        }
    }

    #[test]
    fn ramp_cells_double_one_glyph() {
        let frame = gradient(4, 2);
        let grid = render(
            &frame,
            4,
            WidthLimit::Native,
            &GlyphMode::Ramp { filled: true },
            ColorMode::Mono,
        )
        .unwrap();
        for cell in &grid.cells {
            assert_eq!(cell.glyphs[0], cell.glyphs[1]);
            assert!("░▒▓█".contains(cell.glyphs[0]));
        }
    }

    #[test]
    fn mono_cells_carry_no_color() {
        let frame = gradient(4, 2);
        let grid = render(
            &frame,
            4,
            WidthLimit::Native,
            &GlyphMode::Ramp { filled: false },
            ColorMode::Mono,
        )
        .unwrap();
        assert!(grid.cells.iter().all(|c| c.fg.is_none()));
    }

    #[test]
    fn grayscale_cells_broadcast_luminance() {
        let frame = gradient(4, 2);
        let grid = render(
            &frame,
            4,
            WidthLimit::Native,
            &GlyphMode::Ramp { filled: false },
            ColorMode::Grayscale,
        )
        .unwrap();
        for cell in &grid.cells {
            let (r, g, b) = cell.fg.unwrap();
            assert_eq!(r, g);
            assert_eq!(g, b);
        }
    }

    #[test]
    fn cycle_emits_continuous_stream() {
        // 6×1 source at 6 cols → 3 sampled pixels → 6 glyphs: A,B,A,B,A,B.
        let frame = gradient(6, 1);
        let grid = render(
            &frame,
            6,
            WidthLimit::Native,
            &GlyphMode::Cycle("AB".into()),
            ColorMode::Grayscale,
        )
        .unwrap();
        let glyphs: Vec<char> = grid.cells.iter().flat_map(|c| c.glyphs).collect();
        assert_eq!(glyphs, vec!['A', 'B', 'A', 'B', 'A', 'B']);
    }

    #[test]
    fn cycle_cursor_never_resets_across_rows() {
        // 2×2 grid, 3-char cycle: 8 glyphs wrap without a per-row reset.
        let frame = gradient(4, 4);
        let grid = render(
            &frame,
            4,
            WidthLimit::Native,
            &GlyphMode::Cycle("ABC".into()),
            ColorMode::Grayscale,
        )
        .unwrap();
        let glyphs: Vec<char> = grid.cells.iter().flat_map(|c| c.glyphs).collect();
        assert_eq!(glyphs, vec!['A', 'B', 'C', 'A', 'B', 'C', 'A', 'B']);
    }

    #[test]
    fn cycle_glyph_pair_shares_one_color_sample() {
        let frame = gradient(6, 1);
        let grid = render(
            &frame,
            6,
            WidthLimit::Native,
            &GlyphMode::Cycle("AB".into()),
            ColorMode::Truecolor,
        )
        .unwrap();
        assert!(grid.cells.iter().all(|c| c.fg.is_some()));
    }

    #[test]
    fn empty_cycle_is_rejected() {
        let frame = gradient(4, 2);
        let err = render(
            &frame,
            4,
            WidthLimit::Native,
            &GlyphMode::Cycle(String::new()),
            ColorMode::Mono,
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::EmptyCharset));
    }

    #[test]
    fn repeated_renders_are_byte_identical() {
        let frame = gradient(16, 8);
        let mode = GlyphMode::Ramp { filled: false };
        let a = render(&frame, 16, WidthLimit::Native, &mode, ColorMode::Mono).unwrap();
        let b = render(&frame, 16, WidthLimit::Native, &mode, ColorMode::Mono).unwrap();
        assert_eq!(a.to_plain(), b.to_plain());
        assert_eq!(a.to_ansi(), b.to_ansi());
    }

    #[test]
    fn display_clamp_applies_to_terminal_renders() {
        let frame = gradient(100, 50);
        let grid = render(
            &frame,
            100,
            WidthLimit::Display(40),
            &GlyphMode::Ramp { filled: false },
            ColorMode::Mono,
        )
        .unwrap();
        assert_eq!(grid.width, 20);
    }
}
