use std::collections::HashMap;
use std::path::Path;

use ab_glyph::{Font, FontVec, PxScale, point};
use ita_core::error::ConvertError;
use ita_core::frame::{FrameBuffer, GLYPH_ASPECT, Grid};

/// Pixel width of one character slot in the output bitmap.
pub const CELL_WIDTH: u32 = 12;
/// Pixel height of one character slot in the output bitmap.
pub const CELL_HEIGHT: u32 = 12;

/// Bitmap dimensions produced for a given grid: each sampled pixel occupies
/// `GLYPH_ASPECT` character slots of `CELL_WIDTH × CELL_HEIGHT` pixels.
///
/// # Example
/// ```
/// use ita_export::rasterizer::bitmap_dimensions;
/// assert_eq!(bitmap_dimensions(60, 30), (60 * 2 * 12, 30 * 12));
/// ```
#[must_use]
pub fn bitmap_dimensions(grid_w: u32, grid_h: u32) -> (u32, u32) {
    (
        grid_w * GLYPH_ASPECT as u32 * CELL_WIDTH,
        grid_h * CELL_HEIGHT,
    )
}

/// Draws a glyph grid into an RGBA bitmap using a monospace font.
///
/// All needed glyphs are rasterized once into an alpha-buffer cache at
/// construction; the per-cell loop only blends. The cell size is fixed at
/// 12×12 px (not configurable in the base design).
#[derive(Debug)]
pub struct Rasterizer {
    /// Maps a char to its alpha buffer (size = CELL_WIDTH × CELL_HEIGHT).
    glyph_cache: HashMap<char, Vec<u8>>,
    /// Fallback for uncached glyphs (all zeros).
    empty_glyph: Vec<u8>,
}

impl Rasterizer {
    /// Load a TTF from disk and pre-cache printable ASCII plus the Unicode
    /// block-element range (the two built-in ramps).
    ///
    /// # Errors
    /// `FontLoad` if the file cannot be read or is not a parseable font.
    /// Fatal for the bitmap path only.
    pub fn from_font_file(path: &Path) -> Result<Self, ConvertError> {
        let data = std::fs::read(path).map_err(|e| {
            log::debug!("font read failed for {}: {e}", path.display());
            ConvertError::FontLoad {
                path: path.display().to_string(),
            }
        })?;
        let font = FontVec::try_from_vec(data).map_err(|_| ConvertError::FontLoad {
            path: path.display().to_string(),
        })?;
        let scale = PxScale::from(CELL_HEIGHT as f32);

        let mut rasterizer = Self {
            glyph_cache: HashMap::new(),
            empty_glyph: vec![0u8; (CELL_WIDTH * CELL_HEIGHT) as usize],
        };
        rasterizer.cache_charset(&font, scale, 32..=126);
        rasterizer.cache_charset(&font, scale, 0x2580..=0x259F);
        Ok(rasterizer)
    }

    fn cache_charset(
        &mut self,
        font: &FontVec,
        scale: PxScale,
        range: std::ops::RangeInclusive<u32>,
    ) {
        for codepoint in range {
            if let Some(ch) = std::char::from_u32(codepoint) {
                // Skip characters the font lacks (glyph_id 0 = .notdef) so a
                // sparse font degrades to blank cells rather than "?" boxes.
                let gid = font.glyph_id(ch);
                if gid.0 == 0 {
                    continue;
                }

                let mut buffer = vec![0u8; (CELL_WIDTH * CELL_HEIGHT) as usize];
                let ascent_px = font.ascent_unscaled() * scale.y / font.height_unscaled();
                let glyph = gid.with_scale_and_position(scale, point(0.0, ascent_px));

                if let Some(outline) = font.outline_glyph(glyph) {
                    let bounds = outline.px_bounds();
                    #[allow(clippy::cast_possible_wrap)]
                    outline.draw(|x, y, v| {
                        let px = (x as i32 + bounds.min.x as i32).max(0) as u32;
                        let py = (y as i32 + bounds.min.y as i32).max(0) as u32;
                        if px < CELL_WIDTH && py < CELL_HEIGHT {
                            let idx = (py * CELL_WIDTH + px) as usize;
                            if idx < buffer.len() {
                                buffer[idx] = (v * 255.0).round() as u8;
                            }
                        }
                    });
                }
                self.glyph_cache.insert(ch, buffer);
            }
        }
    }

    /// Rasterize a grid onto a fresh bitmap, background black.
    ///
    /// Each cell's glyphs are drawn in their own character slots, filled with
    /// the cell's color (white for a colorless grid).
    #[must_use]
    pub fn render(&self, grid: &Grid) -> FrameBuffer {
        let (width, height) = bitmap_dimensions(grid.width, grid.height);
        let mut fb = FrameBuffer::new(width, height);
        // Opaque black background.
        for px in fb.data.chunks_exact_mut(4) {
            px[3] = 255;
        }

        for gy in 0..grid.height {
            for gx in 0..grid.width {
                let cell = grid.get(gx, gy);
                let (r, g, b) = cell.fg.unwrap_or((255, 255, 255));
                let y0 = gy * CELL_HEIGHT;

                for (k, ch) in cell.glyphs.iter().enumerate() {
                    let alpha = self.glyph_cache.get(ch).unwrap_or(&self.empty_glyph);
                    let x0 = (gx * GLYPH_ASPECT as u32 + k as u32) * CELL_WIDTH;

                    for cy in 0..CELL_HEIGHT {
                        for cx in 0..CELL_WIDTH {
                            let a = f32::from(alpha[(cy * CELL_WIDTH + cx) as usize]) / 255.0;
                            let idx = (((y0 + cy) * width + x0 + cx) * 4) as usize;
                            fb.data[idx] = (f32::from(r) * a) as u8;
                            fb.data[idx + 1] = (f32::from(g) * a) as u8;
                            fb.data[idx + 2] = (f32::from(b) * a) as u8;
                        }
                    }
                }
            }
        }
        fb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ita_core::frame::Cell;

    #[test]
    fn missing_font_is_font_load_error() {
        let err = Rasterizer::from_font_file(Path::new("/nonexistent/font.ttf")).unwrap_err();
        assert!(matches!(err, ConvertError::FontLoad { .. }));
    }

    #[test]
    fn invalid_font_bytes_are_font_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bogus.ttf");
        std::fs::write(&path, b"not a font").unwrap();
        let err = Rasterizer::from_font_file(&path).unwrap_err();
        assert!(matches!(err, ConvertError::FontLoad { .. }));
    }

    #[test]
    fn bitmap_dimensions_double_per_glyph_aspect() {
        assert_eq!(bitmap_dimensions(1, 1), (24, 12));
        assert_eq!(bitmap_dimensions(60, 30), (1440, 360));
    }

    #[test]
    fn render_allocates_black_opaque_canvas() {
        // A rasterizer with an empty cache draws every glyph as blank, which
        // exercises the canvas geometry alone.
        let rasterizer = Rasterizer {
            glyph_cache: HashMap::new(),
            empty_glyph: vec![0u8; (CELL_WIDTH * CELL_HEIGHT) as usize],
        };
        let mut grid = Grid::new(2, 1);
        grid.set(0, 0, Cell { glyphs: ['#', '#'], fg: Some((255, 0, 0)) });
        let fb = rasterizer.render(&grid);
        assert_eq!((fb.width, fb.height), bitmap_dimensions(2, 1));
        for px in fb.data.chunks_exact(4) {
            assert_eq!(px, [0, 0, 0, 255]);
        }
    }
}
