/// Bitmap export for imgtoascii.
///
/// Software glyph rasterization via ab_glyph plus persistence through the
/// `image` crate.

pub mod bitmap;
pub mod rasterizer;

pub use bitmap::save_bitmap;
pub use rasterizer::{CELL_HEIGHT, CELL_WIDTH, Rasterizer, bitmap_dimensions};
