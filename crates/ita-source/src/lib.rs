/// Image acquisition and resampling for imgtoascii.
///
/// Decoding goes through the `image` crate; downsampling is strictly
/// nearest-neighbor via `fast_image_resize`.

pub mod image;
pub mod resize;

pub use image::load_image;
pub use resize::{WidthLimit, grid_dimensions, resize_nearest};
