/// Shared types for imgtoascii.
///
/// This crate contains the error type, glyph ramps, color handling, and the
/// pixel-buffer/grid structures used across the workspace.

pub mod charset;
pub mod color;
pub mod error;
pub mod frame;

pub use charset::LuminanceRamp;
pub use color::ColorMode;
pub use error::ConvertError;
pub use frame::{Cell, FrameBuffer, GLYPH_ASPECT, Grid};
