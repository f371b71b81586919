/// Grid rendering for imgtoascii.
///
/// Orchestrates resampling, luminance mapping, and color encoding into a
/// glyph grid. Two paths: the luminance ramp (standard) and the continuous
/// custom-character cycle.

pub mod renderer;

pub use renderer::{CharCycle, GlyphMode, render};
