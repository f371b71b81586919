use std::path::PathBuf;

use clap::Parser;

/// imgtoascii — convert raster images into ASCII art.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path of the source image (PNG, JPEG, BMP, GIF — first frame).
    pub path: PathBuf,

    /// Columns (character width) of the output.
    #[arg(long, default_value_t = 120)]
    pub cols: u32,

    /// Use the block-density ramp instead of letters and symbols.
    #[arg(long, default_value_t = false)]
    pub fill: bool,

    /// Emit truecolor characters instead of monochrome.
    #[arg(long, default_value_t = false)]
    pub color: bool,

    /// Characters to cycle through instead of the grayscale ramp
    /// (terminal output only). Must not be empty.
    #[arg(long)]
    pub chars: Option<String>,

    /// Write the result to this file instead of the terminal.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Save the result as a bitmap image. Requires --output.
    #[arg(long, default_value_t = false, requires = "output")]
    pub png: bool,

    /// Monospace font used when rendering a bitmap.
    #[arg(long, default_value = "fonts/FiraMono-Regular.ttf")]
    pub font: PathBuf,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
