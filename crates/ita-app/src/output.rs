use std::path::{Path, PathBuf};

use ita_core::color::ColorMode;
use ita_core::error::ConvertError;
use ita_core::frame::FrameBuffer;
use ita_export::{Rasterizer, save_bitmap};
use ita_render::{GlyphMode, render};
use ita_source::{WidthLimit, load_image};

use crate::cli::Cli;

/// Where one invocation materializes its result. Selected once at the CLI
/// boundary and passed as a single value, instead of re-inspecting flag
/// combinations inside the pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputMode {
    /// Render to stdout, fitted to the current terminal width.
    Terminal,
    /// Render to a plain-text file (never any color directive).
    TextFile(PathBuf),
    /// Rasterize to a bitmap image.
    Bitmap(PathBuf),
}

impl OutputMode {
    /// Resolve the sink from the parsed flags. `--png` wins over plain
    /// `--output`; neither means the terminal.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        match (&cli.output, cli.png) {
            (Some(path), true) => Self::Bitmap(path.clone()),
            (Some(path), false) => Self::TextFile(path.clone()),
            (None, _) => Self::Terminal,
        }
    }
}

/// Run one full conversion: decode once, render, materialize.
///
/// # Errors
/// Any `ConvertError` from the pipeline, surfaced unchanged.
pub fn run(cli: &Cli) -> Result<(), ConvertError> {
    // An empty cycle string is an input error regardless of sink.
    if cli.chars.as_deref() == Some("") {
        return Err(ConvertError::EmptyCharset);
    }

    let frame = load_image(&cli.path)?;
    match OutputMode::from_cli(cli) {
        OutputMode::Terminal => to_terminal(cli, &frame),
        OutputMode::TextFile(path) => to_file(cli, &frame, &path),
        OutputMode::Bitmap(path) => to_bitmap(cli, &frame, &path),
    }
}

/// Current terminal width in columns, 80 when the query fails (e.g. when
/// stdout is not a tty).
fn display_width() -> u16 {
    crossterm::terminal::size().map_or(80, |(w, _)| w)
}

fn to_terminal(cli: &Cli, frame: &FrameBuffer) -> Result<(), ConvertError> {
    let mode = match &cli.chars {
        Some(chars) => GlyphMode::Cycle(chars.clone()),
        None => GlyphMode::Ramp { filled: cli.fill },
    };
    // The cycle path always paints its glyphs, grayscale when color is off.
    let color = match (&cli.chars, cli.color) {
        (_, true) => ColorMode::Truecolor,
        (Some(_), false) => ColorMode::Grayscale,
        (None, false) => ColorMode::Mono,
    };
    let grid = render(
        frame,
        cli.cols,
        WidthLimit::Display(display_width()),
        &mode,
        color,
    )?;
    println!("{}", grid.to_ansi());
    Ok(())
}

fn to_file(cli: &Cli, frame: &FrameBuffer, path: &Path) -> Result<(), ConvertError> {
    let grid = render(
        frame,
        cli.cols,
        WidthLimit::Native,
        &GlyphMode::Ramp { filled: cli.fill },
        ColorMode::Mono,
    )?;
    // The whole buffer is rendered before the write begins.
    std::fs::write(path, grid.to_plain()).map_err(|e| ConvertError::WriteFailure {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    log::info!("wrote text file {}", path.display());
    Ok(())
}

fn to_bitmap(cli: &Cli, frame: &FrameBuffer, path: &Path) -> Result<(), ConvertError> {
    let color = if cli.color {
        ColorMode::Truecolor
    } else {
        ColorMode::Grayscale
    };
    let grid = render(
        frame,
        cli.cols,
        WidthLimit::Native,
        &GlyphMode::Ramp { filled: cli.fill },
        color,
    )?;
    let rasterizer = Rasterizer::from_font_file(&cli.font)?;
    save_bitmap(&rasterizer.render(&grid), path)
}
