/// RGB triple, one byte per channel.
pub type Rgb = (u8, u8, u8);

/// How a rendered cell is painted.
///
/// `Mono` cells carry no color directive at all; `Grayscale` broadcasts the
/// pixel's luminance to all three channels; `Truecolor` keeps the pixel RGB.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    /// No color directive; consumers render plain text.
    Mono,
    /// Luminance broadcast to (v, v, v).
    Grayscale,
    /// Pixel RGB used directly.
    Truecolor,
}

impl ColorMode {
    /// Resolve the color carried by a cell, if any.
    ///
    /// # Example
    /// ```
    /// use ita_core::color::ColorMode;
    /// assert_eq!(ColorMode::Mono.paint((10, 20, 30), 128), None);
    /// assert_eq!(ColorMode::Grayscale.paint((10, 20, 30), 128), Some((128, 128, 128)));
    /// assert_eq!(ColorMode::Truecolor.paint((10, 20, 30), 128), Some((10, 20, 30)));
    /// ```
    #[inline]
    #[must_use]
    pub fn paint(self, rgb: Rgb, luminance: u8) -> Option<Rgb> {
        match self {
            Self::Mono => None,
            Self::Grayscale => Some((luminance, luminance, luminance)),
            Self::Truecolor => Some(rgb),
        }
    }
}

/// Wrap `text` in a truecolor foreground escape, reset immediately after.
///
/// The reset is emitted per call so every cell is independently resettable:
/// output truncated mid-stream never leaks color state.
///
/// # Example
/// ```
/// use ita_core::color::ansi_truecolor;
/// assert_eq!(
///     ansi_truecolor("##", (128, 128, 128)),
///     "\u{1b}[38;2;128;128;128m##\u{1b}[0m"
/// );
/// ```
#[must_use]
pub fn ansi_truecolor(text: &str, (r, g, b): Rgb) -> String {
    format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mono_carries_no_directive() {
        assert_eq!(ColorMode::Mono.paint((255, 0, 0), 0), None);
        assert_eq!(ColorMode::Mono.paint((0, 0, 0), 255), None);
    }

    #[test]
    fn grayscale_broadcasts_luminance() {
        assert_eq!(ColorMode::Grayscale.paint((9, 9, 9), 128), Some((128, 128, 128)));
    }

    #[test]
    fn escape_wraps_and_resets() {
        let s = ansi_truecolor("@@", (1, 2, 3));
        assert!(s.starts_with("\x1b[38;2;1;2;3m"));
        assert!(s.ends_with("\x1b[0m"));
        assert!(s.contains("@@"));
    }
}
