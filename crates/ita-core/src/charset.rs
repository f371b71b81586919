/// 10 characters — sparse-to-dense ASCII ramp.
pub const CHARSET_ASCII: &str = " .:-=+*#%@";

/// 4 characters — Unicode block-density ramp ("fill" mode).
pub const CHARSET_BLOCKS: &str = "░▒▓█";

/// Lookup table mapping luminance [0..255] → character.
///
/// Pre-computed once per render for O(1) per-pixel cost.
/// Bucket index is `luma * (len - 1) / 255` with integer division, so
/// luminance 0 always maps to the first entry and 255 to the last.
///
/// # Example
/// ```
/// use ita_core::charset::LuminanceRamp;
/// let ramp = LuminanceRamp::new(" .:#@");
/// assert_eq!(ramp.map(0), ' ');
/// assert_eq!(ramp.map(255), '@');
/// ```
pub struct LuminanceRamp {
    lut: [char; 256],
}

impl LuminanceRamp {
    /// Build a LUT from a ramp ordered lightest→densest. Length must be ≥ 1;
    /// an empty ramp falls back to the built-in ASCII ramp.
    ///
    /// # Example
    /// ```
    /// use ita_core::charset::{LuminanceRamp, CHARSET_BLOCKS};
    /// let ramp = LuminanceRamp::new(CHARSET_BLOCKS);
    /// assert_eq!(ramp.map(0), '░');
    /// assert_eq!(ramp.map(255), '█');
    /// ```
    #[must_use]
    pub fn new(ramp: &str) -> Self {
        let chars: Vec<char> = ramp.chars().collect();
        if chars.is_empty() {
            return Self::new(CHARSET_ASCII);
        }
        let len = chars.len();
        let mut lut = [' '; 256];
        for (i, slot) in lut.iter_mut().enumerate() {
            *slot = chars[i * (len - 1) / 255];
        }
        Self { lut }
    }

    /// Map a luminance value [0..255] to a character.
    ///
    /// # Example
    /// ```
    /// use ita_core::charset::LuminanceRamp;
    /// let ramp = LuminanceRamp::new(" .:#@");
    /// assert_eq!(ramp.map(128), ':');
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn map(&self, luminance: u8) -> char {
        self.lut[luminance as usize]
    }
}
