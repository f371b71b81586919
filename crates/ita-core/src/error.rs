use thiserror::Error;

/// Errors raised anywhere in the conversion pipeline.
///
/// Every variant is deterministic (bad input, missing resource): none is
/// retried, all propagate unchanged to the top level.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Source image path unreadable or undecodable.
    #[error("image not found or undecodable: {path}")]
    ImageNotFound {
        /// Path that failed to open or decode.
        path: String,
    },

    /// Non-positive requested columns, or zero-sized source image.
    #[error("invalid dimensions: {reason}")]
    InvalidDimension {
        /// Human-readable description of the offending value.
        reason: String,
    },

    /// Custom-character mode invoked with an empty cycle string.
    #[error("character cycle cannot be empty")]
    EmptyCharset,

    /// Font resource missing or unparseable (bitmap path only).
    #[error("failed to load font: {path}")]
    FontLoad {
        /// Path to the font file.
        path: String,
    },

    /// Destination path unwritable.
    #[error("failed to write {path}: {reason}")]
    WriteFailure {
        /// Destination path.
        path: String,
        /// Underlying I/O or encoder message.
        reason: String,
    },
}

impl ConvertError {
    /// Process exit code for this error kind. Distinct per variant.
    ///
    /// # Example
    /// ```
    /// use ita_core::error::ConvertError;
    /// assert_eq!(ConvertError::EmptyCharset.exit_code(), 4);
    /// ```
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ImageNotFound { .. } => 2,
            Self::InvalidDimension { .. } => 3,
            Self::EmptyCharset => 4,
            Self::FontLoad { .. } => 5,
            Self::WriteFailure { .. } => 6,
        }
    }
}
