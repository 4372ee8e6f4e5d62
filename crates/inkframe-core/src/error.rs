//! Errors raised by the codec stages.

use thiserror::Error;

use crate::decode::DecodeError;

/// Errors that can occur while converting an image for the panel.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Target width or height is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimension { width: u32, height: u32 },

    /// Requested gray level count is outside 2..=256.
    #[error("Invalid level count {0}: must be between 2 and 256")]
    InvalidLevels(u32),

    /// The input could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
