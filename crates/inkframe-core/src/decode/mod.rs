//! Image decoding and resampling for the e-paper codec.
//!
//! This module provides functionality for:
//! - Decoding PNG and JPEG containers with EXIF orientation correction
//! - Reducing RGB images to a single luminance channel
//! - Resampling to the panel's target dimensions
//!
//! Decoding is the collaborator side of the codec: failures here are
//! `DecodeError`s, never codec errors. All operations are synchronous and
//! operate on in-memory buffers.

mod reader;
mod resize;
mod types;

pub use reader::{decode_gray, decode_image};
pub use resize::{resize, resize_to_fit};
pub use types::{DecodeError, DecodedImage, FilterType, GrayBitmap, Orientation};

#[cfg(test)]
pub(crate) use reader::tests::png_bytes;
