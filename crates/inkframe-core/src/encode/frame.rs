//! Wire framing: `u32` LE width, `u32` LE height, then the packed payload.

use thiserror::Error;

use super::pack::{packed_len, PackedImage};

/// Length of the width/height header in bytes.
pub const HEADER_LEN: usize = 8;

/// Errors that can occur while reading a frame.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    /// Fewer bytes than the header needs.
    #[error("Frame too short: {0} bytes, header needs 8")]
    TruncatedHeader(usize),

    /// Payload length disagrees with the header dimensions.
    #[error("Payload size mismatch for {width}x{height}: expected {expected} bytes, got {actual}")]
    PayloadSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Prefix the packed payload with its little-endian dimensions.
pub fn encode_frame(image: &PackedImage) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + image.data.len());
    out.extend_from_slice(&image.width.to_le_bytes());
    out.extend_from_slice(&image.height.to_le_bytes());
    out.extend_from_slice(&image.data);
    out
}

/// Parse a frame back into a packed image, checking the payload size.
pub fn decode_frame(bytes: &[u8]) -> Result<PackedImage, FrameError> {
    let (header, payload) = bytes
        .split_first_chunk::<HEADER_LEN>()
        .ok_or(FrameError::TruncatedHeader(bytes.len()))?;

    let width = u32::from_le_bytes([header[0], header[1], header[2], header[3]]);
    let height = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);

    let expected = packed_len(width, height);
    if payload.len() != expected {
        return Err(FrameError::PayloadSize {
            width,
            height,
            expected,
            actual: payload.len(),
        });
    }

    Ok(PackedImage {
        width,
        height,
        data: payload.to_vec(),
    })
}
