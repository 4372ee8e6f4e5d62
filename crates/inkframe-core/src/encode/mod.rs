//! Output encoding for the e-paper panel.
//!
//! This module provides functionality for:
//! - Packing 8-bit grayscale into two 4-bit samples per byte
//! - Framing packed data with the little-endian width/height header the
//!   panel firmware reads before streaming into its framebuffer
//!
//! The byte layout matches the panel driver's framebuffer: within a byte
//! the earlier (even-x) pixel occupies bits 0-3 and the later (odd-x)
//! pixel bits 4-7. Each row starts on a fresh byte.

mod frame;
mod pack;

pub use frame::{decode_frame, encode_frame, FrameError, HEADER_LEN};
pub use pack::{pack, packed_len, row_stride, PackedImage};
