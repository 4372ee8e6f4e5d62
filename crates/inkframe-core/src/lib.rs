//! Inkframe Core - grayscale e-paper image codec
//!
//! This crate turns arbitrary bitmaps into the packed 4-bit format the
//! e-paper panel controller streams into its framebuffer: resize, tone
//! analysis, automatic gamma/contrast/brightness, error-diffusion
//! dithering and two-pixels-per-byte packing behind a little-endian
//! width/height header.
//!
//! ```ignore
//! use inkframe_core::{convert, encode_frame, GrayBitmap};
//!
//! let art = GrayBitmap::filled(640, 640, 128);
//! let packed = convert(&art, 300, 300, 16)?;
//! let body = encode_frame(&packed);
//! ```

pub mod adjustments;
pub mod decode;
pub mod dither;
pub mod encode;
pub mod error;
pub mod histogram;
pub mod luminance;
pub mod pipeline;
pub mod transform;

pub use adjustments::{apply_adjustments, AdjustmentParams};
pub use decode::{decode_gray, decode_image, DecodeError, DecodedImage, FilterType, GrayBitmap};
pub use dither::{dither, DitherKernel, DEFAULT_LEVELS};
pub use encode::{decode_frame, encode_frame, pack, packed_len, FrameError, PackedImage};
pub use error::ConvertError;
pub use histogram::{analyze, compute_histogram, LuminanceHistogram, ToneStatistics};
pub use pipeline::{convert, convert_bytes, convert_with_options, ConvertOptions};
pub use transform::{apply_rotation, Rotation};
