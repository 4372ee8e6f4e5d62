//! The conversion pipeline: rotate, resize, analyze, adjust, dither, pack.
//!
//! Every stage is pure and works on an owned buffer, so independent
//! conversions can run concurrently without sharing anything. There is no
//! internal cancellation point; callers that need a deadline impose it
//! from outside.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::adjustments::{apply_adjustments, AdjustmentParams};
use crate::decode::{self, FilterType, GrayBitmap};
use crate::dither::{dither, DitherKernel, DEFAULT_LEVELS};
use crate::encode::{pack, PackedImage};
use crate::error::ConvertError;
use crate::histogram::analyze;
use crate::transform::{apply_rotation, Rotation};

/// Native width of the panel.
pub const PANEL_WIDTH: u32 = 1200;

/// Native height of the panel.
pub const PANEL_HEIGHT: u32 = 826;

/// Conversion settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Target width in pixels (odd widths are allowed).
    pub width: u32,
    /// Target height in pixels.
    pub height: u32,
    /// Gray levels in the output palette (2-256).
    pub levels: u32,
    pub kernel: DitherKernel,
    pub filter: FilterType,
    /// Rotation applied to the source before resizing.
    pub rotation: Rotation,
    /// Shrink to fit inside `width` x `height` keeping aspect ratio,
    /// instead of stretching to exactly that size.
    pub fit: bool,
    /// Run tone analysis and adjustment. Icons skip it.
    pub process_image: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            width: PANEL_WIDTH,
            height: PANEL_HEIGHT,
            levels: DEFAULT_LEVELS,
            kernel: DitherKernel::default(),
            filter: FilterType::default(),
            rotation: Rotation::default(),
            fit: false,
            process_image: true,
        }
    }
}

impl ConvertOptions {
    /// Options for a given target size, everything else default.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), ConvertError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConvertError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        if !(2..=256).contains(&self.levels) {
            return Err(ConvertError::InvalidLevels(self.levels));
        }
        Ok(())
    }
}

/// Convert a bitmap for the panel with the production settings.
///
/// # Errors
///
/// Returns `ConvertError::InvalidDimension` if either target dimension is
/// zero and `ConvertError::InvalidLevels` if `num_levels` is outside 2..=256.
/// Both are checked before any processing.
pub fn convert(
    image: &GrayBitmap,
    target_width: u32,
    target_height: u32,
    num_levels: u32,
) -> Result<PackedImage, ConvertError> {
    let options = ConvertOptions {
        levels: num_levels,
        ..ConvertOptions::with_size(target_width, target_height)
    };
    convert_with_options(image, &options)
}

/// Convert a bitmap with explicit options.
pub fn convert_with_options(
    image: &GrayBitmap,
    options: &ConvertOptions,
) -> Result<PackedImage, ConvertError> {
    options.validate()?;

    let rotated = apply_rotation(image, options.rotation);
    let mut working = if options.fit {
        decode::resize_to_fit(&rotated, options.width, options.height, options.filter)?
    } else {
        decode::resize(&rotated, options.width, options.height, options.filter)?
    };

    if options.process_image {
        let stats = analyze(&working);
        let params = AdjustmentParams::derive(&stats);
        apply_adjustments(&mut working, &params);
    }

    let dithered = dither(&working, options.levels, options.kernel)?;
    let packed = pack(&dithered);

    debug!(
        "converted {}x{} -> {}x{} ({} bytes, {} levels)",
        image.width,
        image.height,
        packed.width,
        packed.height,
        packed.data.len(),
        options.levels
    );
    Ok(packed)
}

/// Decode an encoded image (PNG, JPEG) and convert it.
///
/// Options are validated before decoding.
pub fn convert_bytes(bytes: &[u8], options: &ConvertOptions) -> Result<PackedImage, ConvertError> {
    options.validate()?;
    let gray = decode::decode_gray(bytes)?;
    convert_with_options(&gray, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{png_bytes, DecodeError};
    use crate::encode::{encode_frame, packed_len};

    fn ramp(width: u32, height: u32) -> GrayBitmap {
        let pixels = (0..width * height).map(|i| (i % 256) as u8).collect();
        GrayBitmap::from_raw(width, height, pixels).unwrap()
    }

    #[test]
    fn test_default_options() {
        let options = ConvertOptions::default();
        assert_eq!((options.width, options.height), (1200, 826));
        assert_eq!(options.levels, 16);
        assert_eq!(options.kernel, DitherKernel::Sierra);
        assert_eq!(options.filter, FilterType::Lanczos3);
        assert!(options.process_image);
        assert!(!options.fit);
    }

    #[test]
    fn test_white_two_by_two_processed() {
        // Derived brightness for pure white is 0.8, so white lands on 204 (0xC).
        let packed = convert(&GrayBitmap::filled(2, 2, 255), 2, 2, 16).unwrap();
        assert_eq!(packed.data, vec![0xCC, 0xCC]);
    }

    #[test]
    fn test_white_two_by_two_unprocessed_keeps_full_white() {
        let options = ConvertOptions {
            process_image: false,
            ..ConvertOptions::with_size(2, 2)
        };
        let packed = convert_with_options(&GrayBitmap::filled(2, 2, 255), &options).unwrap();
        assert_eq!(packed.data, vec![0xFF, 0xFF]);
    }

    #[test]
    fn test_odd_width_output_length() {
        let packed = convert(&ramp(40, 30), 7, 5, 16).unwrap();
        assert_eq!((packed.width, packed.height), (7, 5));
        assert_eq!(packed.data.len(), 4 * 5);
    }

    #[test]
    fn test_zero_dimension_rejected_first() {
        let img = ramp(4, 4);
        assert!(matches!(
            convert(&img, 0, 10, 16),
            Err(ConvertError::InvalidDimension { width: 0, height: 10 })
        ));
        assert!(matches!(
            convert(&img, 10, 0, 16),
            Err(ConvertError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_invalid_levels_rejected() {
        assert!(matches!(
            convert(&ramp(4, 4), 4, 4, 0),
            Err(ConvertError::InvalidLevels(0))
        ));
    }

    #[test]
    fn test_fit_keeps_aspect() {
        let options = ConvertOptions {
            fit: true,
            ..ConvertOptions::with_size(50, 50)
        };
        let packed = convert_with_options(&ramp(200, 100), &options).unwrap();
        assert_eq!((packed.width, packed.height), (50, 25));
        assert_eq!(packed.data.len(), packed_len(50, 25));
    }

    #[test]
    fn test_rotation_swaps_before_fit() {
        let options = ConvertOptions {
            fit: true,
            rotation: Rotation::CounterClockwise90,
            ..ConvertOptions::with_size(100, 100)
        };
        let packed = convert_with_options(&ramp(100, 50), &options).unwrap();
        assert_eq!((packed.width, packed.height), (50, 100));
    }

    #[test]
    fn test_two_levels_output_is_black_or_white() {
        let options = ConvertOptions {
            levels: 2,
            ..ConvertOptions::with_size(16, 16)
        };
        let packed = convert_with_options(&ramp(16, 16), &options).unwrap();
        assert!(packed.unpack().iter().all(|&n| n == 0 || n == 15));
    }

    #[test]
    fn test_convert_bytes_png() {
        let rgb: Vec<u8> = (0..6 * 4).flat_map(|i| [(i * 10) as u8; 3]).collect();
        let bytes = png_bytes(6, 4, &rgb);
        let packed = convert_bytes(&bytes, &ConvertOptions::with_size(3, 2)).unwrap();
        assert_eq!((packed.width, packed.height), (3, 2));
        assert_eq!(encode_frame(&packed).len(), 8 + 4);
    }

    #[test]
    fn test_convert_bytes_decode_failure() {
        let result = convert_bytes(&[1, 2, 3], &ConvertOptions::default());
        assert!(matches!(
            result,
            Err(ConvertError::Decode(DecodeError::InvalidFormat))
        ));
    }

    #[test]
    fn test_convert_bytes_validates_before_decoding() {
        let options = ConvertOptions::with_size(0, 0);
        assert!(matches!(
            convert_bytes(&[1, 2, 3], &options),
            Err(ConvertError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_deterministic() {
        let img = ramp(33, 21);
        let a = convert(&img, 17, 9, 16).unwrap();
        let b = convert(&img, 17, 9, 16).unwrap();
        assert_eq!(a, b);
    }
}
