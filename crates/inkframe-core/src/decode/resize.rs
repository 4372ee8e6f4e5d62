//! Resampling to the panel's target dimensions.
//!
//! All functions return new `GrayBitmap` instances without modifying the input.

use log::trace;

use super::{FilterType, GrayBitmap};
use crate::error::ConvertError;

/// Resize a bitmap to exact dimensions.
///
/// Aspect ratio is not preserved. Odd target widths are allowed; the
/// packing stage deals with the trailing half byte.
///
/// # Errors
///
/// Returns `ConvertError::InvalidDimension` if either target dimension is zero.
pub fn resize(
    image: &GrayBitmap,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<GrayBitmap, ConvertError> {
    if width == 0 || height == 0 {
        return Err(ConvertError::InvalidDimension { width, height });
    }

    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    // An empty source has nothing to sample from.
    if image.is_empty() {
        return Ok(GrayBitmap::filled(width, height, 0));
    }

    let gray = image
        .to_gray_image()
        .ok_or(ConvertError::InvalidDimension {
            width: image.width,
            height: image.height,
        })?;

    trace!(
        "resizing {}x{} -> {}x{} with {:?}",
        image.width,
        image.height,
        width,
        height,
        filter
    );
    let resized = image::imageops::resize(&gray, width, height, filter.to_image_filter());

    Ok(GrayBitmap::from_gray_image(resized))
}

/// Shrink a bitmap to fit within `max_width` x `max_height`, preserving
/// aspect ratio. Bitmaps that already fit are returned unchanged; this
/// never upscales.
///
/// # Errors
///
/// Returns `ConvertError::InvalidDimension` if either bound is zero.
pub fn resize_to_fit(
    image: &GrayBitmap,
    max_width: u32,
    max_height: u32,
    filter: FilterType,
) -> Result<GrayBitmap, ConvertError> {
    if max_width == 0 || max_height == 0 {
        return Err(ConvertError::InvalidDimension {
            width: max_width,
            height: max_height,
        });
    }

    if image.width <= max_width && image.height <= max_height {
        return Ok(image.clone());
    }

    let (width, height) = fit_dimensions(image.width, image.height, max_width, max_height);
    resize(image, width, height, filter)
}

/// Largest size with the source aspect ratio inside the bounding box.
fn fit_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let scale = f64::min(
        max_width as f64 / width as f64,
        max_height as f64 / height as f64,
    );
    let new_width = ((width as f64 * scale).round() as u32).clamp(1, max_width);
    let new_height = ((height as f64 * scale).round() as u32).clamp(1, max_height);
    (new_width, new_height)
}
