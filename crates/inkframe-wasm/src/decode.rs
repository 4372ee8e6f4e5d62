//! Image decoding WASM bindings.
//!
//! # Functions
//!
//! - [`decode_gray`] - Decode PNG/JPEG bytes to a grayscale image
//! - [`resize`] - Resize to exact dimensions
//! - [`resize_to_fit`] - Shrink into a bounding box, preserving aspect ratio
//!
//! Filter codes: 0 = Nearest, 1 = Bilinear, anything else = Lanczos3.

use crate::types::JsGrayImage;
use inkframe_core::decode;
use inkframe_core::FilterType;
use wasm_bindgen::prelude::*;

/// Decode PNG or JPEG bytes to a grayscale image.
///
/// EXIF orientation is applied and color is reduced with BT.601 luma weights.
///
/// # Example
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const gray = decode_gray(bytes);
/// ```
#[wasm_bindgen]
pub fn decode_gray(bytes: &[u8]) -> Result<JsGrayImage, JsValue> {
    decode::decode_gray(bytes)
        .map(JsGrayImage::from_bitmap)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resize an image to exact dimensions, ignoring aspect ratio.
#[wasm_bindgen]
pub fn resize(
    image: &JsGrayImage,
    width: u32,
    height: u32,
    filter: u8,
) -> Result<JsGrayImage, JsValue> {
    let bitmap = image.to_bitmap().map_err(|e| JsValue::from_str(&e))?;
    decode::resize(&bitmap, width, height, FilterType::from(filter))
        .map(JsGrayImage::from_bitmap)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Shrink an image to fit within `max_width` x `max_height`.
///
/// Images that already fit are returned unchanged (no upscaling).
#[wasm_bindgen]
pub fn resize_to_fit(
    image: &JsGrayImage,
    max_width: u32,
    max_height: u32,
    filter: u8,
) -> Result<JsGrayImage, JsValue> {
    let bitmap = image.to_bitmap().map_err(|e| JsValue::from_str(&e))?;
    decode::resize_to_fit(&bitmap, max_width, max_height, FilterType::from(filter))
        .map(JsGrayImage::from_bitmap)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
