//! Conversion pipeline WASM bindings.
//!
//! # Functions
//!
//! - [`convert`] - Production pipeline for a target size and level count
//! - [`convert_with_options`] - Pipeline with a `ConvertOptions` object
//! - [`convert_bytes`] - Decode PNG/JPEG bytes and convert
//! - [`dither`] - Dithering alone, for previewing a kernel
//! - [`parse_frame`] - Read a framed payload back
//! - [`default_options`] - The default options object
//!
//! Options objects use camelCase keys and any omitted key takes its default:
//!
//! ```typescript
//! const packed = convert_with_options(gray, {
//!   width: 300,
//!   height: 300,
//!   levels: 16,
//!   kernel: 'sierra',          // or 'floydSteinberg'
//!   filter: 'lanczos3',        // 'nearest' | 'bilinear'
//!   rotation: 'none',          // 'clockwise90' | 'half' | 'counterClockwise90'
//!   fit: false,
//!   processImage: true,        // false for icons
//! });
//! ```

use crate::types::{JsGrayImage, JsPackedImage};
use inkframe_core::{decode_frame, pipeline, ConvertOptions, DitherKernel};
use wasm_bindgen::prelude::*;

fn options_from_js(options: JsValue) -> Result<ConvertOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(ConvertOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))
}

/// Convert a grayscale image with the production settings.
///
/// # Errors
///
/// Returns an error if a target dimension is zero or `levels` is outside 2..=256.
#[wasm_bindgen]
pub fn convert(
    image: &JsGrayImage,
    width: u32,
    height: u32,
    levels: u32,
) -> Result<JsPackedImage, JsValue> {
    let bitmap = image.to_bitmap().map_err(|e| JsValue::from_str(&e))?;
    pipeline::convert(&bitmap, width, height, levels)
        .map(JsPackedImage::from_packed)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert a grayscale image with an options object.
#[wasm_bindgen]
pub fn convert_with_options(
    image: &JsGrayImage,
    options: JsValue,
) -> Result<JsPackedImage, JsValue> {
    let options = options_from_js(options)?;
    let bitmap = image.to_bitmap().map_err(|e| JsValue::from_str(&e))?;
    pipeline::convert_with_options(&bitmap, &options)
        .map(JsPackedImage::from_packed)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Decode PNG or JPEG bytes and convert them.
///
/// # Example
///
/// ```typescript
/// const art = new Uint8Array(await (await fetch(albumArtUrl)).arrayBuffer());
/// const packed = convert_bytes(art, { width: 300, height: 300 });
/// ```
#[wasm_bindgen]
pub fn convert_bytes(bytes: &[u8], options: JsValue) -> Result<JsPackedImage, JsValue> {
    let options = options_from_js(options)?;
    pipeline::convert_bytes(bytes, &options)
        .map(JsPackedImage::from_packed)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Dither without resizing or tone adjustment.
///
/// `kernel`: 0 = Sierra, 1 = Floyd-Steinberg.
#[wasm_bindgen]
pub fn dither(image: &JsGrayImage, levels: u32, kernel: u8) -> Result<JsGrayImage, JsValue> {
    let bitmap = image.to_bitmap().map_err(|e| JsValue::from_str(&e))?;
    inkframe_core::dither(&bitmap, levels, DitherKernel::from(kernel))
        .map(JsGrayImage::from_bitmap)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parse a framed payload (8-byte header + packed data).
#[wasm_bindgen]
pub fn parse_frame(bytes: &[u8]) -> Result<JsPackedImage, JsValue> {
    decode_frame(bytes)
        .map(JsPackedImage::from_packed)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The default options as a plain object.
#[wasm_bindgen]
pub fn default_options() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&ConvertOptions::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Tests for convert bindings.
///
/// Only success paths run natively; error paths build a `JsValue` and
/// live in `wasm_tests`.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_white_square() {
        let img = JsGrayImage::new(2, 2, vec![255u8; 4]);
        let packed = convert(&img, 2, 2, 16).unwrap();
        assert_eq!(packed.data(), vec![0xCC, 0xCC]);
    }

    #[test]
    fn test_convert_odd_width_frame() {
        let img = JsGrayImage::new(8, 8, vec![90u8; 64]);
        let packed = convert(&img, 5, 3, 16).unwrap();
        assert_eq!(packed.data().len(), 3 * 3);
        assert_eq!(packed.encoded_frame().len(), 8 + 9);
    }

    #[test]
    fn test_dither_binding() {
        let img = JsGrayImage::new(3, 1, vec![0, 255, 204]);
        let out = dither(&img, 16, 1).unwrap();
        assert_eq!(out.pixels(), vec![0, 255, 204]);
    }

    #[test]
    fn test_parse_frame_binding() {
        let packed = parse_frame(&[1, 0, 0, 0, 1, 0, 0, 0, 0x0F]).unwrap();
        assert_eq!(packed.width(), 1);
        assert_eq!(packed.unpack(), vec![15]);
    }
}

/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_convert_zero_width() {
        let img = JsGrayImage::new(2, 2, vec![0u8; 4]);
        assert!(convert(&img, 0, 2, 16).is_err());
    }

    #[wasm_bindgen_test]
    fn test_convert_with_partial_options() {
        let img = JsGrayImage::new(4, 4, vec![255u8; 16]);
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"width".into(), &3.into()).unwrap();
        js_sys::Reflect::set(&options, &"height".into(), &1.into()).unwrap();
        js_sys::Reflect::set(&options, &"processImage".into(), &false.into()).unwrap();
        let packed = convert_with_options(&img, options.into()).unwrap();
        assert_eq!(packed.width(), 3);
        assert_eq!(packed.data(), vec![0xFF, 0x0F]);
    }

    #[wasm_bindgen_test]
    fn test_convert_with_undefined_options() {
        let img = JsGrayImage::new(4, 4, vec![128u8; 16]);
        let packed = convert_with_options(&img, JsValue::UNDEFINED).unwrap();
        assert_eq!(packed.width(), 1200);
        assert_eq!(packed.height(), 826);
    }

    #[wasm_bindgen_test]
    fn test_convert_bytes_invalid() {
        assert!(convert_bytes(&[1, 2, 3], JsValue::UNDEFINED).is_err());
    }

    #[wasm_bindgen_test]
    fn test_parse_frame_truncated() {
        assert!(parse_frame(&[1, 0]).is_err());
    }

    #[wasm_bindgen_test]
    fn test_default_options_object() {
        let value = default_options().unwrap();
        let options: ConvertOptions = serde_wasm_bindgen::from_value(value).unwrap();
        assert_eq!(options, ConvertOptions::default());
    }
}
