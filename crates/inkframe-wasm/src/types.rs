//! WASM-compatible wrapper types for image data.
//!
//! These wrap the core `GrayBitmap` and `PackedImage` types and handle the
//! conversion between Rust and JavaScript data representations.

use inkframe_core::{encode_frame, GrayBitmap, PackedImage};
use wasm_bindgen::prelude::*;

/// A single-channel grayscale image for JavaScript.
///
/// # Memory Management
///
/// Pixel data lives in WASM memory. `pixels()` copies it out as a
/// `Uint8Array`; call `free()` to release a large image early.
#[wasm_bindgen]
pub struct JsGrayImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsGrayImage {
    /// Create a grayscale image from dimensions and luminance samples
    /// (1 byte per pixel, row-major).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsGrayImage {
        JsGrayImage {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns luminance samples as a Uint8Array (copy).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Expand to RGBA for drawing onto a canvas `ImageData`.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|&v| [v, v, v, 255]).collect()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {}
}

impl JsGrayImage {
    pub(crate) fn from_bitmap(img: GrayBitmap) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert to a core bitmap, checking the buffer length.
    pub(crate) fn to_bitmap(&self) -> Result<GrayBitmap, String> {
        GrayBitmap::from_raw(self.width, self.height, self.pixels.clone()).map_err(|e| e.to_string())
    }
}

/// A packed 4-bit image ready for the panel.
#[wasm_bindgen]
pub struct JsPackedImage {
    inner: PackedImage,
}

#[wasm_bindgen]
impl JsPackedImage {
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Packed payload without header (copy).
    pub fn data(&self) -> Vec<u8> {
        self.inner.data.clone()
    }

    /// Header plus payload, as sent to the panel.
    pub fn frame(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(encode_frame(&self.inner).as_slice())
    }

    /// One 0-15 nibble per pixel, row-major.
    pub fn unpack(&self) -> Vec<u8> {
        self.inner.unpack()
    }

    /// What the panel will display, as a grayscale preview.
    pub fn preview(&self) -> JsGrayImage {
        JsGrayImage::from_bitmap(self.inner.to_bitmap())
    }

    pub fn free(self) {}
}

impl JsPackedImage {
    pub(crate) fn from_packed(inner: PackedImage) -> Self {
        Self { inner }
    }

    #[allow(dead_code)] // Read by native tests
    pub(crate) fn encoded_frame(&self) -> Vec<u8> {
        encode_frame(&self.inner)
    }
}
