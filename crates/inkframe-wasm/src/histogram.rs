//! Tone analysis WASM bindings.
//!
//! Lets the layout editor show why an image will come out lighter or
//! darker on the panel.

use crate::types::JsGrayImage;
use inkframe_core::{analyze as analyze_core, AdjustmentParams, ToneStatistics};
use wasm_bindgen::prelude::*;

/// Tone statistics accessible from JavaScript.
#[wasm_bindgen]
pub struct JsToneStatistics {
    inner: ToneStatistics,
}

#[wasm_bindgen]
impl JsToneStatistics {
    #[wasm_bindgen(getter)]
    pub fn mean_brightness(&self) -> f64 {
        self.inner.mean_brightness
    }

    #[wasm_bindgen(getter)]
    pub fn std_dev(&self) -> f64 {
        self.inner.std_dev
    }

    /// 5th-percentile level from the dark end.
    #[wasm_bindgen(getter)]
    pub fn shadow(&self) -> u8 {
        self.inner.shadow
    }

    /// 5th-percentile level from the bright end.
    #[wasm_bindgen(getter)]
    pub fn highlight(&self) -> u8 {
        self.inner.highlight
    }

    /// Serialize to a plain object.
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Compute tone statistics for a grayscale image.
///
/// # Example (TypeScript)
/// ```typescript
/// const stats = analyze(gray);
/// console.log(stats.mean_brightness, stats.shadow, stats.highlight);
/// stats.free();
/// ```
#[wasm_bindgen]
pub fn analyze(image: &JsGrayImage) -> Result<JsToneStatistics, JsValue> {
    let bitmap = image.to_bitmap().map_err(|e| JsValue::from_str(&e))?;
    Ok(JsToneStatistics {
        inner: analyze_core(&bitmap),
    })
}

/// Derive `{ gamma, contrast, brightness }` for a grayscale image.
#[wasm_bindgen]
pub fn derive_adjustments(image: &JsGrayImage) -> Result<JsValue, JsValue> {
    let bitmap = image.to_bitmap().map_err(|e| JsValue::from_str(&e))?;
    let params = AdjustmentParams::derive(&analyze_core(&bitmap));
    serde_wasm_bindgen::to_value(&params).map_err(|e| JsValue::from_str(&e.to_string()))
}
