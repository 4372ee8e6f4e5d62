//! Automatic tonal adjustment tuned for the grayscale e-paper panel.
//!
//! Parameters are derived from [`ToneStatistics`] by a fixed piecewise
//! linear table, then applied in order:
//! 1. Gamma
//! 2. Contrast (around the mean of the gamma-corrected buffer)
//! 3. Grayscale
//! 4. Brightness
//!
//! Every stage clips to [0, 255] and rounds to the nearest level before the
//! next stage sees the buffer. The constants were tuned against real panel
//! output; changing them shifts visible contrast on the device.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::decode::GrayBitmap;
use crate::histogram::ToneStatistics;

/// Gamma, contrast and brightness derived for one image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentParams {
    /// Exponent applied to normalized intensity.
    pub gamma: f64,
    /// Multiplier applied to the distance from the mean.
    pub contrast: f64,
    /// Multiplier applied to intensity.
    pub brightness: f64,
}

impl Default for AdjustmentParams {
    fn default() -> Self {
        Self::identity()
    }
}

impl AdjustmentParams {
    /// Parameters that leave every pixel unchanged.
    pub fn identity() -> Self {
        Self {
            gamma: 1.0,
            contrast: 1.0,
            brightness: 1.0,
        }
    }

    /// Derive parameters from image statistics.
    pub fn derive(stats: &ToneStatistics) -> Self {
        let mean = stats.mean_brightness;
        let std_dev = stats.std_dev;
        let shadow = stats.shadow as f64;
        let highlight = stats.highlight as f64;

        let mut gamma = if mean < 128.0 {
            0.6 + (mean / 128.0) * 0.2
        } else {
            0.9 + ((mean - 128.0) / 128.0) * 0.5
        };

        let contrast = if std_dev < 50.0 {
            1.2 + (50.0 - std_dev) / 50.0 * 0.3
        } else {
            1.0 - (std_dev - 50.0) / 100.0 * 0.2 + 0.2
        };

        let mut brightness = 1.0;
        if shadow < 20.0 {
            brightness = 1.1 + (20.0 - shadow) / 20.0 * 0.3;
        } else if highlight > 235.0 {
            brightness = 0.9 - (highlight - 235.0) / 20.0 * 0.2;
        }

        // Panel bias, applied unconditionally.
        brightness += 0.1;
        gamma -= 0.1;

        let params = Self {
            gamma,
            contrast,
            brightness,
        };
        debug!("derived {:?} from {:?}", params, stats);
        params
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

/// Apply all adjustment stages to a bitmap in place.
pub fn apply_adjustments(image: &mut GrayBitmap, params: &AdjustmentParams) {
    if params.is_identity() {
        return;
    }
    apply_gamma(&mut image.pixels, params.gamma);
    apply_contrast(&mut image.pixels, params.contrast);
    // A GrayBitmap holds exactly one channel, so the grayscale stage is the
    // type itself; nothing upstream can leave extra channels behind.
    apply_brightness(&mut image.pixels, params.brightness);
}

/// Gamma correction: `255 * (v / 255) ^ gamma`.
pub fn apply_gamma(pixels: &mut [u8], gamma: f64) {
    if gamma == 1.0 {
        return;
    }
    let mut lut = [0u8; 256];
    for (v, out) in lut.iter_mut().enumerate() {
        *out = clip_round(255.0 * (v as f64 / 255.0).powf(gamma));
    }
    for p in pixels.iter_mut() {
        *p = lut[*p as usize];
    }
}

/// Contrast around the current mean: `(v - mean) * contrast + mean`.
pub fn apply_contrast(pixels: &mut [u8], contrast: f64) {
    if contrast == 1.0 || pixels.is_empty() {
        return;
    }
    let mean = pixels.iter().map(|&p| p as f64).sum::<f64>() / pixels.len() as f64;
    for p in pixels.iter_mut() {
        *p = clip_round((*p as f64 - mean) * contrast + mean);
    }
}

/// Brightness scaling: `v * brightness`.
pub fn apply_brightness(pixels: &mut [u8], brightness: f64) {
    if brightness == 1.0 {
        return;
    }
    for p in pixels.iter_mut() {
        *p = clip_round(*p as f64 * brightness);
    }
}

#[inline]
fn clip_round(v: f64) -> u8 {
    v.clamp(0.0, 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(mean: f64, std_dev: f64, shadow: u8, highlight: u8) -> ToneStatistics {
        ToneStatistics {
            mean_brightness: mean,
            std_dev,
            shadow,
            highlight,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    // ===== Derivation =====

    #[test]
    fn test_derive_dark_low_contrast_crushed_shadows() {
        let p = AdjustmentParams::derive(&stats(64.0, 25.0, 10, 200));
        // 0.6 + 0.5 * 0.2 - 0.1
        assert_close(p.gamma, 0.6);
        // 1.2 + 0.5 * 0.3
        assert_close(p.contrast, 1.35);
        // 1.1 + 0.5 * 0.3 + 0.1
        assert_close(p.brightness, 1.35);
    }

    #[test]
    fn test_derive_bright_high_contrast_blown_highlights() {
        let p = AdjustmentParams::derive(&stats(192.0, 100.0, 40, 255));
        // 0.9 + 0.5 * 0.5 - 0.1
        assert_close(p.gamma, 1.05);
        // 1.0 - 0.5 * 0.2 + 0.2
        assert_close(p.contrast, 1.1);
        // 0.9 - 1.0 * 0.2 + 0.1
        assert_close(p.brightness, 0.8);
    }

    #[test]
    fn test_derive_midtone_leaves_brightness_at_bias() {
        let p = AdjustmentParams::derive(&stats(128.0, 50.0, 20, 235));
        assert_close(p.gamma, 0.8);
        assert_close(p.contrast, 1.2);
        assert_close(p.brightness, 1.1);
    }

    #[test]
    fn test_derive_shadow_rule_wins_over_highlight() {
        let p = AdjustmentParams::derive(&stats(128.0, 80.0, 0, 255));
        // shadow < 20 is checked first: 1.1 + 0.3 + 0.1
        assert_close(p.brightness, 1.5);
    }

    #[test]
    fn test_derive_uniform_gray() {
        let p = AdjustmentParams::derive(&stats(128.0, 0.0, 128, 128));
        assert_close(p.gamma, 0.8);
        assert_close(p.contrast, 1.5);
        assert_close(p.brightness, 1.1);
    }

    // ===== Stages =====

    #[test]
    fn test_gamma_endpoints_fixed() {
        let mut px = vec![0, 255];
        apply_gamma(&mut px, 0.5);
        assert_eq!(px, vec![0, 255]);
    }

    #[test]
    fn test_gamma_below_one_brightens() {
        let mut px = vec![64];
        apply_gamma(&mut px, 0.5);
        // 255 * sqrt(64/255) = 127.75
        assert_eq!(px, vec![128]);
    }

    #[test]
    fn test_contrast_uses_current_mean() {
        // mean 100
        let mut px = vec![50, 150];
        apply_contrast(&mut px, 2.0);
        assert_eq!(px, vec![0, 200]);
    }

    #[test]
    fn test_contrast_clips() {
        let mut px = vec![0, 255];
        apply_contrast(&mut px, 3.0);
        assert_eq!(px, vec![0, 255]);
    }

    #[test]
    fn test_brightness_clips_at_white() {
        let mut px = vec![100, 200];
        apply_brightness(&mut px, 1.5);
        assert_eq!(px, vec![150, 255]);
    }

    #[test]
    fn test_identity_is_noop() {
        let mut img = GrayBitmap::from_raw(3, 1, vec![1, 128, 254]).unwrap();
        apply_adjustments(&mut img, &AdjustmentParams::identity());
        assert_eq!(img.pixels, vec![1, 128, 254]);
    }

    #[test]
    fn test_stage_order_gamma_before_brightness() {
        // gamma 0.5 then brightness 0.5: 64 -> 128 -> 64
        let mut img = GrayBitmap::from_raw(1, 1, vec![64]).unwrap();
        let params = AdjustmentParams {
            gamma: 0.5,
            contrast: 1.0,
            brightness: 0.5,
        };
        apply_adjustments(&mut img, &params);
        assert_eq!(img.pixels, vec![64]);
    }

    #[test]
    fn test_contrast_mean_taken_after_gamma() {
        // gamma 0.5: [0, 64] -> [0, 128], mean 64, so 128 -> 192.
        // The pre-gamma mean of 32 would give 224.
        let mut img = GrayBitmap::from_raw(2, 1, vec![0, 64]).unwrap();
        let params = AdjustmentParams {
            gamma: 0.5,
            contrast: 2.0,
            brightness: 1.0,
        };
        apply_adjustments(&mut img, &params);
        assert_eq!(img.pixels, vec![0, 192]);
    }

    #[test]
    fn test_white_image_full_pipeline() {
        let mut img = GrayBitmap::filled(2, 2, 255);
        let params = AdjustmentParams::derive(&crate::histogram::analyze(&img));
        assert_close(params.brightness, 0.8);
        apply_adjustments(&mut img, &params);
        assert!(img.pixels.iter().all(|&p| p == 204));
    }
}
