//! Luminance histogram and the tone statistics derived from it.
//!
//! The statistics parameterize the adjustment stage: mean brightness and
//! spread drive gamma and contrast, the 5% tails drive brightness.

use serde::{Deserialize, Serialize};

use crate::decode::GrayBitmap;

/// Fraction of pixels that defines the shadow and highlight tails.
pub const TAIL_FRACTION: f64 = 0.05;

/// 256-bin luminance histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuminanceHistogram {
    pub bins: [u32; 256],
}

impl Default for LuminanceHistogram {
    fn default() -> Self {
        Self { bins: [0; 256] }
    }
}

impl LuminanceHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of samples counted.
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|&c| c as u64).sum()
    }
}

/// Summary of a bitmap's tonal distribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneStatistics {
    /// Histogram-weighted mean intensity.
    pub mean_brightness: f64,
    /// Population standard deviation of intensity.
    pub std_dev: f64,
    /// Lowest level whose cumulative mass from 0 reaches 5%.
    pub shadow: u8,
    /// Highest level whose cumulative mass from 255 reaches 5%.
    pub highlight: u8,
}

/// Count every sample of the bitmap into a histogram.
pub fn compute_histogram(image: &GrayBitmap) -> LuminanceHistogram {
    let mut hist = LuminanceHistogram::new();
    for &p in &image.pixels {
        hist.bins[p as usize] += 1;
    }
    hist
}

/// Analyze a bitmap. An empty bitmap yields all-zero statistics.
pub fn analyze(image: &GrayBitmap) -> ToneStatistics {
    statistics_from_histogram(&compute_histogram(image))
}

/// Derive tone statistics from an existing histogram.
pub fn statistics_from_histogram(hist: &LuminanceHistogram) -> ToneStatistics {
    let total = hist.total();
    if total == 0 {
        return ToneStatistics::default();
    }
    let total_f = total as f64;

    let mean = hist
        .bins
        .iter()
        .enumerate()
        .map(|(level, &count)| level as f64 * count as f64)
        .sum::<f64>()
        / total_f;

    let variance = hist
        .bins
        .iter()
        .enumerate()
        .map(|(level, &count)| {
            let d = level as f64 - mean;
            d * d * count as f64
        })
        .sum::<f64>()
        / total_f;

    let threshold = total_f * TAIL_FRACTION;

    ToneStatistics {
        mean_brightness: mean,
        std_dev: variance.sqrt(),
        shadow: tail_level(hist.bins.iter().enumerate(), threshold, 0),
        highlight: tail_level(hist.bins.iter().enumerate().rev(), threshold, 255),
    }
}

/// First level in iteration order where the running count reaches `threshold`.
fn tail_level<'a>(
    bins: impl Iterator<Item = (usize, &'a u32)>,
    threshold: f64,
    fallback: u8,
) -> u8 {
    let mut cumulative = 0u64;
    for (level, &count) in bins {
        cumulative += count as u64;
        if cumulative as f64 >= threshold {
            return level as u8;
        }
    }
    fallback
}
