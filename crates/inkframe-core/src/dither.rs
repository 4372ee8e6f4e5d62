//! Error-diffusion dithering to a reduced gray palette.
//!
//! Pixels are visited in row-major order. Each one is snapped to the
//! nearest of `levels` evenly spaced values in [0, 1] and the quantization
//! error is pushed onto unvisited neighbors through the kernel's taps.
//! Taps that fall outside the image are dropped, so energy is not
//! conserved at the edges.

use serde::{Deserialize, Serialize};

use crate::decode::GrayBitmap;
use crate::error::ConvertError;

/// Default palette size: 16 levels, one 4-bit nibble per pixel.
pub const DEFAULT_LEVELS: u32 = 16;

/// A single error-diffusion tap: offset from the current pixel and weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tap {
    pub dx: i32,
    pub dy: i32,
    pub weight: u8,
}

const fn tap(dx: i32, dy: i32, weight: u8) -> Tap {
    Tap { dx, dy, weight }
}

const SIERRA_TAPS: [Tap; 10] = [
    tap(1, 0, 5),
    tap(2, 0, 3),
    tap(-2, 1, 2),
    tap(-1, 1, 4),
    tap(0, 1, 5),
    tap(1, 1, 4),
    tap(2, 1, 2),
    tap(-1, 2, 2),
    tap(0, 2, 3),
    tap(1, 2, 2),
];

const FLOYD_STEINBERG_TAPS: [Tap; 4] = [tap(1, 0, 7), tap(-1, 1, 3), tap(0, 1, 5), tap(1, 1, 1)];

/// Error-diffusion kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DitherKernel {
    /// Three-row Sierra filter, weights over 32. Used in production.
    #[default]
    Sierra,
    /// Floyd-Steinberg, weights over 16.
    FloydSteinberg,
}

impl DitherKernel {
    pub fn taps(self) -> &'static [Tap] {
        match self {
            DitherKernel::Sierra => &SIERRA_TAPS,
            DitherKernel::FloydSteinberg => &FLOYD_STEINBERG_TAPS,
        }
    }

    /// Sum of all tap weights.
    pub fn divisor(self) -> f64 {
        match self {
            DitherKernel::Sierra => 32.0,
            DitherKernel::FloydSteinberg => 16.0,
        }
    }
}

impl From<u8> for DitherKernel {
    /// 1 = Floyd-Steinberg, anything else = Sierra.
    fn from(value: u8) -> Self {
        match value {
            1 => DitherKernel::FloydSteinberg,
            _ => DitherKernel::Sierra,
        }
    }
}

/// Output value of palette index `k` for a palette of `levels` entries:
/// `round(k * (255 / (levels - 1)))`.
///
/// The step is computed first, so some ties land one lower than
/// `round(k * 255 / (levels - 1))` would (index 25 of 51 is 127, not 128).
#[inline]
pub fn palette_value(k: u32, levels: u32) -> u8 {
    let step = 255.0 / (levels - 1) as f64;
    (k as f64 * step).round() as u8
}

/// Push `error` from `(x, y)` onto the in-bounds neighbors named by `kernel`.
fn diffuse(
    work: &mut [f64],
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    error: f64,
    kernel: DitherKernel,
) {
    let divisor = kernel.divisor();
    for t in kernel.taps() {
        let nx = x as i64 + t.dx as i64;
        let ny = y as i64 + t.dy as i64;
        if nx < 0 || nx >= width as i64 || ny >= height as i64 {
            continue;
        }
        work[ny as usize * width + nx as usize] += error * t.weight as f64 / divisor;
    }
}

/// Dither a bitmap down to `levels` evenly spaced gray values.
///
/// # Errors
///
/// Returns `ConvertError::InvalidLevels` unless `2 <= levels <= 256`.
pub fn dither(
    image: &GrayBitmap,
    levels: u32,
    kernel: DitherKernel,
) -> Result<GrayBitmap, ConvertError> {
    if !(2..=256).contains(&levels) {
        return Err(ConvertError::InvalidLevels(levels));
    }

    let width = image.width as usize;
    let height = image.height as usize;
    let max_index = (levels - 1) as f64;

    let palette: Vec<u8> = (0..levels).map(|k| palette_value(k, levels)).collect();

    let mut work: Vec<f64> = image.pixels.iter().map(|&p| p as f64 / 255.0).collect();
    let mut out = vec![0u8; work.len()];

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let old_val = work[idx];
            let k = (old_val * max_index).round().clamp(0.0, max_index);
            let new_val = k / max_index;
            out[idx] = palette[k as usize];

            let error = old_val - new_val;
            if error != 0.0 {
                diffuse(&mut work, width, height, x, y, error, kernel);
            }
        }
    }

    Ok(GrayBitmap {
        width: image.width,
        height: image.height,
        pixels: out,
    })
}
