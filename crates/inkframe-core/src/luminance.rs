//! Luminance conversion using ITU-R BT.601 luma weights.
//!
//! These are the weights conventional imaging libraries use for their
//! "L" (8-bit grayscale) mode, so album art and icons reduce to the same
//! gray levels the panel firmware was tuned against.

/// BT.601 weight for the red channel, in thousandths.
pub const LUMA_R: u32 = 299;

/// BT.601 weight for the green channel, in thousandths.
pub const LUMA_G: u32 = 587;

/// BT.601 weight for the blue channel, in thousandths.
pub const LUMA_B: u32 = 114;

/// Calculate luminance from u8 RGB values.
///
/// Integer arithmetic with round-half-up, so gray inputs (`r == g == b`)
/// map to themselves exactly.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let sum = LUMA_R * r as u32 + LUMA_G * g as u32 + LUMA_B * b as u32;
    ((sum + 500) / 1000).min(255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        assert_eq!(LUMA_R + LUMA_G + LUMA_B, 1000);
    }

    #[test]
    fn test_gray_preserves_value() {
        for v in 0..=255u8 {
            assert_eq!(luma_u8(v, v, v), v, "gray {} should map to itself", v);
        }
    }

    #[test]
    fn test_pure_primaries() {
        // 0.299 * 255 = 76.2
        assert_eq!(luma_u8(255, 0, 0), 76);
        // 0.587 * 255 = 149.7
        assert_eq!(luma_u8(0, 255, 0), 150);
        // 0.114 * 255 = 29.1
        assert_eq!(luma_u8(0, 0, 255), 29);
    }
}
