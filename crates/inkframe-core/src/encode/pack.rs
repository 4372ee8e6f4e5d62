//! Two-pixels-per-byte nibble packing.

use crate::decode::GrayBitmap;

/// Packed 4-bit image, ready to frame and send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedImage {
    pub width: u32,
    pub height: u32,
    /// `row_stride(width) * height` bytes, row-major.
    pub data: Vec<u8>,
}

impl PackedImage {
    /// Stored nibble (0-15) for the pixel at `(x, y)`.
    ///
    /// Panics when out of bounds.
    #[inline]
    pub fn nibble(&self, x: u32, y: u32) -> u8 {
        let byte = self.data[y as usize * row_stride(self.width) + (x / 2) as usize];
        if x % 2 == 0 {
            byte & 0x0F
        } else {
            byte >> 4
        }
    }

    /// Expand back to one nibble per pixel, row-major.
    pub fn unpack(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.width as usize * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(self.nibble(x, y));
            }
        }
        out
    }

    /// Expand back to an 8-bit bitmap, scaling each nibble by 17.
    pub fn to_bitmap(&self) -> GrayBitmap {
        GrayBitmap {
            width: self.width,
            height: self.height,
            pixels: self.unpack().into_iter().map(|n| n * 17).collect(),
        }
    }
}

/// Bytes per packed row: `ceil(width / 2)`.
#[inline]
pub fn row_stride(width: u32) -> usize {
    (width as usize).div_ceil(2)
}

/// Total packed size: `ceil(width / 2) * height`.
#[inline]
pub fn packed_len(width: u32, height: u32) -> usize {
    row_stride(width) * height as usize
}

/// Pack a bitmap, keeping the top four bits of each pixel.
///
/// The even-x pixel contributes `pixel >> 4`, the odd-x pixel
/// `pixel & 0xF0`. With an odd width the last pixel of each row is written
/// alone, upper bits zero.
pub fn pack(image: &GrayBitmap) -> PackedImage {
    let mut data = Vec::with_capacity(packed_len(image.width, image.height));

    if image.width > 0 {
        for row in image.rows() {
            for pair in row.chunks(2) {
                let mut byte = pair[0] >> 4;
                if let Some(&odd) = pair.get(1) {
                    byte |= odd & 0xF0;
                }
                data.push(byte);
            }
        }
    }

    PackedImage {
        width: image.width,
        height: image.height,
        data,
    }
}
