//! Quarter-turn rotation applied before resizing.
//!
//! Panels mounted in portrait still receive landscape art; rotating the
//! source first lets the resize stage fill the panel instead of letterboxing.

use serde::{Deserialize, Serialize};

use crate::decode::GrayBitmap;

/// Rotation applied to the source bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rotation {
    #[default]
    None,
    Clockwise90,
    Half,
    CounterClockwise90,
}

/// Rotate a bitmap by a quarter-turn multiple.
pub fn apply_rotation(image: &GrayBitmap, rotation: Rotation) -> GrayBitmap {
    if rotation == Rotation::None || image.is_empty() {
        return image.clone();
    }

    let Some(gray) = image.to_gray_image() else {
        return image.clone();
    };

    let rotated = match rotation {
        Rotation::None => gray,
        Rotation::Clockwise90 => image::imageops::rotate90(&gray),
        Rotation::Half => image::imageops::rotate180(&gray),
        Rotation::CounterClockwise90 => image::imageops::rotate270(&gray),
    };
    GrayBitmap::from_gray_image(rotated)
}
