//! Separable Gaussian smoothing applied before edge detection.
//!
//! The default kernel reproduces the fixed 7-tap Gaussian used by common
//! vision libraries when the standard deviation is left to be derived from
//! the kernel size (`[2, 7, 14, 18, 14, 7, 2] / 64`). Borders are handled by
//! clamping indices (replicate).
use crate::image::{ImageF32, ImageView, ImageViewMut};
use serde::{Deserialize, Serialize};

/// Normalized 7-tap Gaussian filter taps.
pub const GAUSSIAN_7TAP: [f32; 7] = [
    0.031_25, 0.109_375, 0.218_75, 0.281_25, 0.218_75, 0.109_375, 0.031_25,
];

/// Blur stage configuration: the 1D taps of the separable kernel.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BlurParams {
    pub taps: Vec<f32>,
}

impl Default for BlurParams {
    fn default() -> Self {
        Self {
            taps: GAUSSIAN_7TAP.to_vec(),
        }
    }
}

/// Apply the separable kernel horizontally then vertically, writing into
/// `dst`. `dst` is resized to match `src`.
pub fn gaussian_blur_into(src: &ImageF32, taps: &[f32], dst: &mut ImageF32) {
    assert!(!taps.is_empty(), "blur kernel must have at least one tap");
    dst.reset(src.w, src.h);
    if src.w == 0 || src.h == 0 {
        return;
    }

    let radius = taps.len() / 2;

    // Horizontal pass into an intermediate buffer.
    let mut horiz = ImageF32::new(src.w, src.h);
    for y in 0..src.h {
        let src_row = src.row(y);
        let dst_row = horiz.row_mut(y);
        filter_row(src_row, dst_row, taps, radius);
    }

    // Vertical pass: same taps along columns, rows clamped at the borders.
    for y in 0..src.h {
        let dst_row = dst.row_mut(y);
        for (k, &tap) in taps.iter().enumerate() {
            let offset = k as isize - radius as isize;
            let sy = clamp_index(y as isize + offset, src.h);
            let src_row = horiz.row(sy);
            for (d, &s) in dst_row.iter_mut().zip(src_row.iter()) {
                *d += tap * s;
            }
        }
    }
}

fn filter_row(row: &[f32], out: &mut [f32], taps: &[f32], radius: usize) {
    let len = row.len();
    for (x, dst_px) in out.iter_mut().enumerate() {
        let mut acc = 0.0f32;
        for (k, &tap) in taps.iter().enumerate() {
            let offset = k as isize - radius as isize;
            let idx = clamp_index(x as isize + offset, len);
            acc += tap * row[idx];
        }
        *dst_px = acc;
    }
}

fn clamp_index(idx: isize, upper: usize) -> usize {
    if upper == 0 {
        return 0;
    }
    if idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}
