//! Sobel image gradients with magnitude.
//!
//! Convolves the 3×3 Sobel kernel pair with border clamping and outputs
//! per-pixel `gx`, `gy` and `mag = sqrt(gx^2 + gy^2)`. With input pixels in
//! 0..255 units the magnitudes are directly comparable to 8-bit Canny
//! thresholds.
//!
//! Complexity: O(W·H); memory: three float buffers.
use crate::image::{ImageF32, ImageView, ImageViewMut};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Per-pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative (convolution with kernel X)
    pub gx: ImageF32,
    /// Vertical derivative (convolution with kernel Y)
    pub gy: ImageF32,
    /// Euclidean magnitude per pixel: `sqrt(gx^2 + gy^2)`
    pub mag: ImageF32,
}

/// Compute Sobel gradients on a single-channel float image.
pub fn sobel_gradients(l: &ImageF32) -> Grad {
    let w = l.w;
    let h = l.h;
    let mut gx = ImageF32::new(w, h);
    let mut gy = ImageF32::new(w, h);
    let mut mag = ImageF32::new(w, h);

    if w == 0 || h == 0 {
        return Grad { gx, gy, mag };
    }

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [l.row(y_idx[0]), l.row(y_idx[1]), l.row(y_idx[2])];
        let out_gx = gx.row_mut(y);
        let out_gy = gy.row_mut(y);
        let out_mag = mag.row_mut(y);
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, src_row) in rows.iter().enumerate() {
                let kx_row = &SOBEL_KERNEL_X[ky];
                let ky_row = &SOBEL_KERNEL_Y[ky];
                sum_x += src_row[x_idx[0]] * kx_row[0]
                    + src_row[x_idx[1]] * kx_row[1]
                    + src_row[x_idx[2]] * kx_row[2];
                sum_y += src_row[x_idx[0]] * ky_row[0]
                    + src_row[x_idx[1]] * ky_row[1]
                    + src_row[x_idx[2]] * ky_row[2];
            }

            out_gx[x] = sum_x;
            out_gy[x] = sum_y;
            out_mag[x] = (sum_x * sum_x + sum_y * sum_y).sqrt();
        }
    }

    Grad { gx, gy, mag }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_image_has_zero_gradient() {
        let mut img = ImageF32::new(8, 8);
        for v in &mut img.data {
            *v = 128.0;
        }
        let grad = sobel_gradients(&img);
        for &m in &grad.mag.data {
            assert!(m.abs() < 1e-4);
        }
    }

    #[test]
    fn vertical_step_has_horizontal_gradient() {
        let mut img = ImageF32::new(8, 8);
        for y in 0..8 {
            for x in 4..8 {
                img.set(x, y, 255.0);
            }
        }
        let grad = sobel_gradients(&img);
        assert!(grad.gx.get(4, 4).abs() > 100.0);
        assert!(grad.gy.get(4, 4).abs() < 1e-3);
    }
}
