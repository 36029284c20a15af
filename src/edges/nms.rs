//! Non-maximum suppression on gradient magnitude with direction alignment.
//!
//! For each pixel the local edge direction is estimated from the Sobel
//! gradients and the magnitude is compared against the two neighbors along
//! the quantized direction (4 bins: 0°, 45°, 90°, 135°). Responses that are
//! not strictly greater than both neighbors are zeroed, leaving a thinned
//! magnitude grid for the hysteresis stage.
//!
//! The outermost 1-pixel frame is ignored to avoid out-of-bounds checks in
//! neighbor lookup.
use crate::edges::grad::Grad;
use crate::image::{ImageF32, ImageView};

const TAN_22_5_DEG: f32 = 0.41421356237;

/// Thin the gradient magnitude into `out`, keeping only directional maxima
/// with magnitude at least `mag_floor`.
pub fn suppress_nonmaxima(grad: &Grad, mag_floor: f32, out: &mut ImageF32) {
    let w = grad.gx.w;
    let h = grad.gx.h;
    out.reset(w, h);
    if w < 3 || h < 3 {
        return;
    }

    for y in 1..h - 1 {
        let mag_prev = grad.mag.row(y - 1);
        let mag_row = grad.mag.row(y);
        let mag_next = grad.mag.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);

        let out_start = y * w;
        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag < mag_floor {
                continue;
            }

            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);

            // Diagonal neighbors step along the gradient: same-signed
            // components point down-right in image coordinates.
            let (neighbor1, neighbor2) = if abs_gx >= abs_gy {
                if abs_gy <= abs_gx * TAN_22_5_DEG {
                    (mag_row[x - 1], mag_row[x + 1])
                } else if same_sign {
                    (mag_prev[x - 1], mag_next[x + 1])
                } else {
                    (mag_prev[x + 1], mag_next[x - 1])
                }
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (mag_prev[x], mag_next[x])
            } else if same_sign {
                (mag_prev[x - 1], mag_next[x + 1])
            } else {
                (mag_prev[x + 1], mag_next[x - 1])
            };

            // Ties break toward the first neighbor so a symmetric step keeps
            // exactly one side.
            if mag <= neighbor1 || mag < neighbor2 {
                continue;
            }

            out.data[out_start + x] = mag;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::grad::sobel_gradients;

    #[test]
    fn flat_image_produces_no_responses() {
        let img = ImageF32::new(16, 16);
        let grad = sobel_gradients(&img);
        let mut thin = ImageF32::new(0, 0);
        suppress_nonmaxima(&grad, 10.0, &mut thin);
        assert!(thin.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn smoothed_step_thins_to_one_response_per_row() {
        // Ramp over three columns so the magnitude has a clear single peak.
        let mut img = ImageF32::new(16, 16);
        for y in 0..16 {
            for x in 0..16 {
                let v = match x {
                    0..=6 => 0.0,
                    7 => 60.0,
                    8 => 200.0,
                    _ => 255.0,
                };
                img.set(x, y, v);
            }
        }
        let grad = sobel_gradients(&img);
        let mut thin = ImageF32::new(0, 0);
        suppress_nonmaxima(&grad, 10.0, &mut thin);

        let row = 8;
        let kept: Vec<usize> = (0..16).filter(|&x| thin.get(x, row) > 0.0).collect();
        assert_eq!(kept.len(), 1, "expected a single thinned column, got {kept:?}");
    }

    #[test]
    fn diagonal_step_keeps_a_chain_along_the_boundary() {
        let mut img = ImageF32::new(24, 24);
        for y in 0..24 {
            for x in 0..24 {
                if x + y >= 24 {
                    img.set(x, y, 255.0);
                }
            }
        }
        let grad = sobel_gradients(&img);
        let mut thin = ImageF32::new(0, 0);
        suppress_nonmaxima(&grad, 10.0, &mut thin);

        let mut kept = 0;
        for y in 1..23 {
            for x in 1..23 {
                if thin.get(x, y) > 0.0 {
                    kept += 1;
                    assert!(
                        (23..=24).contains(&(x + y)),
                        "response off the boundary at ({x}, {y})"
                    );
                }
            }
        }
        assert!(kept >= 20, "diagonal boundary must survive thinning, kept {kept}");
    }
}
