//! Double-threshold hysteresis linking thinned responses into a binary map.
//!
//! Pixels with magnitude at or above the high threshold seed edges; pixels at
//! or above the low threshold are kept only when 8-connected to a seed. The
//! traversal reuses an explicit stack instead of recursion.
use crate::image::{GrayBuffer, ImageF32};

const NEIGH_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Threshold the thinned magnitude grid into a binary (0/255) edge map.
pub fn link_edges(thin: &ImageF32, low: f32, high: f32, out: &mut GrayBuffer) {
    let w = thin.w;
    let h = thin.h;
    out.reset(w, h);
    if w == 0 || h == 0 {
        return;
    }

    let mut stack: Vec<usize> = Vec::new();
    for (idx, &mag) in thin.data.iter().enumerate() {
        if mag >= high && out.bytes()[idx] == 0 {
            out.bytes_mut()[idx] = 255;
            stack.push(idx);
            while let Some(seed) = stack.pop() {
                let x = (seed % w) as isize;
                let y = (seed / w) as isize;
                for (dx, dy) in NEIGH_OFFSETS {
                    let nx = x + dx;
                    let ny = y + dy;
                    if nx < 0 || ny < 0 || nx >= w as isize || ny >= h as isize {
                        continue;
                    }
                    let nidx = ny as usize * w + nx as usize;
                    if out.bytes()[nidx] == 0 && thin.data[nidx] >= low {
                        out.bytes_mut()[nidx] = 255;
                        stack.push(nidx);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolated_weak_response_is_dropped() {
        let mut thin = ImageF32::new(8, 8);
        thin.set(4, 4, 80.0);
        let mut out = GrayBuffer::new(0, 0);
        link_edges(&thin, 50.0, 150.0, &mut out);
        assert_eq!(out.count_nonzero(), 0);
    }

    #[test]
    fn weak_response_connected_to_strong_is_kept() {
        let mut thin = ImageF32::new(8, 8);
        thin.set(3, 4, 200.0);
        thin.set(4, 4, 80.0);
        thin.set(5, 4, 80.0);
        let mut out = GrayBuffer::new(0, 0);
        link_edges(&thin, 50.0, 150.0, &mut out);
        assert_eq!(out.get(3, 4), 255);
        assert_eq!(out.get(4, 4), 255);
        assert_eq!(out.get(5, 4), 255);
        assert_eq!(out.count_nonzero(), 3);
    }
}
