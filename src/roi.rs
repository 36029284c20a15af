//! Region-of-interest polygon masking.
//!
//! The polygon is expressed as normalized anchors plus pixel offsets so the
//! same geometry adapts to any frame size: each vertex resolves to
//! `(fx*w + dx, fy*h + dy)`, clamped into the frame rectangle. The default
//! hexagon matches the reference road-video framing.
//!
//! Rasterization is an even-odd scanline fill at pixel centers with fill
//! value 255; the mask is combined with the edge map via bitwise AND.
use crate::image::GrayBuffer;
use serde::{Deserialize, Serialize};

/// One polygon vertex: fraction-of-dimension anchor plus pixel offset.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoiVertex {
    /// Horizontal anchor as a fraction of the frame width.
    pub fx: f32,
    /// Horizontal offset in pixels added to the anchor.
    pub dx: f32,
    /// Vertical anchor as a fraction of the frame height.
    pub fy: f32,
    /// Vertical offset in pixels added to the anchor.
    pub dy: f32,
}

impl RoiVertex {
    pub const fn new(fx: f32, dx: f32, fy: f32, dy: f32) -> Self {
        Self { fx, dx, fy, dy }
    }

    /// Resolve to pixel coordinates, clamped into the `w × h` rectangle.
    pub fn resolve(&self, w: usize, h: usize) -> [f32; 2] {
        let x = (self.fx * w as f32 + self.dx).clamp(0.0, w as f32);
        let y = (self.fy * h as f32 + self.dy).clamp(0.0, h as f32);
        [x, y]
    }
}

/// Ordered polygon restricting edge analysis to a sub-area of the frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoiPolygon {
    pub vertices: Vec<RoiVertex>,
}

impl Default for RoiPolygon {
    /// Hexagon over the lower road area:
    /// (0, h−50), (w/2−25, h/2+25), (w/2+75, h/2+25), (w, h−100),
    /// (w/2+25, h), (0, h).
    fn default() -> Self {
        Self {
            vertices: vec![
                RoiVertex::new(0.0, 0.0, 1.0, -50.0),
                RoiVertex::new(0.5, -25.0, 0.5, 25.0),
                RoiVertex::new(0.5, 75.0, 0.5, 25.0),
                RoiVertex::new(1.0, 0.0, 1.0, -100.0),
                RoiVertex::new(0.5, 25.0, 1.0, 0.0),
                RoiVertex::new(0.0, 0.0, 1.0, 0.0),
            ],
        }
    }
}

impl RoiPolygon {
    /// Resolve all vertices for the given frame dimensions.
    pub fn resolve(&self, w: usize, h: usize) -> Vec<[f32; 2]> {
        self.vertices.iter().map(|v| v.resolve(w, h)).collect()
    }

    /// Rasterize the polygon into `mask` (fill value 255, background 0).
    pub fn rasterize(&self, w: usize, h: usize, mask: &mut GrayBuffer) {
        mask.reset(w, h);
        let points = self.resolve(w, h);
        if points.len() < 3 {
            return;
        }

        let mut crossings: Vec<f32> = Vec::with_capacity(points.len());
        for y in 0..h {
            let yc = y as f32 + 0.5;
            crossings.clear();
            for i in 0..points.len() {
                let p = points[i];
                let q = points[(i + 1) % points.len()];
                if (p[1] <= yc) != (q[1] <= yc) {
                    let t = (yc - p[1]) / (q[1] - p[1]);
                    crossings.push(p[0] + t * (q[0] - p[0]));
                }
            }
            crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            for pair in crossings.chunks_exact(2) {
                let x0 = (pair[0] - 0.5).ceil().max(0.0) as usize;
                let x1 = (pair[1] - 0.5).floor().min(w as f32 - 1.0);
                if x1 < 0.0 {
                    continue;
                }
                for x in x0..=x1 as usize {
                    mask.set(x, y, 255);
                }
            }
        }
    }
}

/// Keep only edge pixels inside the mask (in-place bitwise AND).
pub fn apply_mask(edges: &mut GrayBuffer, mask: &GrayBuffer) {
    debug_assert_eq!(edges.width(), mask.width());
    debug_assert_eq!(edges.height(), mask.height());
    for (e, &m) in edges.bytes_mut().iter_mut().zip(mask.bytes()) {
        *e &= m;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_is_deterministic_for_equal_dimensions() {
        let roi = RoiPolygon::default();
        assert_eq!(roi.resolve(640, 480), roi.resolve(640, 480));
    }

    #[test]
    fn default_hexagon_matches_reference_geometry() {
        let points = RoiPolygon::default().resolve(640, 480);
        assert_eq!(points[0], [0.0, 430.0]);
        assert_eq!(points[1], [295.0, 265.0]);
        assert_eq!(points[2], [395.0, 265.0]);
        assert_eq!(points[3], [640.0, 380.0]);
        assert_eq!(points[4], [345.0, 480.0]);
        assert_eq!(points[5], [0.0, 480.0]);
    }

    #[test]
    fn vertices_are_clamped_into_small_frames() {
        for [x, y] in RoiPolygon::default().resolve(40, 30) {
            assert!((0.0..=40.0).contains(&x), "x out of bounds: {x}");
            assert!((0.0..=30.0).contains(&y), "y out of bounds: {y}");
        }
    }

    #[test]
    fn mask_covers_lower_left_corner_but_not_the_top() {
        let mut mask = GrayBuffer::new(0, 0);
        RoiPolygon::default().rasterize(640, 480, &mut mask);
        assert_eq!(mask.get(2, 470), 255);
        assert_eq!(mask.get(320, 300), 255);
        assert_eq!(mask.get(2, 2), 0);
        assert_eq!(mask.get(630, 100), 0);
    }

    #[test]
    fn apply_mask_clears_edges_outside_the_polygon() {
        let mut edges = GrayBuffer::new(640, 480);
        edges.set(2, 2, 255);
        edges.set(2, 470, 255);
        let mut mask = GrayBuffer::new(0, 0);
        RoiPolygon::default().rasterize(640, 480, &mut mask);
        apply_mask(&mut edges, &mask);
        assert_eq!(edges.get(2, 2), 0);
        assert_eq!(edges.get(2, 470), 255);
    }
}
