//! Probabilistic Hough transform over a binary edge map.
//!
//! The classical progressive variant samples edge points at random; here the
//! points are visited in scan order so results are reproducible for a given
//! input. Each unclaimed point votes across all theta bins, and once the
//! votes around its best bin reach the accumulator threshold the supporting
//! points along that (theta, rho) corridor are claimed: sorted by projection onto the line
//! direction, split where the gap exceeds `max_gap`, and the run containing
//! the seed emitted as a segment when it is at least `min_length` long.
//! Claimed points retract their votes, so one physical line yields one
//! segment.
use crate::image::GrayView;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;

/// Half-width in pixels of the support corridor around a detected line.
/// Wide enough to claim both gradient flanks of a blurred lane marking as
/// one segment.
const SUPPORT_HALF_WIDTH: f32 = 4.0;

/// Accumulator and segment-extraction parameters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HoughParams {
    /// Distance resolution of the accumulator in pixels.
    pub rho_res: f32,
    /// Angle resolution of the accumulator in radians.
    pub theta_res: f32,
    /// Minimum accumulator votes for a candidate line.
    pub threshold: u32,
    /// Minimum accepted segment length in pixels.
    pub min_length: f32,
    /// Maximum gap between collinear points merged into one segment.
    pub max_gap: f32,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            rho_res: 1.0,
            theta_res: std::f32::consts::PI / 180.0,
            threshold: 50,
            min_length: 10.0,
            max_gap: 50.0,
        }
    }
}

/// Detected line segment with lazily computed geometry.
#[derive(Clone, Debug, Serialize)]
pub struct LaneSegment {
    pub p0: [f32; 2],
    pub p1: [f32; 2],
    /// Number of edge points claimed by this segment.
    pub support: u32,
    #[serde(skip)]
    line: OnceCell<Vector3<f32>>,
    #[serde(skip)]
    length: OnceCell<f32>,
}

impl LaneSegment {
    pub fn new(p0: [f32; 2], p1: [f32; 2], support: u32) -> Self {
        Self {
            p0,
            p1,
            support,
            line: OnceCell::new(),
            length: OnceCell::new(),
        }
    }

    fn compute_line(&self) -> Vector3<f32> {
        let a = self.p1[1] - self.p0[1];
        let b = self.p0[0] - self.p1[0];
        let c = self.p1[0] * self.p0[1] - self.p0[0] * self.p1[1];
        let norm = (a * a + b * b).sqrt();
        Vector3::new(a / norm, b / norm, c / norm)
    }

    /// Line representation: ax + by + c = 0, with sqrt(a^2+b^2)=1
    pub fn line(&self) -> Vector3<f32> {
        *self.line.get_or_init(|| self.compute_line())
    }

    pub fn length(&self) -> f32 {
        *self.length.get_or_init(|| {
            let dx = self.p1[0] - self.p0[0];
            let dy = self.p1[1] - self.p0[1];
            (dx * dx + dy * dy).sqrt()
        })
    }

    pub fn midpoint(&self) -> [f32; 2] {
        [
            (self.p0[0] + self.p1[0]) * 0.5,
            (self.p0[1] + self.p1[1]) * 0.5,
        ]
    }
}

struct Accumulator {
    bins: Vec<i32>,
    cos_table: Vec<f32>,
    sin_table: Vec<f32>,
    n_theta: usize,
    n_rho: usize,
    rho_res: f32,
    rho_offset: f32,
}

impl Accumulator {
    fn new(w: usize, h: usize, params: &HoughParams) -> Self {
        let n_theta = (std::f32::consts::PI / params.theta_res).round().max(1.0) as usize;
        let max_rho = ((w * w + h * h) as f32).sqrt();
        let n_rho = (2.0 * max_rho / params.rho_res).ceil() as usize + 1;
        let cos_table: Vec<f32> = (0..n_theta)
            .map(|t| (t as f32 * params.theta_res).cos())
            .collect();
        let sin_table: Vec<f32> = (0..n_theta)
            .map(|t| (t as f32 * params.theta_res).sin())
            .collect();
        Self {
            bins: vec![0; n_theta * n_rho],
            cos_table,
            sin_table,
            n_theta,
            n_rho,
            rho_res: params.rho_res,
            rho_offset: max_rho,
        }
    }

    #[inline]
    fn rho_index(&self, rho: f32) -> usize {
        let idx = ((rho + self.rho_offset) / self.rho_res).round();
        (idx.max(0.0) as usize).min(self.n_rho - 1)
    }

    /// Add (or retract, with `delta = -1`) one point's votes.
    fn vote(&mut self, x: f32, y: f32, delta: i32) {
        for t in 0..self.n_theta {
            let rho = x * self.cos_table[t] + y * self.sin_table[t];
            let r = self.rho_index(rho);
            self.bins[t * self.n_rho + r] += delta;
        }
    }

    /// Best (votes, theta index, rho index) among the bins this point hits.
    ///
    /// Votes are summed over a ±1 rho neighborhood: rasterization jitter
    /// spreads a collinear run across adjacent rho bins, and the single-bin
    /// count would undercount it by up to half. Ties between thetas prefer
    /// the sharper center bin.
    fn best_bin_for(&self, x: f32, y: f32) -> (i32, usize, usize) {
        let mut best = (0, 0, 0);
        let mut best_center = 0;
        for t in 0..self.n_theta {
            let rho = x * self.cos_table[t] + y * self.sin_table[t];
            let r = self.rho_index(rho);
            let base = t * self.n_rho;
            let lo = r.saturating_sub(1);
            let hi = (r + 1).min(self.n_rho - 1);
            let votes: i32 = self.bins[base + lo..=base + hi].iter().sum();
            let center = self.bins[base + r];
            if votes > best.0 || (votes == best.0 && center > best_center) {
                best = (votes, t, r);
                best_center = center;
            }
        }
        best
    }
}

/// Detect line segments in a binary edge map.
///
/// Returns zero or more segments; an empty edge map yields an empty vector.
pub fn detect_segments(edges: GrayView<'_>, params: &HoughParams) -> Vec<LaneSegment> {
    let w = edges.w;
    let h = edges.h;
    if w == 0 || h == 0 {
        return Vec::new();
    }

    // Edge points in scan order.
    let mut points: Vec<(f32, f32)> = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if edges.get(x, y) != 0 {
                points.push((x as f32, y as f32));
            }
        }
    }
    if (points.len() as u32) < params.threshold {
        return Vec::new();
    }

    let mut acc = Accumulator::new(w, h, params);
    let mut present = vec![true; points.len()];
    let mut voted = vec![false; points.len()];
    let mut segments = Vec::new();

    for seed in 0..points.len() {
        if !present[seed] {
            continue;
        }
        let (sx, sy) = points[seed];
        acc.vote(sx, sy, 1);
        voted[seed] = true;

        let (votes, theta_idx, rho_idx) = acc.best_bin_for(sx, sy);
        if votes < params.threshold as i32 {
            continue;
        }

        let cos_t = acc.cos_table[theta_idx];
        let sin_t = acc.sin_table[theta_idx];
        let rho = rho_idx as f32 * acc.rho_res - acc.rho_offset;

        // Claim every remaining point inside the corridor around the line.
        let mut support: Vec<(f32, usize)> = Vec::new();
        for (idx, &(x, y)) in points.iter().enumerate() {
            if !present[idx] {
                continue;
            }
            let dist = (x * cos_t + y * sin_t - rho).abs();
            if dist <= SUPPORT_HALF_WIDTH {
                let proj = -x * sin_t + y * cos_t;
                support.push((proj, idx));
            }
        }
        support.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        // Run containing the seed, split at gaps larger than max_gap.
        let seed_proj = -sx * sin_t + sy * cos_t;
        let seed_pos = support
            .iter()
            .position(|&(_, idx)| idx == seed)
            .expect("seed inside its own corridor");
        let mut run_start = seed_pos;
        while run_start > 0 && support[run_start].0 - support[run_start - 1].0 <= params.max_gap {
            run_start -= 1;
        }
        let mut run_end = seed_pos;
        while run_end + 1 < support.len()
            && support[run_end + 1].0 - support[run_end].0 <= params.max_gap
        {
            run_end += 1;
        }
        debug_assert!(support[run_start].0 <= seed_proj && seed_proj <= support[run_end].0);

        // Remove the run and retract its votes, whether or not it is long
        // enough to be reported.
        for &(_, idx) in &support[run_start..=run_end] {
            present[idx] = false;
            if voted[idx] {
                acc.vote(points[idx].0, points[idx].1, -1);
                voted[idx] = false;
            }
        }

        let span = support[run_end].0 - support[run_start].0;
        if span >= params.min_length {
            let (_, first) = support[run_start];
            let (_, last) = support[run_end];
            let p0 = [points[first].0, points[first].1];
            let p1 = [points[last].0, points[last].1];
            let count = (run_end - run_start + 1) as u32;
            segments.push(LaneSegment::new(p0, p1, count));
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::GrayBuffer;

    fn edge_line(w: usize, h: usize, p0: (i32, i32), p1: (i32, i32)) -> GrayBuffer {
        let mut edges = GrayBuffer::new(w, h);
        let steps = (p1.0 - p0.0).abs().max((p1.1 - p0.1).abs()).max(1);
        for s in 0..=steps {
            let t = s as f32 / steps as f32;
            let x = (p0.0 as f32 + t * (p1.0 - p0.0) as f32).round() as usize;
            let y = (p0.1 as f32 + t * (p1.1 - p0.1) as f32).round() as usize;
            edges.set(x, y, 255);
        }
        edges
    }

    #[test]
    fn empty_edge_map_yields_no_segments() {
        let edges = GrayBuffer::new(320, 240);
        let segments = detect_segments(edges.as_view(), &HoughParams::default());
        assert!(segments.is_empty());
    }

    #[test]
    fn horizontal_edge_row_yields_one_segment() {
        let edges = edge_line(320, 240, (20, 120), (300, 120));
        let segments = detect_segments(edges.as_view(), &HoughParams::default());
        assert_eq!(segments.len(), 1, "expected one segment, got {segments:?}");
        let seg = &segments[0];
        assert!(seg.length() > 250.0, "short segment: {}", seg.length());
        assert!((seg.p0[1] - 120.0).abs() < 2.0);
        assert!((seg.p1[1] - 120.0).abs() < 2.0);
    }

    #[test]
    fn diagonal_edge_chain_yields_one_collinear_segment() {
        let edges = edge_line(320, 240, (30, 200), (250, 40));
        let segments = detect_segments(edges.as_view(), &HoughParams::default());
        assert_eq!(segments.len(), 1, "expected one segment, got {segments:?}");
        let line = segments[0].line();
        for &(x, y) in &[(30.0f32, 200.0f32), (250.0, 40.0)] {
            let dist = (line.x * x + line.y * y + line.z).abs();
            assert!(dist < 3.0, "endpoint off the ideal line by {dist}");
        }
    }

    #[test]
    fn sparse_points_below_threshold_are_ignored() {
        let mut edges = GrayBuffer::new(320, 240);
        for i in 0..40 {
            edges.set(10 + i * 7, 120, 255);
        }
        let segments = detect_segments(edges.as_view(), &HoughParams::default());
        assert!(
            segments.is_empty(),
            "40 votes must stay below the 50-vote threshold"
        );
    }

    #[test]
    fn gap_larger_than_max_gap_splits_the_run() {
        // Two collinear dashes separated by 80 px; each is long enough on
        // its own, so the run split must produce two segments.
        let mut edges = GrayBuffer::new(400, 240);
        for x in 20..120 {
            edges.set(x, 100, 255);
        }
        for x in 200..300 {
            edges.set(x, 100, 255);
        }
        let segments = detect_segments(edges.as_view(), &HoughParams::default());
        assert_eq!(segments.len(), 2, "expected two segments, got {segments:?}");
        for seg in &segments {
            assert!(seg.length() >= 90.0 && seg.length() <= 110.0);
        }
    }

    #[test]
    fn thick_stroke_flanks_yield_one_segment_at_the_default_threshold() {
        // Two parallel point chains 3.4 px apart with rounding jitter, as
        // edge extraction produces for the two gradient flanks of a thick
        // stroke. Both must fire at the stock 50-vote threshold and claim
        // as a single segment.
        let mut edges = GrayBuffer::new(320, 240);
        let (dx, dy) = (220.0f32, 160.0f32);
        let len = (dx * dx + dy * dy).sqrt();
        let (nx, ny) = (-dy / len, dx / len);
        for side in [-1.7f32, 1.7] {
            for i in 0..=250 {
                let t = i as f32 / 250.0;
                let x = (40.0 + t * dx + side * nx).round() as usize;
                let y = (30.0 + t * dy + side * ny).round() as usize;
                edges.set(x, y, 255);
            }
        }
        let segments = detect_segments(edges.as_view(), &HoughParams::default());
        assert_eq!(segments.len(), 1, "expected one segment, got {segments:?}");
        assert!(
            segments[0].length() > 200.0,
            "short segment: {}",
            segments[0].length()
        );
    }

    #[test]
    fn detection_is_deterministic() {
        let edges = edge_line(320, 240, (30, 200), (250, 40));
        let a = detect_segments(edges.as_view(), &HoughParams::default());
        let b = detect_segments(edges.as_view(), &HoughParams::default());
        assert_eq!(a.len(), b.len());
        for (sa, sb) in a.iter().zip(&b) {
            assert_eq!(sa.p0, sb.p0);
            assert_eq!(sa.p1, sb.p1);
        }
    }
}
