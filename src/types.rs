//! Result types returned by the detector.
use crate::hough::LaneSegment;
use serde::Serialize;

/// Wall-clock breakdown of one `process` call, in milliseconds.
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub gray_ms: f64,
    pub blur_ms: f64,
    pub canny_ms: f64,
    pub mask_ms: f64,
    pub hough_ms: f64,
    pub draw_ms: f64,
}

/// Per-frame detection outcome.
///
/// `segments` may be empty; the frame then passes through unmodified.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneResult {
    pub segments: Vec<LaneSegment>,
    /// Edge pixels before region masking.
    pub edge_pixels: usize,
    /// Edge pixels surviving the region mask.
    pub masked_edge_pixels: usize,
    pub latency_ms: f64,
    pub timing: StageTiming,
}
