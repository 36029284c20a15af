//! Detector pipeline driving the lane overlay end-to-end.
//!
//! The [`LaneDetector`] exposes a simple API: feed a color frame and get the
//! detected segments with a stage timing breakdown, with the overlay drawn
//! onto the frame in place.
//!
//! Typical usage:
//! ```no_run
//! use lane_detector::{LaneDetector, LaneParams};
//! use lane_detector::image::RgbFrame;
//!
//! # fn example(mut frame: RgbFrame) {
//! let mut detector = LaneDetector::new(LaneParams::default());
//! let result = detector.process(&mut frame);
//! println!("segments: {}", result.segments.len());
//! # }
//! ```
use super::params::LaneParams;
use super::workspace::DetectorWorkspace;
use crate::blur::gaussian_blur_into;
use crate::draw::draw_segments;
use crate::edges::detect_edges_into;
use crate::hough::detect_segments;
use crate::image::{GrayBuffer, RgbFrame};
use crate::types::{LaneResult, StageTiming};
use log::debug;
use std::time::Instant;

/// Lane detector orchestrating grayscale reduction, blur, edge extraction,
/// region masking, Hough segment detection and overlay drawing.
pub struct LaneDetector {
    params: LaneParams,
    workspace: DetectorWorkspace,
}

impl LaneDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: LaneParams) -> Self {
        Self {
            params,
            workspace: DetectorWorkspace::new(),
        }
    }

    /// Parameters the detector was built with.
    pub fn params(&self) -> &LaneParams {
        &self.params
    }

    /// Replace the parameters, invalidating the cached region mask.
    pub fn set_params(&mut self, params: LaneParams) {
        self.params = params;
        self.workspace.invalidate_mask();
    }

    /// Binary edge map of the most recently processed frame, if any.
    pub fn last_edge_map(&self) -> Option<&GrayBuffer> {
        self.workspace.last_edge_map()
    }

    /// Run the pipeline on one frame, drawing detected segments in place.
    ///
    /// Stateless per frame: the same input frame always yields the same
    /// segments. A frame with no detectable lines is left unmodified.
    pub fn process(&mut self, frame: &mut RgbFrame) -> LaneResult {
        let (width, height) = (frame.width(), frame.height());
        debug!("LaneDetector::process start w={} h={}", width, height);
        let total_start = Instant::now();
        let mut timing = StageTiming::default();

        let gray_start = Instant::now();
        frame.to_luma_f32(&mut self.workspace.luma);
        timing.gray_ms = gray_start.elapsed().as_secs_f64() * 1000.0;

        let blur_start = Instant::now();
        gaussian_blur_into(
            &self.workspace.luma,
            &self.params.blur.taps,
            &mut self.workspace.blurred,
        );
        timing.blur_ms = blur_start.elapsed().as_secs_f64() * 1000.0;

        let canny_start = Instant::now();
        detect_edges_into(
            &self.workspace.blurred,
            &self.params.canny,
            &mut self.workspace.thin,
            &mut self.workspace.edge_map,
        );
        timing.canny_ms = canny_start.elapsed().as_secs_f64() * 1000.0;
        let edge_pixels = self.workspace.edge_map.count_nonzero();

        let mask_start = Instant::now();
        self.workspace.apply_roi(&self.params.roi, width, height);
        timing.mask_ms = mask_start.elapsed().as_secs_f64() * 1000.0;
        let masked_edge_pixels = self.workspace.edge_map.count_nonzero();

        let hough_start = Instant::now();
        let segments = detect_segments(self.workspace.edge_map.as_view(), &self.params.hough);
        timing.hough_ms = hough_start.elapsed().as_secs_f64() * 1000.0;

        let draw_start = Instant::now();
        draw_segments(frame, &segments, &self.params.overlay);
        timing.draw_ms = draw_start.elapsed().as_secs_f64() * 1000.0;

        let latency_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "LaneDetector::process done segments={} edges={} masked={} latency_ms={:.3}",
            segments.len(),
            edge_pixels,
            masked_edge_pixels,
            latency_ms
        );

        LaneResult {
            segments,
            edge_pixels,
            masked_edge_pixels,
            latency_ms,
            timing,
        }
    }
}
