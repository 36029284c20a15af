#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod image;
pub mod types;

// Stage modules – public for tooling and tests, but considered internals.
pub mod blur;
pub mod draw;
pub mod edges;
pub mod hough;
pub mod roi;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{DetectorWorkspace, LaneDetector, LaneParams};
pub use crate::types::{LaneResult, StageTiming};

// Segment type and knobs that tool configs commonly touch.
pub use crate::hough::{HoughParams, LaneSegment};
pub use crate::roi::{RoiPolygon, RoiVertex};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use lane_detector::prelude::*;
///
/// # fn main() {
/// let mut frame = RgbFrame::new(640, 480);
/// let mut detector = LaneDetector::new(LaneParams::default());
/// let result = detector.process(&mut frame);
/// println!(
///     "segments={} latency_ms={:.3}",
///     result.segments.len(),
///     result.latency_ms
/// );
/// # }
/// ```
pub mod prelude {
    pub use crate::image::RgbFrame;
    pub use crate::{LaneDetector, LaneParams, LaneResult};
}
