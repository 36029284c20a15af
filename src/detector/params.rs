//! Parameter types configuring the pipeline stages.
//!
//! Defaults reproduce the reference road-video setup: 7×7 Gaussian blur,
//! Canny thresholds 50/150, the lower-road hexagon, Hough accumulator
//! threshold 50 with 10 px minimum length and 50 px gap merging, and a green
//! 2 px overlay stroke.
use crate::blur::BlurParams;
use crate::draw::OverlayParams;
use crate::edges::CannyParams;
use crate::hough::HoughParams;
use crate::roi::RoiPolygon;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters controlling the per-frame pipeline.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LaneParams {
    /// Separable Gaussian smoothing applied before edge detection.
    pub blur: BlurParams,
    /// Edge detector thresholds.
    pub canny: CannyParams,
    /// Region-of-interest polygon in normalized form.
    pub roi: RoiPolygon,
    /// Accumulator and segment-extraction parameters.
    pub hough: HoughParams,
    /// Overlay stroke color and width.
    pub overlay: OverlayParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_the_reference_constants() {
        let params = LaneParams::default();
        assert_eq!(params.blur.taps.len(), 7);
        assert_eq!(params.canny.low_threshold, 50.0);
        assert_eq!(params.canny.high_threshold, 150.0);
        assert_eq!(params.roi.vertices.len(), 6);
        assert_eq!(params.hough.threshold, 50);
        assert_eq!(params.hough.min_length, 10.0);
        assert_eq!(params.hough.max_gap, 50.0);
        assert_eq!(params.overlay.color, [0, 255, 0]);
        assert_eq!(params.overlay.thickness, 2);
    }
}
