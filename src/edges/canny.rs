//! Canny-style edge detector: Sobel gradients → NMS → hysteresis.
use super::grad::sobel_gradients;
use super::hysteresis::link_edges;
use super::nms::suppress_nonmaxima;
use crate::image::{GrayBuffer, ImageF32};
use serde::{Deserialize, Serialize};

/// Edge detector thresholds in 8-bit Sobel magnitude units.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CannyParams {
    /// Weak edges below this magnitude are always discarded.
    pub low_threshold: f32,
    /// Responses at or above this magnitude seed edge linking.
    pub high_threshold: f32,
}

impl Default for CannyParams {
    fn default() -> Self {
        Self {
            low_threshold: 50.0,
            high_threshold: 150.0,
        }
    }
}

/// Run the full detector into an existing edge map buffer.
///
/// `thin` is a scratch buffer reused across calls to avoid reallocation.
pub fn detect_edges_into(
    l: &ImageF32,
    params: &CannyParams,
    thin: &mut ImageF32,
    edge_map: &mut GrayBuffer,
) {
    let grad = sobel_gradients(l);
    suppress_nonmaxima(&grad, params.low_threshold, thin);
    link_edges(thin, params.low_threshold, params.high_threshold, edge_map);
}

/// Convenience wrapper allocating the output buffers.
pub fn detect_edges(l: &ImageF32, params: &CannyParams) -> GrayBuffer {
    let mut thin = ImageF32::new(0, 0);
    let mut edge_map = GrayBuffer::new(0, 0);
    detect_edges_into(l, params, &mut thin, &mut edge_map);
    edge_map
}
