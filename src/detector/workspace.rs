//! Per-frame detector workspace.
//!
//! The detector reuses its numeric buffers across frames to avoid repeated
//! allocations in hot paths. The rasterized region mask is cached keyed on
//! the frame dimensions: the resolved polygon is a pure function of (w, h),
//! so the cache never changes observable behavior.
use crate::image::{GrayBuffer, ImageF32};
use crate::roi::RoiPolygon;

/// Workspace storing reusable stage buffers.
pub struct DetectorWorkspace {
    pub luma: ImageF32,
    pub blurred: ImageF32,
    pub thin: ImageF32,
    pub edge_map: GrayBuffer,
    mask: GrayBuffer,
    mask_dims: Option<(usize, usize)>,
}

impl DetectorWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the current edge map to the region of interest, rasterizing
    /// the mask on first use for these dimensions.
    pub fn apply_roi(&mut self, roi: &RoiPolygon, w: usize, h: usize) {
        if self.mask_dims != Some((w, h)) {
            roi.rasterize(w, h, &mut self.mask);
            self.mask_dims = Some((w, h));
        }
        crate::roi::apply_mask(&mut self.edge_map, &self.mask);
    }

    /// Drop the cached mask (used when the polygon itself changes).
    pub fn invalidate_mask(&mut self) {
        self.mask_dims = None;
    }

    /// Edge map produced by the most recent frame, if any.
    pub fn last_edge_map(&self) -> Option<&GrayBuffer> {
        (self.edge_map.width() > 0).then_some(&self.edge_map)
    }
}

impl Default for DetectorWorkspace {
    fn default() -> Self {
        Self {
            luma: ImageF32::new(0, 0),
            blurred: ImageF32::new(0, 0),
            thin: ImageF32::new(0, 0),
            edge_map: GrayBuffer::new(0, 0),
            mask: GrayBuffer::new(0, 0),
            mask_dims: None,
        }
    }
}
