//! Owned interleaved 8-bit RGB frame.
//!
//! The frame is the unit the pipeline operates on: it is read for the
//! grayscale reduction and mutated by the overlay stage. Nothing is retained
//! between frames.
use super::ImageF32;

const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Owned RGB frame, 3 bytes per pixel, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbFrame {
    w: usize,
    h: usize,
    data: Vec<u8>,
}

impl RgbFrame {
    /// Construct an all-black frame of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h * 3],
        }
    }

    /// Wrap raw interleaved bytes; `data.len()` must equal `w * h * 3`.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Self {
        assert_eq!(data.len(), w * h * 3, "buffer length must match dimensions");
        Self { w, h, data }
    }

    /// Frame width in pixels
    pub fn width(&self) -> usize {
        self.w
    }

    /// Frame height in pixels
    pub fn height(&self) -> usize {
        self.h
    }

    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.w + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    pub fn put_pixel(&mut self, x: usize, y: usize, px: [u8; 3]) {
        let i = (y * self.w + x) * 3;
        self.data[i..i + 3].copy_from_slice(&px);
    }

    /// Raw interleaved bytes in row-major order.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Luminance-weighted grayscale reduction into `out` (0..255 units).
    pub fn to_luma_f32(&self, out: &mut ImageF32) {
        out.reset(self.w, self.h);
        for y in 0..self.h {
            let src = &self.data[y * self.w * 3..(y + 1) * self.w * 3];
            let start = y * out.stride;
            let dst = &mut out.data[start..start + self.w];
            for (x, px) in src.chunks_exact(3).enumerate() {
                dst[x] = LUMA_R * px[0] as f32 + LUMA_G * px[1] as f32 + LUMA_B * px[2] as f32;
            }
        }
    }
}
