//! 8-bit single-channel buffers: borrowed view plus owned binary buffer.
//!
//! `GrayBuffer` backs the binary (0/255) edge map and the region-of-interest
//! mask; `GrayView` is the read-only borrow handed to consumers.

/// Borrowed 8-bit grayscale view with explicit stride.
#[derive(Clone, Debug)]
pub struct GrayView<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> GrayView<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }
}

impl<'a> crate::image::traits::ImageView for GrayView<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

/// Owned 8-bit single-channel buffer (stride == width).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GrayBuffer {
    w: usize,
    h: usize,
    data: Vec<u8>,
}

impl GrayBuffer {
    /// Construct a zero-filled buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h],
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.w
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.h
    }

    /// Resize in place and zero the contents.
    pub fn reset(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        self.data.clear();
        self.data.resize(w * h, 0);
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.w + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        self.data[y * self.w + x] = v;
    }

    /// Raw bytes in row-major order.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw bytes in row-major order.
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Number of non-zero pixels.
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Borrow as a read-only `GrayView`.
    pub fn as_view(&self) -> GrayView<'_> {
        GrayView {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: &self.data,
        }
    }
}
