//! Overlay rendering: draw detected segments onto the color frame.
//!
//! Bresenham rasterization with thickness achieved by stacking parallel
//! lines offset along the axis perpendicular to the dominant direction.
//! Drawing an empty segment list is a no-op.
use crate::hough::LaneSegment;
use crate::image::RgbFrame;
use serde::{Deserialize, Serialize};

/// Overlay color and stroke width.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverlayParams {
    /// RGB stroke color.
    pub color: [u8; 3],
    /// Stroke width in pixels (>= 1).
    pub thickness: u32,
}

impl Default for OverlayParams {
    fn default() -> Self {
        Self {
            color: [0, 255, 0],
            thickness: 2,
        }
    }
}

/// Draw every segment onto the frame.
pub fn draw_segments(frame: &mut RgbFrame, segments: &[LaneSegment], params: &OverlayParams) {
    for seg in segments {
        draw_segment(frame, seg, params);
    }
}

/// Draw one segment onto the frame.
pub fn draw_segment(frame: &mut RgbFrame, seg: &LaneSegment, params: &OverlayParams) {
    let x0 = seg.p0[0].round() as i64;
    let y0 = seg.p0[1].round() as i64;
    let x1 = seg.p1[0].round() as i64;
    let y1 = seg.p1[1].round() as i64;

    let thickness = params.thickness.max(1) as i64;
    let shallow = (x1 - x0).abs() >= (y1 - y0).abs();
    for k in 0..thickness {
        let off = k - thickness / 2;
        if shallow {
            draw_line(frame, x0, y0 + off, x1, y1 + off, params.color);
        } else {
            draw_line(frame, x0 + off, y0, x1 + off, y1, params.color);
        }
    }
}

fn draw_line(frame: &mut RgbFrame, x0: i64, y0: i64, x1: i64, y1: i64, color: [u8; 3]) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        plot(frame, x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

#[inline]
fn plot(frame: &mut RgbFrame, x: i64, y: i64, color: [u8; 3]) {
    if x >= 0 && y >= 0 && (x as usize) < frame.width() && (y as usize) < frame.height() {
        frame.put_pixel(x as usize, y as usize, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_segment_paints_the_requested_color() {
        let mut frame = RgbFrame::new(64, 64);
        let seg = LaneSegment::new([10.0, 32.0], [50.0, 32.0], 40);
        draw_segment(&mut frame, &seg, &OverlayParams::default());
        for x in 10..=50 {
            assert_eq!(frame.get_pixel(x, 32), [0, 255, 0]);
            assert_eq!(frame.get_pixel(x, 31), [0, 255, 0], "thickness 2 covers y-1");
        }
        assert_eq!(frame.get_pixel(5, 32), [0, 0, 0]);
    }

    #[test]
    fn endpoints_outside_the_frame_are_clipped() {
        let mut frame = RgbFrame::new(32, 32);
        let seg = LaneSegment::new([-10.0, 16.0], [40.0, 16.0], 50);
        draw_segment(&mut frame, &seg, &OverlayParams::default());
        assert_eq!(frame.get_pixel(0, 16), [0, 255, 0]);
        assert_eq!(frame.get_pixel(31, 16), [0, 255, 0]);
    }

    #[test]
    fn empty_segment_list_leaves_the_frame_untouched() {
        let mut frame = RgbFrame::new(16, 16);
        let before = frame.clone();
        draw_segments(&mut frame, &[], &OverlayParams::default());
        assert_eq!(frame, before);
    }
}
