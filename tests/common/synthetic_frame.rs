use lane_detector::image::RgbFrame;

/// All-black frame of the given size.
pub fn black_frame(width: usize, height: usize) -> RgbFrame {
    RgbFrame::new(width, height)
}

/// Frame whose top `rows` rows are white and the rest black.
pub fn top_band_frame(width: usize, height: usize, rows: usize) -> RgbFrame {
    let mut frame = RgbFrame::new(width, height);
    for y in 0..rows.min(height) {
        for x in 0..width {
            frame.put_pixel(x, y, [255, 255, 255]);
        }
    }
    frame
}

/// Draw a white line of the given vertical thickness onto the frame.
pub fn draw_white_line(frame: &mut RgbFrame, p0: (i32, i32), p1: (i32, i32), thickness: i32) {
    let steps = (p1.0 - p0.0).abs().max((p1.1 - p0.1).abs()).max(1);
    let half = thickness / 2;
    for s in 0..=steps {
        let t = s as f32 / steps as f32;
        let x = (p0.0 as f32 + t * (p1.0 - p0.0) as f32).round() as i32;
        let y = (p0.1 as f32 + t * (p1.1 - p0.1) as f32).round() as i32;
        for dy in -half..=half {
            let yy = y + dy;
            if x >= 0 && yy >= 0 && (x as usize) < frame.width() && (yy as usize) < frame.height() {
                frame.put_pixel(x as usize, yy as usize, [255, 255, 255]);
            }
        }
    }
}

/// Perpendicular distance of `(x, y)` from the infinite line through `p0`
/// and `p1`.
pub fn distance_to_line(p0: (f32, f32), p1: (f32, f32), x: f32, y: f32) -> f32 {
    let a = p1.1 - p0.1;
    let b = p0.0 - p1.0;
    let c = p1.0 * p0.1 - p0.0 * p1.1;
    (a * x + b * y + c).abs() / (a * a + b * b).sqrt()
}
