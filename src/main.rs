use lane_detector::image::RgbFrame;
use lane_detector::{LaneDetector, LaneParams};

fn main() {
    // Demo stub: creates a black frame and runs the detector once
    let mut frame = RgbFrame::new(640, 480);

    let mut detector = LaneDetector::new(LaneParams::default());
    let result = detector.process(&mut frame);
    println!(
        "segments={} latency_ms={:.3}",
        result.segments.len(),
        result.latency_ms
    );
}
