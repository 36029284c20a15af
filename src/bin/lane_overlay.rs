use lane_detector::config::{load_config, ToolConfig};
use lane_detector::image::io::{load_rgb_frame, save_gray_buffer, save_rgb_frame, write_json_file};
use lane_detector::{LaneDetector, LaneResult};
use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let frames = config.input.resolve()?;
    if frames.is_empty() {
        return Err("No input frames found".to_string());
    }

    let mut detector = LaneDetector::new(config.params.clone());
    let mut summaries = Vec::with_capacity(frames.len());

    for (index, path) in frames.iter().enumerate() {
        let mut frame = load_rgb_frame(path)?;
        let result = detector.process(&mut frame);

        let annotated = output_path(&config, path, index);
        save_rgb_frame(&frame, &annotated)?;
        if config.save_edge_maps {
            if let Some(edge_map) = detector.last_edge_map() {
                save_gray_buffer(edge_map, &edge_map_path(&config, path, index))?;
            }
        }

        println!(
            "{}: {} segment(s) in {:.2} ms -> {}",
            path.display(),
            result.segments.len(),
            result.latency_ms,
            annotated.display()
        );
        summaries.push(FrameSummary::new(path, &frame, result));
    }

    let summary_path = config.output_dir.join("segments.json");
    let run_summary = RunSummary {
        frame_count: summaries.len(),
        frames: summaries,
    };
    write_json_file(&summary_path, &run_summary)?;
    println!(
        "Processed {} frame(s); summary written to {}",
        run_summary.frame_count,
        summary_path.display()
    );

    Ok(())
}

fn output_path(config: &ToolConfig, input: &Path, index: usize) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| format!("frame_{index:05}"));
    config.output_dir.join(format!("{stem}_lanes.png"))
}

fn edge_map_path(config: &ToolConfig, input: &Path, index: usize) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| format!("frame_{index:05}"));
    config.output_dir.join(format!("{stem}_edges.png"))
}

fn usage() -> String {
    "Usage: lane_overlay <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunSummary {
    frame_count: usize,
    frames: Vec<FrameSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FrameSummary {
    frame: String,
    width: usize,
    height: usize,
    segment_count: usize,
    #[serde(flatten)]
    result: LaneResult,
}

impl FrameSummary {
    fn new(path: &Path, frame: &lane_detector::image::RgbFrame, result: LaneResult) -> Self {
        Self {
            frame: path.display().to_string(),
            width: frame.width(),
            height: frame.height(),
            segment_count: result.segments.len(),
            result,
        }
    }
}
