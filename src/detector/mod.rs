//! Lane detector orchestrating the per-frame overlay pipeline.
//!
//! Overview
//! - Reduces the color frame to grayscale and smooths it with a separable
//!   Gaussian.
//! - Extracts a binary edge map (Sobel → NMS → hysteresis).
//! - Restricts the edge map to the region-of-interest polygon.
//! - Runs the probabilistic Hough transform and draws the resulting segments
//!   back onto the original frame.
//!
//! Control flow is strictly linear per frame; the detector carries no state
//! between frames beyond reusable buffers and the rasterized mask for a
//! constant frame size.
//!
//! Modules
//! - [`params`] – configuration types aggregating the stage knobs.
//! - `pipeline` – the main [`LaneDetector`] implementation.
//! - `workspace` – reusable buffers that amortise allocations across frames.

pub mod params;
mod pipeline;
mod workspace;

pub use params::LaneParams;
pub use pipeline::LaneDetector;
pub use workspace::DetectorWorkspace;
