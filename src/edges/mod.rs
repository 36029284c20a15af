//! Edge extraction: gradients, non-maximum suppression and hysteresis.
//!
//! The stages compose into a Canny-style detector producing a binary (0/255)
//! edge map:
//!
//! - Gradient computation (Sobel) returning `gx`, `gy` and magnitude.
//! - Direction-aligned non-maximum suppression thinning the magnitude grid.
//! - Double-threshold hysteresis keeping weak edges only when connected to a
//!   strong one.
//!
//! Borders are handled by clamping indices in the gradient pass; NMS ignores
//! the outermost 1-pixel frame to keep neighbor lookups in bounds.

pub mod canny;
pub mod grad;
pub mod hysteresis;
pub mod nms;

pub use canny::{detect_edges, detect_edges_into, CannyParams};
pub use grad::{sobel_gradients, Grad};
pub use hysteresis::link_edges;
pub use nms::suppress_nonmaxima;
