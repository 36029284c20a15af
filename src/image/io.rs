//! I/O helpers for frames, grayscale buffers and JSON.
//!
//! - `load_rgb_frame`: read a PNG/JPEG into an owned RGB frame.
//! - `save_rgb_frame`: write an `RgbFrame` to a PNG.
//! - `save_gray_buffer`: write a binary edge map / mask to a grayscale PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{GrayBuffer, RgbFrame};
use image::{DynamicImage, ImageBuffer, Luma, Rgb};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to an interleaved 8-bit RGB frame.
pub fn load_rgb_frame(path: &Path) -> Result<RgbFrame, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(RgbFrame::from_raw(width, height, img.into_raw()))
}

/// Save an RGB frame to a PNG.
pub fn save_rgb_frame(frame: &RgbFrame, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_raw(
        frame.width() as u32,
        frame.height() as u32,
        frame.bytes().to_vec(),
    )
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageRgb8(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save an 8-bit single-channel buffer to a grayscale PNG.
pub fn save_gray_buffer(buffer: &GrayBuffer, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.bytes().to_vec(),
    )
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma8(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
