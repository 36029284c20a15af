//! JSON configuration for the `lane_overlay` tool.
use crate::detector::LaneParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    /// Where the frames come from.
    pub input: InputConfig,
    /// Directory receiving annotated frames and the JSON summary.
    pub output_dir: PathBuf,
    /// Also write the binary edge map of each frame, for debugging.
    #[serde(default)]
    pub save_edge_maps: bool,
    /// Pipeline parameter overrides; omitted sections keep their defaults.
    #[serde(default)]
    pub params: LaneParams,
}

/// Frame source: an explicit ordered list, or a directory scanned in sorted
/// order. When both are given the explicit list wins.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputConfig {
    pub frames: Vec<PathBuf>,
    pub dir: Option<PathBuf>,
}

impl InputConfig {
    /// Resolve to the ordered list of frame paths.
    pub fn resolve(&self) -> Result<Vec<PathBuf>, String> {
        if !self.frames.is_empty() {
            return Ok(self.frames.clone());
        }
        let dir = self
            .dir
            .as_ref()
            .ok_or("input requires either `frames` or `dir`")?;
        let entries = fs::read_dir(dir)
            .map_err(|e| format!("Failed to read input dir {}: {e}", dir.display()))?;
        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file())
            .collect();
        paths.sort();
        Ok(paths)
    }
}

pub fn load_config(path: &Path) -> Result<ToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
