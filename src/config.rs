//! Runtime configuration for the demo binary.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::engine::WedgeParams;
use crate::types::JointOrientation;

#[derive(Clone, Deserialize)]
pub struct RuntimeConfig {
    pub joints: [JointOrientation; 3],
    pub friction_angle_deg: f64,
    #[serde(default)]
    pub params: Option<WedgeParams>,
    /// Where to write the full serialized report, if anywhere.
    #[serde(default)]
    pub json_out: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}
