//! JSON runtime configuration for demo binaries.
use crate::blocks::BlockOptions;
use crate::prep::PrepParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Where to write the JSON prep report, if anywhere.
    pub json_out: Option<PathBuf>,
}

#[derive(Clone, Default, Deserialize)]
pub struct RuntimeConfig {
    /// Which object of a batched input to prepare (zero based).
    #[serde(default)]
    pub object_index: usize,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub prep_params: PrepParams,
    #[serde(default)]
    pub block_options: BlockOptions,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}
