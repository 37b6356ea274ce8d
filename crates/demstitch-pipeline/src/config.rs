//! Pipeline configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use demstitch_raster::OverlapPolicy;
use demstitch_store::TileCode;

use crate::{PipelineError, Result};

/// Configuration for one pipeline run.
///
/// ```yaml
/// tiles: [a, b, e, f]
/// block_factor: 10
/// valid_floor: 0.0
/// overlap: last-wins
/// ```
///
/// Only `tiles` is required; the defaults assemble at full resolution with
/// no validity floor and last-writer-wins overlap handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Tiles to assemble, in placement order.
    pub tiles: Vec<TileCode>,
    /// Block-averaging factor (1 = no downsampling).
    #[serde(default = "default_block_factor")]
    pub block_factor: usize,
    /// Optional elevation floor below which samples are treated as missing.
    #[serde(default)]
    pub valid_floor: Option<f32>,
    /// What to do when assembled tiles overlap.
    #[serde(default)]
    pub overlap: OverlapPolicy,
}

fn default_block_factor() -> usize {
    1
}

impl PipelineConfig {
    /// Configuration that assembles the given tiles at full resolution.
    pub fn new(tiles: Vec<TileCode>) -> Self {
        Self {
            tiles,
            block_factor: default_block_factor(),
            valid_floor: None,
            overlap: OverlapPolicy::default(),
        }
    }

    /// Load configuration from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: PipelineConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_yaml_str(&fs::read_to_string(path)?)
    }

    /// Check the configuration for values no run can use.
    pub fn validate(&self) -> Result<()> {
        if self.tiles.is_empty() {
            return Err(PipelineError::Config("no tiles listed".to_string()));
        }
        if self.block_factor == 0 {
            return Err(PipelineError::Config(
                "block_factor must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
