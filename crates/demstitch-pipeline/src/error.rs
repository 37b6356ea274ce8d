//! Error types for the pipeline crate.

use thiserror::Error;

/// Errors that can occur while running the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A tile artifact could not be fetched from the store.
    #[error(transparent)]
    Fetch(#[from] demstitch_store::FetchError),

    /// A tile failed to parse or decode, or the grids were incompatible.
    #[error(transparent)]
    Raster(#[from] demstitch_raster::RasterError),

    /// The configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be deserialized.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Export serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<demstitch_raster::FormatError> for PipelineError {
    fn from(err: demstitch_raster::FormatError) -> Self {
        PipelineError::Raster(err.into())
    }
}
