//! # demstitch-pipeline
//!
//! End-to-end assembly of a continental elevation raster from
//! single-letter-coded tiles: fetch each tile's header and sample buffer
//! from a [`TileStore`], decode, mosaic the grids, block-average the
//! result, and wrap it as a [`HeightField`] for rendering or export.
//!
//! The pipeline is sequential and blocking throughout; each stage owns its
//! output until handing it to the next, and any stage failure aborts the
//! run.
//!
//! ```no_run
//! use demstitch_pipeline::{run, PipelineConfig};
//! use demstitch_store::DirStore;
//!
//! let store = DirStore::new("./globe_data");
//! let config = PipelineConfig::from_yaml_file("pipeline.yaml")?;
//! let field = run(&store, &config)?;
//! field.to_json_writer(std::io::stdout())?;
//! # Ok::<(), demstitch_pipeline::PipelineError>(())
//! ```

mod config;
mod error;
mod export;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use export::HeightField;

use tracing::{debug, info};

use demstitch_raster::{mosaic, Grid, Header, OverlapPolicy, ResampleOptions};
use demstitch_store::{TileCode, TileStore};

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Load one tile: fetch its header and buffer, parse, decode.
pub fn load_tile<S: TileStore>(store: &S, code: TileCode) -> Result<Grid> {
    let header_text = store.fetch_header(code)?;
    let header = Header::parse(&header_text)?;
    let buf = store.fetch_tile(code)?;
    let grid = Grid::decode_i16_le(&header, &buf)?;
    debug!(%code, rows = grid.rows(), cols = grid.cols(), "decoded tile");
    Ok(grid)
}

/// Load every tile and compose the grids into one mosaic.
pub fn assemble<S: TileStore>(
    store: &S,
    codes: &[TileCode],
    policy: OverlapPolicy,
) -> Result<Grid> {
    let mut grids = Vec::with_capacity(codes.len());
    for &code in codes {
        grids.push(load_tile(store, code)?);
    }
    let merged = mosaic(&grids, policy)?;
    info!(
        tiles = codes.len(),
        rows = merged.rows(),
        cols = merged.cols(),
        "assembled mosaic"
    );
    Ok(merged)
}

/// Run the full pipeline: assemble, downsample, wrap for export.
pub fn run<S: TileStore>(store: &S, config: &PipelineConfig) -> Result<HeightField> {
    config.validate()?;

    let merged = assemble(store, &config.tiles, config.overlap)?;
    let resampled = merged.block_average(&ResampleOptions {
        factor: config.block_factor,
        valid_floor: config.valid_floor,
    })?;
    info!(
        rows = resampled.rows(),
        cols = resampled.cols(),
        factor = config.block_factor,
        "resampled mosaic"
    );

    Ok(HeightField::from_grid(&resampled))
}
