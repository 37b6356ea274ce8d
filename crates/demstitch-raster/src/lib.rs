//! # demstitch-raster
//!
//! Elevation raster model for stitched tile datasets: header parsing,
//! binary tile decoding, mosaic composition, and block-average resampling.
//!
//! ## Overview
//!
//! A tile arrives as two artifacts: a text header naming the grid
//! dimensions and spatial extent, and a headerless buffer of 16-bit
//! little-endian signed elevation samples. [`Header::parse`] validates the
//! header, [`Grid::decode_i16_le`] turns the buffer into a georeferenced
//! [`Grid`], [`mosaic`] composes adjacent grids on a shared coordinate
//! frame, and [`Grid::block_average`] downsamples the result for rendering.
//!
//! Cells with no measurement are `None` throughout; sentinel values exist
//! only on the wire.
//!
//! ## Example
//!
//! ```
//! use demstitch_raster::{Grid, Header, ResampleOptions};
//!
//! let header = Header::parse(
//!     "NROWS 2\nNCOLS 2\nXLLCORNER 0\nYLLCORNER 0\nXDIM 1\nYDIM 1\n",
//! )?;
//! let grid = Grid::decode_i16_le(&header, &[10, 0, 20, 0, 30, 0, 40, 0])?;
//! assert_eq!(grid.value(0, 1), Some(20.0));
//!
//! let coarse = grid.block_average(&ResampleOptions::with_factor(2))?;
//! assert_eq!(coarse.value(0, 0), Some(25.0));
//! # Ok::<(), demstitch_raster::RasterError>(())
//! ```

mod decode;
mod error;
mod grid;
mod header;
mod merge;
mod resample;

pub use error::{DimensionMismatch, FormatError, RasterError};
pub use grid::{Bounds, CellSize, Grid};
pub use header::Header;
pub use merge::{mosaic, OverlapPolicy};
pub use resample::ResampleOptions;

/// Result type for raster operations.
pub type Result<T> = std::result::Result<T, RasterError>;
