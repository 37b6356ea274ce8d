//! Error types for the raster crate.

use thiserror::Error;

/// Errors from parsing a tile header or decoding a tile buffer.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Header row is not a `KEY VALUE` pair.
    #[error("malformed header row {row}: {text:?}")]
    MalformedRow {
        /// 1-indexed row number in the header text.
        row: usize,
        /// The offending row.
        text: String,
    },

    /// Header key appears more than once.
    #[error("duplicate header key: {0}")]
    DuplicateKey(String),

    /// Header key is not in the recognized set.
    #[error("unknown header key: {0}")]
    UnknownKey(String),

    /// Required header key is absent.
    #[error("missing header key: {0}")]
    MissingKey(&'static str),

    /// Header value failed to parse or is out of range.
    #[error("invalid value for header key {key}: {value:?}")]
    InvalidValue {
        /// Key whose value was rejected.
        key: String,
        /// The rejected value.
        value: String,
    },

    /// Header declares a sample layout this decoder does not read.
    #[error("unsupported {key} {value:?} (expected {expected})")]
    Unsupported {
        /// Layout key that was checked.
        key: &'static str,
        /// Declared value.
        value: String,
        /// The one value this decoder accepts.
        expected: &'static str,
    },

    /// Tile buffer length disagrees with the header dimensions.
    #[error("tile buffer is {actual} bytes, header implies {expected}")]
    BufferLength {
        /// Bytes implied by the header (`nrows * ncols * 2`).
        expected: usize,
        /// Bytes actually supplied.
        actual: usize,
    },
}

/// Errors from composing grids that do not share a coordinate frame.
#[derive(Debug, Error)]
pub enum DimensionMismatch {
    /// Cell sizes differ between two grids.
    #[error("cell size mismatch: ({ax}, {ay}) vs ({bx}, {by})")]
    CellSize {
        /// First grid's cell width.
        ax: f64,
        /// First grid's cell height.
        ay: f64,
        /// Offending grid's cell width.
        bx: f64,
        /// Offending grid's cell height.
        by: f64,
    },

    /// Grid origin is not a whole number of cells from the mosaic origin.
    #[error("grid at ({xmin}, {ymin}) is not aligned to the mosaic cell lattice")]
    Misaligned {
        /// West edge of the offending grid.
        xmin: f64,
        /// South edge of the offending grid.
        ymin: f64,
    },

    /// Two grids supplied a value for the same output cell.
    #[error("grids overlap at mosaic cell ({row}, {col})")]
    Overlap {
        /// Row of the contested cell.
        row: usize,
        /// Column of the contested cell.
        col: usize,
    },
}

/// Top-level error for raster operations.
#[derive(Debug, Error)]
pub enum RasterError {
    /// Header or buffer format problem.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Grids are incompatible for composition.
    #[error(transparent)]
    Dimension(#[from] DimensionMismatch),

    /// No grids were supplied to a mosaic.
    #[error("cannot mosaic an empty set of grids")]
    EmptyMosaic,

    /// Resample block factor must be at least 1.
    #[error("invalid block factor {0} (must be >= 1)")]
    InvalidBlockFactor(usize),
}
