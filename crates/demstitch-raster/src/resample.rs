//! Block-average downsampling.

use crate::grid::{Bounds, CellSize, Grid};
use crate::{RasterError, Result};

/// Options for [`Grid::block_average`].
#[derive(Debug, Clone, Copy)]
pub struct ResampleOptions {
    /// Edge length of the averaging block, in cells.
    pub factor: usize,
    /// Treat samples below this elevation as missing when averaging.
    pub valid_floor: Option<f32>,
}

impl ResampleOptions {
    /// Average over `factor`-sized blocks with no validity floor.
    pub fn with_factor(factor: usize) -> Self {
        Self {
            factor,
            valid_floor: None,
        }
    }
}

impl Grid {
    /// Downsample by block-averaging.
    ///
    /// Output dimensions are `ceil(rows/factor) x ceil(cols/factor)` and
    /// the output cell size is the input cell size times the factor. Each
    /// output cell is the arithmetic mean of the valid samples in its
    /// block, or `None` when the block has none; partial blocks at the
    /// south and east edges average over the cells they actually cover.
    /// When a validity floor is set, samples below it are excluded as if
    /// they were missing.
    ///
    /// The output column order is mirrored (east to west) once, matching
    /// the axis convention of the consuming surface renderer. With a
    /// factor of 1 the result is the input with that single mirror
    /// applied.
    pub fn block_average(&self, opts: &ResampleOptions) -> Result<Grid> {
        let factor = opts.factor;
        if factor == 0 {
            return Err(RasterError::InvalidBlockFactor(0));
        }

        let out_rows = self.rows().div_ceil(factor);
        let out_cols = self.cols().div_ceil(factor);

        let cell = self.cell_size();
        let out_cell = CellSize {
            x: cell.x * factor as f64,
            y: cell.y * factor as f64,
        };
        // Blocks tile from the north-west corner, so the output keeps the
        // west and north edges and extends past the south and east edges
        // when the input dimensions are not multiples of the factor.
        let bounds = self.bounds();
        let out_bounds = Bounds {
            xmin: bounds.xmin,
            xmax: bounds.xmin + out_cols as f64 * out_cell.x,
            ymin: bounds.ymax - out_rows as f64 * out_cell.y,
            ymax: bounds.ymax,
        };

        let mut data = Vec::with_capacity(out_rows * out_cols);
        for block_row in 0..out_rows {
            for block_col in 0..out_cols {
                data.push(self.block_mean(
                    block_row * factor,
                    block_col * factor,
                    factor,
                    opts.valid_floor,
                ));
            }
        }

        let mut out = Grid::from_cells(out_rows, out_cols, out_bounds, out_cell, data);
        out.mirror_columns();
        Ok(out)
    }

    /// Mean of the valid samples in one block, or `None` if there are none.
    fn block_mean(
        &self,
        row0: usize,
        col0: usize,
        factor: usize,
        valid_floor: Option<f32>,
    ) -> Option<f32> {
        let mut sum = 0.0f64;
        let mut count = 0usize;
        for row in row0..(row0 + factor).min(self.rows()) {
            for col in col0..(col0 + factor).min(self.cols()) {
                let Some(value) = self.value(row, col) else {
                    continue;
                };
                if valid_floor.is_some_and(|floor| value < floor) {
                    continue;
                }
                sum += f64::from(value);
                count += 1;
            }
        }
        (count > 0).then(|| (sum / count as f64) as f32)
    }
}
