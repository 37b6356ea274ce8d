//! Height-field export.

use std::io::Write;

use serde::Serialize;

use demstitch_raster::Grid;

use crate::Result;

/// A regularly-gridded height field ready for a surface renderer.
///
/// `xs` and `ys` are the cell-center coordinates of the source grid; `z`
/// holds one row of elevations per entry of `ys`, in the grid's storage
/// order (row 0 northernmost). Cells with no data are `None` and
/// serialize as JSON `null`.
#[derive(Debug, Clone, Serialize)]
pub struct HeightField {
    /// Cell-center x coordinates, west to east.
    pub xs: Vec<f64>,
    /// Cell-center y coordinates, north to south.
    pub ys: Vec<f64>,
    /// Elevation matrix, one row per `ys` entry.
    pub z: Vec<Vec<Option<f32>>>,
}

impl HeightField {
    /// Build a height field from a grid.
    pub fn from_grid(grid: &Grid) -> Self {
        let bounds = grid.bounds();
        let cell = grid.cell_size();

        let xs = (0..grid.cols())
            .map(|col| bounds.xmin + (col as f64 + 0.5) * cell.x)
            .collect();
        let ys = (0..grid.rows())
            .map(|row| bounds.ymax - (row as f64 + 0.5) * cell.y)
            .collect();
        let z = (0..grid.rows()).map(|row| grid.row(row).to_vec()).collect();

        HeightField { xs, ys, z }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.ys.len()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.xs.len()
    }

    /// Serialize as JSON to a writer.
    pub fn to_json_writer<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer(writer, self)?;
        Ok(())
    }

    /// Iterate `(x, y, elevation)` records in row-major order.
    ///
    /// Suitable for tabular export. Cells with no data yield `None`
    /// elevations so consumers can decide whether to keep or drop them.
    pub fn records(&self) -> impl Iterator<Item = (f64, f64, Option<f32>)> + '_ {
        self.ys.iter().enumerate().flat_map(move |(row, &y)| {
            self.xs
                .iter()
                .enumerate()
                .map(move |(col, &x)| (x, y, self.z[row][col]))
        })
    }
}
