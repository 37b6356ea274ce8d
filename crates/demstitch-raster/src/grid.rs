//! Georeferenced elevation grid.

/// Spatial extent of a grid in map coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// West edge.
    pub xmin: f64,
    /// East edge.
    pub xmax: f64,
    /// South edge.
    pub ymin: f64,
    /// North edge.
    pub ymax: f64,
}

impl Bounds {
    /// Smallest bounds containing both `self` and `other`.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            xmin: self.xmin.min(other.xmin),
            xmax: self.xmax.max(other.xmax),
            ymin: self.ymin.min(other.ymin),
            ymax: self.ymax.max(other.ymax),
        }
    }

    /// Width in map units.
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Height in map units.
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }
}

/// Cell size of a grid, per axis, in map units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    /// Cell width.
    pub x: f64,
    /// Cell height.
    pub y: f64,
}

impl CellSize {
    /// Whether two cell sizes agree to within a relative tolerance of 1e-9.
    pub fn matches(&self, other: &CellSize) -> bool {
        relative_eq(self.x, other.x) && relative_eq(self.y, other.y)
    }
}

fn relative_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs())
}

/// A 2D elevation raster with known spatial extent.
///
/// Samples are stored row-major, row 0 at the northern edge, columns west
/// to east. A cell with no measurement is `None`; no sentinel values appear
/// inside the grid itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Elevation samples, row-major, north to south then west to east.
    data: Vec<Option<f32>>,
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
    /// Spatial extent.
    bounds: Bounds,
    /// Cell size.
    cell: CellSize,
}

impl Grid {
    /// Create a grid from row-major cell data.
    ///
    /// # Panics
    /// Panics if `data.len() != rows * cols`.
    pub fn from_cells(
        rows: usize,
        cols: usize,
        bounds: Bounds,
        cell: CellSize,
        data: Vec<Option<f32>>,
    ) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "grid data length {} does not match {}x{}",
            data.len(),
            rows,
            cols
        );
        Self {
            data,
            rows,
            cols,
            bounds,
            cell,
        }
    }

    /// Create a grid with every cell set to "no data".
    pub fn empty(rows: usize, cols: usize, bounds: Bounds, cell: CellSize) -> Self {
        Self::from_cells(rows, cols, bounds, cell, vec![None; rows * cols])
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Spatial extent.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Cell size.
    pub fn cell_size(&self) -> CellSize {
        self.cell
    }

    /// Sample at a cell, `None` where there is no measurement.
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of range.
    pub fn value(&self, row: usize, col: usize) -> Option<f32> {
        assert!(row < self.rows && col < self.cols, "cell ({row}, {col}) out of range");
        self.data[row * self.cols + col]
    }

    /// One row of samples, west to east.
    pub fn row(&self, row: usize) -> &[Option<f32>] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// All samples, row-major.
    pub fn values(&self) -> &[Option<f32>] {
        &self.data
    }

    /// Number of cells holding a measurement.
    pub fn valid_count(&self) -> usize {
        self.data.iter().filter(|v| v.is_some()).count()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: Option<f32>) {
        self.data[row * self.cols + col] = value;
    }

    /// Reverse the column order of every row in place.
    pub(crate) fn mirror_columns(&mut self) {
        for row in 0..self.rows {
            self.data[row * self.cols..(row + 1) * self.cols].reverse();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_bounds() -> Bounds {
        Bounds {
            xmin: 0.0,
            xmax: 2.0,
            ymin: 0.0,
            ymax: 2.0,
        }
    }

    fn unit_cell() -> CellSize {
        CellSize { x: 1.0, y: 1.0 }
    }

    #[test]
    fn from_cells_stores_row_major() {
        let grid = Grid::from_cells(
            2,
            2,
            unit_bounds(),
            unit_cell(),
            vec![Some(1.0), Some(2.0), None, Some(4.0)],
        );
        assert_eq!(grid.value(0, 1), Some(2.0));
        assert_eq!(grid.value(1, 0), None);
        assert_eq!(grid.row(1), &[None, Some(4.0)]);
        assert_eq!(grid.valid_count(), 3);
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn from_cells_rejects_length_mismatch() {
        Grid::from_cells(2, 2, unit_bounds(), unit_cell(), vec![None; 3]);
    }

    #[test]
    fn empty_grid_has_no_valid_cells() {
        let grid = Grid::empty(3, 4, unit_bounds(), unit_cell());
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.valid_count(), 0);
    }

    #[test]
    fn bounds_union() {
        let a = Bounds {
            xmin: 0.0,
            xmax: 2.0,
            ymin: 0.0,
            ymax: 2.0,
        };
        let b = Bounds {
            xmin: 2.0,
            xmax: 4.0,
            ymin: -1.0,
            ymax: 1.0,
        };
        let u = a.union(&b);
        assert_eq!(u.xmin, 0.0);
        assert_eq!(u.xmax, 4.0);
        assert_eq!(u.ymin, -1.0);
        assert_eq!(u.ymax, 2.0);
        assert_eq!(u.width(), 4.0);
        assert_eq!(u.height(), 3.0);
    }

    #[test]
    fn cell_size_matches_within_tolerance() {
        let a = CellSize { x: 1.0, y: 1.0 };
        let b = CellSize {
            x: 1.0 + 1e-12,
            y: 1.0,
        };
        let c = CellSize { x: 0.5, y: 1.0 };
        assert!(a.matches(&b));
        assert!(!a.matches(&c));
    }

    #[test]
    fn mirror_columns_reverses_each_row() {
        let mut grid = Grid::from_cells(
            2,
            3,
            unit_bounds(),
            unit_cell(),
            vec![Some(1.0), Some(2.0), Some(3.0), None, Some(5.0), Some(6.0)],
        );
        grid.mirror_columns();
        assert_eq!(grid.row(0), &[Some(3.0), Some(2.0), Some(1.0)]);
        assert_eq!(grid.row(1), &[Some(6.0), Some(5.0), None]);
    }
}
