//! Mosaic composition of adjacent grids.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DimensionMismatch;
use crate::grid::Grid;
use crate::{RasterError, Result};

/// Alignment slack, in cells. Grid origins may drift from the lattice by
/// this much before the grid is rejected as misaligned.
const ALIGN_TOLERANCE: f64 = 1e-6;

/// What to do when two grids supply a value for the same mosaic cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapPolicy {
    /// Later grids overwrite earlier ones, following input order.
    #[default]
    LastWins,
    /// Earlier grids keep their value; later values for the cell are dropped.
    FirstWins,
    /// Two valid samples for the same cell is an error.
    Reject,
}

/// Compose grids on a shared coordinate frame into one mosaic.
///
/// All grids must have matching cell sizes and origins that sit on the same
/// cell lattice. The output spans the union of the input bounding boxes,
/// with cells nothing covers left as "no data". Only valid samples are
/// placed, so a grid's "no data" cells never erase another grid's values.
pub fn mosaic(grids: &[Grid], policy: OverlapPolicy) -> Result<Grid> {
    let first = grids.first().ok_or(RasterError::EmptyMosaic)?;
    let cell = first.cell_size();

    for grid in &grids[1..] {
        let other = grid.cell_size();
        if !cell.matches(&other) {
            return Err(DimensionMismatch::CellSize {
                ax: cell.x,
                ay: cell.y,
                bx: other.x,
                by: other.y,
            }
            .into());
        }
    }

    let mut union = first.bounds();
    for grid in &grids[1..] {
        union = union.union(&grid.bounds());
    }

    let rows = (union.height() / cell.y).round() as usize;
    let cols = (union.width() / cell.x).round() as usize;
    let mut out = Grid::empty(rows, cols, union, cell);

    for grid in grids {
        let bounds = grid.bounds();
        // Offsets are measured in cells from the union's north-west corner.
        let col_off = lattice_offset((bounds.xmin - union.xmin) / cell.x)
            .ok_or(DimensionMismatch::Misaligned {
                xmin: bounds.xmin,
                ymin: bounds.ymin,
            })?;
        let row_off = lattice_offset((union.ymax - bounds.ymax) / cell.y)
            .ok_or(DimensionMismatch::Misaligned {
                xmin: bounds.xmin,
                ymin: bounds.ymin,
            })?;

        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let Some(value) = grid.value(row, col) else {
                    continue;
                };
                let (out_row, out_col) = (row_off + row, col_off + col);
                match policy {
                    OverlapPolicy::LastWins => out.set(out_row, out_col, Some(value)),
                    OverlapPolicy::FirstWins => {
                        if out.value(out_row, out_col).is_none() {
                            out.set(out_row, out_col, Some(value));
                        }
                    }
                    OverlapPolicy::Reject => {
                        if out.value(out_row, out_col).is_some() {
                            return Err(DimensionMismatch::Overlap {
                                row: out_row,
                                col: out_col,
                            }
                            .into());
                        }
                        out.set(out_row, out_col, Some(value));
                    }
                }
            }
        }
        debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            row_off,
            col_off,
            "placed grid into mosaic"
        );
    }

    Ok(out)
}

/// Nearest whole-cell offset, or `None` when the position falls off the
/// lattice by more than the tolerance.
fn lattice_offset(cells: f64) -> Option<usize> {
    let nearest = cells.round();
    if nearest < 0.0 || (cells - nearest).abs() > ALIGN_TOLERANCE {
        return None;
    }
    Some(nearest as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Bounds, CellSize};

    fn unit_cell() -> CellSize {
        CellSize { x: 1.0, y: 1.0 }
    }

    fn grid(xmin: f64, ymin: f64, rows: usize, cols: usize, values: &[f32]) -> Grid {
        let bounds = Bounds {
            xmin,
            xmax: xmin + cols as f64,
            ymin,
            ymax: ymin + rows as f64,
        };
        Grid::from_cells(
            rows,
            cols,
            bounds,
            unit_cell(),
            values.iter().map(|&v| Some(v)).collect(),
        )
    }

    #[test]
    fn mosaics_two_horizontally_adjacent_grids() {
        let west = grid(0.0, 0.0, 2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let east = grid(2.0, 0.0, 2, 2, &[5.0, 6.0, 7.0, 8.0]);

        let merged = mosaic(&[west, east], OverlapPolicy::LastWins).unwrap();
        assert_eq!(merged.rows(), 2);
        assert_eq!(merged.cols(), 4);
        assert_eq!(merged.row(0), &[Some(1.0), Some(2.0), Some(5.0), Some(6.0)]);
        assert_eq!(merged.row(1), &[Some(3.0), Some(4.0), Some(7.0), Some(8.0)]);

        let bounds = merged.bounds();
        assert_eq!(bounds.xmin, 0.0);
        assert_eq!(bounds.xmax, 4.0);
        assert_eq!(bounds.ymin, 0.0);
        assert_eq!(bounds.ymax, 2.0);
    }

    #[test]
    fn mosaics_two_vertically_adjacent_grids() {
        let north = grid(0.0, 2.0, 2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let south = grid(0.0, 0.0, 2, 2, &[5.0, 6.0, 7.0, 8.0]);

        let merged = mosaic(&[south, north], OverlapPolicy::LastWins).unwrap();
        assert_eq!(merged.rows(), 4);
        assert_eq!(merged.cols(), 2);
        // Row 0 is the northern edge, which the northern grid supplied.
        assert_eq!(merged.row(0), &[Some(1.0), Some(2.0)]);
        assert_eq!(merged.row(3), &[Some(7.0), Some(8.0)]);
    }

    #[test]
    fn disjoint_grids_leave_a_gap_of_no_data() {
        let west = grid(0.0, 0.0, 1, 1, &[1.0]);
        let east = grid(2.0, 0.0, 1, 1, &[2.0]);

        let merged = mosaic(&[west, east], OverlapPolicy::LastWins).unwrap();
        assert_eq!(merged.cols(), 3);
        assert_eq!(merged.row(0), &[Some(1.0), None, Some(2.0)]);
        // Valid cells are exactly the sum of the inputs' valid cells.
        assert_eq!(merged.valid_count(), 2);
    }

    #[test]
    fn single_grid_mosaic_is_identity() {
        let only = grid(1.0, 1.0, 2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let merged = mosaic(std::slice::from_ref(&only), OverlapPolicy::LastWins).unwrap();
        assert_eq!(merged, only);
    }

    #[test]
    fn last_wins_overwrites_overlap() {
        let a = grid(0.0, 0.0, 1, 2, &[1.0, 2.0]);
        let b = grid(1.0, 0.0, 1, 2, &[9.0, 8.0]);

        let merged = mosaic(&[a, b], OverlapPolicy::LastWins).unwrap();
        assert_eq!(merged.row(0), &[Some(1.0), Some(9.0), Some(8.0)]);
    }

    #[test]
    fn first_wins_keeps_earlier_values() {
        let a = grid(0.0, 0.0, 1, 2, &[1.0, 2.0]);
        let b = grid(1.0, 0.0, 1, 2, &[9.0, 8.0]);

        let merged = mosaic(&[a, b], OverlapPolicy::FirstWins).unwrap();
        assert_eq!(merged.row(0), &[Some(1.0), Some(2.0), Some(8.0)]);
    }

    #[test]
    fn reject_errors_on_overlapping_valid_cells() {
        let a = grid(0.0, 0.0, 1, 2, &[1.0, 2.0]);
        let b = grid(1.0, 0.0, 1, 2, &[9.0, 8.0]);

        let err = mosaic(&[a, b], OverlapPolicy::Reject).unwrap_err();
        assert!(matches!(
            err,
            RasterError::Dimension(DimensionMismatch::Overlap { row: 0, col: 1 })
        ));
    }

    #[test]
    fn no_data_cells_do_not_count_as_overlap() {
        let mut a = grid(0.0, 0.0, 1, 2, &[1.0, 2.0]);
        a.set(0, 1, None);
        let b = grid(1.0, 0.0, 1, 1, &[9.0]);

        let merged = mosaic(&[a, b], OverlapPolicy::Reject).unwrap();
        assert_eq!(merged.row(0), &[Some(1.0), Some(9.0)]);
    }

    #[test]
    fn rejects_mismatched_cell_sizes() {
        let a = grid(0.0, 0.0, 1, 1, &[1.0]);
        let bounds = Bounds {
            xmin: 1.0,
            xmax: 2.0,
            ymin: 0.0,
            ymax: 1.0,
        };
        let b = Grid::from_cells(2, 2, bounds, CellSize { x: 0.5, y: 0.5 }, vec![Some(0.0); 4]);

        let err = mosaic(&[a, b], OverlapPolicy::LastWins).unwrap_err();
        assert!(matches!(
            err,
            RasterError::Dimension(DimensionMismatch::CellSize { .. })
        ));
    }

    #[test]
    fn rejects_off_lattice_grids() {
        let a = grid(0.0, 0.0, 1, 1, &[1.0]);
        let b = grid(1.5, 0.0, 1, 1, &[2.0]);

        let err = mosaic(&[a, b], OverlapPolicy::LastWins).unwrap_err();
        assert!(matches!(
            err,
            RasterError::Dimension(DimensionMismatch::Misaligned { .. })
        ));
    }

    #[test]
    fn rejects_empty_input() {
        let err = mosaic(&[], OverlapPolicy::LastWins).unwrap_err();
        assert!(matches!(err, RasterError::EmptyMosaic));
    }
}
