use std::collections::HashSet;

use crate::bodies::Body;
use crate::core::Bounds;

/// Uniform-grid partition of the simulation bounds
///
/// Buckets body indices by position so collision-pair enumeration only looks
/// at the 3x3 cell neighborhood instead of all pairs. Produces the same pair
/// set as a brute-force scan provided no body's diameter exceeds one cell;
/// callers must keep the grid resolution above the largest body diameter.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    rows: usize,
    cols: usize,
    cell_width: f32,
    cell_height: f32,
    cells: Vec<Vec<usize>>,
}

impl SpatialGrid {
    /// Creates an empty grid with the given resolution
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            rows,
            cols,
            cell_width: 0.0,
            cell_height: 0.0,
            cells: vec![Vec::new(); rows * cols],
        }
    }

    /// Returns the grid resolution as (rows, cols)
    pub fn resolution(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Rebuilds the grid from the current body positions
    ///
    /// Bodies on or outside the boundary clamp into the edge cells; nothing
    /// is ever dropped.
    pub fn rebuild(&mut self, bodies: &[Body], bounds: &Bounds) {
        self.cell_width = bounds.width() / self.cols as f32;
        self.cell_height = bounds.height() / self.rows as f32;

        for cell in &mut self.cells {
            cell.clear();
        }

        for (index, body) in bodies.iter().enumerate() {
            let (row, col) = self.cell_for(body.position.x, body.position.y, bounds);
            self.cells[row * self.cols + col].push(index);
        }
    }

    /// Returns the clamped (row, col) cell for a position
    fn cell_for(&self, x: f32, y: f32, bounds: &Bounds) -> (usize, usize) {
        let col = if self.cell_width > 0.0 {
            ((x - bounds.left) / self.cell_width).floor() as i64
        } else {
            0
        };
        let row = if self.cell_height > 0.0 {
            ((y - bounds.bottom) / self.cell_height).floor() as i64
        } else {
            0
        };
        let col = col.clamp(0, self.cols as i64 - 1) as usize;
        let row = row.clamp(0, self.rows as i64 - 1) as usize;
        (row, col)
    }

    /// Enumerates candidate collision pairs from the 3x3 neighborhood of
    /// every cell
    ///
    /// Pairs are unordered with `i < j`, deduplicated, and sorted so the
    /// resolver visits them in a deterministic order.
    pub fn candidate_pairs(&self) -> Vec<(usize, usize)> {
        let mut seen: HashSet<(usize, usize)> = HashSet::new();

        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell_a = &self.cells[row * self.cols + col];
                for dr in -1i64..=1 {
                    for dc in -1i64..=1 {
                        let nrow = row as i64 + dr;
                        let ncol = col as i64 + dc;
                        if nrow < 0 || nrow >= self.rows as i64 || ncol < 0 || ncol >= self.cols as i64 {
                            continue;
                        }
                        let cell_b = &self.cells[nrow as usize * self.cols + ncol as usize];
                        for &i in cell_a {
                            for &j in cell_b {
                                if i < j {
                                    seen.insert((i, j));
                                }
                            }
                        }
                    }
                }
            }
        }

        let mut pairs: Vec<(usize, usize)> = seen.into_iter().collect();
        pairs.sort();
        pairs
    }
}
