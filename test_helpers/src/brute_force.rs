//! Exhaustive path enumeration, only feasible for tiny grids.
use std::collections::HashSet;

use common::{GridDimensions, Obstacle};

struct Walk<'o> {
    grid: GridDimensions,
    obstacles: &'o [Obstacle],
    // The rightmost column the current path visits in each row.
    exit_columns: Vec<usize>,
    signatures: HashSet<Vec<bool>>,
}

impl Walk<'_> {
    fn is_blocked(&self, row: usize, column: usize) -> bool {
        self.obstacles
            .iter()
            .any(|obstacle| obstacle.covers(row, column))
    }

    fn visit(&mut self, row: usize, column: usize) {
        if self.is_blocked(row, column) {
            return;
        }
        self.exit_columns[row] = column;

        if row == self.grid.rows() && column == self.grid.columns() {
            let signature = self
                .obstacles
                .iter()
                .map(|obstacle| self.exit_columns[obstacle.row_start] < obstacle.col_start)
                .collect();
            self.signatures.insert(signature);
            return;
        }

        if column < self.grid.columns() {
            self.visit(row, column + 1);
        }
        if row < self.grid.rows() {
            // The branch going right overwrote the exit of this row.
            self.exit_columns[row] = column;
            self.visit(row + 1, column);
        }
    }
}

/// Counts the classes of monotone paths from (1, 1) to the bottom right cell which avoid all
/// obstacles, where two paths are in the same class iff every obstacle lies on the same side of both.
/// An obstacle lies left of a path iff the path leaves the obstacle's first row before its first column.
///
/// Enumerates every path, so keep grids tiny.
pub fn count_path_classes(grid: &GridDimensions, obstacles: &[Obstacle]) -> u64 {
    let mut walk = Walk {
        grid: *grid,
        obstacles,
        exit_columns: vec![0; grid.rows() + 1],
        signatures: HashSet::new(),
    };
    walk.visit(1, 1);
    walk.signatures.len() as u64
}
