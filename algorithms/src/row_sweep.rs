//! This module contains the row sweep counting path classes around rectangular obstacles.
//!
//! For every column the segment tree holds the number of path classes which reach this column
//! in the current row and have not been forced to move right yet. When an obstacle starts in
//! some row, all classes in the free corridor left of its right edge may pass it on the right.
//! They get collected in the column just right of the obstacle, while the columns under the
//! obstacle are cleared.

use common::{ColumnSpan, GridDimensions, GridError, GridResult, Obstacle};
use log::{debug, trace};

use crate::{
    active_intervals::ActiveIntervalIndex,
    events::{EventSchedule, Row},
    modular::Residue,
    segment_tree::{LazyZeroSegmentTree, RangeSumTree},
};

/// Counts the classes of monotone paths (one column right or one row down per step)
/// from cell (1, 1) to the bottom right cell which avoid every obstacle.
/// Two paths are in the same class iff every obstacle lies on the same side of both.
///
/// # Runtime
/// O(r + c + k log(kc)) where r is the number of rows, c the number of columns and
/// k the number of obstacles.
/// # Returns
/// An [GridError::InvalidInput] if an obstacle leaves the grid.
/// # Examples
/// ```
/// use algorithms::row_sweep::count_paths;
/// use common::{GridDimensions, Obstacle};
/// # fn main() -> common::GridResult<()> {
/// let grid = GridDimensions::new(3, 3)?;
/// assert_eq!(count_paths(grid, &[])?.value(), 1);
///
/// // The blocked center can be passed on the left or on the right.
/// assert_eq!(count_paths(grid, &[Obstacle::new(2, 2, 2, 2)])?.value(), 2);
/// # Ok(())
/// # }
/// ```
pub fn count_paths(grid: GridDimensions, obstacles: &[Obstacle]) -> GridResult<Residue> {
    count_paths_with::<LazyZeroSegmentTree>(grid, obstacles)
}

/// Like [count_paths], but stores the per-column counts in any [RangeSumTree].
pub fn count_paths_with<T: RangeSumTree>(
    grid: GridDimensions,
    obstacles: &[Obstacle],
) -> GridResult<Residue> {
    RowSweep::<T>::new(grid, obstacles)?.run()
}

/// The state of a sweep over the rows of one grid.
/// Creating it processes row 1, every call to [sweep_row](RowSweep::sweep_row) processes
/// the next row and [run](RowSweep::run) consumes the sweep and gives the result.
#[derive(Debug)]
pub struct RowSweep<T> {
    grid: GridDimensions,
    schedule: EventSchedule,
    ways: T,
    active: ActiveIntervalIndex,
    next_row: usize,
}

impl<T: RangeSumTree> RowSweep<T> {
    /// Validates the obstacles, buckets them by row and processes row 1:
    /// The obstacles of row 1 block their columns right away and a single class starts in column 1.
    /// Column 1 is not cleared, even if an obstacle of row 1 covers it.
    pub fn new(grid: GridDimensions, obstacles: &[Obstacle]) -> GridResult<Self> {
        let schedule = EventSchedule::new(&grid, obstacles)
            .map_err(GridError::rethrow_with("Could not schedule obstacles"))?;
        debug!(
            "Sweeping {} grid with {} obstacles",
            grid,
            obstacles.len()
        );

        let mut sweep = Self {
            grid,
            schedule,
            ways: T::with_columns(grid.column_range()),
            active: ActiveIntervalIndex::new(),
            next_row: 2,
        };
        for span in sweep.schedule.activations(Row::from(1)) {
            sweep.active.insert(*span);
        }
        sweep.ways.point_set(1, Residue::ONE);
        Ok(sweep)
    }

    /// Returns true if all rows have been processed.
    pub fn is_finished(&self) -> bool {
        self.next_row > self.grid.rows()
    }

    /// Processes the next row.
    /// The order of the steps matters: the classes collected right of new obstacles are read
    /// from the previous row, so neither expirations nor new obstacles may be visible yet.
    /// # Returns
    /// An [GridError::InternalInvariantViolation] if all rows have been processed already.
    pub fn sweep_row(&mut self) -> GridResult<()> {
        if self.is_finished() {
            return Err(GridError::InternalInvariantViolation(format!(
                "all {} rows have been swept already",
                self.grid.rows()
            )));
        }
        let row = Row::from(self.next_row);

        for span in self.schedule.activations(row) {
            if span.right == self.grid.columns() {
                trace!("Obstacle columns {} touch the last column in row {}", span, row);
                continue;
            }
            let boundary = self.boundary_ways(span)?;
            self.ways.point_set(span.right + 1, boundary);
        }

        for span in self.schedule.expirations(row) {
            self.active.remove(*span)?;
        }

        self.activate(row);
        self.next_row += 1;
        Ok(())
    }

    /// Processes all remaining rows and gives the number of path classes
    /// reaching the bottom right cell.
    pub fn run(mut self) -> GridResult<Residue> {
        while !self.is_finished() {
            self.sweep_row()?;
        }

        // Only classes right of the rightmost obstacle in the last row can reach the destination.
        let last = self.active.maximum()?;
        let result = self
            .ways
            .range_sum(last.right + 1..=self.grid.columns());
        debug!(
            "Sweep finished with {} active obstacles in the last row, {} path classes",
            self.active.len(),
            result
        );
        Ok(result)
    }

    // Sums the classes of the previous row which can reach the column right of `span`.
    fn boundary_ways(&self, span: &ColumnSpan) -> GridResult<Residue> {
        let closest = self.active.predecessor_with_left_at_most(span.right + 1)?;
        if closest.right <= span.right {
            Ok(self.ways.range_sum(closest.right + 1..=span.right + 1))
        } else {
            // Another obstacle already blocks the column right of this one.
            Ok(Residue::ZERO)
        }
    }

    fn activate(&mut self, row: Row) {
        for span in self.schedule.activations(row) {
            self.active.insert(*span);
            self.ways.zero_assign(span.left..=span.right);
        }
    }
}
