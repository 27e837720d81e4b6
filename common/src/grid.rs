//! The grid, its obstacles and the column spans the sweep works with.
//! Rows and columns are 1-indexed and all ranges are inclusive.
use std::ops::RangeInclusive;

use derive_more::{Constructor, Display};

use crate::{GridError, GridResult};

/// The size of the grid. Paths go from cell (1, 1) to cell (rows, columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}x{}", rows, columns)]
pub struct GridDimensions {
    rows: usize,
    columns: usize,
}

impl GridDimensions {
    /// Creates a new grid.
    /// # Returns
    /// An [GridError::InvalidInput] if either side is zero.
    pub fn new(rows: usize, columns: usize) -> GridResult<Self> {
        if rows == 0 || columns == 0 {
            return Err(GridError::InvalidInput(format!(
                "grid must have at least one row and one column, got {}x{}",
                rows, columns
            )));
        }
        Ok(Self { rows, columns })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// All column indices of this grid.
    pub fn column_range(&self) -> RangeInclusive<usize> {
        1..=self.columns
    }
}

/// A closed interval of columns `left..=right`.
/// Spans are ordered by their left endpoint first and their right endpoint second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Constructor, Display)]
#[display(fmt = "[{}, {}]", left, right)]
pub struct ColumnSpan {
    /// First column of the span.
    pub left: usize,
    /// Last column of the span.
    pub right: usize,
}

impl ColumnSpan {
    /// The span `(0, 0)`, standing for "no obstacle to the left of column 1".
    pub const SENTINEL: ColumnSpan = ColumnSpan { left: 0, right: 0 };

    /// Returns true if both spans share at least one column.
    pub fn overlaps(&self, other: &ColumnSpan) -> bool {
        self.left <= other.right && other.left <= self.right
    }
}

/// An axis-aligned rectangle of blocked cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Constructor, Display)]
#[display(fmt = "({}, {})..=({}, {})", row_start, col_start, row_end, col_end)]
pub struct Obstacle {
    /// First blocked row.
    pub row_start: usize,
    /// First blocked column.
    pub col_start: usize,
    /// Last blocked row.
    pub row_end: usize,
    /// Last blocked column.
    pub col_end: usize,
}

impl Obstacle {
    /// The columns blocked in each of the rows of this obstacle.
    pub fn columns(&self) -> ColumnSpan {
        ColumnSpan::new(self.col_start, self.col_end)
    }

    /// The rows this obstacle spans.
    pub fn rows(&self) -> RangeInclusive<usize> {
        self.row_start..=self.row_end
    }

    /// Returns true if the cell at `row` and `column` is blocked by this obstacle.
    pub fn covers(&self, row: usize, column: usize) -> bool {
        self.rows().contains(&row) && (self.col_start..=self.col_end).contains(&column)
    }

    /// Checks that corners are ordered and lie inside `grid`.
    /// # Returns
    /// An [GridError::InvalidInput] describing the first violated constraint.
    pub fn validate_within(&self, grid: &GridDimensions) -> GridResult<()> {
        if self.row_start > self.row_end || self.col_start > self.col_end {
            return Err(GridError::InvalidInput(format!(
                "obstacle {} has its corners in the wrong order",
                self
            )));
        }
        if self.row_start == 0 || self.row_end > grid.rows() {
            return Err(GridError::InvalidInput(format!(
                "obstacle {} leaves the rows of the {} grid",
                self, grid
            )));
        }
        if self.col_start == 0 || self.col_end > grid.columns() {
            return Err(GridError::InvalidInput(format!(
                "obstacle {} leaves the columns of the {} grid",
                self, grid
            )));
        }
        Ok(())
    }
}
