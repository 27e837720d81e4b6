//! Per-row buckets of the column spans that start or stop being blocked.

use common::{ColumnSpan, GridDimensions, GridResult, Obstacle};
use derive_more::{Display, From, Into};
use typed_index_collections::TiVec;

/// A 1-indexed row of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Display)]
pub struct Row(usize);

/// For every row the spans activating (first blocked row of an obstacle)
/// and expiring (first row after the last blocked row of an obstacle) there.
/// Built once from the obstacles and never changed afterwards.
#[derive(Debug, Clone)]
pub struct EventSchedule {
    activations: TiVec<Row, Vec<ColumnSpan>>,
    expirations: TiVec<Row, Vec<ColumnSpan>>,
}

fn empty_buckets(rows: usize) -> TiVec<Row, Vec<ColumnSpan>> {
    // Row 0 does not exist, its bucket stays empty.
    (0..=rows).map(|_| Vec::new()).collect()
}

impl EventSchedule {
    /// Buckets all obstacles by row.
    /// Activations of a row are sorted by (left, right) in descending order.
    /// Expirations after the last row are dropped, as no row observes them.
    /// # Runtime
    /// O(r + k log k) where r is the number of rows and k the number of obstacles.
    /// # Returns
    /// An [GridError::InvalidInput](common::GridError::InvalidInput) if any obstacle does not fit into `grid`.
    pub fn new(grid: &GridDimensions, obstacles: &[Obstacle]) -> GridResult<Self> {
        let mut activations = empty_buckets(grid.rows());
        let mut expirations = empty_buckets(grid.rows());

        for obstacle in obstacles {
            obstacle.validate_within(grid)?;
            activations[Row(obstacle.row_start)].push(obstacle.columns());
            let expiry = obstacle.row_end + 1;
            if expiry <= grid.rows() {
                expirations[Row(expiry)].push(obstacle.columns());
            }
        }

        for bucket in activations.iter_mut() {
            bucket.sort_unstable_by(|a, b| b.cmp(a));
        }

        Ok(Self {
            activations,
            expirations,
        })
    }

    /// The spans of all obstacles whose first row is `row`, rightmost first.
    pub fn activations(&self, row: Row) -> &[ColumnSpan] {
        &self.activations[row]
    }

    /// The spans of all obstacles whose last row is the one before `row`.
    pub fn expirations(&self, row: Row) -> &[ColumnSpan] {
        &self.expirations[row]
    }
}
