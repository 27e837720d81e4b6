//! This module contains everything related to the Segment Tree datastructure
//! that holds the per-column path counts of the sweep.

use std::ops::RangeInclusive;

use crate::modular::Residue;

/// A trait which abstracts over the trees storing one [Residue] per column.
/// All ranges are closed. An empty range (`start > end`) is always allowed:
/// updating it does nothing and summing over it gives [Residue::ZERO].
/// # Example
/// The values written by `point_set` are summed up until a `zero_assign` covers them.
/// ```
/// # use algorithms::segment_tree::*;
/// # use algorithms::modular::Residue;
/// let mut tree = LazyZeroSegmentTree::with_columns(1..=10);
/// tree.point_set(2, Residue::new(5));
/// tree.point_set(7, Residue::new(3));
/// assert_eq!(tree.range_sum(1..=10), Residue::new(8));
///
/// tree.zero_assign(1..=4);
/// assert_eq!(tree.range_sum(1..=10), Residue::new(3));
/// assert_eq!(tree.range_sum(8..=7), Residue::ZERO);
/// ```
pub trait RangeSumTree {
    /// Creates a tree over `columns` where every position holds zero.
    /// # Panics
    /// Implementations panic if `columns` is empty.
    fn with_columns(columns: RangeInclusive<usize>) -> Self;

    /// Gives the range for which the tree holds values.
    fn borders(&self) -> RangeInclusive<usize>;

    /// Overwrites the value at `position`.
    /// # Panics
    /// If `position` is not contained in `self.borders()`.
    fn point_set(&mut self, position: usize, value: Residue);

    /// Sets every position in `range` to zero.
    /// # Panics
    /// If `range` is not empty and not inside `self.borders()`.
    fn zero_assign(&mut self, range: RangeInclusive<usize>);

    /// Sums up all values in `range`.
    /// # Panics
    /// If `range` is not empty and not inside `self.borders()`.
    fn range_sum(&self, range: RangeInclusive<usize>) -> Residue;
}

mod lazy_zero;
pub use lazy_zero::LazyZeroSegmentTree;

mod naive;
pub use naive::NaiveRangeSumTree;

mod range;
use range::RangeExt;

#[cfg(test)]
mod tests;
