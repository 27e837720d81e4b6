use std::ops::RangeInclusive;

use crate::modular::Residue;

use super::{RangeExt, RangeSumTree};

/// A RangeSumTree which simply stores every column.
/// Every operation takes time linear in the length of its range.
/// It serves as a reference for the [LazyZeroSegmentTree](super::LazyZeroSegmentTree).
#[derive(Debug, Clone)]
pub struct NaiveRangeSumTree {
    first: usize,
    values: Vec<Residue>,
}

impl NaiveRangeSumTree {
    fn slice_range(&self, range: &RangeInclusive<usize>) -> Option<RangeInclusive<usize>> {
        if range.is_empty() {
            return None;
        }
        assert!(self.borders().is_superset(range));
        Some(range.start() - self.first..=range.end() - self.first)
    }
}

impl RangeSumTree for NaiveRangeSumTree {
    fn with_columns(columns: RangeInclusive<usize>) -> Self {
        assert!(!columns.is_empty());
        Self {
            first: *columns.start(),
            values: vec![Residue::ZERO; columns.end() - columns.start() + 1],
        }
    }

    fn borders(&self) -> RangeInclusive<usize> {
        self.first..=self.first + self.values.len() - 1
    }

    fn point_set(&mut self, position: usize, value: Residue) {
        assert!(self.borders().contains(&position));
        self.values[position - self.first] = value;
    }

    fn zero_assign(&mut self, range: RangeInclusive<usize>) {
        if let Some(indices) = self.slice_range(&range) {
            self.values[indices]
                .iter_mut()
                .for_each(|value| *value = Residue::ZERO);
        }
    }

    fn range_sum(&self, range: RangeInclusive<usize>) -> Residue {
        match self.slice_range(&range) {
            Some(indices) => self.values[indices].iter().copied().sum(),
            None => Residue::ZERO,
        }
    }
}
