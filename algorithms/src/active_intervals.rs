//! This module contains the ordered set of column spans blocked in the row being swept.

use std::collections::{BTreeMap, BTreeSet};

use common::{ColumnSpan, GridError, GridResult};

/// The spans of all obstacles in effect for the current row, ordered by
/// (left, right). The sentinel [ColumnSpan::SENTINEL] is always present,
/// so every predecessor lookup with a non-negative bound succeeds.
///
/// Spans may overlap. Equal spans collapse into one entry, which leaves the
/// index as soon as the first of them is removed.
#[derive(Debug, Clone)]
pub struct ActiveIntervalIndex {
    spans: BTreeSet<ColumnSpan>,
    // How often each span was inserted and not removed yet.
    pending_removals: BTreeMap<ColumnSpan, usize>,
}

impl Default for ActiveIntervalIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl ActiveIntervalIndex {
    /// Creates an index which only holds the sentinel.
    pub fn new() -> Self {
        let mut spans = BTreeSet::new();
        spans.insert(ColumnSpan::SENTINEL);
        Self {
            spans,
            pending_removals: BTreeMap::new(),
        }
    }

    /// Add a span.
    /// # Runtime
    /// O(log k) where k is the number of active spans.
    /// # Returns
    /// False if an equal span was active already, in which case the two collapse.
    /// # Examples
    /// ```
    /// # use algorithms::active_intervals::ActiveIntervalIndex;
    /// # use common::ColumnSpan;
    /// let mut index = ActiveIntervalIndex::new();
    /// assert!(index.insert(ColumnSpan::new(2, 4)));
    /// assert!(index.insert(ColumnSpan::new(4, 4)));
    ///
    /// assert!(!index.insert(ColumnSpan::new(2, 4)));
    /// assert_eq!(index.len(), 2);
    /// ```
    pub fn insert(&mut self, span: ColumnSpan) -> bool {
        *self.pending_removals.entry(span).or_insert(0) += 1;
        self.spans.insert(span)
    }

    /// Remove a span which was inserted before.
    /// If equal spans were inserted, the first removal takes the span out of the index
    /// and the later ones only balance their insertion.
    /// # Runtime
    /// O(log k) where k is the number of active spans.
    /// # Returns
    /// An [GridError::InternalInvariantViolation] if the span was removed as often as
    /// it was inserted or is the sentinel.
    pub fn remove(&mut self, span: ColumnSpan) -> GridResult<()> {
        match self.pending_removals.get_mut(&span) {
            Some(pending) if span != ColumnSpan::SENTINEL => {
                *pending -= 1;
                if *pending == 0 {
                    self.pending_removals.remove(&span);
                }
                self.spans.remove(&span);
                Ok(())
            }
            _ => Err(GridError::InternalInvariantViolation(format!(
                "removing span {} which is not active",
                span
            ))),
        }
    }

    /// Gives the span with the greatest left endpoint at most `bound`,
    /// ties broken by the greatest right endpoint.
    /// This is the closest obstacle starting at or to the left of column `bound`.
    /// # Runtime
    /// O(log k) where k is the number of active spans.
    /// # Examples
    /// ```
    /// # use algorithms::active_intervals::ActiveIntervalIndex;
    /// # use common::ColumnSpan;
    /// # fn main() -> common::GridResult<()> {
    /// let mut index = ActiveIntervalIndex::new();
    /// index.insert(ColumnSpan::new(3, 4));
    ///
    /// assert_eq!(index.predecessor_with_left_at_most(2)?, ColumnSpan::SENTINEL);
    /// assert_eq!(index.predecessor_with_left_at_most(3)?, ColumnSpan::new(3, 4));
    /// assert_eq!(index.predecessor_with_left_at_most(9)?, ColumnSpan::new(3, 4));
    /// # Ok(())
    /// # }
    /// ```
    pub fn predecessor_with_left_at_most(&self, bound: usize) -> GridResult<ColumnSpan> {
        self.spans
            .range(..=ColumnSpan::new(bound, usize::MAX))
            .next_back()
            .copied()
            .ok_or_else(Self::missing_sentinel)
    }

    /// Gives the span with the greatest (left, right), which is the rightmost active obstacle
    /// or the sentinel if there is none.
    pub fn maximum(&self) -> GridResult<ColumnSpan> {
        self.spans
            .iter()
            .next_back()
            .copied()
            .ok_or_else(Self::missing_sentinel)
    }

    /// Number of active spans, not counting the sentinel.
    pub fn len(&self) -> usize {
        self.spans.len() - 1
    }

    /// Returns true if only the sentinel is present.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over all active spans from left to right, not including the sentinel.
    pub fn iter(&self) -> impl Iterator<Item = &ColumnSpan> {
        self.spans.iter().skip(1)
    }

    fn missing_sentinel() -> GridError {
        GridError::InternalInvariantViolation("the sentinel span is missing".to_string())
    }
}
