use std::ops::RangeInclusive;

use derive_more::{From, Into};
use typed_index_collections::TiVec;

use crate::modular::Residue;

use super::{RangeExt, RangeSumTree};

/// An Index into a LazyZeroSegmentTree.
/// The root has index 1, the children of node `i` are `2i` and `2i + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into)]
pub struct LazyZeroNodeIdx(usize);

impl LazyZeroNodeIdx {
    const ROOT: LazyZeroNodeIdx = LazyZeroNodeIdx(1);

    fn left_child(self) -> Self {
        Self(2 * self.0)
    }

    fn right_child(self) -> Self {
        Self(2 * self.0 + 1)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Node {
    sum: Residue,
    // Every position below this node is zero, the children have not been told yet.
    zeroed: bool,
}

impl Node {
    const ZEROED: Node = Node {
        sum: Residue::ZERO,
        zeroed: true,
    };
}

/// A segment tree over a fixed column range supporting point assignment,
/// range assignment of zero and range sums.
/// Range zero assignments tag the O(log n) nodes covering the range and
/// push the tag to the children the next time an update descends past them.
/// Queries never descend below a tagged node.
#[derive(Debug, Clone)]
pub struct LazyZeroSegmentTree {
    columns: RangeInclusive<usize>,
    nodes: TiVec<LazyZeroNodeIdx, Node>,
}

impl LazyZeroSegmentTree {
    fn push_down(&mut self, idx: LazyZeroNodeIdx) {
        if self.nodes[idx].zeroed {
            self.nodes[idx.left_child()] = Node::ZEROED;
            self.nodes[idx.right_child()] = Node::ZEROED;
            self.nodes[idx].zeroed = false;
        }
    }

    fn pull_up(&mut self, idx: LazyZeroNodeIdx) {
        self.nodes[idx].sum = self.nodes[idx.left_child()].sum + self.nodes[idx.right_child()].sum;
    }

    // relies on the invariant that `position` lies inside `node_range`.
    fn point_set_inner(
        &mut self,
        idx: LazyZeroNodeIdx,
        node_range: RangeInclusive<usize>,
        position: usize,
        value: Residue,
    ) {
        match node_range.split() {
            None => {
                self.nodes[idx] = Node {
                    sum: value,
                    zeroed: false,
                }
            }
            Some((left_range, right_range)) => {
                self.push_down(idx);
                if left_range.contains(&position) {
                    self.point_set_inner(idx.left_child(), left_range, position, value);
                } else {
                    self.point_set_inner(idx.right_child(), right_range, position, value);
                }
                self.pull_up(idx);
            }
        }
    }

    // relies on the invariant that `target` and `node_range` overlap.
    fn zero_assign_inner(
        &mut self,
        idx: LazyZeroNodeIdx,
        node_range: RangeInclusive<usize>,
        target: &RangeInclusive<usize>,
    ) {
        if target.is_superset(&node_range) {
            self.nodes[idx] = Node::ZEROED;
            return;
        }

        if let Some((left_range, right_range)) = node_range.split() {
            self.push_down(idx);
            if left_range.intersects(target) {
                self.zero_assign_inner(idx.left_child(), left_range, target);
            }
            if right_range.intersects(target) {
                self.zero_assign_inner(idx.right_child(), right_range, target);
            }
            self.pull_up(idx);
        }
    }

    // relies on the invariant that `target` and `node_range` overlap.
    fn range_sum_inner(
        &self,
        idx: LazyZeroNodeIdx,
        node_range: RangeInclusive<usize>,
        target: &RangeInclusive<usize>,
    ) -> Residue {
        let node = self.nodes[idx];
        // The children of a tagged node may still hold stale sums.
        if node.zeroed || target.is_superset(&node_range) {
            return node.sum;
        }

        let mut sum = Residue::ZERO;
        if let Some((left_range, right_range)) = node_range.split() {
            if left_range.intersects(target) {
                sum += self.range_sum_inner(idx.left_child(), left_range, target);
            }
            if right_range.intersects(target) {
                sum += self.range_sum_inner(idx.right_child(), right_range, target);
            }
        }
        sum
    }
}

impl RangeSumTree for LazyZeroSegmentTree {
    /// Creates a new LazyZeroSegmentTree.
    /// All storage is allocated here, later operations never allocate.
    /// # Panics
    /// If the supplied range is empty.
    fn with_columns(columns: RangeInclusive<usize>) -> Self {
        assert!(!columns.is_empty());
        let len = columns.end() - columns.start() + 1;
        Self {
            columns,
            // Halving a range of length len never leads to indices at or beyond 4 * len.
            nodes: (0..4 * len).map(|_| Node::default()).collect(),
        }
    }

    fn borders(&self) -> RangeInclusive<usize> {
        self.columns.clone()
    }

    fn point_set(&mut self, position: usize, value: Residue) {
        assert!(self.columns.contains(&position));
        self.point_set_inner(LazyZeroNodeIdx::ROOT, self.borders(), position, value);
    }

    fn zero_assign(&mut self, range: RangeInclusive<usize>) {
        if range.is_empty() {
            return;
        }
        assert!(self.columns.is_superset(&range));
        self.zero_assign_inner(LazyZeroNodeIdx::ROOT, self.borders(), &range);
    }

    fn range_sum(&self, range: RangeInclusive<usize>) -> Residue {
        if range.is_empty() {
            return Residue::ZERO;
        }
        assert!(self.columns.is_superset(&range));
        self.range_sum_inner(LazyZeroNodeIdx::ROOT, self.borders(), &range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_column_tree_works() {
        let mut tree = LazyZeroSegmentTree::with_columns(1..=1);
        tree.point_set(1, Residue::ONE);
        assert_eq!(tree.range_sum(1..=1), Residue::ONE);
        tree.zero_assign(1..=1);
        assert_eq!(tree.range_sum(1..=1), Residue::ZERO);
        assert_eq!(tree.nodes.len(), 4);
    }

    #[test]
    fn point_set_below_tagged_node_is_observed() {
        let mut tree = LazyZeroSegmentTree::with_columns(1..=16);
        for column in 1..=16 {
            tree.point_set(column, Residue::ONE);
        }
        tree.zero_assign(1..=16);
        assert!(tree.nodes[LazyZeroNodeIdx::ROOT].zeroed);

        tree.point_set(5, Residue::new(7));
        assert_eq!(tree.range_sum(1..=16), Residue::new(7));
        assert_eq!(tree.range_sum(1..=4), Residue::ZERO);
        assert_eq!(tree.range_sum(5..=5), Residue::new(7));
        assert_eq!(tree.range_sum(6..=16), Residue::ZERO);
    }

    #[test]
    fn partial_zero_assign_keeps_neighbours() {
        let mut tree = LazyZeroSegmentTree::with_columns(3..=13);
        for column in 3..=13 {
            tree.point_set(column, Residue::new(column as u64));
        }
        tree.zero_assign(5..=9);

        assert_eq!(tree.range_sum(3..=13), Residue::new(3 + 4 + 10 + 11 + 12 + 13));
        assert_eq!(tree.range_sum(4..=10), Residue::new(4 + 10));
        assert_eq!(tree.range_sum(5..=9), Residue::ZERO);
    }
}
