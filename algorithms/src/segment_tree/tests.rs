use proptest::prelude::*;

use super::{LazyZeroSegmentTree, NaiveRangeSumTree, RangeSumTree};
use crate::modular::Residue;

macro_rules! generic_range_sum_tree_tests {
    ($ident: ident, $type_tree : ty) => {
        #[allow(clippy::reversed_empty_ranges)]
        mod $ident {
            use super::super::RangeSumTree;
            use crate::modular::Residue;
            use proptest::proptest;

            #[test]
            #[should_panic]
            fn new_left_greater_than_right_panics() {
                <$type_tree>::with_columns(100..=50);
            }

            #[test]
            fn new_single_column_works() {
                let tree = <$type_tree>::with_columns(100..=100);
                assert_eq!(tree.borders(), 100..=100);
            }

            #[test]
            fn new_tree_sums_to_zero() {
                let tree = <$type_tree>::with_columns(1..=1000);
                assert_eq!(tree.range_sum(1..=1000), Residue::ZERO);
            }

            #[test]
            fn empty_ranges_are_ignored() {
                let mut tree = <$type_tree>::with_columns(10..=100);
                tree.point_set(10, Residue::ONE);
                tree.zero_assign(11..=10);
                tree.zero_assign(1000..=999);
                assert_eq!(tree.range_sum(11..=10), Residue::ZERO);
                assert_eq!(tree.range_sum(101..=100), Residue::ZERO);
                assert_eq!(tree.range_sum(10..=100), Residue::ONE);
            }

            #[test]
            fn invalid_ranges_panic() {
                let tree = <$type_tree>::with_columns(10..=100);
                let left_outside_range =
                    std::panic::catch_unwind(|| tree.range_sum(9..=15));
                let right_outside_range =
                    std::panic::catch_unwind(|| tree.range_sum(10..=101));
                let point_outside_range = std::panic::catch_unwind(|| {
                    let mut tree = <$type_tree>::with_columns(10..=100);
                    tree.point_set(101, Residue::ONE)
                });
                let zero_outside_range = std::panic::catch_unwind(|| {
                    let mut tree = <$type_tree>::with_columns(10..=100);
                    tree.zero_assign(0..=10)
                });
                assert!(left_outside_range.is_err());
                assert!(right_outside_range.is_err());
                assert!(point_outside_range.is_err());
                assert!(zero_outside_range.is_err());
            }

            proptest! {
                #[test]
                fn point_set_range_sum(left in 1..1_000_000usize, len in 1..64usize) {
                    let right = left + len - 1;
                    let mut tree = <$type_tree>::with_columns(left..=right);
                    for column in left..=right {
                        tree.point_set(column, Residue::new(column as u64));
                    }

                    for l in left..=right {
                        for r in l..=right {
                            let expected = Residue::new((l..=r).map(|c| c as u64).sum());
                            assert_eq!(tree.range_sum(l..=r), expected);
                        }
                    }
                }

                #[test]
                fn zero_assign_then_range_sum_is_zero(
                    len in 1..64usize,
                    a in 0..64usize,
                    b in 0..64usize,
                    later in proptest::collection::vec((0..64usize, 1..1000u64), 0..16),
                ) {
                    let mut tree = <$type_tree>::with_columns(1..=len);
                    for column in 1..=len {
                        tree.point_set(column, Residue::ONE);
                    }
                    let (low, high) = (a % len + 1, b % len + 1);
                    let zeroed = low.min(high)..=low.max(high);
                    tree.zero_assign(zeroed.clone());
                    assert_eq!(tree.range_sum(zeroed.clone()), Residue::ZERO);

                    // Writes outside the zeroed range leave it untouched.
                    for (column, value) in later {
                        let column = column % len + 1;
                        if !zeroed.contains(&column) {
                            tree.point_set(column, Residue::new(value));
                        }
                    }
                    assert_eq!(tree.range_sum(zeroed), Residue::ZERO);
                }
            }
        }
    };
}

generic_range_sum_tree_tests!(lazy_zero, crate::segment_tree::LazyZeroSegmentTree);
generic_range_sum_tree_tests!(naive, crate::segment_tree::NaiveRangeSumTree);

#[derive(Debug, Clone)]
enum Operation {
    PointSet(usize, u64),
    ZeroAssign(usize, usize),
    RangeSum(usize, usize),
}

prop_compose! {
    fn columns_and_operations()(len in 1..200usize)(
        len in Just(len),
        operations in prop::collection::vec(
            prop_oneof![
                (1..=len, any::<u64>()).prop_map(|(c, v)| Operation::PointSet(c, v)),
                (1..=len, 1..=len).prop_map(|(a, b)| Operation::ZeroAssign(a.min(b), a.max(b))),
                (1..=len, 1..=len).prop_map(|(a, b)| Operation::RangeSum(a, b)),
            ],
            1..256,
        )
    ) -> (usize, Vec<Operation>) {
        (len, operations)
    }
}

proptest! {
    #[test]
    fn lazy_tree_agrees_with_naive_tree((len, operations) in columns_and_operations()) {
        let mut lazy = LazyZeroSegmentTree::with_columns(1..=len);
        let mut naive = NaiveRangeSumTree::with_columns(1..=len);

        for operation in operations {
            match operation {
                Operation::PointSet(column, value) => {
                    lazy.point_set(column, Residue::new(value));
                    naive.point_set(column, Residue::new(value));
                }
                Operation::ZeroAssign(l, r) => {
                    lazy.zero_assign(l..=r);
                    naive.zero_assign(l..=r);
                }
                // Reversed bounds exercise the empty range.
                Operation::RangeSum(l, r) => {
                    prop_assert_eq!(lazy.range_sum(l..=r), naive.range_sum(l..=r));
                }
            }
        }
        prop_assert_eq!(lazy.range_sum(1..=len), naive.range_sum(1..=len));
    }
}
