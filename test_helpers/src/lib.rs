#![cfg_attr(feature = "strict", deny(warnings))]
#![cfg_attr(feature = "strict", deny(clippy::all))]
#![cfg_attr(feature = "strict", deny(missing_docs))]
//! This crate contains stuff that's really helpful for tests.
use common::{GridDimensions, Obstacle};
use proptest::prelude::*;

mod brute_force;
pub use brute_force::count_path_classes;

/// Returns true if the two obstacles share at least one cell.
pub fn obstacles_overlap(a: &Obstacle, b: &Obstacle) -> bool {
    a.row_start <= b.row_end
        && b.row_start <= a.row_end
        && a.columns().overlaps(&b.columns())
}

prop_compose! {
    /// Gives a grid with at most `max_rows` rows and at most `max_columns` columns.
    pub fn grid(max_rows: usize, max_columns: usize)(
        rows in 1..=max_rows,
        columns in 1..=max_columns,
    ) -> GridDimensions {
        GridDimensions::new(rows, columns).unwrap()
    }
}

prop_compose! {
    /// Gives at most `max_count` pairwise disjoint obstacles inside `grid`.
    /// Candidates overlapping an earlier obstacle are dropped, so obstacles may touch.
    /// Obstacles are small compared to the grid, but may still cover the start or the destination.
    pub fn disjoint_obstacles(grid: GridDimensions, max_count: usize)(
        candidates in prop::collection::vec(
            (1..=grid.rows(), 1..=grid.columns(), 0..3usize, 0..3usize),
            0..=max_count,
        )
    ) -> Vec<Obstacle> {
        let mut kept: Vec<Obstacle> = Vec::new();
        for (row, column, height, width) in candidates {
            let candidate = Obstacle::new(
                row,
                column,
                (row + height).min(grid.rows()),
                (column + width).min(grid.columns()),
            );
            if kept.iter().all(|other| !obstacles_overlap(other, &candidate)) {
                kept.push(candidate);
            }
        }
        kept
    }
}

prop_compose! {
    /// Gives at most `max_count` obstacles inside `grid` which may overlap each other.
    /// Every third obstacle or so repeats the columns of an earlier one.
    pub fn overlapping_obstacles(grid: GridDimensions, max_count: usize)(
        candidates in prop::collection::vec(
            (
                1..=grid.rows(),
                1..=grid.columns(),
                0..4usize,
                0..4usize,
                prop::option::weighted(0.3, any::<prop::sample::Index>()),
            ),
            0..=max_count,
        )
    ) -> Vec<Obstacle> {
        let mut obstacles: Vec<Obstacle> = Vec::new();
        for (row, column, height, width, repeated) in candidates {
            let (col_start, col_end) = match repeated {
                Some(idx) if !obstacles.is_empty() => {
                    let earlier = idx.get(&obstacles);
                    (earlier.col_start, earlier.col_end)
                }
                _ => (column, (column + width).min(grid.columns())),
            };
            let row_end = (row + height).min(grid.rows());
            obstacles.push(Obstacle::new(row, col_start, row_end, col_end));
        }
        obstacles
    }
}

/// Gives a square-ish grid with sides at most `max_side` together with
/// at most `max_count` pairwise disjoint obstacles inside it.
pub fn grid_with_obstacles(
    max_side: usize,
    max_count: usize,
) -> impl Strategy<Value = (GridDimensions, Vec<Obstacle>)> {
    grid(max_side, max_side)
        .prop_flat_map(move |grid| (Just(grid), disjoint_obstacles(grid, max_count)))
}

/// Like [grid_with_obstacles], but the obstacles may overlap.
pub fn grid_with_overlapping_obstacles(
    max_side: usize,
    max_count: usize,
) -> impl Strategy<Value = (GridDimensions, Vec<Obstacle>)> {
    grid(max_side, max_side)
        .prop_flat_map(move |grid| (Just(grid), overlapping_obstacles(grid, max_count)))
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_obstacles_are_valid_and_disjoint((grid, obstacles) in grid_with_obstacles(12, 10)) {
            for (idx, obstacle) in obstacles.iter().enumerate() {
                prop_assert!(obstacle.validate_within(&grid).is_ok());
                for other in &obstacles[idx + 1..] {
                    prop_assert!(!obstacles_overlap(obstacle, other));
                }
            }
        }
    }

    proptest! {
        #[test]
        fn overlapping_obstacles_are_valid((grid, obstacles) in grid_with_overlapping_obstacles(12, 10)) {
            for obstacle in &obstacles {
                prop_assert!(obstacle.validate_within(&grid).is_ok());
            }
        }
    }

    #[test]
    fn touching_obstacles_do_not_overlap() {
        let a = Obstacle::new(1, 1, 2, 2);
        assert!(!obstacles_overlap(&a, &Obstacle::new(3, 1, 3, 2)));
        assert!(!obstacles_overlap(&a, &Obstacle::new(1, 3, 2, 3)));
        assert!(obstacles_overlap(&a, &Obstacle::new(2, 2, 5, 5)));
    }
}

