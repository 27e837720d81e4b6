use algorithms::{count_paths, count_paths_with, segment_tree::NaiveRangeSumTree};
use common::{GridDimensions, Obstacle};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

const RNG_SEED: [u8; 16] = *b"0123456789abcdef";

/// Places at most one obstacle into every `tile` x `tile` block of a `side` x `side` grid,
/// which keeps all obstacles disjoint.
fn get_random_obstacles(side: usize, tile: usize) -> (GridDimensions, Vec<Obstacle>) {
    let mut rng = XorShiftRng::from_seed(RNG_SEED);
    let grid = GridDimensions::new(side, side).expect("side is positive");

    let mut obstacles = Vec::new();
    for tile_row in 0..side / tile {
        for tile_column in 0..side / tile {
            let row = tile_row * tile + 1 + rng.gen_range(0..tile);
            let column = tile_column * tile + 1 + rng.gen_range(0..tile);
            let row_end = rng.gen_range(row..=(tile_row + 1) * tile);
            let col_end = rng.gen_range(column..=(tile_column + 1) * tile);
            obstacles.push(Obstacle::new(row, column, row_end, col_end));
        }
    }
    (grid, obstacles)
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_sweep_random_obstacles");
    let (small_grid, small_obstacles) = get_random_obstacles(400, 4);
    group.bench_function("lazy_tree_side_400_obstacles_10000", |b| {
        b.iter(|| count_paths(black_box(small_grid), black_box(&small_obstacles)))
    });
    group.bench_function("naive_tree_side_400_obstacles_10000", |b| {
        b.iter(|| {
            count_paths_with::<NaiveRangeSumTree>(black_box(small_grid), black_box(&small_obstacles))
        })
    });
    group.sample_size(10);
    let (dense_grid, dense_obstacles) = get_random_obstacles(4000, 4);
    group.bench_function("lazy_tree_side_4000_obstacles_1000000", |b| {
        b.iter(|| count_paths(black_box(dense_grid), black_box(&dense_obstacles)))
    });
    let (sparse_grid, sparse_obstacles) = get_random_obstacles(1_000_000, 3000);
    group.bench_function("lazy_tree_side_1000000_obstacles_110889", |b| {
        b.iter(|| count_paths(black_box(sparse_grid), black_box(&sparse_obstacles)))
    });
    group.finish()
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
