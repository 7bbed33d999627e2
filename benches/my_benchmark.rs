use env_logger::Env;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use grid_search_planning::{plan_batch, prelude::*};
use nanorand::{Rng, WyRand};

/// A Grid with roughly `percent`% obstacles. The corners are always kept free.
fn random_grid(width: usize, height: usize, percent: u32) -> GridMap {
	let mut grid = GridMap::new(width, height, 1.0);
	let mut rng = WyRand::new_seed(4);
	for y in 0..height as isize {
		for x in 0..width as isize {
			if rng.generate_range(0u32..100) < percent {
				grid.set_obstacle((x, y), true);
			}
		}
	}
	let (w, h) = (width as isize - 1, height as isize - 1);
	for corner in [(0, 0), (w, 0), (0, h), (w, h)] {
		grid.set_obstacle(corner, false);
	}
	grid
}

#[allow(unused)]
// Setup logging output
fn init() {
	let env = Env::default()
		.filter_or("MY_LOG_LEVEL", "info") // trace logs every single expansion
		.write_style_or("MY_LOG_STYLE", "always");

	let _ = env_logger::try_init_from_env(env);
}

fn bench_graph_search(c: &mut Criterion) {
	let mut group = c.benchmark_group("Graph Search");

	// Log to stdout
	init();

	let map_sizes = [64, 256];

	for map_size in map_sizes {
		let uniform = GridMap::new(map_size, map_size, 1.0);
		let random = random_grid(map_size, map_size, 20);
		let goal = (map_size as isize - 1, map_size as isize - 1);

		for algorithm in Algorithm::ALL {
			let config = PlannerConfig::new(algorithm, MotionModel::EightConnected);

			let id = BenchmarkId::new(format!("{}, Uniform Map", algorithm), map_size);
			group.bench_with_input(id, &uniform, |b, grid| {
				let mut planner = Planner::new(grid, config);
				b.iter(|| planner.plan((0, 0), goal))
			});

			let id = BenchmarkId::new(format!("{}, Random Map", algorithm), map_size);
			group.bench_with_input(id, &random, |b, grid| {
				let mut planner = Planner::new(grid, config);
				b.iter(|| planner.plan((0, 0), goal))
			});
		}
	}
}

fn bench_tree_search(c: &mut Criterion) {
	let mut group = c.benchmark_group("Tree Search");
	// init();

	// tree-based searches are only tractable on tiny maps
	let grid = random_grid(8, 8, 15);
	let budget = 20_000;

	for algorithm in Algorithm::ALL {
		let config = PlannerConfig::new(algorithm, MotionModel::FourConnected).tree_based(budget);
		let id = format!("{}, Small Random Map, Budget: {}", config, budget);
		group.bench_function(&id, |b| {
			let mut planner = Planner::new(&grid, config);
			b.iter(|| planner.plan((0, 0), (7, 7)))
		});
	}
}

fn bench_batch(c: &mut Criterion) {
	let mut group = c.benchmark_group("Batch");

	// For large maps, use a smaller sample size so they don't take 30+s per run.
	group.sample_size(10);

	let size = 512;
	let grid = random_grid(size, size, 20);
	let last = size as isize - 1;
	let corners = [(0, 0), (last, 0), (0, last), (last, last)];
	let queries = corners
		.iter()
		.flat_map(|&start| corners.iter().map(move |&goal| (start, goal)))
		.filter(|(start, goal)| start != goal)
		.collect::<Vec<_>>();

	#[cfg(feature = "parallel")]
	let id = format!("A* Corner Queries, Parallel, Map Size: ({}, {})", size, size);
	#[cfg(not(feature = "parallel"))]
	let id = format!("A* Corner Queries, Single Threaded, Map Size: ({}, {})", size, size);

	group.bench_function(&id, |b| {
		b.iter(|| plan_batch(&grid, PlannerConfig::A_STAR, &queries))
	});
}

criterion_group!(benches, bench_graph_search, bench_tree_search, bench_batch);
criterion_main!(benches);
