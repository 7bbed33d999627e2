use fnv::FnvHashMap;
use grid_search_planning::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};

const SIZE: usize = 24;
const TRIALS: u64 = 64;
const BUDGET: usize = 200_000;

struct Run {
	time: u128,
	expanded: usize,
	cost: Option<f64>,
}

fn random_grid(seed: u64) -> (GridMap, Cell, Cell) {
	let mut rng = StdRng::seed_from_u64(seed);
	let mut grid = GridMap::new(SIZE, SIZE, 0.5);
	for y in 0..SIZE as isize {
		for x in 0..SIZE as isize {
			if rng.gen_bool(0.2) {
				grid.set_obstacle((x, y), true);
			}
		}
	}
	let start = (0, 0);
	let goal = (SIZE as isize - 1, SIZE as isize - 1);
	grid.set_obstacle(start, false);
	grid.set_obstacle(goal, false);
	(grid, start, goal)
}

fn main() {
	let configs = PlannerConfig::all_variants(MotionModel::EightConnected, BUDGET);

	let trials = (0..TRIALS)
		.into_par_iter()
		.map(|seed| {
			let (grid, start, goal) = random_grid(seed);
			configs
				.iter()
				.map(|&config| {
					let mut planner = Planner::new(&grid, config);
					let start_time = Instant::now();
					let path = planner.plan(start, goal);
					let time = duration_as_nanos(Instant::now() - start_time);
					Run {
						time,
						expanded: planner.expanded_count(),
						cost: path.ok().map(|p| p.cost()),
					}
				})
				.collect::<Vec<_>>()
		})
		.collect::<Vec<_>>();

	println!("finished {} trials on {}x{} Grids", TRIALS, SIZE, SIZE);

	let mut results: FnvHashMap<String, Vec<&Run>> = FnvHashMap::default();
	for runs in &trials {
		for (config, run) in configs.iter().zip(runs) {
			results.entry(config.to_string()).or_default().push(run);
		}
	}
	// graph-based A* is the reference for optimality
	let best = trials.iter().map(|runs| runs[0].cost).collect::<Vec<_>>();

	for config in &configs {
		let name = config.to_string();
		let runs = &results[&name];

		let times = runs.iter().map(|r| r.time);
		let min_time = times.clone().min().unwrap_or(0) as f64 / 1_000_000.0;
		let max_time = times.clone().max().unwrap_or(0) as f64 / 1_000_000.0;
		let avg_time = times.sum::<u128>() as f64 / runs.len() as f64 / 1_000_000.0;
		let avg_expanded = runs.iter().map(|r| r.expanded).sum::<usize>() as f64 / runs.len() as f64;

		let found = runs.iter().filter(|r| r.cost.is_some()).count();
		let ratios = runs
			.iter()
			.zip(best.iter())
			.filter_map(|(run, best)| Some(best.as_ref()? / run.cost?));
		let count = ratios.clone().count().max(1);
		let avg_ratio = ratios.sum::<f64>() / count as f64 * 100.0;

		println!(
			"{:<18} | {:.3}ms - {:.3}ms; {:.3}ms | {:>9.1} expanded | {:>2}/{} found | {:.2}%",
			name, min_time, max_time, avg_time, avg_expanded, found, TRIALS, avg_ratio,
		);
	}
}

fn duration_as_nanos(d: Duration) -> u128 {
	d.as_secs() as u128 * 1_000_000_000 + d.subsec_nanos() as u128
}
