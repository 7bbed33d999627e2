#![allow(dead_code)]

use grid_search_planning::prelude::*;
use nanorand::{Rng, WyRand};
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

// Setup logging output
pub fn init() {
	let _ = env_logger::builder().is_test(true).try_init();
}

/// 5x5, with a wall at x = 2 for y = 0..=3. The only gap is (2, 4).
pub fn walled_grid() -> GridMap {
	GridMap::from_rows(
		&[
			"..#..", //
			"..#..", //
			"..#..", //
			"..#..", //
			".....", //
		],
		1.0,
	)
}

/// A random Grid with roughly `obstacle_percent`% obstacles and a few inflated Cells
pub fn random_grid(rng: &mut WyRand, width: usize, height: usize, obstacle_percent: u32) -> GridMap {
	let mut grid = GridMap::new(width, height, 0.5);
	for y in 0..height as isize {
		for x in 0..width as isize {
			let roll = rng.generate_range(0u32..100);
			if roll < obstacle_percent {
				grid.set_obstacle((x, y), true);
			} else if roll < obstacle_percent + 3 {
				grid.mark_inflated((x, y));
			}
		}
	}
	grid
}

pub fn free_cells(grid: &GridMap) -> Vec<Cell> {
	let mut cells = vec![];
	for y in 0..grid.height() as isize {
		for x in 0..grid.width() as isize {
			if grid.is_traversable((x, y)) {
				cells.push((x, y));
			}
		}
	}
	cells
}

pub fn random_free_cell(rng: &mut WyRand, cells: &[Cell]) -> Cell {
	cells[rng.generate_range(0..cells.len())]
}

/// Exhaustive Dijkstra from `start`. Returns the optimal Cost to every reachable Cell.
pub fn dijkstra(
	grid: &GridMap,
	motion: MotionModel,
	start: Cell,
	step_cost: impl Fn(Cell, Cell) -> f64,
) -> hashbrown::HashMap<Cell, f64> {
	let mut best = hashbrown::HashMap::new();
	let mut heap = BinaryHeap::new();
	heap.push(Reverse((OrderedFloat(0.0), start)));

	while let Some(Reverse((OrderedFloat(cost), cell))) = heap.pop() {
		if best.contains_key(&cell) {
			continue;
		}
		best.insert(cell, cost);
		for &(dx, dy) in motion.moves() {
			let next = (cell.0 + dx, cell.1 + dy);
			if grid.is_traversable(next) && !best.contains_key(&next) {
				heap.push(Reverse((OrderedFloat(cost + step_cost(cell, next)), next)));
			}
		}
	}
	best
}

/// Checks that `path` is a legal walk from `start` to `goal`
pub fn assert_valid_path(grid: &GridMap, motion: MotionModel, path: &Path, start: Cell, goal: Cell) {
	assert!(!path.is_empty());
	assert_eq!(path.start(), start);
	assert_eq!(path.goal(), goal);
	for &cell in path.iter() {
		assert!(grid.is_traversable(cell), "{:?} is not traversable", cell);
	}
	for step in path.windows(2) {
		assert!(
			motion.is_step(step[0], step[1]),
			"{:?} -> {:?} is not a legal step",
			step[0],
			step[1]
		);
	}
}

pub fn approx_eq(a: f64, b: f64) -> bool {
	(a - b).abs() < 1e-9
}
