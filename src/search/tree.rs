use super::records::TreeRecords;
use super::{Algorithm, SearchContext};
use crate::{
	error::PlanResult, frontier::Frontier, grid::OccupancyGrid, observer::SearchObserver, Cell,
	Cost, Path, PlanError, VisitId, ROOT_VISIT,
};

/// A Node of the explicit search tree, waiting in the frontier
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct TreeEntry {
	cell: Cell,
	visit: VisitId,
	g: Cost,
	f: Cost,
}

/// The shared driver of the three tree-based searches.
///
/// There is no closed set: every expansion pushes a brand-new Node with a fresh [`VisitId`] for
/// every neighbor, including Cells that were expanded before. Which Algorithm this becomes
/// depends only on `frontier` (priority on `f` for A*, FIFO for BFS, LIFO for DFS) and on the
/// Heuristic of `algorithm`.
///
/// Nodes with equal `f` are expanded lowest `g` first, then in the order they were created.
/// The goal test happens when a Node is expanded. Before every expansion the counter is checked
/// against `max_expansions`.
pub(crate) fn tree_search<G, O, F>(
	ctx: &mut SearchContext<'_, G, O>,
	mut frontier: F,
	algorithm: Algorithm,
	start: Cell,
	goal: Cell,
	max_expansions: usize,
) -> PlanResult<Path>
where
	G: OccupancyGrid + ?Sized,
	O: SearchObserver + ?Sized,
	F: Frontier<TreeEntry>,
{
	let mut records = TreeRecords::new(start);

	let h = ctx.heuristic(algorithm, start, goal);
	frontier.push_with_tie_break(
		TreeEntry {
			cell: start,
			visit: ROOT_VISIT,
			g: 0.0,
			f: h,
		},
		h,
		0.0,
	);
	ctx.track_frontier(frontier.len());

	while !frontier.is_empty() {
		if ctx.expanded_count() >= max_expansions {
			log::warn!(
				"{}-tree: expansion budget of {} reached with {} nodes pending",
				algorithm,
				max_expansions,
				frontier.len()
			);
			return Err(PlanError::ExpansionBudgetExceeded {
				budget: max_expansions,
			});
		}
		let current = match frontier.pop() {
			Some(current) => current,
			None => break,
		};

		ctx.expand(current.cell);
		log::trace!(
			"EXPAND ({}, {}): visit={}, g={:.3}, h={:.3}, f={:.3}, frontier_size={}",
			current.cell.0,
			current.cell.1,
			current.visit,
			current.g,
			current.f - current.g,
			current.f,
			frontier.len()
		);
		ctx.report_partial_path(&records, (current.cell, current.visit));

		if current.cell == goal {
			return ctx.finish(&records, (current.cell, current.visit));
		}

		let neighbors = ctx.neighbors(current.cell);
		for &other in neighbors.iter() {
			let g = current.g + ctx.step_cost(current.cell, other);
			let f = g + ctx.heuristic(algorithm, other, goal);
			let visit = records.issue(other, (current.cell, current.visit));
			frontier.push_with_tie_break(TreeEntry { cell: other, visit, g, f }, f, g);
			ctx.frontier_added(other);
		}
		ctx.recycle(neighbors);
		ctx.track_frontier(frontier.len());
	}

	Err(PlanError::NoPathFound)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		frontier::{FifoFrontier, LifoFrontier, PriorityFrontier},
		grid::GridMap,
		neighbors::MotionModel,
		search::SearchStats,
		NoopObserver,
	};

	fn run<F: Frontier<TreeEntry>>(
		grid: &GridMap,
		frontier: F,
		algorithm: Algorithm,
		start: Cell,
		goal: Cell,
		budget: usize,
	) -> (PlanResult<Path>, SearchStats) {
		let mut stats = SearchStats::default();
		let result = {
			let mut observer = NoopObserver;
			let mut ctx =
				SearchContext::new(grid, MotionModel::FourConnected, &mut observer, &mut stats);
			tree_search(&mut ctx, frontier, algorithm, start, goal, budget)
		};
		(result, stats)
	}

	#[test]
	fn revisits_cells() {
		// a dead end: every Node can only step back and forth
		let grid = GridMap::from_rows(&["..#."], 1.0);
		let (result, stats) = run(&grid, FifoFrontier::new(), Algorithm::Bfs, (0, 0), (3, 0), 20);

		assert_eq!(result, Err(PlanError::ExpansionBudgetExceeded { budget: 20 }));
		assert_eq!(stats.expanded_count, 20);
		assert_eq!(stats.expansion_map[&(0, 0)], 10);
		assert_eq!(stats.expansion_map[&(1, 0)], 10);
	}

	#[test]
	fn a_star_tree_is_optimal() {
		let grid = GridMap::from_rows(&["...", ".#.", "..."], 1.0);
		let (result, _) = run(
			&grid,
			PriorityFrontier::new(),
			Algorithm::AStar,
			(0, 0),
			(2, 2),
			1_000,
		);

		let path = result.unwrap();
		assert_eq!(path.cost(), 4.0);
		assert_eq!(path.len(), 5);
	}

	#[test]
	fn isolated_start_exhausts_frontier() {
		let grid = GridMap::from_rows(&[".#."], 1.0);
		let (result, stats) = run(&grid, LifoFrontier::new(), Algorithm::Dfs, (0, 0), (2, 0), 10);

		assert_eq!(result, Err(PlanError::NoPathFound));
		assert_eq!(stats.expanded_count, 1);
	}

	#[test]
	fn zero_budget_expands_nothing() {
		let grid = GridMap::from_rows(&["..."], 1.0);
		let (result, stats) = run(&grid, LifoFrontier::new(), Algorithm::Dfs, (0, 0), (2, 0), 0);

		assert_eq!(result, Err(PlanError::ExpansionBudgetExceeded { budget: 0 }));
		assert_eq!(stats.expanded_count, 0);
	}
}
