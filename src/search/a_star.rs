use super::records::{NodeArena, SearchNode};
use super::{Algorithm, SearchContext};
use crate::{
	error::PlanResult,
	frontier::{Frontier, PriorityFrontier},
	grid::OccupancyGrid,
	observer::SearchObserver,
	Cell, CellSet, Path, PlanError,
};

/// Graph-based [A*](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// OPEN is a priority queue on `f`, CLOSED the set of expanded Cells. A Node in OPEN is only
/// updated when a strictly better `f` is found. The update re-inserts the Node with its new
/// priority, the outdated entry is then skipped once it surfaces, because its Cell is closed by
/// that time.
pub(crate) fn a_star_graph<G, O>(
	ctx: &mut SearchContext<'_, G, O>,
	start: Cell,
	goal: Cell,
) -> PlanResult<Path>
where
	G: OccupancyGrid + ?Sized,
	O: SearchObserver + ?Sized,
{
	let mut nodes = NodeArena::new();
	let mut open = PriorityFrontier::new();
	let mut closed = CellSet::default();

	let h = ctx.heuristic(Algorithm::AStar, start, goal);
	let root = nodes.add_node(SearchNode {
		state: start,
		g: 0.0,
		f: h,
		parent: None,
	});
	open.push(root, h);
	ctx.track_frontier(open.len());

	while let Some(current_id) = open.pop() {
		let current = nodes[current_id];
		if closed.contains(&current.state) {
			continue;
		}

		ctx.expand(current.state);
		log::trace!(
			"EXPAND ({}, {}): g={:.3}, h={:.3}, f={:.3}",
			current.state.0,
			current.state.1,
			current.g,
			current.f - current.g,
			current.f
		);
		ctx.report_partial_path(&nodes, current_id);

		if current.state == goal {
			return ctx.finish(&nodes, current_id);
		}
		closed.insert(current.state);

		let neighbors = ctx.neighbors(current.state);
		for &other in neighbors.iter() {
			if closed.contains(&other) {
				continue;
			}
			let other_g = current.g + ctx.step_cost(current.state, other);
			let other_f = other_g + ctx.heuristic(Algorithm::AStar, other, goal);

			match nodes.id_at(other) {
				None => {
					let other_id = nodes.add_node(SearchNode {
						state: other,
						g: other_g,
						f: other_f,
						parent: Some(current_id),
					});
					open.push(other_id, other_f);
					ctx.frontier_added(other);
				}
				Some(other_id) => {
					let node = &mut nodes[other_id];
					if other_f < node.f {
						node.g = other_g;
						node.f = other_f;
						node.parent = Some(current_id);
						open.push(other_id, other_f);
						ctx.frontier_added(other);
					}
				}
			}
		}
		ctx.recycle(neighbors);
		ctx.track_frontier(open.len());
	}

	Err(PlanError::NoPathFound)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{grid::GridMap, neighbors::MotionModel, observer::EventLog, search::SearchStats};

	fn search(
		grid: &GridMap,
		motion: MotionModel,
		start: Cell,
		goal: Cell,
	) -> (PlanResult<Path>, SearchStats, EventLog) {
		let mut stats = SearchStats::default();
		let mut log = EventLog::default();
		let result = {
			let mut ctx = SearchContext::new(grid, motion, &mut log, &mut stats);
			a_star_graph(&mut ctx, start, goal)
		};
		(result, stats, log)
	}

	#[test]
	fn straight_corridor() {
		let grid = GridMap::from_rows(&["....."], 2.0);
		let (path, stats, log) = search(&grid, MotionModel::FourConnected, (0, 0), (4, 0));
		let path = path.unwrap();

		assert_eq!(path, vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
		assert_eq!(path.cost(), 8.0);
		assert_eq!(stats.expanded_count, 5);
		assert_eq!(log.expanded().collect::<Vec<_>>(), path.cells().to_vec());
	}

	#[test]
	fn unreachable_goal() {
		let grid = GridMap::from_rows(&["..#..", "..#..", "..#.."], 1.0);
		let (path, stats, _) = search(&grid, MotionModel::EightConnected, (0, 0), (4, 2));

		assert_eq!(path, Err(PlanError::NoPathFound));
		assert_eq!(stats.expanded_count, 6);
	}

	#[test]
	fn prefers_straight_steps() {
		let grid = GridMap::from_rows(&["...", "...", "..."], 1.0);
		let (path, _, _) = search(&grid, MotionModel::EightConnected, (0, 0), (2, 0));
		let path = path.unwrap();

		assert_eq!(path, vec![(0, 0), (1, 0), (2, 0)]);
		assert_eq!(path.cost(), 2.0);
	}
}
