use super::records::ParentMap;
use super::SearchContext;
use crate::{
	error::PlanResult,
	frontier::{FifoFrontier, Frontier},
	grid::OccupancyGrid,
	observer::SearchObserver,
	Cell, CellSet, Path, PlanError,
};

/// Graph-based [Breadth-First Search](https://en.wikipedia.org/wiki/Breadth-first_search).
///
/// Every Cell enters the queue at most once, so the first Path found has the fewest steps.
/// The goal test happens when a Cell is discovered, the goal itself is never expanded.
pub(crate) fn bfs_graph<G, O>(
	ctx: &mut SearchContext<'_, G, O>,
	start: Cell,
	goal: Cell,
) -> PlanResult<Path>
where
	G: OccupancyGrid + ?Sized,
	O: SearchObserver + ?Sized,
{
	let mut queue = FifoFrontier::new();
	let mut in_queue = CellSet::default();
	let mut closed = CellSet::default();
	let mut parents = ParentMap::new(start);

	queue.push(start, 0.0);
	in_queue.insert(start);
	ctx.track_frontier(queue.len());

	while let Some(current) = queue.pop() {
		in_queue.remove(&current);
		ctx.expand(current);
		log::trace!(
			"EXPAND ({}, {}): queue_size={}",
			current.0,
			current.1,
			queue.len()
		);
		closed.insert(current);
		ctx.report_partial_path(&parents, current);

		let neighbors = ctx.neighbors(current);
		for &other in neighbors.iter() {
			if closed.contains(&other) || in_queue.contains(&other) {
				continue;
			}
			parents.insert(other, current);
			if other == goal {
				return ctx.finish(&parents, other);
			}
			queue.push(other, 0.0);
			in_queue.insert(other);
			ctx.frontier_added(other);
		}
		ctx.recycle(neighbors);
		ctx.track_frontier(queue.len());
	}

	Err(PlanError::NoPathFound)
}
