use super::records::ParentMap;
use super::SearchContext;
use crate::{
	error::PlanResult,
	frontier::{Frontier, LifoFrontier},
	grid::OccupancyGrid,
	observer::SearchObserver,
	Cell, CellSet, Path, PlanError,
};

/// Graph-based [Depth-First Search](https://en.wikipedia.org/wiki/Depth-first_search) on an
/// explicit stack.
///
/// A Cell is never pushed while it is still pending on the stack, and never again once it has
/// been expanded. Its parent is fixed when it is pushed.
pub(crate) fn dfs_graph<G, O>(
	ctx: &mut SearchContext<'_, G, O>,
	start: Cell,
	goal: Cell,
) -> PlanResult<Path>
where
	G: OccupancyGrid + ?Sized,
	O: SearchObserver + ?Sized,
{
	let mut stack = LifoFrontier::new();
	let mut pending = CellSet::default();
	let mut closed = CellSet::default();
	let mut parents = ParentMap::new(start);

	stack.push((start, None), 0.0);
	pending.insert(start);
	ctx.track_frontier(stack.len());

	while let Some((current, parent)) = stack.pop() {
		pending.remove(&current);
		if closed.contains(&current) {
			continue;
		}
		if let Some(parent) = parent {
			parents.insert(current, parent);
		}

		ctx.expand(current);
		log::trace!(
			"EXPAND ({}, {}): stack_size={}",
			current.0,
			current.1,
			stack.len()
		);
		ctx.report_partial_path(&parents, current);

		if current == goal {
			return ctx.finish(&parents, current);
		}
		closed.insert(current);

		let neighbors = ctx.neighbors(current);
		for &other in neighbors.iter() {
			if closed.contains(&other) || pending.contains(&other) {
				continue;
			}
			stack.push((other, Some(current)), 0.0);
			pending.insert(other);
			ctx.frontier_added(other);
		}
		ctx.recycle(neighbors);
		ctx.track_frontier(stack.len());
	}

	Err(PlanError::NoPathFound)
}
