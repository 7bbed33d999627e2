use super::{Planner, PlannerConfig};
use crate::{grid::OccupancyGrid, Cell, Path, PlanResult};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The outcome of one query of [`plan_batch`]
#[derive(Clone, Debug, PartialEq)]
pub struct PlanReport {
	/// the start of the query
	pub start: Cell,
	/// the goal of the query
	pub goal: Cell,
	/// what [`Planner::plan`] returned
	pub result: PlanResult<Path>,
	/// see [`Planner::expanded_count`]
	pub expanded_count: usize,
	/// see [`Planner::peak_frontier_len`]
	pub peak_frontier_len: usize,
}

/// Runs every `(start, goal)` query with its own [`Planner`] and returns the reports in query
/// order.
///
/// The Grid is only ever read, so with the `parallel` feature (on by default) the queries are
/// distributed over the rayon thread pool.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use grid_search_planning::{prelude::*, plan_batch};
/// let grid = GridMap::from_rows(&["....", ".##.", "...."], 1.0);
/// let reports = plan_batch(&grid, PlannerConfig::A_STAR, &[((0, 0), (3, 2)), ((0, 0), (1, 1))]);
///
/// assert!(reports[0].result.is_ok());
/// assert!(matches!(reports[1].result, Err(PlanError::InvalidGoal { .. })));
/// ```
pub fn plan_batch<G>(grid: &G, config: PlannerConfig, queries: &[(Cell, Cell)]) -> Vec<PlanReport>
where
	G: OccupancyGrid + Sync + ?Sized,
{
	let run = |&(start, goal): &(Cell, Cell)| {
		let mut planner = Planner::new(grid, config);
		let result = planner.plan(start, goal);
		PlanReport {
			start,
			goal,
			result,
			expanded_count: planner.expanded_count(),
			peak_frontier_len: planner.peak_frontier_len(),
		}
	};

	#[cfg(feature = "parallel")]
	{
		queries.par_iter().map(run).collect()
	}
	#[cfg(not(feature = "parallel"))]
	{
		queries.iter().map(run).collect()
	}
}
