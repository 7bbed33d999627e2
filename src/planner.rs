use crate::{
	grid::{Occupancy, OccupancyGrid},
	observer::{NoopObserver, SearchObserver},
	search::{self, SearchContext, SearchStats},
	Cell, CellMap, Path, PlanError, PlanResult,
};

mod planner_config;
pub use self::planner_config::{PlannerConfig, DEFAULT_MAX_EXPANSIONS};

mod batch;
pub use self::batch::{plan_batch, PlanReport};

/// Runs one configured search strategy on a borrowed Grid.
///
/// All per-search state is created by [`plan`](Planner::plan) and dropped when it returns.
/// Only the counters of the most recent call are kept for inspection.
///
/// A Planner is not meant to be shared between threads. Several Planners may however search
/// the same Grid concurrently, see [`plan_batch`].
pub struct Planner<'g, G: ?Sized, O = NoopObserver> {
	grid: &'g G,
	config: PlannerConfig,
	observer: O,
	stats: SearchStats,
}

impl<'g, G: OccupancyGrid + ?Sized> Planner<'g, G> {
	/// Creates a Planner without instrumentation
	pub fn new(grid: &'g G, config: PlannerConfig) -> Self {
		Planner::with_observer(grid, config, NoopObserver)
	}
}

impl<'g, G: OccupancyGrid + ?Sized, O: SearchObserver> Planner<'g, G, O> {
	/// Creates a Planner that reports its progress to `observer`
	pub fn with_observer(grid: &'g G, config: PlannerConfig, observer: O) -> Self {
		Planner {
			grid,
			config,
			observer,
			stats: SearchStats::default(),
		}
	}

	/// Searches a Path from `start` to `goal`.
	///
	/// `start` and `goal` are validated before anything is expanded. If they are the same Cell,
	/// the Path `[start]` is returned without any expansion.
	///
	/// ## Returns
	/// the Path on success. The first Cell is always `start` and the last is `goal`.
	///
	/// ## Errors
	/// - [`PlanError::InvalidStart`] / [`PlanError::InvalidGoal`] if either Cell is out of
	///   bounds, an obstacle or inflated
	/// - [`PlanError::NoPathFound`] if the frontier runs empty
	/// - [`PlanError::ExpansionBudgetExceeded`] if a tree-based search hits its budget
	/// - [`PlanError::ReconstructionIntegrityViolation`] if the parent links are corrupt
	///
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use grid_search_planning::prelude::*;
	/// let grid = GridMap::from_rows(&["..#..", "..#..", "....."], 1.0);
	/// let mut planner = Planner::new(&grid, PlannerConfig::BFS);
	///
	/// let path = planner.plan((0, 0), (4, 0)).unwrap();
	/// assert!(path.contains(&(2, 2)));
	///
	/// let blocked = planner.plan((0, 0), (2, 0));
	/// assert_eq!(
	///     blocked,
	///     Err(PlanError::InvalidGoal { cell: (2, 0), occupancy: Occupancy::Obstacle })
	/// );
	/// assert_eq!(planner.expanded_count(), 0);
	/// ```
	pub fn plan(&mut self, start: Cell, goal: Cell) -> PlanResult<Path> {
		self.stats.reset();

		let occupancy = self.grid.occupancy(start);
		if occupancy != Occupancy::Free {
			log::debug!("rejecting start ({}, {}): {}", start.0, start.1, occupancy);
			return Err(PlanError::InvalidStart {
				cell: start,
				occupancy,
			});
		}
		let occupancy = self.grid.occupancy(goal);
		if occupancy != Occupancy::Free {
			log::debug!("rejecting goal ({}, {}): {}", goal.0, goal.1, occupancy);
			return Err(PlanError::InvalidGoal {
				cell: goal,
				occupancy,
			});
		}

		self.observer.on_search_start(start, goal);
		if start == goal {
			return Ok(Path::new(vec![start], 0.0));
		}

		log::debug!(
			"planning ({}, {}) -> ({}, {}) with {}",
			start.0,
			start.1,
			goal.0,
			goal.1,
			self.config
		);

		let PlannerConfig {
			algorithm,
			mode,
			motion,
		} = self.config;
		let result = {
			let mut ctx = SearchContext::new(self.grid, motion, &mut self.observer, &mut self.stats);
			search::run(&mut ctx, algorithm, mode, start, goal)
		};

		match &result {
			Ok(path) => log::debug!(
				"found path with {} cells, cost {:.3}, after {} expansions",
				path.len(),
				path.cost(),
				self.stats.expanded_count
			),
			Err(err) => log::debug!(
				"search failed after {} expansions: {}",
				self.stats.expanded_count,
				err
			),
		}
		result
	}

	/// The number of expansions of the last call to [`plan`](Planner::plan)
	pub fn expanded_count(&self) -> usize {
		self.stats.expanded_count
	}

	/// How often each Cell was expanded during the last call to [`plan`](Planner::plan)
	///
	/// For graph-based searches every count is 1.
	pub fn expansion_map(&self) -> &CellMap<usize> {
		&self.stats.expansion_map
	}

	/// The largest number of entries the frontier held during the last call to
	/// [`plan`](Planner::plan)
	pub fn peak_frontier_len(&self) -> usize {
		self.stats.peak_frontier_len
	}

	/// The config used by this Planner
	pub fn config(&self) -> PlannerConfig {
		self.config
	}

	/// The Grid that is searched
	pub fn grid(&self) -> &'g G {
		self.grid
	}

	/// A reference to the observer
	pub fn observer(&self) -> &O {
		&self.observer
	}

	/// A mutable reference to the observer
	pub fn observer_mut(&mut self) -> &mut O {
		&mut self.observer
	}

	/// Consumes the Planner and returns the observer
	pub fn into_observer(self) -> O {
		self.observer
	}
}

use std::fmt;
impl<G: ?Sized, O> fmt::Debug for Planner<'_, G, O> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		fmt.debug_struct("Planner")
			.field("config", &self.config)
			.field("expanded_count", &self.stats.expanded_count)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		grid::GridMap, neighbors::Neighborhood, observer::EventLog, Algorithm, MotionModel, SearchEvent,
	};

	#[test]
	fn counters_reset_between_calls() {
		let grid = GridMap::new(6, 6, 1.0);
		let mut planner = Planner::new(&grid, PlannerConfig::A_STAR);

		planner.plan((0, 0), (5, 5)).unwrap();
		let first = planner.expanded_count();
		planner.plan((0, 0), (5, 5)).unwrap();

		assert!(first > 0);
		assert_eq!(planner.expanded_count(), first);
		assert_eq!(planner.expansion_map().values().sum::<usize>(), first);

		planner.plan((2, 2), (2, 2)).unwrap();
		assert_eq!(planner.expanded_count(), 0);
		assert!(planner.expansion_map().is_empty());
	}

	#[test]
	fn invalid_start() {
		let grid = GridMap::from_rows(&["+.."], 1.0);
		let mut planner = Planner::new(&grid, PlannerConfig::DFS);

		assert_eq!(
			planner.plan((0, 0), (2, 0)),
			Err(PlanError::InvalidStart {
				cell: (0, 0),
				occupancy: Occupancy::Inflated
			})
		);
		assert_eq!(
			planner.plan((-1, 0), (2, 0)),
			Err(PlanError::InvalidStart {
				cell: (-1, 0),
				occupancy: Occupancy::OutOfBounds
			})
		);
	}

	#[test]
	fn start_is_reported_first() {
		let grid = GridMap::new(3, 1, 1.0);
		let config = PlannerConfig::new(Algorithm::Bfs, MotionModel::FourConnected);
		let mut planner = Planner::with_observer(&grid, config, EventLog::default());
		planner.plan((0, 0), (2, 0)).unwrap();

		let log = planner.into_observer();
		assert_eq!(log.events[0], SearchEvent::Start((0, 0), (2, 0)));
		assert_eq!(log.events[1], SearchEvent::Expand((0, 0)));
	}

	#[test]
	fn partial_paths_follow_expansions() {
		let grid = GridMap::new(4, 1, 1.0);
		let config = PlannerConfig::new(Algorithm::AStar, MotionModel::FourConnected);
		let mut planner = Planner::with_observer(&grid, config, EventLog::with_partial_paths());
		planner.plan((0, 0), (3, 0)).unwrap();

		let log = planner.into_observer();
		let partial = log.partial_paths().collect::<Vec<_>>();
		assert_eq!(partial.len(), 4);
		assert_eq!(partial[0], &[(0, 0)][..]);
		assert_eq!(partial[3], &[(0, 0), (1, 0), (2, 0), (3, 0)][..]);
	}

	#[test]
	fn bfs_event_sequence() {
		let grid = GridMap::new(3, 1, 1.0);
		let config = PlannerConfig::new(Algorithm::Bfs, MotionModel::FourConnected);
		let mut planner = Planner::with_observer(&grid, config, EventLog::default());
		planner.plan((0, 0), (2, 0)).unwrap();

		assert_eq!(planner.peak_frontier_len(), 1);
		let log = planner.into_observer();
		assert_eq!(
			log.events,
			vec![
				SearchEvent::Start((0, 0), (2, 0)),
				SearchEvent::Expand((0, 0)),
				SearchEvent::FrontierAdd((1, 0)),
				SearchEvent::Expand((1, 0)),
			]
		);
		assert_eq!(log.frontier_added().collect::<Vec<_>>(), vec![(1, 0)]);
	}

	#[test]
	fn frontier_adds_follow_expansions() {
		let grid = GridMap::new(3, 3, 1.0);
		let config = PlannerConfig::new(Algorithm::AStar, MotionModel::FourConnected);
		let mut planner = Planner::with_observer(&grid, config, EventLog::default());
		planner.plan((0, 0), (2, 2)).unwrap();

		// every insertion is reported right after the expansion that produced it
		let log = planner.observer();
		let mut current = None;
		for event in &log.events {
			match *event {
				SearchEvent::Expand(cell) => current = Some(cell),
				SearchEvent::FrontierAdd(cell) => {
					let parent = current.unwrap();
					assert!(MotionModel::FourConnected.is_step(parent, cell));
				}
				_ => {}
			}
		}
		assert_eq!(
			&log.events[..3],
			&[
				SearchEvent::Start((0, 0), (2, 2)),
				SearchEvent::Expand((0, 0)),
				SearchEvent::FrontierAdd((1, 0)),
			]
		);
		assert!(planner.peak_frontier_len() >= 2);
	}

	#[test]
	fn dfs_tree_partial_paths_revisit_cells() {
		let grid = GridMap::new(3, 1, 1.0);
		let config = PlannerConfig::DFS
			.with_motion(MotionModel::FourConnected)
			.tree_based(6);
		let mut planner = Planner::with_observer(&grid, config, EventLog::with_partial_paths());

		// the stack always ends with the step back, so the search swings between (0, 0) and (1, 0)
		assert_eq!(
			planner.plan((0, 0), (2, 0)),
			Err(PlanError::ExpansionBudgetExceeded { budget: 6 })
		);
		assert_eq!(planner.peak_frontier_len(), 4);

		let log = planner.into_observer();
		let partial = log.partial_paths().collect::<Vec<_>>();
		assert_eq!(partial.len(), 6);
		for (i, path) in partial.iter().enumerate() {
			assert_eq!(path.len(), i + 1);
			for (depth, &cell) in path.iter().enumerate() {
				assert_eq!(cell, ((depth % 2) as isize, 0));
			}
		}
		assert_eq!(partial[2], &[(0, 0), (1, 0), (0, 0)][..]);
	}

	#[test]
	fn borrowed_observer() {
		let grid = GridMap::new(3, 3, 1.0);
		let mut log = EventLog::default();
		{
			let mut planner = Planner::with_observer(&grid, PlannerConfig::A_STAR, &mut log);
			planner.plan((0, 0), (2, 2)).unwrap();
		}
		assert!(log.expanded().count() > 0);
	}
}
