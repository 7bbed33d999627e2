//! The six search strategies and their shared expansion bookkeeping

mod a_star;
mod bfs;
mod dfs;
mod records;
mod tree;

use crate::{
	error::PlanResult,
	frontier::{FifoFrontier, LifoFrontier, PriorityFrontier},
	grid::OccupancyGrid,
	neighbors::{traversable_neighbors, MotionModel, Neighborhood},
	observer::SearchObserver,
	path::{reconstruct, ParentLinks},
	Cell, CellMap, Cost, Path, PlanError,
};
use std::fmt;
use std::str::FromStr;

/// The search Algorithm, i.e. the order in which the frontier is expanded
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
	/// lowest `g + h` first. Finds optimal Paths.
	AStar,
	/// Breadth-First Search: oldest first. Finds Paths with the fewest steps.
	Bfs,
	/// Depth-First Search: newest first. No guarantee on Path quality.
	Dfs,
}

impl Algorithm {
	/// All Algorithms, in a fixed order
	pub const ALL: [Algorithm; 3] = [Algorithm::AStar, Algorithm::Bfs, Algorithm::Dfs];

	/// `true` if the Algorithm uses a Heuristic
	pub fn is_informed(self) -> bool {
		self == Algorithm::AStar
	}

	/// The Heuristic used by this Algorithm, in Cells.
	///
	/// Identically zero for the uninformed Algorithms, so every Algorithm can be driven through
	/// the same interface.
	pub fn heuristic<N: Neighborhood>(self, neighborhood: &N, cell: Cell, goal: Cell) -> Cost {
		if self.is_informed() {
			neighborhood.heuristic(cell, goal)
		} else {
			0.0
		}
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Algorithm::AStar => "A*",
			Algorithm::Bfs => "BFS",
			Algorithm::Dfs => "DFS",
		})
	}
}

/// The error returned when parsing an unknown [`Algorithm`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError(String);

impl fmt::Display for ParseAlgorithmError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"unknown algorithm {:?}, expected \"a*\", \"bfs\" or \"dfs\"",
			self.0
		)
	}
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
	type Err = ParseAlgorithmError;
	fn from_str(s: &str) -> Result<Algorithm, ParseAlgorithmError> {
		match s.trim().to_ascii_lowercase().as_str() {
			"a*" | "astar" | "a_star" => Ok(Algorithm::AStar),
			"bfs" => Ok(Algorithm::Bfs),
			"dfs" => Ok(Algorithm::Dfs),
			other => Err(ParseAlgorithmError(other.to_owned())),
		}
	}
}

/// The expansion discipline
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchMode {
	/// Every Cell is expanded at most once
	Graph,
	/// Every discovery of a Cell becomes a separate Node of an explicit search tree.
	///
	/// On any Grid with a cycle the tree is infinite, so the search stops with
	/// [`PlanError::ExpansionBudgetExceeded`] after `max_expansions` expansions.
	Tree {
		/// the maximum number of expansions
		max_expansions: usize,
	},
}

impl SearchMode {
	/// Shorthand for [`SearchMode::Tree`]
	pub const fn tree(max_expansions: usize) -> SearchMode {
		SearchMode::Tree { max_expansions }
	}

	/// The expansion budget, if any
	pub fn budget(&self) -> Option<usize> {
		match *self {
			SearchMode::Graph => None,
			SearchMode::Tree { max_expansions } => Some(max_expansions),
		}
	}

	/// `true` for [`SearchMode::Tree`]
	pub fn is_tree(&self) -> bool {
		matches!(self, SearchMode::Tree { .. })
	}
}

impl fmt::Display for SearchMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SearchMode::Graph => f.write_str("graph"),
			SearchMode::Tree { .. } => f.write_str("tree"),
		}
	}
}

/// Counters of a single search
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SearchStats {
	pub expanded_count: usize,
	pub expansion_map: CellMap<usize>,
	pub peak_frontier_len: usize,
}

impl SearchStats {
	pub fn reset(&mut self) {
		self.expanded_count = 0;
		self.expansion_map.clear();
		self.peak_frontier_len = 0;
	}
}

/// Everything a driver loop needs besides its own frontier and parent tables
pub(crate) struct SearchContext<'a, G: ?Sized, O: ?Sized> {
	grid: &'a G,
	motion: MotionModel,
	resolution: f64,
	observer: &'a mut O,
	stats: &'a mut SearchStats,
	buffer: Vec<Cell>,
}

impl<'a, G, O> SearchContext<'a, G, O>
where
	G: OccupancyGrid + ?Sized,
	O: SearchObserver + ?Sized,
{
	pub fn new(
		grid: &'a G,
		motion: MotionModel,
		observer: &'a mut O,
		stats: &'a mut SearchStats,
	) -> Self {
		SearchContext {
			grid,
			motion,
			resolution: grid.resolution(),
			observer,
			stats,
			buffer: Vec::with_capacity(8),
		}
	}

	pub fn expanded_count(&self) -> usize {
		self.stats.expanded_count
	}

	/// counts an expansion of `cell` and reports it
	pub fn expand(&mut self, cell: Cell) {
		self.stats.expanded_count += 1;
		*self.stats.expansion_map.entry(cell).or_insert(0) += 1;
		self.observer.on_expand(cell);
	}

	pub fn frontier_added(&mut self, cell: Cell) {
		self.observer.on_frontier_add(cell);
	}

	pub fn track_frontier(&mut self, len: usize) {
		self.stats.peak_frontier_len = self.stats.peak_frontier_len.max(len);
	}

	/// The traversable neighbors of `cell`. Hand the Vec back through [`recycle`](Self::recycle).
	pub fn neighbors(&mut self, cell: Cell) -> Vec<Cell> {
		let mut out = std::mem::take(&mut self.buffer);
		traversable_neighbors(self.grid, &self.motion, cell, &mut *self.observer, &mut out);
		out
	}

	pub fn recycle(&mut self, buffer: Vec<Cell>) {
		self.buffer = buffer;
	}

	pub fn step_cost(&self, from: Cell, to: Cell) -> Cost {
		self.motion.step_cost(from, to) * self.resolution
	}

	pub fn heuristic(&self, algorithm: Algorithm, cell: Cell, goal: Cell) -> Cost {
		algorithm.heuristic(&self.motion, cell, goal) * self.resolution
	}

	/// Reports the Path to `key` if the observer asked for partial Paths
	pub fn report_partial_path<L: ParentLinks>(&mut self, links: &L, key: L::Key) {
		if !self.observer.wants_partial_paths() {
			return;
		}
		match reconstruct(links, key) {
			Ok(cells) => self.observer.on_partial_path(&cells),
			Err(violation) => log::warn!("skipping partial path: {}", violation),
		}
	}

	/// Builds the final Path from the goal Node `key`
	pub fn finish<L: ParentLinks>(&self, links: &L, key: L::Key) -> PlanResult<Path> {
		match reconstruct(links, key) {
			Ok(cells) => Ok(Path::from_cells(cells, &self.motion, self.resolution)),
			Err(violation) => {
				log::warn!("inconsistent parent links: {}", violation);
				Err(PlanError::from(violation))
			}
		}
	}
}

/// Runs one search. `start` and `goal` have been validated and differ.
pub(crate) fn run<G, O>(
	ctx: &mut SearchContext<'_, G, O>,
	algorithm: Algorithm,
	mode: SearchMode,
	start: Cell,
	goal: Cell,
) -> PlanResult<Path>
where
	G: OccupancyGrid + ?Sized,
	O: SearchObserver + ?Sized,
{
	match (algorithm, mode) {
		(Algorithm::AStar, SearchMode::Graph) => a_star::a_star_graph(ctx, start, goal),
		(Algorithm::Bfs, SearchMode::Graph) => bfs::bfs_graph(ctx, start, goal),
		(Algorithm::Dfs, SearchMode::Graph) => dfs::dfs_graph(ctx, start, goal),
		(Algorithm::AStar, SearchMode::Tree { max_expansions }) => tree::tree_search(
			ctx,
			PriorityFrontier::new(),
			algorithm,
			start,
			goal,
			max_expansions,
		),
		(Algorithm::Bfs, SearchMode::Tree { max_expansions }) => tree::tree_search(
			ctx,
			FifoFrontier::new(),
			algorithm,
			start,
			goal,
			max_expansions,
		),
		(Algorithm::Dfs, SearchMode::Tree { max_expansions }) => tree::tree_search(
			ctx,
			LifoFrontier::new(),
			algorithm,
			start,
			goal,
			max_expansions,
		),
	}
}
