use crate::{neighbors::MotionModel, Algorithm, SearchMode};
use std::fmt;

/// A default expansion budget for tree-based searches, for callers without a better estimate
pub const DEFAULT_MAX_EXPANSIONS: usize = 50_000;

/// Options for configuring a [`Planner`](crate::Planner)
///
/// Default options:
/// ```
/// # use grid_search_planning::prelude::*;
/// assert_eq!(
/// 	PlannerConfig {
/// 		algorithm: Algorithm::AStar,
/// 		mode: SearchMode::Graph,
/// 		motion: MotionModel::EightConnected,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlannerConfig {
	/// The search Algorithm (defaults to A*)
	pub algorithm: Algorithm,
	/// Graph-based (default) or tree-based expansion.
	///
	/// Tree-based expansion carries its own budget, see [`SearchMode::Tree`].
	pub mode: SearchMode,
	/// The legal steps (defaults to 8-connected)
	pub motion: MotionModel,
}

impl PlannerConfig {
	/// graph-based A* on an 8-connected Grid
	pub const A_STAR: PlannerConfig = PlannerConfig {
		algorithm: Algorithm::AStar,
		mode: SearchMode::Graph,
		motion: MotionModel::EightConnected,
	};
	/// graph-based BFS on an 8-connected Grid
	pub const BFS: PlannerConfig = PlannerConfig {
		algorithm: Algorithm::Bfs,
		mode: SearchMode::Graph,
		motion: MotionModel::EightConnected,
	};
	/// graph-based DFS on an 8-connected Grid
	pub const DFS: PlannerConfig = PlannerConfig {
		algorithm: Algorithm::Dfs,
		mode: SearchMode::Graph,
		motion: MotionModel::EightConnected,
	};

	/// Creates a graph-based config
	pub const fn new(algorithm: Algorithm, motion: MotionModel) -> PlannerConfig {
		PlannerConfig {
			algorithm,
			mode: SearchMode::Graph,
			motion,
		}
	}

	/// Returns a copy that searches tree-based with the given budget
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use grid_search_planning::prelude::*;
	/// let config = PlannerConfig::DFS.tree_based(500);
	/// assert_eq!(config.mode, SearchMode::Tree { max_expansions: 500 });
	/// ```
	pub const fn tree_based(self, max_expansions: usize) -> PlannerConfig {
		PlannerConfig {
			mode: SearchMode::Tree { max_expansions },
			..self
		}
	}

	/// Returns a copy that uses the given Motion Model
	pub const fn with_motion(self, motion: MotionModel) -> PlannerConfig {
		PlannerConfig { motion, ..self }
	}

	/// All six combinations of Algorithm and expansion discipline, graph-based first
	pub fn all_variants(motion: MotionModel, max_expansions: usize) -> [PlannerConfig; 6] {
		let graph = Algorithm::ALL.map(|algorithm| PlannerConfig::new(algorithm, motion));
		[
			graph[0],
			graph[1],
			graph[2],
			graph[0].tree_based(max_expansions),
			graph[1].tree_based(max_expansions),
			graph[2].tree_based(max_expansions),
		]
	}
}

impl Default for PlannerConfig {
	fn default() -> PlannerConfig {
		PlannerConfig::A_STAR
	}
}

impl fmt::Display for PlannerConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} ({}, {})", self.algorithm, self.mode, self.motion)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn variants() {
		let all = PlannerConfig::all_variants(MotionModel::FourConnected, 10);
		assert_eq!(all.iter().filter(|c| c.mode.is_tree()).count(), 3);
		assert!(all.iter().all(|c| c.motion == MotionModel::FourConnected));
		assert_eq!(all[4].to_string(), "BFS (tree, 4n)");
	}
}
