#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to compare classical search strategies on an occupancy Grid.
//!
//! ## Introduction
//! A point- or disk-shaped Robot moving across a 2D occupancy Grid can be routed with any of the
//! classical uninformed or informed search Algorithms. This crate provides A*, Breadth-First
//! Search and Depth-First Search, each in two flavors:
//!
//! - **graph-based**: every Cell is expanded at most once. A closed set prevents re-expansion.
//! - **tree-based**: every discovery of a Cell creates a new node in an explicit search tree,
//!   tagged with a unique [`VisitId`]. The same Cell can therefore be expanded many times.
//!
//! Tree-based search is unbounded on any Grid that contains a cycle, which is why the
//! [`SearchMode::Tree`] variant carries a mandatory expansion budget.
//!
//! The Planner never owns the Grid. Anything implementing [`OccupancyGrid`] can be searched,
//! [`GridMap`] is a simple implementation for the common case.
//!
//! ## Examples
//! Finding a Path with graph-based A*:
//! ```
//! use grid_search_planning::prelude::*;
//!
//! // '#' = obstacle, '+' = blocked by inflation, '.' = free
//! let grid = GridMap::from_rows(
//!     &[
//!         ".....",
//!         ".##..",
//!         "..#..",
//!         "..+..",
//!         ".....",
//!     ],
//!     1.0,
//! );
//!
//! let mut planner = Planner::new(&grid, PlannerConfig::default());
//! let path = planner.plan((0, 2), (4, 2)).unwrap();
//!
//! assert_eq!(path.start(), (0, 2));
//! assert_eq!(path.goal(), (4, 2));
//! assert!(planner.expanded_count() > 0);
//! ```
//!
//! ### Choosing an Algorithm
//! The Algorithm, the expansion discipline and the Motion Model are all part of the
//! [`PlannerConfig`]:
//! ```
//! use grid_search_planning::prelude::*;
//!
//! let grid = GridMap::new(8, 8, 0.5);
//!
//! let config = PlannerConfig {
//!     algorithm: Algorithm::Bfs,
//!     mode: SearchMode::tree(10_000),
//!     motion: MotionModel::FourConnected,
//! };
//! let mut planner = Planner::new(&grid, config);
//!
//! // tree-based BFS diverges on open Grids, so this runs into the budget
//! let result = planner.plan((0, 0), (7, 7));
//! assert!(matches!(result, Err(PlanError::ExpansionBudgetExceeded { budget: 10_000 })));
//! ```
//!
//! ### Observing the Search
//! Instrumentation is opt-in through the [`SearchObserver`] trait:
//! ```
//! use grid_search_planning::prelude::*;
//!
//! let grid = GridMap::from_rows(&["...", ".+.", "..."], 1.0);
//!
//! let mut planner = Planner::with_observer(&grid, PlannerConfig::default(), EventLog::default());
//! planner.plan((0, 0), (2, 2)).unwrap();
//!
//! let events = planner.into_observer();
//! assert!(events.blocked_by_inflation().any(|cell| cell == (1, 1)));
//! ```

/// A shorthand for Cells on the Grid, as `(x, y)`
///
/// Signed so that neighbors of border Cells can be represented before the bounds check.
pub type Cell = (isize, isize);

/// A [`HashMap`](hashbrown::HashMap) keyed by Cells
pub type CellMap<V> = hashbrown::HashMap<Cell, V>;
/// A [`HashSet`](hashbrown::HashSet) of Cells
pub type CellSet = hashbrown::HashSet<Cell>;

/// The Type used for accumulated and estimated movement Costs
///
/// All Costs are scaled by the [resolution](OccupancyGrid::resolution) of the Grid.
pub type Cost = f64;

/// The Type used to tell apart separate tree-search Nodes of the same Cell
pub type VisitId = u64;

/// The [`VisitId`] reserved for the root of every search tree
pub const ROOT_VISIT: VisitId = 0;

mod error;
pub use self::error::{IntegrityViolation, PlanError, PlanResult};

pub mod grid;
pub use self::grid::{GridMap, Occupancy, OccupancyGrid};

pub mod neighbors;
pub use self::neighbors::MotionModel;

pub mod observer;
pub use self::observer::{EventLog, NoopObserver, SearchEvent, SearchObserver};

mod frontier;

mod path;
pub use self::path::Path;

mod search;
pub use self::search::{Algorithm, ParseAlgorithmError, SearchMode};

mod planner;
pub use self::planner::{plan_batch, PlanReport, Planner, PlannerConfig, DEFAULT_MAX_EXPANSIONS};

/// The most commonly used items of this crate
pub mod prelude {
	pub use crate::{
		grid::{GridMap, Occupancy, OccupancyGrid},
		neighbors::{ManhattanNeighborhood, MooreNeighborhood, MotionModel, Neighborhood},
		observer::{EventLog, NoopObserver, SearchEvent, SearchObserver},
		Algorithm, Cell, Cost, Path, PlanError, Planner, PlannerConfig, SearchMode,
	};
}
