//! Opt-in instrumentation of a running search
//!
//! The Planners report their progress through a [`SearchObserver`]. Every callback is invoked
//! synchronously from within the expansion loop, in expansion order. Observers only receive
//! copies of Cells and can therefore never alter the state of the search.

use crate::Cell;

/// Receives events from a running search.
///
/// All methods have empty default implementations, so implementors only need to provide
/// the ones they care about.
///
/// ## Examples
/// Counting frontier insertions:
/// ```
/// use grid_search_planning::prelude::*;
///
/// #[derive(Default)]
/// struct Counter(usize);
///
/// impl SearchObserver for Counter {
///     fn on_frontier_add(&mut self, _cell: Cell) {
///         self.0 += 1;
///     }
/// }
///
/// let grid = GridMap::new(4, 4, 1.0);
/// let mut planner = Planner::with_observer(&grid, PlannerConfig::default(), Counter::default());
/// planner.plan((0, 0), (3, 3)).unwrap();
///
/// assert!(planner.observer().0 > 0);
/// ```
pub trait SearchObserver {
	/// A valid query is about to be searched
	fn on_search_start(&mut self, _start: Cell, _goal: Cell) {}
	/// `cell` was taken from the frontier and is being expanded
	fn on_expand(&mut self, _cell: Cell) {}
	/// `cell` was inserted into the frontier, or its entry was improved
	fn on_frontier_add(&mut self, _cell: Cell) {}
	/// `cell` was rejected as a neighbor because it is blocked by inflation
	fn on_blocked_by_inflation(&mut self, _cell: Cell) {}

	/// Return `true` to receive [`on_partial_path`](SearchObserver::on_partial_path) calls.
	///
	/// Building the partial Paths costs a parent walk per expansion, so it is off by default.
	fn wants_partial_paths(&self) -> bool {
		false
	}
	/// The Path from the start to the Cell that is currently being expanded
	fn on_partial_path(&mut self, _path: &[Cell]) {}
}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
	fn on_search_start(&mut self, start: Cell, goal: Cell) {
		(**self).on_search_start(start, goal)
	}
	fn on_expand(&mut self, cell: Cell) {
		(**self).on_expand(cell)
	}
	fn on_frontier_add(&mut self, cell: Cell) {
		(**self).on_frontier_add(cell)
	}
	fn on_blocked_by_inflation(&mut self, cell: Cell) {
		(**self).on_blocked_by_inflation(cell)
	}
	fn wants_partial_paths(&self) -> bool {
		(**self).wants_partial_paths()
	}
	fn on_partial_path(&mut self, path: &[Cell]) {
		(**self).on_partial_path(path)
	}
}

/// An observer that ignores everything
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// A single event recorded by [`EventLog`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchEvent {
	/// see [`SearchObserver::on_search_start`]
	Start(Cell, Cell),
	/// see [`SearchObserver::on_expand`]
	Expand(Cell),
	/// see [`SearchObserver::on_frontier_add`]
	FrontierAdd(Cell),
	/// see [`SearchObserver::on_blocked_by_inflation`]
	BlockedByInflation(Cell),
	/// see [`SearchObserver::on_partial_path`]
	PartialPath(Vec<Cell>),
}

/// An observer that records every event in order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
	/// the recorded events, oldest first
	pub events: Vec<SearchEvent>,
	/// whether to record partial Paths as well
	pub record_partial_paths: bool,
}

impl EventLog {
	/// Creates an EventLog that also records the partial Path of every expansion
	pub fn with_partial_paths() -> EventLog {
		EventLog {
			events: vec![],
			record_partial_paths: true,
		}
	}

	/// The expanded Cells, in expansion order
	pub fn expanded(&self) -> impl Iterator<Item = Cell> + '_ {
		self.events.iter().filter_map(|e| match e {
			SearchEvent::Expand(cell) => Some(*cell),
			_ => None,
		})
	}

	/// The Cells added to the frontier, in insertion order
	pub fn frontier_added(&self) -> impl Iterator<Item = Cell> + '_ {
		self.events.iter().filter_map(|e| match e {
			SearchEvent::FrontierAdd(cell) => Some(*cell),
			_ => None,
		})
	}

	/// The Cells rejected because of inflation
	pub fn blocked_by_inflation(&self) -> impl Iterator<Item = Cell> + '_ {
		self.events.iter().filter_map(|e| match e {
			SearchEvent::BlockedByInflation(cell) => Some(*cell),
			_ => None,
		})
	}

	/// The recorded partial Paths
	pub fn partial_paths(&self) -> impl Iterator<Item = &[Cell]> + '_ {
		self.events.iter().filter_map(|e| match e {
			SearchEvent::PartialPath(path) => Some(path.as_slice()),
			_ => None,
		})
	}
}

impl SearchObserver for EventLog {
	fn on_search_start(&mut self, start: Cell, goal: Cell) {
		self.events.push(SearchEvent::Start(start, goal));
	}
	fn on_expand(&mut self, cell: Cell) {
		self.events.push(SearchEvent::Expand(cell));
	}
	fn on_frontier_add(&mut self, cell: Cell) {
		self.events.push(SearchEvent::FrontierAdd(cell));
	}
	fn on_blocked_by_inflation(&mut self, cell: Cell) {
		self.events.push(SearchEvent::BlockedByInflation(cell));
	}
	fn wants_partial_paths(&self) -> bool {
		self.record_partial_paths
	}
	fn on_partial_path(&mut self, path: &[Cell]) {
		self.events.push(SearchEvent::PartialPath(path.to_vec()));
	}
}
