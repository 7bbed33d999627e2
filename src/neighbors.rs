//! The Motion Models: legal steps, their Costs and matching Heuristics

use crate::{grid::OccupancyGrid, observer::SearchObserver, Cell, Cost};
use std::fmt::{self, Debug};
use std::str::FromStr;

/// Defines how a Robot can move along the Grid.
///
/// Provides the fixed table of step vectors, the Cost of a single step and a Heuristic for how
/// far a goal is from a Cell. Costs are given in Cells, the Planner scales them by the
/// resolution of the Grid.
///
/// The order of [`moves`](Neighborhood::moves) is the order in which neighbors are generated.
/// It decides ties in every Algorithm and the push order of Depth-First Search, so
/// implementations must keep it fixed.
///
/// The Heuristic has to be admissible and consistent with the step Costs, otherwise A*
/// loses its optimality.
///
/// The most common implementations of this Trait are already provided by this Module:
/// - [`ManhattanNeighborhood`] for Robots that can move up, down, left or right
/// - [`MooreNeighborhood`] for Robots that can additionally move along the 4 diagonals
pub trait Neighborhood: Clone + Debug {
	/// The step vectors, in generation order
	fn moves(&self) -> &'static [(isize, isize)];
	/// The Cost of a single step between two adjacent Cells
	fn step_cost(&self, from: Cell, to: Cell) -> Cost;
	/// Gives a lower bound for the Cost of reaching `goal` from `point`
	fn heuristic(&self, point: Cell, goal: Cell) -> Cost;

	/// `true` if `to` is reachable from `from` in a single step
	fn is_step(&self, from: Cell, to: Cell) -> bool {
		let delta = (to.0 - from.0, to.1 - from.1);
		self.moves().contains(&delta)
	}
}

const STRAIGHT_MOVES: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const ALL_MOVES: [(isize, isize); 8] = [
	(1, 0),
	(-1, 0),
	(0, 1),
	(0, -1),
	(1, 1),
	(1, -1),
	(-1, 1),
	(-1, -1),
];

fn abs_diff(point: Cell, goal: Cell) -> (Cost, Cost) {
	(
		(goal.0 - point.0).abs() as Cost,
		(goal.1 - point.1).abs() as Cost,
	)
}

/// A Neighborhood for Robots moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// ```no_code
/// A: Robot, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ManhattanNeighborhood;

impl Neighborhood for ManhattanNeighborhood {
	fn moves(&self) -> &'static [(isize, isize)] {
		&STRAIGHT_MOVES
	}
	fn step_cost(&self, _from: Cell, _to: Cell) -> Cost {
		1.0
	}
	fn heuristic(&self, point: Cell, goal: Cell) -> Cost {
		let (dx, dy) = abs_diff(point, goal);
		dx + dy
	}
}

/// A Neighborhood for Robots moving along the 4 cardinal directions and the 4 diagonals.
///
/// Also known as [Moore Neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood).
/// Diagonal steps Cost `√2`, the Heuristic is the octile distance.
///
/// ```no_code
/// A: Robot, o: reachable in one step
/// o o o
///  \|/
/// o-A-o
///  /|\
/// o o o
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MooreNeighborhood;

impl Neighborhood for MooreNeighborhood {
	fn moves(&self) -> &'static [(isize, isize)] {
		&ALL_MOVES
	}
	fn step_cost(&self, from: Cell, to: Cell) -> Cost {
		if from.0 != to.0 && from.1 != to.1 {
			std::f64::consts::SQRT_2
		} else {
			1.0
		}
	}
	fn heuristic(&self, point: Cell, goal: Cell) -> Cost {
		let (dx, dy) = abs_diff(point, goal);
		dx.max(dy) + (std::f64::consts::SQRT_2 - 1.0) * dx.min(dy)
	}
}

/// Runtime selection between the provided Neighborhoods
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MotionModel {
	/// see [`ManhattanNeighborhood`]
	FourConnected,
	/// see [`MooreNeighborhood`]
	EightConnected,
}

impl Default for MotionModel {
	fn default() -> MotionModel {
		MotionModel::EightConnected
	}
}

impl Neighborhood for MotionModel {
	fn moves(&self) -> &'static [(isize, isize)] {
		match self {
			MotionModel::FourConnected => ManhattanNeighborhood.moves(),
			MotionModel::EightConnected => MooreNeighborhood.moves(),
		}
	}
	fn step_cost(&self, from: Cell, to: Cell) -> Cost {
		match self {
			MotionModel::FourConnected => ManhattanNeighborhood.step_cost(from, to),
			MotionModel::EightConnected => MooreNeighborhood.step_cost(from, to),
		}
	}
	fn heuristic(&self, point: Cell, goal: Cell) -> Cost {
		match self {
			MotionModel::FourConnected => ManhattanNeighborhood.heuristic(point, goal),
			MotionModel::EightConnected => MooreNeighborhood.heuristic(point, goal),
		}
	}
}

impl fmt::Display for MotionModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			MotionModel::FourConnected => "4n",
			MotionModel::EightConnected => "8n",
		})
	}
}

/// The error returned when parsing an unknown [`MotionModel`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseMotionModelError(String);

impl fmt::Display for ParseMotionModelError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "unknown motion model {:?}, expected \"4n\" or \"8n\"", self.0)
	}
}

impl std::error::Error for ParseMotionModelError {}

impl FromStr for MotionModel {
	type Err = ParseMotionModelError;
	fn from_str(s: &str) -> Result<MotionModel, ParseMotionModelError> {
		match s.trim().to_ascii_lowercase().as_str() {
			"4n" | "4" => Ok(MotionModel::FourConnected),
			"8n" | "8" => Ok(MotionModel::EightConnected),
			other => Err(ParseMotionModelError(other.to_owned())),
		}
	}
}

/// Collects the neighbors of `cell` that the Robot can step onto into `out`.
///
/// A neighbor is kept if it is inside the Grid, not an obstacle and not inflated. Neighbors are
/// produced in the order of [`Neighborhood::moves`]. `observer` is notified about every neighbor
/// that is rejected only because of inflation.
///
/// `out` is cleared first, so the same buffer can be reused across expansions.
pub fn traversable_neighbors<G, N, O>(
	grid: &G,
	neighborhood: &N,
	cell: Cell,
	observer: &mut O,
	out: &mut Vec<Cell>,
) where
	G: OccupancyGrid + ?Sized,
	N: Neighborhood,
	O: SearchObserver + ?Sized,
{
	out.clear();
	for &(dx, dy) in neighborhood.moves() {
		let (x, y) = (cell.0 + dx, cell.1 + dy);
		if !grid.is_inside(x, y) || grid.is_obstacle(x, y) {
			continue;
		}
		if grid.is_inflated(x, y) {
			observer.on_blocked_by_inflation((x, y));
			continue;
		}
		out.push((x, y));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{grid::GridMap, observer::EventLog};

	fn neighbors_of(grid: &GridMap, motion: MotionModel, cell: Cell) -> Vec<Cell> {
		let mut out = vec![];
		traversable_neighbors(grid, &motion, cell, &mut crate::NoopObserver, &mut out);
		out
	}

	#[test]
	fn four_connected_neighbors() {
		let grid = GridMap::new(5, 5, 1.0);
		assert_eq!(
			neighbors_of(&grid, MotionModel::FourConnected, (0, 2)),
			vec![(1, 2), (0, 3), (0, 1)],
		);
	}

	#[test]
	fn eight_connected_neighbors() {
		let grid = GridMap::new(5, 5, 1.0);
		assert_eq!(
			neighbors_of(&grid, MotionModel::EightConnected, (0, 2)),
			vec![(1, 2), (0, 3), (0, 1), (1, 3), (1, 1)],
		);
	}

	#[test]
	fn blocked_neighbors() {
		let grid = GridMap::from_rows(&["...", "#.+", "..."], 1.0);
		let mut log = EventLog::default();
		let mut out = vec![];
		traversable_neighbors(&grid, &MotionModel::FourConnected, (1, 1), &mut log, &mut out);

		assert_eq!(out, vec![(1, 2), (1, 0)]);
		assert_eq!(log.blocked_by_inflation().collect::<Vec<_>>(), vec![(2, 1)]);
	}

	#[test]
	fn step_costs() {
		let m = MotionModel::EightConnected;
		assert_eq!(m.step_cost((0, 0), (1, 0)), 1.0);
		assert_eq!(m.step_cost((0, 0), (1, 1)), std::f64::consts::SQRT_2);
		assert!(m.is_step((2, 2), (1, 3)));
		assert!(!MotionModel::FourConnected.is_step((2, 2), (1, 3)));
		assert!(!m.is_step((2, 2), (2, 2)));
	}

	#[test]
	fn manhattan_heuristic() {
		assert_eq!(ManhattanNeighborhood.heuristic((3, 1), (0, 0)), 3.0 + 1.0);
	}

	#[test]
	fn octile_heuristic() {
		let h = MooreNeighborhood.heuristic((3, 1), (0, 0));
		assert!((h - (3.0 + (std::f64::consts::SQRT_2 - 1.0))).abs() < 1e-12);
		assert_eq!(MooreNeighborhood.heuristic((2, 2), (2, 2)), 0.0);
	}

	#[test]
	fn parse_motion_model() {
		assert_eq!("4n".parse(), Ok(MotionModel::FourConnected));
		assert_eq!(" 8N ".parse(), Ok(MotionModel::EightConnected));
		assert!("6n".parse::<MotionModel>().is_err());
		assert_eq!(MotionModel::FourConnected.to_string(), "4n");
	}
}
