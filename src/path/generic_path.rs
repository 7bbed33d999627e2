use crate::{neighbors::Neighborhood, Cell, Cost};

#[cfg(not(target_arch = "wasm32"))]
use std::sync::Arc;

#[cfg(target_arch = "wasm32")]
use std::rc::Rc as Arc;

/// A Path on the Grid, from the start to the goal (both inclusive).
///
/// Paths are only produced by the Planners and never change afterwards. Cloning is cheap, the
/// Cells are shared.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use grid_search_planning::prelude::*;
/// let grid = GridMap::new(3, 3, 0.5);
/// let mut planner = Planner::new(&grid, PlannerConfig::default());
/// let path = planner.plan((0, 0), (2, 2)).unwrap();
///
/// assert_eq!(path, vec![(0, 0), (1, 1), (2, 2)]);
/// assert_eq!(path.len(), 3);
/// assert!((path.cost() - 2.0 * 2f64.sqrt() * 0.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
	cells: Arc<[Cell]>,
	cost: Cost,
}

impl Path {
	/// Creates a new Path with the given sequence of Cells and total Cost
	pub fn new(cells: Vec<Cell>, cost: Cost) -> Path {
		Path {
			cells: cells.into(),
			cost,
		}
	}

	/// Creates a Path, summing up the resolution-scaled step Costs of consecutive Cells
	pub(crate) fn from_cells<N: Neighborhood>(
		cells: Vec<Cell>,
		neighborhood: &N,
		resolution: f64,
	) -> Path {
		let cost = cells
			.windows(2)
			.fold(0.0, |cost, w| cost + neighborhood.step_cost(w[0], w[1]) * resolution);
		Path::new(cells, cost)
	}

	/// The total Cost of walking along the Path
	pub fn cost(&self) -> Cost {
		self.cost
	}

	/// The Cells of the Path, start first
	pub fn cells(&self) -> &[Cell] {
		&self.cells
	}

	/// The number of Cells, including start and goal
	pub fn len(&self) -> usize {
		self.cells.len()
	}

	/// `true` if the Path contains no Cells. Paths returned by a Planner are never empty.
	pub fn is_empty(&self) -> bool {
		self.cells.is_empty()
	}

	/// The first Cell
	///
	/// ## Panics
	/// if the Path is empty
	pub fn start(&self) -> Cell {
		self.cells[0]
	}

	/// The last Cell
	///
	/// ## Panics
	/// if the Path is empty
	pub fn goal(&self) -> Cell {
		self.cells[self.cells.len() - 1]
	}

	/// Returns an Iterator over the Cells of the Path
	pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
		self.cells.iter()
	}
}

use std::ops::{Deref, Index};

impl Index<usize> for Path {
	type Output = Cell;
	fn index(&self, index: usize) -> &Cell {
		&self.cells[index]
	}
}

impl Deref for Path {
	type Target = [Cell];
	fn deref(&self) -> &[Cell] {
		&self.cells
	}
}

impl<'a> IntoIterator for &'a Path {
	type Item = &'a Cell;
	type IntoIter = std::slice::Iter<'a, Cell>;
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl PartialEq<Vec<Cell>> for Path {
	fn eq(&self, rhs: &Vec<Cell>) -> bool {
		self.cells[..] == rhs[..]
	}
}

impl<'a> PartialEq<&'a [Cell]> for Path {
	fn eq(&self, rhs: &&'a [Cell]) -> bool {
		self.cells[..] == rhs[..]
	}
}

use std::fmt;
impl fmt::Display for Path {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost)?;
		if self.cells.is_empty() {
			write!(fmt, "<empty>")
		} else {
			let (x, y) = self.cells[0];
			write!(fmt, "({}, {})", x, y)?;
			for (x, y) in self.cells.iter().skip(1) {
				write!(fmt, " -> ({}, {})", x, y)?;
			}
			Ok(())
		}
	}
}
