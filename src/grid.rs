//! The occupancy Grid searched by the Planners

use crate::Cell;
use std::fmt;

/// Read-only access to an occupancy Grid.
///
/// The Planners only ever query a Grid through this Trait. This allows the user to store the
/// Grid in any format they want, as long as they can answer the queries below for a
/// specific (x, y).
///
/// Cells that are obstacles and Cells that are blocked by obstacle inflation are both
/// impassable. They are kept apart so that an observer can render them differently.
pub trait OccupancyGrid {
	/// the number of Cells along x
	fn width(&self) -> usize;
	/// the number of Cells along y
	fn height(&self) -> usize;
	/// the edge length of a single Cell in world units. Every step Cost is scaled by this.
	fn resolution(&self) -> f64;

	/// `true` if (x, y) lies within the bounds of the Grid
	fn is_inside(&self, x: isize, y: isize) -> bool {
		x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
	}
	/// `true` if (x, y) contains an obstacle.
	///
	/// Only called for Cells where [`is_inside`](OccupancyGrid::is_inside) is `true`.
	fn is_obstacle(&self, x: isize, y: isize) -> bool;
	/// `true` if (x, y) is within the Robot's radius of an obstacle.
	///
	/// Only called for Cells where [`is_inside`](OccupancyGrid::is_inside) is `true`.
	fn is_inflated(&self, x: isize, y: isize) -> bool;

	/// Classifies a Cell. Obstacles take precedence over inflation.
	fn occupancy(&self, (x, y): Cell) -> Occupancy {
		if !self.is_inside(x, y) {
			Occupancy::OutOfBounds
		} else if self.is_obstacle(x, y) {
			Occupancy::Obstacle
		} else if self.is_inflated(x, y) {
			Occupancy::Inflated
		} else {
			Occupancy::Free
		}
	}

	/// `true` if the Robot may occupy the Cell
	fn is_traversable(&self, cell: Cell) -> bool {
		self.occupancy(cell) == Occupancy::Free
	}
}

impl<G: OccupancyGrid + ?Sized> OccupancyGrid for &G {
	fn width(&self) -> usize {
		(**self).width()
	}
	fn height(&self) -> usize {
		(**self).height()
	}
	fn resolution(&self) -> f64 {
		(**self).resolution()
	}
	fn is_inside(&self, x: isize, y: isize) -> bool {
		(**self).is_inside(x, y)
	}
	fn is_obstacle(&self, x: isize, y: isize) -> bool {
		(**self).is_obstacle(x, y)
	}
	fn is_inflated(&self, x: isize, y: isize) -> bool {
		(**self).is_inflated(x, y)
	}
}

/// The classification of a single Cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Occupancy {
	/// the Robot can stand here
	Free,
	/// a hard obstacle
	Obstacle,
	/// not an obstacle, but too close to one for the Robot to fit
	Inflated,
	/// outside of the Grid
	OutOfBounds,
}

impl fmt::Display for Occupancy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Occupancy::Free => "free",
			Occupancy::Obstacle => "obstacle",
			Occupancy::Inflated => "inflated",
			Occupancy::OutOfBounds => "out of bounds",
		})
	}
}

/// A simple row-major [`OccupancyGrid`].
///
/// ## Examples
/// Basic usage:
/// ```
/// # use grid_search_planning::prelude::*;
/// let mut grid = GridMap::new(4, 3, 0.25);
/// grid.set_obstacle((1, 1), true);
/// grid.mark_inflated((2, 1));
///
/// assert_eq!(grid.occupancy((1, 1)), Occupancy::Obstacle);
/// assert_eq!(grid.occupancy((2, 1)), Occupancy::Inflated);
/// assert_eq!(grid.occupancy((4, 0)), Occupancy::OutOfBounds);
/// assert_eq!(grid.free_cell_count(), 10);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GridMap {
	width: usize,
	height: usize,
	resolution: f64,
	obstacles: Vec<bool>,
	inflated: Vec<bool>,
}

impl GridMap {
	/// Creates a Grid of `width * height` free Cells
	pub fn new(width: usize, height: usize, resolution: f64) -> GridMap {
		GridMap {
			width,
			height,
			resolution,
			obstacles: vec![false; width * height],
			inflated: vec![false; width * height],
		}
	}

	/// Parses a Grid from rows of characters, where row `y` is `rows[y]`.
	///
	/// `#` is an obstacle, `+` an inflated Cell, anything else is free.
	/// The width is taken from the longest row, missing Cells are free.
	pub fn from_rows(rows: &[&str], resolution: f64) -> GridMap {
		let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
		let mut grid = GridMap::new(width, rows.len(), resolution);
		for (y, row) in rows.iter().enumerate() {
			for (x, c) in row.chars().enumerate() {
				let cell = (x as isize, y as isize);
				match c {
					'#' => grid.set_obstacle(cell, true),
					'+' => grid.mark_inflated(cell),
					_ => {}
				}
			}
		}
		grid
	}

	/// Sets or clears the obstacle at `cell`. Cells outside the Grid are ignored.
	pub fn set_obstacle(&mut self, cell: Cell, obstacle: bool) {
		if let Some(i) = self.index(cell) {
			self.obstacles[i] = obstacle;
		}
	}

	/// Marks `cell` as blocked by inflation. Cells outside the Grid are ignored.
	pub fn mark_inflated(&mut self, cell: Cell) {
		if let Some(i) = self.index(cell) {
			self.inflated[i] = true;
		}
	}

	/// Removes all inflation marks
	pub fn clear_inflation(&mut self) {
		self.inflated.iter_mut().for_each(|c| *c = false);
	}

	/// The number of Cells that are neither obstacles nor inflated
	pub fn free_cell_count(&self) -> usize {
		self.obstacles
			.iter()
			.zip(self.inflated.iter())
			.filter(|&(&obstacle, &inflated)| !obstacle && !inflated)
			.count()
	}

	fn index(&self, (x, y): Cell) -> Option<usize> {
		if self.is_inside(x, y) {
			Some(x as usize + y as usize * self.width)
		} else {
			None
		}
	}
}

impl OccupancyGrid for GridMap {
	fn width(&self) -> usize {
		self.width
	}
	fn height(&self) -> usize {
		self.height
	}
	fn resolution(&self) -> f64 {
		self.resolution
	}
	fn is_obstacle(&self, x: isize, y: isize) -> bool {
		self.index((x, y)).map_or(false, |i| self.obstacles[i])
	}
	fn is_inflated(&self, x: isize, y: isize) -> bool {
		self.index((x, y)).map_or(false, |i| self.inflated[i])
	}
}
