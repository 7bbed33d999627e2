use crate::{error::IntegrityViolation, Cell, VisitId};
use hashbrown::HashSet;
use std::hash::Hash;

/// Parent bookkeeping of a search, as seen by the Path reconstruction.
///
/// A Key identifies a single Node of the search. For graph-based searches that is the Cell or an
/// arena index. For tree-based searches it is the `(Cell, VisitId)` pair.
pub(crate) trait ParentLinks {
	type Key: Copy + Eq + Hash;

	fn cell(&self, key: Self::Key) -> Cell;
	fn visit(&self, _key: Self::Key) -> Option<VisitId> {
		None
	}
	/// `true` for the Node that the search started from
	fn is_root(&self, key: Self::Key) -> bool;
	fn parent(&self, key: Self::Key) -> Option<Self::Key>;
	/// an upper bound for the number of links in any chain
	fn link_count(&self) -> usize;
}

/// Walks the parent links from `from` back to the root and returns the Cells in root-first order.
///
/// No Node is visited twice and the walk never takes more than
/// [`link_count`](ParentLinks::link_count) steps, so a corrupt table is reported instead of
/// looping forever.
pub(crate) fn reconstruct<L: ParentLinks>(
	links: &L,
	from: L::Key,
) -> Result<Vec<Cell>, IntegrityViolation> {
	let mut cells = vec![];
	let mut seen = HashSet::new();
	let mut current = from;

	loop {
		let cell = links.cell(current);
		cells.push(cell);
		if links.is_root(current) {
			break;
		}
		if !seen.insert(current) || cells.len() > links.link_count() + 1 {
			return Err(IntegrityViolation::Cycle {
				cell,
				visit: links.visit(current),
			});
		}
		current = match links.parent(current) {
			Some(parent) => parent,
			None => {
				return Err(IntegrityViolation::MissingParent {
					cell,
					visit: links.visit(current),
				})
			}
		};
	}

	cells.reverse();
	Ok(cells)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CellMap;

	/// child -> parent, rooted at `root`
	struct Links {
		root: Cell,
		parents: CellMap<Cell>,
	}

	impl ParentLinks for Links {
		type Key = Cell;
		fn cell(&self, key: Cell) -> Cell {
			key
		}
		fn is_root(&self, key: Cell) -> bool {
			key == self.root
		}
		fn parent(&self, key: Cell) -> Option<Cell> {
			self.parents.get(&key).copied()
		}
		fn link_count(&self) -> usize {
			self.parents.len()
		}
	}

	#[test]
	fn walks_to_root() {
		let links = Links {
			root: (0, 0),
			parents: [((2, 0), (1, 0)), ((1, 0), (0, 0)), ((5, 5), (2, 0))]
				.into_iter()
				.collect(),
		};
		assert_eq!(reconstruct(&links, (2, 0)), Ok(vec![(0, 0), (1, 0), (2, 0)]));
		assert_eq!(reconstruct(&links, (0, 0)), Ok(vec![(0, 0)]));
	}

	#[test]
	fn missing_parent() {
		let links = Links {
			root: (0, 0),
			parents: [((2, 0), (1, 0))].into_iter().collect(),
		};
		assert_eq!(
			reconstruct(&links, (2, 0)),
			Err(IntegrityViolation::MissingParent {
				cell: (1, 0),
				visit: None
			})
		);
	}

	#[test]
	fn cycle() {
		let links = Links {
			root: (0, 0),
			parents: [((1, 0), (2, 0)), ((2, 0), (1, 0))].into_iter().collect(),
		};
		assert_eq!(
			reconstruct(&links, (1, 0)),
			Err(IntegrityViolation::Cycle {
				cell: (1, 0),
				visit: None
			})
		);
	}
}
