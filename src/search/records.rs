//! Parent bookkeeping for the graph-based and tree-based searches

use crate::{path::ParentLinks, Cell, CellMap, Cost, VisitId, ROOT_VISIT};
use hashbrown::HashMap;
use std::ops::{Index, IndexMut};

/// child -> parent, for the graph-based BFS and DFS
#[derive(Debug)]
pub(crate) struct ParentMap {
	start: Cell,
	parents: CellMap<Cell>,
}

impl ParentMap {
	pub fn new(start: Cell) -> Self {
		ParentMap {
			start,
			parents: CellMap::default(),
		}
	}

	pub fn insert(&mut self, child: Cell, parent: Cell) {
		self.parents.insert(child, parent);
	}
}

impl ParentLinks for ParentMap {
	type Key = Cell;
	fn cell(&self, key: Cell) -> Cell {
		key
	}
	fn is_root(&self, key: Cell) -> bool {
		key == self.start
	}
	fn parent(&self, key: Cell) -> Option<Cell> {
		self.parents.get(&key).copied()
	}
	fn link_count(&self) -> usize {
		self.parents.len()
	}
}

/// The Type used to reference a [`SearchNode`] in the [`NodeArena`]
pub(crate) type NodeID = usize;

/// A state of the graph-based A*, updated in place when a cheaper Path is found
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SearchNode {
	pub state: Cell,
	pub g: Cost,
	pub f: Cost,
	pub parent: Option<NodeID>,
}

/// Owns all Nodes of one A* search. Parents are referenced by index, never by pointer.
#[derive(Debug)]
pub(crate) struct NodeArena {
	nodes: slab::Slab<SearchNode>,
	pos_map: CellMap<NodeID>,
}

impl NodeArena {
	pub fn new() -> Self {
		NodeArena {
			nodes: slab::Slab::new(),
			pos_map: CellMap::default(),
		}
	}

	pub fn add_node(&mut self, node: SearchNode) -> NodeID {
		let id = self.nodes.insert(node);
		self.pos_map.insert(node.state, id);
		id
	}

	pub fn id_at(&self, cell: Cell) -> Option<NodeID> {
		self.pos_map.get(&cell).copied()
	}
}

impl Index<NodeID> for NodeArena {
	type Output = SearchNode;
	#[track_caller]
	fn index(&self, index: NodeID) -> &SearchNode {
		&self.nodes[index]
	}
}
impl IndexMut<NodeID> for NodeArena {
	#[track_caller]
	fn index_mut(&mut self, index: NodeID) -> &mut SearchNode {
		&mut self.nodes[index]
	}
}

impl ParentLinks for NodeArena {
	type Key = NodeID;
	fn cell(&self, key: NodeID) -> Cell {
		self[key].state
	}
	fn is_root(&self, key: NodeID) -> bool {
		self[key].parent.is_none()
	}
	fn parent(&self, key: NodeID) -> Option<NodeID> {
		self.nodes.get(key).and_then(|node| node.parent)
	}
	fn link_count(&self) -> usize {
		self.nodes.len()
	}
}

/// The explicit search tree of the tree-based searches.
///
/// Stored as `Cell -> (VisitId -> (parent Cell, parent VisitId))`. The root is
/// `(start, ROOT_VISIT)` and has no entry. Every other [`VisitId`] is issued exactly once.
#[derive(Debug)]
pub(crate) struct TreeRecords {
	start: Cell,
	parents: CellMap<HashMap<VisitId, (Cell, VisitId)>>,
	next_visit: VisitId,
}

impl TreeRecords {
	pub fn new(start: Cell) -> Self {
		TreeRecords {
			start,
			parents: CellMap::default(),
			next_visit: ROOT_VISIT + 1,
		}
	}

	/// Adds a new tree Node for `child` below `parent` and returns its VisitId
	pub fn issue(&mut self, child: Cell, parent: (Cell, VisitId)) -> VisitId {
		let visit = self.next_visit;
		self.next_visit += 1;
		self.parents.entry(child).or_default().insert(visit, parent);
		visit
	}

	/// the number of VisitIds handed out so far, excluding the root
	pub fn issued(&self) -> usize {
		(self.next_visit - ROOT_VISIT - 1) as usize
	}
}

impl ParentLinks for TreeRecords {
	type Key = (Cell, VisitId);
	fn cell(&self, key: (Cell, VisitId)) -> Cell {
		key.0
	}
	fn visit(&self, key: (Cell, VisitId)) -> Option<VisitId> {
		Some(key.1)
	}
	fn is_root(&self, key: (Cell, VisitId)) -> bool {
		key == (self.start, ROOT_VISIT)
	}
	fn parent(&self, (cell, visit): (Cell, VisitId)) -> Option<(Cell, VisitId)> {
		self.parents.get(&cell)?.get(&visit).copied()
	}
	fn link_count(&self) -> usize {
		self.issued()
	}
}
