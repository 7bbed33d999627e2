//! The open sets used by the search drivers

use crate::Cost;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// The set of candidates waiting to be expanded.
///
/// `priority` is only honored by [`PriorityFrontier`]. The other two ignore it, which turns the
/// same driver loop into Breadth-First or Depth-First Search.
pub(crate) trait Frontier<T> {
	fn push(&mut self, item: T, priority: Cost);
	/// Like [`push`](Frontier::push), but equal priorities are ordered by the lower `tie_break`
	fn push_with_tie_break(&mut self, item: T, priority: Cost, _tie_break: Cost) {
		self.push(item, priority);
	}
	fn pop(&mut self) -> Option<T>;
	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// First in, first out
#[derive(Debug)]
pub(crate) struct FifoFrontier<T>(VecDeque<T>);

impl<T> FifoFrontier<T> {
	pub fn new() -> Self {
		FifoFrontier(VecDeque::new())
	}
}

impl<T> Frontier<T> for FifoFrontier<T> {
	fn push(&mut self, item: T, _priority: Cost) {
		self.0.push_back(item);
	}
	fn pop(&mut self) -> Option<T> {
		self.0.pop_front()
	}
	fn len(&self) -> usize {
		self.0.len()
	}
}

/// Last in, first out
#[derive(Debug)]
pub(crate) struct LifoFrontier<T>(Vec<T>);

impl<T> LifoFrontier<T> {
	pub fn new() -> Self {
		LifoFrontier(Vec::new())
	}
}

impl<T> Frontier<T> for LifoFrontier<T> {
	fn push(&mut self, item: T, _priority: Cost) {
		self.0.push(item);
	}
	fn pop(&mut self) -> Option<T> {
		self.0.pop()
	}
	fn len(&self) -> usize {
		self.0.len()
	}
}

struct HeapElement<T> {
	item: T,
	priority: OrderedFloat<Cost>,
	tie_break: OrderedFloat<Cost>,
	seq: u64,
}

impl<T> PartialEq for HeapElement<T> {
	fn eq(&self, rhs: &Self) -> bool {
		self.priority == rhs.priority && self.tie_break == rhs.tie_break && self.seq == rhs.seq
	}
}
impl<T> Eq for HeapElement<T> {}
impl<T> PartialOrd for HeapElement<T> {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl<T> Ord for HeapElement<T> {
	// reversed, so that the BinaryHeap pops the lowest priority, then the lowest tie break, then
	// the oldest entry
	fn cmp(&self, rhs: &Self) -> Ordering {
		rhs.priority
			.cmp(&self.priority)
			.then_with(|| rhs.tie_break.cmp(&self.tie_break))
			.then_with(|| rhs.seq.cmp(&self.seq))
	}
}

/// Lowest priority first. Equal priorities leave by tie break, then in insertion order.
pub(crate) struct PriorityFrontier<T> {
	heap: BinaryHeap<HeapElement<T>>,
	next_seq: u64,
}

impl<T> PriorityFrontier<T> {
	pub fn new() -> Self {
		PriorityFrontier {
			heap: BinaryHeap::new(),
			next_seq: 0,
		}
	}
}

impl<T> Frontier<T> for PriorityFrontier<T> {
	fn push(&mut self, item: T, priority: Cost) {
		self.push_with_tie_break(item, priority, 0.0);
	}
	fn push_with_tie_break(&mut self, item: T, priority: Cost, tie_break: Cost) {
		let seq = self.next_seq;
		self.next_seq += 1;
		self.heap.push(HeapElement {
			item,
			priority: OrderedFloat(priority),
			tie_break: OrderedFloat(tie_break),
			seq,
		});
	}
	fn pop(&mut self) -> Option<T> {
		self.heap.pop().map(|e| e.item)
	}
	fn len(&self) -> usize {
		self.heap.len()
	}
}

impl<T> std::fmt::Debug for PriorityFrontier<T> {
	fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
		fmt.debug_struct("PriorityFrontier")
			.field("len", &self.heap.len())
			.finish()
	}
}
