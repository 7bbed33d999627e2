//! Error types for the Planners

use crate::{grid::Occupancy, Cell, VisitId};
use std::fmt;

/// All the ways a call to [`Planner::plan`](crate::Planner::plan) can fail.
///
/// The variants fall into three groups that callers are expected to tell apart:
/// - a normal terminal outcome of the search: [`NoPathFound`](PlanError::NoPathFound)
/// - a rejected query or an aborted search: [`InvalidStart`](PlanError::InvalidStart),
///   [`InvalidGoal`](PlanError::InvalidGoal) and
///   [`ExpansionBudgetExceeded`](PlanError::ExpansionBudgetExceeded)
/// - an internal inconsistency: [`ReconstructionIntegrityViolation`](PlanError::ReconstructionIntegrityViolation)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
	/// The frontier ran empty without reaching the Goal
	NoPathFound,
	/// The start Cell cannot be occupied by the Robot
	InvalidStart {
		/// the rejected Cell
		cell: Cell,
		/// what occupies it
		occupancy: Occupancy,
	},
	/// The goal Cell cannot be occupied by the Robot
	InvalidGoal {
		/// the rejected Cell
		cell: Cell,
		/// what occupies it
		occupancy: Occupancy,
	},
	/// A tree-based search reached its expansion budget.
	///
	/// This does **not** prove that no Path exists.
	ExpansionBudgetExceeded {
		/// the budget that was reached
		budget: usize,
	},
	/// The parent links of a finished search do not form a chain back to the start
	ReconstructionIntegrityViolation(IntegrityViolation),
}

impl PlanError {
	/// `true` if the error is a regular result of a completed search, i.e. the Goal is unreachable
	pub fn is_search_outcome(&self) -> bool {
		matches!(self, PlanError::NoPathFound)
	}

	/// `true` if the search was cut short before it could decide reachability
	pub fn is_aborted(&self) -> bool {
		matches!(self, PlanError::ExpansionBudgetExceeded { .. })
	}
}

/// Describes a malformed parent chain found during Path reconstruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityViolation {
	/// A Node other than the root has no parent entry
	MissingParent {
		/// the Cell of the orphaned Node
		cell: Cell,
		/// its visit id, for tree-based searches
		visit: Option<VisitId>,
	},
	/// The walk returned to a Node it had already passed
	Cycle {
		/// the Cell of the repeated Node
		cell: Cell,
		/// its visit id, for tree-based searches
		visit: Option<VisitId>,
	},
}

impl fmt::Display for IntegrityViolation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let (what, cell, visit) = match *self {
			IntegrityViolation::MissingParent { cell, visit } => ("missing parent", cell, visit),
			IntegrityViolation::Cycle { cell, visit } => ("cycle", cell, visit),
		};
		write!(f, "{} at ({}, {})", what, cell.0, cell.1)?;
		if let Some(visit) = visit {
			write!(f, " [visit {}]", visit)?;
		}
		Ok(())
	}
}

impl fmt::Display for PlanError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PlanError::NoPathFound => write!(f, "no path found"),
			PlanError::InvalidStart { cell, occupancy } => {
				write!(f, "invalid start ({}, {}): {}", cell.0, cell.1, occupancy)
			}
			PlanError::InvalidGoal { cell, occupancy } => {
				write!(f, "invalid goal ({}, {}): {}", cell.0, cell.1, occupancy)
			}
			PlanError::ExpansionBudgetExceeded { budget } => {
				write!(f, "expansion budget of {} exceeded", budget)
			}
			PlanError::ReconstructionIntegrityViolation(violation) => {
				write!(f, "path reconstruction failed: {}", violation)
			}
		}
	}
}

impl std::error::Error for PlanError {}

impl From<IntegrityViolation> for PlanError {
	fn from(violation: IntegrityViolation) -> Self {
		PlanError::ReconstructionIntegrityViolation(violation)
	}
}

/// Result type alias for planning operations
pub type PlanResult<T> = Result<T, PlanError>;
