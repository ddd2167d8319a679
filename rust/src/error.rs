//! Error handling and result types for tree operations.
//!
//! Every documented precondition of the tree and its cursors maps onto a
//! [`TreeError`] variant. Checked entry points (`try_*`) return these errors;
//! the permissive entry points log them through [`TreeResultExt`] and fall back
//! to a well-defined result instead.

use thiserror::Error;

use crate::types::{Direction, NodeId, TraversalOrder};

/// Error type for tree and cursor operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TreeError {
    /// Requested slot capacity is zero or larger than the pool can address.
    #[error("invalid capacity {capacity} (must be between 1 and {max})")]
    InvalidCapacity { capacity: usize, max: usize },

    /// Growth factor is below 1.0 or not a finite number.
    #[error("invalid growth factor {0} (must be finite and at least 1.0)")]
    InvalidGrowthFactor(f64),

    /// Growing the pool would produce ids that collide with the link sentinel.
    #[error("capacity overflow: cannot grow from {current} to {requested} slots")]
    CapacityOverflow { current: usize, requested: usize },

    /// The value compares equal to an element already in the tree.
    #[error("value already present at position {existing}")]
    DuplicateValue { existing: NodeId },

    /// Only in-order traversal is implemented.
    #[error("traversal order {0:?} is not supported")]
    UnsupportedTraversal(TraversalOrder),

    /// The cursor sits on one of the end sentinels.
    #[error("cannot {0} at an end position")]
    EndPosition(&'static str),

    /// The cursor names a slot beyond the current capacity.
    #[error("position {position} is out of range for capacity {capacity}")]
    PositionOutOfRange { position: NodeId, capacity: usize },

    /// The cursor names a slot that holds no element.
    #[error("position {0} does not hold an element")]
    VacantPosition(NodeId),

    /// Stepping further in a direction whose end has already been reached.
    #[error("cannot step {0:?} past the end")]
    StepPastEnd(Direction),

    /// The operation requires at least one element.
    #[error("tree is empty")]
    EmptyTree,

    /// A structural invariant does not hold.
    #[error("corrupted tree: {0}")]
    CorruptedTree(String),
}

impl TreeError {
    /// Create an InvalidCapacity error for the given request
    pub fn invalid_capacity(capacity: usize) -> Self {
        Self::InvalidCapacity {
            capacity,
            max: crate::types::MAX_CAPACITY,
        }
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{}: {}", component, details))
    }

    /// Check if this error is a contract violation by the caller, as opposed
    /// to resource exhaustion or detected corruption.
    pub fn is_contract_violation(&self) -> bool {
        !matches!(
            self,
            Self::CapacityOverflow { .. } | Self::CorruptedTree(_)
        )
    }

    /// Check if this error is a capacity error
    pub fn is_capacity_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidCapacity { .. } | Self::CapacityOverflow { .. }
        )
    }
}

/// Result type for tree operations that may fail
pub type TreeResult<T> = Result<T, TreeError>;

/// Result type for tree construction and validation
pub type InitResult<T> = Result<T, TreeError>;

/// Result extension trait used by the permissive entry points
pub trait TreeResultExt<T> {
    /// Log the error and continue with `fallback`
    fn or_fallback(self, operation: &str, fallback: T) -> T;

    /// Log the error and continue with a value computed from it
    fn or_else_fallback<F>(self, operation: &str, fallback: F) -> T
    where
        F: FnOnce(TreeError) -> T;
}

impl<T> TreeResultExt<T> for TreeResult<T> {
    fn or_fallback(self, operation: &str, fallback: T) -> T {
        self.or_else_fallback(operation, |_| fallback)
    }

    fn or_else_fallback<F>(self, operation: &str, fallback: F) -> T
    where
        F: FnOnce(TreeError) -> T,
    {
        match self {
            Ok(value) => value,
            Err(e) => {
                log::warn!("{} failed, using fallback: {}", operation, e);
                fallback(e)
            }
        }
    }
}
