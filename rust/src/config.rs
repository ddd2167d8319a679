//! Construction options for BinarySearchTree.

use crate::error::{InitResult, TreeError};
use crate::types::{DEFAULT_CAPACITY, DEFAULT_GROWTH_FACTOR, MAX_CAPACITY};

/// Sizing policy of a tree.
///
/// # Examples
///
/// ```
/// use pooled_bst::{BinarySearchTree, TreeOptions};
///
/// let options = TreeOptions::new()
///     .with_initial_capacity(64)
///     .with_growth_factor(2.0);
/// let tree = BinarySearchTree::<u32>::with_options(options).unwrap();
/// assert_eq!(tree.capacity(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeOptions {
    /// Number of slots allocated up front. Must be at least 1.
    pub initial_capacity: usize,
    /// A full tree grows to `ceil((capacity + 1) * growth_factor)` slots.
    /// Must be finite and at least 1.0.
    pub growth_factor: f64,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl TreeOptions {
    /// Options with the default capacity and growth factor.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_growth_factor(mut self, growth_factor: f64) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    /// Check both fields against their documented ranges.
    pub fn validate(&self) -> InitResult<()> {
        if self.initial_capacity == 0 || self.initial_capacity > MAX_CAPACITY {
            return Err(TreeError::invalid_capacity(self.initial_capacity));
        }
        if !self.growth_factor.is_finite() || self.growth_factor < 1.0 {
            return Err(TreeError::InvalidGrowthFactor(self.growth_factor));
        }
        Ok(())
    }

    /// Capacity after growing a full pool of `capacity` slots, before the
    /// [`MAX_CAPACITY`] check.
    pub(crate) fn grown_capacity(growth_factor: f64, capacity: usize) -> usize {
        let grown = ((capacity as f64 + 1.0) * growth_factor).ceil() as usize;
        grown.max(capacity + 1)
    }
}
