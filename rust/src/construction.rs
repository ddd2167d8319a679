//! Construction, copying and capacity management for BinarySearchTree.
//!
//! This module contains constructors, capacity validation, the deep `Clone`
//! implementation, the shallow `clone_to` copy, and pool growth.

use std::fmt;
use std::marker::PhantomData;

use crate::compare::NaturalOrder;
use crate::config::TreeOptions;
use crate::error::{InitResult, TreeError, TreeResult};
use crate::slot_pool::SlotPool;
use crate::types::{
    BinarySearchTree, DEFAULT_CAPACITY, DEFAULT_GROWTH_FACTOR, MAX_CAPACITY, NO_CHILD,
};

impl<T> BinarySearchTree<T, NaturalOrder> {
    /// Create an empty tree with `capacity` slots.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of slots to allocate up front (at least 1)
    ///
    /// # Returns
    ///
    /// Returns `Ok(BinarySearchTree)` if capacity is valid,
    /// `Err(TreeError::InvalidCapacity)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use pooled_bst::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::<i32>::new(16).unwrap();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.capacity(), 16);
    ///
    /// assert!(BinarySearchTree::<i32>::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> InitResult<Self> {
        Self::with_options(TreeOptions::new().with_initial_capacity(capacity))
    }

    /// Create an empty tree with a single slot.
    ///
    /// This is equivalent to calling `new(DEFAULT_CAPACITY)`, which cannot fail.
    pub fn with_default_capacity() -> Self {
        Self::from_parts(DEFAULT_CAPACITY, DEFAULT_GROWTH_FACTOR)
    }

    /// Create an empty tree sized by `options`.
    pub fn with_options(options: TreeOptions) -> InitResult<Self> {
        Self::with_comparator(options)
    }
}

impl<T, C> BinarySearchTree<T, C> {
    /// Create an empty tree sized by `options` that orders its elements with
    /// the comparator `C`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pooled_bst::{BinarySearchTree, ReverseOrder, TraversalOrder, TreeOptions};
    ///
    /// let mut tree =
    ///     BinarySearchTree::<i32, ReverseOrder>::with_comparator(TreeOptions::new()).unwrap();
    /// for value in [1, 3, 2] {
    ///     tree.add(value, TraversalOrder::InOrder);
    /// }
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    pub fn with_comparator(options: TreeOptions) -> InitResult<Self> {
        options.validate()?;
        Ok(Self::from_parts(
            options.initial_capacity,
            options.growth_factor,
        ))
    }

    fn from_parts(capacity: usize, growth_factor: f64) -> Self {
        Self {
            pool: SlotPool::with_capacity(capacity),
            root: NO_CHILD,
            growth_factor,
            comparator: PhantomData,
        }
    }

    /// Grow to at least `capacity` slots.
    ///
    /// Does nothing if the tree already has that many. Every element keeps its
    /// position and links, so existing cursors stay meaningful.
    ///
    /// # Examples
    ///
    /// ```
    /// use pooled_bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::<i32>::new(2).unwrap();
    /// tree.reserve(10).unwrap();
    /// assert_eq!(tree.capacity(), 10);
    /// tree.reserve(4).unwrap();
    /// assert_eq!(tree.capacity(), 10);
    /// ```
    pub fn reserve(&mut self, capacity: usize) -> TreeResult<()> {
        if capacity <= self.capacity() {
            return Ok(());
        }
        if capacity > MAX_CAPACITY {
            return Err(TreeError::CapacityOverflow {
                current: self.capacity(),
                requested: capacity,
            });
        }

        log::debug!(
            "reallocating tree pool from {} to {} slots",
            self.capacity(),
            capacity
        );
        self.pool.reallocate(capacity);
        Ok(())
    }

    /// Make room for one more element, growing by the configured factor when
    /// every slot is taken. Runs before any linking so a failure leaves the
    /// tree untouched.
    pub(crate) fn ensure_free_slot(&mut self) -> TreeResult<()> {
        if !self.pool.is_full() {
            return Ok(());
        }
        let current = self.capacity();
        let grown = TreeOptions::grown_capacity(self.growth_factor, current).min(MAX_CAPACITY);
        if grown <= current {
            return Err(TreeError::CapacityOverflow {
                current,
                requested: current + 1,
            });
        }
        self.reserve(grown)
    }

    /// Copy this tree into `destination` slot for slot.
    ///
    /// `destination` is grown to at least this tree's capacity first; its
    /// previous contents are discarded. The copy is bitwise: elements are not
    /// cloned, which is why it is only offered for `Copy` elements. Use
    /// [`Clone`] for element-wise copies.
    ///
    /// # Examples
    ///
    /// ```
    /// use pooled_bst::{BinarySearchTree, TraversalOrder};
    ///
    /// let mut source = BinarySearchTree::new(8).unwrap();
    /// for value in [4, 2, 6] {
    ///     source.add(value, TraversalOrder::InOrder);
    /// }
    ///
    /// let mut destination = BinarySearchTree::with_default_capacity();
    /// source.clone_to(&mut destination);
    /// assert_eq!(destination.capacity(), 8);
    /// assert!(destination == source);
    /// ```
    pub fn clone_to(&self, destination: &mut Self)
    where
        T: Copy,
    {
        self.pool.copy_to(&mut destination.pool);
        destination.root = self.root;
    }
}

impl<T, C> Default for BinarySearchTree<T, C> {
    fn default() -> Self {
        Self::from_parts(DEFAULT_CAPACITY, DEFAULT_GROWTH_FACTOR)
    }
}

/// Element-wise copy: every element is cloned into the same position, links
/// and free slots are copied as they are.
impl<T: Clone, C> Clone for BinarySearchTree<T, C> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            root: self.root,
            growth_factor: self.growth_factor,
            comparator: PhantomData,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.pool.clone_from(&source.pool);
        self.root = source.root;
        self.growth_factor = source.growth_factor;
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinarySearchTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("elements", &crate::iteration::DebugElements(self))
            .finish()
    }
}
