//! INSERT operations for BinarySearchTree.
//!
//! This module contains element insertion: duplicate detection, pool growth,
//! and linking the new node under the parent found by the descent.

use std::cmp::Ordering;

use crate::compare::Comparator;
use crate::cursor::RawCursor;
use crate::error::{TreeError, TreeResult, TreeResultExt};
use crate::get_operations::Search;
use crate::types::{BinarySearchTree, Entry, NodeId, NodeLinks, Position, TraversalOrder};

impl<T, C: Comparator<T>> BinarySearchTree<T, C> {
    /// Insert `value` and return a cursor at it.
    ///
    /// # Arguments
    ///
    /// * `value` - Element to insert; must not compare equal to any element
    /// * `order` - Traversal order of the returned cursor
    ///
    /// # Returns
    ///
    /// `DuplicateValue` if an equal element exists, `UnsupportedTraversal`
    /// for orders other than in-order, `CapacityOverflow` if the pool cannot
    /// grow. The tree is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use pooled_bst::{BinarySearchTree, TraversalOrder, TreeError};
    ///
    /// let mut tree = BinarySearchTree::with_default_capacity();
    /// let cursor = tree.try_add(0, TraversalOrder::InOrder).unwrap();
    /// assert_eq!(tree.get(cursor), Some(&0));
    ///
    /// assert!(matches!(
    ///     tree.try_add(0, TraversalOrder::InOrder),
    ///     Err(TreeError::DuplicateValue { .. })
    /// ));
    /// ```
    pub fn try_add(&mut self, value: T, order: TraversalOrder) -> TreeResult<RawCursor> {
        Self::check_order(order)?;
        let id = self.insert(value)?;
        Ok(RawCursor::new(Position::At(id), order))
    }

    /// Insert `value`, degrading on contract violations.
    ///
    /// A duplicate is dropped and the cursor points at the existing element.
    /// With an unsupported order the value is still inserted but the cursor is
    /// `AfterLast`. If the pool cannot grow the value is dropped and the
    /// cursor is `AfterLast`.
    pub fn add(&mut self, value: T, order: TraversalOrder) -> RawCursor {
        match self.insert(value) {
            Ok(id) => {
                let cursor = RawCursor::new(Position::At(id), order);
                Self::check_order(order)
                    .map(|()| cursor)
                    .or_fallback("add", cursor.with_position(Position::AfterLast))
            }
            Err(error) => {
                let fallback = match error {
                    TreeError::DuplicateValue { existing } => Position::At(existing),
                    _ => Position::AfterLast,
                };
                Err::<RawCursor, _>(error).or_fallback("add", RawCursor::new(fallback, order))
            }
        }
    }

    /// Link `value` into the tree and return its slot id.
    fn insert(&mut self, value: T) -> TreeResult<NodeId> {
        let (parent, side) = match self.search(&value) {
            Search::Found(existing) => return Err(TreeError::DuplicateValue { existing }),
            Search::Empty => (None, Ordering::Equal),
            Search::Missing { parent, side } => (Some(parent), side),
        };

        self.ensure_free_slot()?;

        let links = parent.map_or(NodeLinks::DETACHED, NodeLinks::with_parent);
        let id = self
            .pool
            .allocate(Entry { value, links })
            .map_err(|_| TreeError::CapacityOverflow {
                current: self.capacity(),
                requested: self.capacity() + 1,
            })?;

        match parent {
            None => self.root = id,
            Some(parent) => {
                if let Some(links) = self.links_mut(parent) {
                    if side == Ordering::Less {
                        links.left = id;
                    } else {
                        links.right = id;
                    }
                }
            }
        }

        log::trace!("added element at slot {} (len {})", id, self.len());
        Ok(id)
    }
}

impl<T, C: Comparator<T>> Extend<T> for BinarySearchTree<T, C> {
    /// Add every value in order; duplicates are skipped with a warning.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value, TraversalOrder::InOrder);
        }
    }
}

impl<T, C: Comparator<T>> FromIterator<T> for BinarySearchTree<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}
