//! GET operations for BinarySearchTree.
//!
//! This module contains the read operations of the tree: value lookup,
//! element access through cursors, size queries, and the comparator-guided
//! descent that insertion shares.

use std::cmp::Ordering;

use crate::compare::Comparator;
use crate::cursor::RawCursor;
use crate::error::{TreeError, TreeResult, TreeResultExt};
use crate::slot_pool::SlotPoolStats;
use crate::types::{BinarySearchTree, NodeId, Position, TraversalOrder, NO_CHILD};

/// Outcome of a descent from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Search {
    /// The tree has no root.
    Empty,
    /// An element comparing equal lives here.
    Found(NodeId),
    /// The value belongs as the `side` child of `parent`, which has none.
    Missing { parent: NodeId, side: Ordering },
}

impl<T, C> BinarySearchTree<T, C> {
    // ============================================================================
    // SIZE QUERIES
    // ============================================================================

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root == NO_CHILD
    }

    /// Number of slots, occupied or not.
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    pub fn growth_factor(&self) -> f64 {
        self.growth_factor
    }

    /// Slot usage of the underlying pool.
    pub fn pool_stats(&self) -> SlotPoolStats {
        self.pool.stats()
    }

    /// Number of nodes on the longest root-to-leaf path; 0 when empty.
    ///
    /// Without rebalancing this reaches `len()` for sorted insertion order.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut pending = Vec::new();
        if self.root != NO_CHILD {
            pending.push((self.root, 1));
        }
        while let Some((id, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            let links = self.links(id);
            for child in [links.left, links.right] {
                if child != NO_CHILD {
                    pending.push((child, depth + 1));
                }
            }
        }
        deepest
    }

    // ============================================================================
    // ELEMENT ACCESS
    // ============================================================================

    /// The element under `cursor`.
    ///
    /// # Returns
    ///
    /// `EndPosition` at either end, `PositionOutOfRange` or `VacantPosition`
    /// for positions that hold nothing.
    pub fn try_get(&self, cursor: RawCursor) -> TreeResult<&T> {
        let id = cursor
            .position
            .node()
            .ok_or(TreeError::EndPosition("dereference"))?;
        self.check_occupied(id)?;
        self.pool
            .get(id)
            .map(|entry| &entry.value)
            .ok_or(TreeError::VacantPosition(id))
    }

    /// The element under `cursor`, or `None` at an end or an empty slot.
    pub fn get(&self, cursor: RawCursor) -> Option<&T> {
        let id = cursor.position.node()?;
        self.pool.get(id).map(|entry| &entry.value)
    }
}

impl<T, C: Comparator<T>> BinarySearchTree<T, C> {
    /// Comparator-guided descent from the root.
    pub(crate) fn search(&self, value: &T) -> Search {
        if self.root == NO_CHILD {
            return Search::Empty;
        }

        let mut current = self.root;
        loop {
            // Links only name occupied slots.
            let Some(entry) = self.pool.get(current) else {
                return Search::Empty;
            };
            let side = C::compare(value, &entry.value);
            let next = match side {
                Ordering::Equal => return Search::Found(current),
                Ordering::Less => entry.links.left,
                Ordering::Greater => entry.links.right,
            };
            if next == NO_CHILD {
                return Search::Missing {
                    parent: current,
                    side,
                };
            }
            current = next;
        }
    }

    /// Check if an element comparing equal to `value` exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use pooled_bst::{BinarySearchTree, TraversalOrder};
    ///
    /// let mut tree = BinarySearchTree::new(2).unwrap();
    /// tree.add("pear", TraversalOrder::InOrder);
    /// assert!(tree.contains(&"pear"));
    /// assert!(!tree.contains(&"plum"));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        matches!(self.search(value), Search::Found(_))
    }

    /// Cursor at the element comparing equal to `value`, or `AfterLast`.
    pub fn try_position_of(&self, value: &T, order: TraversalOrder) -> TreeResult<RawCursor> {
        Self::check_order(order)?;
        let position = match self.search(value) {
            Search::Found(id) => Position::At(id),
            Search::Empty | Search::Missing { .. } => Position::AfterLast,
        };
        Ok(RawCursor::new(position, order))
    }

    /// Like [`try_position_of`](Self::try_position_of); an unsupported order
    /// yields `AfterLast`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pooled_bst::{BinarySearchTree, Position, TraversalOrder};
    ///
    /// let mut tree = BinarySearchTree::new(4).unwrap();
    /// let added = tree.add(10, TraversalOrder::InOrder);
    ///
    /// assert_eq!(tree.position_of(&10, TraversalOrder::InOrder), added);
    /// assert_eq!(
    ///     tree.position_of(&11, TraversalOrder::InOrder).position(),
    ///     Position::AfterLast
    /// );
    /// ```
    pub fn position_of(&self, value: &T, order: TraversalOrder) -> RawCursor {
        self.try_position_of(value, order)
            .or_fallback("position_of", RawCursor::new(Position::AfterLast, order))
    }
}
