//! DELETE operations for BinarySearchTree.
//!
//! This module contains element removal and the re-linking that keeps the
//! in-order sequence intact without rotations, plus bulk clearing.

use crate::compare::Comparator;
use crate::cursor::RawCursor;
use crate::error::{TreeError, TreeResult, TreeResultExt};
use crate::get_operations::Search;
use crate::types::{BinarySearchTree, NodeId, Position, NO_CHILD};

impl<T, C> BinarySearchTree<T, C> {
    /// Remove the element under `cursor` and hand it back together with a
    /// cursor at its in-order successor (`AfterLast` if it was the largest).
    ///
    /// # Returns
    ///
    /// `UnsupportedTraversal`, `EndPosition`, `EmptyTree`,
    /// `PositionOutOfRange` or `VacantPosition` when the cursor does not name
    /// an element; the tree is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use pooled_bst::{BinarySearchTree, TraversalOrder};
    ///
    /// let mut tree = BinarySearchTree::new(4).unwrap();
    /// for value in [2, 1, 3] {
    ///     tree.add(value, TraversalOrder::InOrder);
    /// }
    ///
    /// let two = tree.position_of(&2, TraversalOrder::InOrder);
    /// let (removed, next) = tree.take(two).unwrap();
    /// assert_eq!(removed, 2);
    /// assert_eq!(tree.get(next), Some(&3));
    /// ```
    pub fn take(&mut self, cursor: RawCursor) -> TreeResult<(T, RawCursor)> {
        Self::check_order(cursor.order)?;
        let id = cursor
            .position
            .node()
            .ok_or(TreeError::EndPosition("remove"))?;
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        self.check_occupied(id)?;

        // Slot ids of other nodes survive the unlink, so the successor can be
        // taken before touching any link.
        let next = self
            .successor_of(id)
            .map_or(Position::AfterLast, Position::At);
        let value = self.unlink(id).ok_or(TreeError::VacantPosition(id))?;
        Ok((value, cursor.with_position(next)))
    }

    /// Remove and drop the element under `cursor`; returns a cursor at its
    /// successor. Errors as for [`take`](Self::take).
    pub fn try_remove(&mut self, cursor: RawCursor) -> TreeResult<RawCursor> {
        self.take(cursor).map(|(_, next)| next)
    }

    /// Like [`try_remove`](Self::try_remove); when the cursor names no element
    /// nothing is removed and the cursor is returned unchanged.
    pub fn remove(&mut self, cursor: RawCursor) -> RawCursor {
        self.try_remove(cursor).or_fallback("remove", cursor)
    }

    /// Remove every element, smallest first. Capacity is kept.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        let count = self.len();
        while self.root != NO_CHILD {
            let first = self.first_node();
            if self.unlink(first).is_none() {
                break;
            }
        }
        log::debug!("cleared {} elements", count);
    }

    /// Detach node `id`, free its slot and return its element.
    ///
    /// With two children the left child takes the node's place and the right
    /// subtree hangs off the maximum of the left subtree, which keeps the
    /// in-order sequence without rotations.
    pub(crate) fn unlink(&mut self, id: NodeId) -> Option<T> {
        let links = self.pool.get(id)?.links;

        let replacement = match (links.left, links.right) {
            (NO_CHILD, NO_CHILD) => NO_CHILD,
            (left, NO_CHILD) => left,
            (NO_CHILD, right) => right,
            (left, right) => {
                let max_of_left = self.rightmost_from(left);
                if let Some(max_links) = self.links_mut(max_of_left) {
                    max_links.right = right;
                }
                if let Some(right_links) = self.links_mut(right) {
                    right_links.parent = max_of_left;
                }
                left
            }
        };

        if let Some(replacement_links) = self.links_mut(replacement) {
            replacement_links.parent = links.parent;
        }

        if links.parent == NO_CHILD {
            self.root = replacement;
        } else if let Some(parent_links) = self.links_mut(links.parent) {
            if parent_links.left == id {
                parent_links.left = replacement;
            } else {
                parent_links.right = replacement;
            }
        }

        let entry = self.pool.deallocate(id)?;
        log::trace!("removed element at slot {} (len {})", id, self.len());
        Some(entry.value)
    }
}

impl<T, C: Comparator<T>> BinarySearchTree<T, C> {
    /// Remove the element comparing equal to `value`, if any.
    pub fn remove_value(&mut self, value: &T) -> Option<T> {
        match self.search(value) {
            Search::Found(id) => self.unlink(id),
            Search::Empty | Search::Missing { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TraversalOrder::{InOrder, PreOrder};

    fn tree_of(values: &[i32]) -> BinarySearchTree<i32> {
        let mut tree = BinarySearchTree::new(values.len().max(1)).unwrap();
        for &value in values {
            tree.add(value, InOrder);
        }
        tree
    }

    fn in_order(tree: &BinarySearchTree<i32>) -> Vec<i32> {
        tree.iter().copied().collect()
    }

    #[test]
    fn test_remove_leaf() {
        let mut tree = tree_of(&[5, 3, 7]);
        let next = tree.remove(tree.position_of(&7, InOrder));
        assert_eq!(next.position(), Position::AfterLast);
        assert_eq!(in_order(&tree), [3, 5]);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_remove_single_child() {
        let mut tree = tree_of(&[5, 3, 1]);
        let next = tree.remove(tree.position_of(&3, InOrder));
        assert_eq!(tree.get(next), Some(&5));
        assert_eq!(in_order(&tree), [1, 5]);

        let one = tree.position_of(&1, InOrder).position().node().unwrap();
        let five = tree.position_of(&5, InOrder).position().node().unwrap();
        assert_eq!(tree.links(one).parent, five);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_remove_two_children_reattaches_right_subtree() {
        let mut tree = tree_of(&[5, 3, 6, 1, 4]);
        let next = tree.remove(tree.position_of(&3, InOrder));
        assert_eq!(tree.get(next), Some(&4));
        assert_eq!(in_order(&tree), [1, 4, 5, 6]);

        // 1 replaced 3 and 4 now hangs to its right.
        let one = tree.position_of(&1, InOrder).position().node().unwrap();
        let four = tree.position_of(&4, InOrder).position().node().unwrap();
        let five = tree.position_of(&5, InOrder).position().node().unwrap();
        assert_eq!(tree.links(one).parent, five);
        assert_eq!(tree.links(one).right, four);
        assert_eq!(tree.links(four).parent, one);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_remove_root() {
        let mut tree = tree_of(&[5, 3, 8, 7, 9]);
        let root = tree.root;
        let (value, next) = tree.take(RawCursor::new(Position::At(root), InOrder)).unwrap();
        assert_eq!(value, 5);
        assert_eq!(tree.get(next), Some(&7));
        assert_eq!(tree.get(RawCursor::new(Position::At(tree.root), InOrder)), Some(&3));
        assert_eq!(in_order(&tree), [3, 7, 8, 9]);
        assert!(tree.check_invariants());

        let mut single = tree_of(&[1]);
        let next = single.remove(single.first(InOrder).raw());
        assert_eq!(next.position(), Position::AfterLast);
        assert!(single.is_empty());
        assert_eq!(single.root, NO_CHILD);
    }

    #[test]
    fn test_remove_contract_violations() {
        let mut tree = tree_of(&[2, 1]);
        let one = tree.position_of(&1, InOrder);

        assert_eq!(
            tree.try_remove(RawCursor::after_last()),
            Err(TreeError::EndPosition("remove"))
        );
        assert_eq!(
            tree.try_remove(RawCursor::new(one.position(), PreOrder)),
            Err(TreeError::UnsupportedTraversal(PreOrder))
        );
        assert_eq!(tree.remove(RawCursor::before_first()), RawCursor::before_first());

        tree.remove(one);
        assert!(matches!(
            tree.try_remove(one),
            Err(TreeError::VacantPosition(_))
        ));
        assert_eq!(tree.len(), 1);

        let mut empty = BinarySearchTree::<i32>::default();
        assert_eq!(
            empty.try_remove(RawCursor::new(Position::At(0), InOrder)),
            Err(TreeError::EmptyTree)
        );
    }

    #[test]
    fn test_freed_slot_is_reused_by_add() {
        let mut tree = tree_of(&[2, 1, 3]);
        let one = tree.position_of(&1, InOrder);
        tree.remove(one);
        let zero = tree.add(0, InOrder);
        assert_eq!(zero.position(), one.position());
        // The stale cursor now silently names the new element.
        assert_eq!(tree.get(one), Some(&0));
    }

    #[test]
    fn test_remove_value() {
        let mut tree = tree_of(&[4, 2, 6]);
        assert_eq!(tree.remove_value(&2), Some(2));
        assert_eq!(tree.remove_value(&2), None);
        assert_eq!(in_order(&tree), [4, 6]);
    }

    #[test]
    fn test_clear() {
        let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
        let capacity = tree.capacity();
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.capacity(), capacity);

        tree.clear();
        assert!(tree.is_empty());
        assert!(tree.check_invariants());
    }
}
