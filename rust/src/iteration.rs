//! Iterator implementations for BinarySearchTree.
//!
//! [`Iter`] walks the same parent/child links as the cursors, from both ends
//! at once, and stops when the two ends have yielded `len` elements between
//! them.

use std::fmt;
use std::iter::FusedIterator;

use crate::types::{BinarySearchTree, NodeId, NO_CHILD};

/// In-order iterator over the elements of a tree.
pub struct Iter<'a, T, C> {
    tree: &'a BinarySearchTree<T, C>,
    front: NodeId,
    back: NodeId,
    remaining: usize,
}

impl<T, C> BinarySearchTree<T, C> {
    /// Returns an iterator over all elements in ascending comparator order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pooled_bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<i32> = [4, 1, 3].into_iter().collect();
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4]);
    /// assert_eq!(tree.iter().rev().copied().collect::<Vec<_>>(), [4, 3, 1]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter {
            tree: self,
            front: self.first_node(),
            back: self.last_node(),
            remaining: self.len(),
        }
    }
}

impl<'a, T, C> Iterator for Iter<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.front == NO_CHILD {
            return None;
        }
        let tree = self.tree;
        let entry = tree.pool.get(self.front)?;
        self.remaining -= 1;
        self.front = tree.successor_of(self.front).unwrap_or(NO_CHILD);
        Some(&entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, C> DoubleEndedIterator for Iter<'_, T, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.back == NO_CHILD {
            return None;
        }
        let tree = self.tree;
        let entry = tree.pool.get(self.back)?;
        self.remaining -= 1;
        self.back = tree.predecessor_of(self.back).unwrap_or(NO_CHILD);
        Some(&entry.value)
    }
}

impl<T, C> ExactSizeIterator for Iter<'_, T, C> {}

impl<T, C> FusedIterator for Iter<'_, T, C> {}

impl<T, C> Clone for Iter<'_, T, C> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T, C> IntoIterator for &'a BinarySearchTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Formats the elements of a tree as an ordered list.
pub(crate) struct DebugElements<'a, T, C>(pub(crate) &'a BinarySearchTree<T, C>);

impl<T: fmt::Debug, C> fmt::Debug for DebugElements<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TraversalOrder::InOrder;

    #[test]
    fn test_iter_both_ends_meet() {
        let tree: BinarySearchTree<i32> = [5, 3, 7, 1, 4, 6, 9].into_iter().collect();
        let mut iter = tree.iter();
        assert_eq!(iter.len(), 7);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&9));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next_back(), Some(&7));
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.clone().collect::<Vec<_>>(), [&4, &5, &6]);
        assert_eq!(iter.next_back(), Some(&6));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.next(), Some(&4));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_iter_empty() {
        let tree = BinarySearchTree::<u8>::default();
        assert_eq!(tree.iter().next(), None);
        assert_eq!(tree.iter().next_back(), None);
    }

    #[test]
    fn test_for_loop_and_debug() {
        let mut tree = BinarySearchTree::new(3).unwrap();
        for value in ["b", "a", "c"] {
            tree.add(value, InOrder);
        }
        let mut joined = String::new();
        for value in &tree {
            joined.push_str(value);
        }
        assert_eq!(joined, "abc");
        assert_eq!(
            format!("{:?}", tree),
            r#"BinarySearchTree { len: 3, capacity: 3, elements: ["a", "b", "c"] }"#
        );
    }
}
