//! Pool-backed binary search tree with index-based cursors.
//!
//! [`BinarySearchTree`] stores every element together with its parent and
//! child links in a single slot pool. Links and cursor positions are slot ids
//! rather than addresses, so growing the pool keeps all of them valid.
//!
//! The tree does not rebalance. Lookups and insertion are O(depth), and depth
//! degrades to O(n) for sorted insertion order.
//!
//! Fallible operations come in pairs:
//!
//! - `try_*` methods return a [`TreeResult`] with a typed [`TreeError`] when a
//!   precondition is violated (duplicate insertion, removal at an end,
//!   unsupported traversal order, stepping past an end, ...)
//! - the plain methods log the violation through the `log` facade and fall
//!   back to a documented result: a no-op, or a cursor at `AfterLast`
//!
//! # Examples
//!
//! ```
//! use pooled_bst::{BinarySearchTree, Direction, TraversalOrder::InOrder};
//!
//! let mut tree = BinarySearchTree::new(7).unwrap();
//! for value in [5, 3, 7, 1, 4, 6, 9] {
//!     tree.add(value, InOrder);
//! }
//!
//! // Cursors are detached from the tree and survive mutation.
//! let three = tree.position_of(&3, InOrder);
//! let next = tree.remove(three);
//! assert_eq!(tree.get(next), Some(&4));
//!
//! let mut cursor = tree.last(InOrder);
//! let mut descending = Vec::new();
//! while !cursor.is_end_in(Direction::Backward) {
//!     descending.push(*cursor.get().unwrap());
//!     cursor.move_prev();
//! }
//! assert_eq!(descending, [9, 7, 6, 5, 4, 1]);
//! ```

mod compare;
mod config;
mod construction;
mod cursor;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod navigation;
mod slot_pool;
mod types;
mod validation;

pub use compare::{Comparator, NaturalOrder, ReverseOrder};
pub use config::TreeOptions;
pub use cursor::{Cursor, RawCursor};
pub use error::{InitResult, TreeError, TreeResult, TreeResultExt};
pub use iteration::Iter;
pub use slot_pool::{SlotPool, SlotPoolStats};
pub use types::{
    BinarySearchTree, Direction, Entry, NodeId, NodeLinks, Position, TraversalOrder,
    DEFAULT_CAPACITY, DEFAULT_GROWTH_FACTOR, MAX_CAPACITY, NO_CHILD,
};

#[cfg(test)]
mod tests {
    use super::*;
    use TraversalOrder::InOrder;

    #[test]
    fn test_cursor_survives_growth() {
        let mut tree = BinarySearchTree::with_default_capacity();
        let first = tree.add(50, InOrder);
        for value in 0..40 {
            tree.add(value, InOrder);
        }
        assert!(tree.capacity() > 1);
        assert_eq!(tree.get(first), Some(&50));

        let cursor = tree.cursor(first);
        assert_eq!(cursor.get(), Some(&50));
        assert!(cursor.is_valid());
    }

    #[test]
    fn test_string_elements() {
        let mut tree = BinarySearchTree::new(2).unwrap();
        for word in ["delta", "alpha", "charlie", "bravo"] {
            tree.add(word.to_string(), InOrder);
        }
        let words: Vec<&str> = tree.iter().map(String::as_str).collect();
        assert_eq!(words, ["alpha", "bravo", "charlie", "delta"]);
        assert!(tree.check_invariants());
    }
}
