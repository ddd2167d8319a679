//! Core types and data structures for BinarySearchTree.
//!
//! This module contains the fundamental data structures, type definitions,
//! and constants used throughout the tree implementation.

use std::marker::PhantomData;

use crate::compare::NaturalOrder;
use crate::slot_pool::SlotPool;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Node ID type: the physical position of a slot in the pool
pub type NodeId = u32;

/// Link value meaning "no node": absent child, parent of the root, empty root
pub const NO_CHILD: NodeId = u32::MAX;

/// Largest number of slots a tree can hold. Every valid id stays below
/// [`NO_CHILD`].
pub const MAX_CAPACITY: usize = NO_CHILD as usize;

/// Slot capacity of a default-constructed tree
pub const DEFAULT_CAPACITY: usize = 1;

/// Multiplier applied to `capacity + 1` when a full tree grows
pub const DEFAULT_GROWTH_FACTOR: f64 = 1.5;

// ============================================================================
// CURSOR VOCABULARY
// ============================================================================

/// Order in which a cursor visits the elements.
///
/// Only [`TraversalOrder::InOrder`] is implemented. The other variants exist so
/// callers can name them; every operation rejects them with
/// [`TreeError::UnsupportedTraversal`](crate::TreeError::UnsupportedTraversal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TraversalOrder {
    /// Depth-first, left subtree, node, right subtree.
    #[default]
    InOrder,
    /// Depth-first, node before its subtrees.
    PreOrder,
    /// Depth-first, node after its subtrees.
    PostOrder,
}

impl TraversalOrder {
    /// Returns true if cursors can step in this order.
    pub fn is_supported(self) -> bool {
        match self {
            TraversalOrder::InOrder => true,
            TraversalOrder::PreOrder | TraversalOrder::PostOrder => false,
        }
    }
}

/// Direction of a cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards larger elements, ending at [`Position::AfterLast`].
    Forward,
    /// Towards smaller elements, ending at [`Position::BeforeFirst`].
    Backward,
}

/// Where a cursor points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Backward end: one step before the first element.
    BeforeFirst,
    /// A physical slot in the pool.
    At(NodeId),
    /// Forward end: one step past the last element. Also the result of a
    /// failed lookup.
    AfterLast,
}

impl Position {
    /// Returns the slot id, or `None` for either end.
    pub fn node(self) -> Option<NodeId> {
        match self {
            Position::At(id) => Some(id),
            Position::BeforeFirst | Position::AfterLast => None,
        }
    }

    /// Returns true for either end sentinel.
    pub fn is_end(self) -> bool {
        self.node().is_none()
    }

    /// Returns true if this is the end reached by stepping in `direction`.
    pub fn is_end_in(self, direction: Direction) -> bool {
        match direction {
            Direction::Forward => self == Position::AfterLast,
            Direction::Backward => self == Position::BeforeFirst,
        }
    }

    pub(crate) fn from_link(id: NodeId) -> Self {
        if id == NO_CHILD {
            Position::AfterLast
        } else {
            Position::At(id)
        }
    }
}

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Structural links of one node. Every field is a slot id or [`NO_CHILD`].
///
/// `parent` is a lookup relation used for upward walks. It never implies
/// ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeLinks {
    pub parent: NodeId,
    pub left: NodeId,
    pub right: NodeId,
}

impl NodeLinks {
    /// Links of a node that is attached to nothing.
    pub const DETACHED: NodeLinks = NodeLinks {
        parent: NO_CHILD,
        left: NO_CHILD,
        right: NO_CHILD,
    };

    pub(crate) fn with_parent(parent: NodeId) -> Self {
        NodeLinks {
            parent,
            ..Self::DETACHED
        }
    }

    pub fn has_parent(&self) -> bool {
        self.parent != NO_CHILD
    }

    pub fn has_left(&self) -> bool {
        self.left != NO_CHILD
    }

    pub fn has_right(&self) -> bool {
        self.right != NO_CHILD
    }

    /// Link presence, used when comparing tree shapes.
    pub(crate) fn shape(&self) -> (bool, bool, bool) {
        (self.has_parent(), self.has_left(), self.has_right())
    }
}

/// One occupied slot: the element and its links, moved and copied together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry<T> {
    pub(crate) value: T,
    pub(crate) links: NodeLinks,
}

/// Unbalanced binary search tree stored in a slot pool.
///
/// Elements live at stable physical positions ([`NodeId`]) inside a single
/// pool; parent and child relations are ids, so growing the pool never
/// invalidates links or cursor positions. The tree does not rebalance: lookups
/// are O(depth), and depth reaches O(n) for sorted insertion order.
///
/// # Type Parameters
///
/// * `T` - Element type
/// * `C` - Comparator establishing a strict total order over `T`
///
/// # Examples
///
/// ```
/// use pooled_bst::{BinarySearchTree, TraversalOrder};
///
/// let mut tree = BinarySearchTree::new(4).unwrap();
/// for value in [5, 3, 7, 1] {
///     tree.add(value, TraversalOrder::InOrder);
/// }
///
/// assert!(tree.contains(&3));
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 5, 7]);
/// ```
pub struct BinarySearchTree<T, C = NaturalOrder> {
    /// Slot storage for elements and their links.
    pub(crate) pool: SlotPool<Entry<T>>,
    /// Id of the root node, or `NO_CHILD` when empty.
    pub(crate) root: NodeId,
    /// Multiplier applied to `capacity + 1` on growth.
    pub(crate) growth_factor: f64,
    pub(crate) comparator: PhantomData<fn() -> C>,
}
