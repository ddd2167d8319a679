//! Position-based cursors.
//!
//! A [`RawCursor`] is a plain `(position, traversal order)` pair. It borrows
//! nothing, so it can be held across mutations of the tree and handed back to
//! [`BinarySearchTree::remove`] or [`BinarySearchTree::get`]. Positions are
//! slot ids, so they survive pool growth; they do not survive removal of the
//! element they name. A stale raw cursor may later point at an unrelated
//! element that reused the slot, and nothing detects that.
//!
//! A [`Cursor`] pairs a raw cursor with a shared borrow of its tree and offers
//! stepping, dereferencing and ordering.
//!
//! Stepping, ends and errors:
//!
//! - `BeforeFirst` + forward step → first element
//! - `AfterLast` + backward step → last element
//! - stepping past either end: `try_*` returns [`TreeError::StepPastEnd`], the
//!   permissive variants leave the cursor where it is
//! - any other failure (unsupported order, out-of-range or vacant position):
//!   `try_*` returns the error, the permissive variants move to `AfterLast`

use std::cmp::Ordering;
use std::fmt;
use std::ptr;

use crate::error::{TreeError, TreeResult, TreeResultExt};
use crate::types::{BinarySearchTree, Direction, NodeId, Position, TraversalOrder, NO_CHILD};

/// Detached cursor: where it points and how it steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawCursor {
    pub(crate) position: Position,
    pub(crate) order: TraversalOrder,
}

impl RawCursor {
    pub const fn new(position: Position, order: TraversalOrder) -> Self {
        Self { position, order }
    }

    /// Forward-end cursor in in-order traversal.
    pub const fn after_last() -> Self {
        Self::new(Position::AfterLast, TraversalOrder::InOrder)
    }

    /// Backward-end cursor in in-order traversal.
    pub const fn before_first() -> Self {
        Self::new(Position::BeforeFirst, TraversalOrder::InOrder)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    /// Returns true at either end.
    pub fn is_end(&self) -> bool {
        self.position.is_end()
    }

    /// Returns true at the end reached by stepping in `direction`.
    pub fn is_end_in(&self, direction: Direction) -> bool {
        self.position.is_end_in(direction)
    }

    pub(crate) fn with_position(self, position: Position) -> Self {
        Self { position, ..self }
    }
}

// ============================================================================
// TREE-SIDE CURSOR OPERATIONS
// ============================================================================

impl<T, C> BinarySearchTree<T, C> {
    /// Reject traversal orders cursors cannot step in.
    pub(crate) fn check_order(order: TraversalOrder) -> TreeResult<()> {
        if order.is_supported() {
            Ok(())
        } else {
            Err(TreeError::UnsupportedTraversal(order))
        }
    }

    /// Check that `id` is in range and occupied.
    pub(crate) fn check_occupied(&self, id: NodeId) -> TreeResult<()> {
        if id as usize >= self.capacity() {
            return Err(TreeError::PositionOutOfRange {
                position: id,
                capacity: self.capacity(),
            });
        }
        if !self.pool.contains(id) {
            return Err(TreeError::VacantPosition(id));
        }
        Ok(())
    }

    /// Returns true if `cursor` is an end or names a slot below the current
    /// capacity. The slot is not required to be occupied.
    pub fn is_valid(&self, cursor: RawCursor) -> bool {
        match cursor.position {
            Position::At(id) => (id as usize) < self.capacity(),
            Position::BeforeFirst | Position::AfterLast => true,
        }
    }

    /// Cursor at the smallest element, or `AfterLast` when empty.
    pub fn try_first(&self, order: TraversalOrder) -> TreeResult<Cursor<'_, T, C>> {
        Self::check_order(order)?;
        let raw = RawCursor::new(Position::from_link(self.first_node()), order);
        Ok(Cursor::attach(self, raw))
    }

    /// Cursor at the largest element, or `BeforeFirst` when empty.
    pub fn try_last(&self, order: TraversalOrder) -> TreeResult<Cursor<'_, T, C>> {
        Self::check_order(order)?;
        let last = self.last_node();
        let position = if last == NO_CHILD {
            Position::BeforeFirst
        } else {
            Position::At(last)
        };
        Ok(Cursor::attach(self, RawCursor::new(position, order)))
    }

    /// Like [`try_first`](Self::try_first); an unsupported order yields an
    /// `AfterLast` cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use pooled_bst::{BinarySearchTree, Direction, TraversalOrder};
    ///
    /// let mut tree = BinarySearchTree::new(4).unwrap();
    /// for value in [2, 1, 3] {
    ///     tree.add(value, TraversalOrder::InOrder);
    /// }
    ///
    /// let mut cursor = tree.first(TraversalOrder::InOrder);
    /// assert_eq!(cursor.get(), Some(&1));
    /// cursor.move_prev();
    /// assert!(cursor.is_end_in(Direction::Backward));
    /// ```
    pub fn first(&self, order: TraversalOrder) -> Cursor<'_, T, C> {
        self.try_first(order).or_else_fallback("first", |_| {
            Cursor::attach(self, RawCursor::new(Position::AfterLast, order))
        })
    }

    /// Like [`try_last`](Self::try_last); an unsupported order yields an
    /// `AfterLast` cursor.
    pub fn last(&self, order: TraversalOrder) -> Cursor<'_, T, C> {
        self.try_last(order).or_else_fallback("last", |_| {
            Cursor::attach(self, RawCursor::new(Position::AfterLast, order))
        })
    }

    /// Attach a raw cursor to this tree after checking its order and range.
    pub fn try_cursor(&self, raw: RawCursor) -> TreeResult<Cursor<'_, T, C>> {
        Self::check_order(raw.order)?;
        if let Position::At(id) = raw.position {
            if id as usize >= self.capacity() {
                return Err(TreeError::PositionOutOfRange {
                    position: id,
                    capacity: self.capacity(),
                });
            }
        }
        Ok(Cursor::attach(self, raw))
    }

    /// Like [`try_cursor`](Self::try_cursor); an invalid cursor snaps to
    /// `AfterLast`.
    pub fn cursor(&self, raw: RawCursor) -> Cursor<'_, T, C> {
        self.try_cursor(raw).or_else_fallback("cursor", |_| {
            Cursor::attach(self, raw.with_position(Position::AfterLast))
        })
    }

    /// One step of `raw` in `direction`.
    pub fn try_step(&self, raw: RawCursor, direction: Direction) -> TreeResult<RawCursor> {
        Self::check_order(raw.order)?;
        let position = match (raw.position, direction) {
            (Position::BeforeFirst, Direction::Forward) => {
                Position::from_link(self.first_node())
            }
            (Position::AfterLast, Direction::Backward) => {
                let last = self.last_node();
                if last == NO_CHILD {
                    Position::BeforeFirst
                } else {
                    Position::At(last)
                }
            }
            (Position::AfterLast, Direction::Forward)
            | (Position::BeforeFirst, Direction::Backward) => {
                return Err(TreeError::StepPastEnd(direction));
            }
            (Position::At(id), Direction::Forward) => {
                self.check_occupied(id)?;
                self.successor_of(id)
                    .map_or(Position::AfterLast, Position::At)
            }
            (Position::At(id), Direction::Backward) => {
                self.check_occupied(id)?;
                self.predecessor_of(id)
                    .map_or(Position::BeforeFirst, Position::At)
            }
        };
        Ok(raw.with_position(position))
    }

    /// Like [`try_step`](Self::try_step), with the permissive fallbacks
    /// described in the module docs.
    pub fn step(&self, raw: RawCursor, direction: Direction) -> RawCursor {
        self.try_step(raw, direction)
            .or_else_fallback("step", |e| match e {
                TreeError::StepPastEnd(_) => raw,
                _ => raw.with_position(Position::AfterLast),
            })
    }

    /// Order two raw cursors of this tree by walking forward from `a`.
    ///
    /// O(n). Returns `None` if either cursor cannot be stepped, i.e. it uses an
    /// unsupported order or names a vacant or out-of-range slot.
    pub fn compare_positions(&self, a: RawCursor, b: RawCursor) -> Option<Ordering> {
        for cursor in [a, b] {
            Self::check_order(cursor.order).ok()?;
            if let Position::At(id) = cursor.position {
                self.check_occupied(id).ok()?;
            }
        }
        if a.position == b.position {
            return Some(Ordering::Equal);
        }
        let mut walker = a;
        loop {
            if walker.position == Position::AfterLast {
                return Some(Ordering::Greater);
            }
            walker = self.try_step(walker, Direction::Forward).ok()?;
            if walker.position == b.position {
                return Some(Ordering::Less);
            }
        }
    }
}

// ============================================================================
// BORROWING CURSOR
// ============================================================================

/// A cursor attached to a tree.
///
/// Two cursors are equal when they belong to the same tree and share position
/// and order. Ordering walks the tree (O(n)) and is undefined (`None`) for
/// cursors of different trees.
pub struct Cursor<'a, T, C> {
    tree: &'a BinarySearchTree<T, C>,
    raw: RawCursor,
}

impl<'a, T, C> Cursor<'a, T, C> {
    pub(crate) fn attach(tree: &'a BinarySearchTree<T, C>, raw: RawCursor) -> Self {
        Self { tree, raw }
    }

    pub fn tree(&self) -> &'a BinarySearchTree<T, C> {
        self.tree
    }

    /// Detach from the tree.
    pub fn raw(&self) -> RawCursor {
        self.raw
    }

    pub fn position(&self) -> Position {
        self.raw.position
    }

    pub fn order(&self) -> TraversalOrder {
        self.raw.order
    }

    pub fn is_end(&self) -> bool {
        self.raw.is_end()
    }

    pub fn is_end_in(&self, direction: Direction) -> bool {
        self.raw.is_end_in(direction)
    }

    /// See [`BinarySearchTree::is_valid`].
    pub fn is_valid(&self) -> bool {
        self.tree.is_valid(self.raw)
    }

    /// The element under the cursor, or `None` at an end or a vacant slot.
    pub fn get(&self) -> Option<&'a T> {
        self.tree.get(self.raw)
    }

    pub fn try_get(&self) -> TreeResult<&'a T> {
        self.tree.try_get(self.raw)
    }

    pub fn try_move_next(&mut self) -> TreeResult<()> {
        self.raw = self.tree.try_step(self.raw, Direction::Forward)?;
        Ok(())
    }

    pub fn try_move_prev(&mut self) -> TreeResult<()> {
        self.raw = self.tree.try_step(self.raw, Direction::Backward)?;
        Ok(())
    }

    /// Step forward; stays put at `AfterLast`.
    pub fn move_next(&mut self) {
        self.raw = self.tree.step(self.raw, Direction::Forward);
    }

    /// Step backward; stays put at `BeforeFirst`.
    pub fn move_prev(&mut self) {
        self.raw = self.tree.step(self.raw, Direction::Backward);
    }

    /// Jump to the smallest element in O(depth).
    pub fn move_first(&mut self) {
        self.raw = self.tree.first(self.raw.order).raw;
    }

    /// Jump to the largest element in O(depth).
    pub fn move_last(&mut self) {
        self.raw = self.tree.last(self.raw.order).raw;
    }
}

impl<T, C> Clone for Cursor<'_, T, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, C> Copy for Cursor<'_, T, C> {}

impl<T, C> fmt::Debug for Cursor<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.raw.position)
            .field("order", &self.raw.order)
            .finish()
    }
}

impl<T, C> PartialEq for Cursor<'_, T, C> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.raw == other.raw
    }
}

impl<T, C> PartialOrd for Cursor<'_, T, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !ptr::eq(self.tree, other.tree) || self.raw.order != other.raw.order {
            return None;
        }
        self.tree.compare_positions(self.raw, other.raw)
    }
}
