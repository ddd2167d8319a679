//! Validation and structural comparison for BinarySearchTree.
//!
//! This module contains invariant checking over the node table and the
//! shape-aware equality of two trees.

use std::cmp::Ordering;

use crate::compare::Comparator;
use crate::error::{TreeError, TreeResult};
use crate::types::{BinarySearchTree, NodeId, NO_CHILD};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<T, C: Comparator<T>> BinarySearchTree<T, C> {
    /// Check if the tree maintains its invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    ///
    /// Verifies the root, parent/child back-references of every occupied slot,
    /// that every occupied slot is reachable exactly once from the root, the
    /// ordering of every node against all of its ancestors, and that an
    /// in-order walk visits `len()` elements.
    pub fn check_invariants_detailed(&self) -> TreeResult<()> {
        self.check_root()?;
        self.check_links()?;
        self.check_order_and_reachability()?;
        self.check_traversal_count()
    }

    fn check_root(&self) -> TreeResult<()> {
        match (self.root == NO_CHILD, self.pool.is_empty()) {
            (true, true) => Ok(()),
            (true, false) => Err(TreeError::corrupted_tree(
                "Root",
                &format!("no root but {} occupied slots", self.len()),
            )),
            (false, true) => Err(TreeError::corrupted_tree(
                "Root",
                &format!("root {} set on an empty pool", self.root),
            )),
            (false, false) => match self.pool.get(self.root) {
                None => Err(TreeError::corrupted_tree(
                    "Root",
                    &format!("root {} is vacant", self.root),
                )),
                Some(entry) if entry.links.parent != NO_CHILD => Err(TreeError::corrupted_tree(
                    "Root",
                    &format!("root {} has parent {}", self.root, entry.links.parent),
                )),
                Some(_) => Ok(()),
            },
        }
    }

    fn check_links(&self) -> TreeResult<()> {
        for (id, entry) in self.pool.occupied() {
            let links = entry.links;
            for child in [links.left, links.right] {
                if child == NO_CHILD {
                    continue;
                }
                match self.pool.get(child) {
                    None => {
                        return Err(TreeError::corrupted_tree(
                            "Links",
                            &format!("node {} links to vacant child {}", id, child),
                        ))
                    }
                    Some(child_entry) if child_entry.links.parent != id => {
                        return Err(TreeError::corrupted_tree(
                            "Links",
                            &format!(
                                "child {} of node {} names parent {}",
                                child, id, child_entry.links.parent
                            ),
                        ))
                    }
                    Some(_) => {}
                }
            }

            if links.parent != NO_CHILD {
                let adopted = self
                    .pool
                    .get(links.parent)
                    .is_some_and(|parent| parent.links.left == id || parent.links.right == id);
                if !adopted {
                    return Err(TreeError::corrupted_tree(
                        "Links",
                        &format!("parent {} does not link back to node {}", links.parent, id),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Depth-first walk carrying the nearest ancestors the node must lie
    /// between.
    fn check_order_and_reachability(&self) -> TreeResult<()> {
        let mut visited = vec![false; self.capacity()];
        let mut reached = 0;
        let mut pending: Vec<(NodeId, Option<NodeId>, Option<NodeId>)> = Vec::new();
        if self.root != NO_CHILD {
            pending.push((self.root, None, None));
        }

        while let Some((id, lower, upper)) = pending.pop() {
            let seen = visited.get_mut(id as usize).ok_or_else(|| {
                TreeError::corrupted_tree("Reachability", &format!("node {} out of range", id))
            })?;
            if *seen {
                return Err(TreeError::corrupted_tree(
                    "Reachability",
                    &format!("node {} reached twice", id),
                ));
            }
            *seen = true;
            reached += 1;

            let Some(entry) = self.pool.get(id) else {
                return Err(TreeError::corrupted_tree(
                    "Reachability",
                    &format!("node {} is vacant", id),
                ));
            };
            for (bound, expected) in [(lower, Ordering::Greater), (upper, Ordering::Less)] {
                let Some(bound) = bound.and_then(|b| self.pool.get(b).map(|e| (b, e))) else {
                    continue;
                };
                if C::compare(&entry.value, &bound.1.value) != expected {
                    return Err(TreeError::corrupted_tree(
                        "Ordering",
                        &format!("node {} is out of order with ancestor {}", id, bound.0),
                    ));
                }
            }

            let links = entry.links;
            if links.left != NO_CHILD {
                pending.push((links.left, lower, Some(id)));
            }
            if links.right != NO_CHILD {
                pending.push((links.right, Some(id), upper));
            }
        }

        if reached != self.len() {
            return Err(TreeError::corrupted_tree(
                "Reachability",
                &format!("{} nodes reachable but {} occupied", reached, self.len()),
            ));
        }
        Ok(())
    }

    fn check_traversal_count(&self) -> TreeResult<()> {
        // Bounded so a link cycle cannot loop forever.
        let mut visited = 0;
        let mut current = self.first_node();
        while current != NO_CHILD && visited <= self.capacity() {
            visited += 1;
            current = self.successor_of(current).unwrap_or(NO_CHILD);
        }
        if visited != self.len() {
            return Err(TreeError::corrupted_tree(
                "Traversal",
                &format!("visited {} elements but tree has {}", visited, self.len()),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// STRUCTURAL EQUALITY
// ============================================================================

/// Trees are equal when they hold equal elements in the same in-order
/// sequence and every pair of visited nodes has the same link presence
/// (parent, left child, right child). Physical positions may differ.
impl<T: PartialEq, C> PartialEq for BinarySearchTree<T, C> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let mut left = self.first_node();
        let mut right = other.first_node();
        while left != NO_CHILD && right != NO_CHILD {
            let (Some(a), Some(b)) = (self.pool.get(left), other.pool.get(right)) else {
                return false;
            };
            if a.value != b.value || a.links.shape() != b.links.shape() {
                return false;
            }
            left = self.successor_of(left).unwrap_or(NO_CHILD);
            right = other.successor_of(right).unwrap_or(NO_CHILD);
        }
        left == right
    }
}
