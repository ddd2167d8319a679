//! Link-walking helpers shared by cursors, removal and validation.
//!
//! In-order successor and predecessor are computed from parent and child links
//! alone, without a stack. The two directions are mirror images, so both are
//! generated from one template with the child sides swapped.

use paste::paste;

use crate::types::{BinarySearchTree, NodeId, NodeLinks, NO_CHILD};

impl<T, C> BinarySearchTree<T, C> {
    /// Links of an occupied slot.
    ///
    /// Callers only pass ids read from the tree's own links or checked cursor
    /// positions. A vacant id yields detached links.
    #[inline]
    pub(crate) fn links(&self, id: NodeId) -> NodeLinks {
        debug_assert!(self.pool.contains(id), "slot {} is not occupied", id);
        self.pool
            .get(id)
            .map_or(NodeLinks::DETACHED, |entry| entry.links)
    }

    #[inline]
    pub(crate) fn links_mut(&mut self, id: NodeId) -> Option<&mut NodeLinks> {
        self.pool.get_mut(id).map(|entry| &mut entry.links)
    }

    /// Id of the smallest element, or `NO_CHILD` when empty.
    pub(crate) fn first_node(&self) -> NodeId {
        if self.root == NO_CHILD {
            NO_CHILD
        } else {
            self.leftmost_from(self.root)
        }
    }

    /// Id of the largest element, or `NO_CHILD` when empty.
    pub(crate) fn last_node(&self) -> NodeId {
        if self.root == NO_CHILD {
            NO_CHILD
        } else {
            self.rightmost_from(self.root)
        }
    }
}

macro_rules! mirrored_walks {
    ($($step:ident: $toward:ident / $away:ident;)+) => {
        paste! {
            impl<T, C> BinarySearchTree<T, C> {
                $(
                    #[doc = concat!(
                        "Follows `", stringify!($toward),
                        "` links from `id` until a node has none; returns that node."
                    )]
                    #[inline]
                    pub(crate) fn [<$toward most_from>](&self, mut id: NodeId) -> NodeId {
                        loop {
                            let next = self.links(id).$toward;
                            if next == NO_CHILD {
                                return id;
                            }
                            id = next;
                        }
                    }

                    #[doc = concat!(
                        "In-order ", stringify!($step), " of `id`, or `None` at the end."
                    )]
                    pub(crate) fn [<$step _of>](&self, id: NodeId) -> Option<NodeId> {
                        let links = self.links(id);
                        if links.$away != NO_CHILD {
                            return Some(self.[<$toward most_from>](links.$away));
                        }

                        // Climb out of subtrees already visited; the first ancestor
                        // reached from its other side comes next.
                        let mut current = id;
                        let mut parent = links.parent;
                        while parent != NO_CHILD {
                            let parent_links = self.links(parent);
                            if parent_links.$away != current {
                                return Some(parent);
                            }
                            current = parent;
                            parent = parent_links.parent;
                        }
                        None
                    }
                )+
            }
        }
    };
}

mirrored_walks! {
    successor: left / right;
    predecessor: right / left;
}
