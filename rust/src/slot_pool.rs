//! Fixed-capacity slot pool with a free list.
//!
//! A slot keeps its id for as long as it is occupied, across any number of
//! reallocations. Freed ids are reused by later allocations.

use std::convert::TryFrom;

use crate::types::NodeId;

/// Statistics for a slot pool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotPoolStats {
    pub total_capacity: usize,
    pub allocated_count: usize,
    pub free_count: usize,
    pub utilization: f64,
}

/// Pool of `capacity` slots addressed by [`NodeId`].
#[derive(Debug, Clone)]
pub struct SlotPool<R> {
    /// One entry per slot; `None` marks a free slot
    slots: Vec<Option<R>>,
    /// Free slot ids, popped from the back
    free_list: Vec<NodeId>,
    /// Number of occupied slots
    len: usize,
}

impl<R> SlotPool<R> {
    /// Create a pool with `capacity` free slots.
    ///
    /// The caller keeps `capacity` within `NodeId` range.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut pool = Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            len: 0,
        };
        pool.reallocate(capacity);
        pool
    }

    /// Place `item` in a free slot and return its id, or hand the item back
    /// when every slot is occupied.
    #[inline]
    pub fn allocate(&mut self, item: R) -> Result<NodeId, R> {
        let Some(id) = self.free_list.pop() else {
            return Err(item);
        };
        self.slots[id as usize] = Some(item);
        self.len += 1;
        Ok(id)
    }

    /// Free a slot and return what it held.
    #[inline]
    pub fn deallocate(&mut self, id: NodeId) -> Option<R> {
        let item = self.slots.get_mut(usize::try_from(id).ok()?)?.take()?;
        self.free_list.push(id);
        self.len -= 1;
        Some(item)
    }

    /// Get a reference to an occupied slot
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&R> {
        self.slots.get(usize::try_from(id).ok()?)?.as_ref()
    }

    /// Get a mutable reference to an occupied slot
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut R> {
        self.slots.get_mut(usize::try_from(id).ok()?)?.as_mut()
    }

    /// Check if an id names an occupied slot
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Grow to `new_capacity` slots. Occupied slots keep their ids; shrinking
    /// is not supported and smaller requests are ignored.
    pub fn reallocate(&mut self, new_capacity: usize) {
        let old_capacity = self.slots.len();
        if new_capacity <= old_capacity {
            return;
        }

        self.slots.resize_with(new_capacity, || None);
        // Reversed so the lowest new id is handed out first.
        self.free_list.extend(
            (old_capacity..new_capacity)
                .rev()
                .filter_map(|index| NodeId::try_from(index).ok()),
        );
    }

    /// Copy every slot into `other`, which ends up with the same occupied ids.
    /// Slots of `other` beyond this pool's capacity become free.
    ///
    /// `other` is grown first if it is smaller.
    pub fn copy_to(&self, other: &mut SlotPool<R>)
    where
        R: Copy,
    {
        other.reallocate(self.capacity());
        other.slots[..self.slots.len()].copy_from_slice(&self.slots);
        for slot in &mut other.slots[self.slots.len()..] {
            *slot = None;
        }
        other.rebuild_free_list();
    }

    /// Iterate over occupied slots in id order
    pub fn occupied(&self) -> impl Iterator<Item = (NodeId, &R)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            let item = slot.as_ref()?;
            Some((NodeId::try_from(index).ok()?, item))
        })
    }

    /// Get the number of occupied slots
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if no slot is occupied
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if every slot is occupied
    pub fn is_full(&self) -> bool {
        self.free_list.is_empty()
    }

    /// Get the total number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Get the number of free slots
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Get pool statistics
    pub fn stats(&self) -> SlotPoolStats {
        let total_capacity = self.capacity();
        let utilization = if total_capacity > 0 {
            self.len as f64 / total_capacity as f64
        } else {
            0.0
        };

        SlotPoolStats {
            total_capacity,
            allocated_count: self.len,
            free_count: self.free_count(),
            utilization,
        }
    }

    fn rebuild_free_list(&mut self) {
        self.free_list.clear();
        self.free_list.extend(
            self.slots
                .iter()
                .enumerate()
                .rev()
                .filter(|(_, slot)| slot.is_none())
                .filter_map(|(index, _)| NodeId::try_from(index).ok()),
        );
        self.len = self.slots.len() - self.free_list.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_pool_basic_operations() {
        let mut pool = SlotPool::with_capacity(3);

        let id1 = pool.allocate(42).unwrap();
        let id2 = pool.allocate(84).unwrap();
        let id3 = pool.allocate(126).unwrap();
        assert_eq!((id1, id2, id3), (0, 1, 2));

        assert_eq!(pool.get(id1), Some(&42));
        assert_eq!(pool.get(id2), Some(&84));
        assert_eq!(pool.get(id3), Some(&126));
        assert!(pool.contains(id2));
        assert!(!pool.contains(7));

        assert!(pool.is_full());
        assert_eq!(pool.allocate(168), Err(168));

        let stats = pool.stats();
        assert_eq!(stats.allocated_count, 3);
        assert_eq!(stats.free_count, 0);
        assert_eq!(stats.utilization, 1.0);
    }

    #[test]
    fn test_freed_slot_is_reused() {
        let mut pool = SlotPool::with_capacity(2);
        let id1 = pool.allocate('a').unwrap();
        let id2 = pool.allocate('b').unwrap();

        assert_eq!(pool.deallocate(id1), Some('a'));
        assert_eq!(pool.deallocate(id1), None);
        assert!(!pool.contains(id1));
        assert!(pool.contains(id2));

        assert_eq!(pool.allocate('c'), Ok(id1));
        assert_eq!(pool.get(id1), Some(&'c'));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_reallocate_preserves_ids() {
        let mut pool = SlotPool::with_capacity(2);
        let a = pool.allocate("a").unwrap();
        let b = pool.allocate("b").unwrap();

        pool.reallocate(5);
        assert_eq!(pool.capacity(), 5);
        assert_eq!(pool.get(a), Some(&"a"));
        assert_eq!(pool.get(b), Some(&"b"));
        assert_eq!(pool.allocate("c"), Ok(2));

        pool.reallocate(1);
        assert_eq!(pool.capacity(), 5);
    }

    #[test]
    fn test_copy_to_matches_ids() {
        let mut source = SlotPool::with_capacity(3);
        source.allocate(1u8).unwrap();
        let hole = source.allocate(2u8).unwrap();
        source.allocate(3u8).unwrap();
        source.deallocate(hole);

        let mut small = SlotPool::with_capacity(1);
        small.allocate(9u8).unwrap();
        source.copy_to(&mut small);
        assert_eq!(small.capacity(), 3);
        assert_eq!(small.len(), 2);
        assert_eq!(small.occupied().map(|(id, v)| (id, *v)).collect::<Vec<_>>(), [(0, 1), (2, 3)]);
        assert_eq!(small.allocate(5u8), Ok(hole));

        let mut large = SlotPool::with_capacity(6);
        for value in 0..6u8 {
            large.allocate(value).unwrap();
        }
        source.copy_to(&mut large);
        assert_eq!(large.capacity(), 6);
        assert_eq!(large.len(), 2);
        assert_eq!(large.free_count(), 4);
        assert_eq!(large.allocate(7u8), Ok(hole));
    }
}
