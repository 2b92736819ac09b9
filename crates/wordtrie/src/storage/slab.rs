//! Freelist arena for trie nodes.
//!
//! Nodes live in one contiguous `Vec` and refer to each other by
//! [`NodeIndex`]. Removed slots are threaded onto a freelist and reused by
//! later inserts, so handles stay stable for as long as a node is alive.

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use super::index_types::NodeIndex;

/// A slab slot.
#[derive(Clone)]
enum Slot<T> {
    /// Free; stores the index of the next free slot.
    Vacant(usize),
    Occupied(T),
}

/// Arena of `T` values addressed by [`NodeIndex`].
pub struct NodeSlab<T> {
    slots: Vec<Slot<T>>,
    /// Occupied slot count.
    len: usize,
    /// Head of the freelist; equals `slots.len()` when the freelist is empty.
    next: usize,
}

impl<T> Default for NodeSlab<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodeSlab<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
            next: 0,
        }
    }

    /// Inserts a value, returning its stable index.
    pub fn insert(&mut self, value: T) -> NodeIndex {
        let key = self.next;
        if key == self.slots.len() {
            self.slots.push(Slot::Occupied(value));
            self.next = self.slots.len();
        } else {
            let next_free = match self.slots[key] {
                Slot::Vacant(next) => next,
                Slot::Occupied(_) => unreachable!("freelist head points at an occupied slot"),
            };
            self.slots[key] = Slot::Occupied(value);
            self.next = next_free;
        }
        self.len += 1;
        NodeIndex::new(key)
    }

    pub fn get(&self, index: NodeIndex) -> Option<&T> {
        match self.slots.get(index.get()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut T> {
        match self.slots.get_mut(index.get()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Removes the value at `index` if it exists, returning it.
    pub fn try_remove(&mut self, index: NodeIndex) -> Option<T> {
        let key = index.get();
        let slot = self.slots.get_mut(key)?;
        if matches!(slot, Slot::Vacant(_)) {
            return None;
        }
        match mem::replace(slot, Slot::Vacant(self.next)) {
            Slot::Occupied(value) => {
                self.len -= 1;
                self.next = key;
                Some(value)
            }
            Slot::Vacant(_) => None,
        }
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns an iterator over occupied entries.
    pub fn iter(&self) -> NodeSlabIter<'_, T> {
        NodeSlabIter {
            slots: self.slots.iter().enumerate(),
        }
    }
}

impl<T> Index<NodeIndex> for NodeSlab<T> {
    type Output = T;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        self.get(index).expect("invalid node index")
    }
}

impl<T> IndexMut<NodeIndex> for NodeSlab<T> {
    fn index_mut(&mut self, index: NodeIndex) -> &mut Self::Output {
        self.get_mut(index).expect("invalid node index")
    }
}

impl<T> fmt::Debug for NodeSlab<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeSlab")
            .field("len", &self.len)
            .field("next", &self.next)
            .field("slots", &self.slots.len())
            .finish()
    }
}

/// Iterator over occupied entries in a NodeSlab.
pub struct NodeSlabIter<'a, T> {
    slots: std::iter::Enumerate<std::slice::Iter<'a, Slot<T>>>,
}

impl<'a, T> Iterator for NodeSlabIter<'a, T> {
    type Item = (NodeIndex, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().find_map(|(idx, slot)| match slot {
            Slot::Occupied(value) => Some((NodeIndex::new(idx), value)),
            Slot::Vacant(_) => None,
        })
    }
}
