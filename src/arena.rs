//! Generational slot storage for list nodes.
//!
//! Nodes live in a [`slab::Slab`] rather than behind raw owning pointers:
//! the slab hands out stable `usize` keys, reuses freed slots, and drops
//! every live node exactly once when the arena is dropped. On top of that
//! this module tracks one generation counter per slot, bumped on removal,
//! so a handle to a removed node can be recognized as stale even after its
//! slot has been reused.

use std::ops;

use slab::Slab;

use crate::Index;

/// A single list node: one element plus links to its neighbors.
///
/// Links are slot indices; `Idx::NONE` marks a missing neighbor (head's
/// `prev`, tail's `next`).
#[derive(Debug)]
pub(crate) struct Node<T, Idx: Index> {
    pub(crate) value: T,
    pub(crate) prev: Idx,
    pub(crate) next: Idx,
}

/// Slot storage with stable indices and per-slot generations.
///
/// Owned by exactly one list; nothing else can free or outlive its nodes.
pub(crate) struct Arena<T, Idx: Index> {
    slots: Slab<Node<T, Idx>>,
    /// One entry per slot ever allocated, bumped each time the slot is freed.
    /// Never shrinks, so stale handles stay detectable across slot reuse.
    generations: Vec<u32>,
}

impl<T, Idx: Index> Arena<T, Idx> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Slab::new(),
            generations: Vec::new(),
        }
    }

    /// Inserts a node, returning its stable slot index.
    ///
    /// # Panics
    ///
    /// Panics if the slab grows past what `Idx` can address (the sentinel
    /// value is reserved and never handed out).
    pub(crate) fn insert(&mut self, node: Node<T, Idx>) -> Idx {
        let key = self.slots.insert(node);
        assert!(
            key < Idx::NONE.as_usize(),
            "slot index overflows the link index type"
        );
        if key >= self.generations.len() {
            self.generations.resize(key + 1, 0);
        }
        Idx::from_usize(key)
    }

    /// Removes the node at `idx`, bumping the slot's generation so
    /// outstanding handles to it go stale.
    pub(crate) fn remove(&mut self, idx: Idx) -> Option<Node<T, Idx>> {
        let node = self.slots.try_remove(idx.as_usize())?;
        let generation = &mut self.generations[idx.as_usize()];
        *generation = generation.wrapping_add(1);
        Some(node)
    }

    pub(crate) fn get(&self, idx: Idx) -> Option<&Node<T, Idx>> {
        self.slots.get(idx.as_usize())
    }

    pub(crate) fn get_mut(&mut self, idx: Idx) -> Option<&mut Node<T, Idx>> {
        self.slots.get_mut(idx.as_usize())
    }

    /// Returns the current generation of `idx` (0 for never-used slots).
    pub(crate) fn generation(&self, idx: Idx) -> u32 {
        self.generations.get(idx.as_usize()).copied().unwrap_or(0)
    }
}

impl<T, Idx: Index> ops::Index<Idx> for Arena<T, Idx> {
    type Output = Node<T, Idx>;

    /// Invariant-backed access for indices the list itself maintains.
    ///
    /// Panics on a vacant slot, which would mean a broken link invariant.
    #[inline]
    fn index(&self, idx: Idx) -> &Node<T, Idx> {
        &self.slots[idx.as_usize()]
    }
}

impl<T, Idx: Index> ops::IndexMut<Idx> for Arena<T, Idx> {
    #[inline]
    fn index_mut(&mut self, idx: Idx) -> &mut Node<T, Idx> {
        &mut self.slots[idx.as_usize()]
    }
}
