//! Doubly-linked list with value semantics and checked cursors.
//!
//! The list owns its nodes through a generational slot arena; callers hold
//! [`Cursor`]s, which are copyable non-owning handles. A cursor to a removed
//! node goes *stale*: reads through it return `None` and structural
//! operations panic, instead of touching freed memory.
//!
//! # Insert position policy
//!
//! [`List::insert`] places the new element **before** the cursor, with two
//! boundary rules kept from the design this container preserves:
//!
//! - at the head (or on an empty list) it behaves as [`List::push_front`];
//! - at the tail it behaves as [`List::push_back`] — i.e. "insert before the
//!   tail" is redefined as "append after the tail". This asymmetry is
//!   deliberate and load-bearing for compatibility; it is asserted by tests
//!   rather than silently corrected.

use std::fmt;
use std::iter::{repeat, repeat_with};

use crate::arena::{Arena, Node};
use crate::Index;

/// Error returned when removing from an empty list.
///
/// This is the only recoverable error the list reports; the failed call
/// leaves the list unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Empty;

impl fmt::Display for Empty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "list is empty")
    }
}

impl std::error::Error for Empty {}

/// A copyable, non-owning handle to a position in a [`List`].
///
/// A cursor either references a node or is *null* — the conceptual
/// one-past-the-tail position. Cursors compare by referenced-node identity
/// (slot and generation), not by element value; all null cursors compare
/// equal.
///
/// Removing the referenced node invalidates the cursor. Invalidation is
/// detected via the slot's generation counter: a stale cursor reads as
/// `None` from [`List::get`] and panics in [`List::insert`]/[`List::remove`],
/// even if the slot has since been reused for another element. (Detection
/// relies on a per-slot `u32` counter; a stale cursor could in principle
/// false-positive only after the same slot is recycled 2^32 times.)
///
/// Cursors are only meaningful for the list that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor<Idx: Index = u32> {
    slot: Idx,
    generation: u32,
}

impl<Idx: Index> Cursor<Idx> {
    /// The null cursor: the position one past the tail.
    ///
    /// [`List::cursor_front`] on an empty list, [`List::find`] on a miss,
    /// and [`List::next`] at the tail all land here.
    #[inline]
    pub const fn null() -> Self {
        Self {
            slot: Idx::NONE,
            generation: 0,
        }
    }

    /// Returns `true` if this is the null cursor.
    #[inline]
    pub fn is_null(self) -> bool {
        self.slot.is_none()
    }
}

impl<Idx: Index> Default for Cursor<Idx> {
    fn default() -> Self {
        Self::null()
    }
}

/// A doubly-linked list over generational slot storage.
///
/// Supports O(1) push/pop at both ends and O(1) insertion/removal at any
/// cursor position. The list exclusively owns its nodes; every node is
/// freed exactly once, at unlink time or when the list is dropped.
///
/// Value semantics: `Clone` deep-copies every element in order, sharing no
/// storage with the source. Rust moves transfer the whole list in O(1); use
/// [`std::mem::take`] for a move that leaves the source empty, or
/// [`std::mem::swap`] for allocation-free reassignment.
///
/// # Example
///
/// ```
/// use slotlist::List;
///
/// let mut list: List<i32> = List::from([1, 2, 3]);
/// list.push_back(4);
///
/// let two = list.find(&2);
/// assert_eq!(list.remove(two), Ok(2));
///
/// let values: Vec<i32> = list.iter().copied().collect();
/// assert_eq!(values, [1, 3, 4]);
/// ```
///
/// `Idx` is the link index type (default `u32`); smaller types shrink nodes
/// at the cost of addressable length.
pub struct List<T, Idx: Index = u32> {
    arena: Arena<T, Idx>,
    head: Idx,
    tail: Idx,
    len: usize,
}

impl<T, Idx: Index> List<T, Idx> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: Idx::NONE,
            tail: Idx::NONE,
            len: 0,
        }
    }

    /// Creates a list of `count` copies of `value`.
    pub fn from_elem(value: T, count: usize) -> Self
    where
        T: Clone,
    {
        repeat(value).take(count).collect()
    }

    /// Creates a list of `count` default-constructed elements.
    pub fn from_default(count: usize) -> Self
    where
        T: Default,
    {
        repeat_with(T::default).take(count).collect()
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // ========================================================================
    // Push / pop
    // ========================================================================

    /// Appends `value` after the tail, returning a cursor to the new node.
    /// O(1).
    pub fn push_back(&mut self, value: T) -> Cursor<Idx> {
        let idx = self.arena.insert(Node {
            value,
            prev: self.tail,
            next: Idx::NONE,
        });

        if self.tail.is_some() {
            self.arena[self.tail].next = idx;
        } else {
            self.head = idx;
        }

        self.tail = idx;
        self.len += 1;
        self.cursor_at(idx)
    }

    /// Prepends `value` before the head, returning a cursor to the new node.
    /// O(1).
    pub fn push_front(&mut self, value: T) -> Cursor<Idx> {
        let idx = self.arena.insert(Node {
            value,
            prev: Idx::NONE,
            next: self.head,
        });

        if self.head.is_some() {
            self.arena[self.head].prev = idx;
        } else {
            self.tail = idx;
        }

        self.head = idx;
        self.len += 1;
        self.cursor_at(idx)
    }

    /// Removes and returns the back element. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Empty`] if the list has no elements; the list is unchanged.
    pub fn pop_back(&mut self) -> Result<T, Empty> {
        if self.tail.is_none() {
            return Err(Empty);
        }

        let node = self
            .arena
            .remove(self.tail)
            .expect("list invariant: tail slot is occupied");

        self.tail = node.prev;
        if self.tail.is_some() {
            self.arena[self.tail].next = Idx::NONE;
        } else {
            self.head = Idx::NONE;
        }

        self.len -= 1;
        Ok(node.value)
    }

    /// Removes and returns the front element. O(1).
    ///
    /// For lists of one element (or none) this takes the same path as
    /// [`List::pop_back`], so popping the sole element clears head and tail
    /// together.
    ///
    /// # Errors
    ///
    /// Returns [`Empty`] if the list has no elements; the list is unchanged.
    pub fn pop_front(&mut self) -> Result<T, Empty> {
        if self.len <= 1 {
            return self.pop_back();
        }

        let node = self
            .arena
            .remove(self.head)
            .expect("list invariant: head slot is occupied");

        self.head = node.next;
        self.arena[self.head].prev = Idx::NONE;

        self.len -= 1;
        Ok(node.value)
    }

    // ========================================================================
    // Positional insert / remove
    // ========================================================================

    /// Inserts `value` before the node `at` references, returning a cursor
    /// to the new node. O(1).
    ///
    /// Boundary policy (see the module docs): on an empty list, or when `at`
    /// references the head, this behaves as [`List::push_front`]; when `at`
    /// references the tail it behaves as [`List::push_back`] — the element
    /// lands **after** the tail, not before it.
    ///
    /// # Panics
    ///
    /// Panics if `at` is the null cursor while the list is non-empty, or if
    /// `at` is stale.
    pub fn insert(&mut self, at: Cursor<Idx>, value: T) -> Cursor<Idx> {
        if self.is_empty() {
            return self.push_front(value);
        }

        let Some(slot) = self.checked_slot(at) else {
            panic!("null cursor does not reference a node in a non-empty list");
        };

        if slot == self.head {
            return self.push_front(value);
        }
        // Kept quirk: inserting at the tail appends after it.
        if slot == self.tail {
            return self.push_back(value);
        }

        let prev = self.arena[slot].prev;
        let idx = self.arena.insert(Node {
            value,
            prev,
            next: slot,
        });
        self.arena[prev].next = idx;
        self.arena[slot].prev = idx;

        self.len += 1;
        self.cursor_at(idx)
    }

    /// Removes the node `at` references, returning its value. O(1).
    ///
    /// When `at` references the head (or the list is empty) this behaves as
    /// [`List::pop_front`]; when it references the tail, as
    /// [`List::pop_back`].
    ///
    /// # Errors
    ///
    /// Returns [`Empty`] if the list has no elements.
    ///
    /// # Panics
    ///
    /// Panics if `at` is the null cursor while the list is non-empty, or if
    /// `at` is stale.
    pub fn remove(&mut self, at: Cursor<Idx>) -> Result<T, Empty> {
        if self.is_empty() {
            return self.pop_front();
        }

        let Some(slot) = self.checked_slot(at) else {
            panic!("null cursor does not reference a node in a non-empty list");
        };

        if slot == self.head {
            return self.pop_front();
        }
        if slot == self.tail {
            return self.pop_back();
        }

        let node = self
            .arena
            .remove(slot)
            .expect("live cursor references an occupied slot");
        self.arena[node.prev].next = node.next;
        self.arena[node.next].prev = node.prev;

        self.len -= 1;
        Ok(node.value)
    }

    /// Removes all elements.
    ///
    /// Outstanding cursors go stale.
    pub fn clear(&mut self) {
        while self.pop_back().is_ok() {}
    }

    // ========================================================================
    // Element access
    // ========================================================================

    /// Returns a reference to the front element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.head.is_none() {
            None
        } else {
            Some(&self.arena[self.head].value)
        }
    }

    /// Returns a mutable reference to the front element.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.head.is_none() {
            None
        } else {
            Some(&mut self.arena[self.head].value)
        }
    }

    /// Returns a reference to the back element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.tail.is_none() {
            None
        } else {
            Some(&self.arena[self.tail].value)
        }
    }

    /// Returns a mutable reference to the back element.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.tail.is_none() {
            None
        } else {
            Some(&mut self.arena[self.tail].value)
        }
    }

    /// Returns a reference to the element `at` references.
    ///
    /// Returns `None` for the null cursor and for stale cursors.
    pub fn get(&self, at: Cursor<Idx>) -> Option<&T> {
        let node = self.arena.get(at.slot)?;
        if self.arena.generation(at.slot) != at.generation {
            return None;
        }
        Some(&node.value)
    }

    /// Returns a mutable reference to the element `at` references.
    ///
    /// Returns `None` for the null cursor and for stale cursors.
    pub fn get_mut(&mut self, at: Cursor<Idx>) -> Option<&mut T> {
        if self.arena.generation(at.slot) != at.generation {
            return None;
        }
        self.arena.get_mut(at.slot).map(|node| &mut node.value)
    }

    // ========================================================================
    // Cursors
    // ========================================================================

    /// Returns a cursor to the head, or the null cursor if the list is
    /// empty.
    #[inline]
    pub fn cursor_front(&self) -> Cursor<Idx> {
        self.cursor_or_null(self.head)
    }

    /// Returns a cursor to the tail, or the null cursor if the list is
    /// empty.
    #[inline]
    pub fn cursor_back(&self) -> Cursor<Idx> {
        self.cursor_or_null(self.tail)
    }

    /// Returns a cursor to the successor of `at`.
    ///
    /// Yields the null cursor past the tail; the null cursor stays null.
    ///
    /// # Panics
    ///
    /// Panics if `at` is stale.
    pub fn next(&self, at: Cursor<Idx>) -> Cursor<Idx> {
        match self.checked_slot(at) {
            Some(slot) => self.cursor_or_null(self.arena[slot].next),
            None => Cursor::null(),
        }
    }

    /// Returns a cursor to the predecessor of `at`.
    ///
    /// Stepping back from the null cursor yields the tail (so
    /// `prev(null)` addresses the last element); stepping back from the
    /// head yields the null cursor.
    ///
    /// # Panics
    ///
    /// Panics if `at` is stale.
    pub fn prev(&self, at: Cursor<Idx>) -> Cursor<Idx> {
        match self.checked_slot(at) {
            Some(slot) => self.cursor_or_null(self.arena[slot].prev),
            None => self.cursor_back(),
        }
    }

    /// Returns a cursor to the first element equal to `value`, scanning
    /// front to back, or the null cursor if absent. O(n).
    pub fn find(&self, value: &T) -> Cursor<Idx>
    where
        T: PartialEq,
    {
        let mut idx = self.head;
        while idx.is_some() {
            let node = &self.arena[idx];
            if node.value == *value {
                return self.cursor_at(idx);
            }
            idx = node.next;
        }
        Cursor::null()
    }

    /// Returns `true` if some element equals `value`. O(n).
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        !self.find(value).is_null()
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over references to elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, Idx> {
        Iter {
            arena: &self.arena,
            front: self.head,
            back: self.tail,
        }
    }

    /// Returns an iterator over mutable references to elements, front to
    /// back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, Idx> {
        IterMut {
            arena: &mut self.arena,
            front: self.head,
            back: self.tail,
        }
    }

    // ========================================================================
    // Internal
    // ========================================================================

    #[inline]
    fn cursor_at(&self, idx: Idx) -> Cursor<Idx> {
        Cursor {
            slot: idx,
            generation: self.arena.generation(idx),
        }
    }

    #[inline]
    fn cursor_or_null(&self, idx: Idx) -> Cursor<Idx> {
        if idx.is_none() {
            Cursor::null()
        } else {
            self.cursor_at(idx)
        }
    }

    /// Resolves a cursor to its slot; `None` for the null cursor.
    ///
    /// Panics if the cursor is stale (its node was removed), so misuse
    /// fails fast instead of addressing a recycled slot.
    fn checked_slot(&self, at: Cursor<Idx>) -> Option<Idx> {
        if at.slot.is_none() {
            return None;
        }
        let live = self.arena.get(at.slot).is_some()
            && self.arena.generation(at.slot) == at.generation;
        assert!(live, "stale cursor: its node was removed from the list");
        Some(at.slot)
    }
}

// =============================================================================
// Value-semantics trait impls
// =============================================================================

impl<T, Idx: Index> Default for List<T, Idx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, Idx: Index> Clone for List<T, Idx> {
    /// Deep-copies every element in order; the copy shares no storage with
    /// the source.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug, Idx: Index> fmt::Debug for List<T, Idx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, Idx: Index> PartialEq for List<T, Idx> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, Idx: Index> Eq for List<T, Idx> {}

impl<T, Idx: Index> FromIterator<T> for List<T, Idx> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, Idx: Index> Extend<T> for List<T, Idx> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T, Idx: Index, const N: usize> From<[T; N]> for List<T, Idx> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to list elements.
pub struct Iter<'a, T, Idx: Index> {
    arena: &'a Arena<T, Idx>,
    front: Idx,
    back: Idx,
}

impl<'a, T, Idx: Index> Iterator for Iter<'a, T, Idx> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front.is_none() {
            return None;
        }

        let node = &self.arena[self.front];

        // Front and back meet in the middle.
        if self.front == self.back {
            self.front = Idx::NONE;
            self.back = Idx::NONE;
        } else {
            self.front = node.next;
        }

        Some(&node.value)
    }
}

impl<'a, T, Idx: Index> DoubleEndedIterator for Iter<'a, T, Idx> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.back.is_none() {
            return None;
        }

        let node = &self.arena[self.back];

        if self.front == self.back {
            self.front = Idx::NONE;
            self.back = Idx::NONE;
        } else {
            self.back = node.prev;
        }

        Some(&node.value)
    }
}

/// Iterator over mutable references to list elements.
pub struct IterMut<'a, T, Idx: Index> {
    arena: &'a mut Arena<T, Idx>,
    front: Idx,
    back: Idx,
}

impl<'a, T, Idx: Index> Iterator for IterMut<'a, T, Idx> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front.is_none() {
            return None;
        }

        let node: *mut Node<T, Idx> = &mut self.arena[self.front];
        // Each slot is yielded at most once, so the mutable borrows handed
        // out are disjoint and may outlive this borrow of the arena.
        let node = unsafe { &mut *node };

        if self.front == self.back {
            self.front = Idx::NONE;
            self.back = Idx::NONE;
        } else {
            self.front = node.next;
        }

        Some(&mut node.value)
    }
}

impl<'a, T, Idx: Index> DoubleEndedIterator for IterMut<'a, T, Idx> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.back.is_none() {
            return None;
        }

        let node: *mut Node<T, Idx> = &mut self.arena[self.back];
        // Same disjointness argument as in `next`.
        let node = unsafe { &mut *node };

        if self.front == self.back {
            self.front = Idx::NONE;
            self.back = Idx::NONE;
        } else {
            self.back = node.prev;
        }

        Some(&mut node.value)
    }
}

/// Owning iterator that drains a list front to back.
pub struct IntoIter<T, Idx: Index = u32> {
    list: List<T, Idx>,
}

impl<T, Idx: Index> Iterator for IntoIter<T, Idx> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T, Idx: Index> DoubleEndedIterator for IntoIter<T, Idx> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back().ok()
    }
}

impl<T, Idx: Index> IntoIterator for List<T, Idx> {
    type Item = T;
    type IntoIter = IntoIter<T, Idx>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T, Idx: Index> IntoIterator for &'a List<T, Idx> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, Idx>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, Idx: Index> IntoIterator for &'a mut List<T, Idx> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, Idx>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
