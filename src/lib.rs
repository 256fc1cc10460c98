//! Doubly-linked list over generational slot storage.
//!
//! A classic bidirectional list — push/pop at both ends, positional insert
//! and remove, linear search, deep-copy value semantics — built without
//! owning raw pointers. Nodes live in a slab-backed arena with stable slot
//! indices; links between nodes are plain indices with a sentinel for "no
//! neighbor".
//!
//! Positions are [`Cursor`]s: copyable, non-owning handles carrying a slot
//! index plus the slot's generation at creation time. Removing a node bumps
//! its slot's generation, so a dangling cursor is *detected* — reads return
//! `None`, structural operations panic — instead of silently addressing
//! recycled memory.
//!
//! # Quick start
//!
//! ```
//! use slotlist::{Cursor, List};
//!
//! let mut list: List<i32> = List::from([3, 6, 9]);
//! list.push_back(12);
//! list.push_front(1);
//!
//! // Cursors address positions for O(1) edits.
//! let nine = list.find(&9);
//! list.insert(nine, 7); // before 9
//! assert_eq!(list.remove(nine), Ok(9));
//!
//! assert_eq!(list, List::from([1, 3, 6, 7, 12]));
//!
//! // The null cursor is the one-past-the-tail position.
//! assert!(list.find(&99).is_null());
//! assert_eq!(list.prev(Cursor::null()), list.cursor_back());
//! ```
//!
//! # Error model
//!
//! Popping (or removing) from an empty list is the one recoverable error,
//! reported as [`Empty`] with the list left unchanged. Everything else that
//! breaks the cursor contract — a null cursor where a real position is
//! required, a stale cursor in a structural operation — is a checked,
//! fail-fast panic rather than undefined behavior.
//!
//! # Complexity
//!
//! All operations are O(1) except [`List::find`], [`Clone`], and the
//! repeat/sequence constructors, which are O(n). The list is not
//! thread-safe; share it across threads only behind external
//! synchronization.

#![warn(missing_docs)]

mod arena;
pub mod index;
pub mod list;

pub use index::Index;
pub use list::{Cursor, Empty, IntoIter, Iter, IterMut, List};
