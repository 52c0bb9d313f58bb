//! # Index Arena
//!
//! Type-safe arena allocation with index-based references. Linked structures
//! store an `Option<ArenaId<Node>>` as their "next" link instead of an owning
//! pointer, so the whole structure is released by dropping (or clearing) the
//! arena in one step.
//!
//! ## Fallible allocation
//!
//! `Box::new` aborts the process when the allocator gives up, which leaves no
//! room for an orderly shutdown. [`Arena::try_alloc`] reserves backing space
//! through [`Vec::try_reserve`] first, so memory exhaustion comes back as an
//! [`AllocError`] the caller can propagate with `?`.
//!
//! ## Example
//!
//! ```
//! use insort_common::arena::{Arena, ArenaId};
//!
//! #[derive(Debug)]
//! struct Node {
//!     value: i64,
//!     next: Option<ArenaId<Node>>,
//! }
//!
//! let mut arena: Arena<Node> = Arena::new();
//! let tail = arena.alloc(Node { value: 2, next: None });
//! let head = arena.alloc(Node { value: 1, next: Some(tail) });
//!
//! assert_eq!(arena.get(head).value, 1);
//! assert_eq!(arena.get(head).next, Some(tail));
//! ```

use std::collections::TryReserveError;
use std::marker::PhantomData;

use thiserror::Error;

/// The arena could not obtain memory for a new element.
///
/// This is the single fatal condition of the programs built on this crate:
/// it is not recoverable at the allocation site, and callers are expected to
/// let the owning structure drop (releasing everything already allocated)
/// and report failure.
#[derive(Debug, Error)]
#[error("arena allocation failed: {0}")]
pub struct AllocError(#[from] TryReserveError);

/// A type-safe index into an [`Arena`].
///
/// `ArenaId<T>` is a lightweight handle (just a `usize`) referencing an
/// element of type `T`. The `PhantomData<T>` keeps ids from one element type
/// from being used with another at compile time.
#[derive(Debug)]
pub struct ArenaId<T> {
    index: usize,
    _marker: PhantomData<T>,
}

// Manual implementations to avoid requiring T: Clone/Copy/etc.
impl<T> Clone for ArenaId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArenaId<T> {}

impl<T> PartialEq for ArenaId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for ArenaId<T> {}

impl<T> std::hash::Hash for ArenaId<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

/// A simple append-only arena for elements of type `T`.
///
/// Elements are stored contiguously and referenced by [`ArenaId<T>`]. Ids
/// stay valid until [`Arena::clear`] or drop; individual elements cannot be
/// removed.
#[derive(Debug)]
pub struct Arena<T> {
    items: Vec<T>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    /// Creates a new empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a new arena with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Allocates a new element and returns its id.
    ///
    /// Aborts the process if the allocator fails; use [`Arena::try_alloc`]
    /// where allocation failure must be reportable.
    pub fn alloc(&mut self, value: T) -> ArenaId<T> {
        let index = self.items.len();
        self.items.push(value);
        ArenaId {
            index,
            _marker: PhantomData,
        }
    }

    /// Allocates a new element, reporting allocator failure as an error.
    ///
    /// On `Err` the arena is unchanged and `value` is dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use insort_common::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let id = arena.try_alloc(42)?;
    /// assert_eq!(arena.get(id), &42);
    /// # Ok::<(), insort_common::arena::AllocError>(())
    /// ```
    pub fn try_alloc(&mut self, value: T) -> Result<ArenaId<T>, AllocError> {
        self.items.try_reserve(1)?;
        let index = self.items.len();
        self.items.push(value);
        Ok(ArenaId {
            index,
            _marker: PhantomData,
        })
    }

    /// Returns a reference to the element at the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id came from a different arena or from before a
    /// [`Arena::clear`].
    #[must_use]
    pub fn get(&self, id: ArenaId<T>) -> &T {
        &self.items[id.index]
    }

    /// Returns a mutable reference to the element at the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id is out of bounds.
    #[must_use]
    pub fn get_mut(&mut self, id: ArenaId<T>) -> &mut T {
        &mut self.items[id.index]
    }

    /// Returns the number of elements in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drops every element, invalidating all outstanding ids.
    ///
    /// Safe to call repeatedly; clearing an empty arena is a no-op.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_and_get() {
        let mut arena: Arena<i64> = Arena::new();
        let id1 = arena.alloc(10);
        let id2 = arena.alloc(20);

        assert_eq!(arena.get(id1), &10);
        assert_eq!(arena.get(id2), &20);
    }

    #[test]
    fn test_try_alloc_succeeds_like_alloc() {
        let mut arena: Arena<&str> = Arena::new();
        let id = arena.try_alloc("hello").unwrap();
        assert_eq!(arena.get(id), &"hello");
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn test_get_mut_relinks_a_chain() {
        #[derive(Debug)]
        struct Node {
            value: i64,
            next: Option<ArenaId<Node>>,
        }

        let mut arena: Arena<Node> = Arena::new();
        let a = arena.alloc(Node {
            value: 1,
            next: None,
        });
        let b = arena.alloc(Node {
            value: 2,
            next: None,
        });

        arena.get_mut(a).next = Some(b);
        assert_eq!(arena.get(a).next, Some(b));
        assert_eq!(arena.get(b).value, 2);
    }

    #[test]
    fn test_arena_id_is_copy() {
        let mut arena: Arena<i64> = Arena::new();
        let id = arena.alloc(42);

        let id_copy = id;
        assert_eq!(arena.get(id), arena.get(id_copy));
    }

    #[test]
    fn test_len_is_empty_and_clear() {
        let mut arena: Arena<i64> = Arena::new();
        assert!(arena.is_empty());

        arena.alloc(1);
        arena.alloc(2);
        assert_eq!(arena.len(), 2);

        arena.clear();
        assert!(arena.is_empty());

        // Clearing again is a harmless no-op.
        arena.clear();
        assert_eq!(arena.len(), 0);
    }
}
