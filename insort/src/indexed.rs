//! # Arena-Backed Sorted List
//!
//! The same ascending singly-linked list as [`crate::linked`], re-expressed
//! over an index arena: "next" links are [`ArenaId`]s instead of owning
//! boxes, and the whole chain lives in one contiguous [`Arena`]. Teardown is
//! dropping (or clearing) the arena, so there is exactly one release path no
//! matter how insertion ends.
//!
//! The payoff of the arena form is fallible insertion: [`ArenaSortedList::try_insert`]
//! surfaces allocator failure as an [`AllocError`] value. A caller that gets
//! `Err` can simply let the list drop, which releases every node already
//! inserted, and report the failure upward.
//!
//! ## Example
//!
//! ```
//! use insort::ArenaSortedList;
//!
//! let mut list = ArenaSortedList::new();
//! for n in [3, 1, 2] {
//!     list.try_insert(n)?;
//! }
//!
//! let values: Vec<i64> = list.iter().copied().collect();
//! assert_eq!(values, vec![1, 2, 3]);
//! # Ok::<(), insort_common::AllocError>(())
//! ```

use insort_common::{AllocError, Arena, ArenaId};

#[derive(Debug)]
struct Node<T> {
    value: T,
    next: Option<ArenaId<Node<T>>>,
}

/// A sorted singly-linked list whose nodes live in an index arena.
#[derive(Debug)]
pub struct ArenaSortedList<T> {
    arena: Arena<Node<T>>,
    head: Option<ArenaId<Node<T>>>,
}

impl<T> Default for ArenaSortedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArenaSortedList<T> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: None,
        }
    }

    /// Creates an empty list with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            head: None,
        }
    }

    /// Returns the number of elements in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns true if the list holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a borrowing iterator over the elements in sorted order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            next: self.head,
        }
    }

    /// Releases every node, leaving the list empty.
    ///
    /// Safe on an already-empty list, and idempotent.
    pub fn clear(&mut self) {
        self.head = None;
        self.arena.clear();
    }
}

impl<T: Ord> ArenaSortedList<T> {
    /// Inserts `value` at its sorted position, reporting allocator failure.
    ///
    /// Placement matches [`crate::linked::SortedList::insert`]: after any
    /// existing equal values, before the first strictly greater one. On
    /// `Err` the list is unchanged.
    pub fn try_insert(&mut self, value: T) -> Result<(), AllocError> {
        let id = self.arena.try_alloc(Node { value, next: None })?;

        let Some(head) = self.head else {
            self.head = Some(id);
            return Ok(());
        };

        if self.arena.get(id).value < self.arena.get(head).value {
            self.arena.get_mut(id).next = Some(head);
            self.head = Some(id);
            return Ok(());
        }

        let mut current = head;
        loop {
            let link = self.arena.get(current).next;
            match link {
                None => {
                    self.arena.get_mut(current).next = Some(id);
                    return Ok(());
                }
                Some(next) if self.arena.get(id).value < self.arena.get(next).value => {
                    self.arena.get_mut(id).next = Some(next);
                    self.arena.get_mut(current).next = Some(id);
                    return Ok(());
                }
                Some(next) => current = next,
            }
        }
    }
}

/// Borrowing iterator over an [`ArenaSortedList`], in sorted order.
#[derive(Debug)]
pub struct Iter<'a, T> {
    arena: &'a Arena<Node<T>>,
    next: Option<ArenaId<Node<T>>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.arena.get(id);
        self.next = node.next;
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a ArenaSortedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
