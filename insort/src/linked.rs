//! # Owned-Chain Sorted List
//!
//! A singly-linked list kept in ascending order, where each node owns its
//! successor outright (`Option<Box<Node<T>>>`). Ownership makes the chain
//! finite and acyclic by construction, and teardown is automatic: dropping
//! the list releases every node exactly once.
//!
//! Insertion is the classic O(n) scan of insertion sort: walk past every
//! element not greater than the new value and splice there. Equal values end
//! up after all previously-inserted equals, so insertion order is preserved
//! among ties.
//!
//! ## Example
//!
//! ```
//! use insort::SortedList;
//!
//! let mut list = SortedList::new();
//! for n in [3, 1, 2] {
//!     list.insert(n);
//! }
//!
//! let values: Vec<i64> = list.iter().copied().collect();
//! assert_eq!(values, vec![1, 2, 3]);
//! ```

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug)]
struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A singly-linked list whose traversal order is always non-decreasing.
#[derive(Debug)]
pub struct SortedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Default for SortedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SortedList<T> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of elements in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a borrowing iterator over the elements in sorted order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Releases every node, leaving the list empty.
    ///
    /// Safe on an already-empty list, and idempotent. Dropping the list does
    /// the same thing, so calling this is only needed to reuse the list.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }
}

impl<T: Ord> SortedList<T> {
    /// Inserts `value` at its sorted position.
    ///
    /// The cursor advances past every node whose value is `<= value`, so a
    /// new value lands after any existing equal values (stable placement)
    /// and before the first strictly greater one.
    pub fn insert(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.value <= value) {
            // The loop condition guarantees the cursor is Some here.
            cursor = &mut cursor.as_mut().unwrap().next;
        }
        let next = cursor.take();
        *cursor = Some(Box::new(Node { value, next }));
        self.len += 1;
    }
}

impl<T: Ord> FromIterator<T> for SortedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.insert(value);
        }
        list
    }
}

// The derived Drop would recurse once per node; a long list could overflow
// the stack. Unlink iteratively instead.
impl<T> Drop for SortedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Borrowing iterator over a [`SortedList`], in sorted order.
#[derive(Debug)]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a SortedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
