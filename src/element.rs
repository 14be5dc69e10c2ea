//! Position-tracking elements
//!
//! Every element stored in an [`IndexedBinaryHeap`](crate::indexed::IndexedBinaryHeap)
//! records the slot it currently occupies. The heap writes that slot on insertion
//! and on every swap; callers read it back to delete or re-prioritize the element
//! in O(log n).
//!
//! The setter takes `&self`, so the slot normally lives in a [`Cell`]. That lets
//! callers keep a shared reference (`Rc<E>`, `&E`) to an element while the heap
//! owns another one, and still observe where the element currently sits.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use rust_indexed_heaps::element::{Positioned, Tracked};
//! use rust_indexed_heaps::indexed::IndexedBinaryHeap;
//!
//! let mut heap = IndexedBinaryHeap::new();
//! let five = Rc::new(Tracked::new(5));
//! heap.insert(Rc::new(Tracked::new(9)));
//! heap.insert(Rc::clone(&five));
//! heap.insert(Rc::new(Tracked::new(1)));
//!
//! let removed = heap.delete_at(five.position()).unwrap();
//! assert!(Rc::ptr_eq(&removed, &five));
//! ```

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// An element that knows its own slot in an indexed heap.
///
/// The position is owned by the heap while the element is stored in it and is
/// stale as soon as the element is removed.
pub trait Positioned {
    /// Returns the slot recorded by the heap
    fn position(&self) -> usize;

    /// Records a new slot; only the heap calls this
    fn set_position(&self, position: usize);
}

impl<E: Positioned + ?Sized> Positioned for &E {
    fn position(&self) -> usize {
        (**self).position()
    }

    fn set_position(&self, position: usize) {
        (**self).set_position(position)
    }
}

impl<E: Positioned + ?Sized> Positioned for Rc<E> {
    fn position(&self) -> usize {
        (**self).position()
    }

    fn set_position(&self, position: usize) {
        (**self).set_position(position)
    }
}

impl<E: Positioned + ?Sized> Positioned for Box<E> {
    fn position(&self) -> usize {
        (**self).position()
    }

    fn set_position(&self, position: usize) {
        (**self).set_position(position)
    }
}

/// A value paired with a heap-managed position.
///
/// Equality and ordering look at the value only, never at the position.
pub struct Tracked<T> {
    value: T,
    position: Cell<usize>,
}

impl<T> Tracked<T> {
    /// Wraps a value; the position is meaningless until the heap assigns one
    pub fn new(value: T) -> Self {
        Tracked {
            value,
            position: Cell::new(0),
        }
    }

    /// Returns a reference to the wrapped value
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to the wrapped value
    ///
    /// Changing the value's ordering while it sits in a heap requires telling the
    /// heap afterwards, e.g. through `modify_at`.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Unwraps the value, discarding the position
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Positioned for Tracked<T> {
    #[inline]
    fn position(&self) -> usize {
        self.position.get()
    }

    #[inline]
    fn set_position(&self, position: usize) {
        self.position.set(position);
    }
}

impl<T> Deref for Tracked<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> From<T> for Tracked<T> {
    fn from(value: T) -> Self {
        Tracked::new(value)
    }
}

impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        Tracked {
            value: self.value.clone(),
            position: Cell::new(self.position.get()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracked")
            .field("value", &self.value)
            .field("position", &self.position.get())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Tracked<T> {}

impl<T: PartialOrd> PartialOrd for Tracked<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord> Ord for Tracked<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}
