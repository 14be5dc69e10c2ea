//! Handle-based binary heap with `decrease_key` and arbitrary removal
//!
//! [`HandleBinaryHeap`] stores (priority, item) pairs in an
//! [`IndexedBinaryHeap`]. Each entry shares its slot cell with the
//! [`BinaryHandle`] returned on insertion, so the handle always knows where
//! its entry currently sits. That is enough for O(log n) `decrease_key` and
//! O(log n) removal of any element.
//!
//! A handle is checked against the slot it points to before use: if the entry
//! there is not the handle's own, the element has been removed and the call
//! fails with [`HeapError::InvalidHandle`] instead of touching another element.
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_heaps::{DecreaseKeyHeap, Heap};
//! use rust_indexed_heaps::handle::HandleBinaryHeap;
//!
//! let mut heap = HandleBinaryHeap::new();
//! let a = heap.push_with_handle(10, "a");
//! let b = heap.push_with_handle(20, "b");
//! heap.push(30, "c");
//!
//! heap.decrease_key(&b, 5).unwrap();
//! assert_eq!(heap.peek(), Some((&5, &"b")));
//!
//! assert_eq!(heap.remove(&a), Ok((10, "a")));
//! assert!(!heap.contains(&a));
//! ```

use crate::element::Positioned;
use crate::indexed::{IndexedBinaryHeap, InvariantViolation};
use crate::traits::{DecreaseKeyHeap, Handle, Heap, HeapError};
use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// Handle to an element in a [`HandleBinaryHeap`]
///
/// Handles compare by identity. A handle stays usable across `merge`: the
/// entry keeps its handle when it moves into the other heap.
#[derive(Clone)]
pub struct BinaryHandle {
    slot: Rc<Cell<usize>>,
}

impl PartialEq for BinaryHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl Eq for BinaryHandle {}

impl fmt::Debug for BinaryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHandle")
            .field("slot", &self.slot.get())
            .finish()
    }
}

impl Handle for BinaryHandle {}

struct Entry<T, P> {
    priority: P,
    item: T,
    slot: Rc<Cell<usize>>,
}

impl<T, P> Positioned for Entry<T, P> {
    #[inline]
    fn position(&self) -> usize {
        self.slot.get()
    }

    #[inline]
    fn set_position(&self, position: usize) {
        self.slot.set(position);
    }
}

type EntryOrder<T, P> = fn(&Entry<T, P>, &Entry<T, P>) -> Ordering;

fn by_priority<T, P: Ord>(a: &Entry<T, P>, b: &Entry<T, P>) -> Ordering {
    a.priority.cmp(&b.priority)
}

/// Binary min-heap over (priority, item) pairs with handle-based updates
///
/// | Operation          | Complexity         |
/// |--------------------|--------------------|
/// | `push`             | O(log n) amortized |
/// | `peek`             | O(1)               |
/// | `pop`              | O(log n) amortized |
/// | `decrease_key`     | O(log n)           |
/// | `remove`           | O(log n) amortized |
/// | `merge`            | O(m log(n + m))    |
pub struct HandleBinaryHeap<T, P: Ord> {
    heap: IndexedBinaryHeap<Entry<T, P>, EntryOrder<T, P>>,
}

impl<T, P: Ord> HandleBinaryHeap<T, P> {
    /// Slot of the handle's entry, if the entry is still in this heap
    fn locate(&self, handle: &BinaryHandle) -> Result<usize, HeapError> {
        let position = handle.slot.get();
        match self.heap.get(position) {
            Some(entry) if Rc::ptr_eq(&entry.slot, &handle.slot) => Ok(position),
            _ => Err(HeapError::InvalidHandle),
        }
    }

    /// Returns the priority and item behind a handle
    pub fn get(&self, handle: &BinaryHandle) -> Option<(&P, &T)> {
        let position = self.locate(handle).ok()?;
        self.heap
            .get(position)
            .map(|entry| (&entry.priority, &entry.item))
    }

    /// Iterates over (priority, item) pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&P, &T)> {
        self.heap.iter().map(|entry| (&entry.priority, &entry.item))
    }

    /// Scans the underlying indexed heap for broken invariants
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        self.heap.check_invariants()
    }
}

impl<T, P: Ord> Heap<T, P> for HandleBinaryHeap<T, P> {
    fn new() -> Self {
        Self {
            heap: IndexedBinaryHeap::with_comparator(by_priority::<T, P> as EntryOrder<T, P>),
        }
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn push(&mut self, priority: P, item: T) {
        self.push_with_handle(priority, item);
    }

    fn peek(&self) -> Option<(&P, &T)> {
        self.heap
            .peek_min()
            .ok()
            .map(|entry| (&entry.priority, &entry.item))
    }

    fn pop(&mut self) -> Option<(P, T)> {
        self.heap
            .delete_min()
            .ok()
            .map(|entry| (entry.priority, entry.item))
    }

    fn merge(&mut self, other: Self) {
        self.heap.extend(other.heap.into_vec());
    }
}

impl<T, P: Ord> DecreaseKeyHeap<T, P> for HandleBinaryHeap<T, P> {
    type Handle = BinaryHandle;

    fn push_with_handle(&mut self, priority: P, item: T) -> BinaryHandle {
        let slot = Rc::new(Cell::new(0));
        self.heap.insert(Entry {
            priority,
            item,
            slot: Rc::clone(&slot),
        });
        BinaryHandle { slot }
    }

    fn decrease_key(&mut self, handle: &BinaryHandle, new_priority: P) -> Result<(), HeapError> {
        let position = self.locate(handle)?;
        match self.heap.get(position) {
            Some(entry) if new_priority < entry.priority => {}
            _ => return Err(HeapError::PriorityNotDecreased),
        }
        self.heap
            .modify_at(position, |entry| entry.priority = new_priority)?;
        Ok(())
    }

    fn remove(&mut self, handle: &BinaryHandle) -> Result<(P, T), HeapError> {
        let position = self.locate(handle)?;
        let entry = self.heap.delete_at(position)?;
        Ok((entry.priority, entry.item))
    }

    fn contains(&self, handle: &BinaryHandle) -> bool {
        self.locate(handle).is_ok()
    }
}

impl<T, P: Ord> Default for HandleBinaryHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, P: Ord + fmt::Debug> fmt::Debug for HandleBinaryHeap<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
