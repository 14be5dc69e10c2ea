//! Common traits for heap data structures
//!
//! This module provides a two-tier trait hierarchy for the (priority, item)
//! heaps in this crate:
//!
//! - [`Heap`]: Base trait for simple heaps, compatible with Rust's standard heap API patterns
//! - [`DecreaseKeyHeap`]: Extended trait adding handle-based `decrease_key` and `remove`
//!
//! The element-level [`IndexedBinaryHeap`](crate::indexed::IndexedBinaryHeap) does
//! not implement these traits directly: it stores whole elements ordered by a
//! comparator. [`HandleBinaryHeap`](crate::handle::HandleBinaryHeap) layers the
//! (priority, item) view on top of it.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// A constructor argument was missing or invalid
    InvalidArgument(&'static str),
    /// The minimum was requested from a heap with no elements
    EmptyHeap,
    /// The position is not an occupied slot of the heap
    IndexOutOfRange {
        /// The rejected position
        position: usize,
        /// Number of occupied slots at the time of the call
        len: usize,
    },
    /// The new priority is not less than the current priority
    PriorityNotDecreased,
    /// The handle is no longer valid (element was removed)
    InvalidHandle,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
            HeapError::EmptyHeap => write!(f, "heap is empty"),
            HeapError::IndexOutOfRange { position, len } => {
                write!(f, "position {} is out of range for heap of length {}", position, len)
            }
            HeapError::PriorityNotDecreased => {
                write!(f, "new priority is not less than current priority")
            }
            HeapError::InvalidHandle => {
                write!(f, "handle is no longer valid (element was removed)")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A handle to an element in the heap, used for decrease_key operations
///
/// This is an opaque type that identifies a specific element in the heap.
/// Handles may be `Clone` but not necessarily `Copy`.
pub trait Handle: Clone + PartialEq + Eq {}

/// Base trait for heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element (returns `()`)
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// Unlike `BinaryHeap` which stores values directly (using `Ord`), these heaps
/// store (priority, item) pairs to separate the ordering key from the data.
///
/// # Example
///
/// ```rust
/// use rust_indexed_heaps::Heap;
/// use rust_indexed_heaps::handle::HandleBinaryHeap;
///
/// let mut heap = HandleBinaryHeap::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(2, "two");
///
/// assert_eq!(heap.peek(), Some((&1, &"one")));
/// assert_eq!(heap.pop(), Some((1, "one")));
/// ```
pub trait Heap<T, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given priority
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, priority: P, item: T);

    /// Returns the minimum priority and associated item without removing it
    ///
    /// Note that `BinaryHeap` is a max-heap, while these heaps are min-heaps.
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the minimum priority and associated item
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<(P, T)>;

    /// Merges another heap into this one, consuming the other heap
    fn merge(&mut self, other: Self);
}

/// Extended heap trait with `decrease_key` support
///
/// This trait extends [`Heap`] with operations that require tracking element handles:
/// - `push_with_handle` returns a handle that can be used with `decrease_key`
/// - `decrease_key` efficiently updates an element's priority
/// - `remove` deletes an arbitrary element, not only the minimum
///
/// # Example
///
/// ```rust
/// use rust_indexed_heaps::{DecreaseKeyHeap, Heap};
/// use rust_indexed_heaps::handle::HandleBinaryHeap;
///
/// let mut heap = HandleBinaryHeap::new();
/// let handle = heap.push_with_handle(10, "item");
/// heap.decrease_key(&handle, 5).unwrap();
/// assert_eq!(heap.peek(), Some((&5, &"item")));
/// ```
pub trait DecreaseKeyHeap<T, P: Ord>: Heap<T, P> {
    /// The handle type for this heap, used to reference elements for decrease_key
    type Handle: Handle;

    /// Inserts an element with the given priority, returning a handle
    fn push_with_handle(&mut self, priority: P, item: T) -> Self::Handle;

    /// Decreases the priority of an element identified by the handle
    ///
    /// # Errors
    /// Returns `HeapError::InvalidHandle` if the element was already removed and
    /// `HeapError::PriorityNotDecreased` if the new priority is not
    /// less than the current priority.
    fn decrease_key(&mut self, handle: &Self::Handle, new_priority: P) -> Result<(), HeapError>;

    /// Removes the element identified by the handle, wherever it sits in the heap
    ///
    /// # Errors
    /// Returns `HeapError::InvalidHandle` if the element was already removed.
    fn remove(&mut self, handle: &Self::Handle) -> Result<(P, T), HeapError>;

    /// Returns true if the handle's element is still in the heap
    fn contains(&self, handle: &Self::Handle) -> bool;
}
