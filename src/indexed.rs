//! Indexed Binary Heap implementation
//!
//! An array-backed binary min-heap in which every stored element also records
//! its own current slot (see [`Positioned`]). Knowing where an element sits
//! makes it possible to delete or re-prioritize it in O(log n), not only the
//! minimum at the root.
//!
//! The order is supplied by a comparator; `compare(a, b) != Greater` means `a`
//! may sit above `b`. Ties are broken arbitrarily.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity         |
//! |--------------|--------------------|
//! | `insert`     | O(log n) amortized |
//! | `peek_min`   | O(1)               |
//! | `delete_min` | O(log n) amortized |
//! | `delete_at`  | O(log n) amortized |
//! | `update_at`  | O(log n)           |
//! | `heapify`    | O(n)               |
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_heaps::element::Tracked;
//! use rust_indexed_heaps::indexed::IndexedBinaryHeap;
//!
//! let mut heap = IndexedBinaryHeap::new();
//! for value in [9, 4, 3, 8, 7, 6] {
//!     heap.insert(Tracked::new(value));
//! }
//!
//! assert_eq!(**heap.peek_min().unwrap(), 3);
//! let drained: Vec<i32> = heap.into_sorted_vec().into_iter().map(Tracked::into_inner).collect();
//! assert_eq!(drained, vec![3, 4, 6, 7, 8, 9]);
//! ```

use crate::element::Positioned;
use crate::policy::ResizePolicy;
use crate::traits::HeapError;
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::mem;

/// Comparator type used when the element's own `Ord` defines the order
pub type NaturalOrder<T> = fn(&T, &T) -> Ordering;

/// A broken structural invariant found by [`IndexedBinaryHeap::check_invariants`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A child compares strictly less than its parent
    HeapOrder {
        /// Slot of the parent
        parent: usize,
        /// Slot of the out-of-order child
        child: usize,
    },
    /// An element's recorded position differs from the slot it occupies
    Position {
        /// Slot the element occupies
        slot: usize,
        /// Position the element reports
        recorded: usize,
    },
    /// More occupied slots than the logical capacity
    Capacity {
        /// Number of occupied slots
        len: usize,
        /// Logical capacity
        capacity: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::HeapOrder { parent, child } => {
                write!(f, "child at slot {} is less than its parent at slot {}", child, parent)
            }
            InvariantViolation::Position { slot, recorded } => {
                write!(f, "element at slot {} records position {}", slot, recorded)
            }
            InvariantViolation::Capacity { len, capacity } => {
                write!(f, "length {} exceeds capacity {}", len, capacity)
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// A binary min-heap whose elements track their own slot
///
/// Slots `0..len` are occupied. For every occupied slot `i`, the element there
/// reports `position() == i`, and it compares no greater than the elements in
/// slots `2i + 1` and `2i + 2`.
///
/// A position read from an element is only meaningful while that element is
/// in the heap; after removal it is stale and must not be passed back.
pub struct IndexedBinaryHeap<T, C = NaturalOrder<T>> {
    /// Occupied slots; `slots.len()` is the heap size
    slots: Vec<T>,
    /// Logical capacity managed by `policy`
    capacity: usize,
    comparator: C,
    policy: ResizePolicy,
}

impl<T: Positioned + Ord> IndexedBinaryHeap<T> {
    /// Creates an empty heap ordered by the elements' `Ord` implementation
    pub fn new() -> Self {
        Self::with_comparator(T::cmp)
    }
}

impl<T: Positioned + Ord> Default for IndexedBinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> IndexedBinaryHeap<T, C>
where
    T: Positioned,
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty heap ordered by `comparator` with the default resize policy
    pub fn with_comparator(comparator: C) -> Self {
        let policy = ResizePolicy::default();
        Self {
            slots: Vec::with_capacity(policy.initial_capacity),
            capacity: policy.initial_capacity,
            comparator,
            policy,
        }
    }

    /// Creates an empty heap with an explicit resize policy
    ///
    /// # Errors
    /// Returns `HeapError::InvalidArgument` if the policy does not validate.
    pub fn with_policy(comparator: C, policy: ResizePolicy) -> Result<Self, HeapError> {
        policy.validate()?;
        Ok(Self {
            slots: Vec::with_capacity(policy.initial_capacity),
            capacity: policy.initial_capacity,
            comparator,
            policy,
        })
    }

    /// Returns a builder for configuring the comparator and resize policy
    pub fn builder() -> IndexedHeapBuilder<T, C> {
        IndexedHeapBuilder::new()
    }

    /// Builds a heap from existing elements in O(n)
    ///
    /// Elements get positions `0..n` in iteration order, then every internal
    /// node is sifted down from the last one to the root.
    pub fn heapify<I>(elements: I, comparator: C) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::build_from(elements, comparator, ResizePolicy::default())
    }

    /// Like [`heapify`](Self::heapify) with an explicit resize policy
    pub fn heapify_with_policy<I>(
        elements: I,
        comparator: C,
        policy: ResizePolicy,
    ) -> Result<Self, HeapError>
    where
        I: IntoIterator<Item = T>,
    {
        policy.validate()?;
        Ok(Self::build_from(elements, comparator, policy))
    }

    fn build_from<I>(elements: I, comparator: C, policy: ResizePolicy) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let slots: Vec<T> = elements.into_iter().collect();
        for (slot, element) in slots.iter().enumerate() {
            element.set_position(slot);
        }
        let capacity = slots.len().max(policy.initial_capacity);
        let mut heap = Self {
            slots,
            capacity,
            comparator,
            policy,
        };
        let len = heap.slots.len();
        heap.slots.reserve_exact(capacity - len);
        for slot in (0..len / 2).rev() {
            heap.sift_down(slot);
        }
        heap
    }

    /// Returns the number of elements in the heap
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the heap holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the logical capacity of the slot array
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the resize policy in effect
    pub fn policy(&self) -> ResizePolicy {
        self.policy
    }

    /// Inserts an element; its position is set to the slot where it comes to rest
    ///
    /// The element must not currently be in this heap.
    pub fn insert(&mut self, element: T) {
        if self.slots.len() == self.capacity {
            self.grow();
        }
        let slot = self.slots.len();
        element.set_position(slot);
        self.slots.push(element);
        self.sift_up(slot);
    }

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// Returns `HeapError::EmptyHeap` if the heap is empty.
    pub fn peek_min(&self) -> Result<&T, HeapError> {
        self.slots.first().ok_or(HeapError::EmptyHeap)
    }

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns `HeapError::EmptyHeap` if the heap is empty.
    pub fn delete_min(&mut self) -> Result<T, HeapError> {
        if self.slots.is_empty() {
            return Err(HeapError::EmptyHeap);
        }
        self.delete_at(0)
    }

    /// Removes and returns the element occupying `position`
    ///
    /// The last element moves into the vacated slot and is sifted up or down,
    /// whichever direction restores the order.
    ///
    /// # Errors
    /// Returns `HeapError::IndexOutOfRange` unless `position < len()`.
    pub fn delete_at(&mut self, position: usize) -> Result<T, HeapError> {
        self.check_position(position)?;

        let removed = self.slots.swap_remove(position);
        if position < self.slots.len() {
            self.slots[position].set_position(position);
            self.restore(position);
        }
        self.maybe_shrink();

        Ok(removed)
    }

    /// Restores the order around `position` after its element's key changed
    ///
    /// Use this when the key lives behind interior mutability and was changed
    /// in place. Returns the slot where the element came to rest.
    ///
    /// # Errors
    /// Returns `HeapError::IndexOutOfRange` unless `position < len()`.
    pub fn update_at(&mut self, position: usize) -> Result<usize, HeapError> {
        self.check_position(position)?;
        Ok(self.restore(position))
    }

    /// Mutates the element at `position` in place, then restores the order
    ///
    /// Returns the slot where the element came to rest. The closure must not
    /// touch the element's recorded position.
    ///
    /// # Errors
    /// Returns `HeapError::IndexOutOfRange` unless `position < len()`.
    pub fn modify_at<F>(&mut self, position: usize, f: F) -> Result<usize, HeapError>
    where
        F: FnOnce(&mut T),
    {
        self.check_position(position)?;
        f(&mut self.slots[position]);
        Ok(self.restore(position))
    }

    /// Puts `element` into the occupied slot `position` and returns the old occupant
    ///
    /// # Errors
    /// Returns `HeapError::IndexOutOfRange` unless `position < len()`.
    pub fn replace_at(&mut self, position: usize, element: T) -> Result<T, HeapError> {
        self.check_position(position)?;
        element.set_position(position);
        let old = mem::replace(&mut self.slots[position], element);
        self.restore(position);
        Ok(old)
    }

    /// Returns the element occupying `position`, if any
    pub fn get(&self, position: usize) -> Option<&T> {
        self.slots.get(position)
    }

    /// Iterates over the elements in slot order (not sorted)
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slots.iter()
    }

    /// Returns the occupied slots in slot order
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Removes every element and resets the capacity to the initial one
    pub fn clear(&mut self) {
        self.slots.clear();
        self.slots.shrink_to(self.policy.initial_capacity);
        self.capacity = self.policy.initial_capacity;
    }

    /// Consumes the heap, returning its elements in slot order
    pub fn into_vec(self) -> Vec<T> {
        self.slots
    }

    /// Consumes the heap, returning its elements from minimum to maximum
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.slots.len());
        while let Ok(element) = self.delete_min() {
            sorted.push(element);
        }
        sorted
    }

    /// Scans the whole heap for broken invariants
    ///
    /// This is O(n) and meant for tests; no heap operation calls it.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let len = self.slots.len();
        if len > self.capacity {
            return Err(InvariantViolation::Capacity {
                len,
                capacity: self.capacity,
            });
        }
        for (slot, element) in self.slots.iter().enumerate() {
            let recorded = element.position();
            if recorded != slot {
                return Err(InvariantViolation::Position { slot, recorded });
            }
            for child in [2 * slot + 1, 2 * slot + 2] {
                if child < len && !self.le(slot, child) {
                    return Err(InvariantViolation::HeapOrder {
                        parent: slot,
                        child,
                    });
                }
            }
        }
        Ok(())
    }

    fn check_position(&self, position: usize) -> Result<(), HeapError> {
        if position < self.slots.len() {
            Ok(())
        } else {
            Err(HeapError::IndexOutOfRange {
                position,
                len: self.slots.len(),
            })
        }
    }

    /// True if the element in slot `i` may sit above the one in slot `j`
    #[inline]
    fn le(&self, i: usize, j: usize) -> bool {
        (self.comparator)(&self.slots[i], &self.slots[j]) != Ordering::Greater
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.slots.swap(i, j);
        self.slots[i].set_position(i);
        self.slots[j].set_position(j);
    }

    /// Sifts up, then down if it did not move; returns the resting slot
    fn restore(&mut self, slot: usize) -> usize {
        let risen = self.sift_up(slot);
        if risen != slot {
            return risen;
        }
        self.sift_down(slot)
    }

    /// Move element at slot up to maintain heap property
    fn sift_up(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.le(parent, slot) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
        slot
    }

    /// Move element at slot down to maintain heap property
    fn sift_down(&mut self, mut slot: usize) -> usize {
        let len = self.slots.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smallest = if right < len && !self.le(left, right) {
                right
            } else {
                left
            };
            if self.le(slot, smallest) {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
        slot
    }

    fn grow(&mut self) {
        let new_capacity = self.policy.grown(self.capacity);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            old_capacity = self.capacity,
            new_capacity,
            len = self.slots.len(),
            "growing heap slots"
        );
        self.slots.reserve_exact(new_capacity - self.slots.len());
        self.capacity = new_capacity;
    }

    fn maybe_shrink(&mut self) {
        if let Some(new_capacity) = self.policy.shrunk(self.capacity, self.slots.len()) {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                old_capacity = self.capacity,
                new_capacity,
                len = self.slots.len(),
                "shrinking heap slots"
            );
            self.slots.shrink_to(new_capacity);
            self.capacity = new_capacity;
        }
    }
}

impl<T, C> Extend<T> for IndexedBinaryHeap<T, C>
where
    T: Positioned,
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for IndexedBinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedBinaryHeap")
            .field("slots", &self.slots)
            .field("capacity", &self.capacity)
            .field("policy", &self.policy)
            .finish()
    }
}

/// Builder for an [`IndexedBinaryHeap`]
///
/// Unlike [`IndexedBinaryHeap::with_comparator`], the comparator is optional
/// here and its absence is reported when building.
pub struct IndexedHeapBuilder<T, C> {
    comparator: Option<C>,
    policy: ResizePolicy,
    _phantom: PhantomData<fn(&T)>,
}

impl<T, C> IndexedHeapBuilder<T, C>
where
    T: Positioned,
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates a builder with no comparator and the default resize policy
    pub fn new() -> Self {
        IndexedHeapBuilder {
            comparator: None,
            policy: ResizePolicy::default(),
            _phantom: PhantomData,
        }
    }

    /// Sets the comparator
    pub fn comparator(mut self, comparator: C) -> Self {
        self.comparator = Some(comparator);
        self
    }

    /// Sets the resize policy
    pub fn resize_policy(mut self, policy: ResizePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builds an empty heap
    ///
    /// # Errors
    /// Returns `HeapError::InvalidArgument` if no comparator was set or the
    /// policy does not validate.
    pub fn build(self) -> Result<IndexedBinaryHeap<T, C>, HeapError> {
        let comparator = self
            .comparator
            .ok_or(HeapError::InvalidArgument("comparator is required"))?;
        IndexedBinaryHeap::with_policy(comparator, self.policy)
    }

    /// Builds a heap holding `elements`, in O(n)
    ///
    /// # Errors
    /// Same as [`build`](Self::build).
    pub fn build_from<I>(self, elements: I) -> Result<IndexedBinaryHeap<T, C>, HeapError>
    where
        I: IntoIterator<Item = T>,
    {
        let comparator = self
            .comparator
            .ok_or(HeapError::InvalidArgument("comparator is required"))?;
        IndexedBinaryHeap::heapify_with_policy(elements, comparator, self.policy)
    }
}

impl<T, C> Default for IndexedHeapBuilder<T, C>
where
    T: Positioned,
    C: Fn(&T, &T) -> Ordering,
{
    fn default() -> Self {
        Self::new()
    }
}
