//! Indexed Binary Heaps for Rust
//!
//! This crate provides a binary min-heap whose elements know their own slot,
//! so any element can be deleted or re-prioritized in O(log n) without a
//! search, plus the algorithms that lean on it.
//!
//! # Features
//!
//! - **Indexed Binary Heap**: array-backed min-heap over elements implementing
//!   [`Positioned`], ordered by a caller-supplied comparator, with
//!   configurable grow/shrink policy and O(n) heapify
//! - **Handle Binary Heap**: (priority, item) heap implementing [`Heap`] and
//!   [`DecreaseKeyHeap`] with identity-checked handles
//! - **Pathfinding**: Dijkstra and A* over any [`DecreaseKeyHeap`], plus a
//!   lazy-deletion Dijkstra on the indexed heap
//! - **Huffman coding**: optimal prefix codes built with heapify, delete-min
//!   and insert
//! - **Running median**: lower median of a stream from a max-heap/min-heap pair
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use rust_indexed_heaps::{IndexedBinaryHeap, Positioned, Tracked};
//!
//! let mut heap = IndexedBinaryHeap::new();
//! let items: Vec<_> = [9, 4, 3, 8, 7, 6]
//!     .into_iter()
//!     .map(|v| Rc::new(Tracked::new(v)))
//!     .collect();
//! for item in &items {
//!     heap.insert(Rc::clone(item));
//! }
//!
//! // Remove the 8 wherever it currently sits
//! let removed = heap.delete_at(items[3].position()).unwrap();
//! assert_eq!(**removed, 8);
//! assert_eq!(**heap.delete_min().unwrap(), 3);
//! ```

pub mod element;
pub mod handle;
pub mod huffman;
pub mod indexed;
pub mod median;
pub mod pathfinding;
pub mod policy;
pub mod traits;

// Re-export the main types for convenience
pub use element::{Positioned, Tracked};
pub use indexed::IndexedBinaryHeap;
pub use traits::{DecreaseKeyHeap, Heap, HeapError};
