//! Running median over a stream of values
//!
//! [`RunningMedian`] splits the values seen so far into two indexed heaps:
//! the lower half in a max-heap (the same [`IndexedBinaryHeap`] with a
//! reversed comparator) and the upper half in a min-heap. The lower half
//! holds the extra element when the count is odd, so its top is always the
//! lower median.
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_heaps::median::running_medians;
//!
//! assert_eq!(running_medians([7, 3, 1, 6, 2, 8]), vec![7, 3, 3, 3, 3, 3]);
//! ```

use crate::element::Tracked;
use crate::indexed::IndexedBinaryHeap;
use std::cmp::Ordering;
use std::fmt;

type HalfOrder<T> = fn(&Tracked<T>, &Tracked<T>) -> Ordering;

fn ascending<T: Ord>(a: &Tracked<T>, b: &Tracked<T>) -> Ordering {
    a.cmp(b)
}

fn descending<T: Ord>(a: &Tracked<T>, b: &Tracked<T>) -> Ordering {
    b.cmp(a)
}

/// Maintains the lower median of every value pushed so far
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `push`    | O(log n)   |
/// | `median`  | O(1)       |
pub struct RunningMedian<T: Ord> {
    lower: IndexedBinaryHeap<Tracked<T>, HalfOrder<T>>,
    upper: IndexedBinaryHeap<Tracked<T>, HalfOrder<T>>,
}

impl<T: Ord> RunningMedian<T> {
    /// Creates an empty tracker
    pub fn new() -> Self {
        RunningMedian {
            lower: IndexedBinaryHeap::with_comparator(descending::<T> as HalfOrder<T>),
            upper: IndexedBinaryHeap::with_comparator(ascending::<T> as HalfOrder<T>),
        }
    }

    /// Adds a value
    pub fn push(&mut self, value: T) {
        let goes_low = match self.lower.peek_min() {
            Ok(top) => value <= **top,
            Err(_) => true,
        };
        if goes_low {
            self.lower.insert(Tracked::new(value));
        } else {
            self.upper.insert(Tracked::new(value));
        }

        // lower.len() must be upper.len() or upper.len() + 1
        if self.lower.len() > self.upper.len() + 1 {
            if let Ok(top) = self.lower.delete_min() {
                self.upper.insert(top);
            }
        } else if self.upper.len() > self.lower.len() {
            if let Ok(top) = self.upper.delete_min() {
                self.lower.insert(top);
            }
        }
    }

    /// The ⌈k/2⌉-th smallest of the k values pushed, or `None` before any push
    pub fn median(&self) -> Option<&T> {
        self.lower.peek_min().ok().map(|top| top.value())
    }

    /// Number of values pushed
    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    /// Returns true if nothing has been pushed
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }
}

impl<T: Ord> Default for RunningMedian<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for RunningMedian<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunningMedian")
            .field("len", &self.len())
            .field("median", &self.median())
            .finish()
    }
}

impl<T: Ord> Extend<T> for RunningMedian<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

/// Returns the lower median of every prefix of `values`
pub fn running_medians<T, I>(values: I) -> Vec<T>
where
    T: Ord + Clone,
    I: IntoIterator<Item = T>,
{
    let mut tracker = RunningMedian::new();
    let mut medians = Vec::new();
    for value in values {
        tracker.push(value);
        if let Some(median) = tracker.median() {
            medians.push(median.clone());
        }
    }
    medians
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let tracker: RunningMedian<i32> = RunningMedian::new();
        assert!(tracker.is_empty());
        assert_eq!(tracker.median(), None);
        assert!(running_medians(Vec::<i32>::new()).is_empty());
    }

    #[test]
    fn test_known_sequences() {
        assert_eq!(running_medians([7, 3, 1, 6, 2, 8]), vec![7, 3, 3, 3, 3, 3]);
        assert_eq!(
            running_medians(1..=9),
            vec![1, 1, 2, 2, 3, 3, 4, 4, 5]
        );
        assert_eq!(
            running_medians([8, 2, 5, 1, 9, 4, 6, 7, 3]),
            vec![8, 2, 5, 2, 5, 4, 5, 5, 5]
        );
    }

    #[test]
    fn test_matches_sorting() {
        let values: Vec<i64> = (0..200).map(|i| (i * 7919) % 211 - 100).collect();
        let mut tracker = RunningMedian::new();
        for (k, &v) in values.iter().enumerate() {
            tracker.push(v);
            let mut prefix = values[..=k].to_vec();
            prefix.sort_unstable();
            assert_eq!(tracker.median(), Some(&prefix[k / 2]));
            assert_eq!(tracker.len(), k + 1);
        }
        assert!(tracker.lower.check_invariants().is_ok());
        assert!(tracker.upper.check_invariants().is_ok());
    }

    #[test]
    fn test_duplicates_and_extend() {
        let mut tracker = RunningMedian::new();
        tracker.extend([4, 4, 4, 1, 1]);
        assert_eq!(tracker.median(), Some(&4));
        tracker.push(1);
        assert_eq!(tracker.median(), Some(&1));
    }
}
