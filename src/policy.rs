//! Backing-store resize policy
//!
//! The indexed heap manages the capacity of its slot array itself instead of
//! leaving it to `Vec`'s doubling strategy. Growth is multiplicative and
//! shrinking only happens once occupancy has fallen to a fixed fraction of the
//! capacity, so a heap oscillating around one size never resizes on every call.

use crate::traits::HeapError;

/// Growth and shrink thresholds for a heap's slot array
///
/// With the defaults the array starts with one slot, grows ×4 when full,
/// and halves once no more than a quarter of it is occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizePolicy {
    /// Capacity of a freshly created heap; the array never shrinks below it
    pub initial_capacity: usize,
    /// Factor applied to the capacity when an insert finds the array full
    pub growth_factor: usize,
    /// The array is halved when `len <= capacity / shrink_divisor`
    pub shrink_divisor: usize,
}

impl Default for ResizePolicy {
    fn default() -> Self {
        ResizePolicy {
            initial_capacity: 1,
            growth_factor: 4,
            shrink_divisor: 4,
        }
    }
}

impl ResizePolicy {
    /// Creates a policy, validating it
    pub fn new(
        initial_capacity: usize,
        growth_factor: usize,
        shrink_divisor: usize,
    ) -> Result<Self, HeapError> {
        let policy = ResizePolicy {
            initial_capacity,
            growth_factor,
            shrink_divisor,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Checks that the policy keeps amortized O(1) resizing without thrashing
    ///
    /// A divisor below 3 would let a halved array come out exactly full, so the
    /// next insert would grow it straight back.
    pub fn validate(&self) -> Result<(), HeapError> {
        if self.initial_capacity == 0 {
            return Err(HeapError::InvalidArgument(
                "initial capacity must be at least 1",
            ));
        }
        if self.growth_factor < 2 {
            return Err(HeapError::InvalidArgument(
                "growth factor must be at least 2",
            ));
        }
        if self.shrink_divisor < 3 {
            return Err(HeapError::InvalidArgument(
                "shrink divisor must be at least 3",
            ));
        }
        Ok(())
    }

    /// Capacity to grow to when `len == capacity`
    pub fn grown(&self, capacity: usize) -> usize {
        capacity.max(1).saturating_mul(self.growth_factor)
    }

    /// Capacity to shrink to after a removal, or `None` if no shrink is due
    pub fn shrunk(&self, capacity: usize, len: usize) -> Option<usize> {
        if capacity <= self.initial_capacity || len > capacity / self.shrink_divisor {
            return None;
        }
        let target = (capacity / 2).max(self.initial_capacity).max(len);
        (target < capacity).then_some(target)
    }
}
