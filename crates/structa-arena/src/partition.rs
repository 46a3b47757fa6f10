//! A single contiguous run of slots.

use structa_core::LayoutError;

/// A contiguous, fixed-size run of slots.
///
/// Partitions are the physical storage unit behind a
/// [`PartitionedStorage`](crate::PartitionedStorage). Every slot starts
/// empty (`None`) and the partition never grows or shrinks after
/// allocation.
pub struct Partition<T> {
    slots: Vec<Option<T>>,
}

impl<T> Partition<T> {
    /// Allocate `len` empty slots.
    ///
    /// Reserves exactly `len` slots up front and reports allocator
    /// refusal as [`LayoutError::AllocationFailed`] instead of aborting.
    pub fn try_new(len: usize) -> Result<Self, LayoutError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(len)
            .map_err(|_| LayoutError::AllocationFailed { slots: len as u64 })?;
        slots.resize_with(len, || None);
        Ok(Self { slots })
    }

    /// Slot at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset >= len()`.
    #[inline]
    pub fn slot(&self, offset: usize) -> &Option<T> {
        &self.slots[offset]
    }

    /// Mutable slot at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset >= len()`.
    #[inline]
    pub fn slot_mut(&mut self, offset: usize) -> &mut Option<T> {
        &mut self.slots[offset]
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the partition has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of non-empty slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Memory held by the slot vector in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.slots.len() * std::mem::size_of::<Option<T>>()
    }
}
