//! Fixed-length partitioned slot storage.

use structa_core::LayoutError;
use tracing::debug;

use crate::config::PartitionConfig;
use crate::location::SlotLocation;
use crate::partition::Partition;
use crate::plan::PartitionPlan;

/// Fixed-length storage addressed by 64-bit logical indices.
///
/// Allocated once, eagerly, with every slot empty. The low partition and
/// the full run of high partitions are sized at allocation from the
/// [`PartitionPlan`] and never change afterwards. All accessors bounds
/// check against the declared length and report
/// [`LayoutError::IndexOutOfBounds`] rather than panicking.
pub struct PartitionedStorage<T> {
    config: PartitionConfig,
    len: u64,
    low: Partition<T>,
    /// Full high partitions followed by the trailing partition.
    high: Vec<Partition<T>>,
}

impl<T> PartitionedStorage<T> {
    /// Allocate storage for `length` slots under `config`.
    ///
    /// `length` is signed because models carry a signed length; negative
    /// values are rejected with [`LayoutError::NegativeLength`].
    pub fn allocate(length: i64, config: PartitionConfig) -> Result<Self, LayoutError> {
        if length < 0 {
            return Err(LayoutError::NegativeLength { length });
        }
        config.validate()?;

        let len = length as u64;
        let plan = PartitionPlan::for_length(len, &config);
        let to_usize =
            |n: u64| usize::try_from(n).map_err(|_| LayoutError::CapacityOverflow { length: len });

        let low = Partition::try_new(to_usize(plan.low_len)?)?;

        let partitions = plan.high_partition_count();
        let mut high = Vec::new();
        high.try_reserve_exact(to_usize(partitions)?)
            .map_err(|_| LayoutError::PartitionTableAllocationFailed { partitions })?;
        let full_size = to_usize(plan.high_partition_size)?;
        for _ in 0..plan.full_high_partitions {
            high.push(Partition::try_new(full_size)?);
        }
        high.push(Partition::try_new(to_usize(plan.trailing_len)?)?);

        debug!(
            length = len,
            low_len = plan.low_len,
            high_partitions = high.len(),
            trailing_len = plan.trailing_len,
            "allocated partitioned storage"
        );

        Ok(Self {
            config,
            len,
            low,
            high,
        })
    }

    /// Geometry this storage was allocated with.
    pub fn config(&self) -> &PartitionConfig {
        &self.config
    }

    /// Number of logical slots.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Whether the storage has no slots.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slots in the low partition.
    pub fn low_len(&self) -> usize {
        self.low.len()
    }

    /// Number of high partitions, including the trailing one.
    pub fn high_partition_count(&self) -> usize {
        self.high.len()
    }

    /// Size of high partition `i`.
    pub fn high_partition_len(&self, i: usize) -> Option<usize> {
        self.high.get(i).map(Partition::len)
    }

    /// Total partitions: the low partition plus every high partition.
    pub fn partition_count(&self) -> usize {
        1 + self.high.len()
    }

    /// Resolve `index` to its physical location.
    #[inline]
    pub fn locate(&self, index: u64) -> Result<SlotLocation, LayoutError> {
        if index >= self.len {
            return Err(LayoutError::IndexOutOfBounds {
                index,
                length: self.len,
            });
        }
        Ok(SlotLocation::resolve(index, &self.config))
    }

    /// The slot at `index`.
    #[inline]
    pub fn slot(&self, index: u64) -> Result<&Option<T>, LayoutError> {
        Ok(match self.locate(index)? {
            SlotLocation::Low { offset } => self.low.slot(offset),
            SlotLocation::High { partition, offset } => self.high[partition].slot(offset),
        })
    }

    /// The mutable slot at `index`.
    #[inline]
    pub fn slot_mut(&mut self, index: u64) -> Result<&mut Option<T>, LayoutError> {
        Ok(match self.locate(index)? {
            SlotLocation::Low { offset } => self.low.slot_mut(offset),
            SlotLocation::High { partition, offset } => self.high[partition].slot_mut(offset),
        })
    }

    /// The value at `index`, or `None` if the slot is empty.
    #[inline]
    pub fn read(&self, index: u64) -> Result<Option<&T>, LayoutError> {
        self.slot(index).map(Option::as_ref)
    }

    /// Mutable access to the value at `index`, or `None` if empty.
    #[inline]
    pub fn read_mut(&mut self, index: u64) -> Result<Option<&mut T>, LayoutError> {
        self.slot_mut(index).map(Option::as_mut)
    }

    /// Store `value` at `index`, returning the previous occupant.
    pub fn write(&mut self, index: u64, value: T) -> Result<Option<T>, LayoutError> {
        self.slot_mut(index).map(|slot| slot.replace(value))
    }

    /// Empty the slot at `index`, returning its value.
    pub fn take(&mut self, index: u64) -> Result<Option<T>, LayoutError> {
        self.slot_mut(index).map(Option::take)
    }

    /// Number of non-empty slots across every partition.
    pub fn occupied(&self) -> u64 {
        let high: usize = self.high.iter().map(Partition::occupied).sum();
        (self.low.occupied() + high) as u64
    }

    /// Memory held by all partitions in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.low.memory_bytes()
            + self
                .high
                .iter()
                .map(Partition::memory_bytes)
                .sum::<usize>()
    }
}
