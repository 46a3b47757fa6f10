//! Partition sizing for a given length.

use crate::config::PartitionConfig;

/// How a storage of a given length is split into partitions.
///
/// Computed without allocating, so sizing can be checked for lengths far
/// beyond what a test machine could hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartitionPlan {
    /// Slots in the low partition.
    pub low_len: u64,
    /// Number of full high partitions of `2^high_shift` slots.
    pub full_high_partitions: u64,
    /// Slots in the trailing high partition (may be zero).
    pub trailing_len: u64,
    /// Slots in each full high partition.
    pub high_partition_size: u64,
}

impl PartitionPlan {
    /// Size the partitions for `length` slots under `config`.
    ///
    /// `config` must pass [`PartitionConfig::validate`]; a `high_shift`
    /// of 64 or more overflows the partition size.
    pub fn for_length(length: u64, config: &PartitionConfig) -> Self {
        let low_len = length.min(config.low_capacity);
        let extra = length - low_len;
        Self {
            low_len,
            full_high_partitions: extra >> config.high_shift,
            trailing_len: extra & config.high_mask(),
            high_partition_size: config.high_partition_size(),
        }
    }

    /// Number of high partitions including the trailing one.
    pub fn high_partition_count(&self) -> u64 {
        self.full_high_partitions + 1
    }

    /// Size of high partition `i`, or `None` past the trailing partition.
    pub fn high_len(&self, i: u64) -> Option<u64> {
        if i < self.full_high_partitions {
            Some(self.high_partition_size)
        } else if i == self.full_high_partitions {
            Some(self.trailing_len)
        } else {
            None
        }
    }

    /// Total slots covered by the plan.
    pub fn total_len(&self) -> u64 {
        self.low_len + self.full_high_partitions * self.high_partition_size + self.trailing_len
    }
}
