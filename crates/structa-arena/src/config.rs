//! Partition geometry parameters.

use structa_core::LayoutError;

/// Geometry of a [`PartitionedStorage`](crate::PartitionedStorage).
///
/// Controls where the low partition ends and how large each high
/// partition is. Validated at allocation; immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PartitionConfig {
    /// Number of slots in the low partition before high partitions begin.
    ///
    /// Default: [`PartitionConfig::INT_LIMIT`]. Must not exceed it.
    pub low_capacity: u64,

    /// Size exponent of each full high partition (`2^high_shift` slots).
    ///
    /// Default: 30. Must be in `1..=30`.
    pub high_shift: u32,
}

impl PartitionConfig {
    /// Largest index representable by a 32-bit signed index type.
    pub const INT_LIMIT: u64 = i32::MAX as u64;

    /// Default high partition size exponent.
    pub const DEFAULT_HIGH_SHIFT: u32 = 30;

    /// Largest permitted high partition size exponent.
    pub const MAX_HIGH_SHIFT: u32 = 30;

    /// Default geometry: a 2^31 - 1 slot low partition and 2^30 slot high
    /// partitions.
    pub const DEFAULT: Self = Self {
        low_capacity: Self::INT_LIMIT,
        high_shift: Self::DEFAULT_HIGH_SHIFT,
    };

    /// Create a geometry with explicit parameters. Call
    /// [`validate`](Self::validate) before use.
    pub const fn new(low_capacity: u64, high_shift: u32) -> Self {
        Self {
            low_capacity,
            high_shift,
        }
    }

    /// Number of slots in a full high partition.
    ///
    /// Only meaningful for a validated geometry.
    pub const fn high_partition_size(&self) -> u64 {
        1 << self.high_shift
    }

    /// Mask extracting the offset within a high partition.
    pub const fn high_mask(&self) -> u64 {
        self.high_partition_size() - 1
    }

    /// Check the geometry invariants.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.low_capacity > Self::INT_LIMIT {
            return Err(LayoutError::InvalidPartitionConfig {
                reason: format!(
                    "low_capacity {} exceeds {}",
                    self.low_capacity,
                    Self::INT_LIMIT
                ),
            });
        }
        if self.high_shift == 0 || self.high_shift > Self::MAX_HIGH_SHIFT {
            return Err(LayoutError::InvalidPartitionConfig {
                reason: format!(
                    "high_shift {} outside 1..={}",
                    self.high_shift,
                    Self::MAX_HIGH_SHIFT
                ),
            });
        }
        Ok(())
    }
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
