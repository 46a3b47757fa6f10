//! Logical index to physical slot translation.

use crate::config::PartitionConfig;

/// Physical position of a logical index within partitioned storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotLocation {
    /// In the low partition.
    Low {
        /// Offset within the low partition.
        offset: usize,
    },
    /// In one of the high partitions.
    High {
        /// Which high partition, counting from zero.
        partition: usize,
        /// Offset within that partition.
        offset: usize,
    },
}

impl SlotLocation {
    /// Translate `index` under `config`.
    ///
    /// Indices below `low_capacity` resolve directly into the low
    /// partition. The rest are rebased to `low_capacity`, then split into
    /// a partition number (high bits) and an offset (low `high_shift`
    /// bits). `config` must be valid; bounds against the storage length
    /// are the caller's concern.
    #[inline]
    pub fn resolve(index: u64, config: &PartitionConfig) -> Self {
        if index < config.low_capacity {
            return Self::Low {
                offset: index as usize,
            };
        }
        let rel = index - config.low_capacity;
        Self::High {
            partition: (rel >> config.high_shift) as usize,
            offset: (rel & config.high_mask()) as usize,
        }
    }

    /// Whether this location is in the low partition.
    pub fn is_low(&self) -> bool {
        matches!(self, Self::Low { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INT_LIMIT: u64 = PartitionConfig::INT_LIMIT;
    const HIGH: u64 = 1 << 30;

    #[test]
    fn zero_is_low() {
        let loc = SlotLocation::resolve(0, &PartitionConfig::DEFAULT);
        assert_eq!(loc, SlotLocation::Low { offset: 0 });
    }

    #[test]
    fn last_low_index() {
        let loc = SlotLocation::resolve(INT_LIMIT - 1, &PartitionConfig::DEFAULT);
        assert_eq!(
            loc,
            SlotLocation::Low {
                offset: (INT_LIMIT - 1) as usize
            }
        );
    }

    #[test]
    fn int_limit_is_first_high_slot() {
        let loc = SlotLocation::resolve(INT_LIMIT, &PartitionConfig::DEFAULT);
        assert_eq!(
            loc,
            SlotLocation::High {
                partition: 0,
                offset: 0
            }
        );
    }

    #[test]
    fn last_slot_of_first_high_partition() {
        let loc = SlotLocation::resolve(INT_LIMIT + HIGH - 1, &PartitionConfig::DEFAULT);
        assert_eq!(
            loc,
            SlotLocation::High {
                partition: 0,
                offset: (HIGH - 1) as usize
            }
        );
    }

    #[test]
    fn one_full_partition_past_int_limit() {
        let loc = SlotLocation::resolve(INT_LIMIT + HIGH, &PartitionConfig::DEFAULT);
        assert_eq!(
            loc,
            SlotLocation::High {
                partition: 1,
                offset: 0
            }
        );
    }

    #[test]
    fn scaled_geometry_uses_same_rules() {
        let config = PartitionConfig::new(7, 2);
        assert_eq!(SlotLocation::resolve(6, &config), SlotLocation::Low { offset: 6 });
        assert_eq!(
            SlotLocation::resolve(7, &config),
            SlotLocation::High {
                partition: 0,
                offset: 0
            }
        );
        assert_eq!(
            SlotLocation::resolve(12, &config),
            SlotLocation::High {
                partition: 1,
                offset: 1
            }
        );
    }

    #[test]
    fn zero_low_capacity_routes_everything_high() {
        let config = PartitionConfig::new(0, 3);
        assert!(!SlotLocation::resolve(0, &config).is_low());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn translation_is_injective_and_reversible(
                low in 0u64..64,
                shift in 1u32..6,
                index in 0u64..10_000,
            ) {
                let config = PartitionConfig::new(low, shift);
                let rebuilt = match SlotLocation::resolve(index, &config) {
                    SlotLocation::Low { offset } => {
                        prop_assert!((offset as u64) < low);
                        offset as u64
                    }
                    SlotLocation::High { partition, offset } => {
                        prop_assert!((offset as u64) < config.high_partition_size());
                        low + ((partition as u64) << shift) + offset as u64
                    }
                };
                prop_assert_eq!(rebuilt, index);
            }

            #[test]
            fn default_geometry_round_trips_long_indices(index in 0u64..(1u64 << 40)) {
                let config = PartitionConfig::DEFAULT;
                let rebuilt = match SlotLocation::resolve(index, &config) {
                    SlotLocation::Low { offset } => offset as u64,
                    SlotLocation::High { partition, offset } => {
                        INT_LIMIT + ((partition as u64) << 30) + offset as u64
                    }
                };
                prop_assert_eq!(rebuilt, index);
            }
        }
    }
}
