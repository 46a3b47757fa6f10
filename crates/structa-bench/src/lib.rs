//! Benchmark profiles for Structa structured arrays.
//!
//! - [`scaled_partitions`]: small geometry so lookups cross many high
//!   partitions without allocating billions of slots
//! - [`filled_array`]: a fully populated `u64` array
//! - [`filled_grid`]: a fully populated 2-D `u64` grid

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use structa::{ArrayModel, CtorAndArgs, LayoutError, PartitionConfig, StructuredArray};

/// 64K-slot low partition followed by 4K-slot high partitions.
pub fn scaled_partitions() -> PartitionConfig {
    PartitionConfig::new(1 << 16, 12)
}

fn identity(index: u64) -> Result<u64, LayoutError> {
    Ok(index)
}

fn zero(_: ()) -> Result<u64, LayoutError> {
    Ok(0)
}

/// A `u64` array of `length` elements where each element equals its index.
pub fn filled_array(length: i64, partitions: PartitionConfig) -> StructuredArray<u64> {
    let model = ArrayModel::new::<u64>(length).with_partitions(partitions);
    StructuredArray::new_instance(&model, |i| CtorAndArgs::new(identity, i))
        .expect("benchmark profile must build")
}

/// A `rows` x `cols` grid of zeroes.
pub fn filled_grid(rows: i64, cols: i64) -> StructuredArray<StructuredArray<u64>> {
    let model = ArrayModel::nested::<u64>(rows, ArrayModel::new::<u64>(cols))
        .expect("row model holds u64");
    StructuredArray::new_nested(&model, CtorAndArgs::nullary(zero))
        .expect("benchmark profile must build")
}
