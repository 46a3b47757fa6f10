//! Partitioned long-addressable slot storage for Structa arrays.
//!
//! A structured array addresses its elements with 64-bit logical indices,
//! but every physical allocation is kept within a 32-bit signed index
//! range. Storage is split into one low partition followed by a run of
//! fixed-size high partitions:
//!
//! ```text
//! PartitionedStorage<T>
//! ├── low:  Partition<T>      indices [0, min(len, low_capacity))
//! └── high: Vec<Partition<T>>
//!     ├── [0]   2^shift slots  indices low_capacity + [0, 2^shift)
//!     ├── ...
//!     └── [n]   remainder      trailing partition, always present
//! ```
//!
//! The mapping from logical index to [`SlotLocation`] is a pure function
//! of the [`PartitionConfig`] and the index, so slots never move once the
//! storage is allocated.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod location;
pub mod partition;
pub mod plan;
pub mod storage;

pub use config::PartitionConfig;
pub use location::SlotLocation;
pub use partition::Partition;
pub use plan::PartitionPlan;
pub use storage::PartitionedStorage;
