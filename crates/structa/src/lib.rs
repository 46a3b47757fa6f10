//! Structa: fixed-length structured arrays with gated construction and
//! 64-bit addressing.
//!
//! A structured array is a fixed-length container whose elements are
//! built directly into their slots. Instances can only be created through
//! the factory ([`instantiate`]), which hands the element type and length
//! to the array's constructor through a per-thread construction gate.
//! Arrays of arrays are built the same way, one gated sub-array per outer
//! slot, to lay out multi-dimensional data.
//!
//! # Architecture
//!
//! ```text
//! instantiate(model, ctor)            (factory)
//! ├── GateGuard::arm(params)          (per-thread construction gate)
//! ├── ctor(args)
//! │   └── StructuredArrayBase::from_gate()
//! │       └── PartitionedStorage::allocate(length, partitions)
//! └── GateGuard::drop                 (disarm on every exit path)
//!
//! StructuredArrayBase<T>
//! ├── construct_element_at(index, ctor)
//! ├── construct_sub_array_at(index, sub_model, ctor)
//! └── get(index) / get_mut(index)
//! ```
//!
//! # Thread safety
//!
//! Gate state is thread-local, so concurrent factory calls on different
//! threads never see each other's parameters. Arrays themselves carry no
//! internal synchronization: every mutation takes `&mut self`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod base;
pub mod factory;
pub mod gate;
pub mod model;

pub use array::StructuredArray;
pub use base::StructuredArrayBase;
pub use factory::instantiate;
pub use model::ArrayModel;

pub use structa_arena::{PartitionConfig, PartitionPlan, PartitionedStorage, SlotLocation};
pub use structa_core::{CtorAndArgs, ElementType, LayoutError, PlacementError};
