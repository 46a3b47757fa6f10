//! Core types and errors for Structa structured arrays.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the storage and array crates: element type
//! identity, constructor descriptors, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod ctor;
pub mod element;
pub mod error;

pub use ctor::CtorAndArgs;
pub use element::ElementType;
pub use error::{LayoutError, PlacementError};
