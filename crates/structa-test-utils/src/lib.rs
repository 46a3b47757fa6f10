//! Test utilities and fixture element types for Structa development.
//!
//! Provides element constructors with predictable behaviour (counting,
//! failing) and [`Grid`], a user-defined array type whose gated
//! constructor takes its own arguments.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    counted_point, failing_point, point, FixtureError, FixtureFailure, Grid, Point,
};
