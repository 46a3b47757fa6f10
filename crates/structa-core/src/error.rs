//! Error types for structured array construction and access.
//!
//! [`LayoutError`] covers failures raised by the array machinery itself
//! (gate misuse, bad lengths, bad indices). [`PlacementError`] pairs it
//! with a caller-defined constructor error so both can flow through one
//! `Result`.

use std::error::Error;
use std::fmt;

use crate::element::ElementType;

/// Errors raised by storage allocation, the construction gate, and
/// element lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// A model supplied a negative length.
    NegativeLength {
        /// The rejected length.
        length: i64,
    },
    /// A gated constructor ran while no factory call had armed the gate.
    DirectInstantiation,
    /// A logical index at or beyond the array length.
    IndexOutOfBounds {
        /// The rejected index.
        index: u64,
        /// The array length.
        length: u64,
    },
    /// The gate was armed for a different element type than the one the
    /// constructor builds.
    ElementTypeMismatch {
        /// Element type of the array being constructed.
        expected: ElementType,
        /// Element type carried by the model.
        found: ElementType,
    },
    /// Partition geometry violates its invariants.
    InvalidPartitionConfig {
        /// Which invariant was violated.
        reason: String,
    },
    /// The requested length does not fit the platform's address space.
    CapacityOverflow {
        /// The requested length.
        length: u64,
    },
    /// The allocator refused to reserve slot storage.
    AllocationFailed {
        /// Number of slots requested from the allocator.
        slots: u64,
    },
    /// The allocator refused to reserve the table of high partitions.
    PartitionTableAllocationFailed {
        /// Number of high partitions the table had to hold.
        partitions: u64,
    },
    /// Nested construction was requested with a model that has no
    /// sub-array model.
    MissingSubModel,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeLength { length } => {
                write!(f, "length cannot be negative: {length}")
            }
            Self::DirectInstantiation => write!(
                f,
                "structured arrays must not be directly instantiated; use the factory"
            ),
            Self::IndexOutOfBounds { index, length } => {
                write!(f, "index {index} out of bounds for length {length}")
            }
            Self::ElementTypeMismatch { expected, found } => {
                write!(
                    f,
                    "element type mismatch: constructor builds {expected}, model carries {found}"
                )
            }
            Self::InvalidPartitionConfig { reason } => {
                write!(f, "invalid partition config: {reason}")
            }
            Self::CapacityOverflow { length } => {
                write!(f, "length {length} exceeds addressable capacity")
            }
            Self::AllocationFailed { slots } => {
                write!(f, "failed to allocate {slots} slots")
            }
            Self::PartitionTableAllocationFailed { partitions } => {
                write!(f, "failed to allocate a table of {partitions} partitions")
            }
            Self::MissingSubModel => write!(f, "model has no sub-array model"),
        }
    }
}

impl Error for LayoutError {}

/// A placement failure: either the array machinery refused the request,
/// or the caller's constructor failed.
///
/// Constructor errors are carried unchanged in [`PlacementError::Constructor`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementError<E> {
    /// Gate, bounds or allocation failure.
    Layout(LayoutError),
    /// The supplied constructor returned an error.
    Constructor(E),
}

impl<E> PlacementError<E> {
    /// The constructor error, if this is one.
    pub fn constructor_error(&self) -> Option<&E> {
        match self {
            Self::Constructor(e) => Some(e),
            Self::Layout(_) => None,
        }
    }

    /// The layout error, if this is one.
    pub fn layout_error(&self) -> Option<&LayoutError> {
        match self {
            Self::Layout(e) => Some(e),
            Self::Constructor(_) => None,
        }
    }
}

impl<E> From<LayoutError> for PlacementError<E> {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}

impl<E: fmt::Display> fmt::Display for PlacementError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(e) => write!(f, "{e}"),
            Self::Constructor(e) => write!(f, "element constructor failed: {e}"),
        }
    }
}

impl<E: Error + 'static> Error for PlacementError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Layout(e) => Some(e),
            Self::Constructor(e) => Some(e),
        }
    }
}
