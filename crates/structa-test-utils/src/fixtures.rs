//! Reusable element and array fixtures.
//!
//! - [`point`]: builds a [`Point`] from its coordinates.
//! - [`counted_point`]: like `point`, but bumps a shared counter per call.
//! - [`failing_point`]: always fails with a [`FixtureFailure`].
//! - [`Grid`]: a labelled array of points built through the factory.

use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use structa::{instantiate, ArrayModel, CtorAndArgs, LayoutError, PlacementError, StructuredArrayBase};

/// A small value type used as an array element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

/// Failure raised by the fixture constructors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureFailure {
    pub reason: String,
}

impl fmt::Display for FixtureFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fixture failure: {}", self.reason)
    }
}

impl Error for FixtureFailure {}

/// Error type shared by every fixture constructor.
pub type FixtureError = PlacementError<FixtureFailure>;

pub fn point(args: (i64, i64)) -> Result<Point, FixtureError> {
    Ok(Point {
        x: args.0,
        y: args.1,
    })
}

/// Builds `Point { x: value, y: 0 }` and increments `counter`.
pub fn counted_point(args: (Arc<AtomicUsize>, i64)) -> Result<Point, FixtureError> {
    let (counter, value) = args;
    counter.fetch_add(1, Ordering::SeqCst);
    Ok(Point { x: value, y: 0 })
}

pub fn failing_point(args: (i64, i64)) -> Result<Point, FixtureError> {
    Err(PlacementError::Constructor(FixtureFailure {
        reason: format!("refused ({}, {})", args.0, args.1),
    }))
}

/// A labelled array of points.
///
/// Its gated constructor takes a label, which the construction gate does
/// not know about; length and element type still arrive via the gate.
pub struct Grid {
    pub label: String,
    pub points: StructuredArrayBase<Point>,
}

impl Grid {
    /// Gated constructor.
    pub fn gated(label: String) -> Result<Self, FixtureError> {
        Ok(Self {
            label,
            points: StructuredArrayBase::from_gate()?,
        })
    }

    /// Build an empty grid of `length` slots through the factory.
    pub fn new(label: &str, length: i64) -> Result<Self, FixtureError> {
        instantiate(
            &ArrayModel::new::<Point>(length),
            CtorAndArgs::new(Self::gated, label.to_string()),
        )
    }

    /// Place `point(x, y)` at `index`.
    pub fn place(&mut self, index: u64, x: i64, y: i64) -> Result<(), FixtureError> {
        self.points
            .construct_element_at(index, CtorAndArgs::new(point, (x, y)))
    }

    pub fn get(&self, index: u64) -> Result<Option<&Point>, LayoutError> {
        self.points.get(index)
    }
}
