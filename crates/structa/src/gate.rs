//! The construction gate.
//!
//! Structured arrays can only be created through the factory. The factory
//! arms a per-thread gate with the layout parameters of the array it is
//! about to build, then calls the caller-supplied constructor. Inside that
//! constructor, [`StructuredArrayBase::from_gate`](crate::StructuredArrayBase::from_gate)
//! consumes the parameters exactly once and closes the gate. A gated
//! constructor called any other way finds the gate idle and fails with
//! [`LayoutError::DirectInstantiation`].
//!
//! ```text
//!          arm (GateGuard::arm)            consume (from_gate)
//!   Idle ───────────────────────▶ Armed ───────────────────────▶ Idle
//!     ▲                              │
//!     └──────── GateGuard::drop ─────┘   (every exit path)
//! ```
//!
//! State lives in a `thread_local!`, so factory calls on different threads
//! never observe each other's parameters. Nested construction (a sub-array
//! built while populating an outer array) re-arms the gate around the
//! inner constructor only; the guard restores whatever state was in place
//! before it armed.

use std::cell::Cell;

use structa_arena::PartitionConfig;
use structa_core::{ElementType, LayoutError};
use tracing::{debug, trace};

/// Layout parameters handed from a factory call to a gated constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct GateParams {
    pub(crate) element_type: ElementType,
    pub(crate) length: i64,
    pub(crate) partitions: PartitionConfig,
}

#[derive(Clone, Copy, Debug)]
struct GateState {
    active: bool,
    pending: Option<GateParams>,
}

impl GateState {
    const IDLE: Self = Self {
        active: false,
        pending: None,
    };
}

thread_local! {
    static GATE: Cell<GateState> = const { Cell::new(GateState::IDLE) };
}

/// Scoped arming of the current thread's gate.
///
/// Arming twice without a gated constructor call in between is a caller
/// bug: the second arm replaces the first's parameters until it drops.
#[must_use = "the gate is disarmed as soon as the guard is dropped"]
pub(crate) struct GateGuard {
    previous: GateState,
}

impl GateGuard {
    /// Arm the gate with `params` until the returned guard drops.
    pub(crate) fn arm(params: GateParams) -> Self {
        let previous = GATE.with(|gate| {
            gate.replace(GateState {
                active: true,
                pending: Some(params),
            })
        });
        trace!(
            element_type = %params.element_type,
            length = params.length,
            "construction gate armed"
        );
        Self { previous }
    }
}

impl Drop for GateGuard {
    fn drop(&mut self) {
        GATE.with(|gate| gate.set(self.previous));
        trace!(restored_active = self.previous.active, "construction gate disarmed");
    }
}

/// Take the pending parameters and close the gate.
///
/// Fails with [`LayoutError::DirectInstantiation`] when the gate is idle.
pub(crate) fn consume() -> Result<GateParams, LayoutError> {
    GATE.with(|gate| match gate.get() {
        GateState {
            active: true,
            pending: Some(params),
        } => {
            gate.set(GateState::IDLE);
            Ok(params)
        }
        _ => {
            debug!("gated constructor called outside a factory call");
            Err(LayoutError::DirectInstantiation)
        }
    })
}

/// Whether the current thread's gate is armed.
pub fn is_armed() -> bool {
    GATE.with(|gate| gate.get().active)
}
