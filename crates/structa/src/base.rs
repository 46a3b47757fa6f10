//! The gated container that structured array types embed.

use structa_arena::PartitionedStorage;
use structa_core::{CtorAndArgs, ElementType, LayoutError};
use tracing::debug;

use crate::gate::{self, GateGuard};
use crate::model::ArrayModel;

/// Fixed-length, long-addressable element storage that can only be
/// created from inside a factory call.
///
/// Array types embed a `StructuredArrayBase<T>` and build it with
/// [`from_gate`](Self::from_gate) in their gated constructor. Elements
/// enter only through placement ([`construct_element_at`](Self::construct_element_at)
/// and [`construct_sub_array_at`](Self::construct_sub_array_at)); there is
/// no way to store an arbitrary value into an empty slot.
pub struct StructuredArrayBase<T> {
    element_type: ElementType,
    storage: PartitionedStorage<T>,
}

impl<T: 'static> StructuredArrayBase<T> {
    /// Consume the current thread's gate and allocate storage from it.
    ///
    /// Must be called from a constructor invoked by
    /// [`instantiate`](crate::instantiate) or by
    /// [`construct_sub_array_at`](Self::construct_sub_array_at). Fails with
    /// [`LayoutError::DirectInstantiation`] otherwise. The gate is closed
    /// before validation, so a rejected length or element type never
    /// leaves it armed.
    pub fn from_gate() -> Result<Self, LayoutError> {
        let params = gate::consume()?;

        let expected = ElementType::of::<T>();
        if params.element_type != expected {
            debug!(
                %expected,
                found = %params.element_type,
                "gated constructor element type mismatch"
            );
            return Err(LayoutError::ElementTypeMismatch {
                expected,
                found: params.element_type,
            });
        }

        let storage = PartitionedStorage::allocate(params.length, params.partitions)?;
        Ok(Self {
            element_type: params.element_type,
            storage,
        })
    }
}

impl<T> StructuredArrayBase<T> {
    /// Build one element with `ctor_and_args` and place it at `index`.
    ///
    /// The index is checked before the constructor runs. A constructor
    /// error is returned unchanged and leaves the slot as it was.
    pub fn construct_element_at<A, E>(
        &mut self,
        index: u64,
        ctor_and_args: CtorAndArgs<T, A, E>,
    ) -> Result<(), E>
    where
        E: From<LayoutError>,
    {
        let slot = self.storage.slot_mut(index)?;
        *slot = Some(ctor_and_args.construct()?);
        Ok(())
    }

    /// Build a sub-array described by `sub_model` with `ctor_and_args` and
    /// place it at `index`.
    ///
    /// The gate is armed with `sub_model` for the duration of the
    /// constructor call only and disarmed before any error propagates.
    pub fn construct_sub_array_at<A, E>(
        &mut self,
        index: u64,
        sub_model: &ArrayModel,
        ctor_and_args: CtorAndArgs<T, A, E>,
    ) -> Result<(), E>
    where
        E: From<LayoutError>,
    {
        let slot = self.storage.slot_mut(index)?;
        let sub_array = {
            let _guard = GateGuard::arm(sub_model.gate_params());
            ctor_and_args.construct()?
        };
        *slot = Some(sub_array);
        Ok(())
    }

    /// The element at `index`, or `None` if nothing has been placed there.
    #[inline]
    pub fn get(&self, index: u64) -> Result<Option<&T>, LayoutError> {
        self.storage.read(index)
    }

    /// Mutable access to the element at `index`.
    #[inline]
    pub fn get_mut(&mut self, index: u64) -> Result<Option<&mut T>, LayoutError> {
        self.storage.read_mut(index)
    }

    /// Element type identity this array was built for.
    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    /// Number of slots.
    pub fn len(&self) -> u64 {
        self.storage.len()
    }

    /// Whether the array has no slots.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// The backing partitioned storage.
    pub fn storage(&self) -> &PartitionedStorage<T> {
        &self.storage
    }
}
