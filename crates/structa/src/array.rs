//! The public structured array type.

use structa_core::{CtorAndArgs, ElementType, LayoutError};

use crate::base::StructuredArrayBase;
use crate::factory::instantiate;
use crate::model::ArrayModel;

/// A fixed-length array whose elements are built in place.
///
/// Instances exist only through the constructors below, all of which go
/// through [`instantiate`]. Every slot is populated at creation, so
/// lookups within bounds always find an element.
///
/// ```
/// use structa::{ArrayModel, CtorAndArgs, LayoutError, StructuredArray};
///
/// fn cell(index: u64) -> Result<u64, LayoutError> {
///     Ok(index * 10)
/// }
///
/// let model = ArrayModel::new::<u64>(4);
/// let array = StructuredArray::new_instance(&model, |i| CtorAndArgs::new(cell, i)).unwrap();
/// assert_eq!(array.get(3).unwrap(), Some(&30));
/// ```
pub struct StructuredArray<T> {
    base: StructuredArrayBase<T>,
}

impl<T: 'static> StructuredArray<T> {
    /// Gated constructor; only succeeds inside a factory call.
    fn gated<E: From<LayoutError>>(_: ()) -> Result<Self, E> {
        Ok(Self {
            base: StructuredArrayBase::from_gate()?,
        })
    }

    /// Build an array described by `model`, placing the element produced
    /// by `element(index)` at each index in order.
    ///
    /// Stops at the first constructor error and returns it unchanged.
    pub fn new_instance<A, E, F>(model: &ArrayModel, mut element: F) -> Result<Self, E>
    where
        E: From<LayoutError>,
        F: FnMut(u64) -> CtorAndArgs<T, A, E>,
    {
        let mut array = instantiate(model, CtorAndArgs::nullary(Self::gated::<E>))?;
        for index in 0..array.len() {
            array.base.construct_element_at(index, element(index))?;
        }
        Ok(array)
    }

    /// Build an array described by `model` with every element set to
    /// `T::default()`.
    pub fn new_default(model: &ArrayModel) -> Result<Self, LayoutError>
    where
        T: Default,
    {
        Self::new_instance(model, |_| CtorAndArgs::nullary(default_element::<T>))
    }

    /// Gated constructor for a sub-array: claims the gate, then fills every
    /// slot from a clone of `leaf`.
    fn gated_filled<A: Clone, E: From<LayoutError>>(leaf: CtorAndArgs<T, A, E>) -> Result<Self, E> {
        let mut base = StructuredArrayBase::from_gate()?;
        for index in 0..base.len() {
            base.construct_element_at(index, leaf.clone())?;
        }
        Ok(Self { base })
    }
}

impl<T> StructuredArray<T> {
    /// The element at `index`.
    #[inline]
    pub fn get(&self, index: u64) -> Result<Option<&T>, LayoutError> {
        self.base.get(index)
    }

    /// Mutable access to the element at `index`.
    #[inline]
    pub fn get_mut(&mut self, index: u64) -> Result<Option<&mut T>, LayoutError> {
        self.base.get_mut(index)
    }

    /// Number of elements.
    pub fn len(&self) -> u64 {
        self.base.len()
    }

    /// Whether the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Element type identity.
    pub fn element_type(&self) -> ElementType {
        self.base.element_type()
    }

    /// The underlying gated container.
    pub fn base(&self) -> &StructuredArrayBase<T> {
        &self.base
    }
}

impl<U: 'static> StructuredArray<StructuredArray<U>> {
    /// Build an array of arrays described by a nested `model`.
    ///
    /// Each outer slot receives its own gated sub-array, sized by
    /// `model.sub_model()` and filled from clones of `leaf`. Fails with
    /// [`LayoutError::MissingSubModel`] if the model is flat.
    ///
    /// ```
    /// use structa::{ArrayModel, CtorAndArgs, LayoutError, StructuredArray};
    ///
    /// let rows = ArrayModel::new::<i32>(4);
    /// let grid = ArrayModel::nested::<i32>(3, rows).unwrap();
    /// let zero: CtorAndArgs<i32> = CtorAndArgs::nullary(|()| Ok(0));
    /// let mut g = StructuredArray::new_nested(&grid, zero).unwrap();
    /// *g.get_mut(2).unwrap().unwrap().get_mut(1).unwrap().unwrap() = 7;
    /// assert_eq!(g.get(2).unwrap().unwrap().get(1).unwrap(), Some(&7));
    /// ```
    pub fn new_nested<A, E>(model: &ArrayModel, leaf: CtorAndArgs<U, A, E>) -> Result<Self, E>
    where
        A: Clone,
        E: From<LayoutError>,
    {
        let sub_model = model.sub_model().ok_or(LayoutError::MissingSubModel)?;
        let mut array = instantiate(model, CtorAndArgs::nullary(Self::gated::<E>))?;
        for index in 0..array.len() {
            let rows = CtorAndArgs::new(StructuredArray::<U>::gated_filled::<A, E>, leaf.clone());
            array.base.construct_sub_array_at(index, sub_model, rows)?;
        }
        Ok(array)
    }
}

fn default_element<T: Default>(_: ()) -> Result<T, LayoutError> {
    Ok(T::default())
}
