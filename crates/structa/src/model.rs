//! Array models: element type, length, and nesting.

use smallvec::SmallVec;
use structa_arena::PartitionConfig;
use structa_core::{ElementType, LayoutError};

use crate::array::StructuredArray;
use crate::gate::GateParams;

/// Describes the shape of a structured array before it exists.
///
/// A model names the element type and the length. For arrays of arrays
/// it also carries the model of each sub-array, so a 2-D layout is an
/// outer model whose element type is `StructuredArray<U>` and whose
/// sub-model describes the rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayModel {
    element_type: ElementType,
    length: i64,
    partitions: PartitionConfig,
    sub_model: Option<Box<ArrayModel>>,
}

impl ArrayModel {
    /// A flat array of `length` elements of type `T`.
    pub fn new<T: 'static>(length: i64) -> Self {
        Self {
            element_type: ElementType::of::<T>(),
            length,
            partitions: PartitionConfig::DEFAULT,
            sub_model: None,
        }
    }

    /// An array of `length` sub-arrays, each described by `sub_model`,
    /// holding elements of type `U`.
    ///
    /// Fails with [`LayoutError::ElementTypeMismatch`] when `sub_model`
    /// does not hold `U`.
    pub fn nested<U: 'static>(length: i64, sub_model: ArrayModel) -> Result<Self, LayoutError> {
        let expected = ElementType::of::<U>();
        if sub_model.element_type != expected {
            return Err(LayoutError::ElementTypeMismatch {
                expected,
                found: sub_model.element_type,
            });
        }
        Ok(Self {
            element_type: ElementType::of::<StructuredArray<U>>(),
            length,
            partitions: PartitionConfig::DEFAULT,
            sub_model: Some(Box::new(sub_model)),
        })
    }

    /// Use a non-default partition geometry for this level.
    pub fn with_partitions(mut self, partitions: PartitionConfig) -> Self {
        self.partitions = partitions;
        self
    }

    /// Element type identity.
    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    /// Declared length, as supplied.
    pub fn length(&self) -> i64 {
        self.length
    }

    /// Partition geometry.
    pub fn partitions(&self) -> &PartitionConfig {
        &self.partitions
    }

    /// The sub-array model, for arrays of arrays.
    pub fn sub_model(&self) -> Option<&ArrayModel> {
        self.sub_model.as_deref()
    }

    /// Number of nesting levels (1 for a flat array).
    pub fn depth(&self) -> usize {
        1 + self.sub_model().map_or(0, ArrayModel::depth)
    }

    /// Per-level lengths, outermost first.
    pub fn lengths(&self) -> SmallVec<[i64; 4]> {
        let mut lengths = SmallVec::new();
        let mut level = Some(self);
        while let Some(model) = level {
            lengths.push(model.length);
            level = model.sub_model();
        }
        lengths
    }

    /// Check every level's length and partition geometry.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.length < 0 {
            return Err(LayoutError::NegativeLength {
                length: self.length,
            });
        }
        self.partitions.validate()?;
        match self.sub_model() {
            Some(sub) => sub.validate(),
            None => Ok(()),
        }
    }

    pub(crate) fn gate_params(&self) -> GateParams {
        GateParams {
            element_type: self.element_type,
            length: self.length,
            partitions: self.partitions,
        }
    }
}
