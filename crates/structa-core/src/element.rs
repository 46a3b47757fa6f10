//! Runtime identity of an array's element type.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifies the element type stored by a structured array.
///
/// Equality and hashing use the [`TypeId`] only; the type name is kept
/// for diagnostics and is not guaranteed to be unique or stable across
/// compiler versions.
#[derive(Clone, Copy, Debug)]
pub struct ElementType {
    id: TypeId,
    name: &'static str,
}

impl ElementType {
    /// The element type identity of `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The underlying [`TypeId`].
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Human-readable type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this identity names `T`.
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for ElementType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ElementType {}

impl Hash for ElementType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_type_compares_equal() {
        assert_eq!(ElementType::of::<u32>(), ElementType::of::<u32>());
    }

    #[test]
    fn distinct_types_compare_unequal() {
        assert_ne!(ElementType::of::<u32>(), ElementType::of::<i32>());
        assert_ne!(ElementType::of::<Vec<u8>>(), ElementType::of::<Vec<u16>>());
    }

    #[test]
    fn is_matches_only_its_own_type() {
        let ty = ElementType::of::<String>();
        assert!(ty.is::<String>());
        assert!(!ty.is::<&str>());
    }

    #[test]
    fn display_uses_type_name() {
        let ty = ElementType::of::<u64>();
        assert_eq!(ty.to_string(), "u64");
        assert_eq!(ty.name(), "u64");
    }

    #[test]
    fn hash_agrees_with_eq() {
        let mut set = std::collections::HashSet::new();
        set.insert(ElementType::of::<u8>());
        set.insert(ElementType::of::<u8>());
        set.insert(ElementType::of::<u16>());
        assert_eq!(set.len(), 2);
    }
}
