//! Constructor descriptors used for placement construction.
//!
//! A [`CtorAndArgs`] pairs a constructor function with the argument value
//! it will be called with. Arrays invoke it exactly once per placed
//! element and store the result directly into the target slot.

use std::any::type_name;
use std::fmt;

use crate::error::LayoutError;

/// A constructor reference plus its argument value.
///
/// `ctor` is a plain function pointer, so a descriptor is cheap to clone
/// whenever `A` is. Non-capturing closures coerce to it:
///
/// ```
/// use structa_core::{CtorAndArgs, LayoutError};
///
/// let make: CtorAndArgs<u64, u64> = CtorAndArgs::new(|n| Ok(n * 2), 21);
/// assert_eq!(make.construct(), Ok::<_, LayoutError>(42));
/// ```
pub struct CtorAndArgs<T, A = (), E = LayoutError> {
    ctor: fn(A) -> Result<T, E>,
    args: A,
}

impl<T, A, E> CtorAndArgs<T, A, E> {
    /// Pair `ctor` with the `args` it will be invoked with.
    pub fn new(ctor: fn(A) -> Result<T, E>, args: A) -> Self {
        Self { ctor, args }
    }

    /// The constructor function.
    pub fn ctor(&self) -> fn(A) -> Result<T, E> {
        self.ctor
    }

    /// The argument value.
    pub fn args(&self) -> &A {
        &self.args
    }

    /// Replace the argument value, keeping the constructor.
    pub fn with_args(self, args: A) -> Self {
        Self {
            ctor: self.ctor,
            args,
        }
    }

    /// Invoke the constructor, consuming the descriptor.
    pub fn construct(self) -> Result<T, E> {
        (self.ctor)(self.args)
    }
}

impl<T, E> CtorAndArgs<T, (), E> {
    /// A descriptor for a constructor that takes no arguments.
    pub fn nullary(ctor: fn(()) -> Result<T, E>) -> Self {
        Self::new(ctor, ())
    }
}

impl<T, A: Clone, E> Clone for CtorAndArgs<T, A, E> {
    fn clone(&self) -> Self {
        Self {
            ctor: self.ctor,
            args: self.args.clone(),
        }
    }
}

impl<T, A: fmt::Debug, E> fmt::Debug for CtorAndArgs<T, A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CtorAndArgs")
            .field("builds", &type_name::<T>())
            .field("args", &self.args)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(args: (u32, &'static str)) -> Result<(u32, String), LayoutError> {
        Ok((args.0, args.1.to_string()))
    }

    #[test]
    fn construct_passes_args_through() {
        let c = CtorAndArgs::new(pair, (7, "seven"));
        assert_eq!(c.construct().unwrap(), (7, "seven".to_string()));
    }

    #[test]
    fn clone_is_independent_of_original() {
        let c = CtorAndArgs::new(pair, (1, "one"));
        let d = c.clone().with_args((2, "two"));
        assert_eq!(c.args(), &(1, "one"));
        assert_eq!(d.construct().unwrap().0, 2);
    }

    #[test]
    fn nullary_ctor_takes_unit() {
        let c: CtorAndArgs<u8> = CtorAndArgs::nullary(|()| Ok(9));
        assert_eq!(c.construct(), Ok(9));
    }

    #[test]
    fn errors_are_returned_unchanged() {
        let c: CtorAndArgs<u8, (), &'static str> = CtorAndArgs::nullary(|()| Err("nope"));
        assert_eq!(c.construct(), Err("nope"));
    }

    #[test]
    fn debug_names_built_type() {
        let c: CtorAndArgs<u16, u8> = CtorAndArgs::new(|n| Ok(n as u16), 3);
        let s = format!("{c:?}");
        assert!(s.contains("u16"));
        assert!(s.contains('3'));
    }
}
