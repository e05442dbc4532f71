//! # Dispatch gate
//!
//! Resolves a runtime-typed `&dyn Array` handle to one of the closed set of
//! concrete [`AosArray<T>`] types, so a generic algorithm can be
//! instantiated against the matched type without virtual-call overhead. On a
//! miss the same algorithm body runs against the erased base type - the
//! ranges and accessors behave identically in both instantiations, so the
//! visitor needs no special-casing:
//!
//! ```
//! use data_range::prelude::*;
//! use data_range::{dispatch, range, ArrayVisitor};
//!
//! struct Sum;
//!
//! impl ArrayVisitor for Sum {
//!     type Output = f64;
//!
//!     fn typed<T: Scalar>(self, array: &AosArray<T>) -> f64 {
//!         range::values(array)
//!             .iter()
//!             .map(|v| num_traits::AsPrimitive::<f64>::as_(v))
//!             .sum()
//!     }
//!
//!     fn fallback(self, array: &dyn Array) -> f64 {
//!         range::values(array).iter().sum()
//!     }
//! }
//!
//! let array = AosArray::from_vec(vec![1_u16, 2, 3], 1).unwrap();
//! assert_eq!(dispatch(&array as &dyn Array, Sum), 6.0);
//! ```

use crate::array::{AosArray, Array};
use crate::meta::Scalar;
use crate::utils::for_each_scalar;
use crate::Error;

/// A generic algorithm body to run against a resolved array.
///
/// `typed` is instantiated once per concrete element type the gate can
/// resolve; `fallback` handles arrays outside the candidate set through the
/// erased (virtual, `f64`) interface.
pub trait ArrayVisitor {
    type Output;

    fn typed<T: Scalar>(self, array: &AosArray<T>) -> Self::Output;

    fn fallback(self, array: &dyn Array) -> Self::Output;
}

/// Mutable-access analogue of [`ArrayVisitor`].
pub trait ArrayVisitorMut {
    type Output;

    fn typed<T: Scalar>(self, array: &mut AosArray<T>) -> Self::Output;

    fn fallback(self, array: &mut dyn Array) -> Self::Output;
}

/// Resolve `array` to its concrete type and run `visitor` against it, or
/// against the erased base type when the concrete type is not in the
/// candidate set.
pub fn dispatch<V: ArrayVisitor>(array: &dyn Array, visitor: V) -> V::Output {
    macro_rules! probe {
        ($t:ty, $kind:ident) => {
            if let Some(typed) = array.as_any().downcast_ref::<AosArray<$t>>() {
                return visitor.typed(typed);
            }
        };
    }

    for_each_scalar!(probe);

    visitor.fallback(array)
}

/// Mutable-access analogue of [`dispatch`].
pub fn dispatch_mut<V: ArrayVisitorMut>(array: &mut dyn Array, visitor: V) -> V::Output {
    macro_rules! probe {
        ($t:ty, $kind:ident) => {
            if array.as_any().is::<AosArray<$t>>() {
                let typed = array
                    .as_any_mut()
                    .downcast_mut::<AosArray<$t>>()
                    .expect("probed concrete type");
                return visitor.typed(typed);
            }
        };
    }

    for_each_scalar!(probe);

    visitor.fallback(array)
}

/// Downcast to one known element type, for call sites that only accept a
/// single concrete array kind.
pub fn downcast_values<T: Scalar>(array: &dyn Array) -> Result<&AosArray<T>, Error> {
    array
        .as_any()
        .downcast_ref::<AosArray<T>>()
        .ok_or(Error::ElemMismatch {
            requested: T::KIND,
            found: array.elem_kind(),
        })
}

/// Mutable analogue of [`downcast_values`].
pub fn downcast_values_mut<T: Scalar>(array: &mut dyn Array) -> Result<&mut AosArray<T>, Error> {
    let found = array.elem_kind();
    array
        .as_any_mut()
        .downcast_mut::<AosArray<T>>()
        .ok_or(Error::ElemMismatch {
            requested: T::KIND,
            found,
        })
}
