//! Common traits and types that are useful for working with `data-range`
#![allow(unused_imports)]

pub use crate::accessor::{Accessor, AccessorMut};
pub use crate::array::{AosArray, Array, Contiguous, TypedAccess};
pub use crate::dispatch::{dispatch, dispatch_mut, ArrayVisitor, ArrayVisitorMut};
pub use crate::meta::{Dynamic, ElemKind, Fixed, Scalar, TupleSize};
pub use crate::range::{
    SliceTuples, SliceTuplesMut, SliceValues, SliceValuesMut, TupleRange, TupleRangeMut, TupleRef,
    TupleRefMut, ValueRange, ValueRangeMut, ValueRefMut,
};
pub use crate::Error;

pub(crate) use crate::utils::{for_each_scalar, range_assert};
