#![doc = include_str!("../README.md")]

pub mod accessor;
pub mod array;
pub mod dispatch;
pub mod meta;
pub mod prelude;
pub mod range;
mod utils;

pub use meta::{Dynamic, ElemKind, Fixed, Scalar, TupleSize};

pub use array::{AosArray, Array, Contiguous, TypedAccess};

pub use accessor::{Accessor, AccessorMut};

pub use range::{SliceTuples, SliceTuplesMut, SliceValues, SliceValuesMut};
pub use range::{TupleRange, TupleRangeMut, TupleRef, TupleRefMut};
pub use range::{ValueRange, ValueRangeMut, ValueRefMut};

pub use dispatch::{dispatch, dispatch_mut, ArrayVisitor, ArrayVisitorMut};

pub use ndarray;

/// general purpose error enumeration for possible causes of failure.
///
/// Hot-path range and accessor operations never construct this type; contract
/// violations there are assertions (see the `debug_ranges` feature). `Error`
/// only appears at the construction / interop / dispatch boundary.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("buffer of `{len}` values cannot be split into tuples of `{components}` components")]
    ShapeMismatch { len: usize, components: usize },
    #[error("array stores `{found}` values but `{requested}` access was requested")]
    ElemMismatch { requested: ElemKind, found: ElemKind },
}
