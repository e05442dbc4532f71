//! # Value and tuple ranges
//!
//! A range is a stack-scoped view over `[begin, end)` of one borrowed array.
//! Value ranges erase tuple boundaries and present every scalar in flat
//! order; tuple ranges present tuple views that are themselves small
//! random-access sequences of components.
//!
//! Each family has two implementations with the same surface:
//!
//! * the *generic* ranges in this module's free functions work on any
//!   [`TypedAccess`] array - a concrete `AosArray<T>` (monomorphized, fast)
//!   or `dyn Array` (virtual, slow) - by routing every access through
//!   [`Accessor`](crate::Accessor);
//! * the *slice-backed* ranges ([`SliceValues`], [`SliceTuples`], ...) are
//!   built from [`Contiguous`](crate::Contiguous) storage and compile down
//!   to plain slice iteration. They also carry the operations only
//!   contiguity can offer: `iter_mut` handing out real `&mut` references,
//!   and `split_at_mut` for disjoint parallel partitions.
//!
//! Sub-ranges compose: `range.sub_range(a, Some(b))` indexes relative to
//! `range`'s begin, so partitioning a range partitions exactly its portion
//! of the array, never more.

mod tuple_generic;
mod tuple_slice;
mod value_generic;
mod value_slice;

pub use tuple_generic::{
    ComponentIter, TupleCursorMut, TupleIter, TupleRange, TupleRangeMut, TupleRef, TupleRefMut,
};
pub use tuple_slice::{SliceTuples, SliceTuplesMut};
pub use value_generic::{swap_values, ValueCursorMut, ValueIter, ValueRange, ValueRangeMut, ValueRefMut};
pub use value_slice::{SliceValues, SliceValuesMut};

use crate::array::TypedAccess;
use crate::meta::{Dynamic, Fixed};

/// Every value of `array`, in flat order.
pub fn values<A: TypedAccess + ?Sized>(array: &A) -> ValueRange<'_, A, Dynamic> {
    ValueRange::new(array)
}

/// Every value of `array`, in flat order, mutably.
pub fn values_mut<A: TypedAccess + ?Sized>(array: &mut A) -> ValueRangeMut<'_, A, Dynamic> {
    ValueRangeMut::new(array)
}

/// Like [`values`], with the tuple size pinned at compile time.
pub fn values_fixed<const N: usize, A: TypedAccess + ?Sized>(
    array: &A,
) -> ValueRange<'_, A, Fixed<N>> {
    ValueRange::new(array)
}

/// Like [`values_mut`], with the tuple size pinned at compile time.
pub fn values_fixed_mut<const N: usize, A: TypedAccess + ?Sized>(
    array: &mut A,
) -> ValueRangeMut<'_, A, Fixed<N>> {
    ValueRangeMut::new(array)
}

/// Every tuple of `array`.
pub fn tuples<A: TypedAccess + ?Sized>(array: &A) -> TupleRange<'_, A, Dynamic> {
    TupleRange::new(array)
}

/// Every tuple of `array`, mutably.
pub fn tuples_mut<A: TypedAccess + ?Sized>(array: &mut A) -> TupleRangeMut<'_, A, Dynamic> {
    TupleRangeMut::new(array)
}

/// Like [`tuples`], with the tuple size pinned at compile time.
///
/// Pinning the size lets the compiler unroll per-component loops and unlocks
/// the `[T; N]` read/write surface on the tuple references.
pub fn tuples_fixed<const N: usize, A: TypedAccess + ?Sized>(
    array: &A,
) -> TupleRange<'_, A, Fixed<N>> {
    TupleRange::new(array)
}

/// Like [`tuples_mut`], with the tuple size pinned at compile time.
pub fn tuples_fixed_mut<const N: usize, A: TypedAccess + ?Sized>(
    array: &mut A,
) -> TupleRangeMut<'_, A, Fixed<N>> {
    TupleRangeMut::new(array)
}
