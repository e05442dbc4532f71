//! # Array containers and access traits
//!
//! Three capability levels, mirroring the runtime / compile-time duality the
//! whole crate is built around:
//!
//! * [`Array`] - the object-safe base contract. Everything a consumer can do
//!   without knowing the element type: shape queries plus virtual access
//!   that round-trips through `f64`.
//! * [`TypedAccess`] - native-typed access. Implemented by every concrete
//!   array with its storage type, *and* by `dyn Array` itself with
//!   `Elem = f64`. Generic range/accessor code bounded on `TypedAccess +
//!   ?Sized` therefore serves both the monomorphized fast path and the
//!   erased slow path with a single body.
//! * [`Contiguous`] - array-of-structs storage that can hand out its backing
//!   slice, unlocking the slice-backed range specializations.

mod aos;

pub use aos::AosArray;

use crate::meta::{ElemKind, Scalar};
use std::any::Any;

/// Runtime-polymorphic array contract.
///
/// `num_values == num_tuples * num_components` always holds; the component
/// count is fixed at construction and is at least 1. The virtual accessors
/// convert through `f64`, so integer element types wider than 52 bits can
/// lose precision on this path - callers needing exactness resolve the
/// concrete type through [`dispatch`](crate::dispatch) first.
pub trait Array {
    fn num_tuples(&self) -> usize;

    fn num_components(&self) -> usize;

    fn num_values(&self) -> usize {
        self.num_tuples() * self.num_components()
    }

    fn elem_kind(&self) -> ElemKind;

    fn component(&self, tuple: usize, comp: usize) -> f64;

    fn set_component(&mut self, tuple: usize, comp: usize, value: f64);

    /// like `set_component`, but grows the array (zero-filling any gap, in
    /// whole tuples) when `tuple` is past the end
    fn insert_component(&mut self, tuple: usize, comp: usize, value: f64);

    /// copy one tuple's components into `out`; `out.len()` must equal
    /// `num_components`
    fn tuple_into(&self, tuple: usize, out: &mut [f64]);

    /// overwrite one tuple's components from `values`; `values.len()` must
    /// equal `num_components`
    fn set_tuple_from(&mut self, tuple: usize, values: &[f64]);

    fn insert_tuple_from(&mut self, tuple: usize, values: &[f64]);

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Access to an array in its native element type.
///
/// For a concrete array these calls route to (inlineable) direct storage
/// access; for `dyn Array` they route to the virtual `f64` methods. No
/// bounds checking happens here beyond what the storage itself performs -
/// index validity is the caller's contract.
pub trait TypedAccess: Array {
    type Elem: Scalar;

    fn get(&self, tuple: usize, comp: usize) -> Self::Elem;

    fn set(&mut self, tuple: usize, comp: usize, value: Self::Elem);

    fn insert(&mut self, tuple: usize, comp: usize, value: Self::Elem);

    fn get_tuple(&self, tuple: usize, out: &mut [Self::Elem]);

    fn set_tuple(&mut self, tuple: usize, values: &[Self::Elem]);

    fn insert_tuple(&mut self, tuple: usize, values: &[Self::Elem]);
}

// The erased base type accesses itself through the virtual interface, with
// the element type pinned to f64. This is the slow path a dispatch miss
// falls back to.
impl<'x> TypedAccess for (dyn Array + 'x) {
    type Elem = f64;

    #[inline]
    fn get(&self, tuple: usize, comp: usize) -> f64 {
        self.component(tuple, comp)
    }

    #[inline]
    fn set(&mut self, tuple: usize, comp: usize, value: f64) {
        self.set_component(tuple, comp, value)
    }

    #[inline]
    fn insert(&mut self, tuple: usize, comp: usize, value: f64) {
        self.insert_component(tuple, comp, value)
    }

    #[inline]
    fn get_tuple(&self, tuple: usize, out: &mut [f64]) {
        self.tuple_into(tuple, out)
    }

    #[inline]
    fn set_tuple(&mut self, tuple: usize, values: &[f64]) {
        self.set_tuple_from(tuple, values)
    }

    #[inline]
    fn insert_tuple(&mut self, tuple: usize, values: &[f64]) {
        self.insert_tuple_from(tuple, values)
    }
}

/// Contiguous (array-of-structs) storage: tuple `i`'s components occupy
/// `[i * n, (i + 1) * n)` of one backing slice.
///
/// The provided methods construct the slice-backed fast ranges; the generic
/// ranges in [`range`](crate::range) work on any [`TypedAccess`] array and
/// do not require this trait.
pub trait Contiguous: TypedAccess {
    fn as_slice(&self) -> &[Self::Elem];

    fn as_mut_slice(&mut self) -> &mut [Self::Elem];

    fn values(&self) -> crate::range::SliceValues<'_, Self::Elem> {
        crate::range::SliceValues::new(self.as_slice())
    }

    fn values_mut(&mut self) -> crate::range::SliceValuesMut<'_, Self::Elem> {
        crate::range::SliceValuesMut::new(self.as_mut_slice())
    }

    fn tuples(&self) -> crate::range::SliceTuples<'_, Self::Elem> {
        let num_comps = self.num_components();
        crate::range::SliceTuples::new(self.as_slice(), num_comps)
    }

    fn tuples_mut(&mut self) -> crate::range::SliceTuplesMut<'_, Self::Elem> {
        let num_comps = self.num_components();
        crate::range::SliceTuplesMut::new(self.as_mut_slice(), num_comps)
    }

    fn tuples_fixed<const N: usize>(
        &self,
    ) -> crate::range::SliceTuples<'_, Self::Elem, crate::meta::Fixed<N>> {
        use crate::meta::TupleSize;
        let _ = crate::meta::Fixed::<N>::from_array(self);
        crate::range::SliceTuples::fixed(self.as_slice())
    }

    fn tuples_fixed_mut<const N: usize>(
        &mut self,
    ) -> crate::range::SliceTuplesMut<'_, Self::Elem, crate::meta::Fixed<N>> {
        use crate::meta::TupleSize;
        let _ = crate::meta::Fixed::<N>::from_array(self);
        crate::range::SliceTuplesMut::fixed(self.as_mut_slice())
    }
}
