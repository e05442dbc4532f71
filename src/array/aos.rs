use crate::meta::{ElemKind, Scalar};
use crate::utils::range_assert;
use crate::Error;

use super::{Array, Contiguous, TypedAccess};

use derive_more::Deref;
use ndarray::Array2;
use num_traits::AsPrimitive;
use std::any::Any;

/// Array-of-structs data array: every component of tuple `i` is adjacent in
/// memory.
///
/// The component count is fixed at construction (at least 1) and the backing
/// buffer always holds whole tuples. This is the concrete type the
/// [dispatch gate](crate::dispatch) resolves erased handles to, and the only
/// array in this crate whose ranges have a slice-backed fast path.
///
/// ## Example
///
/// ```
/// use data_range::{AosArray, Array};
///
/// // two 3-component tuples
/// let array = AosArray::from_vec(vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0], 3).unwrap();
/// assert_eq!(array.num_tuples(), 2);
/// ```
#[derive(Deref, Debug, Clone, PartialEq)]
pub struct AosArray<T> {
    #[deref]
    data: Vec<T>,
    num_components: usize,
}

impl<T: Scalar> AosArray<T> {
    /// an empty array with the given component count
    pub fn new(num_components: usize) -> Self {
        assert!(num_components > 0, "arrays must have at least one component");
        Self {
            data: Vec::new(),
            num_components,
        }
    }

    /// `num_tuples` tuples of `num_components` zeros
    pub fn zeros(num_tuples: usize, num_components: usize) -> Self {
        assert!(num_components > 0, "arrays must have at least one component");
        Self {
            data: vec![T::ZERO; num_tuples * num_components],
            num_components,
        }
    }

    /// Wrap a flat buffer of interleaved tuples.
    ///
    /// Fails when the buffer does not divide evenly into `num_components`
    /// sized tuples (or when `num_components` is zero).
    pub fn from_vec(data: Vec<T>, num_components: usize) -> Result<Self, Error> {
        if num_components == 0 || data.len() % num_components != 0 {
            return Err(Error::ShapeMismatch {
                len: data.len(),
                components: num_components,
            });
        }

        Ok(Self {
            data,
            num_components,
        })
    }

    /// append one tuple to the end of the array
    pub fn push_tuple(&mut self, values: &[T]) {
        range_assert!(
            values.len() == self.num_components,
            "pushed tuple length must match the component count"
        );
        self.data.extend_from_slice(values);
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// View as a `(tuples, components)` matrix.
    pub fn to_array2(&self) -> Array2<T> {
        Array2::from_shape_vec((self.num_tuples(), self.num_components), self.data.clone())
            .expect("the buffer always holds whole tuples")
    }

    /// index of `(tuple, comp)` in the backing buffer
    #[inline]
    fn flat(&self, tuple: usize, comp: usize) -> usize {
        range_assert!(
            comp < self.num_components,
            "component index past the tuple size"
        );
        tuple * self.num_components + comp
    }

    /// grow (zero-filled, whole tuples) so that `tuple` is addressable
    fn reserve_through(&mut self, tuple: usize) {
        let needed = (tuple + 1) * self.num_components;
        if needed > self.data.len() {
            self.data.resize(needed, T::ZERO);
        }
    }
}

impl<T: Scalar> From<Array2<T>> for AosArray<T> {
    /// rows become tuples, columns become components
    fn from(matrix: Array2<T>) -> Self {
        let num_components = matrix.ncols();
        assert!(num_components > 0, "arrays must have at least one component");
        Self {
            // iteration is in logical (row-major) order regardless of the
            // matrix's memory layout
            data: matrix.iter().copied().collect(),
            num_components,
        }
    }
}

impl<T: Scalar> Array for AosArray<T> {
    fn num_tuples(&self) -> usize {
        self.data.len() / self.num_components
    }

    fn num_components(&self) -> usize {
        self.num_components
    }

    fn num_values(&self) -> usize {
        self.data.len()
    }

    fn elem_kind(&self) -> ElemKind {
        T::KIND
    }

    fn component(&self, tuple: usize, comp: usize) -> f64 {
        self.get(tuple, comp).as_()
    }

    fn set_component(&mut self, tuple: usize, comp: usize, value: f64) {
        self.set(tuple, comp, T::from_f64(value));
    }

    fn insert_component(&mut self, tuple: usize, comp: usize, value: f64) {
        self.insert(tuple, comp, T::from_f64(value));
    }

    fn tuple_into(&self, tuple: usize, out: &mut [f64]) {
        range_assert!(
            out.len() == self.num_components,
            "output buffer length must match the component count"
        );
        let base = self.flat(tuple, 0);
        for (comp, slot) in out.iter_mut().enumerate() {
            *slot = self.data[base + comp].as_();
        }
    }

    fn set_tuple_from(&mut self, tuple: usize, values: &[f64]) {
        range_assert!(
            values.len() == self.num_components,
            "input buffer length must match the component count"
        );
        let base = self.flat(tuple, 0);
        for (comp, value) in values.iter().enumerate() {
            self.data[base + comp] = T::from_f64(*value);
        }
    }

    fn insert_tuple_from(&mut self, tuple: usize, values: &[f64]) {
        self.reserve_through(tuple);
        self.set_tuple_from(tuple, values);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl<T: Scalar> TypedAccess for AosArray<T> {
    type Elem = T;

    #[inline]
    fn get(&self, tuple: usize, comp: usize) -> T {
        self.data[self.flat(tuple, comp)]
    }

    #[inline]
    fn set(&mut self, tuple: usize, comp: usize, value: T) {
        let index = self.flat(tuple, comp);
        self.data[index] = value;
    }

    #[inline]
    fn insert(&mut self, tuple: usize, comp: usize, value: T) {
        self.reserve_through(tuple);
        self.set(tuple, comp, value);
    }

    #[inline]
    fn get_tuple(&self, tuple: usize, out: &mut [T]) {
        range_assert!(
            out.len() == self.num_components,
            "output buffer length must match the component count"
        );
        let base = self.flat(tuple, 0);
        // explicit per-component copy; see the tuple-copy note in DESIGN.md
        for (comp, slot) in out.iter_mut().enumerate() {
            *slot = self.data[base + comp];
        }
    }

    #[inline]
    fn set_tuple(&mut self, tuple: usize, values: &[T]) {
        range_assert!(
            values.len() == self.num_components,
            "input buffer length must match the component count"
        );
        let base = self.flat(tuple, 0);
        for (comp, value) in values.iter().enumerate() {
            self.data[base + comp] = *value;
        }
    }

    #[inline]
    fn insert_tuple(&mut self, tuple: usize, values: &[T]) {
        self.reserve_through(tuple);
        self.set_tuple(tuple, values);
    }
}

impl<T: Scalar> Contiguous for AosArray<T> {
    #[inline]
    fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}
