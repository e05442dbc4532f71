//! Slice-backed tuple ranges for contiguous (AOS) storage: tuple views are
//! plain subslices, iteration is `chunks_exact`.

use crate::meta::{Dynamic, Fixed, Scalar, TupleSize};
use crate::utils::range_assert;

/// Read-only tuple view over contiguous storage.
///
/// Construct through [`Contiguous::tuples`](crate::Contiguous::tuples) /
/// [`tuples_fixed`](crate::Contiguous::tuples_fixed) or directly from a
/// slice of interleaved tuples.
#[derive(Debug)]
pub struct SliceTuples<'a, T, S: TupleSize = Dynamic> {
    values: &'a [T],
    num_comps: S,
}

impl<'a, T, S: TupleSize> Clone for SliceTuples<'a, T, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, S: TupleSize> Copy for SliceTuples<'a, T, S> {}

impl<'a, T: Scalar> SliceTuples<'a, T, Dynamic> {
    pub fn new(values: &'a [T], num_comps: usize) -> Self {
        let num_comps = Dynamic::new(num_comps);
        range_assert!(
            values.len() % num_comps.get() == 0,
            "slice length must be a whole number of tuples"
        );
        Self { values, num_comps }
    }
}

impl<'a, T: Scalar, const N: usize> SliceTuples<'a, T, Fixed<N>> {
    pub fn fixed(values: &'a [T]) -> Self {
        let () = Fixed::<N>::VALID;
        range_assert!(
            values.len() % N == 0,
            "slice length must be a whole number of tuples"
        );
        Self {
            values,
            num_comps: Fixed,
        }
    }

    /// one tuple by value; the length check is the type system's
    #[inline]
    pub fn at_array(&self, index: usize) -> [T; N] {
        self.at(index)
            .try_into()
            .expect("tuple views always hold exactly one tuple")
    }
}

impl<'a, T: Scalar, S: TupleSize> SliceTuples<'a, T, S> {
    pub fn len(&self) -> usize {
        self.values.len() / self.num_comps.get()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn tuple_size(&self) -> usize {
        self.num_comps.get()
    }

    #[inline]
    pub fn at(&self, index: usize) -> &'a [T] {
        let n = self.num_comps.get();
        &self.values[index * n..(index + 1) * n]
    }

    /// bulk copy of one tuple; `out.len()` must equal the tuple size
    pub fn get_tuple(&self, index: usize, out: &mut [T]) {
        let tuple = self.at(index);
        range_assert!(
            out.len() == tuple.len(),
            "output buffer length must match the tuple size"
        );
        // explicit per-component copy; see the tuple-copy note in DESIGN.md
        for (slot, value) in out.iter_mut().zip(tuple) {
            *slot = *value;
        }
    }

    pub fn iter(&self) -> std::slice::ChunksExact<'a, T> {
        self.values.chunks_exact(self.num_comps.get())
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.values
    }

    /// A sub-view at tuple granularity; offsets are relative to this range's
    /// begin, `None` means "through the current end".
    pub fn sub_range(&self, begin: usize, end: Option<usize>) -> Self {
        let n = self.num_comps.get();
        let end = end.unwrap_or_else(|| self.len());
        range_assert!(begin <= end && end <= self.len(), "sub-range out of bounds");
        Self {
            values: &self.values[begin * n..end * n],
            num_comps: self.num_comps,
        }
    }
}

impl<'a, 'r, T: Scalar, S: TupleSize> IntoIterator for &'r SliceTuples<'a, T, S> {
    type Item = &'a [T];
    type IntoIter = std::slice::ChunksExact<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Mutable tuple view over contiguous storage.
#[derive(Debug)]
pub struct SliceTuplesMut<'a, T, S: TupleSize = Dynamic> {
    values: &'a mut [T],
    num_comps: S,
}

impl<'a, T: Scalar> SliceTuplesMut<'a, T, Dynamic> {
    pub fn new(values: &'a mut [T], num_comps: usize) -> Self {
        let num_comps = Dynamic::new(num_comps);
        range_assert!(
            values.len() % num_comps.get() == 0,
            "slice length must be a whole number of tuples"
        );
        Self { values, num_comps }
    }
}

impl<'a, T: Scalar, const N: usize> SliceTuplesMut<'a, T, Fixed<N>> {
    pub fn fixed(values: &'a mut [T]) -> Self {
        let () = Fixed::<N>::VALID;
        range_assert!(
            values.len() % N == 0,
            "slice length must be a whole number of tuples"
        );
        Self {
            values,
            num_comps: Fixed,
        }
    }

    pub fn at_array(&self, index: usize) -> [T; N] {
        self.at(index)
            .try_into()
            .expect("tuple views always hold exactly one tuple")
    }

    /// overwrite one tuple by value; the length check is the type system's
    pub fn write_array(&mut self, index: usize, values: [T; N]) {
        self.set_tuple(index, &values);
    }
}

impl<'a, T: Scalar, S: TupleSize> SliceTuplesMut<'a, T, S> {
    pub fn len(&self) -> usize {
        self.values.len() / self.num_comps.get()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn tuple_size(&self) -> usize {
        self.num_comps.get()
    }

    #[inline]
    pub fn at(&self, index: usize) -> &[T] {
        let n = self.num_comps.get();
        &self.values[index * n..(index + 1) * n]
    }

    #[inline]
    pub fn at_mut(&mut self, index: usize) -> &mut [T] {
        let n = self.num_comps.get();
        &mut self.values[index * n..(index + 1) * n]
    }

    pub fn get_tuple(&self, index: usize, out: &mut [T]) {
        let tuple = self.at(index);
        range_assert!(
            out.len() == tuple.len(),
            "output buffer length must match the tuple size"
        );
        for (slot, value) in out.iter_mut().zip(tuple) {
            *slot = *value;
        }
    }

    /// bulk overwrite of one tuple; `values.len()` must equal the tuple size
    pub fn set_tuple(&mut self, index: usize, values: &[T]) {
        let tuple = self.at_mut(index);
        range_assert!(
            values.len() == tuple.len(),
            "input buffer length must match the tuple size"
        );
        // explicit per-component copy; see the tuple-copy note in DESIGN.md
        for (slot, value) in tuple.iter_mut().zip(values) {
            *slot = *value;
        }
    }

    /// set every component of one tuple
    pub fn fill_tuple(&mut self, index: usize, value: T) {
        self.at_mut(index).fill(value);
    }

    /// set every component of every tuple in the range
    pub fn fill(&mut self, value: T) {
        self.values.fill(value);
    }

    /// Swap two tuples of this range, component-wise.
    pub fn swap_tuples(&mut self, a: usize, b: usize) {
        range_assert!(
            a < self.len() && b < self.len(),
            "tuple index past the end of the range"
        );
        if a == b {
            return;
        }

        let n = self.num_comps.get();
        for comp in 0..n {
            self.values.swap(a * n + comp, b * n + comp);
        }
    }

    pub fn iter(&self) -> std::slice::ChunksExact<'_, T> {
        self.values.chunks_exact(self.num_comps.get())
    }

    pub fn iter_mut(&mut self) -> std::slice::ChunksExactMut<'_, T> {
        self.values.chunks_exact_mut(self.num_comps.get())
    }

    pub fn as_slice(&self) -> &[T] {
        self.values
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.values
    }

    /// A mutable sub-view borrowing from this one, at tuple granularity.
    pub fn sub_range_mut(&mut self, begin: usize, end: Option<usize>) -> SliceTuplesMut<'_, T, S> {
        let n = self.num_comps.get();
        let end = end.unwrap_or_else(|| self.len());
        range_assert!(begin <= end && end <= self.len(), "sub-range out of bounds");
        SliceTuplesMut {
            values: &mut self.values[begin * n..end * n],
            num_comps: self.num_comps,
        }
    }

    /// Split into `[0, mid)` and `[mid, len)` tuples, consuming the view.
    ///
    /// The halves are disjoint, so each may be mutated independently - the
    /// intended pattern for parallel writers.
    pub fn split_at_mut(self, mid: usize) -> (SliceTuplesMut<'a, T, S>, SliceTuplesMut<'a, T, S>) {
        range_assert!(mid <= self.len(), "split point past the end of the range");
        let (left, right) = self.values.split_at_mut(mid * self.num_comps.get());
        (
            SliceTuplesMut {
                values: left,
                num_comps: self.num_comps,
            },
            SliceTuplesMut {
                values: right,
                num_comps: self.num_comps,
            },
        )
    }
}
