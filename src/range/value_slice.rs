//! Slice-backed value ranges for contiguous (AOS) storage. Iteration here
//! is plain pointer arithmetic - the generic machinery is bypassed entirely.

use crate::meta::Scalar;
use crate::utils::range_assert;

/// Read-only flat view over contiguous storage.
///
/// Construct through [`Contiguous::values`](crate::Contiguous::values) or
/// directly from any slice of values.
#[derive(Debug)]
pub struct SliceValues<'a, T> {
    values: &'a [T],
}

impl<'a, T> Clone for SliceValues<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for SliceValues<'a, T> {}

impl<'a, T: Scalar> SliceValues<'a, T> {
    pub fn new(values: &'a [T]) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn at(&self, index: usize) -> T {
        self.values[index]
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'a, T>> {
        self.values.iter().copied()
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.values
    }

    /// Raw pointer to the first value in the view.
    ///
    /// Escape hatch for FFI-style consumers; only meaningful while the
    /// borrow is live, and only if the caller got the element type right.
    pub fn as_ptr(&self) -> *const T {
        self.values.as_ptr()
    }

    /// A sub-view; offsets are relative to this range's begin, `None` means
    /// "through the current end".
    pub fn sub_range(&self, begin: usize, end: Option<usize>) -> Self {
        let end = end.unwrap_or(self.values.len());
        range_assert!(
            begin <= end && end <= self.values.len(),
            "sub-range out of bounds"
        );
        Self {
            values: &self.values[begin..end],
        }
    }
}

impl<'a, 'r, T: Scalar> IntoIterator for &'r SliceValues<'a, T> {
    type Item = T;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Mutable flat view over contiguous storage.
///
/// Unlike the generic [`ValueRangeMut`](crate::ValueRangeMut), iteration
/// hands out real `&mut T` references, and [`split_at_mut`](Self::split_at_mut)
/// partitions the view into disjoint halves that may be handed to different
/// workers.
#[derive(Debug)]
pub struct SliceValuesMut<'a, T> {
    values: &'a mut [T],
}

impl<'a, T: Scalar> SliceValuesMut<'a, T> {
    pub fn new(values: &'a mut [T]) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn at(&self, index: usize) -> T {
        self.values[index]
    }

    #[inline]
    pub fn set(&mut self, index: usize, value: T) {
        self.values[index] = value;
    }

    pub fn fill(&mut self, value: T) {
        self.values.fill(value);
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, T>> {
        self.values.iter().copied()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.values.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        self.values
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.values
    }

    /// Raw pointer analogue of [`SliceValues::as_ptr`].
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.values.as_mut_ptr()
    }

    /// A mutable sub-view borrowing from this one.
    pub fn sub_range_mut(&mut self, begin: usize, end: Option<usize>) -> SliceValuesMut<'_, T> {
        let end = end.unwrap_or(self.values.len());
        range_assert!(
            begin <= end && end <= self.values.len(),
            "sub-range out of bounds"
        );
        SliceValuesMut {
            values: &mut self.values[begin..end],
        }
    }

    /// Split into `[0, mid)` and `[mid, len)`, consuming the view.
    ///
    /// The halves are disjoint, so each may be mutated independently - the
    /// intended pattern for parallel writers.
    pub fn split_at_mut(self, mid: usize) -> (SliceValuesMut<'a, T>, SliceValuesMut<'a, T>) {
        let (left, right) = self.values.split_at_mut(mid);
        (SliceValuesMut { values: left }, SliceValuesMut { values: right })
    }
}
