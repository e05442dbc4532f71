//! # Value accessors
//!
//! [`Accessor`] and [`AccessorMut`] are the narrow waist every range and
//! proxy reference reads and writes through: one borrowed array, get/set/
//! insert in the array's native element type. Instantiated against a
//! concrete array they are free wrappers around direct storage access;
//! instantiated against `dyn Array` the same call sites route to the virtual
//! `f64` interface. They are cheap to construct per call site - proxies do
//! exactly that rather than storing one.

use crate::array::TypedAccess;

/// Shared-access wrapper around one borrowed array.
#[derive(Debug)]
pub struct Accessor<'a, A: ?Sized> {
    array: &'a A,
}

impl<'a, A: ?Sized> Clone for Accessor<'a, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, A: ?Sized> Copy for Accessor<'a, A> {}

impl<'a, A: TypedAccess + ?Sized> Accessor<'a, A> {
    #[inline]
    pub fn new(array: &'a A) -> Self {
        Self { array }
    }

    #[inline]
    pub fn get(&self, tuple: usize, comp: usize) -> A::Elem {
        self.array.get(tuple, comp)
    }

    /// bulk copy of one tuple; `out.len()` must equal the component count
    #[inline]
    pub fn get_tuple(&self, tuple: usize, out: &mut [A::Elem]) {
        self.array.get_tuple(tuple, out)
    }
}

/// Exclusive-access wrapper around one borrowed array.
#[derive(Debug)]
pub struct AccessorMut<'a, A: ?Sized> {
    array: &'a mut A,
}

impl<'a, A: TypedAccess + ?Sized> AccessorMut<'a, A> {
    #[inline]
    pub fn new(array: &'a mut A) -> Self {
        Self { array }
    }

    #[inline]
    pub fn get(&self, tuple: usize, comp: usize) -> A::Elem {
        self.array.get(tuple, comp)
    }

    #[inline]
    pub fn set(&mut self, tuple: usize, comp: usize, value: A::Elem) {
        self.array.set(tuple, comp, value)
    }

    /// like [`set`](Self::set), but grows the array when `tuple` is past the
    /// end
    #[inline]
    pub fn insert(&mut self, tuple: usize, comp: usize, value: A::Elem) {
        self.array.insert(tuple, comp, value)
    }

    #[inline]
    pub fn get_tuple(&self, tuple: usize, out: &mut [A::Elem]) {
        self.array.get_tuple(tuple, out)
    }

    #[inline]
    pub fn set_tuple(&mut self, tuple: usize, values: &[A::Elem]) {
        self.array.set_tuple(tuple, values)
    }

    #[inline]
    pub fn insert_tuple(&mut self, tuple: usize, values: &[A::Elem]) {
        self.array.insert_tuple(tuple, values)
    }
}
