//! # Array metadata
//!
//! Compile-time metadata about arrays: the closed set of element types an
//! array may store ([`Scalar`] / [`ElemKind`]), and the tuple-size holders
//! ([`Fixed`] / [`Dynamic`]) that let range code treat "known at compile
//! time" and "read from the array at construction" uniformly.

use crate::array::Array;
use crate::utils::{for_each_scalar, range_assert};
use num_traits::AsPrimitive;

/// Runtime tag for the element type stored by an array.
///
/// This is the closed set the [dispatch gate](crate::dispatch) probes; an
/// array reporting a kind outside the set it actually stores will simply
/// never match and always take the erased fallback path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElemKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

impl ElemKind {
    /// display name of the element type
    pub fn name(&self) -> &'static str {
        match self {
            ElemKind::I8 => "Int8",
            ElemKind::I16 => "Int16",
            ElemKind::I32 => "Int32",
            ElemKind::I64 => "Int64",
            ElemKind::U8 => "UInt8",
            ElemKind::U16 => "UInt16",
            ElemKind::U32 => "UInt32",
            ElemKind::U64 => "UInt64",
            ElemKind::F32 => "Float32",
            ElemKind::F64 => "Float64",
        }
    }

    /// size of one element in bytes
    pub fn size_of(&self) -> usize {
        match self {
            ElemKind::I8 | ElemKind::U8 => 1,
            ElemKind::I16 | ElemKind::U16 => 2,
            ElemKind::I32 | ElemKind::U32 | ElemKind::F32 => 4,
            ElemKind::I64 | ElemKind::U64 | ElemKind::F64 => 8,
        }
    }
}

impl std::fmt::Display for ElemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An element type a concrete array can store.
///
/// The `f64` conversions back the erased [`Array`](crate::Array) interface:
/// every virtual getter/setter round-trips through `f64`, the universal
/// fallback representation. `from_f64` uses `as`-cast semantics - float to
/// int truncates toward zero and saturates at the destination bounds (NaN
/// becomes 0), int to float rounds to nearest. The same policy applies to
/// cross-element-type tuple assignment through [`AsPrimitive`].
pub trait Scalar:
    Copy + PartialOrd + std::fmt::Debug + AsPrimitive<f64> + Send + Sync + 'static
{
    const KIND: ElemKind;
    const ZERO: Self;

    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_scalar {
    ($t:ty, $kind:ident) => {
        impl Scalar for $t {
            const KIND: ElemKind = ElemKind::$kind;
            const ZERO: Self = 0 as $t;

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }
        }
    };
}

for_each_scalar!(impl_scalar);

/// Resolved number of components per tuple for a range.
///
/// Either a zero-sized compile-time constant ([`Fixed`]) or a plain field
/// read from the array once at construction ([`Dynamic`]). After
/// construction both behave identically through [`get`](TupleSize::get); a
/// range's resolved size never changes for that range's lifetime.
pub trait TupleSize: Copy + std::fmt::Debug {
    /// `Some(n)` when the size is known at compile time
    const STATIC: Option<usize>;

    fn from_array<A: Array + ?Sized>(array: &A) -> Self;

    fn get(self) -> usize;
}

/// Compile-time tuple size. Zero-sized; `Fixed<0>` is rejected when
/// instantiated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fixed<const N: usize>;

impl<const N: usize> Fixed<N> {
    pub(crate) const VALID: () = assert!(N > 0, "tuple size must be positive");
}

impl<const N: usize> TupleSize for Fixed<N> {
    const STATIC: Option<usize> = Some(N);

    #[inline]
    fn from_array<A: Array + ?Sized>(array: &A) -> Self {
        let () = Self::VALID;
        range_assert!(
            array.num_components() == N,
            "fixed tuple size does not match the array's component count"
        );
        Fixed
    }

    #[inline]
    fn get(self) -> usize {
        N
    }
}

/// Runtime tuple size, read from the array at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dynamic(usize);

impl Dynamic {
    pub fn new(num_components: usize) -> Self {
        range_assert!(num_components > 0, "tuple size must be positive");
        Dynamic(num_components)
    }
}

impl TupleSize for Dynamic {
    const STATIC: Option<usize> = None;

    #[inline]
    fn from_array<A: Array + ?Sized>(array: &A) -> Self {
        Dynamic::new(array.num_components())
    }

    #[inline]
    fn get(self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::AosArray;

    #[test]
    fn elem_kind_sizes() {
        assert_eq!(ElemKind::U8.size_of(), 1);
        assert_eq!(ElemKind::F32.size_of(), 4);
        assert_eq!(ElemKind::I64.size_of(), 8);
        assert_eq!(ElemKind::F64.name(), "Float64");
    }

    #[test]
    fn from_f64_saturates_and_truncates() {
        assert_eq!(u8::from_f64(300.0), 255);
        assert_eq!(u8::from_f64(-1.0), 0);
        assert_eq!(i32::from_f64(2.9), 2);
        assert_eq!(i32::from_f64(-2.9), -2);
        assert_eq!(i16::from_f64(f64::NAN), 0);
    }

    #[test]
    fn tuple_size_resolution() {
        let array = AosArray::<f32>::zeros(4, 3);

        let fixed = Fixed::<3>::from_array(&array);
        assert_eq!(fixed.get(), 3);
        assert_eq!(<Fixed<3> as TupleSize>::STATIC, Some(3));

        let dynamic = Dynamic::from_array(&array);
        assert_eq!(dynamic.get(), 3);
        assert_eq!(<Dynamic as TupleSize>::STATIC, None);
    }
}
