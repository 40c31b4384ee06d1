//! Conversions between vectors of the same dimension and different scalar
//! kinds.
//!
//! Lossless conversions (integer widening that keeps the sign, and float
//! widening) are [`From`] impls. Every other pair of kinds is converted
//! explicitly with [`Vector::cast`].

use crate::{scalar::Scalar, vector::Vector};
use half::f16;
use num_traits::AsPrimitive;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Converts each component to `U` with the semantics of an `as` cast:
    /// float to integer truncates toward zero and saturates, integer to
    /// integer truncates or sign-extends the bit pattern.
    #[inline]
    pub fn cast<U>(&self) -> Vector<U, N>
    where
        T: AsPrimitive<U>,
        U: Scalar,
    {
        self.mapped(|component| AsPrimitive::<U>::as_(component))
    }

    /// Converts each component to the floating-point kind that lengths and
    /// normalized vectors of this kind are expressed in.
    #[inline]
    pub fn to_real(&self) -> Vector<T::Real, N> {
        self.mapped(T::to_real)
    }
}

macro_rules! impl_lossless_conversions {
    ($from:ty => $($to:ty),+) => {
        $(
            impl<const N: usize> From<Vector<$from, N>> for Vector<$to, N> {
                #[inline]
                fn from(vector: Vector<$from, N>) -> Self {
                    vector.mapped(<$to as From<$from>>::from)
                }
            }
        )+
    };
}

impl_lossless_conversions!(i8 => i16, i32, i64);
impl_lossless_conversions!(i16 => i32, i64);
impl_lossless_conversions!(i32 => i64);
impl_lossless_conversions!(u8 => u16, u32, u64, i16, i32, i64);
impl_lossless_conversions!(u16 => u32, u64, i32, i64);
impl_lossless_conversions!(u32 => u64, i64);
impl_lossless_conversions!(f16 => f32, f64);
impl_lossless_conversions!(f32 => f64);
