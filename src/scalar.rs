//! Scalar kinds that can be stored in a [`Vector`](crate::vector::Vector).

#![allow(clippy::cast_lossless)]

use bytemuck::Pod;
use half::f16;
use num_traits as nt;
use std::fmt;

/// Gathers the capabilities every vector component kind has.
///
/// Implemented for [`f16`], `f32`, `f64` and the signed and unsigned 8-,
/// 16-, 32- and 64-bit integers.
pub trait Scalar:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + nt::Num
    + nt::NumCast
    + Pod
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    /// Width of the kind in bits.
    const BITS: u32;

    /// Number of bytes in the fixed-width binary encoding.
    const BYTES: usize;

    /// The floating-point kind that lengths, normalized vectors and rounded
    /// values of this kind are expressed in.
    type Real: Real;

    /// The kind that negated values of this kind are expressed in. Signed
    /// and floating-point kinds negate to themselves, unsigned kinds to the
    /// nearest wider signed kind.
    type Signed: Scalar;

    /// Converts the value to [`Self::Real`](Scalar::Real).
    fn to_real(self) -> Self::Real;

    /// Negates the value into [`Self::Signed`](Scalar::Signed).
    ///
    /// # Wrapping
    /// `u64` negates into `i64`. Values above `i64::MAX` are reinterpreted
    /// as `i64` before negating with wrapping, so `u64::MAX` negates to `1`.
    fn negate(self) -> Self::Signed;

    fn absolute(self) -> Self;

    /// Bits fed to a hasher. Values that compare equal have equal hash bits.
    fn hash_bits(self) -> u64;

    /// Writes the little-endian encoding of the value into the first
    /// [`Self::BYTES`](Scalar::BYTES) bytes of `bytes`.
    ///
    /// # Panics
    /// If `bytes` is shorter than [`Self::BYTES`](Scalar::BYTES).
    fn write_le_bytes(self, bytes: &mut [u8]);

    /// Reads a value from the little-endian encoding in the first
    /// [`Self::BYTES`](Scalar::BYTES) bytes of `bytes`.
    ///
    /// # Panics
    /// If `bytes` is shorter than [`Self::BYTES`](Scalar::BYTES).
    fn read_le_bytes(bytes: &[u8]) -> Self;

    #[inline]
    fn minimum(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    #[inline]
    fn maximum(self, other: Self) -> Self {
        if other > self { other } else { self }
    }
}

/// Floating-point scalar kinds.
pub trait Real: Scalar<Real = Self, Signed = Self> + nt::Float {
    fn from_f64(value: f64) -> Self;

    /// Rounds to the nearest integer, resolving ties to the even neighbor.
    fn round_half_to_even(self) -> Self {
        let floor = self.floor();
        let diff = self - floor;
        let half = Self::from_f64(0.5);
        if diff > half {
            floor + Self::ONE
        } else if diff < half {
            floor
        } else if (floor * half).fract() == Self::ZERO {
            floor
        } else {
            floor + Self::ONE
        }
    }
}

/// Integer scalar kinds, which support bit packing.
pub trait Integer: Scalar {
    /// The two's complement bits of the value, sign-extended to 64 bits.
    fn to_u64_bits(self) -> u64;

    /// Truncates the given bits to the width of the kind.
    fn from_u64_bits(bits: u64) -> Self;
}

macro_rules! impl_scalar_common {
    ($t:ty, $bytes:expr) => {
        const BITS: u32 = ($bytes * 8) as u32;
        const BYTES: usize = $bytes;

        #[inline]
        fn write_le_bytes(self, bytes: &mut [u8]) {
            bytes[..$bytes].copy_from_slice(&self.to_le_bytes());
        }

        #[inline]
        fn read_le_bytes(bytes: &[u8]) -> Self {
            let mut buffer = [0_u8; $bytes];
            buffer.copy_from_slice(&bytes[..$bytes]);
            <$t>::from_le_bytes(buffer)
        }
    };
}

macro_rules! impl_signed_integer {
    ($t:ty, $real:ty) => {
        impl Scalar for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            type Real = $real;
            type Signed = Self;

            impl_scalar_common!($t, size_of::<$t>());

            #[inline]
            fn to_real(self) -> $real {
                self as $real
            }

            #[inline]
            fn negate(self) -> Self {
                -self
            }

            #[inline]
            fn absolute(self) -> Self {
                <$t>::abs(self)
            }

            #[inline]
            fn hash_bits(self) -> u64 {
                self as u64
            }
        }

        impl Integer for $t {
            #[inline]
            fn to_u64_bits(self) -> u64 {
                self as u64
            }

            #[inline]
            fn from_u64_bits(bits: u64) -> Self {
                bits as $t
            }
        }
    };
}

macro_rules! impl_unsigned_integer {
    ($t:ty, $signed:ty, $real:ty) => {
        impl Scalar for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            type Real = $real;
            type Signed = $signed;

            impl_scalar_common!($t, size_of::<$t>());

            #[inline]
            fn to_real(self) -> $real {
                self as $real
            }

            #[inline]
            fn negate(self) -> $signed {
                (self as $signed).wrapping_neg()
            }

            #[inline]
            fn absolute(self) -> Self {
                self
            }

            #[inline]
            fn hash_bits(self) -> u64 {
                self as u64
            }
        }

        impl Integer for $t {
            #[inline]
            fn to_u64_bits(self) -> u64 {
                self as u64
            }

            #[inline]
            fn from_u64_bits(bits: u64) -> Self {
                bits as $t
            }
        }
    };
}

macro_rules! impl_float {
    ($t:ty, $zero:expr, $one:expr, |$value:ident| $from_f64:expr) => {
        impl Scalar for $t {
            const ZERO: Self = $zero;
            const ONE: Self = $one;

            type Real = Self;
            type Signed = Self;

            impl_scalar_common!($t, size_of::<$t>());

            #[inline]
            fn to_real(self) -> Self {
                self
            }

            #[inline]
            fn negate(self) -> Self {
                -self
            }

            #[inline]
            fn absolute(self) -> Self {
                nt::Float::abs(self)
            }

            #[inline]
            fn hash_bits(self) -> u64 {
                // Negative zero must hash like positive zero
                if self == $zero {
                    0
                } else {
                    self.to_bits() as u64
                }
            }
        }

        impl Real for $t {
            #[inline]
            fn from_f64($value: f64) -> Self {
                $from_f64
            }
        }
    };
}

impl_signed_integer!(i8, f64);
impl_signed_integer!(i16, f64);
impl_signed_integer!(i32, f64);
impl_signed_integer!(i64, f64);

impl_unsigned_integer!(u8, i16, f64);
impl_unsigned_integer!(u16, i32, f64);
impl_unsigned_integer!(u32, i64, f64);
impl_unsigned_integer!(u64, i64, f64);

impl_float!(f16, f16::ZERO, f16::ONE, |value| f16::from_f64(value));
impl_float!(f32, 0.0, 1.0, |value| value as f32);
impl_float!(f64, 0.0, 1.0, |value| value);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_negation_widens_to_signed() {
        assert_eq!(200_u8.negate(), -200_i16);
        assert_eq!(u16::MAX.negate(), -65535_i32);
        assert_eq!(u32::MAX.negate(), -4294967295_i64);
        assert_eq!(3_u64.negate(), -3_i64);
    }

    #[test]
    fn negating_u64_above_i64_range_wraps() {
        assert_eq!(u64::MAX.negate(), 1_i64);
        assert_eq!((1_u64 << 63).negate(), i64::MIN);
        assert_eq!((i64::MAX as u64).negate(), -i64::MAX);
    }

    #[test]
    fn negative_zero_hashes_like_zero() {
        assert_eq!((-0.0_f32).hash_bits(), 0.0_f32.hash_bits());
        assert_eq!((-0.0_f64).hash_bits(), 0.0_f64.hash_bits());
        assert_eq!((-f16::ZERO).hash_bits(), f16::ZERO.hash_bits());
    }

    #[test]
    fn integer_bits_are_sign_extended_and_truncated() {
        assert_eq!((-1_i8).to_u64_bits(), u64::MAX);
        assert_eq!(i8::from_u64_bits(0x1FF), -1);
        assert_eq!(u16::from_u64_bits(0x1_2345), 0x2345);
    }

    #[test]
    fn little_endian_encoding_works() {
        let mut bytes = [0_u8; 4];
        0x0102_0304_u32.write_le_bytes(&mut bytes);
        assert_eq!(bytes, [4, 3, 2, 1]);
        assert_eq!(u32::read_le_bytes(&bytes), 0x0102_0304);

        let mut bytes = [0_u8; 2];
        f16::ONE.write_le_bytes(&mut bytes);
        assert_eq!(bytes, [0x00, 0x3C]);
        assert_eq!(f16::read_le_bytes(&bytes), f16::ONE);
    }

    #[test]
    fn rounding_half_to_even_works() {
        assert_eq!(0.5_f64.round_half_to_even(), 0.0);
        assert_eq!(1.5_f64.round_half_to_even(), 2.0);
        assert_eq!(2.5_f64.round_half_to_even(), 2.0);
        assert_eq!((-2.5_f64).round_half_to_even(), -2.0);
        assert_eq!((-1.5_f32).round_half_to_even(), -2.0);
        assert_eq!(2.6_f32.round_half_to_even(), 3.0);
    }

    #[test]
    fn widths_match_kinds() {
        assert_eq!(<f16 as Scalar>::BYTES, 2);
        assert_eq!(<u64 as Scalar>::BITS, 64);
        assert_eq!(<i8 as Scalar>::BITS, 8);
    }
}
