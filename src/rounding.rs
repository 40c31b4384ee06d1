//! Component-wise rounding.

use crate::{
    scalar::{Real, Scalar},
    vector::Vector,
};
use num_traits::Float;

/// How a value exactly halfway between two candidates is rounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MidpointRounding {
    /// Round to the even neighbor.
    #[default]
    ToEven,
    /// Round to the neighbor further from zero.
    AwayFromZero,
    /// Round toward zero.
    ToZero,
    /// Round toward negative infinity.
    ToNegativeInfinity,
    /// Round toward positive infinity.
    ToPositiveInfinity,
}

impl MidpointRounding {
    fn apply<F: Real>(self, value: F) -> F {
        match self {
            Self::ToEven => value.round_half_to_even(),
            Self::AwayFromZero => value.round(),
            Self::ToZero => value.trunc(),
            Self::ToNegativeInfinity => value.floor(),
            Self::ToPositiveInfinity => value.ceil(),
        }
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Rounds each component up to the nearest integer.
    #[inline]
    pub fn ceil(&self) -> Vector<T::Real, N> {
        self.mapped(|component| component.to_real().ceil())
    }

    /// Rounds each component down to the nearest integer.
    #[inline]
    pub fn floor(&self) -> Vector<T::Real, N> {
        self.mapped(|component| component.to_real().floor())
    }

    /// Rounds each component toward zero.
    #[inline]
    pub fn trunc(&self) -> Vector<T::Real, N> {
        self.mapped(|component| component.to_real().trunc())
    }

    /// The fractional part `x - trunc(x)` of each component, which has the
    /// sign of the component.
    #[inline]
    pub fn fract(&self) -> Vector<T::Real, N> {
        self.mapped(|component| {
            let value = component.to_real();
            value - value.trunc()
        })
    }

    /// Rounds each component to the nearest integer, with ties going to the
    /// even neighbor.
    #[inline]
    pub fn round(&self) -> Vector<T::Real, N> {
        self.mapped(|component| component.to_real().round_half_to_even())
    }

    /// Rounds each component to the given number of fractional decimal
    /// digits, resolving midpoints with the given mode.
    pub fn round_to(&self, digits: u32, mode: MidpointRounding) -> Vector<T::Real, N> {
        let exponent = i32::try_from(digits).unwrap_or(i32::MAX);
        let scale = <T::Real as Real>::from_f64(10.0).powi(exponent);
        self.mapped(|component| {
            let value = component.to_real();
            let scaled = value * scale;
            if !scaled.is_finite() {
                return value;
            }
            mode.apply(scaled) / scale
        })
    }
}
