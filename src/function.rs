//! Vector functions.
//!
//! The operations are implemented as methods on [`Vector`], and are also
//! exposed here as free functions, together with named equivalents of the
//! arithmetic operators. Functions that produce lengths, directions or
//! interpolated positions work in the [`Real`](crate::scalar::Real) kind of
//! the input: the kind itself for floating-point kinds, `f64` for integer
//! kinds.

use crate::scalar::{Integer, Scalar};
use crate::vector::Vector;
use num_traits::Float;

type RealVector<T, const N: usize> = Vector<<T as Scalar>::Real, N>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Computes the dot product of this vector with another, in the
    /// arithmetic of the scalar kind.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.iter()
            .zip(other)
            .fold(T::ZERO, |sum, (&a, &b)| sum + a * b)
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    /// Computes the norm (length) of the vector.
    ///
    /// The computation is done in the real kind on components scaled by the
    /// largest component magnitude, so the squares cannot overflow the
    /// scalar kind.
    #[inline]
    pub fn norm(&self) -> T::Real {
        let (scale, scaled) = self.split_magnitude();
        scale * scaled.norm_squared().sqrt()
    }

    /// Computes the normalized version of the vector.
    ///
    /// If the norm is at or below the machine epsilon of the real kind, the
    /// zero vector is returned instead.
    pub fn normalized(&self) -> RealVector<T, N> {
        let (scale, scaled) = self.split_magnitude();
        let scaled_norm = scaled.norm_squared().sqrt();
        if scale * scaled_norm <= T::Real::epsilon() {
            Vector::ZERO
        } else {
            scaled / scaled_norm
        }
    }

    /// Splits the real version of the vector into its largest component
    /// magnitude and the vector divided by it. Zero and non-finite
    /// magnitudes give a scale of one.
    fn split_magnitude(&self) -> (T::Real, RealVector<T, N>) {
        let real = self.to_real();
        let max_abs = real
            .iter()
            .fold(T::Real::ZERO, |max_abs, &component| max_abs.max(component.abs()));
        if max_abs == T::Real::ZERO || !max_abs.is_finite() {
            (T::Real::ONE, real)
        } else {
            (max_abs, real / max_abs)
        }
    }

    /// Computes the distance between this and another vector.
    #[inline]
    pub fn distance(&self, other: &Self) -> T::Real {
        (other.to_real() - self.to_real()).norm()
    }

    /// Computes the squared distance between this and another vector.
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> T::Real {
        (other.to_real() - self.to_real()).norm_squared()
    }

    /// Returns a vector with the absolute value of each component.
    #[inline]
    pub fn component_abs(&self) -> Self {
        self.mapped(T::absolute)
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        self.zip_mapped(other, |a, b| a * b)
    }

    /// Returns a vector where each component is the minimum of the
    /// corresponding component in this and another vector.
    #[inline]
    pub fn component_min(&self, other: &Self) -> Self {
        self.zip_mapped(other, T::minimum)
    }

    /// Returns a vector where each component is the maximum of the
    /// corresponding component in this and another vector.
    #[inline]
    pub fn component_max(&self, other: &Self) -> Self {
        self.zip_mapped(other, T::maximum)
    }

    /// Returns a vector where each component is clamped to the range given
    /// by the corresponding components in `min` and `max`.
    #[inline]
    pub fn component_clamp(&self, min: &Self, max: &Self) -> Self {
        self.component_max(min).component_min(max)
    }

    /// Returns the smallest component in the vector.
    #[inline]
    pub fn min_component(&self) -> T {
        self.iter().copied().fold(self[0], T::minimum)
    }

    /// Returns the largest component in the vector.
    #[inline]
    pub fn max_component(&self) -> T {
        self.iter().copied().fold(self[0], T::maximum)
    }

    /// Returns the sum of the components.
    #[inline]
    pub fn sum(&self) -> T {
        self.iter().fold(T::ZERO, |sum, &component| sum + component)
    }

    /// Whether every component is non-zero.
    #[inline]
    pub fn all(&self) -> bool {
        self.iter().all(|&component| component != T::ZERO)
    }

    /// Whether any component is non-zero.
    #[inline]
    pub fn any(&self) -> bool {
        self.iter().any(|&component| component != T::ZERO)
    }

    /// Whether the given predicate holds for every component.
    #[inline]
    pub fn all_by(&self, mut predicate: impl FnMut(T) -> bool) -> bool {
        self.iter().all(|&component| predicate(component))
    }

    /// Whether the given predicate holds for any component.
    #[inline]
    pub fn any_by(&self, mut predicate: impl FnMut(T) -> bool) -> bool {
        self.iter().any(|&component| predicate(component))
    }

    /// Linearly interpolates between this vector (`t = 0`) and another
    /// (`t = 1`).
    #[inline]
    pub fn lerp(&self, other: &Self, t: T::Real) -> RealVector<T, N> {
        self.to_real() * (T::Real::ONE - t) + other.to_real() * t
    }

    /// Reflects the vector about the plane with the given normal.
    #[inline]
    pub fn reflect(&self, normal: &Self) -> RealVector<T, N> {
        let v = self.to_real();
        let n = normal.to_real();
        let two = T::Real::ONE + T::Real::ONE;
        v - n * (two * v.dot(&n))
    }

    /// Refracts the vector through the surface with the given normal, where
    /// `eta` is the ratio of refractive indices.
    ///
    /// Returns the zero vector on total internal reflection.
    pub fn refract(&self, normal: &Self, eta: T::Real) -> RealVector<T, N> {
        let v = self.to_real();
        let n = normal.to_real();
        let one = T::Real::ONE;
        let cos1 = v.dot(&n);
        let radicand = one - eta * eta * (one - cos1 * cos1);
        if radicand < T::Real::ZERO {
            Vector::ZERO
        } else {
            v * eta + n * (radicand.sqrt() - eta * cos1)
        }
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Computes the cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }
}

/// Adds two vectors component-wise.
#[inline]
pub fn add<T: Scalar, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> Vector<T, N> {
    a + b
}

/// Subtracts `b` from `a` component-wise.
#[inline]
pub fn subtract<T: Scalar, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> Vector<T, N> {
    a - b
}

/// Multiplies every component by the given scalar.
#[inline]
pub fn multiply<T: Scalar, const N: usize>(vector: &Vector<T, N>, scalar: T) -> Vector<T, N> {
    vector * scalar
}

/// Divides every component by the given scalar.
#[inline]
pub fn divide<T: Scalar, const N: usize>(vector: &Vector<T, N>, scalar: T) -> Vector<T, N> {
    vector / scalar
}

/// Negates every component. Unsigned vectors negate into the nearest wider
/// signed kind.
///
/// # Wrapping
/// `u64` negates into `i64`, which has no room for values above
/// `i64::MAX`. Those are reinterpreted as `i64` and negated with wrapping, so
/// `u64::MAX` negates to `1`.
#[inline]
pub fn negate<T: Scalar, const N: usize>(vector: &Vector<T, N>) -> Vector<T::Signed, N> {
    -vector
}

/// Whether every component of `a` equals the corresponding component of `b`.
#[inline]
pub fn equals<T: Scalar, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> bool {
    a == b
}

/// Whether any component of `a` differs from the corresponding component of
/// `b`.
#[inline]
pub fn not_equals<T: Scalar, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> bool {
    a != b
}

/// See [`Vector::dot`].
#[inline]
pub fn dot<T: Scalar, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> T {
    a.dot(b)
}

/// The length of the vector. See [`Vector::norm`].
#[inline]
pub fn absolute<T: Scalar, const N: usize>(vector: &Vector<T, N>) -> T::Real {
    vector.norm()
}

/// The squared length of the vector. See [`Vector::norm_squared`].
#[inline]
pub fn absolute_squared<T: Scalar, const N: usize>(vector: &Vector<T, N>) -> T {
    vector.norm_squared()
}

/// See [`Vector::normalized`].
#[inline]
pub fn normalize<T: Scalar, const N: usize>(vector: &Vector<T, N>) -> RealVector<T, N> {
    vector.normalized()
}

/// See [`Vector::cross`].
#[inline]
pub fn cross<T: Scalar>(a: &Vector<T, 3>, b: &Vector<T, 3>) -> Vector<T, 3> {
    a.cross(b)
}

/// See [`Vector::distance`].
#[inline]
pub fn distance<T: Scalar, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> T::Real {
    a.distance(b)
}

/// See [`Vector::distance_squared`].
#[inline]
pub fn distance_squared<T: Scalar, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> T::Real {
    a.distance_squared(b)
}

/// Multiplies corresponding components of two vectors.
#[inline]
pub fn modulate<T: Scalar, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> Vector<T, N> {
    a.component_mul(b)
}

/// See [`Vector::component_abs`].
#[inline]
pub fn abs<T: Scalar, const N: usize>(vector: &Vector<T, N>) -> Vector<T, N> {
    vector.component_abs()
}

/// See [`Vector::component_min`].
#[inline]
pub fn min<T: Scalar, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> Vector<T, N> {
    a.component_min(b)
}

/// See [`Vector::component_max`].
#[inline]
pub fn max<T: Scalar, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> Vector<T, N> {
    a.component_max(b)
}

/// See [`Vector::component_clamp`].
#[inline]
pub fn clamp<T: Scalar, const N: usize>(
    vector: &Vector<T, N>,
    min: &Vector<T, N>,
    max: &Vector<T, N>,
) -> Vector<T, N> {
    vector.component_clamp(min, max)
}

/// See [`Vector::lerp`].
#[inline]
pub fn lerp<T: Scalar, const N: usize>(
    a: &Vector<T, N>,
    b: &Vector<T, N>,
    t: T::Real,
) -> RealVector<T, N> {
    a.lerp(b, t)
}

/// Computes the point `(1 - t1 - t2) p1 + t1 p2 + t2 p3` from barycentric
/// coordinates relative to a triangle.
pub fn barycentric<T: Scalar, const N: usize>(
    p1: &Vector<T, N>,
    p2: &Vector<T, N>,
    p3: &Vector<T, N>,
    t1: T::Real,
    t2: T::Real,
) -> RealVector<T, N> {
    p1.to_real() * (T::Real::ONE - t1 - t2) + p2.to_real() * t1 + p3.to_real() * t2
}

/// Interpolates between `a` and `b` with a cubic that has zero slope at both
/// ends. `t` is clamped to `[0, 1]`.
pub fn smooth_step<T: Scalar, const N: usize>(
    a: &Vector<T, N>,
    b: &Vector<T, N>,
    t: T::Real,
) -> RealVector<T, N> {
    let zero = T::Real::ZERO;
    let one = T::Real::ONE;
    let t = t.max(zero).min(one);
    let three = one + one + one;
    let two = one + one;
    a.lerp(b, t * t * (three - two * t))
}

/// Performs cubic Hermite interpolation between `v1` and `v2` with tangents
/// `t1` and `t2`.
pub fn hermite<T: Scalar, const N: usize>(
    v1: &Vector<T, N>,
    t1: &Vector<T, N>,
    v2: &Vector<T, N>,
    t2: &Vector<T, N>,
    amount: T::Real,
) -> RealVector<T, N> {
    let one = T::Real::ONE;
    let two = one + one;
    let three = two + one;
    let s2 = amount * amount;
    let s3 = s2 * amount;

    let h1 = two * s3 - three * s2 + one;
    let h2 = three * s2 - two * s3;
    let h3 = s3 - two * s2 + amount;
    let h4 = s3 - s2;

    v1.to_real() * h1 + v2.to_real() * h2 + t1.to_real() * h3 + t2.to_real() * h4
}

/// Performs Catmull-Rom interpolation between `p2` (`amount = 0`) and `p3`
/// (`amount = 1`), with `p1` and `p4` as the outer control points.
pub fn catmull_rom<T: Scalar, const N: usize>(
    p1: &Vector<T, N>,
    p2: &Vector<T, N>,
    p3: &Vector<T, N>,
    p4: &Vector<T, N>,
    amount: T::Real,
) -> RealVector<T, N> {
    let (p1, p2, p3, p4) = (p1.to_real(), p2.to_real(), p3.to_real(), p4.to_real());
    let real = <T::Real as crate::scalar::Real>::from_f64;
    let s2 = amount * amount;
    let s3 = s2 * amount;

    let linear = p3 - p1;
    let quadratic = p1 * real(2.0) - p2 * real(5.0) + p3 * real(4.0) - p4;
    let cubic = (p2 - p3) * real(3.0) + p4 - p1;

    (p2 * real(2.0) + linear * amount + quadratic * s2 + cubic * s3) * real(0.5)
}

/// See [`Vector::reflect`].
#[inline]
pub fn reflect<T: Scalar, const N: usize>(
    vector: &Vector<T, N>,
    normal: &Vector<T, N>,
) -> RealVector<T, N> {
    vector.reflect(normal)
}

/// See [`Vector::refract`].
#[inline]
pub fn refract<T: Scalar, const N: usize>(
    vector: &Vector<T, N>,
    normal: &Vector<T, N>,
    eta: T::Real,
) -> RealVector<T, N> {
    vector.refract(normal, eta)
}

/// See [`Vector::all`].
#[inline]
pub fn all<T: Scalar, const N: usize>(vector: &Vector<T, N>) -> bool {
    vector.all()
}

/// See [`Vector::any`].
#[inline]
pub fn any<T: Scalar, const N: usize>(vector: &Vector<T, N>) -> bool {
    vector.any()
}

/// See [`Vector::all_by`].
#[inline]
pub fn all_by<T: Scalar, const N: usize>(
    vector: &Vector<T, N>,
    predicate: impl FnMut(T) -> bool,
) -> bool {
    vector.all_by(predicate)
}

/// See [`Vector::any_by`].
#[inline]
pub fn any_by<T: Scalar, const N: usize>(
    vector: &Vector<T, N>,
    predicate: impl FnMut(T) -> bool,
) -> bool {
    vector.any_by(predicate)
}

/// Applies the given function to each component, producing a vector of the
/// function's output kind.
#[inline]
pub fn transform<T: Copy, U, const N: usize>(
    vector: &Vector<T, N>,
    f: impl FnMut(T) -> U,
) -> Vector<U, N> {
    vector.mapped(f)
}

/// See [`Vector::pack`].
#[inline]
pub fn pack<T: Integer, const N: usize>(bits: [u32; N], vector: &Vector<T, N>) -> u64 {
    vector.pack(bits)
}

/// See [`Vector::unpack`].
#[inline]
pub fn unpack<T: Integer, const N: usize>(bits: [u32; N], packed: u64) -> Vector<T, N> {
    Vector::unpack(bits, packed)
}
