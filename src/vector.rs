//! Vectors.

use crate::scalar::Scalar;
use anyhow::bail;
use bytemuck::{Pod, Zeroable};
use half::f16;
use std::{
    array, fmt,
    hash::{Hash, Hasher},
    ops::{Index, Mul},
    slice,
};

/// An `N`-dimensional vector with components of scalar kind `T`.
///
/// Vectors are plain values: they are `Copy`, their components are stored
/// sequentially without padding, and no operation modifies a vector in
/// place. Every operator and function returns a new vector.
///
/// Negating an unsigned vector gives a vector of the nearest wider signed
/// kind.
///
/// # Wrapping
/// `-v` for a `u64` vector gives an `i64` vector. Components above
/// `i64::MAX` are reinterpreted as `i64` and negated with wrapping, so
/// `u64::MAX` negates to `1`.
#[repr(transparent)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Vector<T, const N: usize> {
    components: [T; N],
}

impl<T, const N: usize> Vector<T, N> {
    /// The number of components.
    pub const DIMENSION: usize = N;

    /// Creates a new vector with the given components.
    #[inline]
    pub const fn from_array(components: [T; N]) -> Self {
        Self { components }
    }

    /// The components as an array reference.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.components
    }

    /// The components as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.components
    }

    /// Returns an iterator over the components in index order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.components.iter()
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: T) -> Self {
        Self::from_array([value; N])
    }

    /// Creates a new vector from the first `N` elements of the given slice.
    ///
    /// # Errors
    /// Returns an error if the slice has fewer than `N` elements.
    #[inline]
    pub fn from_slice(slice: &[T]) -> anyhow::Result<Self> {
        Self::from_slice_at(slice, 0)
    }

    /// Creates a new vector from the `N` elements of the given slice starting
    /// at `offset`.
    ///
    /// # Errors
    /// Returns an error if the slice has fewer than `offset + N` elements.
    pub fn from_slice_at(slice: &[T], offset: usize) -> anyhow::Result<Self> {
        let Some(components) = offset
            .checked_add(N)
            .and_then(|end| slice.get(offset..end))
        else {
            bail!(
                "Creating a vector with {} components from offset {} requires at least {} elements, but the slice has {}",
                N,
                offset,
                offset.saturating_add(N),
                slice.len()
            );
        };
        Ok(Self::from_array(components.try_into()?))
    }

    /// Creates a new vector whose leading `M` components are taken from
    /// `head` and remaining `K` components from `tail`.
    ///
    /// Fails to compile unless `M + K == N`.
    #[inline]
    pub fn from_head_and_tail<const M: usize, const K: usize>(
        head: &Vector<T, M>,
        tail: [T; K],
    ) -> Self {
        const { assert!(M + K == N, "head and tail must together have N components") };
        Self::from_array(array::from_fn(|idx| {
            if idx < M {
                head.components[idx]
            } else {
                tail[idx - M]
            }
        }))
    }

    /// Returns a copy of the components. The array is independent of the
    /// vector.
    #[inline]
    pub const fn to_array(&self) -> [T; N] {
        self.components
    }

    /// The component at the given index, or [`None`] if the index is out of
    /// bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        self.components.get(index).copied()
    }

    /// Creates a new vector by picking the components at the given indices,
    /// in order. Indices may repeat.
    ///
    /// # Panics
    /// If any index is out of bounds.
    #[inline]
    pub fn swizzle<const M: usize>(&self, indices: [usize; M]) -> Vector<T, M> {
        Vector::from_array(indices.map(|idx| self.components[idx]))
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped<U>(&self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector::from_array(self.components.map(f))
    }

    /// Returns a vector with the given closure applied to each pair of
    /// corresponding components in this and another vector.
    #[inline]
    pub fn zip_mapped<U: Copy, V>(
        &self,
        other: &Vector<U, N>,
        mut f: impl FnMut(T, U) -> V,
    ) -> Vector<V, N> {
        Vector::from_array(array::from_fn(|idx| {
            f(self.components[idx], other.components[idx])
        }))
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// The vector with all components zero.
    pub const ZERO: Self = Self::same(T::ZERO);

    /// The vector with all components one.
    pub const ONE: Self = Self::same(T::ONE);

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::ZERO
    }

    /// Creates the unit vector along the axis with the given index.
    ///
    /// # Panics
    /// If `axis` is not smaller than `N`.
    #[inline]
    pub fn unit(axis: usize) -> Self {
        let mut components = [T::ZERO; N];
        components[axis] = T::ONE;
        Self::from_array(components)
    }
}

impl<T: Copy> Vector<T, 2> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> T {
        self.components[0]
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> T {
        self.components[1]
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: T) -> Vector<T, 3> {
        Vector::<T, 3>::new(self.x(), self.y(), z)
    }
}

impl<T: Copy> Vector<T, 3> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> T {
        self.components[0]
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> T {
        self.components[1]
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> T {
        self.components[2]
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: T) -> Vector<T, 4> {
        Vector::<T, 4>::new(self.x(), self.y(), self.z(), w)
    }
}

impl<T: Copy> Vector<T, 4> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::from_array([x, y, z, w])
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> T {
        self.components[0]
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> T {
        self.components[1]
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> T {
        self.components[2]
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> T {
        self.components[3]
    }
}

macro_rules! impl_numbered_accessors {
    ($n:literal; $($idx:literal),+) => {
        pastey::paste! {
            impl<T: Copy> Vector<T, $n> {
                /// Creates a new vector with the given components.
                #[inline]
                pub const fn new($([<v $idx>]: T),+) -> Self {
                    Self::from_array([$([<v $idx>]),+])
                }

                $(
                    #[doc = "Component " $idx "."]
                    #[inline]
                    pub const fn [<v $idx>](&self) -> T {
                        self.components[$idx]
                    }
                )+
            }
        }
    };
}

impl_numbered_accessors!(8; 0, 1, 2, 3, 4, 5, 6, 7);
impl_numbered_accessors!(16; 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15);

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(components: [T; N]) -> Self {
        Self::from_array(components)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(vector: Vector<T, N>) -> Self {
        vector.components
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = anyhow::Error;

    #[inline]
    fn try_from(slice: &[T]) -> anyhow::Result<Self> {
        Self::from_slice(slice)
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.components
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl_binop!(
    Add, add,
    [T: Scalar, const N: usize],
    Vector<T, N>, Vector<T, N>, Vector<T, N>,
    |a, b| { a.zip_mapped(b, |a, b| a + b) }
);

impl_binop!(
    Sub, sub,
    [T: Scalar, const N: usize],
    Vector<T, N>, Vector<T, N>, Vector<T, N>,
    |a, b| { a.zip_mapped(b, |a, b| a - b) }
);

impl_binop!(
    Mul, mul,
    [T: Scalar, const N: usize],
    Vector<T, N>, T, Vector<T, N>,
    |a, b| { a.mapped(|a| a * *b) }
);

impl_binop!(
    Div, div,
    [T: Scalar, const N: usize],
    Vector<T, N>, T, Vector<T, N>,
    |a, b| { a.mapped(|a| a / *b) }
);

impl_unary_op!(
    Neg, neg,
    [T: Scalar, const N: usize],
    Vector<T, N>, Vector<T::Signed, N>,
    |val| { val.mapped(T::negate) }
);

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),+) => {
        $(
            impl_binop!(
                Mul, mul,
                [const N: usize],
                $t, Vector<$t, N>, Vector<$t, N>,
                |a, b| { Mul::mul(b, a) }
            );
        )+
    };
}

impl_scalar_lhs_mul!(f16, f32, f64, i8, u8, i16, u16, i32, u32, i64, u64);

impl<T: Scalar, const N: usize> Hash for Vector<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for component in &self.components {
            state.write_u64(component.hash_bits());
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector{N}")?;
        f.debug_list().entries(self.components.iter()).finish()
    }
}

impl_component_fmt!(Display, LowerExp, UpperExp, LowerHex, UpperHex, Octal, Binary);

// SAFETY: `Vector` is a transparent wrapper around `[T; N]`, which is all
// zeros when every `T` is.
unsafe impl<T: Zeroable, const N: usize> Zeroable for Vector<T, N> {}

// SAFETY: `Vector` is a transparent wrapper around `[T; N]`, which has no
// padding and is valid for any bit pattern when `T` is.
unsafe impl<T: Pod, const N: usize> Pod for Vector<T, N> {}

impl<T, const N: usize> approx::AbsDiffEq for Vector<T, N>
where
    T: approx::AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.components
            .iter()
            .zip(&other.components)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> approx::RelativeEq for Vector<T, N>
where
    T: approx::RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.components
            .iter()
            .zip(&other.components)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize, const N: usize> serde::Serialize for Vector<T, N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeTuple;

        let mut tuple = serializer.serialize_tuple(N)?;
        for component in &self.components {
            tuple.serialize_element(component)?;
        }
        tuple.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T, const N: usize> serde::Deserialize<'de> for Vector<T, N>
where
    T: serde::Deserialize<'de> + Copy + Default,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de;
        use std::marker::PhantomData;

        struct ComponentVisitor<T, const N: usize>(PhantomData<T>);

        impl<'de, T, const N: usize> de::Visitor<'de> for ComponentVisitor<T, N>
        where
            T: serde::Deserialize<'de> + Copy + Default,
        {
            type Value = Vector<T, N>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a sequence of {N} vector components")
            }

            fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut components = [T::default(); N];
                for (idx, component) in components.iter_mut().enumerate() {
                    *component = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(idx, &self))?;
                }
                Ok(Vector::from_array(components))
            }
        }

        deserializer.deserialize_tuple(N, ComponentVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::{Vector2, Vector3, Vector4, Vector8};
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn constructing_vector4_gives_components_in_order() {
        let v = Vector4::<i32>::new(1, 2, 3, 4);
        assert_eq!(v[0], 1);
        assert_eq!(v[1], 2);
        assert_eq!(v[2], 3);
        assert_eq!(v[3], 4);
        assert_eq!((v.x(), v.y(), v.z(), v.w()), (1, 2, 3, 4));
    }

    #[test]
    fn constructing_vector16_gives_numbered_components() {
        let v = Vector::<u8, 16>::from_array(array::from_fn(|idx| idx as u8));
        assert_eq!(v.v0(), 0);
        assert_eq!(v.v7(), 7);
        assert_eq!(v.v15(), 15);

        let v = Vector8::<i64>::new(0, 10, 20, 30, 40, 50, 60, 70);
        assert_eq!(v.v5(), 50);
    }

    #[test]
    fn same_and_zeros_fill_every_component() {
        assert_eq!(Vector::<f32, 3>::same(2.5), Vector3::new(2.5, 2.5, 2.5));
        assert_eq!(Vector::<u16, 8>::zeros().to_array(), [0; 8]);
        assert_eq!(Vector::<i8, 2>::default(), Vector2::new(0, 0));
        assert_eq!(Vector::<f64, 4>::ONE, Vector::same(1.0));
    }

    #[test]
    fn unit_vectors_have_single_one() {
        assert_eq!(Vector::<i32, 3>::unit(1), Vector3::new(0, 1, 0));
    }

    #[test]
    #[should_panic]
    fn unit_vector_with_out_of_bounds_axis_panics() {
        let _ = Vector::<i32, 3>::unit(3);
    }

    #[test]
    fn extending_vectors_works() {
        let v2 = Vector2::<i16>::new(1, 2);
        assert_eq!(v2.extended(3), Vector3::new(1, 2, 3));
        assert_eq!(v2.extended(3).extended(4), Vector4::new(1, 2, 3, 4));

        let v8 = Vector::<i16, 8>::from_head_and_tail(&Vector4::new(1, 2, 3, 4), [5, 6, 7, 8]);
        assert_eq!(v8.to_array(), [1, 2, 3, 4, 5, 6, 7, 8]);

        let v4 = Vector::<f32, 4>::from_head_and_tail(&Vector2::new(1.0, 2.0), [3.0, 4.0]);
        assert_eq!(v4, Vector4::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn constructing_from_slice_works() {
        let data = [1_u32, 2, 3, 4, 5, 6];
        assert_eq!(
            Vector::<u32, 4>::from_slice(&data).unwrap(),
            Vector4::new(1, 2, 3, 4)
        );
        assert_eq!(
            Vector::<u32, 4>::from_slice_at(&data, 2).unwrap(),
            Vector4::new(3, 4, 5, 6)
        );
        assert_eq!(
            Vector::<u32, 2>::try_from(&data[4..]).unwrap(),
            Vector2::new(5, 6)
        );
    }

    #[test]
    fn constructing_from_too_short_slice_fails() {
        let data = [1_u32, 2, 3];
        assert!(Vector::<u32, 4>::from_slice(&data).is_err());
        assert!(Vector::<u32, 16>::from_slice(&data).is_err());
        assert!(Vector::<u32, 2>::from_slice_at(&data, 2).is_err());
        assert!(Vector::<u32, 2>::from_slice_at(&data, usize::MAX).is_err());
    }

    #[test]
    fn to_array_is_independent_of_vector() {
        let v = Vector3::<i32>::new(1, 2, 3);
        let mut array = v.to_array();
        array[0] = 100;
        assert_eq!(v, Vector3::new(1, 2, 3));
        assert_eq!(Vector::from_array(v.to_array()), v);
    }

    #[test]
    fn vector_indexing_works() {
        let v = Vector2::<f64>::new(1.0, 2.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v.get(1), Some(2.0));
        assert_eq!(v.get(2), None);
    }

    #[test]
    #[should_panic]
    fn indexing_vector_out_of_bounds_panics() {
        let v = Vector4::<i32>::new(1, 2, 3, 4);
        let _ = v[4];
    }

    #[test]
    fn swizzling_with_indices_works() {
        let v = Vector4::<i32>::new(1, 2, 3, 4);
        assert_eq!(v.swizzle([2, 0, 1]), Vector3::new(3, 1, 2));
        assert_eq!(v.swizzle([3, 3]), Vector2::new(4, 4));
        assert_eq!(
            v.swizzle([0, 1, 2, 3, 0, 1, 2, 3]).to_array(),
            [1, 2, 3, 4, 1, 2, 3, 4]
        );
    }

    #[test]
    #[should_panic]
    fn swizzling_with_out_of_bounds_index_panics() {
        let v = Vector2::<i32>::new(1, 2);
        let _ = v.swizzle([0, 2]);
    }

    #[test]
    fn vector_arithmetic_operations_work() {
        let v1 = Vector4::<i32>::new(1, 2, 3, 4);
        let v2 = Vector4::<i32>::new(10, 20, 30, 40);

        assert_eq!(&v1 + &v2, Vector4::new(11, 22, 33, 44));
        assert_eq!(v2 - v1, Vector4::new(9, 18, 27, 36));
        assert_eq!(&v1 * 2, Vector4::new(2, 4, 6, 8));
        assert_eq!(3_i32 * &v1, Vector4::new(3, 6, 9, 12));
        assert_eq!(v1 * 3, 3_i32 * v1);
        assert_eq!(v2 / 3, Vector4::new(3, 6, 10, 13));
        assert_eq!(-v1, Vector4::new(-1, -2, -3, -4));
        assert_eq!(-(-v1), v1);
    }

    #[test]
    fn negating_unsigned_vector_gives_wider_signed_vector() {
        let v = Vector2::<u32>::new(u32::MAX, 7);
        let negated: Vector<i64, 2> = -v;
        assert_eq!(negated, Vector2::new(-i64::from(u32::MAX), -7));

        let negated: Vector<i16, 3> = -Vector3::<u8>::new(0, 1, 255);
        assert_eq!(negated, Vector3::new(0, -1, -255));
    }

    #[test]
    fn negating_u64_vector_wraps_above_i64_range() {
        let negated: Vector<i64, 3> = -Vector3::<u64>::new(u64::MAX, 1 << 63, 5);
        assert_eq!(negated, Vector3::new(1, i64::MIN, -5));
    }

    #[test]
    fn half_vector_arithmetic_works() {
        let v = Vector2::<f16>::new(f16::from_f32(1.5), f16::from_f32(-2.0));
        assert_eq!(
            v + v,
            Vector2::new(f16::from_f32(3.0), f16::from_f32(-4.0))
        );
        assert_eq!(f16::from_f32(2.0) * v, v + v);
    }

    #[test]
    fn integer_division_truncates() {
        let v = Vector2::<i32>::new(7, -7);
        assert_eq!(v / 2, Vector2::new(3, -3));
    }

    #[test]
    #[should_panic]
    fn integer_division_by_zero_panics() {
        let v = Vector2::<i32>::new(7, -7);
        let _ = v / 0;
    }

    #[test]
    fn float_division_by_zero_gives_infinity() {
        let v = Vector2::<f32>::new(1.0, -1.0) / 0.0;
        assert_eq!(v, Vector2::new(f32::INFINITY, f32::NEG_INFINITY));
    }

    #[test]
    fn equality_is_component_wise() {
        let v = Vector3::<i8>::new(1, 2, 3);
        assert_eq!(v, Vector3::new(1, 2, 3));
        assert_ne!(v, Vector3::new(1, 2, 4));
        assert_ne!(Vector::<f32, 2>::same(f32::NAN), Vector::same(f32::NAN));
    }

    #[test]
    fn equal_vectors_have_equal_hashes() {
        let a = Vector4::<i64>::new(1, 2, 3, 4);
        assert_eq!(hash_of(&a), hash_of(&Vector4::new(1, 2, 3, 4)));

        let b = Vector2::<f32>::new(0.0, 1.0);
        let c = Vector2::<f32>::new(-0.0, 1.0);
        assert_eq!(b, c);
        assert_eq!(hash_of(&b), hash_of(&c));
    }

    #[test]
    fn formatting_vector_works() {
        assert_eq!(Vector4::<i32>::new(1, 2, 3, 4).to_string(), "(1, 2, 3, 4)");
        assert_eq!(Vector2::<u8>::new(7, 9).to_string(), "(7, 9)");
        assert_eq!(
            format!("{:.2}", Vector3::<f64>::new(1.0, 0.5, -2.25)),
            "(1.00, 0.50, -2.25)"
        );
        assert_eq!(format!("{:x}", Vector2::<u16>::new(255, 16)), "(ff, 10)");
        assert_eq!(format!("{:e}", Vector2::<f32>::new(1500.0, 0.25)), "(1.5e3, 2.5e-1)");
    }

    #[test]
    fn debug_formatting_includes_dimension() {
        assert_eq!(format!("{:?}", Vector3::<i32>::new(1, 2, 3)), "Vector3[1, 2, 3]");
    }

    #[test]
    fn iterating_over_vector_gives_components_in_order() {
        let v = Vector3::<u64>::new(5, 6, 7);
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![5, 6, 7]);
        assert_eq!(v.into_iter().sum::<u64>(), 18);
    }

    #[test]
    fn vector_can_be_viewed_as_bytes() {
        let v = Vector2::<u16>::new(0x0102, 0x0304);
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 4);
        let back: Vector<u16, 2> = bytemuck::pod_read_unaligned(bytes);
        assert_eq!(back, v);
        assert_eq!(size_of::<Vector<f16, 16>>(), 32);
    }

    #[test]
    fn approximate_comparison_works() {
        let a = Vector3::<f64>::new(1.0, 2.0, 3.0);
        let b = Vector3::<f64>::new(1.0 + 1e-12, 2.0, 3.0 - 1e-12);
        approx::assert_abs_diff_eq!(a, b, epsilon = 1e-9);
        approx::assert_relative_ne!(a, Vector3::new(1.0, 2.1, 3.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializing_vector_as_tuple_works() {
        let v = Vector3::<i32>::new(1, -2, 3);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1,-2,3]");
        assert_eq!(serde_json::from_str::<Vector<i32, 3>>(&json).unwrap(), v);
        assert!(serde_json::from_str::<Vector<i32, 3>>("[1,2]").is_err());
    }
}
