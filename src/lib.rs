//! Fixed-size numeric vectors.
//!
//! A single generic [`Vector<T, N>`](Vector) covers 2-, 3-, 4-, 8- and
//! 16-dimensional vectors over every [`Scalar`] kind: [`f16`], `f32`, `f64`
//! and the signed and unsigned 8-, 16-, 32- and 64-bit integers. Named
//! types such as [`Vector4i`] or [`Vector16h`] are aliases of it.

#[macro_use]
mod macros;

pub mod aliases;
pub mod codec;
mod convert;
pub mod function;
mod packing;
pub mod rounding;
pub mod scalar;
mod swizzle;
pub mod vector;

pub use aliases::*;
pub use half::f16;
pub use rounding::MidpointRounding;
pub use scalar::{Integer, Real, Scalar};
pub use vector::Vector;
