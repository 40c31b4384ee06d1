//! Binary encoding of vectors.
//!
//! A vector is encoded as its components in index order, each in the
//! fixed-width encoding of its scalar kind, with no framing. `f16` takes two
//! bytes (IEEE binary16), `f32` and `f64` use their IEEE-754 layouts and
//! integers are two's complement.

use crate::{scalar::Scalar, vector::Vector};
use std::io::{self, Read, Write};

const MAX_SCALAR_BYTES: usize = 8;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Number of bytes in the binary encoding of the vector.
    pub const ENCODED_SIZE: usize = N * T::BYTES;

    /// Writes the components in index order as little-endian values.
    pub fn write_le<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let mut buffer = vec![0; Self::ENCODED_SIZE];
        for (bytes, component) in buffer.chunks_exact_mut(T::BYTES).zip(self) {
            component.write_le_bytes(bytes);
        }
        writer.write_all(&buffer)
    }

    /// Reads a vector written by [`Self::write_le`].
    ///
    /// # Errors
    /// Returns an error of kind [`io::ErrorKind::UnexpectedEof`] if the
    /// reader ends before the whole vector has been read.
    pub fn read_le<R: Read>(reader: &mut R) -> io::Result<Self> {
        let mut buffer = [0; MAX_SCALAR_BYTES];
        let bytes = &mut buffer[..T::BYTES];
        let mut components = [T::ZERO; N];
        for component in &mut components {
            reader.read_exact(bytes)?;
            *component = T::read_le_bytes(bytes);
        }
        Ok(Self::from_array(components))
    }

    /// Writes the in-memory bytes of the vector, which hold the components
    /// in index order in the byte order of the platform.
    pub fn write_ne<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(bytemuck::bytes_of(self))
    }

    /// Reads a vector written by [`Self::write_ne`] on a platform with the
    /// same byte order.
    ///
    /// # Errors
    /// Returns an error of kind [`io::ErrorKind::UnexpectedEof`] if the
    /// reader ends before the whole vector has been read.
    pub fn read_ne<R: Read>(reader: &mut R) -> io::Result<Self> {
        let mut vector = Self::ZERO;
        reader.read_exact(bytemuck::bytes_of_mut(&mut vector))?;
        Ok(vector)
    }
}

/// Writes the given vectors back to back with [`Vector::write_le`].
pub fn write_slice_le<T: Scalar, const N: usize, W: Write>(
    vectors: &[Vector<T, N>],
    writer: &mut W,
) -> io::Result<()> {
    log::trace!(
        "Writing {} vectors ({} bytes)",
        vectors.len(),
        vectors.len() * Vector::<T, N>::ENCODED_SIZE
    );
    for vector in vectors {
        vector.write_le(writer)?;
    }
    Ok(())
}

/// Reads `count` vectors written back to back with [`Vector::write_le`].
///
/// # Errors
/// Returns an error of kind [`io::ErrorKind::UnexpectedEof`] if the reader
/// ends before all the vectors have been read.
pub fn read_slice_le<T: Scalar, const N: usize, R: Read>(
    reader: &mut R,
    count: usize,
) -> io::Result<Vec<Vector<T, N>>> {
    log::trace!(
        "Reading {count} vectors ({} bytes)",
        count * Vector::<T, N>::ENCODED_SIZE
    );
    (0..count).map(|_| Vector::read_le(reader)).collect()
}
