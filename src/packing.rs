//! Packing of integer vectors into a single `u64`.

use crate::{scalar::Integer, vector::Vector};

impl<T: Integer, const N: usize> Vector<T, N> {
    /// Packs the vector into a `u64` by keeping the low `bits[i]` bits of
    /// component `i` and placing them right after the bits of the preceding
    /// components. Component 0 occupies the lowest bits.
    ///
    /// Higher bits of a component that do not fit its width are discarded,
    /// so [`Self::unpack`] only recovers components that are non-negative
    /// and fit in their width.
    ///
    /// # Panics
    /// If any width exceeds the bit width of `T`, or if the widths sum to
    /// more than 64.
    pub fn pack(&self, bits: [u32; N]) -> u64 {
        validate_bit_widths::<T, N>(&bits);

        let mut packed = 0;
        let mut offset = 0;
        for (component, width) in self.iter().zip(bits) {
            let field = component.to_u64_bits() & low_bit_mask(width);
            packed |= field.checked_shl(offset).unwrap_or(0);
            offset += width;
        }
        packed
    }

    /// Unpacks a vector from a `u64` produced by [`Self::pack`] with the
    /// same widths.
    ///
    /// # Panics
    /// If any width exceeds the bit width of `T`, or if the widths sum to
    /// more than 64.
    pub fn unpack(bits: [u32; N], packed: u64) -> Self {
        validate_bit_widths::<T, N>(&bits);

        let mut offset = 0;
        let components = bits.map(|width| {
            let field = packed.checked_shr(offset).unwrap_or(0) & low_bit_mask(width);
            offset += width;
            T::from_u64_bits(field)
        });
        Self::from_array(components)
    }
}

fn validate_bit_widths<T: Integer, const N: usize>(bits: &[u32; N]) {
    for (idx, &width) in bits.iter().enumerate() {
        assert!(
            width <= T::BITS,
            "Bit width {width} for component {idx} exceeds the {} bits of the component kind",
            T::BITS
        );
    }
    let total: u64 = bits.iter().map(|&width| u64::from(width)).sum();
    assert!(
        total <= u64::from(u64::BITS),
        "Total bit width {total} exceeds the {} bits of the packed integer",
        u64::BITS
    );
}

#[inline]
const fn low_bit_mask(width: u32) -> u64 {
    if width == 0 {
        0
    } else {
        u64::MAX >> (u64::BITS - width)
    }
}
