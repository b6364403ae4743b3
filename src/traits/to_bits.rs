//! # **ToBit trait** - *IEEE 754 bit conversion*

// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

/// Bit-level views of floating-point values used for hashing and total ordering.
///
/// # Type Parameters
/// The associated `Bits` type is the unsigned integer of the same width, which
/// supports hashing, equality and ordering.
pub trait ToBits: Copy {
    /// The unsigned integer type representing the bit pattern.
    type Bits: Eq + Ord + std::hash::Hash + Copy + Into<u64>;

    /// Raw IEEE 754 bit pattern.
    fn to_bits(self) -> Self::Bits;

    /// Bit pattern with every NaN collapsed to one quiet NaN and `-0.0` folded into `+0.0`.
    ///
    /// Two values that compare equal, or are both NaN, produce the same bits.
    fn canonical_bits(self) -> Self::Bits;

    /// Key whose unsigned ordering matches IEEE 754 `totalOrder` for non-NaN values.
    ///
    /// Negative values (sign bit set) have all bits inverted, non-negative values
    /// only the sign bit flipped. Every NaN, whatever its sign or payload, maps to
    /// the maximum key, so NaNs compare equal and sort above `+inf`.
    fn total_order_key(self) -> Self::Bits;
}

impl ToBits for f32 {
    type Bits = u32;

    #[inline(always)]
    fn to_bits(self) -> u32 {
        f32::to_bits(self)
    }

    #[inline(always)]
    fn canonical_bits(self) -> u32 {
        if self.is_nan() {
            f32::NAN.to_bits()
        } else if self == 0.0 {
            0
        } else {
            f32::to_bits(self)
        }
    }

    #[inline(always)]
    fn total_order_key(self) -> u32 {
        if self.is_nan() {
            return u32::MAX;
        }
        let bits = f32::to_bits(self);
        if bits & 0x8000_0000 != 0 {
            !bits
        } else {
            bits ^ 0x8000_0000
        }
    }
}

impl ToBits for f64 {
    type Bits = u64;

    #[inline(always)]
    fn to_bits(self) -> u64 {
        f64::to_bits(self)
    }

    #[inline(always)]
    fn canonical_bits(self) -> u64 {
        if self.is_nan() {
            f64::NAN.to_bits()
        } else if self == 0.0 {
            0
        } else {
            f64::to_bits(self)
        }
    }

    #[inline(always)]
    fn total_order_key(self) -> u64 {
        if self.is_nan() {
            return u64::MAX;
        }
        let bits = f64::to_bits(self);
        if bits & 0x8000_0000_0000_0000 != 0 {
            !bits
        } else {
            bits ^ 0x8000_0000_0000_0000
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_bits_collapse_nan_and_zero() {
        let quiet = f64::NAN;
        let other = f64::from_bits(0x7ff8_0000_0000_0001);
        assert!(other.is_nan());
        assert_eq!(quiet.canonical_bits(), other.canonical_bits());
        assert_eq!((-0.0f64).canonical_bits(), 0.0f64.canonical_bits());
        assert_ne!(1.0f32.canonical_bits(), 2.0f32.canonical_bits());
    }

    #[test]
    fn test_total_order_key() {
        let vals = [f64::NEG_INFINITY, -2.5, -0.0, 0.0, 1.0, f64::INFINITY, f64::NAN];
        for w in vals.windows(2) {
            assert!(w[0].total_order_key() < w[1].total_order_key(), "{:?}", w);
        }
        assert!((-1.0f32).total_order_key() < 1.0f32.total_order_key());
    }

    #[test]
    fn test_total_order_key_negative_nan_sorts_last() {
        let neg_nan = f64::from_bits(0xfff8_0000_0000_0000);
        assert!(neg_nan.is_nan() && neg_nan.is_sign_negative());
        assert!(neg_nan.total_order_key() > f64::INFINITY.total_order_key());
        assert_eq!(neg_nan.total_order_key(), f64::NAN.total_order_key());

        let neg_nan32 = f32::from_bits(0xffc0_0000);
        assert!(neg_nan32.is_nan());
        assert!(neg_nan32.total_order_key() > f32::INFINITY.total_order_key());
        assert_eq!(neg_nan32.total_order_key(), f32::NAN.total_order_key());
    }
}
