//! Bit-field decomposition and reconstruction of IEEE-754 binary32 values.
//!
//! A 32-bit float is addressable as 1 sign bit, 8 biased-exponent bits and
//! 23 fraction bits. [`FloatBits`] exposes those fields as boolean sequences
//! (most significant bit first), lets callers derive modified copies and
//! reconstructs a float from a field set.
//!
//! Decomposition goes through [`f32::to_bits`], so NaN, infinity, zero and
//! subnormal inputs decompose without failure. Reconstruction however applies
//! the normalized formula `(-1)^sign * 1.fraction * 2^(exponent - 127)`
//! uniformly, including the exponent field values 0 and 255 that IEEE-754
//! reserves for subnormals and Inf/NaN. That is intentional: payloads are
//! spliced into ordinary finite sample values, and both ends of the protocol
//! must compute the same bit pattern. Round trips are bit-exact only for
//! normalized values (biased exponent in 1..=254).

use std::fmt;
use std::ops::Range;

use crate::error::FloatStegError;
use crate::result::Result;

/// width of the exponent bit field
pub const EXPONENT_BITS: usize = 8;

/// width of the explicit fraction (mantissa) bit field
pub const FRACTION_BITS: usize = 23;

/// the exponent field stores the true exponent plus this bias
pub const EXPONENT_BIAS: i32 = 127;

/// The fixed fraction partition used for payload embedding granularity.
///
/// This is a protocol constant: embedding tools on both ends must agree on
/// this exact partition of 8, 9 and 6 bits to interoperate.
pub const FRACTION_SEGMENTS: [Range<usize>; 3] = [0..8, 8..17, 17..23];

/// The decomposition of one 32-bit IEEE-754 float into its bit fields.
///
/// Immutable once constructed, every "modification" goes through
/// [`FloatBits::derive`] and yields a new instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatBits {
    sign: bool,
    exponent: [bool; EXPONENT_BITS],
    fraction: [bool; FRACTION_BITS],
    original_value: f32,
}

impl FloatBits {
    /// Decomposes a float into its sign, exponent and fraction bit fields.
    ///
    /// Never fails: NaN, infinity, zero and subnormal values pass through
    /// with their raw bit pattern (exponent all ones for Inf/NaN, all zeros
    /// for zero/subnormal). Callers must not rely on
    /// [`FloatBits::reconstruct`] being lossless for those classes.
    pub fn from_value(value: f32) -> Self {
        let pattern = value.to_bits();

        let mut exponent = [false; EXPONENT_BITS];
        for (i, bit) in exponent.iter_mut().enumerate() {
            *bit = (pattern >> (30 - i)) & 1 == 1;
        }

        let mut fraction = [false; FRACTION_BITS];
        for (i, bit) in fraction.iter_mut().enumerate() {
            *bit = (pattern >> (22 - i)) & 1 == 1;
        }

        Self {
            sign: pattern >> 31 == 1,
            exponent,
            fraction,
            original_value: value,
        }
    }

    /// `true` for negative values
    pub fn sign(&self) -> bool {
        self.sign
    }

    /// the biased exponent bits, most significant first
    pub fn exponent(&self) -> &[bool; EXPONENT_BITS] {
        &self.exponent
    }

    /// the explicit fraction bits, most significant first,
    /// without the implicit leading mantissa bit
    pub fn fraction(&self) -> &[bool; FRACTION_BITS] {
        &self.fraction
    }

    /// the float this decomposition was built from
    pub fn original_value(&self) -> f32 {
        self.original_value
    }

    /// Calculates the float value encoded by a set of bit fields.
    ///
    /// The implicit leading 1 is prepended to the 23 fraction bits, forming a
    /// 24-bit mantissa in [1.0, 2.0) after division by `2^23`, then scaled by
    /// `2^(exponent - 127)` and signed. The arithmetic runs in f64, where a
    /// 24-bit mantissa times an exact power of two is exact, and the final
    /// cast to f32 is lossless for every normalized result.
    ///
    /// The normalized formula is applied even for exponent fields 0 and 255,
    /// see the module docs for why this deviation from IEEE-754 is kept.
    pub fn reconstruct(sign: bool, exponent: &[bool], fraction: &[bool]) -> Result<f32> {
        if exponent.len() != EXPONENT_BITS {
            return Err(FloatStegError::InvalidExponentLength(exponent.len()));
        }
        if fraction.len() != FRACTION_BITS {
            return Err(FloatStegError::InvalidFractionLength(fraction.len()));
        }

        // 24-bit mantissa with the implicit leading 1 reinserted
        let mantissa = fraction
            .iter()
            .fold(1_u64, |acc, &bit| (acc << 1) | u64::from(bit));
        let biased = exponent
            .iter()
            .fold(0_i32, |acc, &bit| (acc << 1) | i32::from(bit));

        let scale = biased - EXPONENT_BIAS - FRACTION_BITS as i32;
        let magnitude = mantissa as f64 * 2_f64.powi(scale);

        Ok(if sign { -magnitude } else { magnitude } as f32)
    }

    /// Produces a new decomposition with selected fields overwritten.
    ///
    /// Fields not present in `overrides` are taken from `self`. The returned
    /// [`FloatBits`] is the decomposition of the newly reconstructed float,
    /// so it is self-consistent even when the overridden fields do not
    /// describe a normalized value. The reconstructed float is returned
    /// alongside for convenience.
    pub fn derive(&self, overrides: FieldOverrides<'_>) -> Result<(FloatBits, f32)> {
        let sign = overrides.sign.unwrap_or(self.sign);
        let exponent = overrides.exponent.unwrap_or(&self.exponent);
        let fraction = overrides.fraction.unwrap_or(&self.fraction);

        let value = Self::reconstruct(sign, exponent, fraction)?;

        Ok((Self::from_value(value), value))
    }

    /// the sub-slice of this decomposition's fraction for segment `part`,
    /// see [`fraction_segment`]
    pub fn fraction_segment(&self, part: usize) -> Result<&[bool]> {
        fraction_segment(&self.fraction, part)
    }

    /// all 32 bits of the decomposed value, sign first
    pub fn to_bit_string(&self) -> String {
        let mut s = String::with_capacity(34);
        s.push(if self.sign { '1' } else { '0' });
        s.push(' ');
        s.extend(self.exponent.iter().map(|&b| if b { '1' } else { '0' }));
        s.push(' ');
        s.extend(self.fraction.iter().map(|&b| if b { '1' } else { '0' }));
        s
    }
}

impl From<f32> for FloatBits {
    fn from(value: f32) -> Self {
        Self::from_value(value)
    }
}

impl fmt::Display for FloatBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_bit_string())
    }
}

/// Returns the fixed sub-slice of a 23-bit fraction for segment `part`.
///
/// Segment 0 covers fraction bits [0, 8), segment 1 covers [8, 17) and
/// segment 2 the least significant [17, 23). Any other `part` is rejected,
/// as is a fraction that is not exactly 23 bits.
pub fn fraction_segment(fraction: &[bool], part: usize) -> Result<&[bool]> {
    if fraction.len() != FRACTION_BITS {
        return Err(FloatStegError::InvalidFractionLength(fraction.len()));
    }

    let range = FRACTION_SEGMENTS
        .get(part)
        .ok_or(FloatStegError::UnknownFractionSegment(part))?;

    Ok(&fraction[range.clone()])
}

/// Field overrides for [`FloatBits::derive`].
///
/// Enumerates which of the three fields to replace, every field left unset
/// is inherited from the base decomposition.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldOverrides<'a> {
    sign: Option<bool>,
    exponent: Option<&'a [bool]>,
    fraction: Option<&'a [bool]>,
}

impl<'a> FieldOverrides<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sign(mut self, sign: bool) -> Self {
        self.sign = Some(sign);
        self
    }

    pub fn with_exponent(mut self, exponent: &'a [bool]) -> Self {
        self.exponent = Some(exponent);
        self
    }

    pub fn with_fraction(mut self, fraction: &'a [bool]) -> Self {
        self.fraction = Some(fraction);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn should_decompose_one() {
        let b = FloatBits::from_value(1.0);

        assert!(!b.sign());
        assert_eq!(b.exponent(), &bits("01111111")[..], "biased exponent 127");
        assert!(b.fraction().iter().all(|&bit| !bit), "fraction all zeros");
        assert_eq!(b.original_value(), 1.0);
    }

    #[test]
    fn should_decompose_negative_two() {
        let b = FloatBits::from_value(-2.0);

        assert!(b.sign());
        assert_eq!(b.exponent(), &bits("10000000")[..], "biased exponent 128");
        assert!(b.fraction().iter().all(|&bit| !bit));
    }

    #[test]
    fn should_decompose_zero_and_specials_without_failure() {
        for v in [0.0_f32, -0.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let b = FloatBits::from_value(v);
            assert_eq!(b.exponent().len(), EXPONENT_BITS);
            assert_eq!(b.fraction().len(), FRACTION_BITS);
        }

        let zero = FloatBits::from_value(0.0);
        assert!(zero.exponent().iter().all(|&bit| !bit));

        let inf = FloatBits::from_value(f32::INFINITY);
        assert!(inf.exponent().iter().all(|&bit| bit));
    }

    #[test]
    fn should_reconstruct_one() {
        let value =
            FloatBits::reconstruct(false, &bits("01111111"), &[false; FRACTION_BITS]).unwrap();

        assert_eq!(value, 1.0);
    }

    #[test]
    fn should_reject_wrong_exponent_width() {
        let short = FloatBits::reconstruct(false, &bits("0111111"), &[false; FRACTION_BITS]);
        let long = FloatBits::reconstruct(false, &bits("011111111"), &[false; FRACTION_BITS]);

        assert!(matches!(
            short,
            Err(FloatStegError::InvalidExponentLength(7))
        ));
        assert!(matches!(long, Err(FloatStegError::InvalidExponentLength(9))));
    }

    #[test]
    fn should_reject_wrong_fraction_width() {
        let result = FloatBits::reconstruct(false, &bits("01111111"), &[false; 22]);

        assert!(matches!(
            result,
            Err(FloatStegError::InvalidFractionLength(22))
        ));
    }

    #[test]
    fn should_round_trip_all_normalized_exponents() {
        // every biased exponent with a handful of fraction/sign patterns
        for biased in 1_u32..=254 {
            for fraction in [0_u32, 1, 0b100_0000_0000_0000_0000_0000, 0x7F_FFFF, 0x2A_AAAA] {
                for sign in [0_u32, 1] {
                    let pattern = (sign << 31) | (biased << 23) | fraction;
                    let value = f32::from_bits(pattern);

                    let b = FloatBits::from_value(value);
                    let reconstructed =
                        FloatBits::reconstruct(b.sign(), b.exponent(), b.fraction()).unwrap();

                    assert_eq!(
                        reconstructed.to_bits(),
                        pattern,
                        "bit pattern {pattern:#010x} did not round trip"
                    );
                }
            }
        }
    }

    #[test]
    fn should_derive_with_sign_flip() {
        let base = FloatBits::from_value(-2.0);
        let (derived, value) = base.derive(FieldOverrides::new().with_sign(false)).unwrap();

        assert_eq!(value, 2.0);
        assert_eq!(derived.original_value(), 2.0);
        assert!(!derived.sign());
        assert_eq!(derived.exponent(), base.exponent());
    }

    #[test]
    fn should_derive_self_consistently() {
        let base = FloatBits::from_value(13.37);
        let mut fraction = *base.fraction();
        fraction[22] = !fraction[22];

        let (derived, value) = base
            .derive(FieldOverrides::new().with_fraction(&fraction))
            .unwrap();

        // the derived object is the decomposition of the new float
        assert_eq!(derived.original_value(), value);
        assert_eq!(derived.fraction(), &fraction);
    }

    #[test]
    fn should_propagate_shape_errors_through_derive() {
        let base = FloatBits::from_value(1.0);
        let result = base.derive(FieldOverrides::new().with_exponent(&[true; 9]));

        assert!(matches!(
            result,
            Err(FloatStegError::InvalidExponentLength(9))
        ));
    }

    #[test]
    fn should_partition_fraction_into_three_segments() {
        let mut fraction = [false; FRACTION_BITS];
        for (i, bit) in fraction.iter_mut().enumerate() {
            *bit = i % 3 == 0;
        }

        let s0 = fraction_segment(&fraction, 0).unwrap();
        let s1 = fraction_segment(&fraction, 1).unwrap();
        let s2 = fraction_segment(&fraction, 2).unwrap();

        assert_eq!((s0.len(), s1.len(), s2.len()), (8, 9, 6));

        let rejoined: Vec<bool> = s0.iter().chain(s1).chain(s2).copied().collect();
        assert_eq!(rejoined, fraction);
    }

    #[test]
    fn should_reject_unknown_segment() {
        let fraction = [false; FRACTION_BITS];
        let result = fraction_segment(&fraction, 3);

        assert!(matches!(
            result,
            Err(FloatStegError::UnknownFractionSegment(3))
        ));
    }

    #[test]
    fn should_apply_normalized_formula_to_reserved_exponents() {
        // documented deviation: exponent field 0 is not treated as subnormal,
        // the normalized formula yields 1.0 * 2^-127
        let value = FloatBits::reconstruct(false, &[false; EXPONENT_BITS], &[false; FRACTION_BITS])
            .unwrap();
        assert_eq!(value, f32::from_bits(0x0040_0000));

        // and 255 runs through the same formula, overflowing to infinity
        let value =
            FloatBits::reconstruct(false, &[true; EXPONENT_BITS], &[false; FRACTION_BITS]).unwrap();
        assert_eq!(value, f32::INFINITY);
    }

    #[test]
    fn should_render_bit_string() {
        let b = FloatBits::from_value(1.0);

        assert_eq!(
            b.to_bit_string(),
            "0 01111111 00000000000000000000000"
        );
    }
}
