use crate::error::FloatStegError;
use crate::float_bits::{FRACTION_BITS, FRACTION_SEGMENTS};
use crate::result::Result;

/// Codec configuration for fraction-bit steganography
#[derive(Debug, Clone)]
pub struct CodecOptions {
    /// How many of the least significant fraction bits of each carrier
    /// sample carry payload.
    ///
    /// Note this number influences the capacity directly, and the
    /// distortion of the carrier: `n` bits cause a relative error of at
    /// most `2^(n - 23)` per sample.
    pub fraction_bits_per_sample: usize,
}

impl Default for CodecOptions {
    /// One whole low fraction segment per sample, barely audible in
    /// audio data and interoperable with segment-based embedding tools.
    fn default() -> Self {
        Self {
            fraction_bits_per_sample: FRACTION_SEGMENTS[2].len(),
        }
    }
}

impl CodecOptions {
    /// Builds options with a validated bit density in 1..=23.
    pub fn with_fraction_bits(bits: usize) -> Result<Self> {
        if bits == 0 || bits > FRACTION_BITS {
            return Err(FloatStegError::UnsupportedBitDensity(bits));
        }

        Ok(Self {
            fraction_bits_per_sample: bits,
        })
    }

    pub fn get_fraction_bits_per_sample(&self) -> usize {
        self.fraction_bits_per_sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_density_is_the_low_fraction_segment() {
        assert_eq!(CodecOptions::default().fraction_bits_per_sample, 6);
    }

    #[test]
    fn should_validate_the_density_range() {
        assert!(CodecOptions::with_fraction_bits(1).is_ok());
        assert!(CodecOptions::with_fraction_bits(23).is_ok());

        assert!(matches!(
            CodecOptions::with_fraction_bits(0),
            Err(FloatStegError::UnsupportedBitDensity(0))
        ));
        assert!(matches!(
            CodecOptions::with_fraction_bits(24),
            Err(FloatStegError::UnsupportedBitDensity(24))
        ));
    }
}
