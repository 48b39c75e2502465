use std::collections::VecDeque;
use std::io::{Error, ErrorKind, Result, Write};

use crate::bit_iterator::BitIterator;
use crate::float_bits::{FieldOverrides, FloatBits, FRACTION_BITS};

/// generic hiding algorithm, decides where in a carrier sample payload goes
pub trait HideAlgorithm {
    /// splices `bits` into one carrier sample, returns the stego sample
    fn encode(&self, carrier: f32, bits: &[bool]) -> crate::result::Result<f32>;

    /// how many payload bits one sample carries
    fn bits_per_sample(&self) -> usize;
}

/// Overwrites the `bits` least significant fraction bits of each sample.
///
/// When fewer payload bits than `bits` remain (the final sample of a
/// payload), the leftover positions keep the carrier's original bits.
pub struct FractionTailHide {
    pub bits: usize,
}

impl HideAlgorithm for FractionTailHide {
    fn encode(&self, carrier: f32, bits: &[bool]) -> crate::result::Result<f32> {
        let base = FloatBits::from_value(carrier);
        let mut fraction = *base.fraction();

        let start = FRACTION_BITS - self.bits;
        for (slot, &bit) in fraction[start..].iter_mut().zip(bits) {
            *slot = bit;
        }

        let (_, value) = base.derive(FieldOverrides::new().with_fraction(&fraction))?;
        Ok(value)
    }

    fn bits_per_sample(&self) -> usize {
        self.bits
    }
}

/// Generic stegano encoder, hides payload bytes in an iterator of mutable
/// carrier samples. Payload bits are consumed most significant first, in
/// groups of `algorithm.bits_per_sample()` per sample.
pub struct UniversalEncoder<I, A>
where
    A: HideAlgorithm,
{
    input: I,
    algorithm: A,
    queue: VecDeque<bool>,
}

impl<'c, I, A> UniversalEncoder<I, A>
where
    I: Iterator<Item = &'c mut f32>,
    A: HideAlgorithm,
{
    pub fn new(input: I, algorithm: A) -> Self {
        Self {
            input,
            algorithm,
            queue: VecDeque::new(),
        }
    }

    /// splices one group of queued bits into the next carrier sample
    fn hide_group(&mut self, len: usize) -> Result<()> {
        let sample = self.input.next().ok_or_else(|| {
            Error::new(ErrorKind::WriteZero, "carrier samples exhausted")
        })?;

        let mut bits = [false; FRACTION_BITS];
        for slot in bits.iter_mut().take(len) {
            if let Some(bit) = self.queue.pop_front() {
                *slot = bit;
            }
        }

        *sample = self
            .algorithm
            .encode(*sample, &bits[..len])
            .map_err(|e| Error::new(ErrorKind::Other, e.to_string()))?;

        Ok(())
    }
}

impl<'c, I, A> Write for UniversalEncoder<I, A>
where
    I: Iterator<Item = &'c mut f32>,
    A: HideAlgorithm,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        for bit in BitIterator::new(buf) {
            self.queue.push_back(bit == 1);
        }

        let n = self.algorithm.bits_per_sample();
        while self.queue.len() >= n {
            self.hide_group(n)?;
        }

        Ok(buf.len())
    }

    /// splices a trailing partial bit group into one final sample
    fn flush(&mut self) -> Result<()> {
        if !self.queue.is_empty() {
            let len = self.queue.len();
            self.hide_group(len)?;
        }

        Ok(())
    }
}
