use std::collections::VecDeque;
use std::io::{Read, Result};

use crate::float_bits::{FloatBits, FRACTION_BITS};

/// generic unveil algorithm, decides where in a carrier sample payload hides
pub trait UnveilAlgorithm {
    /// extracts the payload bits of one carrier sample,
    /// returns the bits and how many of them are valid
    fn decode(&self, carrier: f32) -> ([bool; FRACTION_BITS], usize);
}

/// Reads back the `bits` least significant fraction bits of each sample.
pub struct FractionTailUnveil {
    pub bits: usize,
}

impl UnveilAlgorithm for FractionTailUnveil {
    fn decode(&self, carrier: f32) -> ([bool; FRACTION_BITS], usize) {
        let decomposed = FloatBits::from_value(carrier);

        let mut out = [false; FRACTION_BITS];
        let start = FRACTION_BITS - self.bits;
        out[..self.bits].copy_from_slice(&decomposed.fraction()[start..]);

        (out, self.bits)
    }
}

/// Generic stegano decoder, recovers payload bytes from an iterator of
/// carrier samples. Bits are reassembled most significant first; a trailing
/// group that does not fill a whole byte is discarded.
pub struct UniversalDecoder<I, A>
where
    A: UnveilAlgorithm,
{
    input: I,
    algorithm: A,
    queue: VecDeque<bool>,
}

impl<I, A> UniversalDecoder<I, A>
where
    I: Iterator<Item = f32>,
    A: UnveilAlgorithm,
{
    pub fn new(input: I, algorithm: A) -> Self {
        Self {
            input,
            algorithm,
            queue: VecDeque::new(),
        }
    }
}

impl<I, A> Read for UniversalDecoder<I, A>
where
    I: Iterator<Item = f32>,
    A: UnveilAlgorithm,
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut written = 0;

        'bytes: while written < buf.len() {
            while self.queue.len() < 8 {
                match self.input.next() {
                    Some(sample) => {
                        let (bits, n) = self.algorithm.decode(sample);
                        self.queue.extend(bits[..n].iter().copied());
                    }
                    None => break 'bytes,
                }
            }

            let mut byte = 0_u8;
            for _ in 0..8 {
                let bit = self.queue.pop_front().unwrap_or_default();
                byte = (byte << 1) | u8::from(bit);
            }

            buf[written] = byte;
            written += 1;
        }

        Ok(written)
    }
}
