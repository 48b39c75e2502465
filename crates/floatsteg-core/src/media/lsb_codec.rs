use std::io::{Read, Write};

use super::codec_options::CodecOptions;
use crate::universal_decoder::{FractionTailUnveil, UniversalDecoder};
use crate::universal_encoder::{FractionTailHide, UniversalEncoder};

/// Factory for decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// builds a fraction-LSB decoder over float samples that implements Read
    pub fn decoder<'i>(input: &'i [f32], opts: &CodecOptions) -> Box<dyn Read + 'i> {
        Box::new(UniversalDecoder::new(
            input.iter().copied(),
            FractionTailUnveil {
                bits: opts.fraction_bits_per_sample,
            },
        ))
    }

    /// builds a fraction-LSB encoder over float samples that implements Write
    pub fn encoder<'i>(carrier: &'i mut [f32], opts: &CodecOptions) -> Box<dyn Write + 'i> {
        Box::new(UniversalEncoder::new(
            carrier.iter_mut(),
            FractionTailHide {
                bits: opts.fraction_bits_per_sample,
            },
        ))
    }
}
