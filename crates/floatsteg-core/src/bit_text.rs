//! Serialization of text payloads to flat bit sequences and back.
//!
//! Each character becomes its 8-bit code point, most significant bit first,
//! concatenated in character order with no delimiter, length prefix or
//! terminator. Only ASCII (code points 0 to 127) is supported, anything
//! beyond is rejected instead of silently truncated. The payload length must
//! be agreed out of band by the callers.

use bitstream_io::{BigEndian, BitWrite, BitWriter};

use crate::bit_iterator::BitIterator;
use crate::error::FloatStegError;
use crate::result::Result;

/// Serializes an ASCII string into its flat bit sequence.
pub fn text_to_bits(text: &str) -> Result<Vec<bool>> {
    ensure_ascii(text)?;

    Ok(BitIterator::new(text.as_bytes())
        .map(|bit| bit == 1)
        .collect())
}

/// Serializes an ASCII string into one 8-bit group per character.
pub fn text_to_bit_groups(text: &str) -> Result<Vec<[bool; 8]>> {
    let bits = text_to_bits(text)?;

    Ok(bits
        .chunks_exact(8)
        .map(|chunk| {
            let mut group = [false; 8];
            group.copy_from_slice(chunk);
            group
        })
        .collect())
}

/// Deserializes a flat bit sequence back into the ASCII string it encodes.
///
/// The sequence length must be a multiple of 8, and every 8-bit group must
/// decode to a code point in the ASCII range.
pub fn bits_to_text(bits: &[bool]) -> Result<String> {
    if bits.len() % 8 != 0 {
        return Err(FloatStegError::UnalignedBitSequence(bits.len()));
    }

    let mut bytes = Vec::with_capacity(bits.len() / 8);
    {
        let mut writer = BitWriter::endian(&mut bytes, BigEndian);
        for &bit in bits {
            writer.write_bit(bit)?;
        }
    }

    if let Some(&byte) = bytes.iter().find(|b| !b.is_ascii()) {
        return Err(FloatStegError::UnsupportedCodePoint(byte));
    }

    Ok(String::from_utf8(bytes)?)
}

pub(crate) fn ensure_ascii(text: &str) -> Result<()> {
    match text.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
        Some((index, c)) => Err(FloatStegError::UnsupportedCharacter(c, index)),
        None => Ok(()),
    }
}
