use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::media::{CodecOptions, LsbCodec, RawSamples};
use crate::{bit_text, FloatStegError, Persist, Result};

/// Hides an ASCII text message in a file of raw little-endian f32 samples.
///
/// The payload and the carrier capacity are validated before anything is
/// written, so a failing call never leaves a partially written target.
pub fn hide(carrier: &Path, target: &Path, message: &str, opts: &CodecOptions) -> Result<()> {
    let mut media = RawSamples::from_file(carrier)?;

    let payload = bit_text::text_to_bits(message)?;
    let available = media.capacity(opts);
    if payload.len() > available {
        return Err(FloatStegError::CapacityError {
            needed: payload.len(),
            available,
        });
    }

    {
        let mut encoder = LsbCodec::encoder(&mut media.samples, opts);
        encoder
            .write_all(message.as_bytes())
            .map_err(|source| FloatStegError::WriteError { source })?;
        encoder
            .flush()
            .map_err(|source| FloatStegError::WriteError { source })?;
    }

    media.save_as(target)
}

/// Unveils a text message of `message_length` bytes from a stego sample file.
///
/// There is no payload framing on the wire, the length must be agreed out
/// of band between the embedding and the unveiling side.
pub fn unveil(secret: &Path, message_length: usize, opts: &CodecOptions) -> Result<String> {
    let media = RawSamples::from_file(secret)?;

    let mut decoder = LsbCodec::decoder(&media.samples, opts);
    let mut buf = vec![0_u8; message_length];
    decoder
        .read_exact(&mut buf)
        .map_err(|source| FloatStegError::ReadError { source })?;

    if let Some(&byte) = buf.iter().find(|b| !b.is_ascii()) {
        return Err(FloatStegError::UnsupportedCodePoint(byte));
    }

    Ok(String::from_utf8(buf)?)
}

/// Unveils all raw data, no content format interpretation is happening.
/// Just a raw binary dump of every byte gathered by the LSB algorithm.
pub fn unveil_raw(secret: &Path, destination_file: &Path, opts: &CodecOptions) -> Result<()> {
    let media = RawSamples::from_file(secret)?;

    let mut decoder = LsbCodec::decoder(&media.samples, opts);
    let mut content = Vec::new();
    decoder
        .read_to_end(&mut content)
        .map_err(|source| FloatStegError::ReadError { source })?;

    let mut destination = File::create(destination_file)
        .map_err(|source| FloatStegError::WriteError { source })?;
    destination
        .write_all(&content)
        .map_err(|source| FloatStegError::WriteError { source })?;

    Ok(())
}
