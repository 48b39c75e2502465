pub mod codec_options;
pub mod lsb_codec;

pub use codec_options::CodecOptions;
pub use lsb_codec::LsbCodec;

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::FloatStegError;
use crate::result::Result;
use crate::Persist;

/// A carrier of raw little-endian 32-bit float samples, the payload of any
/// file format that stores a flat array of floats.
///
/// Container formats (WAV chunks, image pixel layouts, ...) are the job of
/// external tooling, this type only handles the sample stream itself.
#[derive(Debug, Default)]
pub struct RawSamples {
    pub samples: Vec<f32>,
}

impl RawSamples {
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| FloatStegError::ReadError { source })?;

        Self::from_read(&mut BufReader::new(file))
    }

    /// Reads samples until EOF. A trailing fragment of fewer than 4 bytes
    /// is dropped.
    pub fn from_read(input: &mut dyn Read) -> Result<Self> {
        let mut samples = Vec::new();

        loop {
            match input.read_f32::<LittleEndian>() {
                Ok(sample) => samples.push(sample),
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
                Err(source) => return Err(FloatStegError::ReadError { source }),
            }
        }

        Ok(Self { samples })
    }

    /// total payload capacity in bits at the given codec options
    pub fn capacity(&self, opts: &CodecOptions) -> usize {
        self.samples.len() * opts.fraction_bits_per_sample
    }
}

impl Persist for RawSamples {
    fn save_as(&mut self, target: &Path) -> Result<()> {
        let file = File::create(target).map_err(|source| FloatStegError::WriteError { source })?;
        let mut writer = BufWriter::new(file);

        for sample in &self.samples {
            writer
                .write_f32::<LittleEndian>(*sample)
                .map_err(|source| FloatStegError::WriteError { source })?;
        }

        writer
            .flush()
            .map_err(|source| FloatStegError::WriteError { source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_little_endian_floats() {
        let mut raw: Vec<u8> = Vec::new();
        for v in [1.0_f32, -2.0, 0.125] {
            raw.extend_from_slice(&v.to_le_bytes());
        }
        raw.push(0xff); // trailing fragment

        let media = RawSamples::from_read(&mut &raw[..]).unwrap();

        assert_eq!(media.samples, vec![1.0, -2.0, 0.125]);
    }

    #[test]
    fn should_report_capacity() {
        let media = RawSamples {
            samples: vec![0.5; 100],
        };

        assert_eq!(media.capacity(&CodecOptions::default()), 600);
        let opts = CodecOptions::with_fraction_bits(23).unwrap();
        assert_eq!(media.capacity(&opts), 2300);
    }

    #[test]
    fn should_save_and_reload() {
        let out_dir = tempfile::TempDir::new().unwrap();
        let target = out_dir.path().join("samples.f32");

        let mut media = RawSamples {
            samples: vec![0.25, -0.75, 42.0],
        };
        media.save_as(&target).unwrap();

        let reloaded = RawSamples::from_file(&target).unwrap();
        assert_eq!(reloaded.samples, media.samples);
    }
}
