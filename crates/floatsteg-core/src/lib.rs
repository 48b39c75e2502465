//! # Floatsteg Core API
//!
//! Primitives for hiding data in the binary representation of 32-bit
//! IEEE-754 floats:
//!
//! - [`FloatBits`] decomposes a float into its sign, exponent and fraction
//!   bit fields, derives modified copies and reconstructs floats from fields
//! - [`bit_text`] serializes ASCII text to the flat bit sequence spliced
//!   into fraction bits, and back
//! - [`LsbCodec`] streams payload bytes into and out of the least
//!   significant fraction bits of float sample buffers
//!
//! # Usage Examples
//!
//! ## Inspect and modify a float's bit fields
//!
//! ```rust
//! use floatsteg_core::{FieldOverrides, FloatBits};
//!
//! let bits = FloatBits::from_value(-2.0);
//! assert!(bits.sign());
//! assert_eq!(bits.to_bit_string(), "1 10000000 00000000000000000000000");
//!
//! let (_, value) = bits.derive(FieldOverrides::new().with_sign(false)).unwrap();
//! assert_eq!(value, 2.0);
//! ```
//!
//! ## Hide a message inside a float sample buffer
//!
//! ```rust
//! use std::io::{Read, Write};
//! use floatsteg_core::{CodecOptions, LsbCodec};
//!
//! let mut samples = vec![0.5_f32; 64];
//! let options = CodecOptions::default();
//! {
//!     let mut encoder = LsbCodec::encoder(&mut samples, &options);
//!     encoder.write_all(b"Hi").unwrap();
//!     encoder.flush().unwrap();
//! }
//!
//! let mut decoder = LsbCodec::decoder(&samples, &options);
//! let mut secret = [0u8; 2];
//! decoder.read_exact(&mut secret).unwrap();
//! assert_eq!(&secret, b"Hi");
//! ```

#![warn(clippy::redundant_else)]

pub mod bit_iterator;
pub use bit_iterator::BitIterator;

pub mod bit_text;
pub mod commands;
pub mod error;
pub mod float_bits;
pub mod media;
pub mod result;
pub mod universal_decoder;
pub mod universal_encoder;

use std::path::Path;

pub use crate::error::FloatStegError;
pub use crate::float_bits::{fraction_segment, FieldOverrides, FloatBits};
pub use crate::media::{CodecOptions, LsbCodec, RawSamples};
pub use crate::result::Result;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> Result<()>;
}
