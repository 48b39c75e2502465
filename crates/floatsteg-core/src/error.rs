use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FloatStegError {
    /// Represents an exponent bit field that is not exactly 8 bits wide
    #[error("Exponent must be exactly 8 bits, got {0}")]
    InvalidExponentLength(usize),

    /// Represents a fraction bit field that is not exactly 23 bits wide
    #[error("Fraction must be exactly 23 bits, got {0}")]
    InvalidFractionLength(usize),

    /// Represents a serialized text bit sequence whose length is not byte aligned
    #[error("Bit sequence length {0} is not a multiple of 8")]
    UnalignedBitSequence(usize),

    /// Represents a fraction segment index outside the fixed 3-part partition
    #[error("Unknown fraction segment {0}, supported segments are 0, 1 and 2")]
    UnknownFractionSegment(usize),

    /// Represents a character that cannot be serialized, e.g. an umlaut
    #[error("Character {0:?} at index {1} is outside the ASCII range")]
    UnsupportedCharacter(char, usize),

    /// Represents a deserialized bit group that maps outside the ASCII range
    #[error("Bit group decodes to code point {0:#04x}, outside the ASCII range")]
    UnsupportedCodePoint(u8),

    /// Represents an unsupported number of payload bits per carrier sample
    #[error("Unsupported fraction bit density {0}, supported is 1 up to 23")]
    UnsupportedBitDensity(usize),

    /// Represents the error of invalid UTF-8 text data found inside a payload
    #[error("Invalid text data found inside a payload")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents a payload that does not fit into the carrier samples
    #[error("Capacity error: payload of {needed} bits exceeds the carrier capacity of {available} bits")]
    CapacityError { needed: usize, available: usize },

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write the target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
