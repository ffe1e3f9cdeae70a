//! Error types for Grin operations.
//!
//! A single error type covers the bit-level I/O layer, the Huffman tree
//! construction guards and the container format checks. Every variant is a
//! deterministic function of the input, so none of them are retryable.

use std::io;
use thiserror::Error;

/// The main error type for Grin operations.
#[derive(Debug, Error)]
pub enum GrinError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The container does not start with the expected magic number.
    #[error("Bad magic number: expected {expected}, found {found}")]
    BadMagicNumber {
        /// Expected magic value.
        expected: u32,
        /// Value actually read.
        found: u32,
    },

    /// The bit stream ended before the end-of-stream symbol was decoded.
    #[error("Truncated stream at bit position {bit_position}")]
    TruncatedStream {
        /// Bit position where the data ran out.
        bit_position: u64,
    },

    /// A value other than 0 or 1 was handed to the bit writer.
    #[error("Invalid bit: {0} (must be 0 or 1)")]
    InvalidBit(u32),

    /// A multi-bit read or write asked for an unsupported width.
    #[error("Invalid bit count: {0} (must be 1-32)")]
    InvalidBitCount(u8),

    /// Tree construction was attempted with no leaves.
    #[error("Cannot build a Huffman tree from an empty queue")]
    EmptyQueue,

    /// A frequency table with no entries.
    #[error("Frequency table is empty")]
    EmptyInput,

    /// Malformed container header.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Description of the header error.
        message: String,
    },

    /// A symbol count does not fit the 32-bit header field.
    #[error("Frequency of symbol {symbol} exceeds the 32-bit header field")]
    FrequencyOverflow {
        /// Symbol whose count overflowed.
        symbol: u16,
    },

    /// A symbol with no code in the current tree was handed to the encoder.
    #[error("Symbol {0} has no Huffman code")]
    UnknownSymbol(u16),

    /// A derived code is longer than the supported maximum.
    #[error("Code for symbol {symbol} is {length} bits long (max 64)")]
    CodeTooLong {
        /// Symbol owning the code.
        symbol: u16,
        /// Length the code would have had.
        length: usize,
    },
}

/// Result type alias for Grin operations.
pub type Result<T> = std::result::Result<T, GrinError>;

impl GrinError {
    /// Create a bad magic number error.
    pub fn bad_magic(expected: u32, found: u32) -> Self {
        Self::BadMagicNumber { expected, found }
    }

    /// Create a truncated stream error.
    pub fn truncated(bit_position: u64) -> Self {
        Self::TruncatedStream { bit_position }
    }

    /// Create an invalid header error.
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }

    /// Create a frequency overflow error.
    pub fn frequency_overflow(symbol: u16) -> Self {
        Self::FrequencyOverflow { symbol }
    }

    /// Create a code too long error.
    pub fn code_too_long(symbol: u16, length: usize) -> Self {
        Self::CodeTooLong { symbol, length }
    }
}
