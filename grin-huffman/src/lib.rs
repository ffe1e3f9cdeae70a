//! # Grin Huffman
//!
//! Pure Rust two-pass Huffman compression over 8-bit symbols.
//!
//! The encoder scans the whole input once to count byte frequencies, adds
//! a reserved end-of-stream symbol (256) with count 1, builds a Huffman tree
//! and writes a self-describing container:
//!
//! ```text
//! magic_number   : 32 bits, 1846
//! leaf_count     : 32 bits
//! repeat leaf_count times:
//!     symbol     : 16 bits (0-256)
//!     frequency  : 32 bits
//! body           : Huffman codes of every input byte, then the code of
//!                  symbol 256; final byte zero-padded
//! ```
//!
//! The decoder rebuilds the identical tree from the header records and walks
//! it bit by bit until it reaches the end-of-stream leaf.
//!
//! ## Example
//!
//! ```rust
//! use grin_huffman::{compress, decompress};
//!
//! let original = b"abracadabra";
//! let compressed = compress(original).unwrap();
//! let decompressed = decompress(&compressed).unwrap();
//! assert_eq!(decompressed, original);
//! ```
//!
//! ## Streaming
//!
//! ```rust
//! use grin_huffman::{CodecConfig, GrinDecoder, GrinEncoder};
//! use std::io::Cursor;
//!
//! let mut compressed = Vec::new();
//! GrinEncoder::new(CodecConfig::DEFAULT)
//!     .encode(Cursor::new(b"streaming input"), &mut compressed)
//!     .unwrap();
//!
//! let mut restored = Vec::new();
//! GrinDecoder::new(CodecConfig::DEFAULT)
//!     .decode(&compressed[..], &mut restored)
//!     .unwrap();
//! assert_eq!(restored, b"streaming input");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod decode;
pub mod diag;
pub mod encode;
pub mod frequency;
pub mod header;
pub mod tree;

pub use config::CodecConfig;
pub use decode::GrinDecoder;
pub use diag::{CodecStats, Diagnostics, NoDiagnostics};
pub use encode::GrinEncoder;
pub use frequency::{ALPHABET_SIZE, ByteCounts, EOF_SYMBOL, FrequencyTable, Symbol};
pub use grin_core::error::{GrinError, Result};
pub use header::{MAGIC_NUMBER, read_header, write_header};
pub use tree::{Code, CodeTable, HuffmanTree, Node};

/// Compress a buffer into a Grin container with the default configuration.
///
/// # Example
///
/// ```rust
/// use grin_huffman::compress;
///
/// let compressed = compress(b"aaaa").unwrap();
/// assert_eq!(&compressed[..4], &1846u32.to_be_bytes());
/// ```
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    GrinEncoder::new(CodecConfig::DEFAULT).encode_bytes(data)
}

/// Decompress a Grin container produced with the default configuration.
///
/// Either the whole original is returned or an error; no partial output.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    GrinDecoder::new(CodecConfig::DEFAULT).decode_bytes(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let original = b"TOBEORNOTTOBEORTOBEORNOT";
        let compressed = compress(original).unwrap();
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, original);
    }

    #[test]
    fn test_empty_input() {
        let compressed = compress(b"").unwrap();
        assert_eq!(decompress(&compressed).unwrap(), b"");
    }

    #[test]
    fn test_single_byte() {
        let compressed = compress(b"A").unwrap();
        assert_eq!(decompress(&compressed).unwrap(), b"A");
    }

    #[test]
    fn test_repeating_pattern_shrinks_body() {
        let original = vec![b'X'; 1000];
        let compressed = compress(&original).unwrap();

        // One bit per byte plus a one-bit sentinel, behind a 20-byte header
        assert_eq!(compressed.len(), 20 + 126);
        assert_eq!(decompress(&compressed).unwrap(), original);
    }

    #[test]
    fn test_all_byte_values() {
        let original: Vec<u8> = (0..=255).collect();
        let compressed = compress(&original).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), original);
    }
}
