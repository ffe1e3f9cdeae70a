//! # Grin Core
//!
//! Core components for the Grin Huffman compressor.
//!
//! - [`bitstream`]: MSB-first bit-level I/O over any byte source or sink
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ CLI                                                     │
//! │     grin encode / decode / info                         │
//! ├─────────────────────────────────────────────────────────┤
//! │ Codec (grin-huffman)                                    │
//! │     FrequencyTable, HuffmanTree, header, Encoder/Decoder│
//! ├─────────────────────────────────────────────────────────┤
//! │ BitStream (this crate)                                  │
//! │     BitReader/BitWriter, GrinError                      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use grin_core::bitstream::BitReader;
//! use std::io::Cursor;
//!
//! let data = vec![0xAB, 0xCD];
//! let mut reader = BitReader::new(Cursor::new(data));
//! assert_eq!(reader.read_bits(12).unwrap(), Some(0xABC));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod error;

// Re-exports for convenience
pub use bitstream::{BitMode, BitReader, BitWriter};
pub use error::{GrinError, Result};
