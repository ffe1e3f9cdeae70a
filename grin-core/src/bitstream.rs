//! Bit-level I/O for the Grin container format.
//!
//! This module provides `BitReader` and `BitWriter`, which wrap any byte
//! source or sink and move single bits or groups of up to 32 bits.
//!
//! # Bit Ordering
//!
//! Grin uses MSB-first (Most Significant Bit first) ordering: the first bit
//! of a byte is its bit 7, and multi-bit values are written with their most
//! significant bit first. A 32-bit header field therefore appears in the
//! file as four big-endian bytes.
//!
//! # Example
//!
//! ```
//! use grin_core::bitstream::{BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! let mut writer = BitWriter::new(Vec::new());
//! writer.write_bits(0b101, 3).unwrap();
//! writer.write_bits(0b1100, 4).unwrap();
//! let output = writer.close().unwrap();
//! assert_eq!(output, vec![0b1011_1000]);
//!
//! let mut reader = BitReader::new(Cursor::new(output));
//! assert_eq!(reader.read_bits(3).unwrap(), Some(0b101));
//! assert_eq!(reader.read_bits(4).unwrap(), Some(0b1100));
//! ```

use crate::error::{GrinError, Result};
use std::io::{ErrorKind, Read, Write};

/// Bits per byte.
const BYTE_SIZE: u8 = 8;

/// Maximum number of bits moved by a single `read_bits`/`write_bits` call.
pub const MAX_BITS_PER_CALL: u8 = 32;

/// How a `BitWriter` materializes bits in its sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitMode {
    /// Pack eight bits per byte, MSB-first. This is the container format.
    #[default]
    Packed,
    /// Emit every bit as an ASCII `'0'` or `'1'` byte, for inspection.
    Ascii,
}

/// A bit-level reader that wraps any `Read` implementation.
///
/// Bits are handed out MSB-first within each byte. End of data is reported
/// as `Ok(None)`, which is distinct from every valid value; I/O failures are
/// reported as errors.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Byte currently being consumed.
    current: u8,
    /// Bits of `current` not yet handed out.
    bits_left: u8,
    /// Set once the source has returned end of file.
    exhausted: bool,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
}

impl<R: Read> BitReader<R> {
    /// Create a new `BitReader` wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            current: 0,
            bits_left: 0,
            exhausted: false,
            total_bits_read: 0,
        }
    }

    /// Get a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Consume this `BitReader` and return the underlying reader.
    ///
    /// Any bits left in a partially consumed byte are discarded.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Get the total number of bits read so far.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Fetch the next byte from the source. Returns `false` at end of data.
    fn next_byte(&mut self) -> Result<bool> {
        if self.exhausted {
            return Ok(false);
        }

        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    self.exhausted = true;
                    return Ok(false);
                }
                Ok(_) => {
                    self.current = byte[0];
                    self.bits_left = BYTE_SIZE;
                    return Ok(true);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Read a single bit.
    ///
    /// Returns `Some(0)` or `Some(1)`, or `None` once the source is exhausted.
    #[inline]
    pub fn read_bit(&mut self) -> Result<Option<u32>> {
        if self.bits_left == 0 && !self.next_byte()? {
            return Ok(None);
        }

        self.bits_left -= 1;
        self.total_bits_read += 1;
        Ok(Some(u32::from((self.current >> self.bits_left) & 1)))
    }

    /// Read `count` bits (1-32), first bit read in the most significant
    /// position.
    ///
    /// Returns `None` if the source runs out before `count` bits were read.
    /// The bits that were available are consumed either way.
    pub fn read_bits(&mut self, count: u8) -> Result<Option<u32>> {
        if count == 0 || count > MAX_BITS_PER_CALL {
            return Err(GrinError::InvalidBitCount(count));
        }

        let mut value = 0u32;
        for _ in 0..count {
            match self.read_bit()? {
                Some(bit) => value = (value << 1) | bit,
                None => return Ok(None),
            }
        }
        Ok(Some(value))
    }
}

/// A bit-level writer that wraps any `Write` implementation.
///
/// `BitWriter` accumulates bits MSB-first and hands each completed byte to
/// the sink. [`close`](Self::close) must be called once at the end; a writer
/// dropped without it loses a trailing partial byte.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Packing mode.
    mode: BitMode,
    /// Partial byte being assembled (MSB-first).
    buffer: u8,
    /// Number of bits in `buffer`.
    bits_in_buffer: u8,
    /// Total bits written.
    total_bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    /// Create a new packed `BitWriter` wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self::with_mode(writer, BitMode::Packed)
    }

    /// Create a `BitWriter` with an explicit [`BitMode`].
    pub fn with_mode(writer: W, mode: BitMode) -> Self {
        Self {
            writer,
            mode,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_written: 0,
        }
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// The packing mode of this writer.
    pub fn mode(&self) -> BitMode {
        self.mode
    }

    /// Get the total number of bits written so far (padding excluded).
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Write a single bit. Anything other than 0 or 1 is rejected.
    #[inline]
    pub fn write_bit(&mut self, bit: u32) -> Result<()> {
        if bit > 1 {
            return Err(GrinError::InvalidBit(bit));
        }

        self.total_bits_written += 1;

        if self.mode == BitMode::Ascii {
            let ch = if bit == 1 { b'1' } else { b'0' };
            self.writer.write_all(&[ch])?;
            return Ok(());
        }

        self.buffer = (self.buffer << 1) | bit as u8;
        self.bits_in_buffer += 1;

        if self.bits_in_buffer == BYTE_SIZE {
            self.writer.write_all(&[self.buffer])?;
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }

        Ok(())
    }

    /// Write the low `count` bits (1-32) of `value`, most significant first.
    pub fn write_bits(&mut self, value: u32, count: u8) -> Result<()> {
        if count == 0 || count > MAX_BITS_PER_CALL {
            return Err(GrinError::InvalidBitCount(count));
        }

        for shift in (0..count).rev() {
            self.write_bit((value >> shift) & 1)?;
        }
        Ok(())
    }

    /// Pad a trailing partial byte with zero bits, flush it and the
    /// underlying writer, and return the writer.
    pub fn close(mut self) -> Result<W> {
        if self.bits_in_buffer > 0 {
            let byte = self.buffer << (BYTE_SIZE - self.bits_in_buffer);
            self.writer.write_all(&[byte])?;
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }

        self.writer.flush()?;
        Ok(self.writer)
    }
}
