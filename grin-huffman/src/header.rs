//! Container header serialization.
//!
//! ```text
//! magic_number   : 32 bits (1846)
//! leaf_count     : 32 bits
//! repeat leaf_count times:
//!     symbol     : 16 bits (0-256)
//!     frequency  : 32 bits
//! ```
//!
//! All fields are MSB-first, so with a byte-aligned start they read as
//! big-endian integers.

use crate::frequency::{ALPHABET_SIZE, FrequencyTable, Symbol};
use grin_core::error::{GrinError, Result};
use grin_core::{BitReader, BitWriter};
use std::io::{Read, Write};

/// Magic number opening every Grin container.
pub const MAGIC_NUMBER: u32 = 1846;

/// Width of the magic field in bits.
pub const MAGIC_BITS: u8 = 32;

/// Width of the leaf count field in bits.
pub const LEAF_COUNT_BITS: u8 = 32;

/// Width of a record's symbol field in bits.
pub const SYMBOL_BITS: u8 = 16;

/// Width of a record's frequency field in bits.
pub const FREQUENCY_BITS: u8 = 32;

/// Size in bytes of a header with `leaf_count` records.
pub fn header_size(leaf_count: usize) -> usize {
    let bits = MAGIC_BITS as usize
        + LEAF_COUNT_BITS as usize
        + leaf_count * (SYMBOL_BITS as usize + FREQUENCY_BITS as usize);
    bits / 8
}

/// Write `magic`, the leaf count and one record per table entry.
pub fn write_header<W: Write>(
    writer: &mut BitWriter<W>,
    magic: u32,
    table: &FrequencyTable,
) -> Result<()> {
    writer.write_bits(magic, MAGIC_BITS)?;
    writer.write_bits(table.len() as u32, LEAF_COUNT_BITS)?;

    for (symbol, frequency) in table.iter() {
        writer.write_bits(u32::from(symbol), SYMBOL_BITS)?;
        writer.write_bits(frequency, FREQUENCY_BITS)?;
    }

    Ok(())
}

/// Read and validate a header, returning the frequency table it carries.
///
/// The magic number is compared once, before anything else is read.
pub fn read_header<R: Read>(reader: &mut BitReader<R>, magic: u32) -> Result<FrequencyTable> {
    let found = read_field(reader, MAGIC_BITS)?;
    if found != magic {
        return Err(GrinError::bad_magic(magic, found));
    }

    let leaf_count = read_field(reader, LEAF_COUNT_BITS)? as usize;
    if leaf_count > ALPHABET_SIZE {
        return Err(GrinError::invalid_header(format!(
            "leaf count {} exceeds the alphabet size {}",
            leaf_count, ALPHABET_SIZE
        )));
    }

    let mut records = Vec::with_capacity(leaf_count);
    for _ in 0..leaf_count {
        let symbol = read_field(reader, SYMBOL_BITS)? as Symbol;
        let frequency = read_field(reader, FREQUENCY_BITS)?;
        records.push((symbol, frequency));
    }

    FrequencyTable::from_records(records)
}

/// Read a fixed-width field, mapping end of data to a truncated stream.
fn read_field<R: Read>(reader: &mut BitReader<R>, bits: u8) -> Result<u32> {
    reader
        .read_bits(bits)?
        .ok_or_else(|| GrinError::truncated(reader.bits_read()))
}
