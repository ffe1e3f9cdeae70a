//! Symbol frequency accounting.
//!
//! Encoding is two-pass: the whole input is scanned once into
//! [`ByteCounts`], which is then turned into an immutable
//! [`FrequencyTable`] that also carries the end-of-stream sentinel.

use grin_core::error::{GrinError, Result};
use std::io::{ErrorKind, Read};

/// A symbol of the Huffman alphabet: 0-255 are bytes, 256 is the sentinel.
pub type Symbol = u16;

/// Reserved end-of-stream symbol. Never produced by 8-bit input.
pub const EOF_SYMBOL: Symbol = 256;

/// Number of symbols in the alphabet (256 bytes plus the sentinel).
pub const ALPHABET_SIZE: usize = 257;

/// Count forced on the sentinel entry.
pub const EOF_FREQUENCY: u32 = 1;

/// Chunk size used while scanning a source.
const SCAN_CHUNK: usize = 8192;

/// Raw per-byte occurrence counts produced by one scan of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteCounts {
    counts: [u64; 256],
}

impl ByteCounts {
    /// Count every byte of an in-memory buffer.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = Self::default();
        counts.add(data);
        counts
    }

    /// Count every byte produced by `reader` until end of data.
    pub fn scan<R: Read>(mut reader: R) -> Result<Self> {
        let mut counts = Self::default();
        let mut buf = [0u8; SCAN_CHUNK];

        loop {
            match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => counts.add(&buf[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(counts)
    }

    fn add(&mut self, data: &[u8]) {
        for &byte in data {
            self.counts[byte as usize] += 1;
        }
    }

    /// Occurrences of `byte`.
    pub fn count(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    /// Total number of bytes scanned.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

impl Default for ByteCounts {
    fn default() -> Self {
        Self { counts: [0; 256] }
    }
}

/// Mapping from symbol to a positive count, always including the sentinel.
///
/// Entries keep the order in which they were supplied. A table built from a
/// scan is in ascending symbol order with the sentinel last; a table read
/// from a header keeps the header's record order. Tree construction breaks
/// frequency ties by this order, so it is part of the table's identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(Symbol, u32)>,
}

impl FrequencyTable {
    /// Build a table from a scan result, adding the sentinel with count 1.
    ///
    /// The scan result is not modified.
    pub fn from_counts(counts: &ByteCounts) -> Result<Self> {
        let mut entries = Vec::with_capacity(ALPHABET_SIZE);

        for (byte, &count) in counts.counts.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let symbol = byte as Symbol;
            let count = u32::try_from(count).map_err(|_| GrinError::frequency_overflow(symbol))?;
            entries.push((symbol, count));
        }

        entries.push((EOF_SYMBOL, EOF_FREQUENCY));

        Ok(Self { entries })
    }

    /// Count `data` and build its table in one step.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_counts(&ByteCounts::from_bytes(data))
    }

    /// Rebuild a table from deserialized `(symbol, frequency)` records.
    ///
    /// Records must name distinct symbols in 0-256 with non-zero counts, and
    /// must include the sentinel with its fixed count.
    pub fn from_records(records: Vec<(Symbol, u32)>) -> Result<Self> {
        if records.is_empty() {
            return Err(GrinError::EmptyInput);
        }
        if records.len() > ALPHABET_SIZE {
            return Err(GrinError::invalid_header(format!(
                "{} records exceed the alphabet size {}",
                records.len(),
                ALPHABET_SIZE
            )));
        }

        let mut seen = [false; ALPHABET_SIZE];
        for &(symbol, frequency) in &records {
            if symbol as usize >= ALPHABET_SIZE {
                return Err(GrinError::invalid_header(format!(
                    "symbol {} out of range",
                    symbol
                )));
            }
            if seen[symbol as usize] {
                return Err(GrinError::invalid_header(format!(
                    "duplicate symbol {}",
                    symbol
                )));
            }
            if frequency == 0 {
                return Err(GrinError::invalid_header(format!(
                    "symbol {} has zero frequency",
                    symbol
                )));
            }
            seen[symbol as usize] = true;
        }

        match records.iter().find(|&&(symbol, _)| symbol == EOF_SYMBOL) {
            None => return Err(GrinError::invalid_header("missing end-of-stream record")),
            Some(&(_, frequency)) if frequency != EOF_FREQUENCY => {
                return Err(GrinError::invalid_header(format!(
                    "end-of-stream frequency {} (expected {})",
                    frequency, EOF_FREQUENCY
                )));
            }
            Some(_) => {}
        }

        Ok(Self { entries: records })
    }

    /// Number of entries (leaves of the resulting tree).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the sentinel guarantees at least one entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(symbol, frequency)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u32)> + '_ {
        self.entries.iter().copied()
    }

    /// Frequency of `symbol`, if present.
    pub fn frequency(&self, symbol: Symbol) -> Option<u32> {
        self.entries
            .iter()
            .find(|&&(s, _)| s == symbol)
            .map(|&(_, f)| f)
    }

    /// Sum of all counts, sentinel included.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, f)| u64::from(f)).sum()
    }

    /// Number of data bytes described by the table (sentinel excluded).
    pub fn data_len(&self) -> u64 {
        self.entries
            .iter()
            .filter(|&&(s, _)| s != EOF_SYMBOL)
            .map(|&(_, f)| u64::from(f))
            .sum()
    }
}
