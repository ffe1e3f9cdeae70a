//! Grin encoder (compression).

use crate::config::CodecConfig;
use crate::diag::{CodecStats, Diagnostics, NoDiagnostics};
use crate::frequency::{ByteCounts, EOF_SYMBOL, FrequencyTable, Symbol};
use crate::header::write_header;
use crate::tree::HuffmanTree;
use grin_core::error::Result;
use grin_core::{BitMode, BitWriter};
use std::io::{Cursor, ErrorKind, Read, Seek, SeekFrom, Write};

/// Chunk size used while re-reading the input for the body.
const BODY_CHUNK: usize = 8192;

/// Two-pass Huffman encoder.
#[derive(Debug)]
pub struct GrinEncoder<D: Diagnostics = NoDiagnostics> {
    config: CodecConfig,
    diagnostics: D,
}

impl GrinEncoder {
    /// Create a new encoder with the given configuration.
    pub fn new(config: CodecConfig) -> Self {
        Self {
            config,
            diagnostics: NoDiagnostics,
        }
    }
}

impl Default for GrinEncoder {
    fn default() -> Self {
        Self::new(CodecConfig::DEFAULT)
    }
}

impl<D: Diagnostics> GrinEncoder<D> {
    /// Attach a diagnostics observer.
    pub fn with_diagnostics<E: Diagnostics>(self, diagnostics: E) -> GrinEncoder<E> {
        GrinEncoder {
            config: self.config,
            diagnostics,
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode `input` into `output`.
    ///
    /// # Algorithm
    ///
    /// 1. Scan the whole input once to count byte frequencies
    /// 2. Add the end-of-stream sentinel and build the Huffman tree
    /// 3. Write magic number, leaf count and frequency records
    /// 4. Rewind the input and write the code of every byte
    /// 5. Write the sentinel's code once and zero-pad the last byte
    ///
    /// The input is rewound to the position it had on entry.
    pub fn encode<R, W>(&mut self, mut input: R, output: W) -> Result<CodecStats>
    where
        R: Read + Seek,
        W: Write,
    {
        let start = input.stream_position()?;

        let counts = ByteCounts::scan(&mut input)?;
        let table = FrequencyTable::from_counts(&counts)?;
        self.diagnostics.frequencies_counted(&table);

        let tree = HuffmanTree::build(&table)?;
        self.diagnostics.tree_built(&tree);

        input.seek(SeekFrom::Start(start))?;

        let mut writer = BitWriter::with_mode(output, self.config.bit_mode);
        write_header(&mut writer, self.config.magic, &table)?;
        let header_bits = writer.bits_written();
        self.diagnostics.header_written(&table, header_bits);

        let symbols = encode_body(&tree, &mut input, &mut writer)?;
        tree.encode_symbol(EOF_SYMBOL, &mut writer)?;

        let total_bits = writer.bits_written();
        writer.close()?;

        let output_bytes = match self.config.bit_mode {
            BitMode::Packed => total_bits.div_ceil(8),
            BitMode::Ascii => total_bits,
        };
        let stats = CodecStats {
            input_bytes: symbols,
            output_bytes,
            symbols,
            body_bits: total_bits - header_bits,
        };
        self.diagnostics.finished(&stats);

        Ok(stats)
    }

    /// Encode an in-memory buffer.
    pub fn encode_bytes(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.encode(Cursor::new(data), &mut output)?;
        Ok(output)
    }
}

/// Write the code of every byte of `input`. Returns the number of bytes.
fn encode_body<R: Read, W: Write>(
    tree: &HuffmanTree,
    input: &mut R,
    writer: &mut BitWriter<W>,
) -> Result<u64> {
    let mut buf = [0u8; BODY_CHUNK];
    let mut symbols = 0u64;

    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };

        for &byte in &buf[..n] {
            tree.encode_symbol(Symbol::from(byte), writer)?;
        }
        symbols += n as u64;
    }

    Ok(symbols)
}
