//! Grin decoder (decompression).

use crate::config::CodecConfig;
use crate::diag::{CodecStats, Diagnostics, NoDiagnostics};
use crate::frequency::EOF_SYMBOL;
use crate::header::read_header;
use crate::tree::HuffmanTree;
use grin_core::BitReader;
use grin_core::error::Result;
use std::io::{Read, Write};

/// Decoded bytes are handed to the sink in chunks of this size.
const OUTPUT_CHUNK: usize = 8192;

/// Huffman decoder for Grin containers.
#[derive(Debug)]
pub struct GrinDecoder<D: Diagnostics = NoDiagnostics> {
    config: CodecConfig,
    diagnostics: D,
}

impl GrinDecoder {
    /// Create a new decoder with the given configuration.
    ///
    /// Only the magic number of `config` is used; input is always read as
    /// packed bits.
    pub fn new(config: CodecConfig) -> Self {
        Self {
            config,
            diagnostics: NoDiagnostics,
        }
    }
}

impl Default for GrinDecoder {
    fn default() -> Self {
        Self::new(CodecConfig::DEFAULT)
    }
}

impl<D: Diagnostics> GrinDecoder<D> {
    /// Attach a diagnostics observer.
    pub fn with_diagnostics<E: Diagnostics>(self, diagnostics: E) -> GrinDecoder<E> {
        GrinDecoder {
            config: self.config,
            diagnostics,
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Decode a container from `input` into `output`.
    ///
    /// # Algorithm
    ///
    /// 1. Check the magic number; nothing is written if it does not match
    /// 2. Read the leaf count and records, rebuild the frequency table
    /// 3. Rebuild the Huffman tree exactly as the encoder did
    /// 4. Descend the tree bit by bit from the root; on a data leaf emit its
    ///    byte and restart at the root, on the sentinel leaf stop
    ///
    /// Data after the sentinel's code (the zero padding) is ignored. If the
    /// bit stream ends first the run fails with a truncated stream error;
    /// bytes already handed to `output` must then be discarded by the caller.
    pub fn decode<R, W>(&mut self, input: R, mut output: W) -> Result<CodecStats>
    where
        R: Read,
        W: Write,
    {
        let mut reader = BitReader::new(input);

        let table = read_header(&mut reader, self.config.magic)?;
        self.diagnostics.header_read(&table);
        let header_bits = reader.bits_read();

        let tree = HuffmanTree::build(&table)?;
        self.diagnostics.tree_built(&tree);

        let mut buf = Vec::with_capacity(OUTPUT_CHUNK);
        let mut symbols = 0u64;

        loop {
            let symbol = tree.decode_symbol(&mut reader)?;
            if symbol == EOF_SYMBOL {
                break;
            }

            // Every non-sentinel symbol is a byte value
            buf.push(symbol as u8);
            symbols += 1;

            if buf.len() == OUTPUT_CHUNK {
                output.write_all(&buf)?;
                buf.clear();
            }
        }

        output.write_all(&buf)?;
        output.flush()?;

        let stats = CodecStats {
            input_bytes: reader.bits_read().div_ceil(8),
            output_bytes: symbols,
            symbols,
            body_bits: reader.bits_read() - header_bits,
        };
        self.diagnostics.finished(&stats);

        Ok(stats)
    }

    /// Decode an in-memory container.
    pub fn decode_bytes(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.decode(data, &mut output)?;
        Ok(output)
    }
}
