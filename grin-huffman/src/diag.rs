//! Diagnostics hook for the encoder and decoder.
//!
//! The codec never prints. Callers that want to observe a run (the CLI's
//! verbose mode, tests) implement [`Diagnostics`]; every method has a no-op
//! default, and the output never depends on what the hook does.

use crate::frequency::FrequencyTable;
use crate::tree::HuffmanTree;

/// Summary of one encode or decode run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecStats {
    /// Bytes consumed from the input.
    pub input_bytes: u64,
    /// Bytes produced on the output.
    pub output_bytes: u64,
    /// Data symbols coded (sentinel excluded).
    pub symbols: u64,
    /// Bits of Huffman-coded body (header and padding excluded).
    pub body_bits: u64,
}

impl CodecStats {
    /// Output size as a fraction of the input size, if the input is not empty.
    pub fn ratio(&self) -> Option<f64> {
        if self.input_bytes == 0 {
            None
        } else {
            Some(self.output_bytes as f64 / self.input_bytes as f64)
        }
    }
}

/// Observer invoked at the stages of an encode or decode run.
pub trait Diagnostics {
    /// The frequency table was computed from the input.
    fn frequencies_counted(&mut self, _table: &FrequencyTable) {}

    /// The Huffman tree was built.
    fn tree_built(&mut self, _tree: &HuffmanTree) {}

    /// The header was written (`bits` is its size in bits).
    fn header_written(&mut self, _table: &FrequencyTable, _bits: u64) {}

    /// The header was read and validated.
    fn header_read(&mut self, _table: &FrequencyTable) {}

    /// The run completed successfully.
    fn finished(&mut self, _stats: &CodecStats) {}
}

/// Diagnostics that ignore every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiagnostics;

impl Diagnostics for NoDiagnostics {}

impl<D: Diagnostics + ?Sized> Diagnostics for &mut D {
    fn frequencies_counted(&mut self, table: &FrequencyTable) {
        (**self).frequencies_counted(table);
    }

    fn tree_built(&mut self, tree: &HuffmanTree) {
        (**self).tree_built(tree);
    }

    fn header_written(&mut self, table: &FrequencyTable, bits: u64) {
        (**self).header_written(table, bits);
    }

    fn header_read(&mut self, table: &FrequencyTable) {
        (**self).header_read(table);
    }

    fn finished(&mut self, stats: &CodecStats) {
        (**self).finished(stats);
    }
}
