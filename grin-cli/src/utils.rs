//! Utility functions for the CLI.

use grin_huffman::{CodecStats, Diagnostics, FrequencyTable, HuffmanTree};
use std::path::Path;

/// Stderr reporter used by `--verbose`.
#[derive(Debug, Default)]
pub struct VerboseDiagnostics;

impl Diagnostics for VerboseDiagnostics {
    fn frequencies_counted(&mut self, table: &FrequencyTable) {
        eprintln!(
            "  Counted {} bytes, {} distinct symbols (with EOF)",
            table.data_len(),
            table.len()
        );
    }

    fn tree_built(&mut self, tree: &HuffmanTree) {
        eprintln!(
            "  Built tree: {} leaves, root frequency {}",
            tree.leaf_count(),
            tree.root_frequency()
        );
        eprint!("{}", tree.codes());
    }

    fn header_written(&mut self, table: &FrequencyTable, bits: u64) {
        eprintln!("  Header: {} records, {} bytes", table.len(), bits / 8);
    }

    fn header_read(&mut self, table: &FrequencyTable) {
        eprintln!(
            "  Header: {} records, {} bytes expected",
            table.len(),
            table.data_len()
        );
    }

    fn finished(&mut self, stats: &CodecStats) {
        eprintln!(
            "  {} -> {} bytes ({} body bits)",
            stats.input_bytes, stats.output_bytes, stats.body_bits
        );
    }
}

/// Format an output/input size ratio as a percentage.
pub fn format_ratio(stats: &CodecStats) -> String {
    match stats.ratio() {
        Some(ratio) => format!("{:.1}%", ratio * 100.0),
        None => "-".to_string(),
    }
}

/// Delete an output file left behind by a failed run.
pub fn remove_partial_output(path: &Path) {
    if path.exists() {
        // Best effort: the original error is what gets reported
        let _ = std::fs::remove_file(path);
    }
}
