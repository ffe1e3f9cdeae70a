//! Encode command implementation.

use crate::utils::{VerboseDiagnostics, format_ratio, remove_partial_output};
use grin_huffman::{CodecConfig, CodecStats, GrinEncoder};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

pub fn cmd_encode(
    input: &Path,
    output: &Path,
    debug_bits: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = if debug_bits {
        CodecConfig::DEBUG
    } else {
        CodecConfig::DEFAULT
    };

    if verbose {
        eprintln!("Encoding {} -> {}", input.display(), output.display());
    }

    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(output)?);

    let result = if verbose {
        GrinEncoder::new(config)
            .with_diagnostics(VerboseDiagnostics)
            .encode(reader, writer)
    } else {
        GrinEncoder::new(config).encode(reader, writer)
    };

    let stats: CodecStats = match result {
        Ok(stats) => stats,
        Err(e) => {
            remove_partial_output(output);
            return Err(e.into());
        }
    };

    println!(
        "{}: {} -> {} bytes ({})",
        input.display(),
        stats.input_bytes,
        stats.output_bytes,
        format_ratio(&stats)
    );

    Ok(())
}
