//! Decode command implementation.

use crate::utils::{VerboseDiagnostics, remove_partial_output};
use grin_huffman::{CodecConfig, GrinDecoder};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

pub fn cmd_decode(
    input: &Path,
    output: &Path,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if verbose {
        eprintln!("Decoding {} -> {}", input.display(), output.display());
    }

    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(output)?);

    let result = if verbose {
        GrinDecoder::new(CodecConfig::DEFAULT)
            .with_diagnostics(VerboseDiagnostics)
            .decode(reader, writer)
    } else {
        GrinDecoder::new(CodecConfig::DEFAULT).decode(reader, writer)
    };

    match result {
        Ok(stats) => {
            println!(
                "{}: {} -> {} bytes",
                input.display(),
                stats.input_bytes,
                stats.output_bytes
            );
            Ok(())
        }
        Err(e) => {
            // A partially decoded file is never valid output
            remove_partial_output(output);
            Err(e.into())
        }
    }
}
