//! Info command implementation.

use grin_core::BitReader;
use grin_huffman::{EOF_SYMBOL, HuffmanTree, MAGIC_NUMBER, read_header};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let metadata = std::fs::metadata(input)?;
    let mut reader = BitReader::new(BufReader::new(File::open(input)?));

    let table = read_header(&mut reader, MAGIC_NUMBER)?;
    let tree = HuffmanTree::build(&table)?;

    println!("Grin Container");
    println!("==============");
    println!("File: {}", input.display());
    println!("Size: {} bytes", metadata.len());
    println!("Magic: {}", MAGIC_NUMBER);
    println!("Leaves: {}", table.len());
    println!("Original size: {} bytes", table.data_len());
    if table.data_len() > 0 {
        println!(
            "Compression ratio: {:.1}%",
            metadata.len() as f64 / table.data_len() as f64 * 100.0
        );
    }

    println!();
    println!("{:>6} {:>10}  Code", "Symbol", "Frequency");
    println!("{}", "-".repeat(40));
    for (symbol, frequency) in table.iter() {
        let code = tree
            .code(symbol)
            .map(|c| c.to_string())
            .unwrap_or_default();
        if symbol == EOF_SYMBOL {
            println!("{:>6} {:>10}  {}", "EOF", frequency, code);
        } else {
            println!("{:>6} {:>10}  {}", symbol, frequency, code);
        }
    }

    Ok(())
}
