//! Grin CLI - two-pass Huffman file compressor
//!
//! Thin front end over `grin-huffman`: chooses encode or decode and hands it
//! the input and output paths.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{cmd_decode, cmd_encode, cmd_info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grin")]
#[command(author, version, about = "Grin - Huffman file compressor")]
#[command(long_about = "
Grin compresses files with a two-pass Huffman code over bytes.

Examples:
  grin encode notes.txt notes.grin
  grin decode notes.grin notes.txt
  grin info notes.grin
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into a Grin container
    #[command(alias = "e")]
    Encode {
        /// File to compress
        input: PathBuf,

        /// Container to write
        output: PathBuf,

        /// Write bits as ASCII '0'/'1' characters (not decodable)
        #[arg(long)]
        debug_bits: bool,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Restore a file from a Grin container
    #[command(alias = "d")]
    Decode {
        /// Container to read
        input: PathBuf,

        /// File to write
        output: PathBuf,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the header and code table of a Grin container
    #[command(alias = "i")]
    Info {
        /// Container to inspect
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode {
            input,
            output,
            debug_bits,
            verbose,
        } => cmd_encode(&input, &output, debug_bits, verbose),
        Commands::Decode {
            input,
            output,
            verbose,
        } => cmd_decode(&input, &output, verbose),
        Commands::Info { input } => cmd_info(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
