//! Grin container integration tests.

use grin_core::BitReader;
use grin_huffman::{
    CodecConfig, CodecStats, Diagnostics, EOF_SYMBOL, FrequencyTable, GrinDecoder, GrinEncoder,
    GrinError, HuffmanTree, MAGIC_NUMBER, Symbol, compress, decompress, read_header,
};
use std::io::Cursor;

/// Reproducible pseudo-random bytes.
fn random_bytes(size: usize, mut seed: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    for _ in 0..size {
        // Linear congruential generator
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((seed >> 32) as u8);
    }
    data
}

fn roundtrip(original: &[u8]) {
    let compressed = compress(original).expect("compression failed");
    let decompressed = decompress(&compressed).expect("decompression failed");
    assert_eq!(decompressed, original);
}

#[test]
fn test_scenario_aaaa() {
    let table = FrequencyTable::from_bytes(b"aaaa").unwrap();
    assert_eq!(
        table.iter().collect::<Vec<_>>(),
        vec![(b'a' as Symbol, 4), (EOF_SYMBOL, 1)]
    );

    let tree = HuffmanTree::build(&table).unwrap();
    assert_eq!(tree.leaf_count(), 2);

    roundtrip(b"aaaa");
}

#[test]
fn test_scenario_empty_input() {
    let table = FrequencyTable::from_bytes(b"").unwrap();
    let tree = HuffmanTree::build(&table).unwrap();
    assert_eq!(tree.leaf_count(), 1);
    assert!(tree.code(EOF_SYMBOL).unwrap().is_empty());

    roundtrip(b"");
}

#[test]
fn test_scenario_all_byte_values() {
    let original: Vec<u8> = (0..=255).collect();
    let table = FrequencyTable::from_bytes(&original).unwrap();
    let tree = HuffmanTree::build(&table).unwrap();
    assert_eq!(tree.leaf_count(), 257);

    roundtrip(&original);
}

#[test]
fn test_scenario_bad_magic() {
    let mut compressed = compress(b"some text").unwrap();
    compressed[..4].copy_from_slice(&0x1234_5678u32.to_be_bytes());

    let mut output = Vec::new();
    let result = GrinDecoder::new(CodecConfig::DEFAULT).decode(&compressed[..], &mut output);
    match result {
        Err(GrinError::BadMagicNumber { expected, found }) => {
            assert_eq!(expected, MAGIC_NUMBER);
            assert_eq!(found, 0x1234_5678);
        }
        other => panic!("expected BadMagicNumber, got {:?}", other),
    }
    assert!(output.is_empty(), "no bytes may be written on a bad magic");
}

#[test]
fn test_scenario_truncated_body() {
    let original = b"The quick brown fox jumps over the lazy dog. ".repeat(10);
    let compressed = compress(&original).unwrap();

    for keep in [compressed.len() - 1, compressed.len() - 5, compressed.len() / 2 + 20] {
        let result = decompress(&compressed[..keep]);
        assert!(
            matches!(
                result,
                Err(GrinError::TruncatedStream { .. }) | Err(GrinError::InvalidHeader { .. })
            ),
            "cut at {} gave {:?}",
            keep,
            result
        );
    }

    // Cutting inside the body (header intact) is always a truncated stream
    let result = decompress(&compressed[..compressed.len() - 1]);
    assert!(matches!(result, Err(GrinError::TruncatedStream { .. })));
}

#[test]
fn test_roundtrip_various_inputs() {
    roundtrip(b"A");
    roundtrip(b"AB");
    roundtrip(b"ABABABABABABABABABABABABABABABABABABAB");
    roundtrip(&[0u8; 1000]);
    roundtrip(&[0xFF; 3]);
    roundtrip(&b"This is a test of compression! ".repeat(10));
    roundtrip(&random_bytes(10_000, 0x1234_5678_9ABC_DEF0));
    roundtrip(&random_bytes(1, 42));
}

#[test]
fn test_roundtrip_skewed_distribution() {
    let mut original = vec![b'e'; 5000];
    original.extend_from_slice(b"xyz");
    original.extend(random_bytes(300, 7));
    roundtrip(&original);
}

#[test]
fn test_text_compresses() {
    let original = b"The quick brown fox jumps over the lazy dog. ".repeat(100);
    let compressed = compress(&original).unwrap();
    assert!(
        compressed.len() < original.len() * 3 / 4,
        "text should compress below 75% ({} of {})",
        compressed.len(),
        original.len()
    );
    assert_eq!(decompress(&compressed).unwrap(), original);
}

#[test]
fn test_header_fidelity() {
    let original = random_bytes(4096, 99);
    let expected = FrequencyTable::from_bytes(&original).unwrap();
    let compressed = compress(&original).unwrap();

    let mut reader = BitReader::new(Cursor::new(compressed));
    let table = read_header(&mut reader, MAGIC_NUMBER).unwrap();

    assert_eq!(table.len(), expected.len());
    assert_eq!(table.iter().collect::<Vec<_>>(), expected.iter().collect::<Vec<_>>());
    assert_eq!(table.frequency(EOF_SYMBOL), Some(1));
    assert_eq!(table.data_len(), 4096);
}

#[test]
fn test_determinism() {
    let original = random_bytes(2048, 5);
    assert_eq!(compress(&original).unwrap(), compress(&original).unwrap());

    let table = FrequencyTable::from_bytes(&original).unwrap();
    assert_eq!(
        HuffmanTree::build(&table).unwrap(),
        HuffmanTree::build(&table).unwrap()
    );
}

#[test]
fn test_prefix_free_codes() {
    for seed in 1..6u64 {
        let data = random_bytes(500 * seed as usize, seed);
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(&data).unwrap()).unwrap();
        let codes: Vec<_> = tree.codes().iter().collect();
        for (i, (_, a)) in codes.iter().enumerate() {
            for (_, b) in codes.iter().skip(i + 1) {
                assert!(!a.is_prefix_of(b) && !b.is_prefix_of(a));
            }
        }
    }
}

#[test]
fn test_sentinel_is_last_code() {
    let original = b"mississippi river";
    let compressed = compress(original).unwrap();

    let mut reader = BitReader::new(Cursor::new(compressed));
    let table = read_header(&mut reader, MAGIC_NUMBER).unwrap();
    let tree = HuffmanTree::build(&table).unwrap();

    let mut decoded = Vec::new();
    loop {
        let symbol = tree.decode_symbol(&mut reader).unwrap();
        if symbol == EOF_SYMBOL {
            break;
        }
        decoded.push(symbol);
    }
    assert_eq!(decoded.len(), original.len());
    assert!(decoded.iter().all(|&s| s != EOF_SYMBOL));

    // Only zero padding (fewer than 8 bits) may follow the sentinel
    let mut padding = 0;
    while let Some(bit) = reader.read_bit().unwrap() {
        assert_eq!(bit, 0);
        padding += 1;
    }
    assert!(padding < 8);
}

#[test]
fn test_streaming_file_like_io() {
    let original = random_bytes(30_000, 11);
    let mut compressed = Vec::new();
    let enc_stats = GrinEncoder::new(CodecConfig::DEFAULT)
        .encode(Cursor::new(&original), &mut compressed)
        .unwrap();
    assert_eq!(enc_stats.input_bytes, 30_000);
    assert_eq!(enc_stats.output_bytes, compressed.len() as u64);

    let mut restored = Vec::new();
    let dec_stats = GrinDecoder::new(CodecConfig::DEFAULT)
        .decode(Cursor::new(&compressed), &mut restored)
        .unwrap();
    assert_eq!(restored, original);
    assert_eq!(dec_stats.output_bytes, 30_000);
    assert_eq!(dec_stats.body_bits, enc_stats.body_bits);
}

#[derive(Default)]
struct Recorder {
    events: Vec<&'static str>,
    leaves: usize,
    stats: Option<CodecStats>,
}

impl Diagnostics for Recorder {
    fn frequencies_counted(&mut self, table: &FrequencyTable) {
        self.events.push("frequencies");
        self.leaves = table.len();
    }

    fn tree_built(&mut self, _tree: &HuffmanTree) {
        self.events.push("tree");
    }

    fn header_written(&mut self, _table: &FrequencyTable, bits: u64) {
        assert_eq!(bits, 64 + 48 * self.leaves as u64);
        self.events.push("header_written");
    }

    fn header_read(&mut self, table: &FrequencyTable) {
        self.leaves = table.len();
        self.events.push("header_read");
    }

    fn finished(&mut self, stats: &CodecStats) {
        self.events.push("finished");
        self.stats = Some(*stats);
    }
}

#[test]
fn test_diagnostics_events() {
    let mut recorder = Recorder::default();
    let compressed = GrinEncoder::new(CodecConfig::DEFAULT)
        .with_diagnostics(&mut recorder)
        .encode_bytes(b"banana")
        .unwrap();
    assert_eq!(
        recorder.events,
        vec!["frequencies", "tree", "header_written", "finished"]
    );
    assert_eq!(recorder.leaves, 4);
    assert_eq!(recorder.stats.unwrap().symbols, 6);

    let mut recorder = Recorder::default();
    let restored = GrinDecoder::new(CodecConfig::DEFAULT)
        .with_diagnostics(&mut recorder)
        .decode_bytes(&compressed)
        .unwrap();
    assert_eq!(restored, b"banana");
    assert_eq!(recorder.events, vec!["header_read", "tree", "finished"]);
    assert_eq!(recorder.stats.unwrap().output_bytes, 6);
}

#[test]
fn test_corrupt_header_records() {
    let mut compressed = compress(b"ab").unwrap();
    // Overwrite the first record's symbol with an out-of-range value
    compressed[8..10].copy_from_slice(&999u16.to_be_bytes());
    assert!(matches!(
        decompress(&compressed),
        Err(GrinError::InvalidHeader { .. })
    ));
}
