//! Huffman tree construction and symbol translation.
//!
//! The tree is built once from a [`FrequencyTable`] with a min-priority
//! queue, and a [`CodeTable`] is derived from it by a single depth-first
//! traversal (left = 0, right = 1).
//!
//! # Tie-breaking
//!
//! Queue entries are ordered by `(frequency, sequence)`. Leaves receive
//! their sequence number in table order and every merged node receives the
//! next unused one, so equal frequencies are removed first-in first-out.
//! The encoder and the decoder build from the same table in the same order,
//! which makes the two trees identical.
//!
//! # Single-leaf trees
//!
//! A table holding only the sentinel (empty input) produces a tree whose
//! root is a leaf. That leaf gets the empty code: encoding it writes no
//! bits, and decoding it consumes none.

use crate::frequency::{ALPHABET_SIZE, EOF_SYMBOL, FrequencyTable, Symbol};
use grin_core::error::{GrinError, Result};
use grin_core::{BitReader, BitWriter};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;
use std::io::{Read, Write};

/// Maximum supported code length in bits.
///
/// With 32-bit counts the total weight is below 2^41, which bounds the tree
/// depth well under this limit.
pub const MAX_CODE_LENGTH: usize = 64;

/// A node of the Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Terminal node holding a symbol.
    Leaf {
        /// The symbol.
        symbol: Symbol,
        /// Its count.
        frequency: u64,
    },
    /// Branching node owning exactly two children.
    Internal {
        /// Sum of the children's frequencies.
        frequency: u64,
        /// Child reached with bit 0.
        left: Box<Node>,
        /// Child reached with bit 1.
        right: Box<Node>,
    },
}

impl Node {
    /// Frequency carried by this node.
    pub fn frequency(&self) -> u64 {
        match self {
            Node::Leaf { frequency, .. } | Node::Internal { frequency, .. } => *frequency,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// Priority queue entry; ordering looks at `(frequency, sequence)` only.
#[derive(Debug)]
struct QueueEntry {
    frequency: u64,
    sequence: u32,
    node: Node,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.frequency, self.sequence).cmp(&(other.frequency, other.sequence))
    }
}

/// The bit path from the root to a leaf, stored right-aligned in `bits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Code {
    bits: u64,
    len: u8,
}

impl Code {
    /// Create a code from its right-aligned bits and length.
    pub fn new(bits: u64, len: u8) -> Self {
        Self { bits, len }
    }

    /// Right-aligned code bits.
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Code length in bits.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// True for the code of a single-leaf tree.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether this code is a (non-strict) prefix of `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        if self.len > other.len {
            return false;
        }
        if self.len == 0 {
            return true;
        }
        (other.bits >> (other.len - self.len)) == self.bits
    }

    /// Iterate the bits from first to last.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.len).rev().map(move |shift| ((self.bits >> shift) & 1) as u32)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

/// Symbol to code mapping derived from a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<Code>>,
}

impl CodeTable {
    /// Code of `symbol`, if the symbol is a leaf of the tree.
    pub fn get(&self, symbol: Symbol) -> Option<Code> {
        self.codes.get(symbol as usize).copied().flatten()
    }

    /// Iterate `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.map(|c| (symbol as Symbol, c)))
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    /// Whether no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, code) in self.iter() {
            if symbol == EOF_SYMBOL {
                writeln!(f, "{:>5}: {}", "EOF", code)?;
            } else {
                writeln!(f, "{:>5}: {}", symbol, code)?;
            }
        }
        Ok(())
    }
}

/// A Huffman tree together with its derived code table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
    codes: CodeTable,
}

impl HuffmanTree {
    /// Build the tree for `table`.
    ///
    /// # Algorithm
    ///
    /// 1. Seed a min-priority queue with one leaf per table entry
    /// 2. Remove the two lowest entries; the first removed becomes the left
    ///    child of a new internal node weighing their sum
    /// 3. Reinsert the new node and repeat until one node remains
    /// 4. Walk the tree once to assign every leaf its path as code
    pub fn build(table: &FrequencyTable) -> Result<Self> {
        let mut queue = BinaryHeap::with_capacity(table.len());
        let mut sequence = 0u32;

        for (symbol, frequency) in table.iter() {
            let frequency = u64::from(frequency);
            queue.push(Reverse(QueueEntry {
                frequency,
                sequence,
                node: Node::Leaf { symbol, frequency },
            }));
            sequence += 1;
        }

        while queue.len() > 1 {
            let (Some(Reverse(first)), Some(Reverse(second))) = (queue.pop(), queue.pop()) else {
                return Err(GrinError::EmptyQueue);
            };

            let frequency = first.frequency + second.frequency;
            queue.push(Reverse(QueueEntry {
                frequency,
                sequence,
                node: Node::Internal {
                    frequency,
                    left: Box::new(first.node),
                    right: Box::new(second.node),
                },
            }));
            sequence += 1;
        }

        let root = match queue.pop() {
            Some(Reverse(entry)) => entry.node,
            None => return Err(GrinError::EmptyQueue),
        };

        let codes = derive_codes(&root)?;
        Ok(Self { root, codes })
    }

    /// Root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Sum of all leaf frequencies.
    pub fn root_frequency(&self) -> u64 {
        self.root.frequency()
    }

    /// Derived code table.
    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    /// Code of `symbol`, if present.
    pub fn code(&self, symbol: Symbol) -> Option<Code> {
        self.codes.get(symbol)
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.codes.len()
    }

    /// Write the code of `symbol`.
    pub fn encode_symbol<W: Write>(&self, symbol: Symbol, writer: &mut BitWriter<W>) -> Result<()> {
        let code = self.code(symbol).ok_or(GrinError::UnknownSymbol(symbol))?;
        write_code(code, writer)
    }

    /// Descend from the root one bit at a time until a leaf is reached.
    ///
    /// A leaf root is matched without reading any bit. Running out of bits
    /// before a leaf is a truncated stream.
    pub fn decode_symbol<R: Read>(&self, reader: &mut BitReader<R>) -> Result<Symbol> {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { symbol, .. } => return Ok(*symbol),
                Node::Internal { left, right, .. } => match reader.read_bit()? {
                    Some(0) => node = &**left,
                    Some(_) => node = &**right,
                    None => return Err(GrinError::truncated(reader.bits_read())),
                },
            }
        }
    }
}

/// Emit a code of up to 64 bits through the 32-bit writer interface.
fn write_code<W: Write>(code: Code, writer: &mut BitWriter<W>) -> Result<()> {
    let len = code.len;
    if len == 0 {
        return Ok(());
    }
    if len > 32 {
        writer.write_bits((code.bits >> 32) as u32, len - 32)?;
        writer.write_bits(code.bits as u32, 32)
    } else {
        writer.write_bits(code.bits as u32, len)
    }
}

/// Iterative depth-first walk assigning each leaf its root path.
fn derive_codes(root: &Node) -> Result<CodeTable> {
    let mut codes = vec![None; ALPHABET_SIZE];
    let mut stack: Vec<(&Node, u64, usize)> = vec![(root, 0, 0)];

    while let Some((node, bits, len)) = stack.pop() {
        match node {
            Node::Leaf { symbol, .. } => {
                if len > MAX_CODE_LENGTH {
                    return Err(GrinError::code_too_long(*symbol, len));
                }
                let slot = codes
                    .get_mut(*symbol as usize)
                    .ok_or(GrinError::UnknownSymbol(*symbol))?;
                *slot = Some(Code::new(bits, len as u8));
            }
            Node::Internal { left, right, .. } => {
                // Right pushed first so the left subtree is visited first
                stack.push((&**right, (bits << 1) | 1, len + 1));
                stack.push((&**left, bits << 1, len + 1));
            }
        }
    }

    Ok(CodeTable { codes })
}
