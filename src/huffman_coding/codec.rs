use log::{debug, warn};

use super::code_table::CodeTable;
use super::tree::{build_tree, Node};
use super::{decode::decode, encode::encode};
use crate::bitstream::bitvec::BitVec;
use crate::error::Result;
use crate::tools::freq_count::{build_frequency_table, FrequencyTable};

/// A huffman tree together with the code table derived from it. Both are fixed once built, so a
/// codec can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanCodec {
    tree: Node,
    table: CodeTable,
}

impl HuffmanCodec {
    /// Count the symbols in `symbols` and build a codec for them.
    pub fn from_symbols(symbols: &[u8]) -> Result<Self> {
        Self::from_frequencies(&build_frequency_table(symbols))
    }

    /// Build a codec for the symbols in `freqs`. Fails with EmptyAlphabet if there are none.
    pub fn from_frequencies(freqs: &FrequencyTable) -> Result<Self> {
        let tree = build_tree(freqs)?;
        let table = CodeTable::from_tree(&tree);
        if table.len() == 1 {
            warn!("Only one distinct symbol, every symbol costs one bit.");
        }
        debug!(
            "Codec ready: {} symbols, {} counted, longest codeword {} bits",
            table.len(),
            tree.weight,
            table.max_len()
        );
        Ok(Self { tree, table })
    }

    pub fn tree(&self) -> &Node {
        &self.tree
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.table
    }

    /// Encode `symbols` with this codec's table.
    pub fn encode(&self, symbols: &[u8]) -> Result<BitVec> {
        encode(symbols, &self.table)
    }

    /// Decode `bits` with this codec's tree.
    pub fn decode(&self, bits: &BitVec) -> Result<Vec<u8>> {
        decode(bits, &self.tree)
    }
}
