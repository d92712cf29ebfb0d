//! Derives the symbol to codeword table from a huffman tree.
//!
//! Going left appends a 0, going right appends a 1, and a leaf records the path walked to reach
//! it. A tree that is only a root leaf would give its symbol an empty path, which could never be
//! read back, so that symbol gets the one bit codeword 0 instead.

use std::fmt::{self, Display, Formatter};

use log::trace;
use rustc_hash::FxHashMap;

use super::tree::{Node, NodeData};
use crate::tools::freq_count::FrequencyTable;

/// A codeword of up to 128 bits, held in the low `len` bits of `bits`, first bit most significant.
/// With 64 bit weights a huffman tree cannot get deeper than 92, so 128 bits is always enough.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Codeword {
    bits: u128,
    len: u8,
}

impl Codeword {
    pub const MAX_LEN: usize = 128;

    /// Create a codeword from the low `len` bits of `bits`.
    pub fn new(bits: u128, len: u8) -> Self {
        debug_assert!(len as usize <= Self::MAX_LEN);
        let bits = if len as usize >= Self::MAX_LEN {
            bits
        } else {
            bits & ((1_u128 << len) - 1)
        };
        Self { bits, len }
    }

    /// The code bits, right aligned.
    pub fn bits(&self) -> u128 {
        self.bits
    }

    /// Length in bits.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// This codeword with one more bit on the end.
    pub fn child(self, bit: bool) -> Self {
        Self::new((self.bits << 1) | bit as u128, self.len + 1)
    }

    /// Iterate over the bits, first bit first.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).rev().map(move |i| (self.bits >> i) & 1 == 1)
    }

    /// True if every bit of `self` starts `other`. A codeword is a prefix of itself.
    pub fn is_prefix_of(&self, other: &Codeword) -> bool {
        if self.len > other.len {
            return false;
        }
        let shift = (other.len - self.len) as u32;
        other.bits.checked_shr(shift).unwrap_or(0) == self.bits
    }
}

/// Renders the codeword as a string of '0' and '1'.
impl Display for Codeword {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.iter()
            .try_for_each(|bit| f.write_str(if bit { "1" } else { "0" }))
    }
}

/// Maps every symbol in a tree to its codeword. Immutable once derived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: FxHashMap<u8, Codeword>,
}

impl CodeTable {
    /// Walk the tree and record the codeword of every leaf.
    pub fn from_tree(root: &Node) -> Self {
        let mut codes = FxHashMap::default();
        match root.node_data {
            // A lone leaf gets a single 0 bit rather than an empty codeword
            NodeData::Leaf(sym) => {
                codes.insert(sym, Codeword::new(0, 1));
            }
            NodeData::Kids(..) => return_leaves(root, Codeword::default(), &mut codes),
        }
        for (sym, code) in codes.iter() {
            trace!("Symbol {:#04x} has codeword {}", sym, code);
        }
        Self { codes }
    }

    /// Codeword for `symbol`, or None if the tree held no such symbol.
    pub fn get(&self, symbol: u8) -> Option<&Codeword> {
        self.codes.get(&symbol)
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.codes.contains_key(&symbol)
    }

    /// Number of symbols with a codeword.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over (symbol, codeword) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Codeword)> + '_ {
        self.codes.iter().map(|(&sym, code)| (sym, code))
    }

    /// All (symbol, codeword) pairs in ascending symbol order.
    pub fn sorted(&self) -> Vec<(u8, Codeword)> {
        let mut entries: Vec<(u8, Codeword)> =
            self.codes.iter().map(|(&sym, &code)| (sym, code)).collect();
        entries.sort_unstable_by_key(|&(sym, _)| sym);
        entries
    }

    /// Length of the longest codeword, 0 for an empty table.
    pub fn max_len(&self) -> usize {
        self.codes.values().map(Codeword::len).max().unwrap_or(0)
    }

    /// Number of bits needed to encode symbols with these frequencies: the sum of count times
    /// codeword length. None if a counted symbol has no codeword.
    pub fn encoded_len(&self, freqs: &FrequencyTable) -> Option<u64> {
        freqs.iter().try_fold(0_u64, |total, (sym, count)| {
            let code = self.get(sym)?;
            count
                .checked_mul(code.len() as u64)
                .and_then(|bits| total.checked_add(bits))
        })
    }
}

/// Derive the code table for a tree. No tree gives an empty table.
pub fn derive_code_table(root: Option<&Node>) -> CodeTable {
    root.map(CodeTable::from_tree).unwrap_or_default()
}

/// Recursively walk the tree and record in `codes` the path from the root to each leaf.
fn return_leaves(node: &Node, prefix: Codeword, codes: &mut FxHashMap<u8, Codeword>) {
    match &node.node_data {
        NodeData::Kids(left_child, right_child) => {
            return_leaves(left_child, prefix.child(false), codes);
            return_leaves(right_child, prefix.child(true), codes);
        }
        NodeData::Leaf(sym) => {
            codes.insert(*sym, prefix);
        }
    };
}
