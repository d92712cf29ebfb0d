//! A Huffman coding codec over single byte symbols.
//!
//! Version 0.1.0
//!
//! Counts how often each symbol occurs, builds an optimal prefix-free code from those counts by
//! repeatedly joining the two lightest nodes, and uses it to encode the input to bits and decode
//! the bits back again. Everything happens in memory and the encoded bits are not meant to be
//! stored: the tree needed to decode them is kept by the caller.
//!
//! Basic usage:
//!
//! ```
//! use huff::{build_frequency_table, build_tree, decode, derive_code_table, encode};
//!
//! let input = b"abb";
//! let tree = build_tree(&build_frequency_table(input)).unwrap();
//! let table = derive_code_table(Some(&tree));
//! let bits = encode(input, &table).unwrap();
//! assert_eq!(bits.to_string(), "011");
//! assert_eq!(decode(&bits, &tree).unwrap(), input);
//! ```
//!
//! The `huff` binary prints the code table, the encoded bits and the compression ratio for a line
//! of text:
//!
//! `$> huff "abb"`
//!
pub mod bitstream;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use bitstream::bitvec::BitVec;
pub use error::{HuffError, Result};
pub use huffman_coding::code_table::{derive_code_table, CodeTable, Codeword};
pub use huffman_coding::codec::HuffmanCodec;
pub use huffman_coding::decode::decode;
pub use huffman_coding::encode::encode;
pub use huffman_coding::tree::{build_tree, Node, NodeData};
pub use tools::freq_count::{build_frequency_table, FrequencyTable};
