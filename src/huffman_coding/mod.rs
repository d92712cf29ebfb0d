//! The huffman module builds the prefix code and does the actual encoding and decoding.
//!
//! The pieces run in one direction:
//! - tree: join the two lightest pending nodes until one root is left.
//! - code_table: walk the tree, 0 for left and 1 for right, to get each symbol's codeword.
//! - encode: write the codeword of every input symbol in order.
//! - decode: walk the tree bit by bit, emitting a symbol at every leaf.
//!
//! The codec bundles a tree with its code table for callers that want both.
//!
//! Everything here is single threaded and works on data already in memory.
//!

pub mod code_table;
pub mod codec;
pub mod decode;
pub mod encode;
pub mod tree;
