//! The bitstream module holds the bit sequences produced by the encoder and consumed by the decoder.
//!
//! Codewords are packed MSB-first into bytes by the BitWriter, kept as a BitVec with an exact bit
//! length, and walked back out a bit at a time by the BitReader. Nothing here is written to a file:
//! the packed bytes only exist so the encoded size can be reported and the bits can be stored
//! compactly in memory.
//!
pub mod bitreader;
pub mod bitvec;
pub mod bitwriter;
