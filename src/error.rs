//! Error types for the huffman codec.
//!
//! Every failure here is deterministic and caused by the caller handing the codec something it
//! cannot use. None of them are retryable.

use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, HuffError>;

/// Codec error types.
#[derive(Debug, Error)]
pub enum HuffError {
    /// No symbols were counted, so there is nothing to build a tree from.
    #[error("cannot build a huffman tree from an empty alphabet")]
    EmptyAlphabet,

    /// The symbol counts add up to more than a u64 can hold.
    #[error("combined weight of {left} and {right} overflows a u64")]
    WeightOverflow { left: u64, right: u64 },

    /// The code table has no codeword for a symbol in the input.
    #[error("symbol 0x{symbol:02x} at position {position} has no codeword in this table")]
    UnknownSymbol { symbol: u8, position: usize },

    /// The bit stream ended part way through a codeword.
    #[error("bit stream of {bit_len} bits ends {pending} bits into an unfinished codeword")]
    TruncatedStream { bit_len: usize, pending: usize },

    /// A textual bit string held something other than '0' or '1'.
    #[error("invalid character {found:?} at position {position} in bit string")]
    InvalidBitString { position: usize, found: char },

    /// I/O error while reading input for the command line tool.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
