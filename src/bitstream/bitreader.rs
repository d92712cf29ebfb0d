//! BitReader: walks a packed bit sequence one bit at a time.
//!
//! Bits are read MSB-first from each byte, and reading stops at an exact bit count so the zero
//! padding in the last byte is never mistaken for data.
//!

const BIT_MASK: u8 = 0xff;

/// Reads bits out of a packed byte slice.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
    /// Number of valid bits in the buffer.
    limit: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new BitReader over the first `limit` bits of `buffer`.
    pub fn new(buffer: &'a [u8], limit: usize) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
            limit: limit.min(buffer.len() * 8),
        }
    }

    /// Number of bits consumed so far.
    pub fn bit_pos(&self) -> usize {
        self.cursor * 8 + self.bit_index
    }

    /// Number of bits still to be read.
    pub fn remaining(&self) -> usize {
        self.limit - self.bit_pos()
    }

    /// Return bit as Option<usize> (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<usize> {
        if self.bit_pos() >= self.limit {
            return None;
        }
        let bit = (self.buffer[self.cursor] & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        Some(bit as usize)
    }

    /// Return Option<Bool> *true* if the next bit is 1, *false* if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.bool_bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.remaining();
        (left, Some(left))
    }
}

impl ExactSizeIterator for BitReader<'_> {}
