use super::bitvec::BitVec;
use crate::huffman_coding::code_table::Codeword;

/// Largest number of bits accepted by a single out_bits() call.
const MAX_CHUNK: u8 = 32;

/// Packs bits MSB-first into a byte buffer. Codewords are pushed through a 64 bit queue and moved
/// into the output a byte at a time. Call finish() to get the packed bit sequence.
#[derive(Debug, Default)]
pub struct BitWriter {
    /// Output buffer used to hold the packed bytes.
    output: Vec<u8>,
    /// Private queue to hold bits that are waiting to be put as bytes into the output buffer.
    queue: u64,
    /// Count of valid bits in the queue.
    q_bits: u8,
    /// Total number of bits written, including those still in the queue.
    bit_len: usize,
}

impl BitWriter {
    /// Create a new BitWriter with room for `bits` bits before it needs to grow.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            output: Vec::with_capacity((bits + 7) / 8),
            ..Self::default()
        }
    }

    /// Number of bits written so far.
    pub fn len(&self) -> usize {
        self.bit_len
    }

    /// True if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Move full bytes out of the queue when it is too full to take another chunk.
    fn push_queue(&mut self) {
        if self.q_bits > 64 - MAX_CHUNK {
            while self.q_bits > 7 {
                let byte = (self.queue >> (self.q_bits - 8)) as u8;
                self.output.push(byte); //push the packed byte out
                self.q_bits -= 8; //adjust the count of bits left in the queue
            }
        }
    }

    /// Put the low `n` bits of `data` on the stream, most significant first. `n` is at most 32.
    pub fn out_bits(&mut self, data: u64, n: u8) {
        debug_assert!(n <= MAX_CHUNK);
        if n == 0 {
            return;
        }
        // Make sure the queue is empty enough to hold the data
        self.push_queue();
        self.queue <<= n;
        self.queue |= data & ((1_u64 << n) - 1);
        self.q_bits += n;
        self.bit_len += n as usize;
    }

    /// Put a single bit on the stream.
    pub fn out_bit(&mut self, bit: bool) {
        self.out_bits(bit as u64, 1);
    }

    /// Put a whole codeword on the stream. Long codewords are split into 32 bit chunks.
    pub fn out_code(&mut self, code: &Codeword) {
        let mut remaining = code.len();
        while remaining > 0 {
            let n = remaining.min(MAX_CHUNK as usize);
            remaining -= n;
            let chunk = (code.bits() >> remaining) as u64;
            self.out_bits(chunk, n as u8);
        }
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// signficant bits.
    fn flush(&mut self) {
        // First push out all the full bytes
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte);
            self.q_bits -= 8;
        }
        // Then push out the remaining bits
        if self.q_bits > 0 {
            let mut byte = (self.queue & (0xff >> (8 - self.q_bits)) as u64) as u8;
            byte <<= 8 - self.q_bits;
            self.output.push(byte);
            self.q_bits = 0;
        }
    }

    /// Flush the queue and hand back everything written as a BitVec.
    pub fn finish(mut self) -> BitVec {
        self.flush();
        BitVec::from_raw(self.output, self.bit_len)
    }
}
