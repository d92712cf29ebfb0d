use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use super::bitreader::BitReader;
use crate::error::HuffError;

/// An ordered sequence of bits, packed MSB-first into bytes. Padding bits in the last byte are
/// always zero, so two BitVecs holding the same bits compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitVec {
    bytes: Vec<u8>,
    len: usize,
}

impl BitVec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty BitVec with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity((bits + 7) / 8),
            len: 0,
        }
    }

    /// Wrap bytes packed by the BitWriter. Bits past `len` must be zero.
    pub(crate) fn from_raw(bytes: Vec<u8>, len: usize) -> Self {
        debug_assert_eq!(bytes.len(), (len + 7) / 8);
        Self { bytes, len }
    }

    /// Append one bit.
    pub fn push(&mut self, bit: bool) {
        if self.len % 8 == 0 {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[self.len / 8] |= 0x80 >> (self.len % 8);
        }
        self.len += 1;
    }

    /// Number of bits held.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bit at `index`, or None past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some(self.bytes[index / 8] & (0x80 >> (index % 8)) != 0)
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> BitReader<'_> {
        BitReader::new(&self.bytes, self.len)
    }

    /// The packed bytes, last one zero padded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size of the packed form in bytes.
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}

impl FromIterator<bool> for BitVec {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut bits = BitVec::with_capacity(iter.size_hint().0);
        iter.for_each(|bit| bits.push(bit));
        bits
    }
}

impl<'a> IntoIterator for &'a BitVec {
    type Item = bool;
    type IntoIter = BitReader<'a>;

    fn into_iter(self) -> BitReader<'a> {
        self.iter()
    }
}

/// Renders the bits as a string of '0' and '1'.
impl Display for BitVec {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.iter()
            .try_for_each(|bit| f.write_str(if bit { "1" } else { "0" }))
    }
}

impl FromStr for BitVec {
    type Err = HuffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = BitVec::with_capacity(s.len());
        for (position, found) in s.chars().enumerate() {
            match found {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return Err(HuffError::InvalidBitString { position, found }),
            }
        }
        Ok(bits)
    }
}

#[cfg(test)]
mod test {
    use super::BitVec;
    use crate::error::HuffError;

    #[test]
    fn push_and_get_test() {
        let mut bits = BitVec::new();
        assert!(bits.is_empty());
        for bit in [true, false, true, true, false, false, false, false, true] {
            bits.push(bit);
        }
        assert_eq!(bits.len(), 9);
        assert_eq!(bits.byte_len(), 2);
        assert_eq!(bits.as_bytes(), &[0b1011_0000, 0b1000_0000]);
        assert_eq!(bits.get(0), Some(true));
        assert_eq!(bits.get(1), Some(false));
        assert_eq!(bits.get(8), Some(true));
        assert_eq!(bits.get(9), None);
    }

    #[test]
    fn string_test() {
        let bits: BitVec = "0110100".parse().unwrap();
        assert_eq!(bits.len(), 7);
        assert_eq!(bits.to_string(), "0110100");
        assert_eq!(
            bits.iter().collect::<Vec<_>>(),
            vec![false, true, true, false, true, false, false]
        );
        assert_eq!("".parse::<BitVec>().unwrap(), BitVec::new());
    }

    #[test]
    fn bad_string_test() {
        match "0102".parse::<BitVec>() {
            Err(HuffError::InvalidBitString { position, found }) => {
                assert_eq!(position, 3);
                assert_eq!(found, '2');
            }
            other => panic!("unexpected result {:?}", other),
        }
        assert!(matches!(
            "1 0".parse::<BitVec>(),
            Err(HuffError::InvalidBitString { position: 1, found: ' ' })
        ));
    }

    #[test]
    fn from_iter_matches_push_test() {
        let collected: BitVec = [false, true, true].into_iter().collect();
        let parsed: BitVec = "011".parse().unwrap();
        assert_eq!(collected, parsed);
    }
}
