use std::fmt::{self, Display, Formatter};

use crate::bitstream::bitvec::BitVec;
use crate::error::Result;
use crate::huffman_coding::code_table::Codeword;
use crate::huffman_coding::codec::HuffmanCodec;

/// Results of running one input through a codec, ready to print.
#[derive(Debug, Clone)]
pub struct Report {
    dictionary: Vec<(u8, Codeword)>,
    encoded: BitVec,
    decoded: Vec<u8>,
    original_bits: usize,
}

impl Report {
    /// Encode and decode `input` with `codec` and collect the figures.
    pub fn new(input: &[u8], codec: &HuffmanCodec) -> Result<Self> {
        let encoded = codec.encode(input)?;
        let decoded = codec.decode(&encoded)?;
        Ok(Self {
            dictionary: codec.code_table().sorted(),
            encoded,
            decoded,
            original_bits: input.len() * 8,
        })
    }

    pub fn encoded(&self) -> &BitVec {
        &self.encoded
    }

    pub fn decoded(&self) -> &[u8] {
        &self.decoded
    }

    /// Size of the input at eight bits a symbol.
    pub fn original_bits(&self) -> usize {
        self.original_bits
    }

    /// Encoded bits over original bits.
    pub fn ratio(&self) -> f64 {
        if self.original_bits == 0 {
            return 0.0;
        }
        self.encoded.len() as f64 / self.original_bits as f64
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dictionary:")?;
        for (sym, code) in &self.dictionary {
            writeln!(f, "{} {}", std::ascii::escape_default(*sym), code)?;
        }
        writeln!(f)?;
        writeln!(f, "Encoded:  {}", self.encoded)?;
        writeln!(f, "Encoded length (bits):  {}", self.encoded.len())?;
        writeln!(f, "Decoded:  {}", String::from_utf8_lossy(&self.decoded))?;
        writeln!(f, "Decoded length (bits):  {}", self.original_bits)?;
        writeln!(f, "Compression ratio:  {}", self.ratio())
    }
}

#[cfg(test)]
mod test {
    use super::Report;
    use crate::huffman_coding::codec::HuffmanCodec;

    #[test]
    fn abb_report_test() {
        let codec = HuffmanCodec::from_symbols(b"abb").unwrap();
        let report = Report::new(b"abb", &codec).unwrap();
        assert_eq!(report.encoded().len(), 3);
        assert_eq!(report.decoded(), b"abb");
        assert_eq!(report.original_bits(), 24);
        assert_eq!(report.ratio(), 0.125);
        assert_eq!(
            report.to_string(),
            "Dictionary:\n\
             a 0\n\
             b 1\n\
             \n\
             Encoded:  011\n\
             Encoded length (bits):  3\n\
             Decoded:  abb\n\
             Decoded length (bits):  24\n\
             Compression ratio:  0.125\n"
        );
    }

    #[test]
    fn escaped_symbols_test() {
        let codec = HuffmanCodec::from_symbols(b"\n\n\t").unwrap();
        let report = Report::new(b"\n\n\t", &codec).unwrap();
        let text = report.to_string();
        assert!(text.contains("\\t 0\n"));
        assert!(text.contains("\\n 1\n"));
    }

    #[test]
    fn foreign_input_test() {
        // A codec built for other text cannot report on symbols it has never seen.
        let codec = HuffmanCodec::from_symbols(b"ab").unwrap();
        assert!(Report::new(b"abc", &codec).is_err());
    }
}
