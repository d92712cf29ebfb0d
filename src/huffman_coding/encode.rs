use log::{debug, error};

use super::code_table::CodeTable;
use crate::bitstream::{bitvec::BitVec, bitwriter::BitWriter};
use crate::error::{HuffError, Result};

/// Encode `symbols` by writing each symbol's codeword in input order.
/// Fails with UnknownSymbol if a symbol has no codeword in `table`.
pub fn encode(symbols: &[u8], table: &CodeTable) -> Result<BitVec> {
    // Most inputs come out well under the longest code per symbol, so size for the typical case.
    let mut bw = BitWriter::with_capacity(symbols.len() * table.max_len().min(8));

    for (position, &symbol) in symbols.iter().enumerate() {
        match table.get(symbol) {
            Some(code) => bw.out_code(code),
            None => {
                error!(
                    "No codeword for symbol {:#04x} at position {}",
                    symbol, position
                );
                return Err(HuffError::UnknownSymbol { symbol, position });
            }
        }
    }

    debug!(
        "Encoded {} symbols into {} bits",
        symbols.len(),
        bw.len()
    );
    Ok(bw.finish())
}

#[cfg(test)]
mod test {
    use super::encode;
    use crate::error::HuffError;
    use crate::huffman_coding::code_table::CodeTable;
    use crate::huffman_coding::tree::build_tree;
    use crate::tools::freq_count::{build_frequency_table, FrequencyTable};

    fn table_for(input: &[u8]) -> CodeTable {
        CodeTable::from_tree(&build_tree(&build_frequency_table(input)).unwrap())
    }

    #[test]
    fn abb_test() {
        let bits = encode(b"abb", &table_for(b"abb")).unwrap();
        assert_eq!(bits.iter().collect::<Vec<_>>(), vec![false, true, true]);
        assert_eq!(bits.to_string(), "011");
    }

    #[test]
    fn unknown_symbol_test() {
        let result = encode(b"c", &table_for(b"ab"));
        match result {
            Err(HuffError::UnknownSymbol { symbol, position }) => {
                assert_eq!(symbol, b'c');
                assert_eq!(position, 0);
            }
            other => panic!("unexpected result {:?}", other),
        }
        // The position reported is the first bad symbol
        assert!(matches!(
            encode(b"abzc", &table_for(b"ab")),
            Err(HuffError::UnknownSymbol { symbol: b'z', position: 2 })
        ));
    }

    #[test]
    fn single_symbol_test() {
        let bits = encode(b"aaaa", &table_for(b"aaaa")).unwrap();
        assert_eq!(bits.to_string(), "0000");
    }

    #[test]
    fn empty_input_test() {
        let bits = encode(b"", &table_for(b"ab")).unwrap();
        assert!(bits.is_empty());
    }

    #[test]
    fn length_matches_table_test() {
        let input = b"mississippi river";
        let table = table_for(input);
        let bits = encode(input, &table).unwrap();
        assert_eq!(
            Some(bits.len() as u64),
            table.encoded_len(&build_frequency_table(input))
        );
    }

    #[test]
    fn long_codes_outgrow_capacity_test() {
        // Doubling weights give the two rarest symbols 11 bit codes, more than the 8 bits per
        // symbol the output starts with.
        let freqs: FrequencyTable = (0..12_u8).map(|i| (i, 1_u64 << i)).collect();
        let table = CodeTable::from_tree(&build_tree(&freqs).unwrap());
        assert_eq!(table.max_len(), 11);
        let input = [0_u8; 20];
        let bits = encode(&input, &table).unwrap();
        assert_eq!(bits.len(), 20 * 11);
        assert_eq!(bits.byte_len(), (20 * 11 + 7) / 8);
    }
}
