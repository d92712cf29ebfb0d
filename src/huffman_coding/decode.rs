use log::{debug, error, trace};

use super::tree::{Node, NodeData};
use crate::bitstream::bitvec::BitVec;
use crate::error::{HuffError, Result};

/// Decode `bits` by walking the tree from the root: 0 goes left, 1 goes right, and reaching a
/// leaf emits its symbol and starts again at the root. The bits must come from an encoder using
/// the same tree. Fails with TruncatedStream if the bits run out part way down the tree.
pub fn decode(bits: &BitVec, root: &Node) -> Result<Vec<u8>> {
    // A lone leaf was given the codeword 0, but any bit is taken as that symbol.
    if let NodeData::Leaf(sym) = root.node_data {
        debug!("Single symbol tree, decoding {} bits as {:#04x}", bits.len(), sym);
        return Ok(vec![sym; bits.len()]);
    }

    let mut out = Vec::with_capacity(bits.len() / (root.depth.max(1) as usize));
    let mut node = root;
    // Bits consumed since the last symbol was emitted
    let mut pending = 0;

    let mut br = bits.iter();
    while let Some(bit) = br.bool_bit() {
        // The current node is never a leaf here: leaves send us straight back to the root.
        if let NodeData::Kids(left, right) = &node.node_data {
            node = if bit { &**right } else { &**left };
        }
        match node.node_data {
            NodeData::Leaf(sym) => {
                out.push(sym);
                node = root;
                pending = 0;
            }
            NodeData::Kids(..) => pending += 1,
        }
    }

    if pending > 0 {
        error!(
            "Bit stream ended {} bits into a codeword at {}",
            pending,
            br.loc()
        );
        return Err(HuffError::TruncatedStream {
            bit_len: bits.len(),
            pending,
        });
    }

    trace!("Decoded {} bits into {} symbols", bits.len(), out.len());
    Ok(out)
}
