//! Huffman tree construction.
//!
//! Leaves start out sorted by weight (ties in symbol order) in one queue. Every merged node goes
//! on the back of a second queue, and because merges come out in non-decreasing weight order that
//! queue stays sorted too. Each round takes the two lightest fronts across both queues, so no
//! heap is needed. On equal weights the leaf queue wins, which is the same as preferring the node
//! that was inserted first.

use std::collections::VecDeque;

use log::{debug, trace, warn};

use crate::error::{HuffError, Result};
use crate::tools::freq_count::FrequencyTable;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

/// A node of the huffman tree. Nodes are only built by build_tree(), so the weight of every node
/// fits in a u64 and the depth stays well inside the longest codeword a Codeword can hold.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub(crate) weight: u64,
    /// Height of the subtree below this node. A leaf has depth 0.
    pub(crate) depth: u8,
    pub(crate) node_data: NodeData,
}

impl Node {
    /// Create a new node
    pub(crate) fn new(weight: u64, depth: u8, node_data: NodeData) -> Node {
        Node {
            weight,
            depth,
            node_data,
        }
    }

    /// Create a leaf for `symbol` seen `weight` times.
    pub(crate) fn leaf(symbol: u8, weight: u64) -> Node {
        Node::new(weight, 0, NodeData::Leaf(symbol))
    }

    /// Join two nodes under a new parent. `left` takes the 0 branch. Fails with WeightOverflow if
    /// the combined weight does not fit in a u64.
    pub(crate) fn join(left: Node, right: Node) -> Result<Node> {
        let weight = left
            .weight
            .checked_add(right.weight)
            .ok_or(HuffError::WeightOverflow {
                left: left.weight,
                right: right.weight,
            })?;
        Ok(Node::new(
            weight,
            left.depth.max(right.depth) + 1,
            NodeData::Kids(Box::new(left), Box::new(right)),
        ))
    }

    /// Total count of the symbols under this node.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Height of the subtree below this node, which is also the longest codeword under it.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn node_data(&self) -> &NodeData {
        &self.node_data
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }

    /// The symbol held by a leaf, None for an internal node.
    pub fn symbol(&self) -> Option<u8> {
        match self.node_data {
            NodeData::Leaf(sym) => Some(sym),
            NodeData::Kids(..) => None,
        }
    }

    /// Left and right children of an internal node, None for a leaf.
    pub fn children(&self) -> Option<(&Node, &Node)> {
        match &self.node_data {
            NodeData::Kids(left, right) => Some((&**left, &**right)),
            NodeData::Leaf(_) => None,
        }
    }

    /// Number of leaves (distinct symbols) under this node.
    pub fn leaf_count(&self) -> usize {
        match &self.node_data {
            NodeData::Kids(left, right) => left.leaf_count() + right.leaf_count(),
            NodeData::Leaf(_) => 1,
        }
    }
}

/// Build the huffman tree for the symbols in `table`. Fails with EmptyAlphabet if there are none.
pub fn build_tree(table: &FrequencyTable) -> Result<Node> {
    let mut leaves: Vec<Node> = table
        .leaves()
        .into_iter()
        .map(|(sym, weight)| Node::leaf(sym, weight))
        .collect();

    if leaves.is_empty() {
        warn!("No symbols to build a huffman tree from.");
        return Err(HuffError::EmptyAlphabet);
    }
    if leaves.len() == 1 {
        debug!("Only one symbol in the alphabet, the tree is a single leaf.");
    }

    // Stable sort, so equal weights stay in symbol order
    leaves.sort_by_key(|node| node.weight);
    let mut leaves: VecDeque<Node> = leaves.into();
    let mut joined: VecDeque<Node> = VecDeque::with_capacity(leaves.len());

    // Pull off the two lightest nodes and make a new one, until only the root is left.
    while let Some(left) = pop_min(&mut leaves, &mut joined) {
        match pop_min(&mut leaves, &mut joined) {
            Some(right) => {
                trace!(
                    "Joining weights {} and {} at depth {}",
                    left.weight,
                    right.weight,
                    left.depth.max(right.depth) + 1
                );
                let node = Node::join(left, right).map_err(|e| {
                    warn!("{}", e);
                    e
                })?;
                joined.push_back(node);
            }
            None => {
                debug!(
                    "Huffman tree built: {} symbols, root weight {}, depth {}",
                    left.leaf_count(),
                    left.weight,
                    left.depth
                );
                return Ok(left);
            }
        }
    }
    Err(HuffError::EmptyAlphabet)
}

/// Take the lightest front node of the two queues. Leaves win ties since they were inserted first.
fn pop_min(leaves: &mut VecDeque<Node>, joined: &mut VecDeque<Node>) -> Option<Node> {
    match (leaves.front(), joined.front()) {
        (Some(leaf), Some(node)) if node.weight < leaf.weight => joined.pop_front(),
        (Some(_), _) => leaves.pop_front(),
        (None, _) => joined.pop_front(),
    }
}
