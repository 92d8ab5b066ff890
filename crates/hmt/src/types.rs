use alloy_primitives::{B256, U256};
use serde::{Deserialize, Serialize};

/// A block-header record committed into the tree.
///
/// Two records are the same leaf iff all four fields match. Records are
/// never mutated once a tree is built over them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRecord {
    /// Hash of the previous header in the chain.
    pub previous_header: B256,
    /// Block timestamp. Hashed as a 32-byte big-endian integer.
    pub timestamp: U256,
    /// Block number. Hashed as a 32-byte big-endian integer.
    pub block_number: U256,
    /// Root of the block's transaction trie.
    pub transactions_root: B256,
}

/// A layer-0 slot: an actual record, or `None` for a padding slot added
/// to reach a power-of-two leaf count.
pub type Leaf = Option<HeaderRecord>;
