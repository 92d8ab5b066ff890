//! Header Merkle Tree
//!
//! Commits a batch of block-header records into a binary Keccak-256 Merkle
//! tree and produces compact inclusion proofs that verify against the root
//! alone. Proofs serialize into a flat `bitfield || siblings` byte layout
//! suitable for contract calldata.
//!
//! ```
//! use hmt::{HeaderRecord, HeaderTree, B256, U256};
//!
//! let genesis = HeaderRecord {
//!     previous_header: B256::ZERO,
//!     timestamp: U256::from(1_700_000_000u64),
//!     block_number: U256::from(1u64),
//!     transactions_root: B256::repeat_byte(0x11),
//! };
//! let tree = HeaderTree::from_records(vec![genesis.clone()]);
//! let proof = tree.prove(&genesis).unwrap();
//! assert!(proof.verify(&genesis, tree.root()));
//! ```

mod codec;
mod hash;
mod proof;
mod tree;
mod types;

pub use codec::{decode_proof, decode_proof_hex, encode_proof, encode_proof_hex};
pub use hash::{hash_header, hash_leaf, hash_pair, padding_leaf_hash};
pub use proof::{HeaderProof, ProofStep};
pub use tree::{is_power_of_two, pad_slots, HeaderTree};
pub use types::{HeaderRecord, Leaf};

// Primitive hash/integer types, re-exported so callers need not name
// alloy-primitives themselves.
pub use alloy_primitives::{B256, U256};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MerkleError {
    /// The queried header occupies no slot of the tree. Expected outcome
    /// for absent records, not a fault.
    #[error("Header not found in tree")]
    NotFound,

    /// A recomputed parent disagrees with the stored digest. The tree was
    /// tampered with in memory or built incorrectly.
    #[error("Corrupt tree: digest mismatch at height {height}, index {index}")]
    CorruptTree { height: usize, index: usize },

    /// Proof bytes that violate the wire layout.
    #[error("Invalid proof encoding: {0}")]
    InvalidEncoding(&'static str),
}

pub type Result<T> = std::result::Result<T, MerkleError>;
