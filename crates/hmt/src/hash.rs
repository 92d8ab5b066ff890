//! Keccak-256 over canonical fixed-width encodings.
//!
//! Every hash input in this crate is a concatenation of 32-byte fields:
//! hash fields verbatim, unsigned integers big-endian. No length prefixes
//! and no domain tags, so the digests line up with what a Solidity
//! verifier computes from the same fields.

use alloy_primitives::{keccak256, B256};

use crate::types::{HeaderRecord, Leaf};

/// Hash an internal node from its two children: `keccak256(left || right)`.
pub fn hash_pair(left: B256, right: B256) -> B256 {
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(left.as_slice());
    buf[32..].copy_from_slice(right.as_slice());
    keccak256(buf)
}

/// Hash a header record from its four fields in declaration order.
///
/// The preimage is exactly 128 bytes: `previous_header || timestamp ||
/// block_number || transactions_root`.
pub fn hash_header(header: &HeaderRecord) -> B256 {
    let mut buf = [0u8; 128];
    buf[..32].copy_from_slice(header.previous_header.as_slice());
    buf[32..64].copy_from_slice(&header.timestamp.to_be_bytes::<32>());
    buf[64..96].copy_from_slice(&header.block_number.to_be_bytes::<32>());
    buf[96..].copy_from_slice(header.transactions_root.as_slice());
    keccak256(buf)
}

/// Hash of a padding slot: keccak256 of a single zero-valued 256-bit field.
pub fn padding_leaf_hash() -> B256 {
    keccak256(B256::ZERO)
}

/// Hash a layer-0 slot, record or padding.
pub fn hash_leaf(slot: &Leaf) -> B256 {
    match slot {
        Some(header) => hash_header(header),
        None => padding_leaf_hash(),
    }
}
