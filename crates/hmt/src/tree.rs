//! Bottom-up tree construction over padded layer-0 slots.

use alloy_primitives::B256;

use crate::hash::{hash_leaf, hash_pair};
use crate::types::{HeaderRecord, Leaf};

/// True iff `n` is a positive power of two. Zero is not one.
pub fn is_power_of_two(n: usize) -> bool {
    n != 0 && n & (n - 1) == 0
}

/// Append padding slots until the count reaches the next power of two.
///
/// An empty vector pads to one slot; a count that is already a power of
/// two is left untouched.
pub fn pad_slots(slots: &mut Vec<Leaf>) {
    if !is_power_of_two(slots.len()) {
        slots.resize(slots.len().next_power_of_two(), None);
    }
}

/// An immutable binary Merkle tree over header records.
///
/// Layer 0 of `layers` holds the leaf hashes of the padded slots and each
/// layer above halves the one below it, ending in the single root. There
/// is no incremental update; rebuild to change the leaf set.
#[derive(Debug, Clone)]
pub struct HeaderTree {
    slots: Vec<Leaf>,
    layers: Vec<Vec<B256>>,
}

impl HeaderTree {
    /// Build a tree from layer-0 slots, padding to a power of two first.
    pub fn build(mut slots: Vec<Leaf>) -> Self {
        pad_slots(&mut slots);

        let mut layers: Vec<Vec<B256>> = Vec::new();
        let mut current: Vec<B256> = slots.iter().map(hash_leaf).collect();
        while current.len() > 1 {
            let next: Vec<B256> = current
                .chunks_exact(2)
                .map(|pair| hash_pair(pair[0], pair[1]))
                .collect();
            layers.push(current);
            current = next;
        }
        layers.push(current);

        Self { slots, layers }
    }

    /// Build from plain records; every slot starts occupied.
    pub fn from_records(records: Vec<HeaderRecord>) -> Self {
        Self::build(records.into_iter().map(Some).collect())
    }

    /// The root digest committing to the entire leaf set.
    pub fn root(&self) -> B256 {
        self.layers[self.layers.len() - 1][0]
    }

    /// Number of layer-0 slots after padding. Always a power of two.
    pub fn leaf_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of hash layers, leaf hashes up to and including the root.
    pub fn height(&self) -> usize {
        self.layers.len()
    }

    /// Read-only view of layer 0: records and padding slots.
    pub fn slots(&self) -> &[Leaf] {
        &self.slots
    }

    /// Read-only view of the hash layers, leaf hashes first.
    pub fn layers(&self) -> &[Vec<B256>] {
        &self.layers
    }

    /// Flip one bit of a stored digest so tests can exercise corruption
    /// detection during proof extraction.
    #[doc(hidden)]
    pub fn corrupt_digest_for_test(&mut self, height: usize, index: usize) {
        self.layers[height][index].0[0] ^= 0x01;
    }
}
