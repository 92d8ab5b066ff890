//! Inclusion proofs: extraction, verification, membership.

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

use crate::hash::{hash_header, hash_pair};
use crate::tree::HeaderTree;
use crate::types::HeaderRecord;
use crate::{MerkleError, Result};

/// One level of a sibling path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    /// True when the sibling sits to the right of the running hash.
    pub sibling_on_right: bool,
    /// The sibling digest folded in at this level.
    pub sibling: B256,
}

/// Sibling path from a leaf up to just below the root.
///
/// The path for the single-leaf tree is empty; its leaf hash is the root.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeaderProof {
    pub steps: Vec<ProofStep>,
}

impl HeaderProof {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Recompute the root from `header` along the path and compare it
    /// with `root`.
    pub fn verify(&self, header: &HeaderRecord, root: B256) -> bool {
        let mut current = hash_header(header);
        for step in &self.steps {
            current = if step.sibling_on_right {
                hash_pair(current, step.sibling)
            } else {
                hash_pair(step.sibling, current)
            };
        }
        current == root
    }
}

impl HeaderTree {
    /// Extract the sibling path for `header`, matching the first slot
    /// that holds an equal record.
    ///
    /// Every recomputed parent is checked against the stored digest on
    /// the way up; a mismatch surfaces as [`MerkleError::CorruptTree`]
    /// rather than a proof that cannot verify. An absent header is
    /// [`MerkleError::NotFound`].
    pub fn prove(&self, header: &HeaderRecord) -> Result<HeaderProof> {
        let mut index = self
            .slots()
            .iter()
            .position(|slot| slot.as_ref() == Some(header))
            .ok_or(MerkleError::NotFound)?;

        let layers = self.layers();
        let mut steps = Vec::with_capacity(layers.len().saturating_sub(1));
        for height in 0..layers.len() - 1 {
            let layer = &layers[height];
            let sibling_on_right = index % 2 == 0;
            let sibling = if sibling_on_right {
                layer[index + 1]
            } else {
                layer[index - 1]
            };
            let parent = if sibling_on_right {
                hash_pair(layer[index], sibling)
            } else {
                hash_pair(sibling, layer[index])
            };
            steps.push(ProofStep {
                sibling_on_right,
                sibling,
            });

            index /= 2;
            if parent != layers[height + 1][index] {
                return Err(MerkleError::CorruptTree {
                    height: height + 1,
                    index,
                });
            }
        }

        Ok(HeaderProof { steps })
    }

    /// Membership test over the occupied slots. Padding never matches.
    pub fn contains(&self, candidate: &HeaderRecord) -> bool {
        self.slots().iter().flatten().any(|header| header == candidate)
    }
}
