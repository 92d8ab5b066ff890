//! Wire encoding of inclusion proofs.
//!
//! Layout: a 32-byte big-endian direction bitfield followed by the
//! sibling digests, 32 bytes each, step 0 first. Bit `j` of the bitfield
//! (least significant first) is set when step `j`'s sibling is on the
//! right. A proof of `n` steps encodes to exactly `32 + 32 * n` bytes;
//! the empty proof of a single-leaf tree is 32 zero bytes.

use alloy_primitives::{hex, B256, U256};

use crate::proof::{HeaderProof, ProofStep};
use crate::{MerkleError, Result};

const BITFIELD_BYTES: usize = 32;
const SIBLING_BYTES: usize = 32;
/// The bitfield cannot address more steps than it has bits.
const MAX_STEPS: usize = 256;

/// Encode a proof into the flat wire layout.
pub fn encode_proof(proof: &HeaderProof) -> Result<Vec<u8>> {
    if proof.steps.len() > MAX_STEPS {
        return Err(MerkleError::InvalidEncoding(
            "proof exceeds bitfield capacity",
        ));
    }

    let mut directions = U256::ZERO;
    for (position, step) in proof.steps.iter().enumerate() {
        if step.sibling_on_right {
            directions |= U256::ONE << position;
        }
    }

    let mut out = Vec::with_capacity(BITFIELD_BYTES + SIBLING_BYTES * proof.steps.len());
    out.extend_from_slice(&directions.to_be_bytes::<32>());
    for step in &proof.steps {
        out.extend_from_slice(step.sibling.as_slice());
    }
    Ok(out)
}

/// Decode wire bytes back into a proof.
///
/// Rejects input shorter than the bitfield, a sibling region that is not
/// a whole number of digests, more steps than the bitfield can address,
/// and direction bits set past the last step.
pub fn decode_proof(bytes: &[u8]) -> Result<HeaderProof> {
    if bytes.len() < BITFIELD_BYTES {
        return Err(MerkleError::InvalidEncoding("missing direction bitfield"));
    }
    let (prefix, sibling_bytes) = bytes.split_at(BITFIELD_BYTES);
    if sibling_bytes.len() % SIBLING_BYTES != 0 {
        return Err(MerkleError::InvalidEncoding(
            "sibling region is not a whole number of digests",
        ));
    }
    let count = sibling_bytes.len() / SIBLING_BYTES;
    if count > MAX_STEPS {
        return Err(MerkleError::InvalidEncoding(
            "proof exceeds bitfield capacity",
        ));
    }

    let directions = U256::from_be_slice(prefix);
    if count < MAX_STEPS && directions >> count != U256::ZERO {
        return Err(MerkleError::InvalidEncoding(
            "direction bits set past the last step",
        ));
    }

    let steps = sibling_bytes
        .chunks_exact(SIBLING_BYTES)
        .enumerate()
        .map(|(position, chunk)| ProofStep {
            sibling_on_right: directions.bit(position),
            sibling: B256::from_slice(chunk),
        })
        .collect();
    Ok(HeaderProof { steps })
}

/// Encode to the 0x-prefixed hex form used when handing a proof to a
/// contract call.
pub fn encode_proof_hex(proof: &HeaderProof) -> Result<String> {
    Ok(hex::encode_prefixed(encode_proof(proof)?))
}

/// Decode the 0x-prefixed hex form. A missing prefix is accepted.
pub fn decode_proof_hex(input: &str) -> Result<HeaderProof> {
    let bytes =
        hex::decode(input).map_err(|_| MerkleError::InvalidEncoding("proof hex is not valid"))?;
    decode_proof(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::B256;

    fn step(on_right: bool, fill: u8) -> ProofStep {
        ProofStep {
            sibling_on_right: on_right,
            sibling: B256::repeat_byte(fill),
        }
    }

    #[test]
    fn empty_proof_encodes_to_zero_bitfield() {
        let proof = HeaderProof::default();
        let bytes = encode_proof(&proof).unwrap();
        assert_eq!(bytes, vec![0u8; 32]);
        assert_eq!(decode_proof(&bytes).unwrap(), proof);
    }

    #[test]
    fn bitfield_is_big_endian_with_step_zero_at_lsb() {
        let proof = HeaderProof {
            steps: vec![step(true, 0x11), step(false, 0x22), step(true, 0x33)],
        };
        let bytes = encode_proof(&proof).unwrap();
        assert_eq!(bytes.len(), 32 + 32 * 3);
        // Steps 0 and 2 are right-siblings: bits 0 and 2 of the final
        // bitfield byte.
        assert!(bytes[..31].iter().all(|b| *b == 0));
        assert_eq!(bytes[31], 0b0000_0101);
        // Siblings follow in step order.
        assert_eq!(&bytes[32..64], B256::repeat_byte(0x11).as_slice());
        assert_eq!(&bytes[64..96], B256::repeat_byte(0x22).as_slice());
        assert_eq!(&bytes[96..128], B256::repeat_byte(0x33).as_slice());
    }

    #[test]
    fn round_trip_preserves_steps() {
        let proof = HeaderProof {
            steps: vec![
                step(false, 0x01),
                step(false, 0x02),
                step(true, 0x03),
                step(true, 0x04),
                step(false, 0x05),
            ],
        };
        let bytes = encode_proof(&proof).unwrap();
        assert_eq!(decode_proof(&bytes).unwrap(), proof);
    }

    #[test]
    fn decode_rejects_truncated_bitfield() {
        let err = decode_proof(&[0u8; 31]).unwrap_err();
        assert!(matches!(err, MerkleError::InvalidEncoding(_)));
    }

    #[test]
    fn decode_rejects_ragged_sibling_region() {
        let err = decode_proof(&[0u8; 32 + 16]).unwrap_err();
        assert!(matches!(err, MerkleError::InvalidEncoding(_)));
    }

    #[test]
    fn decode_rejects_direction_bits_past_last_step() {
        // One-step payload whose bitfield claims a second step.
        let mut bytes = vec![0u8; 32 + 32];
        bytes[31] = 0b0000_0010;
        let err = decode_proof(&bytes).unwrap_err();
        assert!(matches!(err, MerkleError::InvalidEncoding(_)));

        // The same bit pattern is fine once the step exists.
        let mut bytes = vec![0u8; 32 + 64];
        bytes[31] = 0b0000_0010;
        let proof = decode_proof(&bytes).unwrap();
        assert!(!proof.steps[0].sibling_on_right);
        assert!(proof.steps[1].sibling_on_right);
    }

    #[test]
    fn decode_rejects_oversized_proofs() {
        let bytes = vec![0u8; 32 + 32 * 257];
        let err = decode_proof(&bytes).unwrap_err();
        assert!(matches!(err, MerkleError::InvalidEncoding(_)));
    }

    #[test]
    fn encode_rejects_oversized_proofs() {
        let proof = HeaderProof {
            steps: vec![step(false, 0x00); 257],
        };
        assert!(matches!(
            encode_proof(&proof),
            Err(MerkleError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn hex_form_round_trips_with_prefix() {
        let proof = HeaderProof {
            steps: vec![step(true, 0xab), step(false, 0xcd)],
        };
        let text = encode_proof_hex(&proof).unwrap();
        assert!(text.starts_with("0x"));
        assert_eq!(decode_proof_hex(&text).unwrap(), proof);
        // The bare form decodes too.
        assert_eq!(decode_proof_hex(&text[2..]).unwrap(), proof);
    }

    #[test]
    fn hex_decode_rejects_junk() {
        assert!(decode_proof_hex("0xzz").is_err());
        // Valid hex, invalid layout.
        assert!(decode_proof_hex("0xdeadbeef").is_err());
    }
}
