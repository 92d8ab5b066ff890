//! Proof Demo: header batch to contract calldata
//!
//! Shows:
//! 1. A relay collects a batch of block headers
//! 2. The batch commits into one Merkle root
//! 3. A single header gets an inclusion proof
//! 4. A tampered header fails verification
//! 5. The proof serializes for an on-chain verifier

use hmt::{decode_proof_hex, encode_proof_hex, hash_header, HeaderRecord, HeaderTree, B256, U256};

fn main() {
    println!("╔════════════════════════════════════════════════╗");
    println!("║  Header Merkle Tree - Proof Demo               ║");
    println!("║  One root commits to a whole header batch      ║");
    println!("╚════════════════════════════════════════════════╝\n");

    // 1. Collect a batch of chained headers
    println!("📦 Step 1: Relay collects five block headers");
    println!("   ─────────────────────────────────────────");

    let mut headers: Vec<HeaderRecord> = Vec::new();
    let mut previous = B256::ZERO;
    for number in 1u64..=5 {
        let header = HeaderRecord {
            previous_header: previous,
            timestamp: U256::from(1_700_000_000 + 12 * number),
            block_number: U256::from(number),
            transactions_root: B256::repeat_byte(number as u8),
        };
        previous = hash_header(&header);
        headers.push(header);
    }

    for header in &headers {
        println!(
            "   Block {:>2}  txroot {}",
            header.block_number,
            hex::encode(&header.transactions_root.as_slice()[..8])
        );
    }
    println!("   ✓ {} headers collected\n", headers.len());

    // 2. Commit the batch
    println!("🌲 Step 2: Build the Merkle tree");
    println!("   ─────────────────────────────");

    let tree = HeaderTree::from_records(headers.clone());

    println!("   Records:     {}", headers.len());
    println!("   Leaf slots:  {} (padded to a power of two)", tree.leaf_count());
    println!("   Height:      {} layers", tree.height());
    println!("   Root:        0x{}", hex::encode(tree.root()));
    println!("   ✓ Batch committed\n");

    // 3. Prove one header
    println!("🧾 Step 3: Extract an inclusion proof for block 3");
    println!("   ──────────────────────────────────────────────");

    let target = &headers[2];
    let proof = tree.prove(target).unwrap();

    for (i, step) in proof.steps.iter().enumerate() {
        let side = if step.sibling_on_right { "right" } else { "left " };
        println!(
            "   Step {}  sibling on {}  {}",
            i,
            side,
            hex::encode(&step.sibling.as_slice()[..8])
        );
    }
    println!("   ✓ Proof has {} steps\n", proof.len());

    // 4. Verify, then catch tampering
    println!("🔍 Step 4: Verify against the root");
    println!("   ───────────────────────────────");

    if proof.verify(target, tree.root()) {
        println!("   ✓ Block 3 is in the committed batch");
    }

    let mut forged = target.clone();
    forged.block_number = U256::from(99u64);

    if proof.verify(&forged, tree.root()) {
        println!("   ✓ Data is valid");
    } else {
        println!("   ✗ Forged header REJECTED");
        println!("   ✗ Recomputed root does not match");
    }
    println!();

    // 5. Serialize for a contract call
    println!("📡 Step 5: Serialize the proof for calldata");
    println!("   ────────────────────────────────────────");

    let calldata = encode_proof_hex(&proof).unwrap();
    println!("   Encoded ({} bytes): {}...", (calldata.len() - 2) / 2, &calldata[..40]);

    let decoded = decode_proof_hex(&calldata).unwrap();
    if decoded.verify(target, tree.root()) {
        println!("   ✓ Decoded proof still verifies");
    }
    println!();

    // Summary
    println!("╔════════════════════════════════════════════════╗");
    println!("║  Summary                                       ║");
    println!("╠════════════════════════════════════════════════╣");
    println!("║  ✓ One 32-byte root covers the whole batch     ║");
    println!("║  ✓ Proofs stay logarithmic in batch size       ║");
    println!("║  ✓ Any forged field breaks verification        ║");
    println!("║  ✓ Wire format is bitfield plus siblings       ║");
    println!("╚════════════════════════════════════════════════╝");
}
