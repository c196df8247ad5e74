use bolero::check;
use poxhash::{hash, hash_batch, pad};

#[test]
fn fuzz_batch_consistency() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // PARALLEL EXECUTION (RAYON)
        // =============================================================================

        // Every prefix of the input as its own message, fanned out in one batch.
        let prefixes: Vec<&[u8]> = (0..=data.len().min(32)).map(|n| &data[..n]).collect();
        let batch = hash_batch(&prefixes);

        // =============================================================================
        // SEQUENTIAL REFERENCE
        // =============================================================================

        for (digest, message) in batch.iter().zip(&prefixes) {
            assert_eq!(*digest, hash(message), "Batch hash mismatch (Rayon vs Sequential)");
        }

        // =============================================================================
        // PADDING INVARIANT
        // =============================================================================

        assert_eq!(hash(data), hash(&pad(data)), "Explicit padding changed the digest");
    });
}
