use bolero::check;
use poxhash::{hash_with_variant, Hasher, PoxVariant};

#[test]
fn fuzz_streaming_consistency() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        for variant in PoxVariant::ALL {
            // =============================================================================
            // BASELINE (ONE-SHOT)
            // =============================================================================
            let expected = hash_with_variant(data, variant);

            // =============================================================================
            // STREAMING VARIATIONS
            // =============================================================================

            // 1. Single Update
            let mut hasher = Hasher::with_variant(variant);
            hasher.update(data);
            assert_eq!(hasher.finalize(), expected, "Streaming single update mismatch");

            // 2. Byte-by-Byte (Small Inputs Only)
            if data.len() < 256 {
                let mut hasher = Hasher::with_variant(variant);
                for b in data {
                    hasher.update(&[*b]);
                }
                assert_eq!(hasher.finalize(), expected, "Byte-by-byte streaming mismatch");
            }

            // 3. Arbitrary Split Points
            if data.len() > 1 {
                for split_idx in [1, data.len() / 2, data.len() - 1] {
                    let (first, second) = data.split_at(split_idx);
                    let mut hasher = Hasher::with_variant(variant);
                    hasher.update(first);
                    hasher.update(second);
                    assert_eq!(
                        hasher.finalize(),
                        expected,
                        "Split streaming mismatch at {split_idx}"
                    );
                }
            }
        }
    });
}
