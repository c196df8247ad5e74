use bolero::check;
use poxhash::{hash, verify};

#[test]
fn fuzz_verification_logic() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // POSITIVE TEST
        // =============================================================================

        let digest = hash(data);
        assert!(verify(data, &digest.bytes), "verify() failed on correct data");

        // =============================================================================
        // NEGATIVE TESTS (CORRUPTION)
        // =============================================================================

        // 1. Data Corruption
        if !data.is_empty() {
            let mut corrupted_data = data.clone();
            corrupted_data[0] ^= 0x01;
            assert!(
                !verify(&corrupted_data, &digest.bytes),
                "verify() succeeded on corrupted data"
            );
        }

        // 2. Digest Corruption
        let mut bad = digest.bytes;
        bad[0] ^= 0xFF;

        assert!(!verify(data, &bad), "verify() succeeded on corrupted digest");
    });
}
