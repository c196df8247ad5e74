#![no_main]

use libfuzzer_sys::fuzz_target;
use poxhash::{hash, pad, padded_len, verify, Base, PoxDigest};

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // 1. PADDING
    // =============================================================================

    let padded = pad(data);
    assert_eq!(padded.len(), padded_len(data.len()));
    assert!(padded.len() >= 64 && padded.len() % 64 == 0);
    assert_eq!(hash(data), hash(&padded), "Explicit padding changed the digest");

    // =============================================================================
    // 2. DIGEST VIEWS
    // =============================================================================

    let digest = hash(data);
    assert_eq!(PoxDigest::from_words(digest.words), digest);
    for base in Base::ALL {
        let text = digest.digest(base);
        assert_eq!(text.len(), base.digest_len());
        assert!(text.bytes().all(|c| base.alphabet().contains(&c)));
    }
    assert_eq!(digest.quad, u64::from_le_bytes(digest.bytes));

    // =============================================================================
    // 3. VERIFICATION
    // =============================================================================

    assert!(verify(data, &digest.bytes), "verify() failed on correct data");
});
