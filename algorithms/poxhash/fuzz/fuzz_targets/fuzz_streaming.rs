#![no_main]

use libfuzzer_sys::fuzz_target;
use poxhash::{hash_with_variant, Hasher, PoxVariant};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // Generation from the first byte, chunk size from the second (1 to 255)
    let variant = PoxVariant::ALL[usize::from(data[0]) % PoxVariant::ALL.len()];
    let chunk_size = if data.len() > 1 {
        (data[1] as usize % 255) + 1
    } else {
        1
    };

    let reference = hash_with_variant(data, variant);

    let mut hasher = Hasher::with_variant(variant);
    for chunk in data.chunks(chunk_size) {
        hasher.update(chunk);
    }

    // They must be identical
    assert_eq!(
        reference,
        hasher.finalize(),
        "Streaming and One-Shot approaches differ!"
    );
});
