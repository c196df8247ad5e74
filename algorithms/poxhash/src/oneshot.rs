//! Public API Layer
//!
//! One-shot, verification and batch entry points over the block engine.

use crate::engine::{block::hash_words, parallel::hash_many};
use crate::output::PoxDigest;
use crate::types::PoxVariant;
use subtle::ConstantTimeEq;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// =============================================================================
// GENERIC HASHING
// =============================================================================

/// Compute the PoxHash digest with the default generation.
///
/// # Example
/// ```rust
/// let digest = poxhash::hash(b"abcde");
/// assert_eq!(digest.hexdigest, "607AB1662D62A3F2");
/// ```
#[must_use]
#[inline]
pub fn hash(input: &[u8]) -> PoxDigest {
    hash_with_variant(input, PoxVariant::default())
}

/// Compute the PoxHash digest with an explicit generation.
///
/// # Example
/// ```rust
/// use poxhash::{hash_with_variant, PoxVariant};
///
/// let classic = hash_with_variant(b"abcde", PoxVariant::Classic);
/// assert_eq!(classic.hexdigest, "9FBE1082C0CD9B2A");
/// ```
#[must_use]
pub fn hash_with_variant(input: &[u8], variant: PoxVariant) -> PoxDigest {
    PoxDigest::from_words(hash_words(input, variant))
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Verify a byte view in constant time.
///
/// # Example
/// ```rust
/// let data = b"Integrity";
/// let digest = poxhash::hash(data);
/// assert!(poxhash::verify(data, &digest.bytes));
/// ```
#[must_use]
pub fn verify(input: &[u8], expected: &[u8; 8]) -> bool {
    verify_with_variant(input, expected, PoxVariant::default())
}

/// [`verify`] against an explicit generation.
#[must_use]
pub fn verify_with_variant(input: &[u8], expected: &[u8; 8], variant: PoxVariant) -> bool {
    let computed = hash_with_variant(input, variant);
    computed.bytes.ct_eq(expected).into()
}

// =============================================================================
// BATCH HASHING
// =============================================================================

/// Hash independent messages, in parallel when `multithread` is enabled.
///
/// Digests are returned in input order.
///
/// # Example
/// ```rust
/// let digests = poxhash::hash_batch(&[b"one".as_slice(), b"two".as_slice()]);
/// assert_eq!(digests[1], poxhash::hash(b"two"));
/// ```
#[must_use]
pub fn hash_batch(messages: &[&[u8]]) -> Vec<PoxDigest> {
    hash_batch_with_variant(messages, PoxVariant::default())
}

/// [`hash_batch`] with an explicit generation.
#[must_use]
pub fn hash_batch_with_variant(messages: &[&[u8]], variant: PoxVariant) -> Vec<PoxDigest> {
    hash_many(messages, variant)
        .into_iter()
        .map(PoxDigest::from_words)
        .collect()
}
