#![cfg_attr(not(feature = "std"), no_std)]

//! # PoxHash
//!
//! A 64-bit, block-based, non-cryptographic hash built on 16-bit arithmetic.
//! Four 16-bit factors are stirred by prime-driven rounds, one 4-byte portion
//! at a time, and the result is exposed in eight numeric bases plus four
//! integer views.

//! # Usage
//! ```rust
//! use poxhash::{Base, PoxVariant};
//!
//! // 1. One-shot hashing
//! let digest = poxhash::hash(b"abcde");
//! assert_eq!(digest.hexdigest, "607AB1662D62A3F2");
//! assert_eq!(digest.digest(Base::Sexagesimal), "6pcCas3DcBdU");
//!
//! // 2. Verification
//! assert!(poxhash::verify(b"abcde", &digest.bytes));
//!
//! // 3. Streaming
//! use poxhash::Hasher;
//!
//! let mut hasher = Hasher::with_variant(PoxVariant::Extended);
//! hasher.update(b"ab");
//! hasher.update(b"cde");
//! assert_eq!(hasher.finalize(), digest);
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod engine;
mod format;
// Re-export internal kernels for benchmarking/testing, hidden from docs
#[doc(hidden)]
pub mod kernels;
mod oneshot;
mod output;
mod streaming;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "digest-trait")]
pub use digest;
pub use engine::{pad, padded_len};
pub use oneshot::{
    hash, hash_batch, hash_batch_with_variant, hash_with_variant, verify, verify_with_variant,
};
pub use output::PoxDigest;
pub use streaming::PoxHasher;
pub use streaming::PoxHasher as Hasher;
pub use types::{Base, ParseNameError, PoxVariant, PrimeReduction, Words};
