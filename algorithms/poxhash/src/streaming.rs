//! Streaming Hasher
//!
//! Incremental hashing with a single 64-byte carry buffer. Full blocks are
//! compressed as soon as they are available.

use crate::engine::block::{absorb, finish};
use crate::kernels::constants::{BLOCK_SIZE, INIT_FACTORS};
use crate::kernels::portable::compress;
use crate::output::PoxDigest;
use crate::types::{PoxVariant, Words};

#[cfg(feature = "digest-trait")]
use digest::typenum::U8;
#[cfg(feature = "digest-trait")]
use digest::Output;
#[cfg(feature = "digest-trait")]
use digest::{FixedOutput, HashMarker, OutputSizeUser, Reset, Update};

// =============================================================================
// STREAMING HASHER
// =============================================================================

/// Streaming hasher. Produces the same digest as [`crate::hash_with_variant`]
/// for every split of the input.
#[derive(Clone, Debug)]
pub struct PoxHasher {
    /// Running factors
    factors: Words,
    /// Carry buffer (always < `BLOCK_SIZE` bytes in use)
    buffer: [u8; BLOCK_SIZE],
    /// Bytes in use in `buffer`
    buffered: usize,
    /// Any non-empty update seen; an empty message still owes one zero block
    seen_input: bool,
    /// Algorithm generation
    variant: PoxVariant,
}

impl PoxHasher {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create a streaming hasher for the default generation.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_variant(PoxVariant::Extended)
    }

    /// Create a streaming hasher for `variant`.
    #[must_use]
    pub const fn with_variant(variant: PoxVariant) -> Self {
        Self {
            factors: INIT_FACTORS,
            buffer: [0; BLOCK_SIZE],
            buffered: 0,
            seen_input: false,
            variant,
        }
    }

    /// The generation this hasher computes.
    #[must_use]
    pub const fn variant(&self) -> PoxVariant {
        self.variant
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Add data to the hasher.
    pub fn update(&mut self, mut data: &[u8]) {
        self.seen_input |= !data.is_empty();

        // Top up a partially filled buffer first
        if self.buffered > 0 {
            let take = (BLOCK_SIZE - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < BLOCK_SIZE {
                return;
            }
            compress(&mut self.factors, &self.buffer, self.variant);
            self.buffered = 0;
        }

        // Whole blocks straight from the input, remainder carried
        let tail = absorb(&mut self.factors, data, self.variant);
        self.buffer[..tail.len()].copy_from_slice(tail);
        self.buffered = tail.len();
    }

    /// Finalize and return the digest.
    #[must_use]
    pub fn finalize(self) -> PoxDigest {
        PoxDigest::from_words(self.finalize_words())
    }

    fn finalize_words(mut self) -> Words {
        finish(
            &mut self.factors,
            &self.buffer[..self.buffered],
            !self.seen_input,
            self.variant,
        );
        self.factors
    }

    /// Reset hasher for reuse, keeping the generation.
    pub fn reset(&mut self) {
        *self = Self::with_variant(self.variant);
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

impl Default for PoxHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "digest-trait")]
impl OutputSizeUser for PoxHasher {
    type OutputSize = U8;
}

#[cfg(feature = "digest-trait")]
impl Update for PoxHasher {
    fn update(&mut self, data: &[u8]) {
        self.update(data);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutput for PoxHasher {
    fn finalize_into(self, out: &mut Output<Self>) {
        let res = self.finalize();
        out.copy_from_slice(&res.bytes);
    }
}

#[cfg(feature = "digest-trait")]
impl Reset for PoxHasher {
    fn reset(&mut self) {
        self.reset();
    }
}

#[cfg(feature = "digest-trait")]
impl HashMarker for PoxHasher {}
