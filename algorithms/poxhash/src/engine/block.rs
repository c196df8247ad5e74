//! Block Engine
//!
//! Messages are consumed in 64-byte blocks. The final partial block is zero
//! filled, and an empty message is treated as a single all-zero block.

use crate::kernels::constants::{BLOCK_SIZE, INIT_FACTORS};
use crate::kernels::portable::compress;
use crate::types::{PoxVariant, Words};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// =============================================================================
// PADDING
// =============================================================================

/// Length after padding: `len` rounded up to a multiple of 64, at least 64.
#[must_use]
pub const fn padded_len(len: usize) -> usize {
    let blocks = len.div_ceil(BLOCK_SIZE);
    if blocks == 0 {
        BLOCK_SIZE
    } else {
        blocks * BLOCK_SIZE
    }
}

/// Copy `data` and append zeros up to [`padded_len`].
#[must_use]
pub fn pad(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(padded_len(data.len()));
    out.extend_from_slice(data);
    out.resize(padded_len(data.len()), 0);
    out
}

// =============================================================================
// BLOCK ITERATION
// =============================================================================

/// Compress every full block of `data` into `factors`, returning the unconsumed tail.
pub fn absorb<'a>(factors: &mut Words, data: &'a [u8], variant: PoxVariant) -> &'a [u8] {
    let (blocks, tail) = data.as_chunks::<BLOCK_SIZE>();
    for block in blocks {
        compress(factors, block, variant);
    }
    tail
}

/// Compress the zero-filled tail, if the padded message still owes a block.
///
/// `tail` must be shorter than a block. A block is owed when the tail is
/// non-empty, or when the whole message was empty.
pub fn finish(factors: &mut Words, tail: &[u8], message_empty: bool, variant: PoxVariant) {
    debug_assert!(tail.len() < BLOCK_SIZE);
    if tail.is_empty() && !message_empty {
        return;
    }
    let mut block = [0u8; BLOCK_SIZE];
    block[..tail.len()].copy_from_slice(tail);
    compress(factors, &block, variant);
}

/// Final factors for a complete message.
#[must_use]
pub fn hash_words(data: &[u8], variant: PoxVariant) -> Words {
    let mut factors = INIT_FACTORS;
    let tail = absorb(&mut factors, data, variant);
    finish(&mut factors, tail, data.is_empty(), variant);
    factors
}
