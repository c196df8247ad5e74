//! Word-level output conversions.
//!
//! Base strings are fixed width per word, most significant digit first, left
//! padded with the alphabet's zero digit.

use crate::kernels::constants::FACTOR_COUNT;
use crate::types::{Base, Words};

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Append `word` in `base`, exactly `base.width()` digits.
pub fn push_word(out: &mut String, word: u16, base: Base) {
    let alphabet = base.alphabet();
    let radix = base.radix();
    let mut digits = [0u8; 16];
    let width = base.width();

    let mut rest = word;
    for slot in digits[..width].iter_mut().rev() {
        *slot = alphabet[usize::from(rest % radix)];
        rest /= radix;
    }
    out.extend(digits[..width].iter().map(|&d| char::from(d)));
}

/// All four words in `base`, concatenated in order.
#[must_use]
pub fn encode_words(words: &Words, base: Base) -> String {
    let mut out = String::with_capacity(base.digest_len());
    for &word in words {
        push_word(&mut out, word, base);
    }
    out
}

/// Byte view: `(low, high)` for each word in order.
#[must_use]
pub fn to_bytes(words: &Words) -> [u8; FACTOR_COUNT * 2] {
    let mut out = [0u8; FACTOR_COUNT * 2];
    for (pair, word) in out.chunks_exact_mut(2).zip(words) {
        pair.copy_from_slice(&word.to_le_bytes());
    }
    out
}

/// Double-word view: `[W0 | W1 << 16, W2 | W3 << 16]`.
#[must_use]
pub fn to_doubles(words: &Words) -> [u32; 2] {
    [
        u32::from(words[0]) | (u32::from(words[1]) << 16),
        u32::from(words[2]) | (u32::from(words[3]) << 16),
    ]
}

/// Quad-word view: the byte view read as a little-endian `u64`.
#[must_use]
pub fn to_quad(words: &Words) -> u64 {
    u64::from_le_bytes(to_bytes(words))
}
