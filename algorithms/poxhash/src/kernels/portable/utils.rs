//! Fixed-width arithmetic helpers shared by the round stages and byte mixing.
//!
//! Every helper that widens to `u32` folds the result back into 16 bits with an
//! explicit mask. Averages keep the high word on overflow, medians and sums keep
//! the low word.

use crate::kernels::constants::{
    FACTOR_COUNT, MASK_DWORD_HIGH, MASK_DWORD_LOW, PRIMES_8BIT, PRIMES_8BIT_NUM, WORD_WIDTH,
};
use crate::types::Words;

// =============================================================================
// WORD FOLDING
// =============================================================================

/// High word of a double word, shifted down.
#[inline]
pub const fn high_word(num: u32) -> u32 {
    (num & MASK_DWORD_HIGH) >> WORD_WIDTH
}

/// Low word of a double word.
#[inline]
pub const fn low_word(num: u32) -> u32 {
    num & MASK_DWORD_LOW
}

/// Narrow a value already folded into 16 bits.
#[inline]
#[allow(clippy::cast_possible_truncation)]
const fn narrow(num: u32) -> u16 {
    num as u16
}

/// Rotate left inside a 32-bit lane, keeping the high word if the result spills.
///
/// `by` must be in `1..=16`.
#[inline]
pub const fn rotate_fold(num: u16, by: u32) -> u16 {
    debug_assert!(by != 0 && by <= WORD_WIDTH, "rotate amount out of range");
    let wide = num as u32;
    let rotated = (wide << by) | (wide >> (WORD_WIDTH - by));
    if rotated > MASK_DWORD_LOW {
        narrow(high_word(rotated))
    } else {
        narrow(rotated)
    }
}

/// 16-bit addition with explicit low-word truncation.
#[inline]
pub const fn add_fold(a: u16, b: u16) -> u16 {
    let sum = a as u32 + b as u32;
    if sum > MASK_DWORD_LOW {
        narrow(low_word(sum))
    } else {
        narrow(sum)
    }
}

// =============================================================================
// STATISTICS
// =============================================================================

fn weighted_sum(words: &[u16; FACTOR_COUNT], weights: &[u16; FACTOR_COUNT]) -> u32 {
    words
        .iter()
        .zip(weights)
        .map(|(&w, &k)| u32::from(w) * u32::from(k))
        .sum()
}

/// Weighted average: `sum / 4`, high word on overflow.
#[allow(clippy::cast_possible_truncation)]
pub fn weighted_mean(words: &[u16; FACTOR_COUNT], weights: &[u16; FACTOR_COUNT]) -> u16 {
    let mean = weighted_sum(words, weights) / FACTOR_COUNT as u32;
    if mean > MASK_DWORD_LOW {
        narrow(high_word(mean))
    } else {
        narrow(mean)
    }
}

/// Weighted rounded median: `(sum + 1) / 2`, low word on overflow.
pub fn weighted_median(words: &[u16; FACTOR_COUNT], weights: &[u16; FACTOR_COUNT]) -> u16 {
    let median = (weighted_sum(words, weights) + 1) / 2;
    if median > MASK_DWORD_LOW {
        narrow(low_word(median))
    } else {
        narrow(median)
    }
}

/// Unweighted [`weighted_mean`].
pub fn mean(words: &[u16; FACTOR_COUNT]) -> u16 {
    weighted_mean(words, &[1; FACTOR_COUNT])
}

/// Unweighted [`weighted_median`].
pub fn median(words: &[u16; FACTOR_COUNT]) -> u16 {
    weighted_median(words, &[1; FACTOR_COUNT])
}

/// Minimum and its index. Ties resolve to the first occurrence.
pub fn min_and_argmin(words: &Words) -> (u16, usize) {
    let mut best = (words[0], 0);
    for (i, &w) in words.iter().enumerate().skip(1) {
        if w < best.0 {
            best = (w, i);
        }
    }
    best
}

/// Maximum and its index. Ties resolve to the first occurrence.
pub fn max_and_argmax(words: &Words) -> (u16, usize) {
    let mut best = (words[0], 0);
    for (i, &w) in words.iter().enumerate().skip(1) {
        if w > best.0 {
            best = (w, i);
        }
    }
    best
}

// =============================================================================
// LOOKUPS
// =============================================================================

/// Prime below 256 selected by `num mod 54`.
#[inline]
pub const fn prime_8bit(num: u16) -> u16 {
    PRIMES_8BIT[num as usize % PRIMES_8BIT_NUM]
}

/// Floor of log2; zero for inputs <= 1.
#[inline]
pub const fn log2_floor(mut num: u16) -> u16 {
    let mut log = 0;
    while num > 1 {
        num /= 2;
        log += 1;
    }
    log
}
