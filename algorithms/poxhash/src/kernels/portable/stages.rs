//! The four per-round stages: Alpha, Delta, Theta, Gamma.
//!
//! Each stage reads a working copy and returns a new one. Stages never touch the
//! factor state directly; the round accumulates their result afterwards.

use super::utils::{
    add_fold, log2_floor, max_and_argmax, min_and_argmin, prime_8bit, rotate_fold,
    weighted_mean, weighted_median,
};
use crate::kernels::constants::{
    FACTOR_COUNT, MAGIC_PRIMES, MASK_WORD_FFFZ, MASK_WORD_FFZZ, MASK_WORD_FZFZ, MASK_WORD_FZZF,
    MASK_WORD_FZZZ, MASK_WORD_ZFFF, MASK_WORD_ZFZF, MASK_WORD_ZZFF, MASK_WORD_ZZFZ,
    MASK_WORD_ZZZF, PRIMES_8BIT, SINGLE_DIGIT_PRIMES,
};
use crate::types::Words;

const WORD_BITS: u16 = 16;

// =============================================================================
// ALPHA
// =============================================================================

/// Shift the first three words right by amounts derived from the low byte of
/// `W0 ^ W1` and the high byte of `W2 ^ W3`.
pub fn alpha(words: &Words) -> Words {
    let low = (words[0] ^ words[1]) & MASK_WORD_ZZFF;
    let high = (words[2] ^ words[3]) & MASK_WORD_FFZZ;
    let shift_even = (low | high) % PRIMES_8BIT[0];
    let shift_tri = (low ^ high) % PRIMES_8BIT[1];

    let mut out = *words;
    out[0] >>= shift_even;
    out[1] >>= ((shift_even + shift_tri) % 2) + 1;
    out[2] >>= shift_tri;
    out
}

// =============================================================================
// DELTA
// =============================================================================

#[inline]
fn single_digit_prime(num: u16) -> u16 {
    SINGLE_DIGIT_PRIMES[usize::from(num) % SINGLE_DIGIT_PRIMES.len()]
}

/// Nonlinear diffusion over all four words.
///
/// Derives four small residues, stirs them for four steps, then folds them into
/// `W1..W3`. The cross terms read the stage input, not the partially updated copy.
pub fn delta(words: &Words) -> Words {
    let mut a = (words[0] ^ MASK_WORD_FFFZ) % prime_8bit(words[0]);
    let mut b = (words[1] ^ MASK_WORD_FZZF) % prime_8bit(words[1]);
    let mut c = (words[2] & MASK_WORD_ZFFF) % prime_8bit(words[2]);
    let mut d = (words[3] & MASK_WORD_FFZZ) % prime_8bit(words[3]);

    for _ in 0..FACTOR_COUNT {
        a >>= single_digit_prime(b);
        b = rotate_fold(b, 2);
        c >>= single_digit_prime(d);
        d ^= (a ^ MASK_WORD_ZZFF) >> single_digit_prime(c);
    }

    let mut out = *words;
    out[1] ^= words[2] % MAGIC_PRIMES[usize::from(a) % MAGIC_PRIMES.len()];
    out[2] ^= add_fold(a, c);
    out[3] ^= add_fold(c, d);
    out
}

// =============================================================================
// THETA
// =============================================================================

/// Parity-weighted average and median folded into `W0` and `W3`.
pub fn theta(words: &Words) -> Words {
    let weights = words.map(|w| w % 2);
    let avg = weighted_mean(words, &weights);
    let med = weighted_median(words, &weights);

    let mut out = *words;
    out[0] ^= ((avg >> weights[3]) ^ MASK_WORD_ZZFF) & MASK_WORD_ZZZF;
    out[3] ^= ((med << weights[0]) ^ MASK_WORD_FZFZ) & MASK_WORD_FZZZ;
    out
}

// =============================================================================
// GAMMA
// =============================================================================

/// Shifts and log2 injections steered by the positions of the extreme words.
pub fn gamma(words: &Words) -> Words {
    let (min, argmin) = min_and_argmin(words);
    let (max, argmax) = max_and_argmax(words);

    let min_low = argmin & 0b01;
    let max_cross = argmax ^ 0b10;
    let min_slot = argmin & 0b11;
    let max_slot = argmax;

    // floor((min + max) / 2) without leaving 16 bits
    let midpoint = min + (max - min) / 2;

    let low_residue = words[min_low] % prime_8bit(words[min_slot]);
    let prime_residue = (prime_8bit(max) ^ MASK_WORD_ZFZF) % prime_8bit(min);
    let max_residue = max % prime_8bit(max);
    let cross_residue = words[max_cross] % prime_8bit(midpoint);

    let mut out = *words;
    out[min_low] >>= (low_residue ^ MASK_WORD_ZZFZ) % WORD_BITS;
    out[max_cross] >>= (cross_residue ^ MASK_WORD_FZZZ) % ((max % 2) + 1);
    out[min_slot] ^= log2_floor(prime_residue) & MASK_WORD_ZFFF;
    out[max_slot] ^= log2_floor(max_residue) >> ((cross_residue % 2) + 1);
    out
}
