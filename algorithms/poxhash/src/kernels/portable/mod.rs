//! Portable implementation of PoxHash.
//!
//! Pure 16-bit integer arithmetic on four factors. Every operation is defined on
//! `u16`/`u32` with explicit folding, so results are identical on every target.

use self::stages::{alpha, delta, gamma, theta};
use self::utils::{add_fold, mean, median, prime_8bit};
use crate::kernels::constants::{
    BLOCK_SIZE, CHUNK_SIZE, FACTOR_COUNT, PORTION_SIZE, SWAP_PAIRS,
};
use crate::types::{PoxVariant, PrimeReduction, Words};

pub mod stages;
pub mod utils;

// =============================================================================
// ROUND
// =============================================================================

/// Reduce the working copy against the round-prime table.
#[must_use]
pub fn reduce(words: &Words, reduction: PrimeReduction) -> Words {
    let mut out = *words;
    match reduction {
        PrimeReduction::Bitwise(primes) => {
            for &p in primes {
                out[0] ^= p;
                out[1] &= p;
                out[2] ^= p;
                out[3] &= p;
            }
        }
        PrimeReduction::Modular(primes) => {
            for &p in primes {
                for word in &mut out {
                    *word %= p;
                }
            }
        }
    }
    out
}

/// Apply the fixed swap sequence. The net effect reverses the four words.
#[must_use]
pub fn permute(words: &Words) -> Words {
    let mut out = *words;
    for (i, j) in SWAP_PAIRS {
        out.swap(i, j);
    }
    out
}

/// Fold the working copy into the factors, word by word, modulo 2^16.
#[must_use]
pub fn accumulate(factors: &Words, working: &Words) -> Words {
    core::array::from_fn(|i| add_fold(factors[i], working[i]))
}

/// One full round: the four stages, prime reduction, permutation, accumulation.
#[must_use]
pub fn round(factors: &Words, variant: PoxVariant) -> Words {
    let working = gamma(&theta(&delta(&alpha(factors))));
    let working = permute(&reduce(&working, variant.reduction()));
    accumulate(factors, &working)
}

// =============================================================================
// BYTE MIXING
// =============================================================================

#[inline]
const fn odd_mask(num: u16) -> u16 {
    u16::MAX * (num % 2)
}

/// Prime residues of the portion bytes at the four target slots.
///
/// `b[ng] % p8(b[eo])`, `b[chu] % p8(b[yo])`, `b[yo] % p8(b[chu])`, `b[eo] % p8(b[ng])`.
fn prime_corrections(bytes: &Words, slots: [usize; PORTION_SIZE]) -> Words {
    let [s0, s1, s2, s3] = slots;
    [
        bytes[s0] % prime_8bit(bytes[s3]),
        bytes[s1] % prime_8bit(bytes[s2]),
        bytes[s2] % prime_8bit(bytes[s1]),
        bytes[s3] % prime_8bit(bytes[s0]),
    ]
}

/// Inject one 4-byte portion into the factors before round `round_index`.
///
/// The target slots are the portion bytes offset by the round index, taken mod 4.
/// The four updates run in order and may hit the same slot more than once.
/// Extended also folds in the prime corrections; Classic does not.
#[must_use]
pub fn mix(
    factors: &Words,
    portion: &[u8; PORTION_SIZE],
    round_index: u16,
    variant: PoxVariant,
) -> Words {
    let bytes = portion.map(u16::from);
    let avg = mean(&bytes);
    let med = median(&bytes);
    let slots = bytes.map(|b| (usize::from(b) + usize::from(round_index)) % FACTOR_COUNT);
    let corrections = match variant {
        PoxVariant::Classic => [0; FACTOR_COUNT],
        PoxVariant::Extended => prime_corrections(&bytes, slots),
    };
    let [s0, s1, s2, s3] = slots;

    let mut out = *factors;
    out[s0] ^= (bytes[s3] | avg) ^ odd_mask(med) ^ corrections[0];
    out[s1] ^= (bytes[s2] & med) ^ odd_mask(avg) ^ corrections[1];
    out[s2] ^= (bytes[s1] ^ avg) ^ odd_mask(med) ^ corrections[2];
    out[s3] ^= (bytes[s0] | med) ^ odd_mask(avg) ^ corrections[3];
    out
}

// =============================================================================
// BLOCK PROCESSING
// =============================================================================

/// Mix and round one portion `variant.rounds()` times.
pub fn process_portion(factors: &mut Words, portion: &[u8; PORTION_SIZE], variant: PoxVariant) {
    for round_index in (0u16..).take(variant.rounds()) {
        *factors = round(&mix(factors, portion, round_index, variant), variant);
    }
}

/// Absorb one 64-byte block: four chunks of four portions, in input order.
pub fn compress(factors: &mut Words, block: &[u8; BLOCK_SIZE], variant: PoxVariant) {
    for chunk in block.chunks_exact(CHUNK_SIZE) {
        for portion in chunk.chunks_exact(PORTION_SIZE) {
            let mut buf = [0u8; PORTION_SIZE];
            buf.copy_from_slice(portion);
            process_portion(factors, &buf, variant);
        }
    }
}
