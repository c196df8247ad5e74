//! PoxHash Kernel Constants
//!
//! Every table here is fixed data shared by all generations of the algorithm.
//! The only generation-dependent data is the round-prime table, of which there
//! are two:
//!
//! ```text
//! ROUND_PRIMES_CLASSIC  : 32 primes in 0x8000..0xffff (bitwise reduction)
//! ROUND_PRIMES_EXTENDED : the 32 classic primes, then the 58 primes directly
//!                         below 0x8ebd in descending order (modulo reduction)
//! ```

// =============================================================================
// GEOMETRY
// =============================================================================

/// Bytes per block. Messages are zero-padded to a multiple of this.
pub const BLOCK_SIZE: usize = 64;

/// Bytes per chunk (four portions).
pub const CHUNK_SIZE: usize = 16;

/// Bytes per portion, the unit consumed by one mix + round cycle.
pub const PORTION_SIZE: usize = 4;

/// Number of 16-bit factors in the state.
pub const FACTOR_COUNT: usize = 4;

/// Rounds per portion, classic generation.
pub const ROUNDS_CLASSIC: usize = 8;

/// Rounds per portion, extended generation.
pub const ROUNDS_EXTENDED: usize = 31;

// =============================================================================
// INITIAL STATE
// =============================================================================

/// Initial factor state.
pub const INIT_FACTORS: [u16; FACTOR_COUNT] = [0x9f91, 0xdb3b, 0xc091, 0xac8b];

// =============================================================================
// PRIME TABLES
// =============================================================================

/// Number of entries in [`PRIMES_8BIT`].
pub const PRIMES_8BIT_NUM: usize = 54;

/// All primes below 256.
#[rustfmt::skip]
pub const PRIMES_8BIT: [u16; PRIMES_8BIT_NUM] = [
    0x02, 0x03, 0x05, 0x07, 0x0b, 0x0d, 0x11, 0x13, 0x17, 0x1d, 0x1f, 0x25, 0x29, 0x2b,
    0x2f, 0x35, 0x3b, 0x3d, 0x43, 0x47, 0x49, 0x4f, 0x53, 0x59, 0x61, 0x65, 0x67, 0x6b,
    0x6d, 0x71, 0x7f, 0x83, 0x89, 0x8b, 0x95, 0x97, 0x9d, 0xa3, 0xa7, 0xad, 0xb3, 0xb5,
    0xbf, 0xc1, 0xc5, 0xc7, 0xd3, 0xdf, 0xe3, 0xe5, 0xe9, 0xef, 0xf1, 0xfb,
];

/// Shift amounts used by Delta.
pub const SINGLE_DIGIT_PRIMES: [u16; 3] = [0x3, 0x5, 0x7];

/// Moduli for the Delta cross term.
pub const MAGIC_PRIMES: [u16; 2] = [0x33, 0x65];

/// Round primes of the classic generation.
#[rustfmt::skip]
pub const ROUND_PRIMES_CLASSIC: [u16; 32] = [
    0xe537, 0xbd71, 0x9ef9, 0xbbcf, 0xf8dd, 0xceb7, 0xbaa1, 0x8f9f,
    0xb0ed, 0xfc4f, 0x9787, 0xf01f, 0xe1d1, 0xbcb9, 0xd565, 0xc011,
    0xc1e1, 0xb58d, 0xd4e1, 0x9ea1, 0xee49, 0x97cd, 0xdac9, 0xe257,
    0xa32b, 0xafbb, 0xa5e3, 0xfc43, 0xbf71, 0xe401, 0x8ebd, 0xd549,
];

/// Round primes of the extended generation.
#[rustfmt::skip]
pub const ROUND_PRIMES_EXTENDED: [u16; 90] = [
    // Classic table
    0xe537, 0xbd71, 0x9ef9, 0xbbcf, 0xf8dd, 0xceb7, 0xbaa1, 0x8f9f,
    0xb0ed, 0xfc4f, 0x9787, 0xf01f, 0xe1d1, 0xbcb9, 0xd565, 0xc011,
    0xc1e1, 0xb58d, 0xd4e1, 0x9ea1, 0xee49, 0x97cd, 0xdac9, 0xe257,
    0xa32b, 0xafbb, 0xa5e3, 0xfc43, 0xbf71, 0xe401, 0x8ebd, 0xd549,
    // Descending from 0x8ebd
    0x8eb1, 0x8eaf, 0x8eab, 0x8e91, 0x8e8d, 0x8e7f, 0x8e79, 0x8e75,
    0x8e73, 0x8e69, 0x8e63, 0x8e51, 0x8e25, 0x8e1f, 0x8e15, 0x8e01,
    0x8df7, 0x8df5, 0x8ddf, 0x8dd9, 0x8dd3, 0x8dcb, 0x8dc5, 0x8db5,
    0x8dad, 0x8da7, 0x8d9b, 0x8d91, 0x8d85, 0x8d79, 0x8d71, 0x8d5f,
    0x8d5b, 0x8d41, 0x8d37, 0x8d29, 0x8d23, 0x8d0d, 0x8d0b, 0x8d01,
    0x8cf3, 0x8ce9, 0x8ce3, 0x8cdd, 0x8cc5, 0x8cb1, 0x8cad, 0x8cab,
    0x8ca7, 0x8c9f, 0x8c99, 0x8c8f, 0x8c89, 0x8c81, 0x8c7b, 0x8c6f,
    0x8c5d, 0x8c53,
];

// =============================================================================
// MASKS
// =============================================================================

/// Upper half of a double word.
pub const MASK_DWORD_HIGH: u32 = 0xffff_0000;
/// Lower half of a double word.
pub const MASK_DWORD_LOW: u32 = 0x0000_ffff;

pub(crate) const MASK_WORD_FZFZ: u16 = 0xf0f0;
pub(crate) const MASK_WORD_ZFZF: u16 = 0x0f0f;
pub(crate) const MASK_WORD_FZZZ: u16 = 0xf000;
pub(crate) const MASK_WORD_ZZFZ: u16 = 0x00f0;
pub(crate) const MASK_WORD_ZZZF: u16 = 0x000f;
pub(crate) const MASK_WORD_ZZFF: u16 = 0x00ff;
pub(crate) const MASK_WORD_FFZZ: u16 = 0xff00;
pub(crate) const MASK_WORD_FZZF: u16 = 0xf00f;
pub(crate) const MASK_WORD_FFFZ: u16 = 0xfff0;
pub(crate) const MASK_WORD_ZFFF: u16 = 0x0fff;

/// Width of a factor in bits.
pub const WORD_WIDTH: u32 = 16;

// =============================================================================
// PERMUTATION
// =============================================================================

/// All 2-combinations of the factor indices, in swap order.
pub const SWAP_PAIRS: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

// =============================================================================
// DIGEST ALPHABETS
// =============================================================================

/// Sexagesimal digits.
pub const SEX_CHARS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwx";
/// Vigesimal digits.
pub const VIG_CHARS: &[u8] = b"ABCDEFGHIJ@^&*$+!;:~";
/// Hexadecimal digits.
pub const HEX_CHARS: &[u8] = b"0123456789ABCDEF";
/// Tetradecimal digits.
pub const TET_CHARS: &[u8] = b"0123456789TEWR";
/// Duodecimal digits.
pub const DUO_CHARS: &[u8] = b"0123456789*#";
/// Octal digits.
pub const OCT_CHARS: &[u8] = b"01234567";
/// Senary digits.
pub const SEN_CHARS: &[u8] = b"012345";
/// Binary digits.
pub const BIN_CHARS: &[u8] = b"01";
