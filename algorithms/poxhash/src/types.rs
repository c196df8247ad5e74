//! Shared types used across the PoxHash library.

use crate::kernels::constants::{
    BIN_CHARS, DUO_CHARS, FACTOR_COUNT, HEX_CHARS, OCT_CHARS, ROUNDS_CLASSIC, ROUNDS_EXTENDED,
    ROUND_PRIMES_CLASSIC, ROUND_PRIMES_EXTENDED, SEN_CHARS, SEX_CHARS, TET_CHARS, VIG_CHARS,
};
use core::fmt;
use core::str::FromStr;
#[cfg(feature = "std")]
use std::error;

// =============================================================================
// STATE
// =============================================================================

/// The four 16-bit factors: the running state and each round's working copy.
pub type Words = [u16; FACTOR_COUNT];

/// How the working copy is reduced against the round-prime table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimeReduction {
    /// `W0 ^= p; W1 &= p; W2 ^= p; W3 &= p` for each prime in order.
    Bitwise(&'static [u16]),
    /// Every word is reduced modulo each prime in order.
    Modular(&'static [u16]),
}

// =============================================================================
// ALGORITHM GENERATIONS
// =============================================================================

/// Algorithm generation.
///
/// Both generations share the round stages and output formatting. They differ
/// in rounds per portion, the prime reduction step, and the prime corrections
/// folded in by byte mixing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PoxVariant {
    /// 8 rounds, 32 round primes, bitwise reduction.
    ///
    /// Interoperates with the published PoxHash v1 implementations.
    Classic,
    /// 31 rounds, 90 round primes, modulo reduction, prime-corrected mixing.
    /// The default.
    #[default]
    Extended,
}

impl PoxVariant {
    /// All generations, oldest first.
    pub const ALL: [Self; 2] = [Self::Classic, Self::Extended];

    /// Rounds applied to every portion.
    #[must_use]
    pub const fn rounds(self) -> usize {
        match self {
            Self::Classic => ROUNDS_CLASSIC,
            Self::Extended => ROUNDS_EXTENDED,
        }
    }

    /// Prime reduction applied at the end of every round.
    #[must_use]
    pub const fn reduction(self) -> PrimeReduction {
        match self {
            Self::Classic => PrimeReduction::Bitwise(&ROUND_PRIMES_CLASSIC),
            Self::Extended => PrimeReduction::Modular(&ROUND_PRIMES_EXTENDED),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Extended => "extended",
        }
    }
}

impl fmt::Display for PoxVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PoxVariant {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s))
            .ok_or(ParseNameError::UnknownVariant)
    }
}

// =============================================================================
// DIGEST BASES
// =============================================================================

/// Numeric base of a string digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    /// Base 60.
    Sexagesimal,
    /// Base 20.
    Vigesimal,
    /// Base 16.
    Hexadecimal,
    /// Base 14.
    Tetradecimal,
    /// Base 12.
    Duodecimal,
    /// Base 8.
    Octal,
    /// Base 6.
    Senary,
    /// Base 2.
    Binary,
}

impl Base {
    /// All bases in digest order.
    pub const ALL: [Self; 8] = [
        Self::Sexagesimal,
        Self::Vigesimal,
        Self::Hexadecimal,
        Self::Tetradecimal,
        Self::Duodecimal,
        Self::Octal,
        Self::Senary,
        Self::Binary,
    ];

    /// Numeric radix.
    #[must_use]
    pub const fn radix(self) -> u16 {
        match self {
            Self::Sexagesimal => 60,
            Self::Vigesimal => 20,
            Self::Hexadecimal => 16,
            Self::Tetradecimal => 14,
            Self::Duodecimal => 12,
            Self::Octal => 8,
            Self::Senary => 6,
            Self::Binary => 2,
        }
    }

    /// Digits per word: enough to represent `0..=0xffff`.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::Sexagesimal => 3,
            Self::Vigesimal | Self::Hexadecimal => 4,
            Self::Tetradecimal | Self::Duodecimal => 5,
            Self::Octal => 6,
            Self::Senary => 7,
            Self::Binary => 16,
        }
    }

    /// Length of the full digest string.
    #[must_use]
    pub const fn digest_len(self) -> usize {
        self.width() * FACTOR_COUNT
    }

    /// Digit characters, indexed by digit value.
    #[must_use]
    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            Self::Sexagesimal => SEX_CHARS,
            Self::Vigesimal => VIG_CHARS,
            Self::Hexadecimal => HEX_CHARS,
            Self::Tetradecimal => TET_CHARS,
            Self::Duodecimal => DUO_CHARS,
            Self::Octal => OCT_CHARS,
            Self::Senary => SEN_CHARS,
            Self::Binary => BIN_CHARS,
        }
    }

    /// Short name (`"sex"`, `"vig"`, `"hex"`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sexagesimal => "sex",
            Self::Vigesimal => "vig",
            Self::Hexadecimal => "hex",
            Self::Tetradecimal => "tet",
            Self::Duodecimal => "duo",
            Self::Octal => "oct",
            Self::Senary => "sen",
            Self::Binary => "bin",
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Base {
    type Err = ParseNameError;

    /// Accepts the short name or the radix in decimal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(s) || s.parse::<u16>() == Ok(b.radix()))
            .ok_or(ParseNameError::UnknownBase)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Error for an unrecognized [`Base`] or [`PoxVariant`] name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseNameError {
    /// Not a base name or radix.
    UnknownBase,
    /// Not a generation name.
    UnknownVariant,
}

impl fmt::Display for ParseNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBase => write!(
                f,
                "unknown base. Expected one of: sex, vig, hex, tet, duo, oct, sen, bin \
                 (or 60, 20, 16, 14, 12, 8, 6, 2)"
            ),
            Self::UnknownVariant => write!(f, "unknown variant. Expected classic or extended"),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for ParseNameError {}
