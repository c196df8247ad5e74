//! The digest record returned by every hashing entry point.

use crate::format::{encode_words, to_bytes, to_doubles, to_quad};
use crate::kernels::constants::FACTOR_COUNT;
use crate::types::{Base, Words};
use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Every view of the final four factors.
///
/// All fields are derived from `words`; two digests are equal exactly when their
/// words are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PoxDigest {
    /// Base 60, 3 digits per word.
    pub sexdigest: String,
    /// Base 20, 4 digits per word.
    pub vigdigest: String,
    /// Base 16, 4 digits per word.
    pub hexdigest: String,
    /// Base 14, 5 digits per word.
    pub tetdigest: String,
    /// Base 12, 5 digits per word.
    pub duodigest: String,
    /// Base 8, 6 digits per word.
    pub octdigest: String,
    /// Base 6, 7 digits per word.
    pub sendigest: String,
    /// Base 2, 16 digits per word.
    pub bindigest: String,
    /// `(low, high)` byte pairs of each word.
    pub bytes: [u8; FACTOR_COUNT * 2],
    /// The factors.
    pub words: Words,
    /// `[W0 | W1 << 16, W2 | W3 << 16]`.
    pub doubles: [u32; 2],
    /// The byte view as a little-endian `u64`.
    pub quad: u64,
}

impl PoxDigest {
    /// Build every view from the final factors.
    #[must_use]
    pub fn from_words(words: Words) -> Self {
        Self {
            sexdigest: encode_words(&words, Base::Sexagesimal),
            vigdigest: encode_words(&words, Base::Vigesimal),
            hexdigest: encode_words(&words, Base::Hexadecimal),
            tetdigest: encode_words(&words, Base::Tetradecimal),
            duodigest: encode_words(&words, Base::Duodecimal),
            octdigest: encode_words(&words, Base::Octal),
            sendigest: encode_words(&words, Base::Senary),
            bindigest: encode_words(&words, Base::Binary),
            bytes: to_bytes(&words),
            words,
            doubles: to_doubles(&words),
            quad: to_quad(&words),
        }
    }

    /// The string digest for `base`.
    #[must_use]
    pub fn digest(&self, base: Base) -> &str {
        match base {
            Base::Sexagesimal => &self.sexdigest,
            Base::Vigesimal => &self.vigdigest,
            Base::Hexadecimal => &self.hexdigest,
            Base::Tetradecimal => &self.tetdigest,
            Base::Duodecimal => &self.duodigest,
            Base::Octal => &self.octdigest,
            Base::Senary => &self.sendigest,
            Base::Binary => &self.bindigest,
        }
    }
}

impl From<Words> for PoxDigest {
    fn from(words: Words) -> Self {
        Self::from_words(words)
    }
}

impl fmt::Display for PoxDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hexdigest)
    }
}
