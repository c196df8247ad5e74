//! Output Rendering
//!
//! Digest views, timing units and the scientific notation used for timings.

use clap::ValueEnum;
use poxhash::{Base, PoxDigest};
use std::time::Duration;

// =============================================================================
// DIGEST VIEWS
// =============================================================================

/// A printable view of a digest, in print order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum View {
    /// Eight unsigned 8-bit integers
    Bytes,
    /// Four unsigned 16-bit integers
    Words,
    /// Two unsigned 32-bit integers
    Doubles,
    /// One unsigned 64-bit integer
    Quad,
    /// Base sixty
    Sex,
    /// Base twenty
    Vig,
    /// Base sixteen
    Hex,
    /// Base fourteen
    Tet,
    /// Base twelve
    Duo,
    /// Base eight
    Oct,
    /// Base six
    Sen,
    /// Base two
    Bin,
}

impl View {
    /// Integer views.
    pub const DECIMAL: [Self; 4] = [Self::Bytes, Self::Words, Self::Doubles, Self::Quad];

    /// Base-string views.
    pub const NON_DECIMAL: [Self; 8] = [
        Self::Sex,
        Self::Vig,
        Self::Hex,
        Self::Tet,
        Self::Duo,
        Self::Oct,
        Self::Sen,
        Self::Bin,
    ];

    const fn base(self) -> Option<Base> {
        match self {
            Self::Sex => Some(Base::Sexagesimal),
            Self::Vig => Some(Base::Vigesimal),
            Self::Hex => Some(Base::Hexadecimal),
            Self::Tet => Some(Base::Tetradecimal),
            Self::Duo => Some(Base::Duodecimal),
            Self::Oct => Some(Base::Octal),
            Self::Sen => Some(Base::Senary),
            Self::Bin => Some(Base::Binary),
            Self::Bytes | Self::Words | Self::Doubles | Self::Quad => None,
        }
    }

    /// Render one line for `digest`.
    pub fn render(self, digest: &PoxDigest) -> String {
        match self {
            Self::Bytes => format!("Bytes: U8{:?}", digest.bytes),
            Self::Words => format!("Words: U16{:?}", digest.words),
            Self::Doubles => format!("Doubles: U32{:?}", digest.doubles),
            Self::Quad => format!("Quad: U64[{}]", digest.quad),
            view => match view.base() {
                Some(base) => format!("{}: {}", capitalized_label(base), digest.digest(base)),
                None => String::new(),
            },
        }
    }
}

fn capitalized_label(base: Base) -> String {
    let name = base.name();
    let mut label = String::with_capacity(name.len() + 6);
    let mut chars = name.chars();
    if let Some(first) = chars.next() {
        label.push(first.to_ascii_uppercase());
    }
    label.extend(chars);
    label.push_str("digest");
    label
}

// =============================================================================
// TIMING
// =============================================================================

/// Unit for reporting elapsed hashing time.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum TimeUnit {
    /// Nanoseconds
    Ns,
    /// Microseconds
    Us,
    /// Milliseconds
    Ms,
    /// Seconds
    S,
    /// Minutes
    M,
}

impl TimeUnit {
    /// Every unit, smallest first.
    pub const ALL: [Self; 5] = [Self::Ns, Self::Us, Self::Ms, Self::S, Self::M];

    const fn nanos(self) -> f64 {
        match self {
            Self::Ns => 1.0,
            Self::Us => 1e3,
            Self::Ms => 1e6,
            Self::S => 1e9,
            Self::M => 6e10,
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            Self::Ns => "ns",
            Self::Us => "us",
            Self::Ms => "ms",
            Self::S => "s",
            Self::M => "m",
        }
    }

    /// `elapsed` in this unit, in scientific notation.
    pub fn format(self, elapsed: Duration) -> String {
        #[allow(clippy::cast_precision_loss)]
        let nanos = elapsed.as_nanos() as f64;
        format!("{}{}", e_notation(nanos / self.nanos()), self.suffix())
    }
}

/// Benchmark summary: `| N Message(s) || <time> | <time> |`.
pub fn bench_line(messages: usize, elapsed: Duration, units: &[TimeUnit]) -> String {
    let mut line = format!("| {messages} Message(s) ||");
    for unit in units {
        line.push(' ');
        line.push_str(&unit.format(elapsed));
        line.push_str(" |");
    }
    line
}

/// Four decimals and a signed, two-digit exponent: `1.2345e+03`.
pub fn e_notation(value: f64) -> String {
    let value = value.abs();
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }
    let formatted = format!("{value:.4e}");
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return formatted;
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}
