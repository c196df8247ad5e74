//! Message Acquisition
//!
//! Turns command-line arguments into the bytes to hash. Plain arguments are
//! hashed as UTF-8; `file=PATH` reads a file and `int=LIST` parses byte literals.

use anyhow::{bail, Context, Result};
use tracing::{debug, warn};

const FILE_PREFIX: &str = "file=";
const INT_PREFIX: &str = "int=";

/// Maximum digits after `0b`, `0o` and `0x`.
const MAX_BIN_DIGITS: usize = 8;
const MAX_OCT_DIGITS: usize = 5;
const MAX_HEX_DIGITS: usize = 2;

// =============================================================================
// ARGUMENTS
// =============================================================================

/// Resolve one argument to its message bytes.
pub fn message_bytes(arg: &str) -> Result<Vec<u8>> {
    if let Some(path) = arg.strip_prefix(FILE_PREFIX).filter(|p| !p.is_empty()) {
        debug!(path, "reading message from file");
        return std::fs::read(path).with_context(|| format!("Failed to read: {path}"));
    }
    if let Some(list) = arg.strip_prefix(INT_PREFIX).filter(|l| !l.is_empty()) {
        return parse_int_list(list).with_context(|| format!("Invalid integer list: {list}"));
    }
    Ok(arg.as_bytes().to_vec())
}

/// Join every argument with a single space. Prefixes are not interpreted.
pub fn join_args(args: &[String]) -> String {
    if args.iter().any(|a| a.starts_with(FILE_PREFIX) || a.starts_with(INT_PREFIX)) {
        warn!("`{FILE_PREFIX}` and `{INT_PREFIX}` prefixes are ignored in join mode");
    }
    args.join(" ")
}

// =============================================================================
// INTEGER LITERALS
// =============================================================================

/// Parse a comma-separated list of byte literals (`0x`, `0o`, `0b` or decimal).
pub fn parse_int_list(list: &str) -> Result<Vec<u8>> {
    list.split(',').map(|item| parse_byte(item.trim())).collect()
}

fn parse_byte(literal: &str) -> Result<u8> {
    let prefixed = [
        ("0b", 2, MAX_BIN_DIGITS, "binary"),
        ("0o", 8, MAX_OCT_DIGITS, "octal"),
        ("0x", 16, MAX_HEX_DIGITS, "hexadecimal"),
    ];
    for (prefix, radix, max_digits, name) in prefixed {
        if let Some(digits) = literal.strip_prefix(prefix) {
            if digits.is_empty() || digits.len() > max_digits {
                bail!("{name} literal `{literal}` must have 1 to {max_digits} digits");
            }
            return u8::from_str_radix(digits, radix)
                .with_context(|| format!("`{literal}` is not a byte-sized {name} number"));
        }
    }

    if literal.is_empty() || !literal.bytes().all(|b| b.is_ascii_digit()) {
        bail!("`{literal}` is not a byte literal in base 16, 8, 10 or 2");
    }
    literal
        .parse::<u8>()
        .with_context(|| format!("`{literal}` must be byte-sized (0-255)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_list_prefixes() {
        let bytes = parse_int_list("0x41,0o101,0b1000001,65,0xff,0").unwrap();
        assert_eq!(bytes, [65, 65, 65, 65, 255, 0]);
    }

    #[test]
    fn test_parse_int_list_rejects_bad_literals() {
        for bad in ["0x100", "0b111111111", "0o400", "256", "-1", "0xzz", "", "1,,2", "0o"] {
            assert!(parse_int_list(bad).is_err(), "accepted `{bad}`");
        }
    }

    #[test]
    fn test_octal_digit_limit() {
        assert_eq!(parse_int_list("0o00377").unwrap(), [255]);
        assert!(parse_int_list("0o000001").is_err());
    }

    #[test]
    fn test_message_bytes_plain_and_int() {
        assert_eq!(message_bytes("abc").unwrap(), b"abc");
        assert_eq!(message_bytes("int=0x61,98,0b1100011").unwrap(), b"abc");
        // A bare prefix is an ordinary message.
        assert_eq!(message_bytes("int=").unwrap(), b"int=");
        assert_eq!(message_bytes("file=").unwrap(), b"file=");
    }

    #[test]
    fn test_message_bytes_missing_file() {
        assert!(message_bytes("file=/nonexistent/poxhash/input").is_err());
    }

    #[test]
    fn test_join_args() {
        let args = ["large".to_string(), "seq".to_string(), "file=x".to_string()];
        assert_eq!(join_args(&args), "large seq file=x");
        assert_eq!(join_args(&[]), "");
    }
}
