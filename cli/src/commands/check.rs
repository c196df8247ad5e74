//! Check Command
//!
//! Verify checksums from file (like sha256sum -c).

use super::sum::hash_file;
use anyhow::{Context, Result};
use poxhash::PoxVariant;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::warn;

// =============================================================================
// CHECK
// =============================================================================

/// Verify checksums from a checksum file.
pub fn check_mode(checksum_file: &Path, variant: PoxVariant) -> Result<()> {
    let file = File::open(checksum_file)
        .with_context(|| format!("Failed to open: {}", checksum_file.display()))?;

    let reader = BufReader::new(file);
    let mut total = 0usize;
    let mut failed = 0usize;

    for line in reader.lines() {
        let line = line.with_context(|| format!("Failed to read: {}", checksum_file.display()))?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Format: "hash  filename" (two spaces)
        let Some((expected, file_path)) = line.split_once("  ") else {
            warn!("Invalid format: {line}");
            continue;
        };
        let expected = expected.trim();
        let file_path = file_path.trim();
        if !matches!(hex::decode(expected), Ok(bytes) if bytes.len() == 8) {
            warn!("Invalid digest: {line}");
            continue;
        }
        total += 1;

        match hash_file(Path::new(file_path), variant) {
            Ok(digest) if digest.hexdigest.eq_ignore_ascii_case(expected) => {
                println!("{file_path}: OK");
            }
            Ok(_) => {
                println!("{file_path}: FAILED");
                failed += 1;
            }
            Err(e) => {
                println!("{file_path}: FAILED ({e:#})");
                failed += 1;
            }
        }
    }

    println!();
    if failed > 0 {
        anyhow::bail!("{failed} of {total} checksums did NOT match");
    }
    println!("All {total} checksums verified");

    Ok(())
}
