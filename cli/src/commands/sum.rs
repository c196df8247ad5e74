//! Sum Command
//!
//! File hashing, one file per Rayon task.

use anyhow::{Context, Result};
use poxhash::{Hasher, PoxDigest, PoxVariant};
use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read buffer per file.
const READ_BUFFER: usize = 128 * 1024;

/// Stream one file through the hasher.
pub fn hash_file(path: &Path, variant: PoxVariant) -> Result<PoxDigest> {
    let mut file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open: {}", path.display()))?;

    let mut hasher = Hasher::with_variant(variant);
    let mut buffer = vec![0u8; READ_BUFFER];

    loop {
        let n = file
            .read(&mut buffer)
            .with_context(|| format!("Failed to read: {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    debug!(path = %path.display(), "hashed file");
    Ok(hasher.finalize())
}

/// Hash files in parallel and print `HEXDIGEST  PATH` in argument order.
pub fn sum_files(files: &[PathBuf], variant: PoxVariant) -> Result<()> {
    let results: Vec<(&PathBuf, Result<PoxDigest>)> = files
        .par_iter()
        .map(|path| (path, hash_file(path, variant)))
        .collect();

    let mut failed = 0usize;
    for (path, result) in results {
        match result {
            Ok(digest) => println!("{}  {}", digest.hexdigest, path.display()),
            Err(e) => {
                eprintln!("Error: {}: {e:#}", path.display());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("Failed to hash {failed} file(s)");
    }

    Ok(())
}
