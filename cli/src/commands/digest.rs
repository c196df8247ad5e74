//! Digest Command
//!
//! The default mode: hash each message (or all of them joined) and print the
//! selected views, optionally with the total hashing time.

use super::input::{join_args, message_bytes};
use super::report::{bench_line, TimeUnit, View};
use anyhow::Result;
use poxhash::{hash_with_variant, PoxDigest, PoxVariant};
use std::collections::BTreeSet;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Options for the default mode, resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct DigestOptions {
    /// Hash all messages as one, joined by spaces
    pub join: bool,
    /// Echo every argument before hashing
    pub echo: bool,
    /// Views to print
    pub views: BTreeSet<View>,
    /// Units to print the total time in; `None` disables timing
    pub timing: Option<Vec<TimeUnit>>,
    /// Print timing only
    pub bench_only: bool,
    /// Algorithm generation
    pub variant: PoxVariant,
}

// =============================================================================
// DIGEST
// =============================================================================

/// Hash `args` and print the report.
pub fn digest_mode(args: &[String], options: &DigestOptions) -> Result<()> {
    let (digests, elapsed) = if options.join {
        let joined = join_args(args);
        if options.echo {
            println!("Joined Args: \n`{joined}`");
        }
        let (digest, elapsed) = timed_hash(joined.as_bytes(), options.variant);
        (vec![digest], elapsed)
    } else {
        let mut digests = Vec::with_capacity(args.len());
        let mut total = Duration::ZERO;
        for (i, arg) in args.iter().enumerate() {
            if options.echo {
                println!("Arg {}: {arg}", i + 1);
            }
            let message = message_bytes(arg)?;
            let (digest, elapsed) = timed_hash(&message, options.variant);
            digests.push(digest);
            total += elapsed;
        }
        (digests, total)
    };
    info!(messages = digests.len(), ?elapsed, variant = %options.variant, "hashed");

    if let Some(units) = &options.timing {
        println!("{}", bench_line(digests.len(), elapsed, units));
    }
    if options.bench_only {
        return Ok(());
    }

    if options.views.is_empty() {
        println!("You had not specified any digests to be printed");
        return Ok(());
    }

    for digest in &digests {
        for view in &options.views {
            println!("{}", view.render(digest));
        }
        println!("----");
    }
    Ok(())
}

/// Hash one message, measuring only the hashing itself.
fn timed_hash(message: &[u8], variant: PoxVariant) -> (PoxDigest, Duration) {
    debug!(len = message.len(), "hashing message");
    let start = Instant::now();
    let digest = hash_with_variant(message, variant);
    (digest, start.elapsed())
}
