//! PoxHash CLI
//!
//! Hash messages, files and byte lists with PoxHash, print any digest view,
//! and produce or verify checksum lists.

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use commands::{check_mode, digest_mode, sum_files, DigestOptions, TimeUnit, View};
use poxhash::PoxVariant;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "POXHASH_LOG";

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "poxhash")]
#[command(about = "PoxHash: 64-bit digests in eight numeric bases", long_about = None)]
#[command(version)]
#[command(after_help = "Arguments starting with `file=` are read from disk, arguments \
    starting with `int=` are parsed as comma-separated byte literals (0x, 0o, 0b or decimal).")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Messages to hash (if no subcommand)
    #[arg(value_name = "MESSAGE")]
    messages: Vec<String>,

    /// Join all messages with a space and hash them as one
    #[arg(short, long)]
    join: bool,

    /// Echo every argument before hashing
    #[arg(short, long)]
    echo: bool,

    /// Print every digest view
    #[arg(short, long, conflicts_with_all = ["decimal", "non_decimal", "digest"])]
    all: bool,

    /// Print every decimal view (bytes, words, doubles, quad)
    #[arg(short = 'D', long)]
    decimal: bool,

    /// Print every base-string view
    #[arg(short = 'N', long)]
    non_decimal: bool,

    /// Print one digest view (repeatable)
    #[arg(short, long, value_enum, value_name = "VIEW")]
    digest: Vec<View>,

    /// Print the total hashing time
    #[arg(short, long)]
    bench: bool,

    /// Time unit for --bench (repeatable, default us)
    #[arg(short, long, value_enum, value_name = "UNIT", requires = "bench")]
    time: Vec<TimeUnit>,

    /// Print the hashing time in every unit and no digests
    #[arg(long, conflicts_with_all = ["bench", "time"])]
    bench_only: bool,

    /// Algorithm generation
    #[arg(long, global = true, default_value_t = PoxVariant::default())]
    variant: PoxVariant,

    /// Hide the banner
    #[arg(short = 'z', long)]
    no_header: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print `HEXDIGEST  PATH` for each file
    Sum {
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },
    /// Verify checksums from file (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
}

impl Cli {
    fn views(&self) -> BTreeSet<View> {
        let mut views: BTreeSet<View> = self.digest.iter().copied().collect();
        if self.all || self.decimal {
            views.extend(View::DECIMAL);
        }
        if self.all || self.non_decimal {
            views.extend(View::NON_DECIMAL);
        }
        views
    }

    fn digest_options(&self) -> DigestOptions {
        let timing = if self.bench_only {
            Some(TimeUnit::ALL.to_vec())
        } else if self.bench {
            let mut units = self.time.clone();
            units.sort_unstable();
            units.dedup();
            if units.is_empty() {
                units.push(TimeUnit::Us);
            }
            Some(units)
        } else {
            None
        };

        DigestOptions {
            join: self.join,
            echo: self.echo,
            views: self.views(),
            timing,
            bench_only: self.bench_only,
            variant: self.variant,
        }
    }
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Some(Commands::Sum { files }) => sum_files(files, cli.variant)?,
        Some(Commands::Check { checksum_file }) => check_mode(checksum_file, cli.variant)?,
        None => {
            if cli.messages.is_empty() {
                eprintln!("Error: No messages specified");
                eprintln!("Usage: poxhash [OPTIONS] [MESSAGE]... or poxhash --help");
                std::process::exit(1);
            }

            if !cli.no_header {
                println!(
                    "   PoxHash   |  {}  |  poxhash-cli {}   ",
                    cli.variant,
                    env!("CARGO_PKG_VERSION")
                );
            }
            digest_mode(&cli.messages, &cli.digest_options())?;
        }
    }

    Ok(())
}
