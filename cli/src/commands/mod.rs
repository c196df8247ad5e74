//! CLI Commands
//!
//! All poxhash CLI commands organized as separate modules.

mod check;
mod digest;
mod input;
mod report;
mod sum;

pub use check::check_mode;
pub use digest::{digest_mode, DigestOptions};
pub use report::{TimeUnit, View};
pub use sum::sum_files;
