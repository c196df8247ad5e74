//! Compression Kernels
//!
//! Round constants and the portable 16-bit implementation of the PoxHash rounds.

pub mod constants;
pub mod portable;
