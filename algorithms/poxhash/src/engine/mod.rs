//! Execution Engine
//!
//! Padding, block iteration and batch processing on top of the portable kernel.

pub mod block;
pub mod parallel;

pub use block::{pad, padded_len};
