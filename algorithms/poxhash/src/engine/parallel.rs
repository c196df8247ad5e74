//! Batch Execution Engine
//!
//! Messages are independent, so a batch fans out one message per task. Results
//! come back in input order. Parallel via Rayon if the `multithread` feature is
//! enabled, otherwise serial.

use crate::engine::block::hash_words;
use crate::types::{PoxVariant, Words};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// =============================================================================
// BATCH ENGINE
// =============================================================================

/// Final factors for every message, in input order.
#[must_use]
pub fn hash_many(messages: &[&[u8]], variant: PoxVariant) -> Vec<Words> {
    messages.process_each(|message| hash_words(message, variant))
}

/// Helper for feature-agnostic per-message processing
trait MessageProcessor {
    fn process_each<F, R>(self, f: F) -> Vec<R>
    where
        F: Fn(&[u8]) -> R + Sync + Send,
        R: Send;
}

impl MessageProcessor for &[&[u8]] {
    fn process_each<F, R>(self, f: F) -> Vec<R>
    where
        F: Fn(&[u8]) -> R + Sync + Send,
        R: Send,
    {
        #[cfg(feature = "multithread")]
        {
            use rayon::prelude::*;
            self.par_iter().map(|message| f(message)).collect()
        }
        #[cfg(not(feature = "multithread"))]
        {
            self.iter().map(|message| f(message)).collect()
        }
    }
}
