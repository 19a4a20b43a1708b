//! Entropy-source test doubles shared by the integration tests.

use std::collections::HashSet;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};
use std::thread::{self, ThreadId};
use std::time::Duration;

use card_crypter::{EntropyError, EntropySource};
use rand::RngCore;

/// Fills every nonce byte with one fixed value. Guaranteed nonce reuse —
/// catastrophic anywhere but a test, which is exactly why it lives here:
/// it makes sealed output fully deterministic.
pub struct ConstantEntropy(pub u8);

impl EntropySource for ConstantEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError> {
        buf.fill(self.0);
        Ok(())
    }
}

/// Real randomness, plus a record of how many draws happened and which
/// threads performed them. Clones share the counters.
#[derive(Clone, Default)]
pub struct RecordingEntropy {
    pub calls: Arc<AtomicU64>,
    pub threads: Arc<Mutex<HashSet<ThreadId>>>,
}

impl EntropySource for RecordingEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.threads
            .lock()
            .unwrap()
            .insert(thread::current().id());
        rand::thread_rng().fill_bytes(buf);
        Ok(())
    }
}

/// Adds a fixed latency to every draw, imitating a slow or globally
/// serialised platform randomness source.
pub struct SlowEntropy(pub Duration);

impl EntropySource for SlowEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError> {
        thread::sleep(self.0);
        rand::thread_rng().fill_bytes(buf);
        Ok(())
    }
}

/// Always fails, as an exhausted or broken entropy pool would.
pub struct BrokenEntropy;

impl EntropySource for BrokenEntropy {
    fn fill(&self, _buf: &mut [u8]) -> Result<(), EntropyError> {
        Err(EntropyError {
            reason: "entropy pool exhausted".into(),
        })
    }
}
