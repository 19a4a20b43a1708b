//! Batch coordinator: validation, worker dispatch, and the final join.

use std::num::NonZeroUsize;
use std::thread;

use tracing::debug;

use crate::batch::partition::{chunk_ranges, effective_workers};
use crate::batch::worker::seal_chunk;
use crate::config::CrypterConfig;
use crate::crypto::cipher::AeadCipher;
use crate::entropy::{EntropySource, OsEntropy};
use crate::error::EncryptError;
use crate::model::Card;

/// Concurrent batch encryptor for card records.
///
/// Holds only the worker ceiling and the entropy source; everything else
/// — the AEAD instance, the output buffer, the worker set — is created
/// fresh per [`encrypt`](Self::encrypt) call and torn down before it
/// returns. No state persists between batches.
#[derive(Debug)]
pub struct BatchCrypter<E: EntropySource = OsEntropy> {
    workers: Option<usize>,
    entropy: E,
}

impl BatchCrypter<OsEntropy> {
    /// Build a crypter from configuration, drawing nonces from the OS
    /// CSPRNG.
    pub fn new(config: &CrypterConfig) -> Self {
        Self {
            workers: config.workers,
            entropy: OsEntropy,
        }
    }

    /// Build a crypter with an explicit worker ceiling.
    pub fn with_workers(workers: usize) -> Self {
        Self {
            workers: Some(workers),
            entropy: OsEntropy,
        }
    }
}

impl<E: EntropySource> BatchCrypter<E> {
    /// Build a crypter with a custom entropy source.
    ///
    /// Production callers want [`BatchCrypter::new`]; this exists so
    /// tests and harnesses can substitute deterministic or instrumented
    /// randomness.
    pub fn with_entropy(workers: Option<usize>, entropy: E) -> Self {
        Self { workers, entropy }
    }

    /// Encrypt a batch of cards under `key`, one sealed hex record per
    /// card, in input order.
    ///
    /// Each record is sealed with a freshly drawn random nonce and with
    /// its `id` as associated data. The call is all-or-nothing: on any
    /// failure no output is returned. Sibling workers are not interrupted
    /// when one fails; their results are discarded at the join.
    ///
    /// The caller's slice is only read, never mutated.
    ///
    /// # Errors
    ///
    /// - [`EncryptError::InvalidWorkerCount`] — the resolved worker
    ///   ceiling is zero.
    /// - [`EncryptError::InvalidKey`] — `key` is not 16, 24, or 32 bytes.
    /// - [`EncryptError::Entropy`] — the entropy source failed to produce
    ///   a nonce for some record (first failing record by input order).
    pub fn encrypt(&self, cards: &[Card], key: &[u8]) -> Result<Vec<String>, EncryptError> {
        let hint = self.workers.unwrap_or_else(default_parallelism);
        if hint == 0 {
            return Err(EncryptError::InvalidWorkerCount(hint));
        }
        let cipher = AeadCipher::new(key)?;

        if cards.is_empty() {
            return Ok(Vec::new());
        }

        let workers = effective_workers(hint, cards.len());
        let _span =
            tracing::debug_span!("encrypt_batch", records = cards.len(), workers).entered();

        let mut out = vec![String::new(); cards.len()];
        let ranges = chunk_ranges(cards.len(), workers);
        debug!(chunks = ranges.len(), "dispatching workers");

        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(ranges.len());
            let mut cards_rest = cards;
            let mut out_rest = out.as_mut_slice();

            // Hand each worker exclusive ownership of its contiguous
            // output sub-slice; disjointness is what makes the shared
            // buffer safe without locks.
            for range in &ranges {
                let (card_chunk, cards_tail) = cards_rest.split_at(range.len());
                cards_rest = cards_tail;
                let (out_chunk, out_tail) = out_rest.split_at_mut(range.len());
                out_rest = out_tail;

                let cipher = &cipher;
                let entropy = &self.entropy;
                handles.push(
                    scope.spawn(move || seal_chunk(cipher, entropy, card_chunk, out_chunk)),
                );
            }

            // Join in spawn order. Workers own ascending index ranges, so
            // the first error seen here is the first error by input index.
            let mut first_err = None;
            for handle in handles {
                match handle.join() {
                    Ok(Ok(())) => {}
                    Ok(Err(err)) => {
                        if first_err.is_none() {
                            first_err = Some(err);
                        }
                    }
                    Err(panic) => std::panic::resume_unwind(panic),
                }
            }
            match first_err {
                None => Ok(()),
                Some(err) => Err(err),
            }
        })?;

        debug!(records = out.len(), "batch sealed");
        Ok(out)
    }
}

/// Runtime hint of available hardware parallelism, used when no worker
/// ceiling was configured. Resolved per call, not cached, so a changed
/// CPU affinity mask is picked up by the next batch.
fn default_parallelism() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}
