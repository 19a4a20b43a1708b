//! Secure-randomness capability consumed by encryption workers.
//!
//! Nonce freshness is the one external input AES-GCM cannot survive
//! losing: a repeated nonce under the same key breaks both
//! confidentiality and integrity. The engine draws exactly one nonce per
//! record through this trait and treats any failure as fatal to the
//! batch.

use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;

/// Error returned when an entropy source cannot fill a buffer.
#[derive(Debug, Error)]
#[error("entropy source failed: {reason}")]
pub struct EntropyError {
    /// Failure description from the underlying source.
    pub reason: String,
}

/// Capability: fill a buffer with cryptographically unpredictable bytes.
///
/// Implementations must be safe for concurrent use — every worker draws
/// nonces through a shared reference. The source may block (platform
/// randomness can be slow or globally serialised); the engine makes no
/// attempt to serialise access beyond what the source itself guarantees.
#[cfg_attr(test, mockall::automock)]
pub trait EntropySource: Send + Sync {
    /// Fill `buf` entirely with unpredictable bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError`] if the source cannot produce enough bytes.
    /// A partial fill must be reported as an error, never silently padded.
    fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError>;
}

/// The operating system CSPRNG (`getrandom` and platform equivalents).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError> {
        OsRng.try_fill_bytes(buf).map_err(|e| EntropyError {
            reason: e.to_string(),
        })
    }
}
