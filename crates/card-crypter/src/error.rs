//! Top-level error taxonomy for batch encryption.

use thiserror::Error;

use crate::crypto::cipher::CipherError;
use crate::entropy::EntropyError;

/// Errors returned by [`BatchCrypter::encrypt`](crate::BatchCrypter::encrypt).
///
/// A batch is all-or-nothing: any variant here means no usable output was
/// produced for the whole call.
#[derive(Debug, Error)]
pub enum EncryptError {
    /// The resolved worker ceiling is zero. A zero ceiling is always a
    /// configuration mistake and is rejected before any cryptographic work.
    #[error("invalid worker count: {0} (must be at least 1)")]
    InvalidWorkerCount(usize),

    /// The key length is not a supported AES key size.
    #[error("invalid key: unsupported length {0} (expected 16, 24, or 32 bytes)")]
    InvalidKey(usize),

    /// The entropy source failed to produce a nonce for some record.
    #[error("nonce generation failed: {0}")]
    Entropy(#[from] EntropyError),

    /// The AEAD layer failed during sealing. Not expected with a valid key
    /// and nonce; surfaced rather than panicking.
    #[error("cipher failure: {0}")]
    Cipher(CipherError),
}

impl From<CipherError> for EncryptError {
    fn from(err: CipherError) -> Self {
        match err {
            CipherError::InvalidKeyLength(len) => EncryptError::InvalidKey(len),
            other => EncryptError::Cipher(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_key_identifies_received_size() {
        let err = EncryptError::InvalidKey(3);
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn key_length_cipher_error_maps_to_invalid_key() {
        let err: EncryptError = CipherError::InvalidKeyLength(17).into();
        assert!(matches!(err, EncryptError::InvalidKey(17)));
    }

    #[test]
    fn other_cipher_errors_stay_cipher_failures() {
        let err: EncryptError = CipherError::AeadFailure.into();
        assert!(matches!(err, EncryptError::Cipher(_)));
    }

    #[test]
    fn display_includes_context() {
        let err = EncryptError::InvalidWorkerCount(0);
        assert!(err.to_string().contains("worker count"));
    }
}
