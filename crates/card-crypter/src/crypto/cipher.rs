//! AES-GCM construction, detached in-place sealing, and verification
//! opening.
//!
//! The cipher variant is selected by key length, matching the accepted
//! AES key sizes. Each instance is shared read-only across all workers
//! of a batch; the RustCrypto cipher types are `Sync` and safe for
//! concurrent sealing.

use aes::Aes192;
use aes_gcm::aead::generic_array::typenum::U12;
use aes_gcm::aead::{Aead, AeadInPlace, KeyInit, Payload};
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm, Nonce};
use thiserror::Error;

use crate::model::PAN_LEN;

/// Byte length of an AES-GCM nonce (12 bytes = 96 bits).
pub const NONCE_LEN: usize = 12;

/// Byte length of the GCM authentication tag.
pub const TAG_LEN: usize = 16;

/// Total byte length of a sealed card record before hex encoding.
pub const SEALED_LEN: usize = NONCE_LEN + PAN_LEN + TAG_LEN;

// The `aes-gcm` crate aliases only the 128- and 256-bit variants.
type Aes192Gcm = AesGcm<Aes192, U12>;

/// Errors produced by the cipher layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    /// The key is not one of the AES key sizes (16, 24, or 32 bytes).
    #[error("invalid key length: {0} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength(usize),

    /// AES-GCM sealing or opening failed. On open this means a wrong key,
    /// wrong associated data, or tampered ciphertext.
    #[error("aead operation failed")]
    AeadFailure,

    /// The sealed record string is not valid hex or is too short to hold
    /// a nonce and a tag.
    #[error("invalid sealed record format")]
    InvalidFormat,
}

/// AES-GCM instance selected by key length.
#[derive(Clone)]
pub enum AeadCipher {
    /// AES-128-GCM (16-byte key).
    Aes128(Aes128Gcm),
    /// AES-192-GCM (24-byte key).
    Aes192(Aes192Gcm),
    /// AES-256-GCM (32-byte key).
    Aes256(Aes256Gcm),
}

impl AeadCipher {
    /// Construct a cipher from raw key bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKeyLength`] if `key` is not 16, 24,
    /// or 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        let cipher = match key.len() {
            16 => Aes128Gcm::new_from_slice(key).map(Self::Aes128),
            24 => Aes192Gcm::new_from_slice(key).map(Self::Aes192),
            32 => Aes256Gcm::new_from_slice(key).map(Self::Aes256),
            len => return Err(CipherError::InvalidKeyLength(len)),
        };
        cipher.map_err(|_| CipherError::InvalidKeyLength(key.len()))
    }

    /// Seal `buffer` in place and return the detached authentication tag.
    ///
    /// `nonce` must be exactly [`NONCE_LEN`] bytes and must be fresh for
    /// this key. `aad` is authenticated but not encrypted. Writing the
    /// ciphertext over the plaintext avoids allocating a separate output
    /// buffer, which matters on the batch hot path.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::AeadFailure`] on an internal AEAD error
    /// (not expected with a valid key and nonce).
    pub fn seal_in_place_detached(
        &self,
        nonce: &[u8],
        aad: &[u8],
        buffer: &mut [u8],
    ) -> Result<[u8; TAG_LEN], CipherError> {
        debug_assert_eq!(nonce.len(), NONCE_LEN);
        let nonce = Nonce::from_slice(nonce);
        let tag = match self {
            AeadCipher::Aes128(cipher) => cipher.encrypt_in_place_detached(nonce, aad, buffer),
            AeadCipher::Aes192(cipher) => cipher.encrypt_in_place_detached(nonce, aad, buffer),
            AeadCipher::Aes256(cipher) => cipher.encrypt_in_place_detached(nonce, aad, buffer),
        }
        .map_err(|_| CipherError::AeadFailure)?;
        Ok(tag.into())
    }

    /// Open a sealed record and return the plaintext.
    ///
    /// Decryption is not a production feature of this engine; it exists so
    /// rotation jobs and tests can confirm that a sealed batch is readable
    /// under the new key before the old one is retired.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::AeadFailure`] if authentication fails —
    /// wrong key, wrong associated data, or tampered ciphertext.
    pub fn open(&self, sealed: &SealedCard, aad: &[u8]) -> Result<Vec<u8>, CipherError> {
        let nonce = Nonce::from_slice(&sealed.nonce);
        let payload = Payload {
            msg: &sealed.ciphertext,
            aad,
        };
        match self {
            AeadCipher::Aes128(cipher) => cipher.decrypt(nonce, payload),
            AeadCipher::Aes192(cipher) => cipher.decrypt(nonce, payload),
            AeadCipher::Aes256(cipher) => cipher.decrypt(nonce, payload),
        }
        .map_err(|_| CipherError::AeadFailure)
    }
}

impl std::fmt::Debug for AeadCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let variant = match self {
            AeadCipher::Aes128(_) => "Aes128",
            AeadCipher::Aes192(_) => "Aes192",
            AeadCipher::Aes256(_) => "Aes256",
        };
        // Key schedules stay out of debug output.
        write!(f, "AeadCipher::{variant}")
    }
}

/// A parsed sealed record.
///
/// The external string representation is lowercase hex of
/// `nonce ‖ ciphertext ‖ tag`. Parsing is only needed on the verification
/// path; the sealing hot path encodes straight from a scratch buffer
/// without building this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedCard {
    /// Raw nonce bytes.
    pub nonce: [u8; NONCE_LEN],
    /// Raw ciphertext + authentication tag bytes.
    pub ciphertext: Vec<u8>,
}

impl SealedCard {
    /// Parse the hex string representation produced by the engine.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidFormat`] if `s` is not valid hex or
    /// decodes to fewer than nonce + tag bytes.
    pub fn from_hex(s: &str) -> Result<Self, CipherError> {
        let raw = hex::decode(s).map_err(|_| CipherError::InvalidFormat)?;
        if raw.len() < NONCE_LEN + TAG_LEN {
            return Err(CipherError::InvalidFormat);
        }
        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(&raw[..NONCE_LEN]);
        Ok(Self {
            nonce,
            ciphertext: raw[NONCE_LEN..].to_vec(),
        })
    }

    /// Encode back to the canonical hex string.
    pub fn to_hex(&self) -> String {
        let mut raw = Vec::with_capacity(NONCE_LEN + self.ciphertext.len());
        raw.extend_from_slice(&self.nonce);
        raw.extend_from_slice(&self.ciphertext);
        hex::encode(raw)
    }
}
