//! AES-GCM sealing primitives for card records.
//!
//! This module is intentionally free of any concurrency or batching
//! concerns. It provides the low-level seal/open operations and the
//! sealed-record representation used by the batch layer.
//!
//! # Sealed record format
//!
//! ```text
//! lowercase-hex(nonce ‖ ciphertext ‖ tag)
//! ```
//!
//! The nonce and tag lengths are fixed, so no separators or length prefix
//! are needed; a decoder splits at known offsets.

pub mod cipher;

pub use cipher::{AeadCipher, SealedCard, NONCE_LEN, TAG_LEN};
