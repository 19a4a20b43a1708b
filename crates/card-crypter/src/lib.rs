//! `card-crypter` — concurrent AES-GCM batch encryption of payment-card
//! records, built for encryption-key rotation over large card stores.
//!
//! Each record's external identifier is bound into its ciphertext as
//! associated data (authenticated, never encrypted), so a sealed record
//! cannot be silently re-associated with a different identifier. A batch
//! is sealed by a bounded set of workers — never more than the configured
//! ceiling, never more than there are records — each owning a contiguous
//! chunk of the input and a disjoint sub-slice of one preallocated output
//! buffer. Output order always matches input order.
//!
//! Every record draws its own fresh nonce from the OS CSPRNG immediately
//! before sealing; nonces are never derived, shared, or reused. The
//! external form of a sealed record is the lowercase hex encoding of
//! `nonce ‖ ciphertext ‖ tag`.
//!
//! # Sealing a batch
//!
//! ```no_run
//! use card_crypter::{BatchCrypter, Card, CardNumber, CrypterConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cards = vec![
//!     Card::new("card-1", "1234567890123456".parse::<CardNumber>()?),
//!     Card::new("card-2", "4200000000000000".parse::<CardNumber>()?),
//! ];
//!
//! let crypter = BatchCrypter::new(&CrypterConfig::from_env()?);
//! let sealed = crypter.encrypt(&cards, b"0123456789abcdef0123456789abcdef")?;
//! assert_eq!(sealed.len(), cards.len());
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod config;
pub mod crypto;
pub mod entropy;
pub mod error;
pub mod model;

pub use batch::BatchCrypter;
pub use config::CrypterConfig;
pub use crypto::cipher::{AeadCipher, SealedCard};
pub use entropy::{EntropyError, EntropySource, OsEntropy};
pub use error::EncryptError;
pub use model::{Card, CardNumber, CardNumberError};
