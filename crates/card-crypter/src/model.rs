//! Card record model shared by the engine and its callers.

use thiserror::Error;

/// Byte length of a card number (16 ASCII digits).
pub const PAN_LEN: usize = 16;

/// Errors produced when constructing a [`CardNumber`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardNumberError {
    /// The input is not exactly [`PAN_LEN`] bytes long.
    #[error("invalid card number length: expected {PAN_LEN} digits, got {0}")]
    InvalidLength(usize),

    /// The input contains a byte outside `'0'..='9'`.
    #[error("card number must contain ASCII digits only")]
    InvalidDigit,
}

/// A fixed-size card number: exactly [`PAN_LEN`] ASCII digit bytes.
///
/// Value type — copied, not referenced, when handed to workers, so the
/// engine never aliases a caller's buffer. When printed, the digits are
/// redacted; plaintext card numbers must never reach logs or panics.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CardNumber([u8; PAN_LEN]);

impl CardNumber {
    /// Borrow the raw digit bytes.
    pub fn as_bytes(&self) -> &[u8; PAN_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for CardNumber {
    type Error = CardNumberError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != PAN_LEN {
            return Err(CardNumberError::InvalidLength(bytes.len()));
        }
        if !bytes.iter().all(u8::is_ascii_digit) {
            return Err(CardNumberError::InvalidDigit);
        }
        let mut digits = [0u8; PAN_LEN];
        digits.copy_from_slice(bytes);
        Ok(Self(digits))
    }
}

impl std::str::FromStr for CardNumber {
    type Err = CardNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.as_bytes())
    }
}

impl std::fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print card numbers — not even in debug builds.
        f.write_str("CardNumber([REDACTED])")
    }
}

/// A card record: an opaque external identifier paired with the number.
///
/// The identifier is authenticated as associated data on every seal but
/// never encrypted, so a sealed record cannot be silently re-associated
/// with a different identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// External identifier, bound into the ciphertext as associated data.
    pub id: String,
    /// The plaintext card number.
    pub number: CardNumber,
}

impl Card {
    /// Create a card record.
    pub fn new(id: impl Into<String>, number: CardNumber) -> Self {
        Self {
            id: id.into(),
            number,
        }
    }
}
