//! Per-chunk sealing loop.

use crate::crypto::cipher::{AeadCipher, NONCE_LEN, SEALED_LEN, TAG_LEN};
use crate::entropy::EntropySource;
use crate::error::EncryptError;
use crate::model::Card;

/// Seal every card in `cards` into the matching slot of `out`.
///
/// One fixed scratch buffer is laid out as `nonce ‖ block ‖ tag` and
/// reused across the whole chunk: the nonce is drawn into the front, the
/// card number is copied into the middle and encrypted in place, and the
/// detached tag lands at the back. Hex-encoding that buffer is then the
/// single per-record allocation.
///
/// Stops at the first entropy failure — there is no point sealing further
/// records with an unreliable randomness source.
pub(crate) fn seal_chunk<E: EntropySource>(
    cipher: &AeadCipher,
    entropy: &E,
    cards: &[Card],
    out: &mut [String],
) -> Result<(), EncryptError> {
    debug_assert_eq!(cards.len(), out.len());
    let mut sealed = [0u8; SEALED_LEN];

    for (card, slot) in cards.iter().zip(out.iter_mut()) {
        let (nonce, rest) = sealed.split_at_mut(NONCE_LEN);
        let (block, tag_slot) = rest.split_at_mut(rest.len() - TAG_LEN);

        entropy.fill(nonce)?;
        block.copy_from_slice(card.number.as_bytes());
        let tag = cipher.seal_in_place_detached(nonce, card.id.as_bytes(), block)?;
        tag_slot.copy_from_slice(&tag);

        *slot = hex::encode(sealed);
    }
    Ok(())
}
