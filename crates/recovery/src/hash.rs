//! Keccak-256 message hashing.
use crate::{constants::MESSAGE_HASH_LENGTH, RecoveryError};
use alloy_primitives::{keccak256, B256};

/// Computes the Keccak-256 digest the signature was produced over.
#[inline]
pub fn hash_message(message: &[u8]) -> B256 {
    keccak256(message)
}

/// Converts a digest produced elsewhere into a message hash.
///
/// Fails with [`RecoveryError::InternalError`] if the digest is not exactly
/// [`MESSAGE_HASH_LENGTH`] bytes long.
pub fn hash_from_digest(digest: &[u8]) -> Result<B256, RecoveryError> {
    if digest.len() != MESSAGE_HASH_LENGTH {
        tracing::trace!(len = digest.len(), "rejecting digest with unexpected length");
        return Err(RecoveryError::InternalError);
    }
    Ok(B256::from_slice(digest))
}
