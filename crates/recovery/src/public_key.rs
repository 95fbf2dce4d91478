//! Recovered public key and its serialization.
use crate::{
    constants::{PUBKEY_RAW_LENGTH, PUBKEY_UNCOMPRESSED_TAG},
    recover::recover_public_key,
    signature::SignatureScalar,
    RecoveryError,
};
use alloy_primitives::{hex, B256, B512};
use core::fmt;
use secp256k1::{Secp256k1, Verification};
use std::string::String;

/// Uncompressed secp256k1 public key without its format tag.
///
/// Holds the 32-byte big-endian X coordinate followed by the 32-byte Y coordinate.
/// Values are only produced by a successful recovery.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PublicKey(B512);

impl PublicKey {
    /// Recovers the public key that signed `message`.
    ///
    /// Allocates a context for the duration of the call when `ctx` is `None`.
    /// See [`recover_public_key`].
    pub fn recover<C: Verification>(
        message: &[u8],
        v: impl SignatureScalar,
        r: impl SignatureScalar,
        s: impl SignatureScalar,
        ctx: Option<&Secp256k1<C>>,
    ) -> Result<Self, RecoveryError> {
        recover_public_key(message, v, r, s, ctx)
    }

    /// Serializes a library key into the 64-byte raw form.
    ///
    /// Fails with [`RecoveryError::InternalError`] if the library does not hand back
    /// an uncompressed encoding.
    pub(crate) fn from_library_key(key: &secp256k1::PublicKey) -> Result<Self, RecoveryError> {
        let serialized = key.serialize_uncompressed();
        let (tag, raw) = serialized
            .split_first()
            .ok_or(RecoveryError::InternalError)?;
        if *tag != PUBKEY_UNCOMPRESSED_TAG || raw.len() != PUBKEY_RAW_LENGTH {
            tracing::trace!(tag = *tag, len = raw.len(), "unexpected public key serialization");
            return Err(RecoveryError::InternalError);
        }
        Ok(Self(B512::from_slice(raw)))
    }

    /// Raw `X ‖ Y` bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; PUBKEY_RAW_LENGTH] {
        &self.0 .0
    }

    /// Consumes the key and returns the raw bytes.
    #[inline]
    pub const fn into_inner(self) -> B512 {
        self.0
    }

    /// X coordinate.
    #[inline]
    pub fn x(&self) -> B256 {
        B256::from_slice(&self.0[..32])
    }

    /// Y coordinate.
    #[inline]
    pub fn y(&self) -> B256 {
        B256::from_slice(&self.0[32..])
    }

    /// Returns this public key as a `0x` prefixed lowercase hex string.
    pub fn hex(&self) -> String {
        hex::encode_prefixed(self.0)
    }
}

impl AsRef<[u8]> for PublicKey {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl From<PublicKey> for B512 {
    #[inline]
    fn from(key: PublicKey) -> Self {
        key.0
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl fmt::LowerHex for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.hex())
    }
}
