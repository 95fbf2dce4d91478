//! Public key recovery.
//!
//! The pipeline runs in a fixed order and stops at the first failure:
//! decode `(v, r, s)` -> Keccak-256 of the message -> curve recovery -> serialize.
use crate::{
    context::RecoveryContext,
    hash::{hash_from_digest, hash_message},
    signature::SignatureScalar,
    CompactSignature, PublicKey, RecoveryError,
};
use alloy_primitives::B256;
use core::fmt;
use secp256k1::{Message, Secp256k1, Verification, VerifyOnly};

/// Recovers public keys against a secp256k1 context it owns or borrows.
///
/// Reusing one recoverer (or one borrowed context) across calls avoids rebuilding the
/// context tables for every signature.
pub struct Recoverer<'a, C: Verification = VerifyOnly> {
    ctx: RecoveryContext<'a, C>,
}

impl<C: Verification> Default for Recoverer<'static, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Verification> fmt::Debug for Recoverer<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recoverer").field("ctx", &self.ctx).finish()
    }
}

impl<C: Verification> Recoverer<'static, C> {
    /// Creates a recoverer with a freshly allocated context, destroyed on drop.
    pub fn new() -> Self {
        Self {
            ctx: RecoveryContext::owned(),
        }
    }
}

#[cfg(feature = "global-context")]
impl Recoverer<'static, secp256k1::All> {
    /// Creates a recoverer backed by the library's static context.
    pub fn global() -> Self {
        Self::with_context(secp256k1::SECP256K1)
    }
}

impl<'a, C: Verification> Recoverer<'a, C> {
    /// Creates a recoverer that borrows `ctx`. The caller remains responsible for it.
    pub fn with_context(ctx: &'a Secp256k1<C>) -> Self {
        Self {
            ctx: RecoveryContext::borrowed(ctx),
        }
    }

    /// Borrows `ctx` if given, otherwise allocates an owned context.
    pub fn from_option(ctx: Option<&'a Secp256k1<C>>) -> Self {
        Self {
            ctx: RecoveryContext::from_option(ctx),
        }
    }

    /// Returns the context this recoverer runs against.
    #[inline]
    pub fn context(&self) -> &RecoveryContext<'a, C> {
        &self.ctx
    }

    /// Consumes the recoverer and returns its context.
    pub fn into_context(self) -> RecoveryContext<'a, C> {
        self.ctx
    }

    /// Recovers the public key that produced `(v, r, s)` over the Keccak-256 hash of
    /// `message`.
    ///
    /// `v` is the raw recovery id (`0..=3`), it is not adjusted for legacy `27`/`28`
    /// or EIP-155 encodings.
    pub fn recover(
        &self,
        message: &[u8],
        v: impl SignatureScalar,
        r: impl SignatureScalar,
        s: impl SignatureScalar,
    ) -> Result<PublicKey, RecoveryError> {
        let signature = CompactSignature::from_parts(v, r, s)?;
        let hash = hash_message(message);
        self.recover_prehash(&hash, &signature)
    }

    /// Recovers the public key from a digest computed by an external hasher.
    ///
    /// Fails with [`RecoveryError::InternalError`] if `digest` is not 32 bytes long.
    pub fn recover_digest(
        &self,
        digest: &[u8],
        signature: &CompactSignature,
    ) -> Result<PublicKey, RecoveryError> {
        let hash = hash_from_digest(digest)?;
        self.recover_prehash(&hash, signature)
    }

    /// Recovers the public key from a signature over an already computed hash.
    pub fn recover_prehash(
        &self,
        hash: &B256,
        signature: &CompactSignature,
    ) -> Result<PublicKey, RecoveryError> {
        let signature = signature.parse()?;
        let msg = Message::from_digest(hash.0);
        let key = self.ctx.recover_ecdsa(&msg, &signature).map_err(|err| {
            tracing::trace!(%hash, %err, "public key recovery failed");
            RecoveryError::SignatureMalformed
        })?;
        PublicKey::from_library_key(&key)
    }
}

/// Recovers the public key that signed `message` with `(v, r, s)`.
///
/// When `ctx` is `None` a context is allocated and destroyed before returning,
/// otherwise the caller's context is used and left alive.
///
/// # Errors
///
/// * [`RecoveryError::SignatureMalformed`] if `r` or `s` has more than 32
///   significant bytes, `v` exceeds `i32::MAX`, the library rejects the compact
///   signature or no key can be recovered from it.
/// * [`RecoveryError::InternalError`] if the recovered point cannot be serialized.
pub fn recover_public_key<C: Verification>(
    message: &[u8],
    v: impl SignatureScalar,
    r: impl SignatureScalar,
    s: impl SignatureScalar,
    ctx: Option<&Secp256k1<C>>,
) -> Result<PublicKey, RecoveryError> {
    Recoverer::from_option(ctx).recover(message, v, r, s)
}
