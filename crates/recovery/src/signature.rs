//! Decoding of `(v, r, s)` into the compact recoverable signature layout.
//!
//! Layout handed to the curve library:
//! [32 bytes for r][32 bytes for s] plus the recovery id `v` as an `i32`.
use crate::{
    constants::{MAX_RECOVERY_ID, SCALAR_LENGTH, SIGNATURE_LENGTH},
    utilities::{be_bytes_to_u32, left_pad, trim_leading_zeros},
    RecoveryError,
};
use alloy_primitives::{FixedBytes, Uint, B256};
use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use std::{borrow::Cow, vec::Vec};

/// An unsigned integer that can be used as a signature component.
///
/// Implementors expose their value as a big-endian byte string. Leading zero
/// bytes are allowed and ignored by the decoder, so a value of any width is
/// accepted as long as its significant bytes fit.
pub trait SignatureScalar {
    /// Big-endian encoding of the value, possibly with leading zero bytes.
    fn be_bytes(&self) -> Cow<'_, [u8]>;
}

impl<const BITS: usize, const LIMBS: usize> SignatureScalar for Uint<BITS, LIMBS> {
    fn be_bytes(&self) -> Cow<'_, [u8]> {
        // limbs are little-endian u64 words
        let bytes: Vec<u8> = self
            .as_limbs()
            .iter()
            .rev()
            .flat_map(|limb| limb.to_be_bytes())
            .collect();
        Cow::Owned(bytes)
    }
}

impl<const N: usize> SignatureScalar for FixedBytes<N> {
    fn be_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl SignatureScalar for [u8] {
    fn be_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }
}

impl<const N: usize> SignatureScalar for [u8; N] {
    fn be_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl SignatureScalar for Vec<u8> {
    fn be_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<T: SignatureScalar + ?Sized> SignatureScalar for &T {
    fn be_bytes(&self) -> Cow<'_, [u8]> {
        (**self).be_bytes()
    }
}

macro_rules! impl_scalar_for_uint {
    ($($t:ty),*) => {
        $(
            impl SignatureScalar for $t {
                fn be_bytes(&self) -> Cow<'_, [u8]> {
                    Cow::Owned(self.to_be_bytes().to_vec())
                }
            }
        )*
    };
}

impl_scalar_for_uint!(u8, u16, u32, u64, u128, usize);

/// A signature in the curve library's compact recoverable layout, not yet parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CompactSignature {
    /// `r ‖ s`, each left-padded to 32 bytes.
    bytes: [u8; SIGNATURE_LENGTH],
    /// Recovery id, selects one of the candidate points.
    recovery_id: i32,
}

impl CompactSignature {
    /// Normalizes `(v, r, s)` into the compact layout.
    ///
    /// Fails with [`RecoveryError::SignatureMalformed`] if `r` or `s` has more than
    /// 32 significant bytes, or if `v` is larger than `i32::MAX`.
    pub fn from_parts(
        v: impl SignatureScalar,
        r: impl SignatureScalar,
        s: impl SignatureScalar,
    ) -> Result<Self, RecoveryError> {
        let (r_bytes, s_bytes) = (r.be_bytes(), s.be_bytes());
        let r = trim_leading_zeros(&r_bytes);
        let s = trim_leading_zeros(&s_bytes);
        if r.len() > SCALAR_LENGTH || s.len() > SCALAR_LENGTH {
            tracing::trace!(
                r_len = r.len(),
                s_len = s.len(),
                "signature scalar exceeds 32 bytes"
            );
            return Err(RecoveryError::SignatureMalformed);
        }

        let recovery_id = be_bytes_to_u32(&v.be_bytes())
            .filter(|&v| v <= MAX_RECOVERY_ID)
            .ok_or_else(|| {
                tracing::trace!("recovery id does not fit in i32");
                RecoveryError::SignatureMalformed
            })?;

        let mut bytes = [0u8; SIGNATURE_LENGTH];
        for (dst, src) in bytes.chunks_exact_mut(SCALAR_LENGTH).zip([r, s]) {
            let padded =
                left_pad::<SCALAR_LENGTH>(src).ok_or(RecoveryError::SignatureMalformed)?;
            dst.copy_from_slice(padded.as_slice());
        }

        Ok(Self {
            bytes,
            recovery_id: recovery_id as i32,
        })
    }

    /// Builds a compact signature from an already laid out `r ‖ s` buffer.
    pub const fn from_compact(bytes: [u8; SIGNATURE_LENGTH], recovery_id: i32) -> Self {
        Self { bytes, recovery_id }
    }

    /// The `r ‖ s` buffer.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.bytes
    }

    /// The left-padded `r` component.
    #[inline]
    pub fn r(&self) -> B256 {
        B256::from_slice(&self.bytes[..SCALAR_LENGTH])
    }

    /// The left-padded `s` component.
    #[inline]
    pub fn s(&self) -> B256 {
        B256::from_slice(&self.bytes[SCALAR_LENGTH..])
    }

    /// The recovery id `v`.
    #[inline]
    pub const fn recovery_id(&self) -> i32 {
        self.recovery_id
    }

    /// Parses the compact layout into the library's recoverable signature.
    ///
    /// Fails with [`RecoveryError::SignatureMalformed`] if the recovery id is not in
    /// `0..=3` or if `r` or `s` is not below the curve order.
    pub fn parse(&self) -> Result<RecoverableSignature, RecoveryError> {
        let recid = RecoveryId::from_i32(self.recovery_id).map_err(|err| {
            tracing::trace!(recovery_id = self.recovery_id, %err, "invalid recovery id");
            RecoveryError::SignatureMalformed
        })?;
        RecoverableSignature::from_compact(&self.bytes, recid).map_err(|err| {
            tracing::trace!(%err, "library rejected compact signature");
            RecoveryError::SignatureMalformed
        })
    }
}
