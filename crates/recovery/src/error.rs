//! Error type returned by every stage of public key recovery.
use core::fmt;

/// Public key recovery error.
///
/// All variants are terminal: when one is returned no public key could be determined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecoveryError {
    /// The environment or the curve library misbehaved: context allocation,
    /// hash length or point serialization failed. Not caused by the input.
    InternalError,
    /// A public key could not be parsed.
    ///
    /// Not produced by signature recovery itself.
    KeyMalformed,
    /// The signature is structurally or cryptographically invalid.
    SignatureMalformed,
}

impl RecoveryError {
    /// Returns `true` if the error was caused by the signature input.
    pub fn is_signature_malformed(&self) -> bool {
        matches!(self, Self::SignatureMalformed)
    }

    /// Returns `true` if the error points at the environment rather than the input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::InternalError)
    }
}

impl core::error::Error for RecoveryError {}

impl fmt::Display for RecoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::InternalError => "internal secp256k1 error",
            Self::KeyMalformed => "malformed public key",
            Self::SignatureMalformed => "malformed signature",
        };
        f.write_str(s)
    }
}
