//! secp256k1 sizes used by the recovery pipeline.

/// Length in bytes of a single signature scalar (`r` or `s`) once left-padded.
pub const SCALAR_LENGTH: usize = 32;

/// Length in bytes of the compact signature layout (`r ‖ s`).
pub const SIGNATURE_LENGTH: usize = 2 * SCALAR_LENGTH;

/// Length in bytes of the library's uncompressed public key serialization.
pub const PUBKEY_UNCOMPRESSED_LENGTH: usize = 65;

/// Length in bytes of a raw public key (`X ‖ Y`, no format tag).
pub const PUBKEY_RAW_LENGTH: usize = PUBKEY_UNCOMPRESSED_LENGTH - 1;

/// Leading tag of an uncompressed SEC1 point encoding.
pub const PUBKEY_UNCOMPRESSED_TAG: u8 = 0x04;

/// Message hash length in bytes.
pub const MESSAGE_HASH_LENGTH: usize = 32;

/// Largest recovery id accepted by the decoder before it is handed to the library.
pub const MAX_RECOVERY_ID: u32 = i32::MAX as u32;
