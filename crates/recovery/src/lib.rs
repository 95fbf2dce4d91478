//! # eth-pubkey-recovery
//!
//! Recovers the uncompressed secp256k1 public key of a signer from a message and
//! the `(v, r, s)` components of its ECDSA signature.
//!
//! The pipeline is linear: the signature is decoded into the compact recoverable
//! layout, the message is hashed with Keccak-256, the curve library recovers the
//! public key point and the point is serialized as 64 raw bytes (`X ‖ Y`).
//! Any failing step aborts recovery, a partial [`PublicKey`] is never produced.
//!
//! ```
//! use eth_pubkey_recovery::{recover_public_key, U256};
//! use secp256k1::VerifyOnly;
//!
//! let r = U256::from_str_radix(
//!     "650acf9d3f5f0a2c799776a1254355d5f4061762a237396a99a0e0e3fc2bcd67",
//!     16,
//! )
//! .unwrap();
//! let s = U256::from_str_radix(
//!     "29514a0dacb2e623ac4abd157cb18163ff942280db4d5caad66ddf941ba12e03",
//!     16,
//! )
//! .unwrap();
//!
//! let key = recover_public_key::<VerifyOnly>(b"hello world", 0u8, r, s, None).unwrap();
//! assert!(key.hex().starts_with("0xab16b8c7"));
//! ```
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub mod constants;
pub mod context;
pub mod error;
pub mod hash;
pub mod public_key;
pub mod recover;
pub mod signature;
pub mod utilities;

pub use context::RecoveryContext;
pub use error::RecoveryError;
pub use hash::hash_message;
pub use public_key::PublicKey;
pub use recover::{recover_public_key, Recoverer};
pub use signature::{CompactSignature, SignatureScalar};

pub use alloy_primitives::{hex, B256, B512, U256};
pub use secp256k1;
