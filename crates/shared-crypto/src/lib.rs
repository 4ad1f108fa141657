//! # Shared Crypto
//!
//! Concrete primitives behind the reference adapters of the ledger and
//! extraction crates. The core crates never call these directly; they consume
//! the `Envelope` and `ReceiptVerifier` ports instead.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `envelope` | secp256k1 ECDH + XChaCha20-Poly1305 | Sealing instruments to an identity |
//! | `signatures` | Ed25519 | Notary countersignatures on box receipts |
//! | `hashing` | SHA-256 | Receipt digests carried by abbreviated records |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod envelope;
pub mod errors;
pub mod hashing;
pub mod signatures;

// Re-exports
pub use envelope::{open, seal, EnvelopeKeyPair, EnvelopePublicKey, SEALED_OVERHEAD};
pub use errors::CryptoError;
pub use hashing::{receipt_digest, Digest32};
pub use signatures::{NotaryKeyPair, NotaryPublicKey, SIGNATURE_LEN};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
