//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Encryption failed
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Decryption failed (wrong key or tampered ciphertext)
    #[error("Decryption failed")]
    DecryptionFailed,

    /// Sealed envelope is shorter than its fixed header
    #[error("Sealed envelope truncated: {len} bytes (min {min})")]
    Truncated {
        /// Actual length in bytes
        len: usize,
        /// Minimum length in bytes
        min: usize,
    },

    /// Unknown envelope format version
    #[error("Unsupported envelope version: {0}")]
    UnsupportedVersion(u8),

    /// Invalid public key
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Invalid private key
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Invalid signature format
    #[error("Invalid signature length: expected {expected}, got {actual}")]
    InvalidSignatureLength {
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Signature verification failed
    #[error("Signature verification failed")]
    SignatureVerificationFailed,
}
