//! # Notary Signatures
//!
//! Ed25519 countersignatures over serialized box-receipt bodies.

use crate::CryptoError;
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};

/// Length of an Ed25519 signature in bytes.
pub const SIGNATURE_LEN: usize = 64;

/// A notary's verifying key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotaryPublicKey(VerifyingKey);

impl NotaryPublicKey {
    /// Create from bytes, rejecting points not on the curve.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, CryptoError> {
        VerifyingKey::from_bytes(bytes)
            .map(Self)
            .map_err(|_| CryptoError::InvalidPublicKey)
    }

    /// Raw bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// Verify a countersignature over `body`.
    ///
    /// Signatures of the wrong length are reported separately from
    /// signatures that fail verification.
    pub fn verify(&self, body: &[u8], signature: &[u8]) -> Result<(), CryptoError> {
        let bytes: [u8; SIGNATURE_LEN] =
            signature
                .try_into()
                .map_err(|_| CryptoError::InvalidSignatureLength {
                    expected: SIGNATURE_LEN,
                    actual: signature.len(),
                })?;

        self.0
            .verify(body, &Signature::from_bytes(&bytes))
            .map_err(|_| CryptoError::SignatureVerificationFailed)
    }
}

/// A notary's signing key. `SigningKey` wipes itself on drop.
pub struct NotaryKeyPair {
    signing_key: SigningKey,
}

impl NotaryKeyPair {
    /// Generate a random keypair.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut rand::thread_rng()),
        }
    }

    /// Create from a 32-byte seed.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&seed),
        }
    }

    /// Verifying half.
    pub fn public_key(&self) -> NotaryPublicKey {
        NotaryPublicKey(self.signing_key.verifying_key())
    }

    /// Countersign a receipt body (deterministic).
    pub fn sign(&self, body: &[u8]) -> [u8; SIGNATURE_LEN] {
        self.signing_key.sign(body).to_bytes()
    }
}
