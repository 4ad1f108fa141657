//! # Sealed Envelopes
//!
//! Seals a payload to one identity's public key so that only the holder of the
//! matching secret can open it. The notary relays the sealed bytes without
//! being able to read them.
//!
//! ## Format (version 1)
//!
//! ```text
//! [version: 1][ephemeral secp256k1 key: 33][nonce: 24][ciphertext + tag]
//! ```
//!
//! The content key is `SHA-256(domain || ECDH(ephemeral, recipient) ||
//! ephemeral || recipient)`; the ephemeral key is bound as associated data.

use crate::CryptoError;
use chacha20poly1305::{
    aead::{Aead, KeyInit, Payload},
    Key, XChaCha20Poly1305, XNonce,
};
use k256::ecdh::{diffie_hellman, EphemeralSecret};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{PublicKey, SecretKey};
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

/// Current envelope format version.
pub const ENVELOPE_VERSION: u8 = 1;

const PUBLIC_KEY_LEN: usize = 33;
const NONCE_LEN: usize = 24;
const TAG_LEN: usize = 16;
const KDF_DOMAIN: &[u8] = b"notary-ledger/envelope/v1";

/// Bytes added by sealing on top of the plaintext length.
pub const SEALED_OVERHEAD: usize = 1 + PUBLIC_KEY_LEN + NONCE_LEN + TAG_LEN;

/// Public half of an identity's envelope credential.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnvelopePublicKey(PublicKey);

impl EnvelopePublicKey {
    /// Parse a SEC1-encoded point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        PublicKey::from_sec1_bytes(bytes)
            .map(Self)
            .map_err(|_| CryptoError::InvalidPublicKey)
    }

    /// Compressed SEC1 encoding.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LEN] {
        let encoded = self.0.to_encoded_point(true);
        let mut out = [0u8; PUBLIC_KEY_LEN];
        out.copy_from_slice(encoded.as_bytes());
        out
    }
}

/// An identity's envelope credential. The secret scalar is zeroized on drop.
pub struct EnvelopeKeyPair {
    secret: SecretKey,
}

impl EnvelopeKeyPair {
    /// Generate a random credential.
    pub fn generate() -> Self {
        Self {
            secret: SecretKey::random(&mut rand::thread_rng()),
        }
    }

    /// Restore a credential from its 32-byte secret scalar.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, CryptoError> {
        let secret = SecretKey::from_slice(bytes).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { secret })
    }

    /// Public half, handed to senders.
    pub fn public_key(&self) -> EnvelopePublicKey {
        EnvelopePublicKey(self.secret.public_key())
    }
}

impl std::fmt::Debug for EnvelopeKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvelopeKeyPair")
            .field("public", &self.public_key())
            .finish_non_exhaustive()
    }
}

fn derive_content_key(shared: &[u8], ephemeral: &[u8], recipient: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(KDF_DOMAIN);
    hasher.update(shared);
    hasher.update(ephemeral);
    hasher.update(recipient);
    hasher.finalize().into()
}

/// Seal `plaintext` so that only `recipient` can open it.
///
/// # Errors
///
/// Returns `CryptoError::EncryptionFailed` if the AEAD rejects the input.
pub fn seal(recipient: &EnvelopePublicKey, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let mut rng = rand::thread_rng();

    let ephemeral = EphemeralSecret::random(&mut rng);
    let ephemeral_public = EnvelopePublicKey(ephemeral.public_key()).to_bytes();
    let shared = ephemeral.diffie_hellman(&recipient.0);

    let mut key = derive_content_key(
        shared.raw_secret_bytes().as_slice(),
        &ephemeral_public,
        &recipient.to_bytes(),
    );
    let cipher = XChaCha20Poly1305::new(Key::from_slice(&key));
    key.zeroize();

    let mut nonce = [0u8; NONCE_LEN];
    rand::RngCore::fill_bytes(&mut rng, &mut nonce);

    let ciphertext = cipher
        .encrypt(
            XNonce::from_slice(&nonce),
            Payload {
                msg: plaintext,
                aad: &ephemeral_public,
            },
        )
        .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

    let mut sealed = Vec::with_capacity(SEALED_OVERHEAD + plaintext.len());
    sealed.push(ENVELOPE_VERSION);
    sealed.extend_from_slice(&ephemeral_public);
    sealed.extend_from_slice(&nonce);
    sealed.extend_from_slice(&ciphertext);
    Ok(sealed)
}

/// Open an envelope sealed to `keypair`.
///
/// # Errors
///
/// - `Truncated` / `UnsupportedVersion` for malformed framing
/// - `InvalidPublicKey` if the ephemeral key is not a curve point
/// - `DecryptionFailed` for a wrong key or tampered ciphertext
pub fn open(keypair: &EnvelopeKeyPair, sealed: &[u8]) -> Result<Vec<u8>, CryptoError> {
    if sealed.len() < SEALED_OVERHEAD {
        return Err(CryptoError::Truncated {
            len: sealed.len(),
            min: SEALED_OVERHEAD,
        });
    }
    if sealed[0] != ENVELOPE_VERSION {
        return Err(CryptoError::UnsupportedVersion(sealed[0]));
    }

    let (header, ciphertext) = sealed[1..].split_at(PUBLIC_KEY_LEN + NONCE_LEN);
    let (ephemeral_bytes, nonce) = header.split_at(PUBLIC_KEY_LEN);
    let ephemeral = EnvelopePublicKey::from_bytes(ephemeral_bytes)?;

    let shared = diffie_hellman(keypair.secret.to_nonzero_scalar(), ephemeral.0.as_affine());
    let mut key = derive_content_key(
        shared.raw_secret_bytes().as_slice(),
        ephemeral_bytes,
        &keypair.public_key().to_bytes(),
    );
    let cipher = XChaCha20Poly1305::new(Key::from_slice(&key));
    key.zeroize();

    cipher
        .decrypt(
            XNonce::from_slice(nonce),
            Payload {
                msg: ciphertext,
                aad: ephemeral_bytes,
            },
        )
        .map_err(|_| CryptoError::DecryptionFailed)
}
