use crate::ports::Envelope;
use parking_lot::RwLock;
use shared_crypto::{CryptoError, EnvelopeKeyPair, EnvelopePublicKey};
use shared_types::IdentityId;
use std::collections::HashMap;
use tracing::debug;

/// Keyring of identity credentials that opens `shared-crypto` envelopes.
///
/// Holds the private credentials of the identities this process reads as.
#[derive(Debug, Default)]
pub struct SealedEnvelope {
    keys: RwLock<HashMap<IdentityId, EnvelopeKeyPair>>,
}

impl SealedEnvelope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an identity's credential. Returns its public half.
    pub fn register(&self, identity: IdentityId, keypair: EnvelopeKeyPair) -> EnvelopePublicKey {
        let public = keypair.public_key();
        self.keys.write().insert(identity, keypair);
        public
    }

    /// Generate and register a fresh credential for `identity`.
    pub fn generate_for(&self, identity: IdentityId) -> EnvelopePublicKey {
        self.register(identity, EnvelopeKeyPair::generate())
    }

    /// Public half of a registered credential.
    pub fn public_key(&self, identity: &IdentityId) -> Option<EnvelopePublicKey> {
        self.keys.read().get(identity).map(EnvelopeKeyPair::public_key)
    }

    /// Drop an identity's credential.
    pub fn forget(&self, identity: &IdentityId) -> bool {
        self.keys.write().remove(identity).is_some()
    }

    /// Seal `plaintext` to a recipient's public key.
    pub fn seal_to(recipient: &EnvelopePublicKey, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        shared_crypto::seal(recipient, plaintext)
    }
}

impl Envelope for SealedEnvelope {
    fn open(&self, identity: &IdentityId, ciphertext: &[u8]) -> Option<Vec<u8>> {
        let keys = self.keys.read();
        let Some(keypair) = keys.get(identity) else {
            debug!(identity = %identity, "[nl-02] No envelope credential for identity");
            return None;
        };
        match shared_crypto::open(keypair, ciphertext) {
            Ok(cleartext) => Some(cleartext),
            Err(e) => {
                debug!(identity = %identity, error = %e, "[nl-02] Envelope did not open");
                None
            }
        }
    }
}
