use crate::ports::ReceiptVerifier;
use parking_lot::RwLock;
use shared_crypto::NotaryPublicKey;
use shared_types::NotaryId;
use std::collections::HashMap;
use tracing::debug;

/// Verifies Ed25519 countersignatures against registered notary keys.
///
/// Receipts from notaries with no registered key are rejected.
#[derive(Debug, Default)]
pub struct NotarySignatureVerifier {
    keys: RwLock<HashMap<NotaryId, NotaryPublicKey>>,
}

impl NotarySignatureVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a notary's verifying key.
    pub fn register(&self, notary: NotaryId, key: NotaryPublicKey) {
        self.keys.write().insert(notary, key);
    }

    /// Builder form of `register`.
    pub fn with_notary(self, notary: NotaryId, key: NotaryPublicKey) -> Self {
        self.register(notary, key);
        self
    }
}

impl ReceiptVerifier for NotarySignatureVerifier {
    fn verify(&self, notary: &NotaryId, body: &[u8], signature: &[u8]) -> bool {
        let Some(key) = self.keys.read().get(notary).copied() else {
            debug!(notary = %notary, "[nl-01] No key registered for notary");
            return false;
        };
        match key.verify(body, signature) {
            Ok(()) => true,
            Err(e) => {
                debug!(notary = %notary, error = %e, "[nl-01] Countersignature rejected");
                false
            }
        }
    }
}

/// Accepts any non-empty signature.
///
/// For tests and for stores the caller already trusts.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAnySignature;

impl ReceiptVerifier for AcceptAnySignature {
    fn verify(&self, _notary: &NotaryId, _body: &[u8], signature: &[u8]) -> bool {
        !signature.is_empty()
    }
}
