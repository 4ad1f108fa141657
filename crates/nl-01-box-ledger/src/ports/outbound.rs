//! # Outbound Ports (Driven Ports)
//!
//! Capabilities a ledger consumes but does not implement.

use shared_types::{BoxType, IdentityId, NotaryId, TransactionNumber};

/// Persistent store of full-form box receipts.
///
/// Keyed by (owner, box type, transaction number). Implementations may block
/// on disk or network I/O. Any failure, including I/O errors, is reported as
/// `None`; the ledger treats undecodable bytes the same way.
pub trait BoxReceiptStore: Send + Sync {
    /// Load the serialized full receipt.
    fn load(
        &self,
        owner: &IdentityId,
        box_type: BoxType,
        number: TransactionNumber,
    ) -> Option<Vec<u8>>;
}

/// Issuer of single-use transaction numbers.
///
/// The ledger only reads from it to check where a number came from; issuing
/// and retiring numbers belong to the workflow layer.
pub trait NumberAuthority: Send + Sync {
    /// Whether `notary` issued `number` to `identity`.
    fn is_issued(&self, notary: &NotaryId, identity: &IdentityId, number: TransactionNumber)
        -> bool;
}

/// Checks a notary countersignature over a canonical receipt body.
pub trait ReceiptVerifier: Send + Sync {
    /// Whether `signature` is `notary`'s signature over `body`.
    fn verify(&self, notary: &NotaryId, body: &[u8], signature: &[u8]) -> bool;
}
