//! # Domain Errors
//!
//! Error types for box ledgers.

use shared_types::{IdentityId, TransactionNumber};
use thiserror::Error;

/// Why an abbreviated record could not be promoted.
///
/// Every variant leaves the record in abbreviated form; a later resolve may
/// succeed once the store can supply a valid receipt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromotionFailure {
    /// The store had no bytes for this receipt.
    #[error("box receipt not in store")]
    StoreMiss,

    /// Stored bytes did not decode as a box receipt.
    #[error("box receipt decode failed: {0}")]
    Decode(String),

    /// Decoded receipt belongs to a different box, number or kind.
    #[error("box receipt field mismatch: {field}")]
    Mismatch { field: &'static str },

    /// Receipt body does not hash to the abbreviated digest.
    #[error("box receipt digest does not match abbreviated record")]
    DigestMismatch,

    /// Receipt carries no countersignature.
    #[error("box receipt is unsigned")]
    MissingSignature,

    /// Countersignature rejected by the verifier.
    #[error("box receipt signature rejected")]
    BadSignature,
}

/// Errors returned by `Ledger::resolve`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Zero is never issued.
    #[error("Invalid transaction number: {0}")]
    InvalidNumber(TransactionNumber),

    /// No record with this number in the box.
    #[error("No receipt {0} in box")]
    NotFound(TransactionNumber),

    /// Record exists but only in abbreviated form.
    #[error("Receipt {number} unavailable: {reason}")]
    ReceiptUnavailable {
        number: TransactionNumber,
        reason: PromotionFailure,
    },
}

impl ResolveError {
    /// Transaction number the failed resolve was for.
    pub fn number(&self) -> TransactionNumber {
        match self {
            Self::InvalidNumber(number) | Self::NotFound(number) => *number,
            Self::ReceiptUnavailable { number, .. } => *number,
        }
    }
}

/// Errors returned when adding records to a ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Zero is never issued.
    #[error("Invalid transaction number: {0}")]
    InvalidNumber(TransactionNumber),

    /// Number already present in this box.
    #[error("Duplicate transaction number: {0}")]
    DuplicateNumber(TransactionNumber),

    /// Number authority does not recognise the number for this identity.
    #[error("Transaction number {number} was never issued to {identity}")]
    UnissuedNumber {
        number: TransactionNumber,
        identity: IdentityId,
    },

    /// Full receipt names a different notary, owner or box.
    #[error("Receipt {number} belongs to another box ({field} differs)")]
    ForeignReceipt {
        number: TransactionNumber,
        field: &'static str,
    },

    /// Full receipt is unsigned or its signature is rejected.
    #[error("Receipt {number} rejected: {reason}")]
    UnverifiedReceipt {
        number: TransactionNumber,
        reason: PromotionFailure,
    },

    /// Box is full.
    #[error("Ledger capacity exceeded (max {max})")]
    CapacityExceeded { max: usize },
}

/// Errors writing to a box receipt store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure.
    #[error("I/O error: {message}")]
    IOError { message: String },

    /// Receipt could not be serialized.
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::IOError {
            message: e.to_string(),
        }
    }
}
