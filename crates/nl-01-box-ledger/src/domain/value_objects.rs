//! # Value Objects
//!
//! Box addressing and ledger configuration.

use serde::{Deserialize, Serialize};
use shared_types::{BoxType, IdentityId, NotaryId};

/// Identifies one box: a notary, the box owner and the box type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoxAddress {
    /// Notary hosting the box.
    pub notary: NotaryId,
    /// Identity (or account holder) owning the box.
    pub owner: IdentityId,
    /// Box type.
    pub box_type: BoxType,
}

impl BoxAddress {
    /// Create a box address.
    pub fn new(notary: NotaryId, owner: IdentityId, box_type: BoxType) -> Self {
        Self {
            notary,
            owner,
            box_type,
        }
    }
}

impl std::fmt::Display for BoxAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.notary, self.owner, self.box_type)
    }
}

/// Configuration for a ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Maximum number of records in one box (default: 10,000).
    pub max_records: usize,

    /// Largest box receipt accepted from the store (default: 4 MiB).
    ///
    /// Larger payloads are treated as a decode failure.
    pub max_receipt_bytes: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            max_records: 10_000,
            max_receipt_bytes: 4 * 1024 * 1024,
        }
    }
}

impl LedgerConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of records.
    pub fn with_max_records(mut self, max: usize) -> Self {
        self.max_records = max;
        self
    }

    /// Set the maximum accepted box receipt size.
    pub fn with_max_receipt_bytes(mut self, max: usize) -> Self {
        self.max_receipt_bytes = max;
        self
    }
}
