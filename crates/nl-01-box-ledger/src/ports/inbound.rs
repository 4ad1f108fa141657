//! # Inbound Ports (Driving Ports)
//!
//! Read API of a box, as consumed by the extraction pipeline.

use crate::domain::{BoxAddress, FullRecord, ResolveError, TransactionRecord};
use shared_types::TransactionNumber;

/// Read access to one box of receipts.
pub trait BoxLedgerApi: Send + Sync {
    /// Notary, owner and box type of this ledger.
    fn address(&self) -> &BoxAddress;

    /// Return the full form of a record, promoting it from storage if needed.
    ///
    /// ## Returns
    ///
    /// - `Ok(FullRecord)`: record in full form (promoted at most once)
    /// - `Err(NotFound)`: number not in this box
    /// - `Err(ReceiptUnavailable)`: record stays abbreviated
    fn resolve(&self, number: TransactionNumber) -> Result<FullRecord, ResolveError>;

    /// Number at position `index` in ledger order. Never promotes.
    fn get_by_index(&self, index: usize) -> Option<TransactionNumber>;

    /// Snapshot of the record with this number. Never promotes.
    fn get_by_number(&self, number: TransactionNumber) -> Option<TransactionRecord>;

    /// Numbers in ledger order.
    fn numbers(&self) -> Vec<TransactionNumber>;

    /// Number of records.
    fn len(&self) -> usize;

    /// Whether the box is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
