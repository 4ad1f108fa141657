//! # Inbound Ports (Driving Ports)
//!
//! Extraction API exposed to the workflow layer.

use crate::domain::{ExtractionError, PaymentInstrument};
use nl_01_box_ledger::BoxLedgerApi;
use shared_types::{IdentityId, TransactionNumber};

/// Pulls payment instruments out of a box's notice receipts.
///
/// `owner` is the identity reading the box; encrypted notices are opened
/// with its credentials.
pub trait InstrumentExtractionApi: Send + Sync {
    /// Extract the instrument conveyed by receipt `number`.
    ///
    /// ## Returns
    ///
    /// - `Ok(instrument)`: structurally valid instrument
    /// - `Err(TypeMismatch)`: receipt kind carries no instrument
    /// - `Err(..)`: any other failure, with the stage it happened at
    fn try_extract(
        &self,
        owner: &IdentityId,
        ledger: &dyn BoxLedgerApi,
        number: TransactionNumber,
    ) -> Result<PaymentInstrument, ExtractionError>;

    /// `try_extract`, with failures reduced to `None` plus a diagnostic.
    fn extract(
        &self,
        owner: &IdentityId,
        ledger: &dyn BoxLedgerApi,
        number: TransactionNumber,
    ) -> Option<PaymentInstrument>;

    /// Extract from the receipt at `index` in ledger order.
    fn extract_by_index(
        &self,
        owner: &IdentityId,
        ledger: &dyn BoxLedgerApi,
        index: usize,
    ) -> Option<PaymentInstrument>;

    /// Every instrument in the box, in ledger order.
    fn extract_all(
        &self,
        owner: &IdentityId,
        ledger: &dyn BoxLedgerApi,
    ) -> Vec<(TransactionNumber, PaymentInstrument)>;
}
