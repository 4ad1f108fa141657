//! # Ledger
//!
//! An ordered box of transaction records for one (notary, owner, box type).
//!
//! ## Promotion
//!
//! Records usually arrive abbreviated. `resolve` promotes a record on demand:
//!
//! ```text
//! Abbreviated ──load ok, digest ok, signature ok──→ Full
//!      ↑                                               │
//!      └────────── any failure (record untouched) ─────┘ (self-loop)
//! ```
//!
//! There is no transition back from `Full`.
//!
//! ## Concurrency
//!
//! Each record sits in its own mutex-guarded slot. The promotion critical
//! section (load, decode, verify, replace) runs under that slot's lock, so
//! concurrent resolves of one number trigger at most one store load and all
//! observe the same full record. Different numbers never contend beyond a
//! short read lock on the slot map.

use crate::domain::{
    invariant_promotion_matches, invariant_record_matches_body, invariant_same_box,
    invariant_valid_number, AbbreviatedReceipt,
    BoxAddress, BoxReceipt, FullReceipt, FullRecord, LedgerConfig, LedgerError, PromotionFailure,
    RecordForm, ResolveError, TransactionRecord,
};
use crate::ports::{BoxLedgerApi, BoxReceiptStore, NumberAuthority, ReceiptVerifier};
use parking_lot::{Mutex, RwLock};
use shared_types::{short_hash, BoxType, IdentityId, NotaryId, TransactionNumber};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

type Slot = Arc<Mutex<TransactionRecord>>;

/// A box of receipts with promotion-on-demand.
pub struct Ledger {
    address: BoxAddress,
    config: LedgerConfig,
    store: Arc<dyn BoxReceiptStore>,
    verifier: Arc<dyn ReceiptVerifier>,
    /// Ascending by number; defines index order.
    records: RwLock<BTreeMap<TransactionNumber, Slot>>,
}

impl Ledger {
    /// Create an empty ledger backed by `store` and `verifier`.
    pub fn new(
        notary: NotaryId,
        owner: IdentityId,
        box_type: BoxType,
        store: Arc<dyn BoxReceiptStore>,
        verifier: Arc<dyn ReceiptVerifier>,
    ) -> Self {
        Self {
            address: BoxAddress::new(notary, owner, box_type),
            config: LedgerConfig::default(),
            store,
            verifier,
            records: RwLock::new(BTreeMap::new()),
        }
    }

    /// Replace the default configuration.
    pub fn with_config(mut self, config: LedgerConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Add a record posted by the protocol layer.
    ///
    /// The number must be `>= 1`, unique in this box, and recognised by
    /// `authority` as issued to `record.issued_to`. Full records must name
    /// this box, match the record's number and kind, and carry a signature
    /// the verifier accepts.
    pub fn insert(
        &self,
        record: TransactionRecord,
        authority: &dyn NumberAuthority,
    ) -> Result<(), LedgerError> {
        let number = record.number;
        if !invariant_valid_number(number) {
            return Err(LedgerError::InvalidNumber(number));
        }
        if let RecordForm::Full(receipt) = &record.form {
            invariant_same_box(&self.address, receipt)
                .and_then(|_| invariant_record_matches_body(number, record.kind, receipt))
                .map_err(|field| LedgerError::ForeignReceipt { number, field })?;
            self.check_signature(receipt)
                .map_err(|reason| LedgerError::UnverifiedReceipt { number, reason })?;
        }
        if !authority.is_issued(&self.address.notary, &record.issued_to, number) {
            return Err(LedgerError::UnissuedNumber {
                number,
                identity: record.issued_to.clone(),
            });
        }

        let mut records = self.records.write();
        if records.contains_key(&number) {
            return Err(LedgerError::DuplicateNumber(number));
        }
        if records.len() >= self.config.max_records {
            return Err(LedgerError::CapacityExceeded {
                max: self.config.max_records,
            });
        }

        debug!(
            box_addr = %self.address,
            number = number.value(),
            kind = %record.kind,
            abbreviated = record.is_abbreviated(),
            "[nl-01] Receipt added"
        );
        records.insert(number, Arc::new(Mutex::new(record)));
        Ok(())
    }

    /// Return the full form of `number`, promoting it if needed.
    pub fn resolve(&self, number: TransactionNumber) -> Result<FullRecord, ResolveError> {
        if !invariant_valid_number(number) {
            return Err(ResolveError::InvalidNumber(number));
        }
        let slot = self.slot(number).ok_or(ResolveError::NotFound(number))?;

        let mut record = slot.lock();
        let summary = match &record.form {
            RecordForm::Full(_) => {
                // Already promoted: no I/O.
                return record.as_full().ok_or(ResolveError::NotFound(number));
            }
            RecordForm::Abbreviated(summary) => summary.clone(),
        };

        match self.promote(&record, &summary) {
            Ok(receipt) => {
                record.form = RecordForm::Full(Arc::new(receipt));
                info!(
                    box_addr = %self.address,
                    number = number.value(),
                    kind = %record.kind,
                    digest = %short_hash(&summary.receipt_hash),
                    "[nl-01] Receipt promoted to full form"
                );
                record.as_full().ok_or(ResolveError::NotFound(number))
            }
            Err(reason) => {
                warn!(
                    box_addr = %self.address,
                    number = number.value(),
                    reason = %reason,
                    digest = %short_hash(&summary.receipt_hash),
                    "[nl-01] Receipt left abbreviated"
                );
                Err(ResolveError::ReceiptUnavailable { number, reason })
            }
        }
    }

    /// Load and validate the full form of an abbreviated record.
    ///
    /// Runs under the record's slot lock. Never touches the stored record.
    fn promote(
        &self,
        record: &TransactionRecord,
        summary: &AbbreviatedReceipt,
    ) -> Result<FullReceipt, PromotionFailure> {
        let bytes = self
            .store
            .load(&self.address.owner, self.address.box_type, record.number)
            .ok_or(PromotionFailure::StoreMiss)?;

        if bytes.len() > self.config.max_receipt_bytes {
            return Err(PromotionFailure::Decode(format!(
                "box receipt is {} bytes (max {})",
                bytes.len(),
                self.config.max_receipt_bytes
            )));
        }

        let receipt = BoxReceipt::decode(&bytes)?;
        invariant_promotion_matches(&self.address, record.number, record.kind, summary, &receipt)?;
        self.check_signature(&receipt)?;
        Ok(receipt)
    }

    fn check_signature(&self, receipt: &FullReceipt) -> Result<(), PromotionFailure> {
        if receipt.signature.is_empty() {
            return Err(PromotionFailure::MissingSignature);
        }
        if !self.verifier.verify(
            &self.address.notary,
            &receipt.body.canonical_bytes(),
            &receipt.signature,
        ) {
            return Err(PromotionFailure::BadSignature);
        }
        Ok(())
    }

    fn slot(&self, number: TransactionNumber) -> Option<Slot> {
        self.records.read().get(&number).cloned()
    }

    /// Number at position `index` in ascending order.
    pub fn get_by_index(&self, index: usize) -> Option<TransactionNumber> {
        self.records.read().keys().nth(index).copied()
    }

    /// Snapshot of the record with this number.
    pub fn get_by_number(&self, number: TransactionNumber) -> Option<TransactionRecord> {
        self.slot(number).map(|slot| slot.lock().clone())
    }

    /// All numbers in ascending order.
    pub fn numbers(&self) -> Vec<TransactionNumber> {
        self.records.read().keys().copied().collect()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the box is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Number of records still abbreviated.
    pub fn abbreviated_count(&self) -> usize {
        self.slots()
            .iter()
            .filter(|slot| slot.lock().is_abbreviated())
            .count()
    }

    /// Number of records in full form.
    pub fn full_count(&self) -> usize {
        self.slots()
            .iter()
            .filter(|slot| !slot.lock().is_abbreviated())
            .count()
    }

    fn slots(&self) -> Vec<Slot> {
        self.records.read().values().cloned().collect()
    }
}

impl BoxLedgerApi for Ledger {
    fn address(&self) -> &BoxAddress {
        &self.address
    }

    fn resolve(&self, number: TransactionNumber) -> Result<FullRecord, ResolveError> {
        Ledger::resolve(self, number)
    }

    fn get_by_index(&self, index: usize) -> Option<TransactionNumber> {
        Ledger::get_by_index(self, index)
    }

    fn get_by_number(&self, number: TransactionNumber) -> Option<TransactionRecord> {
        Ledger::get_by_number(self, number)
    }

    fn numbers(&self) -> Vec<TransactionNumber> {
        Ledger::numbers(self)
    }

    fn len(&self) -> usize {
        Ledger::len(self)
    }
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger")
            .field("address", &self.address)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
