use crate::domain::{BoxReceipt, FullReceipt};
use crate::ports::BoxReceiptStore;
use parking_lot::RwLock;
use shared_types::{BoxType, IdentityId, TransactionNumber};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

type StoreKey = (IdentityId, BoxType, TransactionNumber);

/// In-memory box receipt store.
///
/// Counts every `load` call so tests can assert how often a ledger hit
/// storage.
#[derive(Default)]
pub struct InMemoryBoxReceiptStore {
    receipts: RwLock<HashMap<StoreKey, Vec<u8>>>,
    loads: AtomicUsize,
}

impl InMemoryBoxReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw bytes under a key, replacing any previous value.
    pub fn put(&self, owner: &IdentityId, box_type: BoxType, number: TransactionNumber, bytes: Vec<u8>) {
        self.receipts
            .write()
            .insert((owner.clone(), box_type, number), bytes);
    }

    /// Encode and store a full receipt under its own address.
    pub fn put_receipt(&self, receipt: &FullReceipt) -> Result<(), serde_json::Error> {
        let bytes = BoxReceipt::encode(receipt)?;
        self.put(&receipt.body.owner, receipt.body.box_type, receipt.body.number, bytes);
        Ok(())
    }

    /// Remove a stored receipt. Returns whether one was present.
    pub fn remove(&self, owner: &IdentityId, box_type: BoxType, number: TransactionNumber) -> bool {
        self.receipts
            .write()
            .remove(&(owner.clone(), box_type, number))
            .is_some()
    }

    /// Number of `load` calls so far, hits and misses alike.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// Number of stored receipts.
    pub fn len(&self) -> usize {
        self.receipts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.receipts.read().is_empty()
    }
}

impl BoxReceiptStore for InMemoryBoxReceiptStore {
    fn load(
        &self,
        owner: &IdentityId,
        box_type: BoxType,
        number: TransactionNumber,
    ) -> Option<Vec<u8>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.receipts
            .read()
            .get(&(owner.clone(), box_type, number))
            .cloned()
    }
}
