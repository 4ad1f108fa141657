use crate::ports::NumberAuthority;
use parking_lot::RwLock;
use shared_types::{IdentityId, NotaryId, TransactionNumber};
use std::collections::{BTreeSet, HashMap};
use std::ops::RangeInclusive;

/// In-memory record of which numbers each notary issued to each identity.
#[derive(Debug, Default)]
pub struct IssuedNumberRegistry {
    issued: RwLock<HashMap<(NotaryId, IdentityId), BTreeSet<TransactionNumber>>>,
}

impl IssuedNumberRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `number` as issued. Returns false for zero or a repeat.
    pub fn issue(&self, notary: &NotaryId, identity: &IdentityId, number: TransactionNumber) -> bool {
        if !number.is_valid() {
            return false;
        }
        self.issued
            .write()
            .entry((notary.clone(), identity.clone()))
            .or_default()
            .insert(number)
    }

    /// Record every number in `range` as issued, skipping zero.
    pub fn issue_range(&self, notary: &NotaryId, identity: &IdentityId, range: RangeInclusive<u64>) {
        let mut issued = self.issued.write();
        let set = issued
            .entry((notary.clone(), identity.clone()))
            .or_default();
        set.extend(range.filter(|n| *n > 0).map(TransactionNumber));
    }

    /// Forget an issued number. Returns whether it was issued.
    pub fn retire(&self, notary: &NotaryId, identity: &IdentityId, number: TransactionNumber) -> bool {
        self.issued
            .write()
            .get_mut(&(notary.clone(), identity.clone()))
            .is_some_and(|set| set.remove(&number))
    }

    /// Numbers currently issued to `identity` by `notary`, ascending.
    pub fn issued_to(&self, notary: &NotaryId, identity: &IdentityId) -> Vec<TransactionNumber> {
        self.issued
            .read()
            .get(&(notary.clone(), identity.clone()))
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }
}

impl NumberAuthority for IssuedNumberRegistry {
    fn is_issued(&self, notary: &NotaryId, identity: &IdentityId, number: TransactionNumber) -> bool {
        self.issued
            .read()
            .get(&(notary.clone(), identity.clone()))
            .is_some_and(|set| set.contains(&number))
    }
}
