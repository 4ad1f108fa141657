//! # Test Fixtures
//!
//! A notary, a reader with envelope credentials, and a payments inbox whose
//! abbreviated records are backed by signed box receipts.

use nl_01_box_ledger::{
    BoxReceiptStore, FullReceipt, InMemoryBoxReceiptStore, IssuedNumberRegistry, Ledger,
    NotarySignatureVerifier, ReceiptBody, TransactionKind, TransactionRecord,
};
use nl_02_instrument_extraction::{
    ArmoredPayload, Cheque, JsonInstrumentParser, JsonMessageParser, Message, PaymentInstrument,
    Purse, SealedEnvelope, Token,
};
use shared_crypto::NotaryKeyPair;
use shared_types::{BoxType, IdentityId, NotaryId, TransactionNumber, UnitId};
use std::sync::Arc;

pub fn notary() -> NotaryId {
    NotaryId::new("notary-main").expect("valid notary id")
}

pub fn alice() -> IdentityId {
    IdentityId::new("alice").expect("valid identity")
}

pub fn bob() -> IdentityId {
    IdentityId::new("bob").expect("valid identity")
}

pub fn usd() -> UnitId {
    UnitId::new("usd").expect("valid unit")
}

/// Cheque from bob to alice.
pub fn cheque(amount: i64) -> PaymentInstrument {
    PaymentInstrument::Cheque(Cheque {
        notary: notary(),
        unit: usd(),
        transaction_number: TransactionNumber(10_000),
        amount,
        sender: bob(),
        recipient: Some(alice()),
        valid_from: 0,
        valid_to: 0,
        memo: String::new(),
    })
}

/// Bearer purse with one token per denomination.
pub fn purse(denominations: &[u64]) -> PaymentInstrument {
    PaymentInstrument::Purse(Purse {
        notary: notary(),
        unit: usd(),
        owner: None,
        tokens: denominations
            .iter()
            .enumerate()
            .map(|(i, d)| Token {
                series: 1,
                denomination: *d,
                body: format!("token-{}", i),
            })
            .collect(),
        valid_from: 0,
        valid_to: 0,
    })
}

/// One notary, one reader, one payments inbox.
pub struct PaymentsInbox {
    pub notary_keys: NotaryKeyPair,
    pub store: Arc<InMemoryBoxReceiptStore>,
    pub numbers: IssuedNumberRegistry,
    pub keyring: Arc<SealedEnvelope>,
    pub ledger: Arc<Ledger>,
}

impl PaymentsInbox {
    /// Empty inbox for alice with numbers `1..=issued` issued to her.
    pub fn new(issued: u64) -> Self {
        let store = Arc::new(InMemoryBoxReceiptStore::new());
        Self::with_store(issued, store.clone(), store)
    }

    /// Inbox whose ledger reads from `backing` while fixtures write to
    /// `store`. Lets tests wrap the store, e.g. to slow it down.
    pub fn with_store(
        issued: u64,
        store: Arc<InMemoryBoxReceiptStore>,
        backing: Arc<dyn BoxReceiptStore>,
    ) -> Self {
        let notary_keys = NotaryKeyPair::from_seed([0x5e; 32]);
        let numbers = IssuedNumberRegistry::new();
        numbers.issue_range(&notary(), &alice(), 1..=issued);

        let verifier =
            NotarySignatureVerifier::new().with_notary(notary(), notary_keys.public_key());
        let ledger = Arc::new(Ledger::new(
            notary(),
            alice(),
            BoxType::PaymentsInbox,
            backing,
            Arc::new(verifier),
        ));

        let keyring = Arc::new(SealedEnvelope::new());
        keyring.generate_for(alice());

        Self {
            notary_keys,
            store,
            numbers,
            keyring,
            ledger,
        }
    }

    /// Signed full receipt for this inbox.
    pub fn receipt(&self, number: u64, kind: TransactionKind, reference: Option<String>) -> FullReceipt {
        let body = ReceiptBody {
            notary: notary(),
            owner: alice(),
            box_type: BoxType::PaymentsInbox,
            number: TransactionNumber(number),
            kind,
            in_reference_to: TransactionNumber(0),
            reference,
        };
        let signature = self.notary_keys.sign(&body.canonical_bytes()).to_vec();
        FullReceipt::new(body, signature)
    }

    /// Store the full receipt and insert the abbreviated record.
    pub fn post(&self, number: u64, kind: TransactionKind, reference: Option<String>) {
        let receipt = self.receipt(number, kind, reference);
        self.store
            .put_receipt(&receipt)
            .expect("receipt encodes");
        self.ledger
            .insert(
                TransactionRecord::abbreviated(
                    receipt.body.number,
                    kind,
                    alice(),
                    receipt.abbreviate(),
                ),
                &self.numbers,
            )
            .expect("record accepted");
    }

    /// Reference string for an `InstrumentNotice` sealed to alice.
    pub fn sealed_notice(&self, instrument: &PaymentInstrument) -> String {
        let public = self.keyring.public_key(&alice()).expect("alice has a key");
        let cleartext = JsonInstrumentParser::encode(instrument).expect("instrument encodes");
        let sealed = SealedEnvelope::seal_to(&public, &cleartext).expect("seal");
        JsonMessageParser::encode(&Message::new(
            bob(),
            alice(),
            ArmoredPayload::from_bytes(&sealed),
        ))
        .expect("message encodes")
    }

    /// Reference string for a plain `Notice`.
    pub fn plain_notice(&self, instrument: &PaymentInstrument) -> String {
        JsonInstrumentParser::encode_string(instrument).expect("instrument encodes")
    }

    /// Post `count` receipts starting at `first`, cycling through an
    /// encrypted notice, a plain notice and a non-bearing receipt.
    pub fn populate(&self, first: u64, count: u64) {
        for number in first..first + count {
            match number % 3 {
                0 => self.post(
                    number,
                    TransactionKind::InstrumentNotice,
                    Some(self.sealed_notice(&cheque(number as i64))),
                ),
                1 => self.post(
                    number,
                    TransactionKind::Notice,
                    Some(self.plain_notice(&purse(&[number]))),
                ),
                _ => self.post(number, TransactionKind::ChequeReceipt, None),
            }
        }
    }
}
