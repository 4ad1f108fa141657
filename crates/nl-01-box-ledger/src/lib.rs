//! # Box Ledger Subsystem (NL-01)
//!
//! Ordered boxes of transaction receipts for one identity at one notary.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Records, box receipt format, invariants. No I/O
//! - **Ports Layer** (`ports/`): `BoxLedgerApi` inbound, storage/authority/verifier outbound
//! - **Adapters Layer** (`adapters/`): In-memory and file stores, number registry, verifiers
//! - **Ledger** (`ledger.rs`): Wires domain logic to ports
//!
//! ## Abbreviated and Full Records
//!
//! A box keeps most receipts in abbreviated form: number, kind and a digest of
//! the full receipt. The full, countersigned receipt lives in box receipt
//! storage and is loaded the first time something asks for it. Promotion is
//! one-way and happens at most once per record, even under concurrent
//! requests.
//!
//! ## Usage
//!
//! ```ignore
//! let ledger = Ledger::new(notary, alice, BoxType::PaymentsInbox, store, verifier);
//! ledger.insert(record, &numbers)?;
//! let full = ledger.resolve(TransactionNumber(7))?;
//! let reference = full.reference();
//! ```

pub mod adapters;
pub mod domain;
pub mod ledger;
pub mod ports;

// Re-export public API
pub use adapters::{
    AcceptAnySignature, FileBoxReceiptStore, InMemoryBoxReceiptStore, IssuedNumberRegistry,
    NotarySignatureVerifier,
};
pub use domain::box_receipt::{BoxReceipt, BOX_RECEIPT_VERSION};
pub use domain::entities::{
    AbbreviatedReceipt, FullReceipt, FullRecord, ReceiptBody, RecordForm, TransactionKind,
    TransactionRecord,
};
pub use domain::errors::{LedgerError, PromotionFailure, ResolveError, StoreError};
pub use domain::value_objects::{BoxAddress, LedgerConfig};
pub use ledger::Ledger;
pub use ports::inbound::BoxLedgerApi;
pub use ports::outbound::{BoxReceiptStore, NumberAuthority, ReceiptVerifier};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
