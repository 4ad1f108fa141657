//! # Instrument Extraction Subsystem (NL-02)
//!
//! Pulls cheques, vouchers, invoices and purses out of the notice receipts in
//! a box.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Instruments, messages, errors, config. No I/O
//! - **Ports Layer** (`ports/`): `InstrumentExtractionApi` inbound, envelope/codec/diagnostic outbound
//! - **Adapters Layer** (`adapters/`): Sealed-envelope keyring, JSON codecs, diagnostic sinks
//! - **Service Layer** (`service.rs`): `PaymentInstrumentExtractor`
//!
//! ## Two Paths
//!
//! | Receipt kind | Reference holds | Path |
//! |--------------|-----------------|------|
//! | `InstrumentNotice`, `PayDividend` | message sealed to the reader | decrypt, then parse |
//! | `Notice` | the instrument itself, in the clear | parse |
//! | anything else | n/a | `TypeMismatch` |
//!
//! Notary-to-identity conveyance is end-to-end encrypted so the notary never
//! reads the instrument. Notary-authored notices are public.
//!
//! ## Failure Policy
//!
//! A box routinely holds receipts unrelated to payments. `extract` returns
//! `None` for every failure and hands an `ExtractionDiagnostic` to the
//! configured `DiagnosticSink`. Use `try_extract` to get the category.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::{
    JsonInstrumentParser, JsonMessageParser, RecordingDiagnostics, SealedEnvelope,
    TracingDiagnostics,
};
pub use domain::errors::{
    ExtractionCategory, ExtractionDiagnostic, ExtractionError, ExtractionStage, ParseError,
};
pub use domain::instrument::{Cheque, PaymentInstrument, Purse, Token};
pub use domain::message::{ArmoredPayload, Message};
pub use domain::value_objects::ExtractorConfig;
pub use ports::inbound::InstrumentExtractionApi;
pub use ports::outbound::{DiagnosticSink, Envelope, InstrumentParser, MessageParser};
pub use service::PaymentInstrumentExtractor;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
