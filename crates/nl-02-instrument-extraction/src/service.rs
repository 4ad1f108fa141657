//! # Payment Instrument Extractor
//!
//! Application service that implements `InstrumentExtractionApi`.
//!
//! ## Pipeline
//!
//! ```text
//! resolve ─→ type gate ─┬─ InstrumentNotice / PayDividend
//!                       │     reference ─→ Message ─→ recipient ─→ Envelope::open ─→ parse ─→ validate
//!                       └─ Notice
//!                             reference ─→ parse ─→ validate
//! ```
//!
//! Receipts of any other kind stop at the type gate without touching the
//! envelope or either parser.

use crate::adapters::{JsonInstrumentParser, JsonMessageParser, SealedEnvelope, TracingDiagnostics};
use crate::domain::{ExtractionError, ExtractionStage, ExtractorConfig, PaymentInstrument};
use crate::ports::{DiagnosticSink, Envelope, InstrumentExtractionApi, InstrumentParser, MessageParser};
use nl_01_box_ledger::{BoxLedgerApi, FullRecord, ResolveError, TransactionKind};
use shared_types::{IdentityId, TransactionNumber};
use std::sync::Arc;
use tracing::debug;

/// Extracts payment instruments from notice receipts.
///
/// Stateless apart from its collaborators. Safe to share across threads.
pub struct PaymentInstrumentExtractor {
    envelope: Arc<dyn Envelope>,
    messages: Arc<dyn MessageParser>,
    instruments: Arc<dyn InstrumentParser>,
    diagnostics: Arc<dyn DiagnosticSink>,
    config: ExtractorConfig,
}

impl PaymentInstrumentExtractor {
    /// Create an extractor with JSON codecs and tracing diagnostics.
    pub fn new(envelope: Arc<dyn Envelope>) -> Self {
        Self {
            envelope,
            messages: Arc::new(JsonMessageParser),
            instruments: Arc::new(JsonInstrumentParser),
            diagnostics: Arc::new(TracingDiagnostics),
            config: ExtractorConfig::default(),
        }
    }

    /// Create an extractor over a keyring with default collaborators.
    pub fn with_keyring(keyring: Arc<SealedEnvelope>) -> Self {
        Self::new(keyring)
    }

    pub fn with_message_parser(mut self, parser: Arc<dyn MessageParser>) -> Self {
        self.messages = parser;
        self
    }

    pub fn with_instrument_parser(mut self, parser: Arc<dyn InstrumentParser>) -> Self {
        self.instruments = parser;
        self
    }

    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract from a record already resolved to full form.
    ///
    /// Callers must only pass instrument-bearing kinds. Other kinds trip a
    /// debug assertion and report `TypeMismatch` in release builds.
    pub fn extract_from_record(
        &self,
        owner: &IdentityId,
        record: &FullRecord,
    ) -> Result<PaymentInstrument, ExtractionError> {
        debug_assert!(
            record.kind.carries_instrument(),
            "extract_from_record called with {} receipt {}",
            record.kind,
            record.number
        );

        match record.kind {
            TransactionKind::InstrumentNotice | TransactionKind::PayDividend => {
                self.extract_encrypted(owner, record)
            }
            TransactionKind::Notice => self.extract_plain(record),
            TransactionKind::Pending
            | TransactionKind::Transfer
            | TransactionKind::ChequeReceipt
            | TransactionKind::VoucherReceipt
            | TransactionKind::MarketReceipt
            | TransactionKind::PaymentReceipt
            | TransactionKind::FinalReceipt
            | TransactionKind::BasketReceipt
            | TransactionKind::ReplyNotice
            | TransactionKind::SuccessNotice
            | TransactionKind::BlankTransaction
            | TransactionKind::Message => Err(ExtractionError::TypeMismatch {
                number: record.number,
                kind: record.kind,
            }),
        }
    }

    fn reference<'a>(&self, record: &'a FullRecord) -> Result<&'a str, ExtractionError> {
        let malformed = |detail: String| ExtractionError::MalformedReference {
            number: record.number,
            stage: ExtractionStage::Reference,
            detail,
        };

        let reference = match record.reference() {
            Some(reference) if !reference.is_empty() => reference,
            _ => return Err(malformed("no reference string".to_string())),
        };
        if reference.len() > self.config.max_reference_bytes {
            return Err(malformed(format!(
                "reference is {} bytes (max {})",
                reference.len(),
                self.config.max_reference_bytes
            )));
        }
        Ok(reference)
    }

    /// Reference is a message whose payload is sealed to `owner`.
    fn extract_encrypted(
        &self,
        owner: &IdentityId,
        record: &FullRecord,
    ) -> Result<PaymentInstrument, ExtractionError> {
        let number = record.number;
        let reference = self.reference(record)?;

        let message =
            self.messages
                .parse(reference)
                .map_err(|e| ExtractionError::MalformedReference {
                    number,
                    stage: ExtractionStage::Message,
                    detail: e.to_string(),
                })?;

        if self.config.require_recipient_match && message.recipient != *owner {
            return Err(ExtractionError::DecryptionFailed {
                number,
                stage: ExtractionStage::Recipient,
            });
        }

        let ciphertext = message
            .payload
            .decode()
            .map_err(|e| ExtractionError::MalformedReference {
                number,
                stage: ExtractionStage::Message,
                detail: format!("payload armor: {}", e),
            })?;

        let cleartext = self
            .envelope
            .open(owner, &ciphertext)
            .filter(|cleartext| !cleartext.is_empty())
            .ok_or(ExtractionError::DecryptionFailed {
                number,
                stage: ExtractionStage::Envelope,
            })?;

        debug!(
            number = number.value(),
            sender = %message.sender,
            bytes = cleartext.len(),
            "[nl-02] Envelope opened"
        );
        let instrument =
            self.instruments
                .parse(&cleartext)
                .map_err(|e| ExtractionError::InvalidInstrument {
                    number,
                    stage: ExtractionStage::Instrument,
                    detail: e.to_string(),
                })?;
        Self::validate(number, instrument)
    }

    /// Reference is the instrument's own serialization. Unparseable bodies
    /// are `MalformedReference`.
    fn extract_plain(&self, record: &FullRecord) -> Result<PaymentInstrument, ExtractionError> {
        let reference = self.reference(record)?;
        let instrument = self.instruments.parse(reference.as_bytes()).map_err(|e| {
            ExtractionError::MalformedReference {
                number: record.number,
                stage: ExtractionStage::Instrument,
                detail: e.to_string(),
            }
        })?;
        Self::validate(record.number, instrument)
    }

    fn validate(
        number: TransactionNumber,
        instrument: PaymentInstrument,
    ) -> Result<PaymentInstrument, ExtractionError> {
        if !instrument.is_structurally_valid() {
            return Err(ExtractionError::InvalidInstrument {
                number,
                stage: ExtractionStage::Validation,
                detail: format!("{} failed structural checks", instrument.type_name()),
            });
        }
        Ok(instrument)
    }

    fn report(&self, err: &ExtractionError) {
        self.diagnostics.record(err.diagnostic());
    }
}

fn resolve_failure(err: ResolveError) -> ExtractionError {
    ExtractionError::Unavailable {
        number: err.number(),
        stage: ExtractionStage::Resolve,
        detail: err.to_string(),
    }
}

impl InstrumentExtractionApi for PaymentInstrumentExtractor {
    fn try_extract(
        &self,
        owner: &IdentityId,
        ledger: &dyn BoxLedgerApi,
        number: TransactionNumber,
    ) -> Result<PaymentInstrument, ExtractionError> {
        let record = ledger.resolve(number).map_err(resolve_failure)?;

        if !record.kind.carries_instrument() {
            return Err(ExtractionError::TypeMismatch {
                number,
                kind: record.kind,
            });
        }
        self.extract_from_record(owner, &record)
    }

    fn extract(
        &self,
        owner: &IdentityId,
        ledger: &dyn BoxLedgerApi,
        number: TransactionNumber,
    ) -> Option<PaymentInstrument> {
        match self.try_extract(owner, ledger, number) {
            Ok(instrument) => {
                debug!(
                    box_addr = %ledger.address(),
                    number = number.value(),
                    instrument = instrument.type_name(),
                    "[nl-02] Instrument extracted"
                );
                Some(instrument)
            }
            Err(err) => {
                self.report(&err);
                None
            }
        }
    }

    fn extract_by_index(
        &self,
        owner: &IdentityId,
        ledger: &dyn BoxLedgerApi,
        index: usize,
    ) -> Option<PaymentInstrument> {
        match ledger.get_by_index(index) {
            Some(number) => self.extract(owner, ledger, number),
            None => {
                self.report(&ExtractionError::Unavailable {
                    number: TransactionNumber::default(),
                    stage: ExtractionStage::Index,
                    detail: format!("index {} out of range (len {})", index, ledger.len()),
                });
                None
            }
        }
    }

    fn extract_all(
        &self,
        owner: &IdentityId,
        ledger: &dyn BoxLedgerApi,
    ) -> Vec<(TransactionNumber, PaymentInstrument)> {
        let mut found = Vec::new();
        for number in ledger.numbers() {
            // Kind is known without promotion; non-bearing receipts are never loaded.
            let carries = ledger
                .get_by_number(number)
                .is_some_and(|record| record.kind.carries_instrument());
            if !carries {
                continue;
            }
            match self.try_extract(owner, ledger, number) {
                Ok(instrument) => found.push((number, instrument)),
                Err(err) => self.report(&err),
            }
        }

        let skipped = ledger.len().saturating_sub(found.len());
        debug!(
            box_addr = %ledger.address(),
            found = found.len(),
            skipped,
            "[nl-02] Box scanned for instruments"
        );
        found
    }
}
