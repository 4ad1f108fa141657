//! # Domain Errors
//!
//! Extraction failures and the diagnostics derived from them.
//!
//! None of these are fatal. `extract` turns every one of them into `None`
//! plus an `ExtractionDiagnostic`.

use nl_01_box_ledger::TransactionKind;
use serde::Serialize;
use shared_types::TransactionNumber;
use std::fmt;
use thiserror::Error;

/// Pipeline step at which extraction stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStage {
    /// Looking up a number by index.
    Index,
    /// Resolving the record to full form.
    Resolve,
    /// Checking the record kind.
    TypeGate,
    /// Reading the record's reference string.
    Reference,
    /// Parsing the reference as a message.
    Message,
    /// Checking the message is addressed to the reader.
    Recipient,
    /// Opening the envelope.
    Envelope,
    /// Parsing the instrument.
    Instrument,
    /// Structural validation of the instrument.
    Validation,
}

impl ExtractionStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Resolve => "resolve",
            Self::TypeGate => "type_gate",
            Self::Reference => "reference",
            Self::Message => "message",
            Self::Recipient => "recipient",
            Self::Envelope => "envelope",
            Self::Instrument => "instrument",
            Self::Validation => "validation",
        }
    }
}

impl fmt::Display for ExtractionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure category, independent of where it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionCategory {
    /// Number absent, or record could not be promoted. Retry may succeed.
    Unavailable,
    /// Record kind carries no instrument. Routine.
    TypeMismatch,
    /// Reference missing, oversized or unparseable.
    MalformedReference,
    /// Envelope would not open, or opened to nothing.
    DecryptionFailed,
    /// Instrument unparseable or structurally invalid.
    InvalidInstrument,
}

impl ExtractionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unavailable => "unavailable",
            Self::TypeMismatch => "type_mismatch",
            Self::MalformedReference => "malformed_reference",
            Self::DecryptionFailed => "decryption_failed",
            Self::InvalidInstrument => "invalid_instrument",
        }
    }
}

impl fmt::Display for ExtractionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why no instrument came out of a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("Receipt {number} unavailable at {stage}: {detail}")]
    Unavailable {
        number: TransactionNumber,
        stage: ExtractionStage,
        detail: String,
    },

    #[error("Receipt {number} is a {kind}, which carries no instrument")]
    TypeMismatch {
        number: TransactionNumber,
        kind: TransactionKind,
    },

    #[error("Receipt {number} has a malformed reference at {stage}: {detail}")]
    MalformedReference {
        number: TransactionNumber,
        stage: ExtractionStage,
        detail: String,
    },

    #[error("Receipt {number} could not be decrypted at {stage}")]
    DecryptionFailed {
        number: TransactionNumber,
        stage: ExtractionStage,
    },

    #[error("Receipt {number} holds an invalid instrument at {stage}: {detail}")]
    InvalidInstrument {
        number: TransactionNumber,
        stage: ExtractionStage,
        detail: String,
    },
}

impl ExtractionError {
    /// Number of the receipt. Zero when no number was known yet.
    pub fn number(&self) -> TransactionNumber {
        match self {
            Self::Unavailable { number, .. }
            | Self::TypeMismatch { number, .. }
            | Self::MalformedReference { number, .. }
            | Self::DecryptionFailed { number, .. }
            | Self::InvalidInstrument { number, .. } => *number,
        }
    }

    pub fn stage(&self) -> ExtractionStage {
        match self {
            Self::TypeMismatch { .. } => ExtractionStage::TypeGate,
            Self::Unavailable { stage, .. }
            | Self::MalformedReference { stage, .. }
            | Self::DecryptionFailed { stage, .. }
            | Self::InvalidInstrument { stage, .. } => *stage,
        }
    }

    pub fn category(&self) -> ExtractionCategory {
        match self {
            Self::Unavailable { .. } => ExtractionCategory::Unavailable,
            Self::TypeMismatch { .. } => ExtractionCategory::TypeMismatch,
            Self::MalformedReference { .. } => ExtractionCategory::MalformedReference,
            Self::DecryptionFailed { .. } => ExtractionCategory::DecryptionFailed,
            Self::InvalidInstrument { .. } => ExtractionCategory::InvalidInstrument,
        }
    }

    /// Whether a later retry could succeed without changing the inputs.
    pub fn is_retryable(&self) -> bool {
        self.category() == ExtractionCategory::Unavailable
    }

    /// Diagnostic record for this failure.
    pub fn diagnostic(&self) -> ExtractionDiagnostic {
        ExtractionDiagnostic {
            category: self.category(),
            number: self.number(),
            stage: self.stage(),
            detail: self.to_string(),
        }
    }
}

/// Observability record emitted for every failed extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionDiagnostic {
    pub category: ExtractionCategory,
    pub number: TransactionNumber,
    pub stage: ExtractionStage,
    /// Human-readable description.
    pub detail: String,
}

/// Errors from message and instrument codecs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input was empty.
    #[error("Empty input")]
    Empty,

    /// Input was not UTF-8.
    #[error("Input is not valid UTF-8")]
    Utf8,

    /// Input did not match the expected schema.
    #[error("Syntax error: {0}")]
    Syntax(String),
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        Self::Syntax(e.to_string())
    }
}
