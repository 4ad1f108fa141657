//! # Outbound Ports (Driven Ports)
//!
//! Capabilities the extractor consumes but does not implement.

use crate::domain::{ExtractionDiagnostic, Message, ParseError, PaymentInstrument};
use shared_types::IdentityId;

/// Opens ciphertext sealed to an identity.
///
/// May block on key storage. Wrong key, tampered ciphertext and missing
/// credentials all come back as `None`.
pub trait Envelope: Send + Sync {
    /// Decrypt `ciphertext` using `identity`'s private credentials.
    fn open(&self, identity: &IdentityId, ciphertext: &[u8]) -> Option<Vec<u8>>;
}

/// Parses the reference string of an encrypted notice.
pub trait MessageParser: Send + Sync {
    fn parse(&self, reference: &str) -> Result<Message, ParseError>;
}

/// Parses a payment instrument from cleartext or a notice body.
///
/// Parsing only. Structural validation is
/// `PaymentInstrument::is_structurally_valid`.
pub trait InstrumentParser: Send + Sync {
    fn parse(&self, bytes: &[u8]) -> Result<PaymentInstrument, ParseError>;
}

/// Receives one diagnostic per failed extraction.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, diagnostic: ExtractionDiagnostic);
}
