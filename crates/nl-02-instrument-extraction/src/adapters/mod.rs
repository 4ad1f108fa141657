//! # Adapters Layer
//!
//! Implementations of the outbound ports.
//!
//! - `SealedEnvelope`: keyring of identity credentials over `shared-crypto`
//!   sealed envelopes
//! - `JsonMessageParser` / `JsonInstrumentParser`: JSON codecs
//! - `TracingDiagnostics` / `RecordingDiagnostics`: diagnostic sinks

pub mod diagnostics;
pub mod json_codec;
pub mod sealed_envelope;

pub use diagnostics::{RecordingDiagnostics, TracingDiagnostics};
pub use json_codec::{JsonInstrumentParser, JsonMessageParser};
pub use sealed_envelope::SealedEnvelope;
