//! # Value Objects
//!
//! Extractor configuration.

use serde::{Deserialize, Serialize};

/// Configuration for `PaymentInstrumentExtractor`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Refuse to open a message addressed to someone other than the
    /// reading identity (default: true).
    pub require_recipient_match: bool,

    /// Longest reference string accepted (default: 1 MiB).
    pub max_reference_bytes: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            require_recipient_match: true,
            max_reference_bytes: 1024 * 1024,
        }
    }
}

impl ExtractorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the recipient check.
    pub fn with_recipient_match(mut self, required: bool) -> Self {
        self.require_recipient_match = required;
        self
    }

    /// Set the maximum reference length in bytes.
    pub fn with_max_reference_bytes(mut self, max: usize) -> Self {
        self.max_reference_bytes = max;
        self
    }
}
