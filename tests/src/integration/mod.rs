//! # Integration Tests
//!
//! Cross-crate flows: box ledger, extraction, crypto adapters and telemetry
//! working together.

pub mod flows;
