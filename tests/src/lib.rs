//! # Notary-Ledger Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Signed receipts, sealed notices, populated boxes
//! ├── benchmarks/       # Performance tests per subsystem
//! │   ├── nl_01_box_ledger.rs
//! │   └── nl_02_instrument_extraction.rs
//! │
//! └── integration/      # Cross-subsystem flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p nl-tests
//!
//! # By category
//! cargo test -p nl-tests integration::
//!
//! # Benchmarks
//! cargo bench -p nl-tests
//! ```

pub mod benchmarks;
pub mod fixtures;
pub mod integration;
