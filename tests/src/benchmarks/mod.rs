//! # Notary-Ledger Benchmarks
//!
//! Performance benchmarks per subsystem. Registered from
//! `benches/notary_benchmarks.rs`.

pub mod nl_01_box_ledger;
pub mod nl_02_instrument_extraction;
