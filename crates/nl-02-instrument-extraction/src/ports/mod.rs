//! # Ports Layer
//!
//! Hexagonal architecture ports for instrument extraction.
//!
//! - **Driving Ports (Inbound)**: `InstrumentExtractionApi`, used by the
//!   workflow layer
//! - **Driven Ports (Outbound)**: envelope opening, message and instrument
//!   codecs, diagnostics

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
