//! # Ports Layer
//!
//! Hexagonal architecture ports for box ledgers.
//!
//! - **Driving Ports (Inbound)**: `BoxLedgerApi`, consumed by the extraction
//!   pipeline and the workflow layer
//! - **Driven Ports (Outbound)**: box receipt storage, number authority and
//!   countersignature verification

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
