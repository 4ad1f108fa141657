//! # Shared Types Crate
//!
//! Identifiers shared by every Notary-Ledger crate.
//!
//! ## Design Principles
//!
//! - **Opaque Identifiers**: identities, notaries and instrument definitions are
//!   exchanged with the protocol layer as stable strings; this crate only
//!   checks that they are well formed.
//! - **Scarce Numbers**: a `TransactionNumber` is always issued by a notary.
//!   Nothing in this workspace creates one out of thin air; zero is reserved
//!   as "no number".

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
