//! # Domain Layer
//!
//! Receipt records, the box receipt wire format and ledger invariants.
//!
//! ## Hexagonal Architecture
//!
//! This module contains NO I/O. Box receipt storage, number issuance and
//! signature checks are reached through the `ports` module.

pub mod box_receipt;
pub mod entities;
pub mod errors;
pub mod invariants;
pub mod value_objects;

pub use box_receipt::*;
pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use value_objects::*;
