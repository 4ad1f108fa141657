//! # Adapters Layer
//!
//! Implementations of the outbound ports.
//!
//! - `InMemoryBoxReceiptStore`: receipts held in memory, counts loads
//! - `FileBoxReceiptStore`: one JSON file per receipt under a root directory
//! - `IssuedNumberRegistry`: in-memory number authority
//! - `NotarySignatureVerifier`: Ed25519 countersignature checks
//! - `AcceptAnySignature`: verifier for tests and trusted local stores

pub mod file_store;
pub mod memory_store;
pub mod number_registry;
pub mod receipt_verifier;

pub use file_store::FileBoxReceiptStore;
pub use memory_store::InMemoryBoxReceiptStore;
pub use number_registry::IssuedNumberRegistry;
pub use receipt_verifier::{AcceptAnySignature, NotarySignatureVerifier};
