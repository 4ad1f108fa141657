//! # Domain Layer
//!
//! Payment instruments, the message that conveys them, extraction errors and
//! configuration.
//!
//! No I/O and no cryptography here. Opening envelopes and parsing wire
//! formats happen behind the `ports` module.

pub mod errors;
pub mod instrument;
pub mod message;
pub mod value_objects;

pub use errors::*;
pub use instrument::*;
pub use message::*;
pub use value_objects::*;
