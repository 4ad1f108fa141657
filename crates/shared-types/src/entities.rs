//! # Core Identifiers
//!
//! Stable identifiers exchanged with the protocol layer.
//!
//! ## Clusters
//!
//! - **Participants**: `IdentityId`, `NotaryId`
//! - **Instruments**: `UnitId`
//! - **Boxes**: `BoxType`, `TransactionNumber`

use crate::errors::IdentifierError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte digest (SHA-256).
pub type Hash = [u8; 32];

/// Maximum length of an opaque identifier.
pub const MAX_IDENTIFIER_LEN: usize = 128;

fn validate_identifier(raw: &str) -> Result<(), IdentifierError> {
    if raw.is_empty() {
        return Err(IdentifierError::Empty);
    }
    if raw.len() > MAX_IDENTIFIER_LEN {
        return Err(IdentifierError::TooLong {
            len: raw.len(),
            max: MAX_IDENTIFIER_LEN,
        });
    }
    // Identifiers double as path components in box receipt storage.
    if let Some(c) = raw
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(IdentifierError::InvalidCharacter(c));
    }
    Ok(())
}

macro_rules! opaque_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parse and validate an identifier.
            pub fn new(raw: impl Into<String>) -> Result<Self, IdentifierError> {
                let raw = raw.into();
                validate_identifier(&raw)?;
                Ok(Self(raw))
            }

            /// Borrow the identifier string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdentifierError;

            fn try_from(raw: String) -> Result<Self, Self::Error> {
                Self::new(raw)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdentifierError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                Self::new(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

opaque_identifier!(
    /// A cryptographic identity ("nym") participating in the protocol.
    IdentityId
);

opaque_identifier!(
    /// A notary server that countersigns receipts.
    NotaryId
);

opaque_identifier!(
    /// An instrument definition (unit of account).
    UnitId
);

/// A single-use transaction number issued by a notary.
///
/// Zero is never issued and is treated as "no number".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TransactionNumber(pub u64);

impl TransactionNumber {
    /// Smallest number a notary ever issues.
    pub const MIN: TransactionNumber = TransactionNumber(1);

    /// Whether this number could have been issued (`>= 1`).
    pub fn is_valid(&self) -> bool {
        self.0 >= Self::MIN.0
    }

    /// Raw value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for TransactionNumber {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TransactionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of box a ledger represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BoxType {
    /// Per-account inbox.
    Inbox,
    /// Per-account outbox.
    Outbox,
    /// Per-identity nymbox.
    Nymbox,
    /// Per-identity incoming payments.
    PaymentsInbox,
    /// Per-identity archive of closed receipts.
    RecordBox,
}

impl BoxType {
    /// All box types, in protocol order.
    pub const ALL: [BoxType; 5] = [
        BoxType::Inbox,
        BoxType::Outbox,
        BoxType::Nymbox,
        BoxType::PaymentsInbox,
        BoxType::RecordBox,
    ];

    /// Stable name used in storage paths and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            BoxType::Inbox => "inbox",
            BoxType::Outbox => "outbox",
            BoxType::Nymbox => "nymbox",
            BoxType::PaymentsInbox => "paymentsInbox",
            BoxType::RecordBox => "recordBox",
        }
    }

    /// Whether this box belongs to an identity rather than an account.
    pub fn is_identity_box(&self) -> bool {
        matches!(
            self,
            BoxType::Nymbox | BoxType::PaymentsInbox | BoxType::RecordBox
        )
    }
}

impl fmt::Display for BoxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Short hex prefix of a digest, for log lines.
pub fn short_hash(hash: &Hash) -> String {
    hex::encode(&hash[..4])
}
