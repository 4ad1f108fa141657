//! # Messages
//!
//! The peer message embedded as the reference of an encrypted notice. Its
//! payload is ciphertext sealed to the recipient.

use serde::{Deserialize, Serialize};
use shared_types::IdentityId;

/// Hex-armored ciphertext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArmoredPayload(String);

impl ArmoredPayload {
    /// Armor raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(hex::encode(bytes))
    }

    /// Wrap an already-armored string without checking it.
    pub fn from_armored(armored: impl Into<String>) -> Self {
        Self(armored.into())
    }

    /// Remove the armor.
    pub fn decode(&self) -> Result<Vec<u8>, hex::FromHexError> {
        hex::decode(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A message from one identity to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: IdentityId,
    pub recipient: IdentityId,
    pub payload: ArmoredPayload,
}

impl Message {
    pub fn new(sender: IdentityId, recipient: IdentityId, payload: ArmoredPayload) -> Self {
        Self {
            sender,
            recipient,
            payload,
        }
    }
}
