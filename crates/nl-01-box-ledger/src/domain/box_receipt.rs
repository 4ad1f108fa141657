//! # Box Receipt Wire Format
//!
//! The serialized full form of one receipt, as kept by a `BoxReceiptStore`.
//!
//! ```json
//! { "version": 1, "body": { ... }, "signature": "<hex>" }
//! ```

use super::entities::{FullReceipt, ReceiptBody};
use super::errors::PromotionFailure;
use serde::{Deserialize, Serialize};

/// Current box receipt format version.
pub const BOX_RECEIPT_VERSION: u16 = 1;

/// Serialized full receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoxReceipt {
    /// Format version.
    pub version: u16,
    /// Signed body.
    pub body: ReceiptBody,
    /// Hex-encoded notary countersignature.
    pub signature: String,
}

impl BoxReceipt {
    /// Wrap a full receipt for storage.
    pub fn from_receipt(receipt: &FullReceipt) -> Self {
        Self {
            version: BOX_RECEIPT_VERSION,
            body: receipt.body.clone(),
            signature: hex::encode(&receipt.signature),
        }
    }

    /// Serialize a full receipt to store bytes.
    pub fn encode(receipt: &FullReceipt) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&Self::from_receipt(receipt))
    }

    /// Parse store bytes back into a full receipt.
    ///
    /// Decode failures are reported as `PromotionFailure` so that the ledger
    /// can treat them exactly like a store miss.
    pub fn decode(bytes: &[u8]) -> Result<FullReceipt, PromotionFailure> {
        let wire: BoxReceipt =
            serde_json::from_slice(bytes).map_err(|e| PromotionFailure::Decode(e.to_string()))?;

        if wire.version != BOX_RECEIPT_VERSION {
            return Err(PromotionFailure::Decode(format!(
                "unsupported box receipt version {}",
                wire.version
            )));
        }

        let signature = hex::decode(&wire.signature)
            .map_err(|e| PromotionFailure::Decode(format!("signature: {}", e)))?;
        if signature.is_empty() {
            return Err(PromotionFailure::MissingSignature);
        }

        Ok(FullReceipt::new(wire.body, signature))
    }
}
