//! # Domain Invariants
//!
//! Rules a ledger enforces on insert and on promotion.
//!
//! | Invariant | Enforced by |
//! |-----------|-------------|
//! | Numbers are `>= 1` | `invariant_valid_number` |
//! | Full receipts belong to this box | `invariant_same_box` |
//! | Record number and kind are the body's | `invariant_record_matches_body` |
//! | Promoted receipt is the abbreviated one | `invariant_promotion_matches` |

use super::entities::{AbbreviatedReceipt, FullReceipt, TransactionKind};
use super::errors::PromotionFailure;
use super::value_objects::BoxAddress;
use shared_types::TransactionNumber;

/// Invariant: zero is never issued.
pub fn invariant_valid_number(number: TransactionNumber) -> bool {
    number.is_valid()
}

/// Invariant: a full receipt names this box's notary, owner and box type.
///
/// Returns the first differing field.
pub fn invariant_same_box(address: &BoxAddress, receipt: &FullReceipt) -> Result<(), &'static str> {
    if receipt.body.notary != address.notary {
        return Err("notary");
    }
    if receipt.body.owner != address.owner {
        return Err("owner");
    }
    if receipt.body.box_type != address.box_type {
        return Err("box_type");
    }
    Ok(())
}

/// Invariant: a record's number and kind are those of its receipt body.
///
/// Returns the first differing field.
pub fn invariant_record_matches_body(
    number: TransactionNumber,
    kind: TransactionKind,
    receipt: &FullReceipt,
) -> Result<(), &'static str> {
    if receipt.body.number != number {
        return Err("number");
    }
    if receipt.body.kind != kind {
        return Err("kind");
    }
    Ok(())
}

/// Invariant: a receipt loaded from the store is the full form of the
/// abbreviated record it replaces.
///
/// Checks box, number, kind and reference link, then the body digest.
pub fn invariant_promotion_matches(
    address: &BoxAddress,
    number: TransactionNumber,
    kind: TransactionKind,
    summary: &AbbreviatedReceipt,
    receipt: &FullReceipt,
) -> Result<(), PromotionFailure> {
    invariant_same_box(address, receipt).map_err(|field| PromotionFailure::Mismatch { field })?;
    invariant_record_matches_body(number, kind, receipt)
        .map_err(|field| PromotionFailure::Mismatch { field })?;

    if receipt.body.in_reference_to != summary.in_reference_to {
        return Err(PromotionFailure::Mismatch {
            field: "in_reference_to",
        });
    }
    if receipt.body.digest() != summary.receipt_hash {
        return Err(PromotionFailure::DigestMismatch);
    }
    Ok(())
}
