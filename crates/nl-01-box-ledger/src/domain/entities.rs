//! # Domain Entities
//!
//! Transaction records as they live inside a box.
//!
//! A record is either *abbreviated* (summary fields only, no signature, stored
//! inline in the ledger) or *full* (the notary-countersigned body, promoted on
//! demand from box-receipt storage).

use serde::{Deserialize, Serialize};
use shared_crypto::receipt_digest;
use shared_types::{BoxType, Hash, IdentityId, NotaryId, TransactionNumber};
use std::sync::Arc;

/// Domain separator for canonical receipt bodies.
const RECEIPT_DOMAIN: &[u8] = b"notary-ledger/receipt/v1";

/// Receipt kinds posted into boxes by a notary.
///
/// The set is closed and protocol-defined. Only `InstrumentNotice`,
/// `PayDividend` and `Notice` convey a payment instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionKind {
    /// Encrypted instrument relayed to an identity (payments inbox).
    InstrumentNotice,
    /// Dividend payout carrying an encrypted voucher.
    PayDividend,
    /// Notary-authored plaintext notice carrying an instrument.
    Notice,
    /// Pending incoming transfer.
    Pending,
    /// Outgoing transfer.
    Transfer,
    /// A cheque drawn on this account was deposited.
    ChequeReceipt,
    /// A voucher drawn on this account was deposited.
    VoucherReceipt,
    /// Market trade settlement.
    MarketReceipt,
    /// Recurring payment settlement.
    PaymentReceipt,
    /// Closing receipt for a cron item.
    FinalReceipt,
    /// Basket exchange settlement.
    BasketReceipt,
    /// Copy of a notary reply dropped into the nymbox.
    ReplyNotice,
    /// Acknowledgement of a signed transaction number.
    SuccessNotice,
    /// Blank transaction-number grant.
    BlankTransaction,
    /// Peer-to-peer message placed into the nymbox.
    Message,
}

impl TransactionKind {
    /// Whether receipts of this kind convey a payment instrument.
    pub fn carries_instrument(&self) -> bool {
        matches!(
            self,
            TransactionKind::InstrumentNotice | TransactionKind::PayDividend | TransactionKind::Notice
        )
    }

    /// Whether the conveyed instrument is sealed to the reading identity.
    pub fn is_encrypted_notice(&self) -> bool {
        matches!(
            self,
            TransactionKind::InstrumentNotice | TransactionKind::PayDividend
        )
    }

    /// Stable name used in canonical bodies and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::InstrumentNotice => "instrumentNotice",
            TransactionKind::PayDividend => "payDividend",
            TransactionKind::Notice => "notice",
            TransactionKind::Pending => "pending",
            TransactionKind::Transfer => "transfer",
            TransactionKind::ChequeReceipt => "chequeReceipt",
            TransactionKind::VoucherReceipt => "voucherReceipt",
            TransactionKind::MarketReceipt => "marketReceipt",
            TransactionKind::PaymentReceipt => "paymentReceipt",
            TransactionKind::FinalReceipt => "finalReceipt",
            TransactionKind::BasketReceipt => "basketReceipt",
            TransactionKind::ReplyNotice => "replyNotice",
            TransactionKind::SuccessNotice => "successNotice",
            TransactionKind::BlankTransaction => "blank",
            TransactionKind::Message => "message",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary fields of a receipt stored inline in its ledger.
///
/// Carries no signature. `receipt_hash` is the digest of the full receipt's
/// signed body and is checked on promotion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbbreviatedReceipt {
    /// Transaction this receipt refers to.
    pub in_reference_to: TransactionNumber,
    /// Digest of the full receipt body.
    pub receipt_hash: Hash,
}

/// The countersigned portion of a full receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptBody {
    /// Notary that posted the receipt.
    pub notary: NotaryId,
    /// Owner of the box the receipt was posted into.
    pub owner: IdentityId,
    /// Box the receipt was posted into.
    pub box_type: BoxType,
    /// Transaction number of this receipt.
    pub number: TransactionNumber,
    /// Receipt kind.
    pub kind: TransactionKind,
    /// Transaction this receipt refers to.
    pub in_reference_to: TransactionNumber,
    /// Embedded reference string.
    ///
    /// A serialized message for `InstrumentNotice`/`PayDividend`; the
    /// instrument's own serialization for `Notice`.
    pub reference: Option<String>,
}

fn put_field(buf: &mut Vec<u8>, bytes: &[u8]) {
    buf.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
    buf.extend_from_slice(bytes);
}

impl ReceiptBody {
    /// Length-prefixed canonical encoding. This is what the notary signs.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let reference_len = self.reference.as_ref().map_or(0, |r| r.len());
        let mut buf = Vec::with_capacity(RECEIPT_DOMAIN.len() + 128 + reference_len);

        buf.extend_from_slice(RECEIPT_DOMAIN);
        put_field(&mut buf, self.notary.as_str().as_bytes());
        put_field(&mut buf, self.owner.as_str().as_bytes());
        put_field(&mut buf, self.box_type.as_str().as_bytes());
        put_field(&mut buf, &self.number.value().to_le_bytes());
        put_field(&mut buf, self.kind.as_str().as_bytes());
        put_field(&mut buf, &self.in_reference_to.value().to_le_bytes());
        match &self.reference {
            Some(reference) => {
                buf.push(1);
                put_field(&mut buf, reference.as_bytes());
            }
            None => buf.push(0),
        }
        buf
    }

    /// Digest carried by the abbreviated form of this receipt.
    pub fn digest(&self) -> Hash {
        receipt_digest(&self.canonical_bytes())
    }
}

/// A complete, countersigned receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullReceipt {
    /// Signed body.
    pub body: ReceiptBody,
    /// Notary countersignature over `body.canonical_bytes()`.
    pub signature: Vec<u8>,
}

impl FullReceipt {
    /// Create a full receipt from a body and its countersignature.
    pub fn new(body: ReceiptBody, signature: Vec<u8>) -> Self {
        Self { body, signature }
    }

    /// Embedded reference string, if any.
    pub fn reference(&self) -> Option<&str> {
        self.body.reference.as_deref()
    }

    /// Abbreviated summary of this receipt.
    pub fn abbreviate(&self) -> AbbreviatedReceipt {
        AbbreviatedReceipt {
            in_reference_to: self.body.in_reference_to,
            receipt_hash: self.body.digest(),
        }
    }
}

/// Storage form of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordForm {
    /// Summary only; must be promoted before its reference can be read.
    Abbreviated(AbbreviatedReceipt),
    /// Complete countersigned receipt.
    Full(Arc<FullReceipt>),
}

/// One receipt in a box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    /// Transaction number; unique within the box.
    pub number: TransactionNumber,
    /// Receipt kind.
    pub kind: TransactionKind,
    /// Identity the number was issued to.
    pub issued_to: IdentityId,
    /// Abbreviated or full form.
    pub form: RecordForm,
}

impl TransactionRecord {
    /// Create an abbreviated record.
    pub fn abbreviated(
        number: TransactionNumber,
        kind: TransactionKind,
        issued_to: IdentityId,
        summary: AbbreviatedReceipt,
    ) -> Self {
        Self {
            number,
            kind,
            issued_to,
            form: RecordForm::Abbreviated(summary),
        }
    }

    /// Create a full record; number and kind are taken from the body.
    pub fn full(issued_to: IdentityId, receipt: FullReceipt) -> Self {
        Self {
            number: receipt.body.number,
            kind: receipt.body.kind,
            issued_to,
            form: RecordForm::Full(Arc::new(receipt)),
        }
    }

    /// Whether the record is still in abbreviated form.
    pub fn is_abbreviated(&self) -> bool {
        matches!(self.form, RecordForm::Abbreviated(_))
    }

    /// View as a full record, if promoted.
    pub fn as_full(&self) -> Option<FullRecord> {
        match &self.form {
            RecordForm::Full(receipt) => Some(FullRecord {
                number: self.number,
                kind: self.kind,
                receipt: Arc::clone(receipt),
            }),
            RecordForm::Abbreviated(_) => None,
        }
    }
}

/// A record known to be in full form. Cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullRecord {
    /// Transaction number.
    pub number: TransactionNumber,
    /// Receipt kind.
    pub kind: TransactionKind,
    /// Shared full receipt.
    pub receipt: Arc<FullReceipt>,
}

impl FullRecord {
    /// Embedded reference string, if any.
    pub fn reference(&self) -> Option<&str> {
        self.receipt.reference()
    }

    /// Whether two handles point at the same promoted receipt.
    pub fn same_receipt(&self, other: &FullRecord) -> bool {
        Arc::ptr_eq(&self.receipt, &other.receipt)
    }
}
