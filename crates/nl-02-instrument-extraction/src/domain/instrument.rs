//! # Payment Instruments
//!
//! Financial instruments conveyed through notice receipts.
//!
//! | Variant | Body | Amount sign |
//! |---------|------|-------------|
//! | `Cheque` | `Cheque` | positive |
//! | `Voucher` | `Cheque` (drawn on the notary) | positive |
//! | `Invoice` | `Cheque` | negative |
//! | `Purse` | `Purse` | n/a (per token) |

use serde::{Deserialize, Serialize};
use shared_types::{IdentityId, NotaryId, TransactionNumber, UnitId};

/// A cheque-shaped instrument. Also the body of vouchers and invoices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cheque {
    /// Notary the cheque is drawn at.
    pub notary: NotaryId,
    /// Unit of account.
    pub unit: UnitId,
    /// Number the drawer burns when the cheque is deposited.
    pub transaction_number: TransactionNumber,
    /// Amount in minor units. Negative for invoices.
    pub amount: i64,
    /// Drawer.
    pub sender: IdentityId,
    /// Payee. `None` means bearer.
    #[serde(default)]
    pub recipient: Option<IdentityId>,
    /// Unix seconds from which the cheque may be deposited.
    pub valid_from: u64,
    /// Unix seconds after which it expires. 0 means no expiry.
    pub valid_to: u64,
    #[serde(default)]
    pub memo: String,
}

/// One cash token inside a purse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Mint series.
    pub series: u32,
    /// Face value in minor units.
    pub denomination: u64,
    /// Armored token body.
    pub body: String,
}

/// A bundle of cash tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purse {
    pub notary: NotaryId,
    pub unit: UnitId,
    /// `None` for a bearer purse.
    #[serde(default)]
    pub owner: Option<IdentityId>,
    pub tokens: Vec<Token>,
    pub valid_from: u64,
    pub valid_to: u64,
}

impl Purse {
    /// Sum of token denominations, `None` on overflow.
    pub fn total_value(&self) -> Option<u64> {
        self.tokens
            .iter()
            .try_fold(0u64, |acc, token| acc.checked_add(token.denomination))
    }
}

/// A payment instrument carried by a notice receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PaymentInstrument {
    Cheque(Cheque),
    Voucher(Cheque),
    Invoice(Cheque),
    Purse(Purse),
}

fn window_ok(valid_from: u64, valid_to: u64) -> bool {
    valid_to == 0 || valid_from <= valid_to
}

impl PaymentInstrument {
    /// Short name of the variant, for logs.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Cheque(_) => "cheque",
            Self::Voucher(_) => "voucher",
            Self::Invoice(_) => "invoice",
            Self::Purse(_) => "purse",
        }
    }

    /// Notary the instrument is drawn at.
    pub fn notary(&self) -> &NotaryId {
        match self {
            Self::Cheque(c) | Self::Voucher(c) | Self::Invoice(c) => &c.notary,
            Self::Purse(p) => &p.notary,
        }
    }

    /// Structural checks that need no notary round trip.
    ///
    /// Does not check signatures, expiry against the clock, or whether the
    /// transaction number is still open.
    pub fn is_structurally_valid(&self) -> bool {
        match self {
            Self::Cheque(c) | Self::Voucher(c) => c.amount > 0 && Self::cheque_ok(c),
            Self::Invoice(c) => c.amount < 0 && Self::cheque_ok(c),
            Self::Purse(p) => {
                !p.tokens.is_empty()
                    && p
                        .tokens
                        .iter()
                        .all(|t| t.denomination > 0 && !t.body.is_empty())
                    && window_ok(p.valid_from, p.valid_to)
            }
        }
    }

    fn cheque_ok(c: &Cheque) -> bool {
        c.transaction_number.is_valid() && window_ok(c.valid_from, c.valid_to)
    }
}
