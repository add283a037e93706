use rust_decimal::Decimal;

use crate::Party;

/// Who should be paid back, and how much.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub recipient: Option<Party>,
    pub amount: Decimal,
}

impl Settlement {
    pub const NONE: Settlement = Settlement {
        recipient: None,
        amount: Decimal::ZERO,
    };

    /// Compares the two running totals. Equal totals settle to nothing.
    pub fn between(total_a: Decimal, total_b: Decimal) -> Self {
        if total_a == total_b {
            Settlement::NONE
        } else if total_a > total_b {
            Settlement {
                recipient: Some(Party::PartyA),
                amount: total_a - total_b,
            }
        } else {
            Settlement {
                recipient: Some(Party::PartyB),
                amount: total_b - total_a,
            }
        }
    }

    /// The party expected to make the transfer.
    pub fn payer(&self) -> Option<Party> {
        self.recipient.map(Party::other)
    }
}
