use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::{Party, Share};

/// A restaurant receipt paid by one party.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub amount: Decimal,
    pub label: String,
    pub payer: Party,
    pub share: Share,
    pub recorded_at: DateTime<Utc>,
}

impl Receipt {
    pub fn new(amount: Decimal, label: &str, payer: Party, share: Share) -> Self {
        Receipt {
            amount,
            label: label.to_string(),
            payer,
            share,
            recorded_at: Utc::now(),
        }
    }

    /// What this receipt adds to the payer's running total.
    pub fn owed_amount(&self) -> Decimal {
        self.share.apply(self.amount)
    }
}
