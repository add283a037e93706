use std::str::FromStr;

use rust_decimal::Decimal;

use super::{Party, PartyNames, Share};
use crate::error::InputError;

/// Largest receipt total accepted from a user, 10^15.
///
/// Leaves room for summing billions of receipts inside `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Parses a receipt total typed by a user.
///
/// Accepts `,` as decimal separator. Negative totals and totals above
/// [`MAX_AMOUNT`] are rejected.
pub fn parse_amount(text: &str) -> Result<Decimal, InputError> {
    let trimmed = text.trim();
    let amount = Decimal::from_str(&trimmed.replace(',', "."))
        .map_err(|_| InputError::InvalidAmount(trimmed.to_string()))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(InputError::NegativeAmount(trimmed.to_string()));
    }
    if amount > MAX_AMOUNT {
        return Err(InputError::AmountTooLarge(trimmed.to_string()));
    }
    Ok(amount)
}

impl FromStr for Share {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "half" => return Ok(Share::Half),
            "full" => return Ok(Share::Full),
            _ => {}
        }
        trimmed
            .strip_suffix('%')
            .unwrap_or(trimmed)
            .parse::<u8>()
            .ok()
            .and_then(|percent| Share::try_from(percent).ok())
            .ok_or_else(|| InputError::UnknownShare(trimmed.to_string()))
    }
}

impl PartyNames {
    /// Resolves `a`/`b` or one of the display names, ignoring case.
    pub fn parse(&self, text: &str) -> Result<Party, InputError> {
        let trimmed = text.trim();
        Party::ALL
            .into_iter()
            .find(|&party| {
                trimmed.eq_ignore_ascii_case(party.alias())
                    || trimmed.eq_ignore_ascii_case(self.name(party))
            })
            .ok_or_else(|| InputError::UnknownParty(trimmed.to_string()))
    }
}
