use thiserror::Error;

use crate::Party;

/// Malformed text coming in from the session before it reaches the ledger.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    InvalidAmount(String),

    #[error("amount can't be negative: {0}")]
    NegativeAmount(String),

    #[error("amount is too large: {0}")]
    AmountTooLarge(String),

    #[error("unknown payer '{0}'")]
    UnknownParty(String),

    #[error("share must be 50 or 100, got '{0}'")]
    UnknownShare(String),
}

/// Failures looking up receipts or totalling them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("no receipt matches '{0}'")]
    RefNotFound(String),

    #[error("'{reference}' matches {matches} receipts")]
    AmbiguousRef { reference: String, matches: usize },

    #[error("running total of {0:?} is too large to compute")]
    Overflow(Party),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Command(#[from] clap::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
