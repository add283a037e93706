mod encode;
mod parse;
mod party;
mod receipt_struct;
mod show;

pub use parse::{MAX_AMOUNT, parse_amount};
pub use party::{Party, PartyNames, Share};
pub use receipt_struct::Receipt;
