mod config;
pub mod error;
mod ledger;
pub mod logging;
mod receipt;
mod session;
mod settlement;

pub use config::Config;
pub use ledger::{Ledger, ReceiptHash};
pub use receipt::{MAX_AMOUNT, Party, PartyNames, Receipt, Share, parse_amount};
pub use session::{Command, Flow, Session};
pub use settlement::Settlement;
