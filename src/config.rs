use clap::{CommandFactory, Parser, error::ErrorKind};

use crate::{Party, PartyNames};

/// Split restaurant receipts between two people.
///
/// Reads commands from stdin; type `help` once started. Nothing is saved
/// when the session ends.
#[derive(Debug, Parser)]
#[command(name = "receipt-vault", version)]
pub struct Config {
    /// Display name of the first person.
    #[arg(long, env = "RECEIPT_VAULT_PARTY_A", default_value = "E")]
    pub party_a: String,

    /// Display name of the second person.
    #[arg(long, env = "RECEIPT_VAULT_PARTY_B", default_value = "L")]
    pub party_b: String,

    /// Suffix printed after every amount.
    #[arg(long, env = "RECEIPT_VAULT_CURRENCY", default_value = "kr")]
    pub currency: String,

    /// Log filter, e.g. `debug` or `receipt_vault=trace`.
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Don't print a prompt before each line.
    #[arg(long, short)]
    pub quiet: bool,
}

impl Config {
    /// Checks that the two display names can be told apart when typed.
    pub fn party_names(&self) -> Result<PartyNames, clap::Error> {
        let names = PartyNames::new(self.party_a.trim(), self.party_b.trim());
        for party in Party::ALL {
            let name = names.name(party);
            if name.is_empty() || name.contains(char::is_whitespace) {
                return Err(invalid(format!(
                    "party name '{name}' must be a single non-empty word"
                )));
            }
            if names.parse(name).ok() != Some(party)
                || names.parse(party.alias()).ok() != Some(party)
            {
                return Err(invalid(format!(
                    "party name '{name}' clashes with the other party"
                )));
            }
        }
        Ok(names)
    }
}

fn invalid(message: String) -> clap::Error {
    Config::command().error(ErrorKind::ValueValidation, message)
}
