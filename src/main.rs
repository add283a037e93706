use std::io::{Result, stdin, stdout};

use clap::Parser;
use receipt_vault::{Config, Party, Session, logging};
use tracing::info;

fn main() -> Result<()> {
    let config = Config::parse();
    logging::init(&config.log_level);
    let names = config.party_names().unwrap_or_else(|e| e.exit());

    info!(
        party_a = names.name(Party::PartyA),
        party_b = names.name(Party::PartyB),
        currency = %config.currency,
        "session started"
    );
    let mut session = Session::new(names, config.currency);
    session.run(stdin().lock(), stdout().lock(), !config.quiet)
}
