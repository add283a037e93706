use std::io::{BufRead, Write};

use clap::{ColorChoice, Parser, Subcommand, error::ErrorKind};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::{
    Ledger, Party, PartyNames, ReceiptHash, Settlement, Share, error::SessionError,
    receipt::parse_amount,
};

/// One line of session input, parsed the way a shell parses an applet call.
#[derive(Debug, Parser)]
#[command(multicall = true, color = ColorChoice::Never)]
struct SessionLine {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Record a receipt.
    Add {
        /// Receipt total.
        #[arg(value_parser = parse_amount, allow_negative_numbers = true)]
        amount: Decimal,
        /// Who paid: `a`, `b` or a display name.
        payer: String,
        /// Share counted toward the payer, 50 or 100.
        share: Share,
        /// Restaurant or purpose.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
        label: Vec<String>,
    },
    /// Receipts per person and the settlement.
    List,
    /// Who is owed what.
    Settle,
    /// Running total per person.
    Totals,
    /// History, newest first.
    Log,
    /// One receipt.
    Show {
        #[arg(value_name = "ID|HEAD")]
        reference: String,
    },
    /// Leave the session. Nothing is saved.
    #[command(alias = "exit")]
    Quit,
}

impl Command {
    /// Parses one input line. Returns `None` for blank lines and `#` comment lines.
    pub fn parse_line(line: &str) -> Result<Option<Command>, SessionError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let parsed = SessionLine::try_parse_from(line.split_whitespace())?;
        Ok(Some(parsed.command))
    }
}

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Terminal front end that owns the ledger for the lifetime of a session.
pub struct Session {
    ledger: Ledger,
    names: PartyNames,
    currency: String,
}

impl Session {
    pub fn new(names: PartyNames, currency: impl Into<String>) -> Self {
        Self {
            ledger: Ledger::new(),
            names,
            currency: currency.into(),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Reads commands until end of input or `quit`.
    ///
    /// Rejected lines are reported on `output` and the session goes on.
    /// Only I/O failures end the session with an error.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
        prompt: bool,
    ) -> std::io::Result<()> {
        let mut lines = input.lines();
        loop {
            if prompt {
                write!(output, "> ")?;
                output.flush()?;
            }
            let Some(line) = lines.next().transpose()? else {
                break;
            };
            let result = Command::parse_line(&line).and_then(|command| match command {
                Some(command) => self.execute(command, &mut output),
                None => Ok(Flow::Continue),
            });
            match result {
                Ok(Flow::Continue) => {}
                Ok(Flow::Stop) => break,
                Err(SessionError::Io(e)) => return Err(e),
                Err(SessionError::Command(e))
                    if matches!(
                        e.kind(),
                        ErrorKind::DisplayHelp
                            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                            | ErrorKind::DisplayVersion
                    ) =>
                {
                    write!(output, "{e}")?;
                }
                Err(SessionError::Command(e)) => {
                    warn!(%line, kind = ?e.kind(), "rejected input");
                    write!(output, "{e}")?;
                }
                Err(e) => {
                    warn!(%line, error = %e, "rejected input");
                    writeln!(output, "error: {e}")?;
                }
            }
        }
        info!(receipts = self.ledger.len(), "session ended");
        output.flush()
    }

    pub fn execute<W: Write>(
        &mut self,
        command: Command,
        output: &mut W,
    ) -> Result<Flow, SessionError> {
        match command {
            Command::Add {
                amount,
                payer,
                share,
                label,
            } => {
                let payer = self.names.parse(&payer)?;
                let receipt = self.ledger.append(amount, &label.join(" "), payer, share);
                let id = self.ledger.head().map(ReceiptHash::short).unwrap_or_default();
                writeln!(
                    output,
                    "Added {}: {} {}",
                    id,
                    self.names.name(payer),
                    receipt.show_short(&self.currency)
                )?;
            }
            Command::List => {
                if self.ledger.is_empty() {
                    writeln!(output, "No receipts yet")?;
                } else {
                    for party in Party::ALL {
                        writeln!(output, "{}", self.names.name(party))?;
                        let receipts = self.ledger.receipts_for(party);
                        if receipts.is_empty() {
                            writeln!(output, "  (none)")?;
                        }
                        for receipt in receipts {
                            writeln!(output, "  {}", receipt.show_short(&self.currency))?;
                        }
                    }
                    writeln!(output)?;
                    let settlement = self.ledger.settlement()?;
                    writeln!(output, "{}", self.show_settlement(&settlement))?;
                }
            }
            Command::Settle => {
                let settlement = self.ledger.settlement()?;
                writeln!(output, "{}", self.show_settlement(&settlement))?;
            }
            Command::Totals => {
                for party in Party::ALL {
                    writeln!(
                        output,
                        "{}: {}{}",
                        self.names.name(party),
                        self.ledger.amount_owed_by(party)?.normalize(),
                        self.currency
                    )?;
                }
            }
            Command::Log => {
                if self.ledger.is_empty() {
                    writeln!(output, "No receipts yet")?;
                }
                for (id, receipt) in self.ledger.log() {
                    writeln!(
                        output,
                        "{}",
                        receipt.show_long(id.short(), &self.names, &self.currency)
                    )?;
                }
            }
            Command::Show { reference } => {
                let id = self.ledger.resolve(&reference)?;
                if let Some(receipt) = self.ledger.get(&id) {
                    writeln!(output, "receipt {}", id.as_ref())?;
                    writeln!(
                        output,
                        "{}",
                        receipt.show_long(id.short(), &self.names, &self.currency)
                    )?;
                }
            }
            Command::Quit => return Ok(Flow::Stop),
        }
        Ok(Flow::Continue)
    }

    /// One-line summary of a settlement, e.g. `L is expected to receive 50kr from E`.
    pub fn show_settlement(&self, settlement: &Settlement) -> String {
        match (settlement.recipient, settlement.payer()) {
            (Some(recipient), Some(payer)) => format!(
                "{} is expected to receive {}{} from {}",
                self.names.name(recipient),
                settlement.amount.normalize(),
                self.currency,
                self.names.name(payer)
            ),
            _ => "Nothing to settle".to_string(),
        }
    }
}
