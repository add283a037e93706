use rust_decimal::Decimal;

/// One of the two people sharing the ledger.
#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
pub enum Party {
    PartyA,
    PartyB,
}

impl Party {
    pub const ALL: [Party; 2] = [Party::PartyA, Party::PartyB];

    pub fn other(self) -> Party {
        match self {
            Party::PartyA => Party::PartyB,
            Party::PartyB => Party::PartyA,
        }
    }

    /// Short name accepted for the party regardless of display names.
    pub fn alias(self) -> &'static str {
        match self {
            Party::PartyA => "a",
            Party::PartyB => "b",
        }
    }

    pub(crate) fn tag(self) -> u8 {
        match self {
            Party::PartyA => 0x00,
            Party::PartyB => 0x01,
        }
    }
}

/// How much of a receipt counts toward the payer's running total.
#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
pub enum Share {
    Half,
    Full,
}

impl Share {
    pub fn percent(self) -> u8 {
        match self {
            Share::Half => 50,
            Share::Full => 100,
        }
    }

    /// Part of `amount` attributed to the payer, `amount * percent / 100`.
    ///
    /// Halving never overflows, unlike scaling by the percentage first.
    pub fn apply(self, amount: Decimal) -> Decimal {
        match self {
            Share::Half => amount / Decimal::TWO,
            Share::Full => amount,
        }
    }
}

impl TryFrom<u8> for Share {
    type Error = u8;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        match percent {
            50 => Ok(Share::Half),
            100 => Ok(Share::Full),
            other => Err(other),
        }
    }
}

/// Display names for the two parties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyNames {
    party_a: String,
    party_b: String,
}

impl PartyNames {
    pub fn new(party_a: impl Into<String>, party_b: impl Into<String>) -> Self {
        Self {
            party_a: party_a.into(),
            party_b: party_b.into(),
        }
    }

    pub fn name(&self, party: Party) -> &str {
        match party {
            Party::PartyA => &self.party_a,
            Party::PartyB => &self.party_b,
        }
    }
}

impl Default for PartyNames {
    fn default() -> Self {
        Self::new("E", "L")
    }
}
