use crate::{PartyNames, Receipt};

impl Receipt {
    /// Prints the Receipt in a short format, as used in the party lists.
    ///
    /// Example:
    ///
    /// Pizzeria Napoli 340kr - 50%
    ///
    pub fn show_short(&self, currency: &str) -> String {
        let mut result = String::new();
        if !self.label.is_empty() {
            result.push_str(&self.label);
            result.push(' ');
        }
        result.push_str(&format!(
            "{}{} - {}%",
            self.amount.normalize(),
            currency,
            self.share.percent()
        ));
        result
    }

    /// Prints the Receipt with its payer and time, used by the log.
    ///
    /// Example:
    ///
    /// 3f9a1c2  2025-05-01 19:42  E  Pizzeria Napoli 340kr - 50%
    ///
    pub fn show_long(&self, short_id: &str, names: &PartyNames, currency: &str) -> String {
        format!(
            "{}  {}  {}  {}",
            short_id,
            self.recorded_at.format("%Y-%m-%d %H:%M"),
            names.name(self.payer),
            self.show_short(currency)
        )
    }
}
