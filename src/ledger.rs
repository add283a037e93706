use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::{Party, Receipt, Settlement, Share, error::LedgerError};

/// In-memory receipt ledger for one session.
///
/// Receipts are kept in insertion order and never change once appended.
/// Totals are recomputed from the full sequence on every query.
#[derive(Debug, Default)]
pub struct Ledger {
    receipts: Vec<Receipt>,
    hashes: Vec<ReceiptHash>,
}

/// Chained SHA-256 id of a receipt, hex encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReceiptHash(String);

impl ReceiptHash {
    pub fn short(&self) -> &str {
        &self.0[..7]
    }
}

impl AsRef<str> for ReceiptHash {
    #[inline]
    fn as_ref(&self) -> &str {
        <String as AsRef<str>>::as_ref(&self.0)
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, amount: Decimal, label: &str, payer: Party, share: Share) -> Receipt {
        let receipt = Receipt::new(amount, label, payer, share);
        let previous = self.hashes.last().map(|h| h.0.as_str());
        let hash = ReceiptHash(receipt.chained_hash(previous));
        debug!(
            id = hash.short(),
            ?payer,
            share = share.percent(),
            %amount,
            "receipt appended"
        );
        self.hashes.push(hash);
        self.receipts.push(receipt.clone());
        receipt
    }

    pub fn len(&self) -> usize {
        self.receipts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receipts.is_empty()
    }

    /// Id of the most recently appended receipt.
    pub fn head(&self) -> Option<&ReceiptHash> {
        self.hashes.last()
    }

    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }

    /// Snapshot of the receipts paid by `party`, in insertion order.
    pub fn receipts_for(&self, party: Party) -> Vec<Receipt> {
        self.receipts
            .iter()
            .filter(|r| r.payer == party)
            .cloned()
            .collect()
    }

    /// Sum of `amount * share / 100` over the receipts paid by `party`.
    ///
    /// Fails instead of panicking when the total leaves `Decimal` range.
    pub fn amount_owed_by(&self, party: Party) -> Result<Decimal, LedgerError> {
        self.receipts
            .iter()
            .filter(|r| r.payer == party)
            .try_fold(Decimal::ZERO, |total, r| total.checked_add(r.owed_amount()))
            .ok_or(LedgerError::Overflow(party))
    }

    pub fn settlement(&self) -> Result<Settlement, LedgerError> {
        let total_a = self.amount_owed_by(Party::PartyA)?;
        let total_b = self.amount_owed_by(Party::PartyB)?;
        let settlement = Settlement::between(total_a, total_b);
        trace!(%total_a, %total_b, ?settlement, "settlement computed");
        Ok(settlement)
    }

    /// Newest-first history of the ledger.
    pub fn log(&self) -> impl Iterator<Item = (&ReceiptHash, &Receipt)> {
        self.hashes.iter().zip(self.receipts.iter()).rev()
    }

    /// Resolves `HEAD` or a unique id prefix.
    pub fn resolve(&self, reference: &str) -> Result<ReceiptHash, LedgerError> {
        if reference == "HEAD" {
            return self
                .head()
                .cloned()
                .ok_or_else(|| LedgerError::RefNotFound(reference.to_string()));
        }
        let matches: Vec<&ReceiptHash> = self
            .hashes
            .iter()
            .filter(|h| h.0.starts_with(reference))
            .collect();
        match &matches[..] {
            [] => Err(LedgerError::RefNotFound(reference.to_string())),
            [hash] => Ok((*hash).clone()),
            _ => Err(LedgerError::AmbiguousRef {
                reference: reference.to_string(),
                matches: matches.len(),
            }),
        }
    }

    pub fn get(&self, hash: &ReceiptHash) -> Option<&Receipt> {
        self.hashes
            .iter()
            .position(|h| h == hash)
            .map(|index| &self.receipts[index])
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::MAX_AMOUNT;

    fn ledger_from(receipts: &[Receipt]) -> Ledger {
        let mut ledger = Ledger::new();
        for r in receipts {
            ledger.append(r.amount, &r.label, r.payer, r.share);
        }
        ledger
    }

    fn strip_time(receipts: &[Receipt]) -> Vec<(Decimal, String, Party, Share)> {
        receipts
            .iter()
            .map(|r| (r.amount, r.label.clone(), r.payer, r.share))
            .collect()
    }

    #[test]
    fn scenario_both_half() {
        let mut ledger = Ledger::new();
        ledger.append(Decimal::from(100), "", Party::PartyA, Share::Half);
        ledger.append(Decimal::from(200), "", Party::PartyB, Share::Half);
        assert_eq!(ledger.amount_owed_by(Party::PartyA), Ok(Decimal::from(50)));
        assert_eq!(ledger.amount_owed_by(Party::PartyB), Ok(Decimal::from(100)));
        assert_eq!(
            ledger.settlement(),
            Ok(Settlement {
                recipient: Some(Party::PartyB),
                amount: Decimal::from(50),
            })
        );
    }

    #[test]
    fn scenario_single_full() {
        let mut ledger = Ledger::new();
        ledger.append(Decimal::from(80), "Sushi", Party::PartyA, Share::Full);
        assert_eq!(ledger.amount_owed_by(Party::PartyA), Ok(Decimal::from(80)));
        assert_eq!(ledger.amount_owed_by(Party::PartyB), Ok(Decimal::ZERO));
        assert_eq!(
            ledger.settlement(),
            Ok(Settlement {
                recipient: Some(Party::PartyA),
                amount: Decimal::from(80),
            })
        );
    }

    #[test]
    fn scenario_empty() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.settlement(), Ok(Settlement::NONE));
    }

    #[test]
    fn scenario_tie() {
        let mut ledger = Ledger::new();
        ledger.append(Decimal::from(100), "", Party::PartyA, Share::Half);
        ledger.append(Decimal::from(100), "", Party::PartyB, Share::Half);
        assert_eq!(ledger.settlement(), Ok(Settlement::NONE));
    }

    #[test]
    fn zero_amount_receipts_settle_to_nothing() {
        let mut ledger = Ledger::new();
        ledger.append(Decimal::ZERO, "free lunch", Party::PartyB, Share::Full);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.settlement(), Ok(Settlement::NONE));
    }

    #[test]
    fn oversized_totals_report_overflow() {
        let mut ledger = Ledger::new();
        ledger.append(Decimal::MAX, "", Party::PartyA, Share::Half);
        assert_eq!(ledger.amount_owed_by(Party::PartyA), Ok(Decimal::MAX / Decimal::TWO));

        ledger.append(Decimal::MAX, "", Party::PartyA, Share::Full);
        assert_eq!(
            ledger.amount_owed_by(Party::PartyA),
            Err(LedgerError::Overflow(Party::PartyA))
        );
        assert_eq!(ledger.settlement(), Err(LedgerError::Overflow(Party::PartyA)));
        assert_eq!(ledger.amount_owed_by(Party::PartyB), Ok(Decimal::ZERO));
    }

    #[test]
    fn many_receipts_at_cap_still_settle() {
        let mut ledger = Ledger::new();
        for _ in 0..1000 {
            ledger.append(MAX_AMOUNT, "", Party::PartyA, Share::Full);
            ledger.append(MAX_AMOUNT, "", Party::PartyB, Share::Half);
        }
        let total_a = MAX_AMOUNT * Decimal::from(1000);
        assert_eq!(ledger.amount_owed_by(Party::PartyA), Ok(total_a));
        assert_eq!(
            ledger.settlement(),
            Ok(Settlement {
                recipient: Some(Party::PartyA),
                amount: total_a / Decimal::TWO,
            })
        );
    }

    #[test]
    fn append_returns_what_was_stored() {
        let mut ledger = Ledger::new();
        let receipt = ledger.append(Decimal::new(1299, 2), "Ramen", Party::PartyB, Share::Half);
        assert_eq!(ledger.receipts(), &[receipt]);
    }

    #[quickcheck]
    fn party_lists_partition_ledger(receipts: Vec<Receipt>) -> bool {
        let ledger = ledger_from(&receipts);
        let a = ledger.receipts_for(Party::PartyA);
        let b = ledger.receipts_for(Party::PartyB);
        let expected_a: Vec<_> = receipts
            .iter()
            .filter(|r| r.payer == Party::PartyA)
            .cloned()
            .collect();
        let expected_b: Vec<_> = receipts
            .iter()
            .filter(|r| r.payer == Party::PartyB)
            .cloned()
            .collect();
        a.len() + b.len() == ledger.len()
            && a.iter().all(|r| r.payer == Party::PartyA)
            && b.iter().all(|r| r.payer == Party::PartyB)
            && strip_time(&a) == strip_time(&expected_a)
            && strip_time(&b) == strip_time(&expected_b)
    }

    #[quickcheck]
    fn owed_amount_is_share_of_total(receipts: Vec<Receipt>) -> bool {
        let ledger = ledger_from(&receipts);
        Party::ALL.into_iter().all(|party| {
            let expected: Decimal = receipts
                .iter()
                .filter(|r| r.payer == party)
                .map(|r| r.amount * Decimal::from(r.share.percent()) / Decimal::from(100))
                .sum();
            ledger.amount_owed_by(party) == Ok(expected)
        })
    }

    #[quickcheck]
    fn settlement_is_idempotent(receipts: Vec<Receipt>) -> bool {
        let ledger = ledger_from(&receipts);
        ledger.settlement() == ledger.settlement()
    }

    #[quickcheck]
    fn settlement_has_no_recipient_on_equal_totals(receipts: Vec<Receipt>) -> bool {
        let ledger = ledger_from(&receipts);
        let equal = ledger.amount_owed_by(Party::PartyA) == ledger.amount_owed_by(Party::PartyB);
        !equal || ledger.settlement() == Ok(Settlement::NONE)
    }

    #[quickcheck]
    fn append_leaves_snapshots_untouched(receipts: Vec<Receipt>, next: Receipt) -> bool {
        let mut ledger = ledger_from(&receipts);
        let before_len = ledger.len();
        let before_a = ledger.receipts_for(Party::PartyA);
        let before_b = ledger.receipts_for(Party::PartyB);
        let before_all = ledger.receipts().to_vec();

        ledger.append(next.amount, &next.label, next.payer, next.share);

        let (grown, untouched) = match next.payer {
            Party::PartyA => (before_a, before_b),
            Party::PartyB => (before_b, before_a),
        };
        ledger.len() == before_len + 1
            && ledger.receipts()[..before_len] == before_all[..]
            && ledger.receipts_for(next.payer).len() == grown.len() + 1
            && ledger.receipts_for(next.payer)[..grown.len()] == grown[..]
            && ledger.receipts_for(next.payer.other()) == untouched
    }

    #[test]
    fn duplicates_get_distinct_ids() {
        let mut ledger = Ledger::new();
        ledger.append(Decimal::from(10), "Kebab", Party::PartyA, Share::Half);
        ledger.append(Decimal::from(10), "Kebab", Party::PartyA, Share::Half);
        let ids: Vec<_> = ledger.log().map(|(hash, _)| hash.clone()).collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn log_is_newest_first() {
        let mut ledger = Ledger::new();
        ledger.append(Decimal::from(1), "first", Party::PartyA, Share::Half);
        ledger.append(Decimal::from(2), "second", Party::PartyB, Share::Full);
        let labels: Vec<_> = ledger.log().map(|(_, r)| r.label.as_str()).collect();
        assert_eq!(labels, vec!["second", "first"]);
    }

    #[test]
    fn resolve_head_and_prefix() {
        let mut ledger = Ledger::new();
        assert_eq!(
            ledger.resolve("HEAD"),
            Err(LedgerError::RefNotFound("HEAD".to_string()))
        );
        ledger.append(Decimal::from(1), "first", Party::PartyA, Share::Half);
        ledger.append(Decimal::from(2), "second", Party::PartyB, Share::Full);

        let head = ledger.resolve("HEAD").unwrap();
        assert_eq!(ledger.get(&head).map(|r| r.label.as_str()), Some("second"));

        let (first_hash, _) = ledger.log().last().unwrap();
        let resolved = ledger.resolve(&first_hash.as_ref()[..12]).unwrap();
        assert_eq!(ledger.get(&resolved).map(|r| r.label.as_str()), Some("first"));
    }

    #[test]
    fn resolve_rejects_unknown_and_ambiguous() {
        let mut ledger = Ledger::new();
        ledger.append(Decimal::from(1), "first", Party::PartyA, Share::Half);
        ledger.append(Decimal::from(2), "second", Party::PartyB, Share::Full);
        assert_eq!(
            ledger.resolve("xyz"),
            Err(LedgerError::RefNotFound("xyz".to_string()))
        );
        assert_eq!(
            ledger.resolve(""),
            Err(LedgerError::AmbiguousRef {
                reference: String::new(),
                matches: 2,
            })
        );
    }
}
