//! Wallet ledger: capped, newest-first transaction recording.

use crate::constants::{ADMIN_TOPUP_LABEL, LEDGER_CAP};
use crate::models::{Transaction, TransactionKind, UserProfile};

/// Prepend a freshly-built transaction to the profile's ledger and drop
/// anything past the retention cap from the tail.
///
/// This does **not** touch `coins`.  Callers that intend a balance effect
/// update the balance and call `record` as two steps presented to the
/// user as one action.
pub fn record(
    profile: &mut UserProfile,
    kind: TransactionKind,
    label: impl Into<String>,
    amount: i64,
) -> Transaction {
    let tx = Transaction::new(kind, label, amount);
    profile.transactions.insert(0, tx.clone());
    profile.transactions.truncate(LEDGER_CAP);
    tx
}

/// Manual admin balance adjustment: add `amount` (positive or negative,
/// no floor check) and record the matching deposit entry.  This is the
/// one path that can drive the balance negative.
pub fn admin_adjust(profile: &mut UserProfile, amount: i64) -> Transaction {
    profile.coins += amount;
    record(profile, TransactionKind::Deposit, ADMIN_TOPUP_LABEL, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile::seeded()
    }

    #[test]
    fn ledger_is_newest_first() {
        let mut p = profile();
        record(&mut p, TransactionKind::Reward, "first", 10);
        record(&mut p, TransactionKind::Deposit, "second", 20);

        assert_eq!(p.transactions[0].label, "second");
        assert_eq!(p.transactions[1].label, "first");
        // The seeded welcome entry is now oldest.
        assert_eq!(p.transactions[2].amount, 100);
    }

    #[test]
    fn ledger_never_exceeds_cap() {
        let mut p = profile();
        for i in 0..120 {
            record(&mut p, TransactionKind::Purchase, format!("tx {i}"), -1);
        }

        assert_eq!(p.transactions.len(), LEDGER_CAP);
        // Newest survives, oldest was evicted.
        assert_eq!(p.transactions[0].label, "tx 119");
        assert!(p.transactions.iter().all(|tx| tx.label != "tx 0"));
    }

    #[test]
    fn record_does_not_change_balance() {
        let mut p = profile();
        record(&mut p, TransactionKind::Deposit, "just a note", 500);
        assert_eq!(p.coins, 100);
    }

    #[test]
    fn admin_adjust_can_go_negative() {
        let mut p = profile();
        let tx = admin_adjust(&mut p, -500);

        assert_eq!(p.coins, -400);
        assert_eq!(tx.kind, TransactionKind::Deposit);
        assert_eq!(tx.amount, -500);
        assert_eq!(p.transactions[0], tx);
    }
}
