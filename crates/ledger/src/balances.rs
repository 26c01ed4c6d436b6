//! Running balances over the full ledger, projected onto a filtered view.
//!
//! Balances always come from the **full** history: filtering a view never
//! changes the balance shown on a row. When the view starts after the
//! beginning of history, a synthetic opening-balance row carries the balance
//! brought forward.

use std::{cmp::Ordering, collections::HashMap};

use crate::{
    Money, OPENING_BALANCE_ID, TransactionStatus, TransactionType, UnifiedTransaction,
    date_order, ledger_order,
};

/// Description of the synthetic opening-balance row.
pub const OPENING_BALANCE_LABEL: &str = "Devir Bakiyesi";

/// Returns a copy of `transactions` in ledger order (oldest first).
pub fn sorted_ascending(transactions: &[UnifiedTransaction]) -> Vec<UnifiedTransaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(ledger_order);
    sorted
}

/// Computes the balance after every transaction of `ascending`, keyed by id.
fn running_balances(ascending: &[UnifiedTransaction]) -> HashMap<&str, Money> {
    let mut running = Money::ZERO;
    let mut by_id = HashMap::with_capacity(ascending.len());
    for tx in ascending {
        running += tx.signed_amount();
        by_id.insert(tx.id.as_str(), running);
    }
    by_id
}

/// Annotates `filtered` with balances computed over `all`, newest first.
///
/// See [`compute_balances_with_label`].
pub fn compute_balances(
    all: &[UnifiedTransaction],
    filtered: &[UnifiedTransaction],
) -> Vec<UnifiedTransaction> {
    compute_balances_with_label(all, filtered, OPENING_BALANCE_LABEL)
}

/// Annotates `filtered` with balances computed over `all`, newest first.
///
/// - `balance_after` of each row is the running balance right after that row
///   in the full history (zero if the row is not part of `all`).
/// - If `filtered` is a strict, non-empty subset and history exists before its
///   first row, an opening-balance row (`id == "opening-balance"`, amount 0,
///   described by `label`) is placed last, holding the balance of the latest
///   earlier transaction.
pub fn compute_balances_with_label(
    all: &[UnifiedTransaction],
    filtered: &[UnifiedTransaction],
    label: &str,
) -> Vec<UnifiedTransaction> {
    let history = sorted_ascending(all);
    let balances = running_balances(&history);

    let mut view = sorted_ascending(filtered);
    for tx in &mut view {
        tx.balance_after = Some(balances.get(tx.id.as_str()).copied().unwrap_or_default());
    }

    let opening = if !view.is_empty() && view.len() < history.len() {
        view.first()
            .and_then(|first| opening_balance(&history, &balances, first, label))
    } else {
        None
    };

    tracing::debug!(
        "computed balances: history={}, view={}, opening={}",
        history.len(),
        view.len(),
        opening.is_some()
    );

    let mut result = Vec::with_capacity(view.len() + 1);
    result.extend(opening);
    result.append(&mut view);
    result.reverse();
    result
}

fn opening_balance(
    history: &[UnifiedTransaction],
    balances: &HashMap<&str, Money>,
    first: &UnifiedTransaction,
    label: &str,
) -> Option<UnifiedTransaction> {
    // `history` is ascending, so the entries strictly before `first` form a
    // prefix and the last of them carries the balance brought forward.
    let carried = history
        .iter()
        .take_while(|tx| date_order(tx.date, first.date) == Ordering::Less)
        .last()?;
    let balance = balances.get(carried.id.as_str()).copied().unwrap_or_default();

    let mut row = UnifiedTransaction::new(
        OPENING_BALANCE_ID,
        first.date,
        TransactionType::Accrual,
        Money::ZERO,
    );
    row.description = Some(label.to_string());
    row.status = TransactionStatus::Completed;
    row.balance_after = Some(balance);
    Some(row)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;

    fn day(d: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(2024, 1, d).and_then(|d| d.and_hms_opt(0, 0, 0))
    }

    fn tx(id: &str, d: u32, kind: TransactionType, minor: i64) -> UnifiedTransaction {
        UnifiedTransaction::new(id, day(d), kind, Money::new(minor))
    }

    fn balances_of(rows: &[UnifiedTransaction]) -> Vec<(&str, Money)> {
        rows.iter()
            .map(|t| (t.id.as_str(), t.balance_after.unwrap_or_default()))
            .collect()
    }

    #[test]
    fn opening_balance_is_synthesized_and_placed_last() {
        let a = tx("A", 1, TransactionType::Accrual, 100);
        let b = tx("B", 2, TransactionType::Payment, 30);
        let c = tx("C", 3, TransactionType::Bonus, 50);
        let all = vec![a, b, c.clone()];

        let out = compute_balances(&all, &[c]);

        assert_eq!(
            balances_of(&out),
            vec![("C", Money::new(120)), (OPENING_BALANCE_ID, Money::new(70))]
        );
        let opening = &out[1];
        assert!(opening.is_opening_balance());
        assert_eq!(opening.amount, Money::ZERO);
        assert_eq!(opening.date, day(3));
        assert_eq!(opening.description.as_deref(), Some(OPENING_BALANCE_LABEL));
    }

    #[test]
    fn full_view_gets_no_opening_row() {
        let all = vec![
            tx("A", 1, TransactionType::Accrual, 100),
            tx("B", 2, TransactionType::Payment, 30),
        ];
        let out = compute_balances(&all, &all);
        assert_eq!(
            balances_of(&out),
            vec![("B", Money::new(70)), ("A", Money::new(100))]
        );
    }

    #[test]
    fn no_opening_row_without_earlier_history() {
        let all = vec![
            tx("A", 1, TransactionType::Accrual, 100),
            tx("B", 2, TransactionType::Payment, 30),
        ];
        let out = compute_balances(&all, &all[..1]);
        assert_eq!(balances_of(&out), vec![("A", Money::new(100))]);
    }

    #[test]
    fn same_day_entries_are_not_carried_forward() {
        let all = vec![
            tx("A", 1, TransactionType::Accrual, 100),
            tx("B", 2, TransactionType::Advance, 10),
            tx("C", 2, TransactionType::Deduction, 20),
        ];
        // Only C is shown; B shares its date so it is not "before".
        let out = compute_balances(&all, &all[2..]);
        assert_eq!(
            balances_of(&out),
            vec![("C", Money::new(70)), (OPENING_BALANCE_ID, Money::new(100))]
        );
    }

    #[test]
    fn empty_history_defaults_balances_to_zero() {
        let stray = tx("X", 1, TransactionType::Accrual, 500);
        let out = compute_balances(&[], std::slice::from_ref(&stray));
        assert_eq!(balances_of(&out), vec![("X", Money::ZERO)]);
        assert!(compute_balances(&[], &[]).is_empty());
    }

    #[test]
    fn custom_label_is_used() {
        let all = vec![
            tx("A", 1, TransactionType::Accrual, 100),
            tx("B", 2, TransactionType::Payment, 30),
        ];
        let out = compute_balances_with_label(&all, &all[1..], "Opening");
        assert_eq!(out[1].description.as_deref(), Some("Opening"));
    }

    #[test]
    fn undated_entries_come_after_dated_history() {
        let mut undated = tx("U", 1, TransactionType::Payment, 40);
        undated.date = None;
        let all = vec![undated, tx("A", 5, TransactionType::Accrual, 100)];
        let out = compute_balances(&all, &all);
        assert_eq!(
            balances_of(&out),
            vec![("U", Money::new(60)), ("A", Money::new(100))]
        );
    }
}
