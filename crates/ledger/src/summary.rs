use chrono::NaiveDateTime;
use serde::Serialize;

use crate::{Money, TransactionStatus, TransactionType, UnifiedTransaction, ledger_order};

/// Headline figures of an employee statement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StatementSummary {
    /// Completed credits (accruals, expenses, bonuses).
    pub total_earned: Money,
    /// Completed payments.
    pub total_paid: Money,
    /// Completed advances and deductions.
    pub total_deductions: Money,
    /// Credits still pending.
    pub pending: Money,
    pub net_balance: Money,
    pub last_payment: Option<NaiveDateTime>,
    /// Balance after the newest row, when balances were computed.
    pub closing_balance: Option<Money>,
}

impl StatementSummary {
    /// Summarizes a statement view. Opening-balance rows are skipped.
    pub fn from_transactions(transactions: &[UnifiedTransaction]) -> Self {
        let mut summary = Self::default();
        let mut newest: Option<&UnifiedTransaction> = None;

        for tx in transactions.iter().filter(|t| !t.is_opening_balance()) {
            let completed = tx.status == TransactionStatus::Completed;
            match (tx.kind, completed) {
                (TransactionType::Payment, true) => {
                    summary.total_paid += tx.amount;
                    summary.last_payment = summary.last_payment.max(tx.date);
                }
                (TransactionType::Advance | TransactionType::Deduction, true) => {
                    summary.total_deductions += tx.amount;
                }
                (kind, true) if kind.is_credit() => summary.total_earned += tx.amount,
                (kind, false) if kind.is_credit() => summary.pending += tx.amount,
                _ => {}
            }

            if tx.balance_after.is_some() && newest.is_none_or(|n| ledger_order(tx, n).is_gt()) {
                newest = Some(tx);
            }
        }

        summary.net_balance = summary.total_earned - summary.total_paid - summary.total_deductions;
        summary.closing_balance = newest.and_then(|t| t.balance_after);
        summary
    }
}
