//! Turns heterogeneous backend rows into [`UnifiedTransaction`]s.
//!
//! Parsing is permissive: a row never fails to convert. Missing amounts become
//! zero, missing strings fall back to a fixed label, unreadable dates become
//! `None`.

use api_types::{
    RawTransaction,
    account::AccountTransactionRow,
    expense::ExpenseRow,
    salary::SalaryRow,
};

use crate::{
    Money, TransactionStatus, TransactionType, UnifiedTransaction, ledger_order,
    util::parse_optional_date,
};

const UNKNOWN_ID: &str = "unknown";
const SALARY_DESCRIPTION: &str = "Maaş Tahakkuku";
const SALARY_CATEGORY: &str = "maas";
const EXPENSE_DESCRIPTION: &str = "Personel Gideri";
const PAYMENT_DESCRIPTION: &str = "Maaş Ödemesi";

/// Payment channel a payment row was read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Channel {
    Cash,
    Bank,
    Card,
    Partner,
}

impl Channel {
    fn prefix(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Bank => "bank",
            Self::Card => "card",
            Self::Partner => "partner",
        }
    }

    fn payment_method(self) -> &'static str {
        match self {
            Self::Cash => "Nakit",
            Self::Bank => "Banka",
            Self::Card => "Kredi Kartı",
            Self::Partner => "Ortak Hesabı",
        }
    }
}

/// Converts raw rows into unified transactions, newest first.
///
/// Every row yields exactly one transaction. Ties on date are broken by `id`
/// descending, the exact reverse of [`ledger_order`].
pub fn unify(raw: &[RawTransaction]) -> Vec<UnifiedTransaction> {
    let mut unified: Vec<UnifiedTransaction> = raw.iter().map(unify_one).collect();
    unified.sort_by(|a, b| ledger_order(b, a));
    tracing::debug!("unified {} raw rows", unified.len());
    unified
}

/// Converts a single raw row.
pub fn unify_one(raw: &RawTransaction) -> UnifiedTransaction {
    match raw {
        RawTransaction::Employee(row) => from_salary(row),
        RawTransaction::Expense(row) => from_expense(row),
        RawTransaction::Cash(row) => from_payment(row, Channel::Cash),
        RawTransaction::Bank(row) => from_payment(row, Channel::Bank),
        RawTransaction::Card(row) => from_payment(row, Channel::Card),
        RawTransaction::Partner(row) => from_payment(row, Channel::Partner),
    }
}

fn amount(raw: Option<f64>) -> Money {
    raw.map(Money::from_major_f64).unwrap_or_default().abs()
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty()).map(str::to_string)
}

fn from_salary(row: &SalaryRow) -> UnifiedTransaction {
    let employee_id = row.employee_id.as_deref().unwrap_or(UNKNOWN_ID);
    let id = format!("salary-{employee_id}");
    let date = parse_optional_date(row.effective_date.as_deref(), &id);

    let mut tx = UnifiedTransaction::new(id, date, TransactionType::Accrual, amount(row.net_salary));
    tx.description = Some(SALARY_DESCRIPTION.to_string());
    tx.category = Some(SALARY_CATEGORY.to_string());
    tx.reference = non_empty(row.notes.as_ref());
    tx
}

fn from_expense(row: &ExpenseRow) -> UnifiedTransaction {
    let expense_id = row.id.as_deref().unwrap_or(UNKNOWN_ID);
    let id = format!("expense-{expense_id}");
    let date = parse_optional_date(row.expense_date.as_deref(), &id);
    let paid = row.is_paid.unwrap_or(false);

    let mut tx = UnifiedTransaction::new(id, date, TransactionType::Expense, amount(row.amount));
    tx.description =
        Some(non_empty(row.description.as_ref()).unwrap_or_else(|| EXPENSE_DESCRIPTION.to_string()));
    tx.category = non_empty(row.category.as_ref());
    tx.reference = non_empty(row.reference.as_ref());
    tx.status = if paid {
        TransactionStatus::Completed
    } else {
        TransactionStatus::Pending
    };
    tx.expense_id = row.id.clone();
    tx.is_paid = Some(paid);
    tx
}

fn from_payment(row: &AccountTransactionRow, channel: Channel) -> UnifiedTransaction {
    let raw_id = row.id.as_deref().unwrap_or(UNKNOWN_ID);
    let id = format!("{}-{raw_id}", channel.prefix());
    let date = parse_optional_date(row.transaction_date.as_deref(), &id);

    let mut tx = UnifiedTransaction::new(id, date, TransactionType::Payment, amount(row.amount));
    tx.description =
        Some(non_empty(row.description.as_ref()).unwrap_or_else(|| PAYMENT_DESCRIPTION.to_string()));
    tx.category = non_empty(row.category.as_ref());
    tx.reference = non_empty(row.reference_number.as_ref());
    tx.payment_method = Some(channel.payment_method().to_string());
    tx.expense_id = non_empty(row.expense_id.as_ref());
    tx
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn payment(source: fn(AccountTransactionRow) -> RawTransaction, id: &str, date: &str) -> RawTransaction {
        source(AccountTransactionRow {
            id: Some(id.to_string()),
            amount: Some(100.0),
            transaction_date: Some(date.to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn salary_row_becomes_accrual() {
        let tx = unify_one(&RawTransaction::Employee(SalaryRow {
            employee_id: Some("e1".to_string()),
            net_salary: Some(5000.0),
            effective_date: Some("2024-01-31".to_string()),
            ..Default::default()
        }));

        assert_eq!(tx.id, "salary-e1");
        assert_eq!(tx.kind, TransactionType::Accrual);
        assert_eq!(tx.amount, Money::new(500_000));
        assert_eq!(tx.status, TransactionStatus::Completed);
        assert_eq!(
            tx.date,
            NaiveDate::from_ymd_opt(2024, 1, 31).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
        assert_eq!(tx.balance_after, None);
    }

    #[test]
    fn expense_status_follows_paid_flag() {
        let unpaid = unify_one(&RawTransaction::Expense(ExpenseRow {
            id: Some("x1".to_string()),
            amount: Some(40.0),
            ..Default::default()
        }));
        let paid = unify_one(&RawTransaction::Expense(ExpenseRow {
            id: Some("x2".to_string()),
            is_paid: Some(true),
            ..Default::default()
        }));

        assert_eq!(unpaid.id, "expense-x1");
        assert_eq!(unpaid.kind, TransactionType::Expense);
        assert_eq!(unpaid.status, TransactionStatus::Pending);
        assert_eq!(unpaid.is_paid, Some(false));
        assert_eq!(paid.status, TransactionStatus::Completed);
        assert_eq!(paid.expense_id.as_deref(), Some("x2"));
    }

    #[test]
    fn payment_channels_get_prefix_and_method() {
        let cases: [(fn(AccountTransactionRow) -> RawTransaction, &str, &str); 4] = [
            (RawTransaction::Cash, "cash-1", "Nakit"),
            (RawTransaction::Bank, "bank-1", "Banka"),
            (RawTransaction::Card, "card-1", "Kredi Kartı"),
            (RawTransaction::Partner, "partner-1", "Ortak Hesabı"),
        ];
        for (source, id, method) in cases {
            let tx = unify_one(&payment(source, "1", "2024-02-05"));
            assert_eq!(tx.id, id);
            assert_eq!(tx.kind, TransactionType::Payment);
            assert_eq!(tx.status, TransactionStatus::Completed);
            assert_eq!(tx.payment_method.as_deref(), Some(method));
        }
    }

    #[test]
    fn missing_fields_are_defaulted() {
        let tx = unify_one(&RawTransaction::Bank(AccountTransactionRow {
            description: Some("   ".to_string()),
            amount: Some(-250.0),
            transaction_date: Some("not a date".to_string()),
            ..Default::default()
        }));

        assert_eq!(tx.id, "bank-unknown");
        assert_eq!(tx.amount, Money::new(25_000));
        assert_eq!(tx.date, None);
        assert_eq!(tx.description.as_deref(), Some(PAYMENT_DESCRIPTION));

        let empty = unify_one(&RawTransaction::Employee(SalaryRow::default()));
        assert_eq!(empty.id, "salary-unknown");
        assert_eq!(empty.amount, Money::ZERO);
    }

    #[test]
    fn output_is_newest_first_with_reverse_id_ties() {
        let raw = vec![
            payment(RawTransaction::Cash, "a", "2024-02-01"),
            payment(RawTransaction::Cash, "b", "2024-02-01"),
            payment(RawTransaction::Bank, "c", "2024-03-01"),
        ];
        let ids: Vec<_> = unify(&raw).into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["bank-c", "cash-b", "cash-a"]);
    }
}
