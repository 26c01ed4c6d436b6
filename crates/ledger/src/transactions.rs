//! Unified transaction primitives.
//!
//! A [`UnifiedTransaction`] is the single shape every raw source row is turned
//! into before filtering and balance computation.

use std::cmp::Ordering;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{LedgerError, Money};

/// Id of the synthetic row carrying the balance brought forward.
pub const OPENING_BALANCE_ID: &str = "opening-balance";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "tahakkuk", alias = "accrual")]
    Accrual,
    #[serde(rename = "odeme", alias = "payment")]
    Payment,
    #[serde(rename = "masraf", alias = "expense")]
    Expense,
    #[serde(rename = "avans", alias = "advance")]
    Advance,
    #[serde(rename = "prim", alias = "bonus")]
    Bonus,
    #[serde(rename = "kesinti", alias = "deduction")]
    Deduction,
}

/// Ledger side of a transaction type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Increases what is owed to the employee.
    Credit,
    /// Decreases what is owed to the employee.
    Debit,
}

impl TransactionType {
    pub const ALL: [TransactionType; 6] = [
        Self::Accrual,
        Self::Payment,
        Self::Expense,
        Self::Advance,
        Self::Bonus,
        Self::Deduction,
    ];

    /// Canonical wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accrual => "tahakkuk",
            Self::Payment => "odeme",
            Self::Expense => "masraf",
            Self::Advance => "avans",
            Self::Bonus => "prim",
            Self::Deduction => "kesinti",
        }
    }

    /// Human readable label used on statements.
    pub fn label(self) -> &'static str {
        match self {
            Self::Accrual => "Tahakkuk",
            Self::Payment => "Ödeme",
            Self::Expense => "Masraf",
            Self::Advance => "Avans",
            Self::Bonus => "Prim",
            Self::Deduction => "Kesinti",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Self::Accrual | Self::Expense | Self::Bonus => Direction::Credit,
            Self::Payment | Self::Advance | Self::Deduction => Direction::Debit,
        }
    }

    pub fn is_credit(self) -> bool {
        self.direction() == Direction::Credit
    }
}

impl TryFrom<&str> for TransactionType {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "tahakkuk" | "accrual" => Ok(Self::Accrual),
            "odeme" | "ödeme" | "payment" => Ok(Self::Payment),
            "masraf" | "expense" => Ok(Self::Expense),
            "avans" | "advance" => Ok(Self::Advance),
            "prim" | "bonus" => Ok(Self::Bonus),
            "kesinti" | "deduction" => Ok(Self::Deduction),
            other => Err(LedgerError::InvalidType(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Completed,
    Pending,
}

impl TransactionStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Tamamlandı",
            Self::Pending => "Beklemede",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnifiedTransaction {
    pub id: String,
    pub date: Option<NaiveDateTime>,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: Money,
    pub description: Option<String>,
    pub category: Option<String>,
    pub reference: Option<String>,
    pub status: TransactionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_after: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_paid: Option<bool>,
}

impl UnifiedTransaction {
    /// Builds a completed transaction with no optional fields set.
    pub fn new(
        id: impl Into<String>,
        date: Option<NaiveDateTime>,
        kind: TransactionType,
        amount: Money,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            kind,
            amount,
            description: None,
            category: None,
            reference: None,
            status: TransactionStatus::Completed,
            balance_after: None,
            payment_method: None,
            expense_id: None,
            is_paid: None,
        }
    }

    /// Amount with the ledger sign applied: positive for credits, negative
    /// for debits.
    pub fn signed_amount(&self) -> Money {
        match self.kind.direction() {
            Direction::Credit => self.amount,
            Direction::Debit => -self.amount,
        }
    }

    pub fn is_opening_balance(&self) -> bool {
        self.id == OPENING_BALANCE_ID
    }
}

/// Orders two optional dates; undated entries sort after every dated one.
pub fn date_order(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Chronological ledger order: date ascending, ties broken by `id`.
///
/// Every sort in the crate goes through this comparator (reversed for
/// newest-first views) so the order never depends on fetch order.
pub fn ledger_order(a: &UnifiedTransaction, b: &UnifiedTransaction) -> Ordering {
    date_order(a.date, b.date).then_with(|| a.id.cmp(&b.id))
}
