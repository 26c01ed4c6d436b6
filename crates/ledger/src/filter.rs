use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{LedgerError, ResultLedger, TransactionType, UnifiedTransaction};

/// Type selector of a statement view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Only(TransactionType),
}

impl TypeFilter {
    pub fn matches(self, kind: TransactionType) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == kind,
        }
    }
}

impl TryFrom<&str> for TypeFilter {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "all" | "tumu" | "" => Ok(Self::All),
            other => TransactionType::try_from(other).map(Self::Only),
        }
    }
}

/// Filters for a statement view.
///
/// Both bounds are inclusive calendar days: a row matches when its date falls
/// on `from`, on `to` or between them, whatever its time of day.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub kind: TypeFilter,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    /// Case-insensitive substring of the description.
    pub search: Option<String>,
}

impl TransactionFilter {
    /// Checks the filter is satisfiable.
    pub fn validate(&self) -> ResultLedger<()> {
        if let (Some(from), Some(to)) = (self.from, self.to)
            && from > to
        {
            return Err(LedgerError::InvalidRange(format!(
                "from ({from}) must not be after to ({to})"
            )));
        }
        Ok(())
    }

    /// Sets both bounds from a relative period.
    pub fn with_period(mut self, period: Period, today: NaiveDate) -> Self {
        let (from, to) = period.bounds(today);
        self.from = from;
        self.to = to;
        self
    }

    pub fn matches(&self, tx: &UnifiedTransaction) -> bool {
        if !self.kind.matches(tx.kind) {
            return false;
        }

        if self.from.is_some() || self.to.is_some() {
            // Undated rows cannot be placed inside a window.
            let Some(day) = tx.date.map(|d| d.date()) else {
                return false;
            };
            if let Some(from) = self.from
                && day < from
            {
                return false;
            }
            if let Some(to) = self.to
                && day > to
            {
                return false;
            }
        }

        if let Some(term) = self.search.as_deref().map(str::trim)
            && !term.is_empty()
        {
            let term = term.to_lowercase();
            let found = tx
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&term));
            if !found {
                return false;
            }
        }

        true
    }
}

/// Keeps the transactions matching `filter`, preserving input order.
pub fn filter(all: &[UnifiedTransaction], filter: &TransactionFilter) -> Vec<UnifiedTransaction> {
    all.iter().filter(|tx| filter.matches(tx)).cloned().collect()
}

/// Relative statement periods offered by the salary statement screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    LastMonth,
    #[serde(rename = "last_3_months")]
    LastThreeMonths,
    #[default]
    #[serde(rename = "last_6_months")]
    LastSixMonths,
    LastYear,
    All,
}

impl Period {
    /// Inclusive `(from, to)` bounds ending on `today`.
    pub fn bounds(self, today: NaiveDate) -> (Option<NaiveDate>, Option<NaiveDate>) {
        let months = match self {
            Self::LastMonth => 1,
            Self::LastThreeMonths => 3,
            Self::LastSixMonths => 6,
            Self::LastYear => 12,
            Self::All => return (None, None),
        };
        (today.checked_sub_months(Months::new(months)), Some(today))
    }
}

impl TryFrom<&str> for Period {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "last_month" => Ok(Self::LastMonth),
            "last_3_months" => Ok(Self::LastThreeMonths),
            "last_6_months" => Ok(Self::LastSixMonths),
            "last_year" => Ok(Self::LastYear),
            "all" => Ok(Self::All),
            other => Err(LedgerError::InvalidRange(format!("unknown period: {other}"))),
        }
    }
}
