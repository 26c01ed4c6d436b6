use serde::{Deserialize, Serialize};

/// A raw row as delivered by the backend, tagged by the table it came from.
///
/// Serialized as `{"source": "<tag>", ...row fields}`. Every row field is
/// optional on the wire; consumers default what is missing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum RawTransaction {
    Employee(salary::SalaryRow),
    Expense(expense::ExpenseRow),
    Cash(account::AccountTransactionRow),
    Bank(account::AccountTransactionRow),
    Card(account::AccountTransactionRow),
    Partner(account::AccountTransactionRow),
}

impl RawTransaction {
    /// Returns the `source` tag of the row.
    pub fn source(&self) -> &'static str {
        match self {
            Self::Employee(_) => "employee",
            Self::Expense(_) => "expense",
            Self::Cash(_) => "cash",
            Self::Bank(_) => "bank",
            Self::Card(_) => "card",
            Self::Partner(_) => "partner",
        }
    }
}

pub mod salary {
    use super::*;

    /// Current salary definition of an employee (`employee_salaries`).
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct SalaryRow {
        pub employee_id: Option<String>,
        pub net_salary: Option<f64>,
        /// Date or timestamp string (`2024-01-31`, RFC 3339, ...).
        pub effective_date: Option<String>,
        pub notes: Option<String>,
    }
}

pub mod expense {
    use super::*;

    /// Expense recorded on behalf of an employee (`expenses`).
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct ExpenseRow {
        pub id: Option<String>,
        pub amount: Option<f64>,
        pub expense_date: Option<String>,
        pub description: Option<String>,
        pub category: Option<String>,
        pub is_paid: Option<bool>,
        pub reference: Option<String>,
    }
}

pub mod account {
    use super::*;

    /// Payment row from one of the payment channels (`cash_transactions`,
    /// `bank_transactions`, `card_transactions`, `partner_transactions`).
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct AccountTransactionRow {
        pub id: Option<String>,
        pub amount: Option<f64>,
        pub transaction_date: Option<String>,
        pub description: Option<String>,
        pub category: Option<String>,
        pub reference_number: Option<String>,
        /// Expense this payment settles, if any.
        pub expense_id: Option<String>,
    }
}
