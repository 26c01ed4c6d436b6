//! Employee ledger statements.
//!
//! The pipeline is:
//!
//! 1. [`unify`] raw backend rows ([`RawTransaction`]) into
//!    [`UnifiedTransaction`]s;
//! 2. [`filter`] them for the view being shown;
//! 3. [`compute_balances`] over the full history and project them onto the
//!    view, newest first, with an opening-balance row when needed.
//!
//! Everything here is synchronous and pure: each call owns its inputs' copies
//! and returns fresh values.

pub use api_types::RawTransaction;
pub use balances::{
    OPENING_BALANCE_LABEL, compute_balances, compute_balances_with_label, sorted_ascending,
};
pub use error::LedgerError;
pub use export::{statement_file_name, write_statement_csv};
pub use filter::{Period, TransactionFilter, TypeFilter, filter};
pub use money::Money;
pub use summary::StatementSummary;
pub use transactions::{
    Direction, OPENING_BALANCE_ID, TransactionStatus, TransactionType, UnifiedTransaction,
    date_order, ledger_order,
};
pub use unify::{unify, unify_one};

mod balances;
mod error;
mod export;
mod filter;
mod money;
mod summary;
mod transactions;
mod unify;
mod util;

pub type ResultLedger<T> = Result<T, LedgerError>;

/// Runs the whole pipeline: unify `raw`, filter it, compute balances.
pub fn statement(
    raw: &[RawTransaction],
    view: &TransactionFilter,
    opening_label: &str,
) -> Vec<UnifiedTransaction> {
    let all = unify(raw);
    let filtered = filter(&all, view);
    compute_balances_with_label(&all, &filtered, opening_label)
}
