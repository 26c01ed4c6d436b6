//! The module contains the errors the ledger can return.
//!
//! The computation core ([`unify`], [`filter`], [`compute_balances`]) is total
//! and never fails; errors only come from the edges:
//!
//! - [`InvalidRange`] when a filter asks for `from > to`.
//! - [`InvalidType`] when a transaction type name is unknown.
//! - [`Export`] when the CSV statement cannot be written.
//!
//!  [`unify`]: crate::unify
//!  [`filter`]: crate::filter
//!  [`compute_balances`]: crate::compute_balances
//!  [`InvalidRange`]: LedgerError::InvalidRange
//!  [`InvalidType`]: LedgerError::InvalidType
//!  [`Export`]: LedgerError::Export
use thiserror::Error;

/// Ledger custom errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid range: {0}")]
    InvalidRange(String),
    #[error("Invalid transaction type: {0}")]
    InvalidType(String),
    #[error(transparent)]
    Export(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidRange(a), Self::InvalidRange(b)) => a == b,
            (Self::InvalidType(a), Self::InvalidType(b)) => a == b,
            (Self::Export(a), Self::Export(b)) => a.to_string() == b.to_string(),
            (Self::Io(a), Self::Io(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
