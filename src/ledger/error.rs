use crate::store::StoreError;
use thiserror::Error;

/// Every ledger failure is detected before any table is touched, except
/// `Storage`, which reports the backing tables themselves failing.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Malformed input: bad dates, inverted ranges, pre-joining requests,
    /// requests larger than the balance.
    #[error("{0}")]
    Validation(String),
    /// Duplicate ids or emails, overlapping leave, balance drained before approval.
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    /// The leave is not in the status the operation requires.
    #[error("{0}")]
    State(String),
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl LedgerError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub(crate) fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub(crate) fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }
}
