// =====================================================================
// File: error.rs
//
// Description:
//   Error type for transaction lifecycle calls. Reads, writes and
//   deletes never fail; only BEGIN / COMMIT / ROLLBACK issued in the
//   wrong state produce an error.
// =====================================================================
use thiserror::Error;

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

/// Errors returned by the transaction lifecycle operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DbError {
    /// `begin` was called while a transaction is already active.
    #[error("transaction already in progress")]
    TransactionAlreadyInProgress,

    /// `commit` or `rollback` was called with no active transaction.
    #[error("no transaction in progress")]
    NoTransactionInProgress,
}
