// =====================================================================
// File: database.rs
//
// Description:
// Defines the `Database` struct: the committed id -> value storage plus
// an optional in-progress transaction.
//
// Responsibilities:
// - Answer reads through the transaction overlay when one is active.
// - Route writes and deletes either to the overlay or straight to
//   storage.
// - Drive the BEGIN / COMMIT / ROLLBACK state machine.
//
// A Database is single-threaded. Every mutating call takes `&mut self`;
// to share one across threads, put the whole Database behind a Mutex.
// =====================================================================

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{DbError, DbResult, Id, Transaction};

/// Name used by [`Database::default`].
pub const DEFAULT_NAME: &str = "default";

/// An in-memory key-value database with single-transaction support.
#[derive(Debug)]
pub struct Database {
    /// Human-readable name, used in log output.
    name: String,

    /// Committed state.
    storage: HashMap<Id, String>,

    /// Active transaction (`None` outside BEGIN ... COMMIT/ROLLBACK).
    transaction: Option<Transaction>,
}


impl Database {
    /// Creates a new, empty database with no active transaction.
    ///
    /// # Example
    /// ```
    /// use txkv::Database;
    /// let db = Database::new("inventory");
    /// assert_eq!(db.name(), "inventory");
    /// assert!(!db.in_transaction());
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            storage: HashMap::new(),
            transaction: None,
        }
    }

    /// The database name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if a transaction is currently active.
    pub fn in_transaction(&self) -> bool {
        self.transaction.is_some()
    }

    /// The active transaction, if any.
    pub fn transaction(&self) -> Option<&Transaction> {
        self.transaction.as_ref()
    }

    /// Number of committed entries.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if nothing is committed.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the value currently visible for `id`.
    ///
    /// Inside a transaction, pending deletes hide committed values and
    /// pending writes shadow them.
    pub fn get(&self, id: Id) -> Option<&str> {
        if let Some(tx) = &self.transaction {
            if tx.is_deleted(id) {
                return None;
            }
            if let Some(value) = tx.pending_value(id) {
                return Some(value);
            }
        }
        self.storage.get(&id).map(String::as_str)
    }

    /// Writes `value` under `id`, overwriting any previous value.
    pub fn set(&mut self, id: Id, value: impl Into<String>) {
        let value = value.into();
        trace!(id, value = %value, pending = self.in_transaction(), "set");

        match &mut self.transaction {
            Some(tx) => tx.set(id, value),
            None => {
                self.storage.insert(id, value);
            }
        }
    }

    /// Deletes `id`. Deleting a key that does not exist is a no-op.
    pub fn delete_by_id(&mut self, id: Id) {
        trace!(id, pending = self.in_transaction(), "delete by id");

        match &mut self.transaction {
            Some(tx) => tx.delete(id),
            None => {
                self.storage.remove(&id);
            }
        }
    }

    /// Deletes every key whose visible value equals `value`.
    ///
    /// Inside a transaction a pending write of `value` is discarded, which
    /// reveals the committed value again; that key is then only deleted if
    /// its committed value also equals `value`.
    pub fn delete_by_value(&mut self, value: &str) {
        trace!(value, pending = self.in_transaction(), "delete by value");

        match &mut self.transaction {
            Some(tx) => tx.delete_by_value(value, &self.storage),
            None => self.storage.retain(|_, committed| committed != value),
        }
    }

    /// Starts a new transaction.
    ///
    /// Fails with [`DbError::TransactionAlreadyInProgress`] if one is
    /// already active; the active transaction is left untouched.
    pub fn begin(&mut self) -> DbResult<()> {
        if self.transaction.is_some() {
            debug!(db = %self.name, "begin rejected: transaction already active");
            return Err(DbError::TransactionAlreadyInProgress);
        }

        self.transaction = Some(Transaction::new());
        debug!(db = %self.name, "transaction started");
        Ok(())
    }

    /// Applies the active transaction to storage and ends it.
    pub fn commit(&mut self) -> DbResult<()> {
        let tx = self.take_transaction("commit")?;
        let stats = tx.commit(&mut self.storage);

        debug!(
            db = %self.name,
            deleted = stats.deleted,
            updated = stats.updated,
            "transaction committed"
        );
        Ok(())
    }

    /// Discards the active transaction without touching storage.
    pub fn rollback(&mut self) -> DbResult<()> {
        let tx = self.take_transaction("rollback")?;

        debug!(db = %self.name, discarded = tx.pending_count(), "transaction rolled back");
        Ok(())
    }

    fn take_transaction(&mut self, op: &'static str) -> DbResult<Transaction> {
        self.transaction.take().ok_or_else(|| {
            debug!(db = %self.name, op, "rejected: no transaction in progress");
            DbError::NoTransactionInProgress
        })
    }
}


impl Default for Database {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}


// =====================================================================
// Unit Tests for Database
// =====================================================================
