// =====================================================================
// File: transaction/transaction.rs
//
// Description:
//   Implements the Transaction struct, the overlay that sits on top of
//   committed storage while a transaction is open. It records two kinds
//   of pending change:
//
//     - keys_to_update : id -> value that will replace or create the
//                        committed entry
//     - keys_to_delete : ids whose committed entry will be removed
//
//   A key is never in both at once. Writing a key un-deletes it and
//   deleting a key drops its pending write.
//
//   Used by the Database to provide atomic BEGIN / COMMIT / ROLLBACK.
// =====================================================================
use std::collections::HashMap;

use crate::{Id, Set};

/// Counts of changes applied to storage by [`Transaction::commit`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitStats {
    /// Committed entries that were actually removed.
    pub deleted: usize,
    /// Entries written (inserted or overwritten).
    pub updated: usize,
}

/// A single in-progress transaction.
#[derive(Debug, Clone, Default)]
pub struct Transaction {
    /// Keys whose committed entry is removed on commit.
    keys_to_delete: Set<Id>,

    /// Pending inserts and overwrites.
    keys_to_update: HashMap<Id, String>,
}


impl Transaction {
    /// Creates a new, empty transaction.
    pub fn new() -> Self {
        Self {
            keys_to_delete: Set::new(),
            keys_to_update: HashMap::new(),
        }
    }

    /// Records a pending write, cancelling any pending delete of `id`.
    ///
    /// # Example
    /// ```
    /// use txkv::Transaction;
    /// let mut tx = Transaction::new();
    /// tx.delete(1);
    /// tx.set(1, "back".into());
    /// assert!(!tx.is_deleted(1));
    /// assert_eq!(tx.pending_value(1), Some("back"));
    /// ```
    pub fn set(&mut self, id: Id, value: String) {
        self.keys_to_delete.remove(&id);
        self.keys_to_update.insert(id, value);
    }

    /// Records a pending delete, dropping any pending write of `id`.
    ///
    /// The key does not need to exist in committed storage.
    pub fn delete(&mut self, id: Id) {
        self.keys_to_update.remove(&id);
        self.keys_to_delete.insert(id);
    }

    /// Records the deletion of every key whose visible value is `value`.
    ///
    /// Pending writes of `value` are dropped rather than marked for
    /// deletion, so those keys fall back to their committed value. Then
    /// each committed entry equal to `value` is marked for deletion unless
    /// the transaction has since written something else to it.
    pub fn delete_by_value(&mut self, value: &str, storage: &HashMap<Id, String>) {
        self.keys_to_update.retain(|_, pending| pending != value);

        // Any update left in the map now holds a different value.
        for (id, committed) in storage {
            if committed == value && !self.keys_to_update.contains_key(id) {
                self.keys_to_delete.insert(*id);
            }
        }
    }

    /// Returns `true` if `id` is pending deletion.
    pub fn is_deleted(&self, id: Id) -> bool {
        self.keys_to_delete.contains(&id)
    }

    /// Returns the pending value for `id`, if one was written.
    pub fn pending_value(&self, id: Id) -> Option<&str> {
        self.keys_to_update.get(&id).map(String::as_str)
    }

    /// Keys pending deletion.
    pub fn pending_deletes(&self) -> &Set<Id> {
        &self.keys_to_delete
    }

    /// Pending inserts and overwrites.
    pub fn pending_updates(&self) -> &HashMap<Id, String> {
        &self.keys_to_update
    }

    /// Applies the transaction to `storage`: deletes first, then writes.
    ///
    /// Deleting a key that storage does not hold is ignored.
    pub fn commit(self, storage: &mut HashMap<Id, String>) -> CommitStats {
        let mut stats = CommitStats::default();

        for id in &self.keys_to_delete {
            if storage.remove(id).is_some() {
                stats.deleted += 1;
            }
        }

        stats.updated = self.keys_to_update.len();
        storage.extend(self.keys_to_update);

        stats
    }

    /// Returns the number of pending changes (writes plus deletes).
    pub fn pending_count(&self) -> usize {
        self.keys_to_update.len() + self.keys_to_delete.len()
    }

    /// Returns `true` if the transaction currently has no changes.
    pub fn is_empty(&self) -> bool {
        self.keys_to_update.is_empty() && self.keys_to_delete.is_empty()
    }
}
