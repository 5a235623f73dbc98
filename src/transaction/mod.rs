// =====================================================================
// File: transaction/mod.rs
//
// Description:
//   Module entry point for the transaction system. Re-exports the
//   `Transaction` overlay, which buffers uncommitted writes and
//   deletes, and the `CommitStats` summary returned when it is applied.
//
// =====================================================================
pub mod transaction;

pub use self::transaction::{CommitStats, Transaction};
