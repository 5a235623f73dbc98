// =====================================================================
// File: set/mod.rs
//
//! The `set` module provides [`Set`], a small hash-backed collection of
//! unique elements. The transaction layer uses it to track the keys
//! that are pending deletion.
//!
//! Structure:
//! - `set.rs`   : Defines the [`Set`] structure and its methods.
//! - `tests.rs` : Unit tests for membership and housekeeping behavior.
// =====================================================================

pub mod set;

pub use self::set::Set;

#[cfg(test)]
mod tests;
