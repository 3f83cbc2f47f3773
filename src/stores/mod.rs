//! The persistence layer for transactions.
//!
//! [TransactionStore] defines the storage contract and
//! [SqliteTransactionStore] implements it over a shared SQLite connection.

mod sqlite;
mod transaction;

pub use sqlite::SqliteTransactionStore;
pub use transaction::TransactionStore;
