//! Implements a struct that holds the state of the REST server.

use std::marker::{Send, Sync};

use crate::stores::TransactionStore;

/// The state of the REST server.
///
/// Cloned into each request handler. Clones share the same underlying
/// database connection, which is owned by the store and initialized once at
/// process start.
#[derive(Debug, Clone)]
pub struct AppState<T>
where
    T: TransactionStore + Send + Sync,
{
    /// The store for managing [transactions](crate::models::Transaction).
    pub transaction_store: T,
}

impl<T> AppState<T>
where
    T: TransactionStore + Send + Sync,
{
    /// Create a new [AppState].
    pub fn new(transaction_store: T) -> Self {
        Self { transaction_store }
    }
}
