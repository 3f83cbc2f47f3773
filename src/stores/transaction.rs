//! Defines the transaction store trait.

use crate::{
    Error,
    models::{Transaction, TransactionBuilder, TransactionId},
};

/// Handles the creation, retrieval, replacement and deletion of transactions.
///
/// Implementations must be safe to share across overlapping requests: the
/// router clones the store into each handler invocation.
pub trait TransactionStore {
    /// Create a new transaction in the store.
    ///
    /// Returns the stored record as re-read after the insert, including the
    /// store-assigned ID.
    fn create(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error>;

    /// Retrieve a transaction from the store by its `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a stored
    /// transaction.
    fn get(&self, id: TransactionId) -> Result<Transaction, Error>;

    /// Retrieve all transactions ordered by date, most recent first.
    ///
    /// Transactions on the same date are ordered by descending ID so the
    /// ordering is stable across calls.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Replace the four business fields of the transaction `id` in place.
    ///
    /// The ID is unchanged. Returns the record as re-read from the store
    /// after the write, so the response reflects store-side normalization
    /// rather than echoing the caller's input.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a stored
    /// transaction. Updates never create records.
    fn replace(&mut self, id: TransactionId, builder: TransactionBuilder)
    -> Result<Transaction, Error>;

    /// Delete the transaction `id` from the store.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a stored
    /// transaction.
    fn delete(&mut self, id: TransactionId) -> Result<(), Error>;

    /// The number of transactions in the store.
    fn count(&self) -> Result<usize, Error>;
}
