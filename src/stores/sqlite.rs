//! Implements a SQLite backed transaction store.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    models::{Transaction, TransactionBuilder, TransactionId},
    stores::TransactionStore,
};

/// Stores transactions in a SQLite database.
///
/// The store holds a shared handle to the application's single long-lived
/// connection. Each operation locks the connection for the duration of one
/// logical store call, so the write-then-re-read of [TransactionStore::create]
/// and [TransactionStore::replace] cannot interleave with a concurrent delete.
#[derive(Debug, Clone)]
pub struct SqliteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|_| Error::DatabaseLock)
    }

    fn map_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
        Ok(Transaction {
            id: row.get(0)?,
            amount: row.get(1)?,
            description: row.get(2)?,
            date: row.get(3)?,
            category: row.get(4)?,
        })
    }
}

impl TransactionStore for SqliteTransactionStore {
    /// Create a new transaction in the database.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn create(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        let connection = self.connection()?;

        let transaction = connection
            .prepare(
                "INSERT INTO \"transaction\" (amount, description, date, category)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING id, amount, description, date, category",
            )?
            .query_row(
                (
                    builder.amount,
                    builder.description,
                    builder.date,
                    builder.category,
                ),
                Self::map_row,
            )?;

        Ok(transaction)
    }

    /// Retrieve a transaction in the database by its `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a stored transaction,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        let transaction = self
            .connection()?
            .prepare(
                "SELECT id, amount, description, date, category
                 FROM \"transaction\" WHERE id = :id",
            )?
            .query_row(&[(":id", &id)], Self::map_row)?;

        Ok(transaction)
    }

    /// Retrieve all transactions, most recent first.
    ///
    /// Timestamps are stored in a fixed-width UTC text format, so ordering on
    /// the raw column text is chronological. Ties on the same timestamp are
    /// broken by descending ID.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is a SQL error.
    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        self.connection()?
            .prepare(
                "SELECT id, amount, description, date, category
                 FROM \"transaction\" ORDER BY date DESC, id DESC",
            )?
            .query_map((), Self::map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
            .collect()
    }

    /// Replace the four business fields of the transaction `id`, then re-read
    /// and return the stored record.
    ///
    /// Both statements run under a single lock hold, so the re-read cannot
    /// observe a concurrent delete.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a stored transaction,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn replace(
        &mut self,
        id: TransactionId,
        builder: TransactionBuilder,
    ) -> Result<Transaction, Error> {
        let connection = self.connection()?;

        let rows_affected = connection.execute(
            "UPDATE \"transaction\"
             SET amount = ?1, description = ?2, date = ?3, category = ?4
             WHERE id = ?5",
            (
                builder.amount,
                builder.description,
                builder.date,
                builder.category,
                id,
            ),
        )?;

        if rows_affected == 0 {
            return Err(Error::NotFound);
        }

        let transaction = connection
            .prepare(
                "SELECT id, amount, description, date, category
                 FROM \"transaction\" WHERE id = :id",
            )?
            .query_row(&[(":id", &id)], Self::map_row)?;

        Ok(transaction)
    }

    /// Delete the transaction `id` from the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a stored transaction,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn delete(&mut self, id: TransactionId) -> Result<(), Error> {
        let rows_affected = self
            .connection()?
            .execute("DELETE FROM \"transaction\" WHERE id = :id", &[(":id", &id)])?;

        if rows_affected == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }

    /// The number of transactions in the database.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is a SQL error.
    fn count(&self) -> Result<usize, Error> {
        let count = self.connection()?.query_row(
            "SELECT COUNT(*) FROM \"transaction\"",
            (),
            |row| row.get::<_, i64>(0),
        )?;

        Ok(count as usize)
    }
}
