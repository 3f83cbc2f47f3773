//! Database schema initialization.

use rusqlite::Connection;

use crate::Error;

/// Create the application's tables if they do not exist.
///
/// Must be called once at process start, before the connection is shared with
/// request handlers. The schema deliberately has no constraints beyond column
/// presence: the API layer is the sole enforcement point for field validity.
///
/// # Errors
/// Returns an [Error::SqlError] if the schema could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
            id INTEGER PRIMARY KEY,
            amount REAL NOT NULL,
            description TEXT NOT NULL,
            date TEXT NOT NULL,
            category TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}
