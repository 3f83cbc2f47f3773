//! The transaction model, the sole entity of the application.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Alias for the integer type used for mapping to database IDs.
pub type TransactionId = i64;

/// A single recorded expense.
///
/// Transactions are created through [crate::stores::TransactionStore], which
/// assigns the ID. The ID is immutable thereafter: updates replace the four
/// business fields in place and deletes remove the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the store at creation.
    pub id: TransactionId,
    /// The amount of money spent, in currency units. Always positive.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened.
    ///
    /// Stored as a full UTC timestamp but compared and displayed by date.
    #[serde(with = "time::serde::iso8601")]
    pub date: OffsetDateTime,
    /// The category label for the transaction, e.g. "Food".
    pub category: String,
}

/// The four business fields of a [Transaction], without an ID.
///
/// Used for both creating a transaction (the store assigns the ID) and
/// replacing an existing one (the ID comes from the request path). Partial
/// records do not exist: validation at the API boundary guarantees all four
/// fields are present before a builder is constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBuilder {
    /// The amount of money spent. Positive and finite.
    pub amount: f64,
    /// A text description of what the transaction was for. Non-empty.
    pub description: String,
    /// When the transaction happened, normalized to UTC.
    pub date: OffsetDateTime,
    /// The category label for the transaction. Non-empty.
    pub category: String,
}
