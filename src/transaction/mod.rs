//! The HTTP endpoints for the transaction resource.
//!
//! The collection resource supports listing and creating transactions, the
//! item resource supports full-record updates and deletes, and the summary
//! resource reports the aggregate figures for the dashboard.

mod create_endpoint;
mod delete_endpoint;
mod form;
mod list_endpoint;
mod summary_endpoint;
#[cfg(test)]
mod test_utils;
mod update_endpoint;

pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use form::TransactionForm;
pub use list_endpoint::get_transactions_endpoint;
pub use summary_endpoint::{Summary, get_summary_endpoint, summarize};
pub use update_endpoint::update_transaction_endpoint;

use crate::{Error, models::TransactionId};

/// Parse a path segment into a [TransactionId].
///
/// A segment that does not parse is a malformed identifier, reported
/// separately from not-found so the client can tell a bad URL apart from a
/// deleted record.
fn parse_transaction_id(text: &str) -> Result<TransactionId, Error> {
    text.parse()
        .map_err(|_| Error::InvalidId(text.to_owned()))
}
