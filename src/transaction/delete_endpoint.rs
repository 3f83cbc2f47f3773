//! The endpoint for deleting a transaction.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::{AppState, Error, stores::TransactionStore, transaction::parse_transaction_id};

/// A route handler for deleting a transaction by its ID.
///
/// Deleting an ID that does not exist is reported as not-found rather than a
/// silent success, so clients can detect double deletes and stale IDs.
pub async fn delete_transaction_endpoint<T>(
    State(mut state): State<AppState<T>>,
    Path(transaction_id): Path<String>,
) -> Result<Json<Value>, Error>
where
    T: TransactionStore + Clone + Send + Sync,
{
    let id = parse_transaction_id(&transaction_id)?;
    state.transaction_store.delete(id)?;

    Ok(Json(json!({ "success": true })))
}
