//! The endpoint for replacing an existing transaction.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState, Error,
    models::Transaction,
    stores::TransactionStore,
    transaction::{TransactionForm, parse_transaction_id},
};

/// A route handler for replacing the four business fields of a transaction.
///
/// Partial updates are not supported: the body must carry the full record,
/// validated the same way as a create. The response is the record as re-read
/// from the store after the write, so it reflects store-side normalization
/// rather than echoing the request body. Updating an ID that does not exist
/// is reported as not-found, never a silent no-op.
pub async fn update_transaction_endpoint<T>(
    State(mut state): State<AppState<T>>,
    Path(transaction_id): Path<String>,
    Json(form): Json<TransactionForm>,
) -> Result<Json<Transaction>, Error>
where
    T: TransactionStore + Clone + Send + Sync,
{
    let builder = form.validate()?;
    let id = parse_transaction_id(&transaction_id)?;
    let transaction = state.transaction_store.replace(id, builder)?;

    Ok(Json(transaction))
}
