//! The endpoint for listing all transactions.

use axum::{Json, extract::State};

use crate::{AppState, Error, models::Transaction, stores::TransactionStore};

/// A route handler for listing all transactions, most recent first.
///
/// Always succeeds with an array, which is empty when no transactions exist.
pub async fn get_transactions_endpoint<T>(
    State(state): State<AppState<T>>,
) -> Result<Json<Vec<Transaction>>, Error>
where
    T: TransactionStore + Clone + Send + Sync,
{
    let transactions = state.transaction_store.get_all()?;

    Ok(Json(transactions))
}
