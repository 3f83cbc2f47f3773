//! The endpoint for creating a new transaction.

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState, Error, models::Transaction, stores::TransactionStore, transaction::TransactionForm,
};

/// A route handler for creating a new transaction.
///
/// Validates the candidate record before touching the store: a rejected
/// request never mutates anything. On success the response carries the record
/// as stored, including the store-assigned ID.
pub async fn create_transaction_endpoint<T>(
    State(mut state): State<AppState<T>>,
    Json(form): Json<TransactionForm>,
) -> Result<(StatusCode, Json<Transaction>), Error>
where
    T: TransactionStore + Clone + Send + Sync,
{
    let builder = form.validate()?;
    let transaction = state.transaction_store.create(builder)?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use time::macros::datetime;

    use crate::{
        endpoints,
        models::Transaction,
        transaction::test_utils::{new_test_server, transaction_body},
    };

    #[tokio::test]
    async fn create_returns_submitted_fields_and_an_id() {
        let server = new_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&transaction_body(12.5, "Lunch", "2024-01-05", "Food"))
            .await;

        response.assert_status(StatusCode::CREATED);
        let transaction = response.json::<Transaction>();
        assert_eq!(transaction.amount, 12.5);
        assert_eq!(transaction.description, "Lunch");
        assert_eq!(transaction.date, datetime!(2024-01-05 0:00 UTC));
        assert_eq!(transaction.category, "Food");
    }

    #[tokio::test]
    async fn created_ids_are_unique() {
        let server = new_test_server();
        let body = transaction_body(12.5, "Lunch", "2024-01-05", "Food");

        let first = server
            .post(endpoints::TRANSACTIONS)
            .json(&body)
            .await
            .json::<Transaction>();
        let second = server
            .post(endpoints::TRANSACTIONS)
            .json(&body)
            .await
            .json::<Transaction>();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn create_accepts_iso_timestamp_dates() {
        let server = new_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&transaction_body(
                12.5,
                "Lunch",
                "2024-01-05T13:45:00Z",
                "Food",
            ))
            .await;

        response.assert_status(StatusCode::CREATED);
        let transaction = response.json::<Transaction>();
        assert_eq!(transaction.date, datetime!(2024-01-05 13:45 UTC));
    }

    #[tokio::test]
    async fn create_with_a_missing_field_is_rejected_without_mutation() {
        let server = new_test_server();
        let complete = transaction_body(12.5, "Lunch", "2024-01-05", "Food");

        for field in ["amount", "description", "date", "category"] {
            let mut body = complete.clone();
            body.as_object_mut()
                .expect("body should be a JSON object")
                .remove(field);

            let response = server.post(endpoints::TRANSACTIONS).json(&body).await;

            response.assert_status(StatusCode::BAD_REQUEST);
            assert_eq!(
                response.json::<Value>(),
                json!({ "error": "Missing fields" })
            );
        }

        let transactions = server
            .get(endpoints::TRANSACTIONS)
            .await
            .json::<Vec<Transaction>>();
        assert_eq!(transactions.len(), 0);
    }

    #[tokio::test]
    async fn create_with_zero_amount_is_rejected() {
        let server = new_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&transaction_body(0.0, "Lunch", "2024-01-05", "Food"))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_with_unparseable_date_is_rejected() {
        let server = new_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&transaction_body(12.5, "Lunch", "someday", "Food"))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>(),
            json!({ "error": "Invalid date: someday" })
        );
    }
}
