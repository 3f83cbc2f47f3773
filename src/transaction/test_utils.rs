//! Helpers shared by the endpoint tests.

use std::sync::{Arc, Mutex};

use axum_test::TestServer;
use rusqlite::Connection;
use serde_json::{Value, json};

use crate::{AppState, build_router, initialize_db, stores::SqliteTransactionStore};

/// Create a test server backed by a fresh in-memory database.
pub fn new_test_server() -> TestServer {
    let connection = Connection::open_in_memory().expect("Could not open database in memory.");
    initialize_db(&connection).expect("Could not initialize database.");

    let state = AppState::new(SqliteTransactionStore::new(Arc::new(Mutex::new(connection))));

    TestServer::new(build_router(state))
}

/// A complete JSON request body for creating or updating a transaction.
pub fn transaction_body(amount: f64, description: &str, date: &str, category: &str) -> Value {
    json!({
        "amount": amount,
        "description": description,
        "date": date,
        "category": category,
    })
}
