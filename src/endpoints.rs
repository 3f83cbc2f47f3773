//! The API endpoint URIs.

/// The collection resource for transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The item resource for a single transaction.
pub const TRANSACTION: &str = "/transactions/{transaction_id}";
/// The resource reporting aggregate figures for the dashboard.
pub const SUMMARY: &str = "/summary";
