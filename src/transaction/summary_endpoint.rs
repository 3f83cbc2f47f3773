//! The endpoint reporting aggregate figures for the dashboard.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{
    AppState, Error,
    aggregation::{
        self, CategoryTotal, MonthlyTotal, category_totals, month_over_month_change,
        monthly_totals, total_expenses,
    },
    models::Transaction,
    stores::TransactionStore,
};

/// The aggregate figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The sum of all transaction amounts.
    pub total_expenses: f64,
    /// Percent change of the current month's total versus the previous
    /// month's. Zero when the previous month has no transactions.
    pub monthly_change_percent: f64,
    /// Per-month totals in first-seen (reverse-chronological) order.
    pub monthly_totals: Vec<MonthlyTotal>,
    /// Per-category totals in first-seen order.
    pub category_totals: Vec<CategoryTotal>,
    /// The three most recent transactions.
    pub recent_transactions: Vec<Transaction>,
}

/// A route handler for the summary resource.
///
/// Fetches the full transaction list once and folds it; "now" is taken from
/// the wall clock to decide which month is current.
pub async fn get_summary_endpoint<T>(
    State(state): State<AppState<T>>,
) -> Result<Json<Summary>, Error>
where
    T: TransactionStore + Clone + Send + Sync,
{
    let transactions = state.transaction_store.get_all()?;
    let today = OffsetDateTime::now_utc().date();

    Ok(Json(summarize(&transactions, today)))
}

/// Fold a date-descending transaction list into a [Summary].
pub fn summarize(transactions: &[Transaction], today: Date) -> Summary {
    Summary {
        total_expenses: total_expenses(transactions),
        monthly_change_percent: month_over_month_change(transactions, today),
        monthly_totals: monthly_totals(transactions),
        category_totals: category_totals(transactions),
        recent_transactions: aggregation::recent_transactions(transactions).to_vec(),
    }
}
