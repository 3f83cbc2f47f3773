//! Application router configuration.

use std::time::Duration;

use axum::{
    Router,
    extract::{MatchedPath, Request},
    routing::{get, put},
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    AppState, endpoints,
    stores::TransactionStore,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_summary_endpoint,
        get_transactions_endpoint, update_transaction_endpoint,
    },
};

/// How long a request may run before it is aborted with a timeout response.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Return a router with all the app's routes.
pub fn build_router<T>(state: AppState<T>) -> Router
where
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    let router = Router::new()
        .route(
            endpoints::TRANSACTIONS,
            get(get_transactions_endpoint::<T>).post(create_transaction_endpoint::<T>),
        )
        .route(
            endpoints::TRANSACTION,
            put(update_transaction_endpoint::<T>).delete(delete_transaction_endpoint::<T>),
        )
        .route(endpoints::SUMMARY, get(get_summary_endpoint::<T>))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .with_state(state);

    add_tracing_layer(router)
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}
