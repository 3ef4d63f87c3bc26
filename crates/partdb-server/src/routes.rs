//! Route definitions for the gateway.

use axum::middleware;
use axum::routing::get;
use axum::Router;

use crate::auth::auth_middleware;
use crate::handlers;
use crate::state::AppState;

/// Build the router: two export routes plus the landing page, all
/// behind the Basic-Auth middleware. Unmatched paths fall through to
/// the landing page. Non-GET methods on the export routes answer 405.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/parts.csv",
            get(handlers::parts_csv).fallback(handlers::method_not_allowed),
        )
        .route(
            "/locations.csv",
            get(handlers::locations_csv).fallback(handlers::method_not_allowed),
        )
        .route("/", get(handlers::index))
        .fallback(handlers::index)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .with_state(state)
}
