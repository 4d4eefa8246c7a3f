//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use homecare_app::ports::{
    CategoryRepository, ContactMessageRepository, PlanRepository, ServiceRepository,
    UserRepository,
};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the API routes under `/api` next to a `/health` check.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<CR, SR, PR, MR, UR>(state: AppState<CR, SR, PR, MR, UR>) -> Router
where
    CR: CategoryRepository + Send + Sync + 'static,
    SR: ServiceRepository + Send + Sync + 'static,
    PR: PlanRepository + Send + Sync + 'static,
    MR: ContactMessageRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
