use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers;

/// All application routes.
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Sheet imports
        .route("/api/import/kpi", post(handlers::import::import_kpi))
        .route("/api/import/sales", post(handlers::import::import_sales))
        // Stored periods
        .route("/api/periods", get(handlers::periods::list_all))
        // Commission resolution and overrides
        .route(
            "/api/commission/resolve",
            get(handlers::commission::resolve),
        )
        .route(
            "/api/commission/rates",
            get(handlers::commission::list_rates),
        )
        .route(
            "/api/commission/overrides",
            get(handlers::commission::list_overrides)
                .put(handlers::commission::upsert_override),
        )
        .route(
            "/api/commission/overrides/:key",
            delete(handlers::commission::delete_override),
        )
        // Per-agent sales
        .route("/api/sales/:agent_id", get(handlers::sales::get_aggregated))
        .route("/api/sales/:agent_id/rows", get(handlers::sales::get_rows))
        // WCA gates and merged KPI
        .route("/api/wca", get(handlers::wca::list_all))
        .route("/api/wca/:agent_id", get(handlers::wca::get_by_agent))
        .route("/api/kpi/merged", get(handlers::wca::merged_kpi))
        // Coaching directive
        .route(
            "/api/coaching/:agent_id",
            post(handlers::coaching::get_directive),
        )
}
