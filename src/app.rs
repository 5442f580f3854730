use crate::handlers;
use crate::models::ApiResponse;
use crate::state::AppState;
use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/health", get(handlers::health))
        .route("/api/config", get(handlers::ui_config))
        .route("/api/dashboard/stats", post(handlers::dashboard_stats))
        .route("/api/dashboard/category-details", post(handlers::category_details))
        .route("/api/reports/branch", post(handlers::branch_report))
        .route("/api/reports/conversation", post(handlers::conversation_report))
        .route("/api/reports/daily", post(handlers::daily_report))
        .route("/api/lp", get(handlers::fetch_document))
        .route("/api/auth/login", post(handlers::login))
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("handler panicked: {detail}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error("Internal server error")),
    )
        .into_response()
}
