use crate::auth::AuthError;
use crate::errors::AppError;
use crate::models::{
    ApiResponse, BranchReport, BranchReportRequest, CategoryDetails, CategoryDetailsRequest,
    ConversationFilter, ConversationReport, ConversationReportRequest, DailyReport,
    DailyReportRequest, DashboardSnapshot, DashboardStatsRequest, DocumentQuery, HealthResponse,
    LoginRequest, LoginResponse, UiConfigResponse,
};
use crate::state::AppState;
use crate::ui::render_index;
use crate::upstream::UpstreamError;
use crate::validation::{
    self, MAX_BRANCH_RANGE_DAYS, parse_body, parse_bounded_range, parse_date, parse_range,
};
use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use serde_json::Value;
use tracing::{debug, info, warn};

const LOGIN_USERNAME: &str = "admin";
const LOGIN_PASSWORD: &str = "admin123";

type ApiResult<T> = Result<Json<ApiResponse<T>>, AppError>;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.config.title, &state.config.subtitle))
}

pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        source: state.source.name().to_string(),
    }))
}

pub async fn ui_config(State(state): State<AppState>) -> Json<ApiResponse<UiConfigResponse>> {
    Json(ApiResponse::ok(UiConfigResponse {
        title: state.config.title.clone(),
        subtitle: state.config.subtitle.clone(),
    }))
}

pub async fn dashboard_stats(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<DashboardSnapshot> {
    let request: DashboardStatsRequest = parse_body(&body, &validation::DASHBOARD_STATS)?;
    let range = parse_range(&request.start_date, &request.end_date)?;

    let snapshot = state
        .source
        .dashboard_stats(&range)
        .await
        .map_err(|err| AppError::internal("Internal server error", err))?;
    Ok(Json(ApiResponse::ok(snapshot)))
}

pub async fn category_details(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<CategoryDetails> {
    let request: CategoryDetailsRequest = parse_body(&body, &validation::CATEGORY_DETAILS)?;

    let details = state
        .source
        .category_details(&request.category)
        .await
        .map_err(|err| AppError::internal("Internal server error", err))?;
    Ok(Json(ApiResponse::ok(details)))
}

pub async fn branch_report(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<BranchReport> {
    let request: BranchReportRequest = parse_body(&body, &validation::BRANCH_REPORT)?;
    let range =
        parse_bounded_range(&request.start_date, &request.end_date, MAX_BRANCH_RANGE_DAYS)?;
    debug!(branches = request.branches.len(), "building branch report");

    let report = state
        .source
        .branch_report(&request.branches, &range)
        .await
        .map_err(|err| AppError::internal("Failed to generate branch report", err))?;
    Ok(Json(ApiResponse::ok(report)))
}

pub async fn conversation_report(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<ConversationReport> {
    let request: ConversationReportRequest =
        parse_body(&body, &validation::CONVERSATION_REPORT)?;
    let date = parse_date("date", &request.date)?;
    let filter = ConversationFilter::new(request.category, request.subcategory);

    let report = state
        .source
        .conversation_report(date, &filter)
        .await
        .map_err(|err| AppError::internal("Failed to generate conversation report", err))?;
    Ok(Json(ApiResponse::ok(report)))
}

pub async fn daily_report(State(state): State<AppState>, body: Bytes) -> ApiResult<DailyReport> {
    let request: DailyReportRequest = parse_body(&body, &validation::DAILY_REPORT)?;
    let date = parse_date("date", &request.date)?;

    let report = state
        .source
        .daily_report(date)
        .await
        .map_err(|err| AppError::internal("Failed to generate daily report", err))?;
    Ok(Json(ApiResponse::ok(report)))
}

pub async fn login(State(state): State<AppState>, body: Bytes) -> ApiResult<LoginResponse> {
    let request: LoginRequest = parse_body(&body, &validation::LOGIN)?;

    if request.username != LOGIN_USERNAME || request.password != LOGIN_PASSWORD {
        return Err(AppError::authentication("Invalid credentials"));
    }
    info!(username = %request.username, "dashboard login");

    // Warm the upstream token in the background; the login answer does not wait for it.
    let tokens = state.tokens.clone();
    tokio::spawn(async move {
        if let Err(err) = tokens.get_token().await {
            warn!("upstream token warm-up failed: {err}");
        }
    });

    Ok(Json(ApiResponse::ok(LoginResponse {
        message: "Login successful".to_string(),
    })))
}

/// Proxies one case-management document. The upstream body is returned
/// as-is on success; failures are reduced to a generic message.
pub async fn fetch_document(
    State(state): State<AppState>,
    Query(query): Query<DocumentQuery>,
) -> Result<Json<Value>, AppError> {
    let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());
    let (Some(tenant_id), Some(document_key)) =
        (non_empty(query.tenant_id), non_empty(query.document_key))
    else {
        return Err(AppError::validation("Missing required parameters"));
    };

    let token = state.tokens.get_token().await.map_err(|err| match err {
        AuthError::MissingToken => {
            warn!("upstream login returned no token");
            AppError::authentication("Failed to authenticate")
        }
        err => AppError::internal("Internal server error", err),
    })?;

    match state.documents.fetch(&tenant_id, &document_key, &token).await {
        Ok(document) => Ok(Json(document)),
        Err(UpstreamError::Status(status)) => {
            warn!(status = status.as_u16(), %tenant_id, %document_key, "upstream fetch rejected");
            if status == StatusCode::UNAUTHORIZED {
                state.tokens.invalidate().await;
            }
            Err(AppError::upstream(status, "Failed to fetch data from LP CCS"))
        }
        Err(err) => Err(AppError::internal("Internal server error", err)),
    }
}
