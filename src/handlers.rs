use crate::agencies::{get_agency_config, AgencyBranding};
use crate::config::Config;
use crate::errors::AppError;
use crate::models::SubmitResponse;
use crate::submission::process_submission;
use crate::webhook::WebhookTransport;
use crate::zones::zone_names;
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Outbound channel for finished leads.
    pub transport: Arc<dyn WebhookTransport>,
}

/// Query parameters selecting the agency.
#[derive(Debug, Default, Deserialize)]
pub struct AgencyQuery {
    pub agency: Option<String>,
}

/// Public routes of the service, without the rate limiting and body size
/// layers added in `main`.
pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/submit", post(submit_lead))
        .route("/api/agency", get(agency_branding))
        .route("/api/zones", get(list_zones))
        .with_state(state)
}

/// Health check endpoint.
///
/// # Returns
///
/// * `(StatusCode, Json<serde_json::Value>)` - HTTP 200 OK with health status JSON.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "valuation-lead-api",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// POST /api/submit
///
/// Scores a completed wizard, forwards the lead to the agency webhook and
/// returns the result shown on the last wizard step.
///
/// The body is taken as raw bytes so malformed JSON gets the same
/// `{ok: false, error}` shape as validation failures.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `query` - Optional `agency` selector.
/// * `body` - Raw JSON body with the wizard answers.
///
/// # Returns
///
/// * `Result<Json<SubmitResponse>, AppError>` - The scored result or a client error.
pub async fn submit_lead(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AgencyQuery>,
    body: Bytes,
) -> Result<Json<SubmitResponse>, AppError> {
    tracing::info!(
        "POST /api/submit - agency={:?}, {} bytes",
        query.agency,
        body.len()
    );

    let response = process_submission(
        &state.config,
        state.transport.as_ref(),
        query.agency.as_deref(),
        &body,
    )
    .await?;

    Ok(Json(response))
}

/// GET /api/agency
///
/// Branding for the wizard header (name, colour, contact channel).
pub async fn agency_branding(Query(query): Query<AgencyQuery>) -> Json<AgencyBranding> {
    Json(get_agency_config(query.agency.as_deref()).branding())
}

/// GET /api/zones
pub async fn list_zones() -> Json<serde_json::Value> {
    Json(json!({ "zones": zone_names() }))
}
