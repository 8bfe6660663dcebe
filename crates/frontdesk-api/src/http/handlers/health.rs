//! Health endpoint.
//!
//! GET /health - Side-effect-free reachability check of the store plus a
//! status summary. Returns 200 iff the store answers at call time,
//! regardless of completion-feature state.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use frontdesk_core::repository::ExchangeRepository;

use crate::state::AppState;

/// GET /health - Store reachability plus configuration summary.
pub async fn health(State(state): State<AppState>) -> Response {
    match state.exchanges.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "company": state.config.company_name,
                "businessType": state.config.business_type,
                "online": state.config.online,
                "completionEnabled": state.completion.is_some(),
            })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "health check could not reach the store");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "error",
                    "error": "Database connection failed",
                })),
            )
                .into_response()
        }
    }
}
