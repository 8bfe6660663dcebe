//! Chat endpoint.
//!
//! POST /chat - Validate the message, forward it to the completion client,
//! record the exchange, answer `{"reply": ...}`.

use std::net::SocketAddr;

use axum::Json;
use axum::extract::{ConnectInfo, State};
use serde::{Deserialize, Serialize};

use frontdesk_core::repository::ExchangeRepository;
use frontdesk_types::exchange::ChatExchange;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for POST /chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Response body for a successful chat call.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

/// POST /chat - Forward one user message to the completion provider.
///
/// Flow: feature gate, validation, synchronous completion call, then the
/// exchange is handed to the logger. A logger failure is swallowed after an
/// operator-facing warning and the reply is returned regardless. No exchange
/// is recorded when the completion fails.
pub async fn chat(
    State(state): State<AppState>,
    ConnectInfo(requester): ConnectInfo<SocketAddr>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    let Some(client) = state.completion.as_ref() else {
        return Err(AppError::FeatureUnavailable);
    };

    let message = body.message.as_deref().unwrap_or("").trim();
    if message.is_empty() {
        return Err(AppError::Validation("Message is required".to_string()));
    }

    let reply = client.complete(message).await?;

    let exchange = ChatExchange::new(requester.ip().to_string(), message, reply.clone());
    if let Err(err) = state.exchanges.record(&exchange).await {
        tracing::warn!(error = %err, "failed to record chat exchange");
    }

    Ok(Json(ChatReply { reply }))
}
