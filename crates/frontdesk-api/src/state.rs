//! Application state wiring the gateway's collaborators together.
//!
//! AppState holds the immutable configuration, the selected completion
//! client, and the exchange repository. All three are constructed once at
//! startup and injected into the router -- handlers never read ambient
//! global state.

use std::sync::Arc;

use frontdesk_core::completion::BoxCompletionClient;
use frontdesk_infra::config::{API_KEY_ENV, provider_api_key};
use frontdesk_infra::llm::create_client;
use frontdesk_infra::sqlite::exchange::SqliteExchangeRepository;
use frontdesk_infra::sqlite::pool::{DatabasePool, resolve_database_url};
use frontdesk_types::config::RuntimeConfig;

/// Shared application state for the HTTP gateway.
///
/// `completion` is `None` when the feature is disabled by configuration or
/// when no provider API key was available at startup; the chat handler then
/// answers feature-unavailable without any downstream call.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RuntimeConfig>,
    pub completion: Option<Arc<BoxCompletionClient>>,
    pub exchanges: SqliteExchangeRepository,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: connect to the store, select the
    /// completion client variant.
    pub async fn init(config: RuntimeConfig) -> anyhow::Result<Self> {
        let db_url = resolve_database_url();
        let db_pool = DatabasePool::new(&db_url).await?;
        let exchanges = SqliteExchangeRepository::new(db_pool.clone());

        let completion = if config.completion_enabled {
            match provider_api_key() {
                Some(api_key) => {
                    let client = create_client(&config, api_key);
                    tracing::info!(client = client.name(), model = %config.completion_model, "completion client ready");
                    Some(Arc::new(client))
                }
                None => {
                    tracing::warn!(
                        "{API_KEY_ENV} is not set; completion feature disabled at runtime"
                    );
                    None
                }
            }
        } else {
            None
        };

        Ok(Self {
            config: Arc::new(config),
            completion,
            exchanges,
            db_pool,
        })
    }
}
