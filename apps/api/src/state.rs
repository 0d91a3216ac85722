use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::wins::store::WinStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable win store. Default: PgWinStore.
    pub store: Arc<dyn WinStore>,
    pub llm: LlmClient,
}
