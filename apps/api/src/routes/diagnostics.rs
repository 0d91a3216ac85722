use std::time::Duration;

use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::info;

use crate::llm_client::LlmError;
use crate::state::AppState;

const CHECK_TIMEOUT: Duration = Duration::from_secs(10);

/// GET /api/v1/diagnostics/upstream
///
/// Checks that the AI service is reachable with the current key.
/// Always answers 200; the outcome is in the body. The key itself is never echoed.
pub async fn handle_upstream_check(State(state): State<AppState>) -> Json<Value> {
    let has_key = state.llm.has_credential();

    match state.llm.check_upstream(CHECK_TIMEOUT).await {
        Ok(check) => {
            info!(
                "Upstream check succeeded: {} models in {}ms",
                check.models_count, check.duration_ms
            );
            Json(json!({
                "success": true,
                "has_key": has_key,
                "models_count": check.models_count,
                "duration_ms": check.duration_ms,
            }))
        }
        Err(e) => {
            let upstream_status = match &e {
                LlmError::UpstreamRejected { status, .. } => Some(*status),
                _ => None,
            };
            Json(json!({
                "success": false,
                "has_key": has_key,
                "error": {
                    "code": e.code(),
                    "message": e.to_string(),
                    "upstream_status": upstream_status,
                },
            }))
        }
    }
}
