/// LLM Client — the single point of entry for every text-generation call in the service.
///
/// ARCHITECTURAL RULE: No other module may call the completions endpoint directly.
/// All upstream interactions MUST go through this module.
///
/// Each call is exactly one attempt raced against a caller-supplied budget.
/// There is no retry: both call sites are user-triggered and the user retries by
/// clicking again.
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod credentials;

pub use credentials::{CredentialSource, EnvCredential};

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
/// The model used for all completions.
/// Hardcoded so that polish output does not drift between deployments.
pub const MODEL: &str = "gpt-4o-mini";
pub const TEMPERATURE: f64 = 0.7;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upstream API key is not configured")]
    ConfigurationMissing,

    #[error("Request timed out after {}ms", .budget.as_millis())]
    Timeout { budget: Duration },

    #[error("Unable to reach upstream: {0}")]
    NetworkUnreachable(String),

    #[error("Network request failed: {0}")]
    Network(String),

    #[error("Upstream API error (status {status}): {message}")]
    UpstreamRejected { status: u16, message: String },

    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    #[error("Upstream returned empty content")]
    EmptyContent,
}

impl LlmError {
    /// Stable machine-readable code surfaced in error bodies.
    /// `EmptyContent` is reported under the malformed-response kind.
    pub fn code(&self) -> &'static str {
        match self {
            LlmError::InvalidInput(_) => "INVALID_INPUT",
            LlmError::ConfigurationMissing => "CONFIGURATION_MISSING",
            LlmError::Timeout { .. } => "UPSTREAM_TIMEOUT",
            LlmError::NetworkUnreachable(_) => "UPSTREAM_UNREACHABLE",
            LlmError::Network(_) => "UPSTREAM_NETWORK_ERROR",
            LlmError::UpstreamRejected { .. } => "UPSTREAM_REJECTED",
            LlmError::MalformedResponse(_) | LlmError::EmptyContent => "MALFORMED_RESPONSE",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

/// Body of a chat-completions call: a fixed system instruction plus one user prompt.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: [ChatMessage<'a>; 2],
    pub temperature: f64,
    pub max_tokens: u32,
}

impl<'a> ChatRequest<'a> {
    pub fn new(system: &'a str, prompt: &'a str, max_tokens: u32) -> Self {
        Self {
            model: MODEL,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletion {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatCompletion {
    /// Trimmed content of the first choice.
    pub fn text(&self) -> Result<String, LlmError> {
        let message = self
            .choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .ok_or_else(|| {
                LlmError::MalformedResponse("response has no choices[0].message".to_string())
            })?;

        let text = message.content.as_deref().map(str::trim).unwrap_or_default();
        if text.is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(text.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct VendorError {
    error: VendorErrorBody,
}

#[derive(Debug, Deserialize)]
struct VendorErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ModelList {
    data: Vec<serde_json::Value>,
}

/// Result of a connectivity check against the upstream.
#[derive(Debug, Clone, Serialize)]
pub struct UpstreamCheck {
    pub models_count: usize,
    pub duration_ms: u64,
}

/// The single upstream client shared by all handlers.
///
/// Holds no per-request state; concurrent calls only share the connection pool
/// inside `reqwest::Client` and the read-only credential source.
#[derive(Clone)]
pub struct LlmClient {
    http: Client,
    base_url: String,
    credentials: Arc<dyn CredentialSource>,
}

impl LlmClient {
    pub fn new(base_url: &str, credentials: Arc<dyn CredentialSource>) -> anyhow::Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("wins-api/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_http(http, base_url, credentials))
    }

    pub fn with_http(http: Client, base_url: &str, credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.credentials.api_key().is_some()
    }

    /// Sends one chat-completions request and returns the parsed body.
    ///
    /// The credential is read before anything else; when it is absent no request is made.
    pub async fn execute(
        &self,
        request: &ChatRequest<'_>,
        budget: Duration,
    ) -> Result<ChatCompletion, LlmError> {
        let api_key = self.api_key()?;
        let url = format!("{}/chat/completions", self.base_url);

        debug!(
            "Sending completion request: model={}, max_tokens={}, budget={}ms",
            request.model,
            request.max_tokens,
            budget.as_millis()
        );

        let started = Instant::now();
        let builder = self.http.post(&url).bearer_auth(api_key).json(request);
        let (status, body) = send_within(builder, budget).await?;

        if !status.is_success() {
            let message = vendor_message(&body);
            warn!("Upstream returned {}: {}", status, message);
            return Err(LlmError::UpstreamRejected {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletion = serde_json::from_str(&body).map_err(|e| {
            warn!("Upstream completion body did not parse: {e}");
            LlmError::MalformedResponse(format!("invalid completion body: {e}"))
        })?;

        match &completion.usage {
            Some(usage) => debug!(
                "Completion succeeded in {}ms: prompt_tokens={}, completion_tokens={}",
                started.elapsed().as_millis(),
                usage.prompt_tokens,
                usage.completion_tokens
            ),
            None => debug!("Completion succeeded in {}ms", started.elapsed().as_millis()),
        }

        Ok(completion)
    }

    /// Lists upstream models to confirm the key and network path work.
    pub async fn check_upstream(&self, budget: Duration) -> Result<UpstreamCheck, LlmError> {
        let api_key = self.api_key()?;
        let url = format!("{}/models", self.base_url);

        let started = Instant::now();
        let builder = self.http.get(&url).bearer_auth(api_key);
        let (status, body) = send_within(builder, budget).await?;
        let duration_ms = started.elapsed().as_millis() as u64;

        if !status.is_success() {
            return Err(LlmError::UpstreamRejected {
                status: status.as_u16(),
                message: vendor_message(&body),
            });
        }

        let models: ModelList = serde_json::from_str(&body)
            .map_err(|e| LlmError::MalformedResponse(format!("invalid model list: {e}")))?;

        Ok(UpstreamCheck {
            models_count: models.data.len(),
            duration_ms,
        })
    }

    fn api_key(&self) -> Result<String, LlmError> {
        self.credentials.api_key().ok_or_else(|| {
            warn!("Upstream call rejected: API key is not configured");
            LlmError::ConfigurationMissing
        })
    }
}

/// Sends the request and reads the whole body, racing both against `budget`.
///
/// On expiry the in-flight future is dropped, which aborts the connection.
async fn send_within(
    builder: RequestBuilder,
    budget: Duration,
) -> Result<(StatusCode, String), LlmError> {
    let call = async {
        let response = builder
            .send()
            .await
            .map_err(|e| classify_transport(e, budget))?;
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            // A rejection keeps its status even when the error body is cut short.
            Err(e) if !status.is_success() => {
                debug!("Could not read {status} error body: {e}");
                String::new()
            }
            Err(e) => return Err(classify_transport(e, budget)),
        };
        Ok::<_, LlmError>((status, body))
    };

    match tokio::time::timeout(budget, call).await {
        Ok(result) => result,
        Err(_) => {
            warn!("Upstream call timed out after {}ms", budget.as_millis());
            Err(LlmError::Timeout { budget })
        }
    }
}

/// Best-effort split of transport failures. Connection-level failures (DNS,
/// refused) are reported separately from everything else.
fn classify_transport(err: reqwest::Error, budget: Duration) -> LlmError {
    if err.is_timeout() {
        LlmError::Timeout { budget }
    } else if err.is_connect() {
        warn!("Upstream unreachable: {err}");
        LlmError::NetworkUnreachable(err.to_string())
    } else {
        warn!("Upstream request failed: {err}");
        LlmError::Network(err.to_string())
    }
}

fn vendor_message(body: &str) -> String {
    serde_json::from_str::<VendorError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| {
            let body = body.trim();
            if body.is_empty() {
                "Unknown error".to_string()
            } else {
                body.to_string()
            }
        })
}
