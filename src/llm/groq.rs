use std::time::Duration;

use reqwest::StatusCode;
use serde_json::{json, Value};
use tracing::{info, warn};

use super::interface::{CompletionBackend, ModelError};
use crate::config::ModelConfig;

/// Sampling temperature is pinned so identical prompts produce minimally
/// random output.
const TEMPERATURE: f32 = 0.0;

const RETRY_PAUSE: Duration = Duration::from_millis(500);

/// Client for Groq's OpenAI-compatible chat completion API, bound to one
/// credential and model at construction time.
pub struct GroqClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GroqClient {
    pub fn new(api_key: &str, config: &ModelConfig) -> Result<Self, ModelError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ModelError::Network(e.to_string()))?;

        info!(
            "Initialized GroqClient: model={}, base_url={}",
            config.model, config.base_url
        );
        Ok(Self {
            client,
            api_key: api_key.to_string(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn send(&self, body: &Value) -> Result<reqwest::Response, reqwest::Error> {
        let url = format!("{}/chat/completions", self.base_url);
        self.client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
    }
}

#[async_trait::async_trait]
impl CompletionBackend for GroqClient {
    async fn complete(&self, prompt: &str) -> Result<String, ModelError> {
        let body = json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
            "temperature": TEMPERATURE,
        });

        // One retry, transient transport errors only.
        let response = match self.send(&body).await {
            Ok(response) => response,
            Err(e) if is_transient(&e) => {
                warn!("transient network error, retrying once: {}", e);
                tokio::time::sleep(RETRY_PAUSE).await;
                self.send(&body).await.map_err(network_error)?
            }
            Err(e) => return Err(network_error(e)),
        };

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(classify_status(status, detail));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| ModelError::Service(format!("malformed response body: {e}")))?;

        extract_content(&payload).ok_or(ModelError::EmptyResponse)
    }
}

fn network_error(e: reqwest::Error) -> ModelError {
    ModelError::Network(e.to_string())
}

fn is_transient(e: &reqwest::Error) -> bool {
    e.is_timeout() || e.is_connect()
}

fn classify_status(status: StatusCode, detail: String) -> ModelError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ModelError::InvalidCredential,
        StatusCode::TOO_MANY_REQUESTS => ModelError::RateLimited,
        _ => ModelError::Service(format!("{} -> {}", status, detail)),
    }
}

/// Pull `choices[0].message.content` out of a chat completion payload,
/// treating blank text the same as absent text.
fn extract_content(payload: &Value) -> Option<String> {
    let content = payload
        .get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()?;
    if content.trim().is_empty() {
        None
    } else {
        Some(content.to_string())
    }
}
