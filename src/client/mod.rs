//! Client side of `POST /generate`: prompt construction, typed decoding of
//! the upstream reply, panel state, grading and clipboard export.

pub mod clipboard;
pub mod grading;
pub mod payload;
pub mod prompt;
pub mod session;
pub mod terminal;
pub mod view;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::error::ClientError;
use crate::models::{PromptRequest, UpstreamResponse};

/// Anything that can answer a prompt with the raw upstream JSON.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Value, ClientError>;
}

/// Talks to a running proxy over HTTP.
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpBackend {
    pub fn new(server: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/generate", server.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn generate(&self, prompt: &str) -> Result<Value, ClientError> {
        let res = self
            .client
            .post(&self.endpoint)
            .json(&PromptRequest {
                prompt: Some(prompt.to_string()),
            })
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(ClientError::Status(res.status().as_u16()));
        }
        Ok(res.json::<Value>().await?)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ShapeError {
    #[error("unexpected response shape: {0}")]
    Shape(String),
    #[error("response has no candidates")]
    NoCandidates,
    #[error("first candidate has no parts")]
    NoParts,
}

/// Decode `candidates[0].content.parts[0].text` from an upstream reply.
pub fn extract_text(data: &Value) -> Result<String, ShapeError> {
    let parsed = UpstreamResponse::deserialize(data).map_err(|e| ShapeError::Shape(e.to_string()))?;
    let candidate = parsed.candidates.into_iter().next().ok_or(ShapeError::NoCandidates)?;
    let part = candidate.content.parts.into_iter().next().ok_or(ShapeError::NoParts)?;
    Ok(part.text)
}

/// Same as [`extract_text`], with any shape problem read as empty text.
pub fn extract_text_or_empty(data: &Value) -> String {
    extract_text(data).unwrap_or_else(|e| {
        tracing::debug!(reason = %e, "no text in upstream reply");
        String::new()
    })
}
