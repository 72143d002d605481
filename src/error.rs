use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures of the /generate proxy. Each maps to one fixed client-facing
/// message; upstream details stay in the server log.
#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Missing prompt")]
    MissingPrompt,

    #[error("Missing GEMINI_API_KEY")]
    MissingApiKey,

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("invalid upstream url: {0}")]
    BadUpstreamUrl(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::MissingPrompt => StatusCode::BAD_REQUEST,
            ProxyError::MissingApiKey
            | ProxyError::Upstream(_)
            | ProxyError::BadUpstreamUrl(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            ProxyError::Upstream(_) | ProxyError::BadUpstreamUrl(_) => {
                "Something went wrong".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        if matches!(self, ProxyError::Upstream(_) | ProxyError::BadUpstreamUrl(_)) {
            tracing::error!(error = %self, "/generate failed");
        }
        let body = serde_json::json!({ "error": self.public_message() });
        (self.status(), Json(body)).into_response()
    }
}

/// Failures on the client side of POST /generate.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server returned status {0}")]
    Status(u16),

    #[error("Serialization error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}
