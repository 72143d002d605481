use axum::body::Bytes;
use axum::{Json, extract::State};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

use crate::error::ProxyError;
use crate::models::PromptRequest;
use crate::state::AppState;

// Pull a non-empty prompt out of the raw body. Malformed JSON, a missing
// field or a non-string value all count as "missing".
fn prompt_from_body(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<PromptRequest>(body)
        .ok()
        .and_then(|req| req.prompt)
        .filter(|p| !p.is_empty())
}

pub async fn generate_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Value>, ProxyError> {
    // credential is checked before anything else
    state.gemini.api_key()?;

    let prompt = prompt_from_body(&body).ok_or(ProxyError::MissingPrompt)?;

    let start_time = Instant::now();
    let data = state.gemini.generate(&prompt).await?;
    tracing::info!(
        prompt_chars = prompt.chars().count(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "/generate ok"
    );

    Ok(Json(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_extraction() {
        assert_eq!(prompt_from_body(br#"{"prompt":"hi"}"#).as_deref(), Some("hi"));
        assert_eq!(prompt_from_body(br#"{"prompt":""}"#), None);
        assert_eq!(prompt_from_body(br#"{}"#), None);
        assert_eq!(prompt_from_body(br#"{"prompt":5}"#), None);
        assert_eq!(prompt_from_body(b"not json"), None);
        assert_eq!(prompt_from_body(b""), None);
    }
}
