use serde_json::Value;

use crate::error::ProxyError;
use crate::models::UpstreamRequest;

/// Thin client for Gemini's generateContent endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(
        client: reqwest::Client,
        base_url: &str,
        model: String,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            // blank env values count as unset
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn api_key(&self) -> Result<&str, ProxyError> {
        self.api_key.as_deref().ok_or(ProxyError::MissingApiKey)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    // One best-effort call. The body comes back as untyped JSON whatever the
    // upstream status was; only transport and non-JSON bodies are errors.
    pub async fn generate(&self, prompt: &str) -> Result<Value, ProxyError> {
        let key = self.api_key()?;
        let url = reqwest::Url::parse_with_params(
            &format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model),
            &[("key", key)],
        )
        .map_err(|e| ProxyError::BadUpstreamUrl(e.to_string()))?;

        let res = self
            .client
            .post(url)
            .json(&UpstreamRequest::from_prompt(prompt))
            .send()
            .await?;

        tracing::debug!(status = %res.status(), "upstream responded");
        Ok(res.json::<Value>().await?)
    }
}
