mod generate;

pub use generate::generate_handler;

use axum::{Router, routing::post};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::state::AppState;

// POST /generate plus the static front-end bundle; nothing else is routed.
pub fn router(state: Arc<AppState>, public_dir: &Path) -> Router {
    Router::new()
        .route("/generate", post(generate_handler))
        .fallback_service(ServeDir::new(public_dir))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::GeminiClient;
    use axum::body::{Body, Bytes, to_bytes};
    use axum::http::{Request, StatusCode, Uri};
    use serde_json::{Value, json};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    #[derive(Default)]
    struct Recorded {
        hits: AtomicUsize,
        last_uri: Mutex<Option<String>>,
        last_body: Mutex<Option<Value>>,
    }

    // Stand-in for the Gemini API on an ephemeral port.
    async fn fake_upstream(reply: Value) -> (String, Arc<Recorded>) {
        let recorded = Arc::new(Recorded::default());
        let rec = Arc::clone(&recorded);
        let app = Router::new().fallback(move |uri: Uri, body: Bytes| {
            let rec = Arc::clone(&rec);
            let reply = reply.clone();
            async move {
                rec.hits.fetch_add(1, Ordering::SeqCst);
                *rec.last_uri.lock().unwrap() = Some(uri.to_string());
                *rec.last_body.lock().unwrap() = serde_json::from_slice(&body).ok();
                axum::Json(reply)
            }
        });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}", addr), recorded)
    }

    fn app(base_url: &str, api_key: Option<&str>) -> Router {
        let gemini = GeminiClient::new(
            reqwest::Client::new(),
            base_url,
            "test-model".to_string(),
            api_key.map(str::to_string),
        );
        router(Arc::new(AppState { gemini }), Path::new("public"))
    }

    async fn post_generate(app: Router, body: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("POST")
            .uri("/generate")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn missing_key_is_500_without_upstream_call() {
        let (url, rec) = fake_upstream(json!({})).await;
        let (status, body) = post_generate(app(&url, None), r#"{"prompt":"hello"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Missing GEMINI_API_KEY" }));
        assert_eq!(rec.hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn blank_key_counts_as_missing() {
        let (url, rec) = fake_upstream(json!({})).await;
        let (status, body) = post_generate(app(&url, Some("  ")), r#"{"prompt":"hello"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Missing GEMINI_API_KEY");
        assert_eq!(rec.hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_prompt_is_400() {
        let (url, rec) = fake_upstream(json!({})).await;
        for body in [r#"{}"#, r#"{"prompt":""}"#, "garbage"] {
            let (status, json_body) = post_generate(app(&url, Some("k")), body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json_body, json!({ "error": "Missing prompt" }));
        }
        assert_eq!(rec.hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn upstream_json_passes_through_verbatim() {
        let reply = json!({
            "candidates": [{ "content": { "parts": [{ "text": "{\"answer\":\"4\"}" }] } }],
            "usageMetadata": { "totalTokenCount": 12 }
        });
        let (url, rec) = fake_upstream(reply.clone()).await;
        let (status, body) = post_generate(app(&url, Some("secret")), r#"{"prompt":"2+2?"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, reply);
        assert_eq!(rec.hits.load(Ordering::SeqCst), 1);
        assert_eq!(
            rec.last_body.lock().unwrap().clone(),
            Some(json!({ "contents": [{ "parts": [{ "text": "2+2?" }] }] }))
        );
        let uri = rec.last_uri.lock().unwrap().clone().unwrap();
        assert!(uri.starts_with("/v1beta/models/test-model:generateContent"));
        assert!(uri.contains("key=secret"));
    }

    #[tokio::test]
    async fn unreachable_upstream_is_generic_500() {
        // nothing listens on port 9 locally
        let (status, body) =
            post_generate(app("http://127.0.0.1:9", Some("k")), r#"{"prompt":"x"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Something went wrong" }));
    }
}
