use serde_json::Value;

use crate::models::GeneratedPayload;

/// Drop every ```` ```json ```` and ```` ``` ```` marker, then trim.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse the model text into a payload. Text that is not JSON ends up whole
/// in `answer`, with the other panels left empty. JSON that is not an object
/// (an array, a number) carries no fields and renders every panel empty.
pub fn parse_payload(text: &str) -> GeneratedPayload {
    let cleaned = strip_code_fences(text);
    match serde_json::from_str::<Value>(&cleaned) {
        Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_default(),
        Ok(other) => {
            tracing::debug!(kind = ?other, "model output is JSON but not an object");
            GeneratedPayload::default()
        }
        Err(e) => {
            tracing::debug!(error = %e, "model output is not JSON, using raw text");
            GeneratedPayload {
                answer: Some(cleaned),
                similar: None,
                mcq: None,
            }
        }
    }
}
