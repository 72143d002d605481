use serde::{Deserialize, Deserializer, Serialize};

// Body accepted by POST /generate
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct PromptRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

// Gemini generateContent request format
#[derive(Serialize, Debug)]
pub struct UpstreamRequest<'a> {
    pub contents: Vec<UpstreamContent<'a>>,
}

#[derive(Serialize, Debug)]
pub struct UpstreamContent<'a> {
    pub parts: Vec<UpstreamPart<'a>>,
}

#[derive(Serialize, Debug)]
pub struct UpstreamPart<'a> {
    pub text: &'a str,
}

impl<'a> UpstreamRequest<'a> {
    pub fn from_prompt(text: &'a str) -> Self {
        Self {
            contents: vec![UpstreamContent {
                parts: vec![UpstreamPart { text }],
            }],
        }
    }
}

// Gemini response, only the path the client reads
#[derive(Deserialize, Debug)]
pub struct UpstreamResponse {
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Deserialize, Debug)]
pub struct CandidateContent {
    pub parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug)]
pub struct CandidatePart {
    pub text: String,
}

/// What the model is asked to produce: an answer, a similar practice
/// question and a multiple-choice question.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GeneratedPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub similar: Option<Similar>,
    #[serde(default, deserialize_with = "lenient")]
    pub mcq: Option<Mcq>,
}

/// `similar` arrives either as a list or as a single string.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Similar {
    Many(Vec<String>),
    One(String),
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Mcq {
    #[serde(default, deserialize_with = "lenient")]
    pub question: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub options: Option<McqOptions>,
    #[serde(default, deserialize_with = "lenient")]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub explanation: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "UPPERCASE")]
pub struct McqOptions {
    #[serde(default, deserialize_with = "lenient")]
    pub a: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub b: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub c: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub d: Option<String>,
}

// A field with the wrong JSON type is treated as absent instead of failing
// the whole payload.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn upstream_request_shape() {
        let body = serde_json::to_value(UpstreamRequest::from_prompt("hi")).unwrap();
        assert_eq!(body, json!({ "contents": [{ "parts": [{ "text": "hi" }] }] }));
    }

    #[test]
    fn wrong_typed_fields_become_absent() {
        let payload: GeneratedPayload = serde_json::from_value(json!({
            "answer": 42,
            "similar": { "q": "x" },
            "mcq": { "question": "Q", "options": { "A": "1", "B": 2 }, "answer": "A" }
        }))
        .unwrap();
        assert_eq!(payload.answer, None);
        assert_eq!(payload.similar, None);
        let mcq = payload.mcq.unwrap();
        assert_eq!(mcq.question.as_deref(), Some("Q"));
        let options = mcq.options.unwrap();
        assert_eq!(options.a.as_deref(), Some("1"));
        assert_eq!(options.b, None);
        assert_eq!(mcq.explanation, None);
    }

    #[test]
    fn similar_accepts_both_shapes() {
        let many: GeneratedPayload = serde_json::from_value(json!({ "similar": ["Q1", "Q2"] })).unwrap();
        assert_eq!(many.similar, Some(Similar::Many(vec!["Q1".into(), "Q2".into()])));
        let one: GeneratedPayload = serde_json::from_value(json!({ "similar": "Q1" })).unwrap();
        assert_eq!(one.similar, Some(Similar::One("Q1".into())));
    }
}
