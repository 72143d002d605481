use crate::upstream::GeminiClient;

// app's shared state; read-only, every request is independent
pub struct AppState {
    pub gemini: GeminiClient,
}
