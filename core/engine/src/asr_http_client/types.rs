use serde::{Deserialize, Serialize};

/// Request body for the recognition service.
#[derive(Debug, Clone, Serialize)]
pub struct AsrHttpRequest {
    /// Base64 encoded audio (16-bit PCM WAV).
    pub audio_b64: String,
    /// Region-qualified locale hint (e.g. "hi-IN").
    pub locale: String,
    /// Task type; always "transcribe" for this pipeline.
    pub task: String,
}

/// Response body from the recognition service.
#[derive(Debug, Clone, Deserialize)]
pub struct AsrHttpResponse {
    /// Full recognized text.
    pub text: String,
    /// Language the backend detected, if it reports one.
    pub language: Option<String>,
    /// Audio duration in seconds.
    #[serde(default)]
    pub duration: f32,
}
