use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use super::{TtsClient, TtsRequest};
use crate::error::{PipelineError, PipelineResult};
use crate::types::SynthesizedAudio;

/// Synthesis service configuration.
#[derive(Debug, Clone)]
pub struct TtsHttpConfig {
    /// Service endpoint (e.g. "http://127.0.0.1:5005/tts").
    pub endpoint: String,
    /// Voice used when no per-language voice matches.
    pub default_voice: String,
    /// Per-language voice names, keyed by short tag.
    pub voices: HashMap<String, String>,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for TtsHttpConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5005/tts".to_string(),
            default_voice: "en_US-lessac-medium".to_string(),
            voices: HashMap::from([
                ("en".to_string(), "en_US-lessac-medium".to_string()),
                ("hi".to_string(), "hi_IN-pratham-medium".to_string()),
            ]),
            timeout_ms: 8000,
        }
    }
}

/// HTTP client for the remote synthesis service.
pub struct TtsHttpClient {
    client: reqwest::Client,
    config: TtsHttpConfig,
}

impl TtsHttpClient {
    pub fn new(config: TtsHttpConfig) -> PipelineResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| PipelineError::new(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn with_default_config() -> PipelineResult<Self> {
        Self::new(TtsHttpConfig::default())
    }

    fn voice_for(&self, request: &TtsRequest) -> String {
        if !request.voice.is_empty() {
            return request.voice.clone();
        }
        self.config
            .voices
            .get(&request.language.to_lowercase())
            .cloned()
            .unwrap_or_else(|| self.config.default_voice.clone())
    }
}

/// Request body for the synthesis service.
#[derive(Debug, Serialize)]
struct TtsHttpRequest {
    text: String,
    voice: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
}

// The response is binary WAV data, not JSON.

#[async_trait]
impl TtsClient for TtsHttpClient {
    async fn synthesize(&self, request: TtsRequest) -> PipelineResult<SynthesizedAudio> {
        let voice = self.voice_for(&request);
        eprintln!(
            "[TTS] Synthesizing {} chars with voice '{}' (language '{}')",
            request.text.len(),
            voice,
            request.language
        );

        let http_request = TtsHttpRequest {
            text: request.text.clone(),
            voice,
            language: if request.language.is_empty() {
                None
            } else {
                Some(request.language.clone())
            },
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&http_request)
            .send()
            .await
            .map_err(|e| {
                PipelineError::synthesis(format!("failed to reach synthesis service: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(PipelineError::synthesis(format!(
                "service returned {} {}",
                status, error_text
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| PipelineError::synthesis(format!("failed to read audio data: {}", e)))?
            .to_vec();

        if audio.is_empty() {
            return Err(PipelineError::synthesis(
                "service returned empty audio data",
            ));
        }

        Ok(SynthesizedAudio { audio })
    }
}
