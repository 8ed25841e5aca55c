use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;

use super::types::{AsrHttpRequest, AsrHttpResponse};
use super::{AsrClient, AsrRequest};
use crate::error::{PipelineError, PipelineResult};
use crate::types::Transcript;
use crate::wav;

/// HTTP client for the remote recognition service.
pub struct AsrHttpClient {
    client: Client,
    service_url: String,
}

impl AsrHttpClient {
    /// # Arguments
    /// * `service_url` - Base URL of the recognition service (e.g. "http://127.0.0.1:6006")
    /// * `timeout_secs` - Request timeout in seconds
    pub fn new(service_url: impl Into<String>, timeout_secs: u64) -> PipelineResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| PipelineError::new(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            service_url: service_url.into(),
        })
    }

    pub async fn health_check(&self) -> PipelineResult<bool> {
        let url = format!("{}/health", self.service_url);
        match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => Ok(true),
            Ok(response) => Err(PipelineError::new(format!(
                "ASR service health check failed: {}",
                response.status()
            ))),
            Err(e) => Err(PipelineError::new(format!(
                "ASR service health check error: {}",
                e
            ))),
        }
    }
}

#[async_trait]
impl AsrClient for AsrHttpClient {
    async fn transcribe(&self, request: AsrRequest) -> PipelineResult<Transcript> {
        let audio_bytes = wav::encode_clip(&request.clip);
        let body = AsrHttpRequest {
            audio_b64: BASE64.encode(&audio_bytes),
            locale: request.locale.clone(),
            task: "transcribe".to_string(),
        };

        let url = format!("{}/asr", self.service_url);
        eprintln!(
            "[ASR] 📤 Sending clip to recognition service: {} ({} bytes, locale {})",
            url,
            audio_bytes.len(),
            request.locale
        );

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| PipelineError::transcription(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            eprintln!("[ASR] ❌ Service returned error {}: {}", status, error_text);
            return Err(PipelineError::transcription(format!(
                "service returned {}: {}",
                status, error_text
            )));
        }

        let asr_response: AsrHttpResponse = response
            .json()
            .await
            .map_err(|e| PipelineError::transcription(format!("failed to parse response: {}", e)))?;

        eprintln!(
            "[ASR] ✅ Recognized {} chars, language: {:?}, duration: {:.2}s",
            asr_response.text.len(),
            asr_response.language,
            asr_response.duration
        );

        Ok(Transcript {
            text: asr_response.text,
            language: asr_response.language,
            duration_secs: asr_response.duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asr_client_creation() {
        let client = AsrHttpClient::new("http://127.0.0.1:6006", 30).unwrap();
        assert_eq!(client.service_url, "http://127.0.0.1:6006");
    }
}
