use async_trait::async_trait;
use reqwest::Client;

use super::types::{NmtClient, NmtTranslateRequest, NmtTranslateResponse};

/// HTTP client for the remote translation service.
#[derive(Clone)]
pub struct NmtHttpClient {
    base_url: String,
    api_key: Option<String>,
    http: Client,
}

impl NmtHttpClient {
    /// # Arguments
    /// * `url` - Service base URL, e.g. "http://127.0.0.1:5008"
    /// * `api_key` - Bearer key, when the service requires one
    pub fn new(url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: url.into(),
            api_key,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl NmtClient for NmtHttpClient {
    async fn translate(&self, req: &NmtTranslateRequest) -> anyhow::Result<NmtTranslateResponse> {
        let url = format!("{}/v1/translate", self.base_url);

        let mut request_builder = self.http.post(&url).json(req);
        if let Some(key) = &self.api_key {
            request_builder = request_builder.header("Authorization", format!("Bearer {}", key));
        }

        let response = request_builder.send().await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "HTTP error: {} - {}",
                response.status(),
                response.text().await.unwrap_or_default()
            ));
        }

        let body: NmtTranslateResponse = response.json().await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nmt_client_creation() {
        let client = NmtHttpClient::new("http://127.0.0.1:5008", None);
        assert_eq!(client.base_url, "http://127.0.0.1:5008");
        assert!(client.api_key.is_none());
    }
}
