//! Health checks for the three remote services.

use std::time::Duration;

use futures::future::join_all;
use reqwest::Client;

/// Health of one remote service.
#[derive(Debug, Clone)]
pub struct ServiceHealth {
    pub is_healthy: bool,
    pub service_name: String,
    pub url: String,
    pub error: Option<String>,
}

pub struct HealthChecker {
    http: Client,
}

impl HealthChecker {
    pub fn new() -> Self {
        Self {
            http: Client::builder()
                .timeout(Duration::from_secs(5))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    /// GET `{base_url}/health` and report the outcome.
    pub async fn check_service(&self, name: &str, base_url: &str) -> ServiceHealth {
        let url = format!("{}/health", base_url);
        match self.http.get(&url).send().await {
            Ok(response) if response.status().is_success() => ServiceHealth {
                is_healthy: true,
                service_name: name.to_string(),
                url: base_url.to_string(),
                error: None,
            },
            Ok(response) => ServiceHealth {
                is_healthy: false,
                service_name: name.to_string(),
                url: base_url.to_string(),
                error: Some(format!("HTTP {}", response.status())),
            },
            Err(e) => ServiceHealth {
                is_healthy: false,
                service_name: name.to_string(),
                url: base_url.to_string(),
                error: Some(e.to_string()),
            },
        }
    }

    /// Probe ASR, NMT, and TTS concurrently.
    pub async fn check_all(
        &self,
        asr_url: &str,
        nmt_url: &str,
        tts_url: &str,
    ) -> Vec<ServiceHealth> {
        join_all([
            self.check_service("ASR", asr_url),
            self.check_service("NMT", nmt_url),
            self.check_service("TTS", tts_url),
        ])
        .await
    }
}

impl Default for HealthChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checker_creation() {
        let _ = HealthChecker::new();
    }

    #[tokio::test]
    async fn test_unreachable_service_reports_unhealthy() {
        let checker = HealthChecker::new();
        let health = checker.check_service("NMT", "http://127.0.0.1:1").await;
        assert!(!health.is_healthy);
        assert_eq!(health.service_name, "NMT");
        assert!(health.error.is_some());
    }
}
