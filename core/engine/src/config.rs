//! Runtime configuration for the binaries.
//!
//! Loaded from a TOML file when one is given (or present at the default
//! path), with environment-variable overrides for the three service URLs
//! so deployments and tests can repoint backends without editing files.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::capture::{DEFAULT_CAPTURE_SAMPLE_RATE, DEFAULT_CAPTURE_SECS};
use crate::tts_http_client::TtsHttpConfig;

pub const DEFAULT_CONFIG_PATH: &str = "translator_config.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub pipeline: PipelineSettings,
    pub capture: CaptureSettings,
    pub asr: AsrSettings,
    pub nmt: NmtSettings,
    pub tts: TtsSettings,
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    pub source_language: String,
    pub target_language: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CaptureSettings {
    pub duration_secs: u64,
    pub sample_rate: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AsrSettings {
    pub url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NmtSettings {
    pub url: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TtsSettings {
    pub url: String,
    pub default_voice: String,
    /// Per-language voice overrides; defaults apply when empty.
    pub voices: HashMap<String, String>,
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub port: u16,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            source_language: "en".to_string(),
            target_language: "hi".to_string(),
        }
    }
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_CAPTURE_SECS,
            sample_rate: DEFAULT_CAPTURE_SAMPLE_RATE,
        }
    }
}

impl Default for AsrSettings {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:6006".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for NmtSettings {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:5008".to_string(),
            api_key: None,
        }
    }
}

impl Default for TtsSettings {
    fn default() -> Self {
        let defaults = TtsHttpConfig::default();
        Self {
            url: defaults.endpoint,
            default_voice: defaults.default_voice,
            voices: HashMap::new(),
            timeout_ms: defaults.timeout_ms,
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { port: 7100 }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            pipeline: PipelineSettings::default(),
            capture: CaptureSettings::default(),
            asr: AsrSettings::default(),
            nmt: NmtSettings::default(),
            tts: TtsSettings::default(),
            server: ServerSettings::default(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist. Environment overrides are applied last.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?;
            toml::from_str(&content)
                .map_err(|e| anyhow::anyhow!("failed to parse {}: {}", path.display(), e))?
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("ASR_SERVICE_URL") {
            self.asr.url = url;
        }
        if let Ok(url) = std::env::var("NMT_SERVICE_URL") {
            self.nmt.url = url;
        }
        if let Ok(url) = std::env::var("TTS_SERVICE_URL") {
            self.tts.url = url;
        }
    }

    /// Synthesis client configuration with the curated per-language voices
    /// filled in unless the file overrides them.
    pub fn tts_client_config(&self) -> TtsHttpConfig {
        let defaults = TtsHttpConfig::default();
        TtsHttpConfig {
            endpoint: self.tts.url.clone(),
            default_voice: self.tts.default_voice.clone(),
            voices: if self.tts.voices.is_empty() {
                defaults.voices
            } else {
                self.tts.voices.clone()
            },
            timeout_ms: self.tts.timeout_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RuntimeConfig::default();
        assert_eq!(config.pipeline.source_language, "en");
        assert_eq!(config.pipeline.target_language, "hi");
        assert_eq!(config.capture.duration_secs, 5);
        assert_eq!(config.capture.sample_rate, 48_000);
        assert_eq!(config.server.port, 7100);
    }

    #[test]
    fn test_parse_partial_file() {
        let config: RuntimeConfig = toml::from_str(
            r#"
            [nmt]
            url = "http://10.0.0.2:5008"

            [capture]
            duration_secs = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.nmt.url, "http://10.0.0.2:5008");
        assert_eq!(config.capture.duration_secs, 3);
        // Untouched sections keep their defaults.
        assert_eq!(config.asr.timeout_secs, 30);
    }

    #[test]
    fn test_tts_client_config_keeps_default_voices() {
        let config = RuntimeConfig::default();
        let tts = config.tts_client_config();
        assert!(tts.voices.contains_key("en"));
        assert!(tts.voices.contains_key("hi"));
    }
}
