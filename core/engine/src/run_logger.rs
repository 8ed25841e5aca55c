//! Per-run timing log.
//!
//! One JSON line per pipeline run, success or failure, with the time spent
//! in each stage.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunLog {
    /// Unix timestamp in milliseconds.
    pub ts_ms: u64,
    /// Run ID.
    pub id: String,
    pub src_lang: String,
    pub tgt_lang: String,
    pub asr_ms: u64,
    pub nmt_ms: u64,
    pub tts_ms: u64,
    pub total_ms: u64,
    pub ok: bool,
    /// True when the translation stage kept the source text.
    pub used_fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript_chars: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_chars: Option<usize>,
}

impl RunLog {
    pub fn record_texts(&mut self, transcript: &str, translation: &str) {
        self.transcript_chars = Some(transcript.chars().count());
        self.translation_chars = Some(translation.chars().count());
    }

    /// A non-empty transcript that translated to nothing usually means a
    /// misbehaving backend rather than silence.
    pub fn is_suspect(&self) -> bool {
        matches!(
            (self.transcript_chars, self.translation_chars),
            (Some(src), Some(0)) if src > 0
        )
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

pub struct RunLogger {
    enabled: bool,
    warn_on_suspect: bool,
}

impl RunLogger {
    pub fn new(enabled: bool, warn_on_suspect: bool) -> Self {
        Self {
            enabled,
            warn_on_suspect,
        }
    }

    pub fn log(&self, log: &RunLog) {
        if !self.enabled {
            return;
        }

        println!("[PERF] {}", log.to_json());

        if self.warn_on_suspect && log.is_suspect() {
            eprintln!(
                "[WARN] Suspect run: id={}, transcript had {} chars but translation is empty",
                log.id,
                log.transcript_chars.unwrap_or(0)
            );
        }
    }
}

impl Default for RunLogger {
    fn default() -> Self {
        Self {
            enabled: true,
            warn_on_suspect: true,
        }
    }
}
