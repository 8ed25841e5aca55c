use serde::Serialize;
use uuid::Uuid;

use super::state::PipelineState;
use crate::types::{SynthesizedAudio, Transcript, Translation};

/// Wall-clock time spent in each stage, in milliseconds.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct StageTimings {
    pub asr_ms: u64,
    pub nmt_ms: u64,
    pub tts_ms: u64,
    pub total_ms: u64,
}

/// Everything one pipeline run produced.
///
/// This is the per-run context: it owns the texts and the artifact, and
/// dropping it releases them on every exit path. No state survives a run.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub run_id: Uuid,
    pub source_language: String,
    pub target_language: String,
    /// Locale hint the recognition backend was given.
    pub recognition_locale: String,
    pub transcript: Transcript,
    pub translation: Translation,
    pub audio: SynthesizedAudio,
    /// Every state the run visited, in order.
    pub states: Vec<PipelineState>,
    pub timings: StageTimings,
}

impl PipelineRun {
    pub fn used_fallback(&self) -> bool {
        self.translation.used_fallback
    }
}
