use std::time::Instant;

use uuid::Uuid;

use super::core::TranslationPipeline;
use super::run::{PipelineRun, StageTimings};
use super::state::PipelineState;
use crate::asr_http_client::AsrRequest;
use crate::error::{PipelineError, PipelineResult, PipelineStage};
use crate::locale;
use crate::progress::{now_ms, ProgressEvent};
use crate::run_logger::RunLog;
use crate::tts_http_client::TtsRequest;
use crate::types::AudioClip;

impl TranslationPipeline {
    /// Run one clip through transcription, translation, and synthesis.
    ///
    /// The stages execute strictly in order; nothing runs after a failure.
    /// Transcription and synthesis errors abort the run. Translation never
    /// does: its fallback keeps the source text and the run continues.
    pub async fn run(
        &self,
        clip: AudioClip,
        source_language: &str,
        target_language: &str,
    ) -> PipelineResult<PipelineRun> {
        let run_id = Uuid::new_v4();
        let started = Instant::now();
        let mut states = Vec::with_capacity(6);
        let mut timings = StageTimings::default();

        self.enter(&mut states, run_id, PipelineState::Idle, None).await;

        self.enter(&mut states, run_id, PipelineState::Transcribing, None)
            .await;
        let recognition_locale = locale::recognition_locale(source_language);
        let stage_started = Instant::now();
        let asr_request = AsrRequest {
            clip,
            locale: recognition_locale.to_string(),
        };
        let transcript = match self.asr.transcribe(asr_request).await {
            Ok(transcript) => transcript,
            Err(error) => {
                timings.asr_ms = stage_started.elapsed().as_millis() as u64;
                timings.total_ms = started.elapsed().as_millis() as u64;
                return Err(self
                    .fail(
                        &mut states,
                        run_id,
                        PipelineStage::Transcription,
                        error,
                        source_language,
                        target_language,
                        timings,
                    )
                    .await);
            }
        };
        timings.asr_ms = stage_started.elapsed().as_millis() as u64;

        self.enter(&mut states, run_id, PipelineState::Translating, None)
            .await;
        let stage_started = Instant::now();
        let translation = self
            .translator
            .translate(&transcript.text, source_language, target_language)
            .await;
        timings.nmt_ms = stage_started.elapsed().as_millis() as u64;

        self.enter(&mut states, run_id, PipelineState::Synthesizing, None)
            .await;
        let stage_started = Instant::now();
        let tts_request = TtsRequest {
            text: translation.text.clone(),
            language: target_language.to_string(),
            voice: String::new(),
        };
        let audio = match self.tts.synthesize(tts_request).await {
            Ok(audio) => audio,
            Err(error) => {
                timings.tts_ms = stage_started.elapsed().as_millis() as u64;
                timings.total_ms = started.elapsed().as_millis() as u64;
                return Err(self
                    .fail(
                        &mut states,
                        run_id,
                        PipelineStage::Synthesis,
                        error,
                        source_language,
                        target_language,
                        timings,
                    )
                    .await);
            }
        };
        timings.tts_ms = stage_started.elapsed().as_millis() as u64;

        self.enter(&mut states, run_id, PipelineState::Done, None).await;
        timings.total_ms = started.elapsed().as_millis() as u64;

        if let Some(logger) = &self.run_logger {
            let mut log = RunLog {
                ts_ms: now_ms(),
                id: run_id.to_string(),
                src_lang: source_language.to_string(),
                tgt_lang: target_language.to_string(),
                asr_ms: timings.asr_ms,
                nmt_ms: timings.nmt_ms,
                tts_ms: timings.tts_ms,
                total_ms: timings.total_ms,
                ok: true,
                used_fallback: translation.used_fallback,
                transcript_chars: None,
                translation_chars: None,
            };
            log.record_texts(&transcript.text, &translation.text);
            logger.log(&log);
        }

        Ok(PipelineRun {
            run_id,
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            recognition_locale: recognition_locale.to_string(),
            transcript,
            translation,
            audio,
            states,
            timings,
        })
    }

    async fn enter(
        &self,
        states: &mut Vec<PipelineState>,
        run_id: Uuid,
        state: PipelineState,
        message: Option<String>,
    ) {
        states.push(state);
        if let Err(e) = self
            .progress
            .report(ProgressEvent::new(run_id, state, message))
            .await
        {
            eprintln!("[PIPELINE] ⚠ Failed to report progress: {}", e);
        }
    }

    async fn fail(
        &self,
        states: &mut Vec<PipelineState>,
        run_id: Uuid,
        stage: PipelineStage,
        error: PipelineError,
        source_language: &str,
        target_language: &str,
        timings: StageTimings,
    ) -> PipelineError {
        eprintln!("[PIPELINE] ❌ {} failed: {}", stage, error.message());
        self.enter(
            states,
            run_id,
            PipelineState::Failed(stage),
            Some(error.message().to_string()),
        )
        .await;

        if let Some(logger) = &self.run_logger {
            logger.log(&RunLog {
                ts_ms: now_ms(),
                id: run_id.to_string(),
                src_lang: source_language.to_string(),
                tgt_lang: target_language.to_string(),
                asr_ms: timings.asr_ms,
                nmt_ms: timings.nmt_ms,
                tts_ms: timings.tts_ms,
                total_ms: timings.total_ms,
                ok: false,
                used_fallback: false,
                transcript_chars: None,
                translation_chars: None,
            });
        }

        error
    }
}
