use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use translator_engine::asr_http_client::AsrStub;
use translator_engine::error::{PipelineResult, PipelineStage};
use translator_engine::nmt_client::NmtStub;
use translator_engine::pipeline::{PipelineBuilder, PipelineState};
use translator_engine::progress::ChannelProgressBus;
use translator_engine::tts_http_client::{TtsClient, TtsRequest, TtsStub};
use translator_engine::types::{AudioClip, SynthesizedAudio};

fn silent_clip(secs: u32) -> AudioClip {
    AudioClip {
        sample_rate: 48_000,
        channels: 1,
        samples: vec![0.0; (48_000 * secs) as usize],
    }
}

/// Synthesis stub that counts how often it is called.
struct CountingTts {
    calls: Arc<AtomicUsize>,
    inner: TtsStub,
}

impl CountingTts {
    fn new(calls: Arc<AtomicUsize>) -> Self {
        Self {
            calls,
            inner: TtsStub::new(),
        }
    }
}

#[async_trait]
impl TtsClient for CountingTts {
    async fn synthesize(&self, request: TtsRequest) -> PipelineResult<SynthesizedAudio> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.synthesize(request).await
    }
}

#[tokio::test]
async fn successful_run_visits_every_state_once() {
    let pipeline = PipelineBuilder::new()
        .asr(Arc::new(AsrStub::recognizing("hello")))
        .nmt(Arc::new(NmtStub::translating_to("नमस्ते")))
        .tts(Arc::new(TtsStub::new()))
        .build()
        .unwrap();

    let run = pipeline.run(silent_clip(5), "en", "hi").await.unwrap();

    assert_eq!(
        run.states,
        vec![
            PipelineState::Idle,
            PipelineState::Transcribing,
            PipelineState::Translating,
            PipelineState::Synthesizing,
            PipelineState::Done,
        ]
    );
    assert_eq!(run.transcript.text, "hello");
    assert_eq!(run.translation.text, "नमस्ते");
    assert!(!run.audio.is_empty());
    assert_eq!(run.recognition_locale, "en-US");
}

#[tokio::test]
async fn transcription_failure_never_reaches_synthesis() {
    let tts_calls = Arc::new(AtomicUsize::new(0));
    let bus = Arc::new(ChannelProgressBus::default());
    let mut events = bus.subscribe();

    let pipeline = PipelineBuilder::new()
        .asr(Arc::new(AsrStub::failing()))
        .nmt(Arc::new(NmtStub::translating_to("नमस्ते")))
        .tts(Arc::new(CountingTts::new(Arc::clone(&tts_calls))))
        .progress(bus)
        .build()
        .unwrap();

    let error = pipeline.run(silent_clip(5), "en", "hi").await.unwrap_err();

    assert_eq!(error.stage(), Some(PipelineStage::Transcription));
    assert_eq!(tts_calls.load(Ordering::SeqCst), 0);

    let mut observed = Vec::new();
    while let Ok(event) = events.try_recv() {
        observed.push(event.state);
    }
    assert_eq!(
        observed,
        vec![
            PipelineState::Idle,
            PipelineState::Transcribing,
            PipelineState::Failed(PipelineStage::Transcription),
        ]
    );
}

#[tokio::test]
async fn synthesis_failure_fails_the_run_at_that_stage() {
    let pipeline = PipelineBuilder::new()
        .asr(Arc::new(AsrStub::recognizing("hello")))
        .nmt(Arc::new(NmtStub::translating_to("नमस्ते")))
        .tts(Arc::new(TtsStub::failing()))
        .build()
        .unwrap();

    let error = pipeline.run(silent_clip(5), "en", "hi").await.unwrap_err();
    assert_eq!(error.stage(), Some(PipelineStage::Synthesis));
}

#[tokio::test]
async fn translation_failure_does_not_fail_the_run() {
    let pipeline = PipelineBuilder::new()
        .asr(Arc::new(AsrStub::recognizing("hello")))
        .nmt(Arc::new(NmtStub::failing()))
        .tts(Arc::new(TtsStub::new()))
        .build()
        .unwrap();

    let run = pipeline.run(silent_clip(5), "en", "hi").await.unwrap();

    assert_eq!(run.translation.text, "hello");
    assert!(run.used_fallback());
    assert_eq!(*run.states.last().unwrap(), PipelineState::Done);
}

#[tokio::test]
async fn silent_clip_with_empty_transcript_completes() {
    // A silent recording typically recognizes to nothing; the run must
    // carry the empty text through rather than crash.
    let pipeline = PipelineBuilder::new()
        .asr(Arc::new(AsrStub::recognizing("")))
        .nmt(Arc::new(NmtStub::echoing()))
        .tts(Arc::new(TtsStub::new()))
        .build()
        .unwrap();

    let run = pipeline.run(silent_clip(5), "en", "hi").await.unwrap();

    assert_eq!(run.transcript.text, "");
    assert_eq!(run.translation.text, "");
    assert_eq!(*run.states.last().unwrap(), PipelineState::Done);
}

#[tokio::test]
async fn unknown_source_language_uses_default_locale() {
    let pipeline = PipelineBuilder::new()
        .asr(Arc::new(AsrStub::recognizing("hello")))
        .nmt(Arc::new(NmtStub::echoing()))
        .tts(Arc::new(TtsStub::new()))
        .build()
        .unwrap();

    let run = pipeline.run(silent_clip(1), "xx", "hi").await.unwrap();
    assert_eq!(run.recognition_locale, "en-US");
}

#[tokio::test]
async fn progress_events_carry_one_run_id() {
    let bus = Arc::new(ChannelProgressBus::default());
    let mut events = bus.subscribe();

    let pipeline = PipelineBuilder::new()
        .asr(Arc::new(AsrStub::recognizing("hello")))
        .nmt(Arc::new(NmtStub::translating_to("नमस्ते")))
        .tts(Arc::new(TtsStub::new()))
        .progress(bus)
        .build()
        .unwrap();

    let run = pipeline.run(silent_clip(1), "en", "hi").await.unwrap();

    let mut count = 0;
    while let Ok(event) = events.try_recv() {
        assert_eq!(event.run_id, run.run_id);
        count += 1;
    }
    assert_eq!(count, run.states.len());
}
