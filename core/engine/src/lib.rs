pub mod asr_http_client;
pub mod capture;
pub mod config;
pub mod error;
pub mod health_check;
pub mod locale;
pub mod nmt_client;
pub mod pipeline;
pub mod progress;
pub mod run_logger;
pub mod tts_http_client;
pub mod types;
pub mod wav;

pub use asr_http_client::{AsrClient, AsrHttpClient, AsrRequest, AsrStub};
pub use capture::{AudioSource, MicrophoneSource, StaticSource};
pub use config::RuntimeConfig;
pub use error::{PipelineError, PipelineResult, PipelineStage};
pub use health_check::{HealthChecker, ServiceHealth};
pub use locale::{recognition_locale, DEFAULT_RECOGNITION_LOCALE};
pub use nmt_client::{
    FallbackTranslator, NmtClient, NmtHttpClient, NmtStub, NmtTranslateRequest,
    NmtTranslateResponse,
};
pub use pipeline::{PipelineBuilder, PipelineRun, PipelineState, StageTimings, TranslationPipeline};
pub use progress::{ChannelProgressBus, ConsoleProgress, NullProgress, ProgressEvent, ProgressSink};
pub use run_logger::{RunLog, RunLogger};
pub use tts_http_client::{TtsClient, TtsHttpClient, TtsHttpConfig, TtsRequest, TtsStub};
pub use types::{AudioClip, SynthesizedAudio, Transcript, Translation};
