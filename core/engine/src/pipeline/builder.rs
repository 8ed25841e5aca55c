use std::sync::Arc;

use super::core::TranslationPipeline;
use crate::asr_http_client::{AsrClient, AsrHttpClient};
use crate::error::{PipelineError, PipelineResult};
use crate::nmt_client::{FallbackTranslator, NmtClient, NmtHttpClient};
use crate::progress::{NullProgress, ProgressSink};
use crate::run_logger::RunLogger;
use crate::tts_http_client::{TtsClient, TtsHttpClient, TtsHttpConfig};

pub struct PipelineBuilder {
    asr: Option<Arc<dyn AsrClient>>,
    nmt: Option<Arc<dyn NmtClient>>,
    tts: Option<Arc<dyn TtsClient>>,
    progress: Option<Arc<dyn ProgressSink>>,
    run_logger: Option<Arc<RunLogger>>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self {
            asr: None,
            nmt: None,
            tts: None,
            progress: None,
            run_logger: None,
        }
    }

    pub fn asr(mut self, asr: Arc<dyn AsrClient>) -> Self {
        self.asr = Some(asr);
        self
    }

    pub fn nmt(mut self, nmt: Arc<dyn NmtClient>) -> Self {
        self.nmt = Some(nmt);
        self
    }

    pub fn tts(mut self, tts: Arc<dyn TtsClient>) -> Self {
        self.tts = Some(tts);
        self
    }

    pub fn progress(mut self, progress: Arc<dyn ProgressSink>) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn run_logger(mut self, run_logger: Arc<RunLogger>) -> Self {
        self.run_logger = Some(run_logger);
        self
    }

    /// Enable the default per-run `[PERF]` log line.
    pub fn with_run_log(self) -> Self {
        self.run_logger(Arc::new(RunLogger::default()))
    }

    /// Point the transcription stage at an HTTP recognition service.
    pub fn asr_with_http(self, url: impl Into<String>, timeout_secs: u64) -> PipelineResult<Self> {
        let client = AsrHttpClient::new(url, timeout_secs)?;
        Ok(self.asr(Arc::new(client)))
    }

    /// Point the translation stage at an HTTP translation service.
    pub fn nmt_with_http(self, url: impl Into<String>, api_key: Option<String>) -> Self {
        self.nmt(Arc::new(NmtHttpClient::new(url, api_key)))
    }

    /// Point the synthesis stage at an HTTP synthesis service.
    pub fn tts_with_http(self, config: TtsHttpConfig) -> PipelineResult<Self> {
        let client = TtsHttpClient::new(config)?;
        Ok(self.tts(Arc::new(client)))
    }

    pub fn build(self) -> PipelineResult<TranslationPipeline> {
        let asr = self
            .asr
            .ok_or_else(|| PipelineError::new("pipeline requires a transcription client"))?;
        let nmt = self
            .nmt
            .ok_or_else(|| PipelineError::new("pipeline requires a translation client"))?;
        let tts = self
            .tts
            .ok_or_else(|| PipelineError::new("pipeline requires a synthesis client"))?;

        Ok(TranslationPipeline {
            asr,
            translator: Arc::new(FallbackTranslator::new(nmt)),
            tts,
            progress: self.progress.unwrap_or_else(|| Arc::new(NullProgress)),
            run_logger: self.run_logger,
        })
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asr_http_client::AsrStub;
    use crate::nmt_client::NmtStub;
    use crate::tts_http_client::TtsStub;

    #[test]
    fn test_build_requires_all_clients() {
        let missing_tts = PipelineBuilder::new()
            .asr(Arc::new(AsrStub::recognizing("hello")))
            .nmt(Arc::new(NmtStub::translating_to("नमस्ते")))
            .build();
        assert!(missing_tts.is_err());

        let complete = PipelineBuilder::new()
            .asr(Arc::new(AsrStub::recognizing("hello")))
            .nmt(Arc::new(NmtStub::translating_to("नमस्ते")))
            .tts(Arc::new(TtsStub::new()))
            .build();
        assert!(complete.is_ok());
    }
}
