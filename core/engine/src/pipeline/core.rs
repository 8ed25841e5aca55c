use std::sync::Arc;

use crate::asr_http_client::AsrClient;
use crate::nmt_client::FallbackTranslator;
use crate::progress::ProgressSink;
use crate::run_logger::RunLogger;
use crate::tts_http_client::TtsClient;

pub struct TranslationPipeline {
    pub(crate) asr: Arc<dyn AsrClient>,
    pub(crate) translator: Arc<FallbackTranslator>,
    pub(crate) tts: Arc<dyn TtsClient>,
    pub(crate) progress: Arc<dyn ProgressSink>,
    pub(crate) run_logger: Option<Arc<RunLogger>>,
}

impl Clone for TranslationPipeline {
    fn clone(&self) -> Self {
        Self {
            asr: Arc::clone(&self.asr),
            translator: Arc::clone(&self.translator),
            tts: Arc::clone(&self.tts),
            progress: Arc::clone(&self.progress),
            run_logger: self.run_logger.as_ref().map(Arc::clone),
        }
    }
}
