use async_trait::async_trait;

use super::{AsrClient, AsrRequest};
use crate::error::{PipelineError, PipelineResult};
use crate::types::Transcript;

/// Recognition stub for tests and development.
///
/// Returns a fixed transcript, or a transcription error when constructed
/// with [`AsrStub::failing`].
pub struct AsrStub {
    text: Option<String>,
}

impl AsrStub {
    pub fn recognizing(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn failing() -> Self {
        Self { text: None }
    }
}

#[async_trait]
impl AsrClient for AsrStub {
    async fn transcribe(&self, request: AsrRequest) -> PipelineResult<Transcript> {
        match &self.text {
            Some(text) => Ok(Transcript {
                text: text.clone(),
                language: None,
                duration_secs: request.clip.duration_secs(),
            }),
            None => Err(PipelineError::transcription("stubbed recognition failure")),
        }
    }
}
