use async_trait::async_trait;

use super::{TtsClient, TtsRequest};
use crate::error::{PipelineError, PipelineResult};
use crate::types::SynthesizedAudio;
use crate::wav;

/// Synthesis stub for tests and development.
///
/// Returns a short valid WAV buffer, or a synthesis error when constructed
/// with [`TtsStub::failing`].
pub struct TtsStub {
    fail: bool,
}

impl TtsStub {
    pub fn new() -> Self {
        Self { fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

impl Default for TtsStub {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TtsClient for TtsStub {
    async fn synthesize(&self, request: TtsRequest) -> PipelineResult<SynthesizedAudio> {
        if self.fail {
            return Err(PipelineError::synthesis("stubbed synthesis failure"));
        }
        // 100 ms of silence per character keeps the output size proportional
        // to the input, which some tests assert on.
        let sample_count = 2_205 * request.text.chars().count().max(1);
        let audio = wav::encode_wav_pcm16(&vec![0.0; sample_count], 22_050, 1);
        Ok(SynthesizedAudio { audio })
    }
}
