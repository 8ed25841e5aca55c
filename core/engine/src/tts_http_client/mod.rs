//! Speech-synthesis client.
//!
//! A synthesis failure aborts the run; like recognition, there is no retry.

mod client;
mod stub;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::PipelineResult;
use crate::types::SynthesizedAudio;

pub use client::{TtsHttpClient, TtsHttpConfig};
pub use stub::TtsStub;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsRequest {
    pub text: String,
    /// Short target language tag, e.g. "hi".
    pub language: String,
    /// Explicit voice name; when empty, the client picks one per language.
    pub voice: String,
}

#[async_trait]
pub trait TtsClient: Send + Sync {
    async fn synthesize(&self, request: TtsRequest) -> PipelineResult<SynthesizedAudio>;
}
