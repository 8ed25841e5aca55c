//! Speech-recognition client.
//!
//! One blocking remote call per clip; a recognition failure aborts the
//! run, so there is no retry and no fallback here.

mod client;
mod stub;
mod types;

use async_trait::async_trait;

use crate::error::PipelineResult;
use crate::types::{AudioClip, Transcript};

pub use client::AsrHttpClient;
pub use stub::AsrStub;
pub use types::{AsrHttpRequest, AsrHttpResponse};

#[derive(Debug, Clone)]
pub struct AsrRequest {
    pub clip: AudioClip,
    /// Region-qualified locale hint, e.g. `hi-IN`.
    pub locale: String,
}

#[async_trait]
pub trait AsrClient: Send + Sync {
    async fn transcribe(&self, request: AsrRequest) -> PipelineResult<Transcript>;
}
