use async_trait::async_trait;

use super::types::{NmtClient, NmtTranslateRequest, NmtTranslateResponse};

/// Translation stub for tests and development.
pub enum NmtStub {
    /// Always answers with this text.
    Fixed(String),
    /// Answers with the request text unchanged.
    Echo,
    /// Every call fails at the transport level.
    Unreachable,
    /// Every call returns an `ok: false` envelope.
    Rejecting,
}

impl NmtStub {
    pub fn translating_to(text: impl Into<String>) -> Self {
        NmtStub::Fixed(text.into())
    }

    pub fn echoing() -> Self {
        NmtStub::Echo
    }

    pub fn failing() -> Self {
        NmtStub::Unreachable
    }

    pub fn rejecting() -> Self {
        NmtStub::Rejecting
    }
}

#[async_trait]
impl NmtClient for NmtStub {
    async fn translate(&self, req: &NmtTranslateRequest) -> anyhow::Result<NmtTranslateResponse> {
        match self {
            NmtStub::Fixed(text) => Ok(NmtTranslateResponse {
                ok: true,
                text: Some(text.clone()),
                model: Some("stub".to_string()),
                provider: Some("stub".to_string()),
                error: None,
            }),
            NmtStub::Echo => Ok(NmtTranslateResponse {
                ok: true,
                text: Some(req.text.clone()),
                model: Some("stub".to_string()),
                provider: Some("stub".to_string()),
                error: None,
            }),
            NmtStub::Unreachable => Err(anyhow::anyhow!("connection refused")),
            NmtStub::Rejecting => Ok(NmtTranslateResponse {
                ok: false,
                text: None,
                model: None,
                provider: None,
                error: Some("unsupported language pair".to_string()),
            }),
        }
    }
}
