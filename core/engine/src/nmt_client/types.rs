use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NmtTranslateRequest {
    pub src_lang: String,
    pub tgt_lang: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NmtTranslateResponse {
    pub ok: bool,
    pub text: Option<String>,
    pub model: Option<String>,
    pub provider: Option<String>,
    pub error: Option<String>,
}

#[async_trait]
pub trait NmtClient: Send + Sync {
    async fn translate(&self, req: &NmtTranslateRequest) -> anyhow::Result<NmtTranslateResponse>;
}
