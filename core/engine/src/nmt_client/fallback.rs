use std::sync::Arc;

use super::types::{NmtClient, NmtTranslateRequest};
use crate::types::Translation;

/// Policy wrapper around an [`NmtClient`].
///
/// A translation failure never aborts the run: on a transport error, an
/// `ok: false` envelope, or a missing text field, the original input is
/// returned unchanged with `used_fallback` set, and the failure is logged.
/// Identical source and target tags skip the backend entirely.
pub struct FallbackTranslator {
    client: Arc<dyn NmtClient>,
}

impl FallbackTranslator {
    pub fn new(client: Arc<dyn NmtClient>) -> Self {
        Self { client }
    }

    pub async fn translate(&self, text: &str, source: &str, target: &str) -> Translation {
        if source.eq_ignore_ascii_case(target) {
            return Translation {
                text: text.to_string(),
                used_fallback: false,
            };
        }

        let req = NmtTranslateRequest {
            src_lang: source.to_string(),
            tgt_lang: target.to_string(),
            text: text.to_string(),
        };

        match self.client.translate(&req).await {
            Ok(response) if response.ok => match response.text {
                Some(translated) => Translation {
                    text: translated,
                    used_fallback: false,
                },
                None => {
                    eprintln!(
                        "[NMT] ⚠ Backend returned ok without text ({} → {}), keeping source text",
                        source, target
                    );
                    Translation {
                        text: text.to_string(),
                        used_fallback: true,
                    }
                }
            },
            Ok(response) => {
                eprintln!(
                    "[NMT] ⚠ Backend rejected request ({} → {}): {}, keeping source text",
                    source,
                    target,
                    response.error.unwrap_or_else(|| "unknown error".to_string())
                );
                Translation {
                    text: text.to_string(),
                    used_fallback: true,
                }
            }
            Err(e) => {
                eprintln!(
                    "[NMT] ⚠ Translation call failed ({} → {}): {}, keeping source text",
                    source, target, e
                );
                Translation {
                    text: text.to_string(),
                    used_fallback: true,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nmt_client::NmtStub;

    #[tokio::test]
    async fn test_backend_failure_returns_source_text() {
        let translator = FallbackTranslator::new(Arc::new(NmtStub::failing()));
        let result = translator.translate("hello", "en", "hi").await;
        assert_eq!(result.text, "hello");
        assert!(result.used_fallback);
    }

    #[tokio::test]
    async fn test_fallback_is_idempotent() {
        let translator = FallbackTranslator::new(Arc::new(NmtStub::failing()));
        let first = translator.translate("hello", "en", "hi").await;
        let second = translator.translate(&first.text, "en", "hi").await;
        assert_eq!(first.text, second.text);
    }

    #[tokio::test]
    async fn test_same_language_pair_passes_through() {
        // The backend would fail, but it is never consulted for en → en.
        let translator = FallbackTranslator::new(Arc::new(NmtStub::failing()));
        let result = translator.translate("hello", "en", "en").await;
        assert_eq!(result.text, "hello");
        assert!(!result.used_fallback);
    }

    #[tokio::test]
    async fn test_successful_translation_passes_backend_text() {
        let translator =
            FallbackTranslator::new(Arc::new(NmtStub::translating_to("नमस्ते")));
        let result = translator.translate("hello", "en", "hi").await;
        assert_eq!(result.text, "नमस्ते");
        assert!(!result.used_fallback);
    }
}
