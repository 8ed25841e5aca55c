use std::sync::Arc;

use translator_engine::nmt_client::{FallbackTranslator, NmtStub};

#[tokio::test]
async fn unreachable_backend_returns_input_unchanged() {
    let translator = FallbackTranslator::new(Arc::new(NmtStub::failing()));
    let result = translator.translate("hello", "en", "hi").await;
    assert_eq!(result.text, "hello");
    assert!(result.used_fallback);
}

#[tokio::test]
async fn rejecting_backend_returns_input_unchanged() {
    // An `ok: false` envelope is handled the same way as a transport
    // failure: uniform fallback, no error escapes.
    let translator = FallbackTranslator::new(Arc::new(NmtStub::rejecting()));
    let result = translator.translate("hello", "en", "hi").await;
    assert_eq!(result.text, "hello");
    assert!(result.used_fallback);
}

#[tokio::test]
async fn fallback_is_idempotent() {
    let translator = FallbackTranslator::new(Arc::new(NmtStub::failing()));
    let once = translator.translate("hello", "en", "hi").await;
    let twice = translator.translate(&once.text, "en", "hi").await;
    assert_eq!(once.text, "hello");
    assert_eq!(twice.text, "hello");
}

#[tokio::test]
async fn working_backend_text_is_used() {
    let translator = FallbackTranslator::new(Arc::new(NmtStub::translating_to("नमस्ते")));
    let result = translator.translate("hello", "en", "hi").await;
    assert_eq!(result.text, "नमस्ते");
    assert!(!result.used_fallback);
}

#[tokio::test]
async fn identical_language_pair_skips_the_backend() {
    let translator = FallbackTranslator::new(Arc::new(NmtStub::failing()));
    let result = translator.translate("hello", "en", "en").await;
    assert_eq!(result.text, "hello");
    assert!(!result.used_fallback);
}

#[tokio::test]
async fn empty_input_translates_to_empty_output() {
    let translator = FallbackTranslator::new(Arc::new(NmtStub::echoing()));
    let result = translator.translate("", "en", "hi").await;
    assert_eq!(result.text, "");
    assert!(!result.used_fallback);
}
