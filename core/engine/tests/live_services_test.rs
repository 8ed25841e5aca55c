//! End-to-end checks against live backend services.
//!
//! These need a running recognition, translation, and synthesis service;
//! they are ignored by default and pick the URLs up from the same
//! environment variables the binaries use.

use std::sync::Arc;

use translator_engine::nmt_client::{FallbackTranslator, NmtClient, NmtHttpClient, NmtTranslateRequest};
use translator_engine::tts_http_client::{TtsClient, TtsHttpClient, TtsHttpConfig, TtsRequest};

fn nmt_url() -> String {
    std::env::var("NMT_SERVICE_URL").unwrap_or_else(|_| "http://127.0.0.1:5008".to_string())
}

fn tts_url() -> String {
    std::env::var("TTS_SERVICE_URL").unwrap_or_else(|_| "http://127.0.0.1:5005/tts".to_string())
}

#[tokio::test]
#[ignore] // needs a running translation service
async fn live_translate_en_to_hi_returns_devanagari() {
    let client = NmtHttpClient::new(nmt_url(), None);
    let response = client
        .translate(&NmtTranslateRequest {
            src_lang: "en".to_string(),
            tgt_lang: "hi".to_string(),
            text: "hello".to_string(),
        })
        .await
        .expect("translation request should succeed");

    assert!(response.ok, "service returned error: {:?}", response.error);
    let text = response.text.expect("service should return text");
    assert!(!text.is_empty());
    assert!(
        text.chars().any(|c| matches!(c as u32, 0x0900..=0x097F)),
        "expected Devanagari output, got: {}",
        text
    );
}

#[tokio::test]
#[ignore] // needs a running synthesis service
async fn live_synthesize_returns_wav_audio() {
    let config = TtsHttpConfig {
        endpoint: tts_url(),
        ..TtsHttpConfig::default()
    };
    let client = TtsHttpClient::new(config).unwrap();

    let audio = client
        .synthesize(TtsRequest {
            text: "hello, this is a synthesis check".to_string(),
            language: "en".to_string(),
            voice: String::new(),
        })
        .await
        .expect("synthesis should succeed");

    assert!(audio.audio.len() > 1024, "audio should not be trivially small");
    assert_eq!(&audio.audio[0..4], b"RIFF", "expected WAV output");
}

#[tokio::test]
#[ignore] // needs a running translation service
async fn live_fallback_still_translates_through_wrapper() {
    let translator = FallbackTranslator::new(Arc::new(NmtHttpClient::new(nmt_url(), None)));
    let result = translator.translate("hello", "en", "hi").await;
    assert!(!result.text.is_empty());
}
