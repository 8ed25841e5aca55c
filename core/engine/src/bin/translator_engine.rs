use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use translator_engine::config::{RuntimeConfig, DEFAULT_CONFIG_PATH};
use translator_engine::health_check::HealthChecker;
use translator_engine::pipeline::{PipelineBuilder, TranslationPipeline};
use translator_engine::wav;

/// One-shot translation request: base64 WAV in.
#[derive(Debug, Deserialize)]
struct TranslateRequest {
    /// Base64 encoded audio (16-bit PCM WAV).
    audio: String,
    src_lang: String,
    tgt_lang: String,
}

/// Translation response: base64 WAV out.
#[derive(Debug, Serialize)]
struct TranslateResponse {
    audio: String,
    transcript: String,
    translation: String,
    used_fallback: bool,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    services: ServicesHealth,
}

#[derive(Debug, Serialize)]
struct ServicesHealth {
    asr: bool,
    nmt: bool,
    tts: bool,
}

#[derive(Clone)]
struct AppState {
    pipeline: Arc<TranslationPipeline>,
    config: RuntimeConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config_path = args
        .iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    println!("Loading config from: {}", config_path.display());
    let config = RuntimeConfig::load(&config_path)?;

    println!("Config loaded:");
    println!("  ASR URL: {}", config.asr.url);
    println!("  NMT URL: {}", config.nmt.url);
    println!("  TTS URL: {}", config.tts.url);
    println!("  Server Port: {}", config.server.port);

    let pipeline = PipelineBuilder::new()
        .asr_with_http(&config.asr.url, config.asr.timeout_secs)
        .map_err(|e| anyhow::anyhow!("failed to initialize ASR client: {}", e))?
        .nmt_with_http(&config.nmt.url, config.nmt.api_key.clone())
        .tts_with_http(config.tts_client_config())
        .map_err(|e| anyhow::anyhow!("failed to initialize TTS client: {}", e))?
        .with_run_log()
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build pipeline: {}", e))?;

    let app_state = AppState {
        pipeline: Arc::new(pipeline),
        config: config.clone(),
    };

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/translate", post(translate_handler))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr = format!("0.0.0.0:{}", config.server.port);
    println!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let checker = HealthChecker::new();
    let results = checker
        .check_all(&state.config.asr.url, &state.config.nmt.url, &state.config.tts.url)
        .await;
    let healthy = |name: &str| {
        results
            .iter()
            .any(|h| h.service_name == name && h.is_healthy)
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        services: ServicesHealth {
            asr: healthy("ASR"),
            nmt: healthy("NMT"),
            tts: healthy("TTS"),
        },
    })
}

async fn translate_handler(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, (StatusCode, String)> {
    let audio_bytes = BASE64
        .decode(&request.audio)
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("invalid base64 audio: {}", e)))?;
    let clip = wav::decode_wav(&audio_bytes)
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("invalid audio: {}", e)))?;

    let run = state
        .pipeline
        .run(clip, &request.src_lang, &request.tgt_lang)
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    Ok(Json(TranslateResponse {
        audio: BASE64.encode(&run.audio.audio),
        transcript: run.transcript.text.clone(),
        translation: run.translation.text.clone(),
        used_fallback: run.used_fallback(),
    }))
}
