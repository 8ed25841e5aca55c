use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use translator_engine::capture::{AudioSource, MicrophoneSource};
use translator_engine::config::{RuntimeConfig, DEFAULT_CONFIG_PATH};
use translator_engine::health_check::HealthChecker;
use translator_engine::pipeline::PipelineBuilder;
use translator_engine::progress::ConsoleProgress;
use translator_engine::wav;

/// Languages offered on the interactive surface. The recognition-locale
/// table supports far more; this is the curated pair the UI exposes.
const LANGUAGE_OPTIONS: &[(&str, &str)] = &[("en", "English"), ("hi", "Hindi")];

struct CliArgs {
    config_path: PathBuf,
    source: Option<String>,
    target: Option<String>,
    output_dir: PathBuf,
    list_languages: bool,
}

fn parse_args() -> anyhow::Result<CliArgs> {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = CliArgs {
        config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        source: None,
        target: None,
        output_dir: PathBuf::from("."),
        list_languages: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| anyhow::anyhow!("--config requires a path"))?;
                parsed.config_path = PathBuf::from(value);
            }
            "--source" | "-s" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| anyhow::anyhow!("--source requires a language tag"))?;
                parsed.source = Some(value.clone());
            }
            "--target" | "-t" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| anyhow::anyhow!("--target requires a language tag"))?;
                parsed.target = Some(value.clone());
            }
            "--output-dir" | "-o" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| anyhow::anyhow!("--output-dir requires a path"))?;
                parsed.output_dir = PathBuf::from(value);
            }
            "--list-languages" => parsed.list_languages = true,
            other => {
                return Err(anyhow::anyhow!(
                    "unknown argument '{}' (expected --source, --target, --config, --output-dir, --list-languages)",
                    other
                ))
            }
        }
        i += 1;
    }

    Ok(parsed)
}

fn check_language(tag: &str) -> anyhow::Result<()> {
    if LANGUAGE_OPTIONS.iter().any(|(code, _)| *code == tag) {
        return Ok(());
    }
    let supported: Vec<&str> = LANGUAGE_OPTIONS.iter().map(|(code, _)| *code).collect();
    Err(anyhow::anyhow!(
        "unsupported language '{}' (supported: {})",
        tag,
        supported.join(", ")
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = parse_args()?;

    if args.list_languages {
        for (code, name) in LANGUAGE_OPTIONS {
            println!("{}  {}", code, name);
        }
        return Ok(());
    }

    let config = RuntimeConfig::load(&args.config_path)?;
    let source = args
        .source
        .unwrap_or_else(|| config.pipeline.source_language.clone());
    let target = args
        .target
        .unwrap_or_else(|| config.pipeline.target_language.clone());
    check_language(&source)?;
    check_language(&target)?;

    // Warn about unreachable services, but let the run proceed; the failing
    // stage will report precisely what is down.
    let checker = HealthChecker::new();
    for health in checker
        .check_all(&config.asr.url, &config.nmt.url, &config.tts.url)
        .await
    {
        if !health.is_healthy {
            eprintln!(
                "[WARN] {} service is not healthy at {} ({})",
                health.service_name,
                health.url,
                health.error.unwrap_or_else(|| "unknown error".to_string())
            );
        }
    }

    let duration = Duration::from_secs(config.capture.duration_secs);
    eprintln!(
        "[INFO] Recording {} seconds at {} Hz... Speak now!",
        config.capture.duration_secs, config.capture.sample_rate
    );
    let microphone = MicrophoneSource::new(config.capture.sample_rate);
    let clip = tokio::task::spawn_blocking(move || microphone.record(duration))
        .await
        .map_err(|e| anyhow::anyhow!("capture task panicked: {}", e))??;
    eprintln!("[INFO] Recording completed ({:.1}s)", clip.duration_secs());

    let pipeline = PipelineBuilder::new()
        .asr_with_http(&config.asr.url, config.asr.timeout_secs)?
        .nmt_with_http(&config.nmt.url, config.nmt.api_key.clone())
        .tts_with_http(config.tts_client_config())?
        .progress(Arc::new(ConsoleProgress))
        .with_run_log()
        .build()?;

    let run = pipeline.run(clip, &source, &target).await?;

    println!("Transcribed text: {}", run.transcript.text);
    println!("Translated text:  {}", run.translation.text);
    if run.used_fallback() {
        println!("(translation service was unavailable; kept the original text)");
    }

    std::fs::create_dir_all(&args.output_dir)?;
    let output_path = args.output_dir.join(format!("translated_{}.wav", target));
    wav::write_wav(&output_path, &run.audio.audio)?;
    println!("Saved translated audio to {}", output_path.display());

    Ok(())
}
