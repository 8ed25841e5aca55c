//! Microphone capture.
//!
//! One fixed-duration, single-channel recording per pipeline run. The
//! cpal stream lives only for the duration of [`AudioSource::record`];
//! dropping it stops the device.

use std::sync::mpsc;
use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use crate::error::{PipelineError, PipelineResult};
use crate::types::AudioClip;

pub const DEFAULT_CAPTURE_SECS: u64 = 5;
pub const DEFAULT_CAPTURE_SAMPLE_RATE: u32 = 48_000;

/// Something that can produce one audio clip of the requested duration.
pub trait AudioSource: Send + Sync {
    fn record(&self, duration: Duration) -> PipelineResult<AudioClip>;
}

/// cpal-backed microphone source.
pub struct MicrophoneSource {
    sample_rate: u32,
}

impl MicrophoneSource {
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }
}

impl Default for MicrophoneSource {
    fn default() -> Self {
        Self::new(DEFAULT_CAPTURE_SAMPLE_RATE)
    }
}

impl AudioSource for MicrophoneSource {
    fn record(&self, duration: Duration) -> PipelineResult<AudioClip> {
        let host = cpal::default_host();
        let device = host
            .default_input_device()
            .ok_or_else(|| PipelineError::capture("no input device available"))?;

        // Ask for mono at the configured rate; fall back to whatever the
        // device natively offers and down-mix afterwards.
        let supports_wanted = device
            .supported_input_configs()
            .map(|mut ranges| {
                ranges.any(|range| {
                    range.channels() == 1
                        && range.sample_format() == cpal::SampleFormat::F32
                        && range.min_sample_rate().0 <= self.sample_rate
                        && range.max_sample_rate().0 >= self.sample_rate
                })
            })
            .unwrap_or(false);

        let config = if supports_wanted {
            cpal::StreamConfig {
                channels: 1,
                sample_rate: cpal::SampleRate(self.sample_rate),
                buffer_size: cpal::BufferSize::Default,
            }
        } else {
            let default = device
                .default_input_config()
                .map_err(|e| PipelineError::capture(format!("no usable input config: {}", e)))?;
            if default.sample_format() != cpal::SampleFormat::F32 {
                return Err(PipelineError::capture(format!(
                    "unsupported input sample format: {:?}",
                    default.sample_format()
                )));
            }
            default.config()
        };

        let channels = config.channels as usize;
        let sample_rate = config.sample_rate.0;
        let target_samples = (duration.as_secs_f64() * sample_rate as f64) as usize * channels;

        let (tx, rx) = mpsc::channel::<Vec<f32>>();
        let stream = device
            .build_input_stream(
                &config,
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    let _ = tx.send(data.to_vec());
                },
                |err| eprintln!("[CAPTURE] stream error: {}", err),
                None,
            )
            .map_err(|e| PipelineError::capture(format!("failed to open input stream: {}", e)))?;

        stream
            .play()
            .map_err(|e| PipelineError::capture(format!("failed to start input stream: {}", e)))?;

        let mut samples = Vec::with_capacity(target_samples);
        let stall_timeout = duration + Duration::from_secs(2);
        while samples.len() < target_samples {
            match rx.recv_timeout(stall_timeout) {
                Ok(chunk) => samples.extend_from_slice(&chunk),
                Err(_) => {
                    return Err(PipelineError::capture(
                        "input stream stalled before the clip completed",
                    ))
                }
            }
        }
        drop(stream);
        samples.truncate(target_samples);

        let samples = if channels > 1 {
            mix_to_mono(&samples, channels)
        } else {
            samples
        };

        Ok(AudioClip {
            sample_rate,
            channels: 1,
            samples,
        })
    }
}

/// Average interleaved frames down to a single channel.
fn mix_to_mono(samples: &[f32], channels: usize) -> Vec<f32> {
    samples
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}

/// Source that replays a fixed clip. Used by tests and development runs
/// on machines without a microphone.
pub struct StaticSource {
    clip: AudioClip,
}

impl StaticSource {
    pub fn new(clip: AudioClip) -> Self {
        Self { clip }
    }

    /// A silent clip of the requested duration.
    pub fn silence(duration: Duration, sample_rate: u32) -> Self {
        let count = (duration.as_secs_f64() * sample_rate as f64) as usize;
        Self::new(AudioClip {
            sample_rate,
            channels: 1,
            samples: vec![0.0; count],
        })
    }
}

impl AudioSource for StaticSource {
    fn record(&self, _duration: Duration) -> PipelineResult<AudioClip> {
        Ok(self.clip.clone())
    }
}
