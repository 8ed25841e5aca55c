use serde::{Deserialize, Serialize};

/// A captured audio clip (mono f32 samples).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioClip {
    pub sample_rate: u32,
    pub channels: u8,
    pub samples: Vec<f32>,
}

impl AudioClip {
    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 || self.channels == 0 {
            return 0.0;
        }
        self.samples.len() as f32 / (self.sample_rate as f32 * self.channels as f32)
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
    /// Language the backend detected, when it reports one.
    pub language: Option<String>,
    pub duration_secs: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    pub text: String,
    /// True when the backend failed and the source text was kept unchanged.
    pub used_fallback: bool,
}

/// Encoded audio bytes produced by the synthesis backend (WAV).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesizedAudio {
    pub audio: Vec<u8>,
}

impl SynthesizedAudio {
    pub fn is_empty(&self) -> bool {
        self.audio.is_empty()
    }
}
