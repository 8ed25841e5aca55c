//! Minimal WAV encode/decode for moving audio across service boundaries.
//!
//! The recognition backend takes 16-bit PCM WAV and the synthesis backend
//! returns it, so a full codec crate is not needed here; tests read the
//! files back with `hound`.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{PipelineError, PipelineResult};
use crate::types::AudioClip;

/// Encode f32 samples as a 16-bit PCM WAV byte buffer.
///
/// Samples are clamped to [-1.0, 1.0] before scaling.
pub fn encode_wav_pcm16(samples: &[f32], sample_rate: u32, channels: u16) -> Vec<u8> {
    let data_len = samples.len() * 2;
    let mut out = Vec::with_capacity(44 + data_len);

    // RIFF header
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len as u32).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    // fmt chunk
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&channels.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    let byte_rate = sample_rate * channels as u32 * 2;
    out.extend_from_slice(&byte_rate.to_le_bytes());
    let block_align = channels * 2;
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&16u16.to_le_bytes());

    // data chunk
    out.extend_from_slice(b"data");
    out.extend_from_slice(&(data_len as u32).to_le_bytes());
    for &sample in samples {
        let clamped = sample.clamp(-1.0, 1.0);
        let value = (clamped * i16::MAX as f32) as i16;
        out.extend_from_slice(&value.to_le_bytes());
    }

    out
}

/// Encode a captured clip as a WAV byte buffer.
pub fn encode_clip(clip: &AudioClip) -> Vec<u8> {
    encode_wav_pcm16(&clip.samples, clip.sample_rate, clip.channels as u16)
}

/// Write encoded audio bytes to disk.
pub fn write_wav(path: &Path, bytes: &[u8]) -> PipelineResult<()> {
    let mut file = File::create(path)
        .map_err(|e| PipelineError::new(format!("failed to create {}: {}", path.display(), e)))?;
    file.write_all(bytes)
        .map_err(|e| PipelineError::new(format!("failed to write {}: {}", path.display(), e)))?;
    Ok(())
}

/// Decode a 16-bit PCM WAV buffer back to an [`AudioClip`].
///
/// Walks the RIFF chunks for `fmt ` and `data`; anything other than
/// uncompressed 16-bit PCM is rejected.
pub fn decode_wav(bytes: &[u8]) -> PipelineResult<AudioClip> {
    if bytes.len() < 44 {
        return Err(PipelineError::new("WAV buffer too small to parse"));
    }
    if &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
        return Err(PipelineError::new("not a RIFF/WAVE buffer"));
    }

    let mut sample_rate = 0u32;
    let mut channels = 0u16;
    let mut bits_per_sample = 0u16;
    let mut data: Option<&[u8]> = None;

    let mut offset = 12;
    while offset + 8 <= bytes.len() {
        let chunk_id = &bytes[offset..offset + 4];
        let chunk_size = u32::from_le_bytes([
            bytes[offset + 4],
            bytes[offset + 5],
            bytes[offset + 6],
            bytes[offset + 7],
        ]) as usize;
        let body_start = offset + 8;
        let body_end = (body_start + chunk_size).min(bytes.len());

        match chunk_id {
            b"fmt " => {
                let body = &bytes[body_start..body_end];
                if body.len() < 16 {
                    return Err(PipelineError::new("truncated fmt chunk"));
                }
                let format = u16::from_le_bytes([body[0], body[1]]);
                if format != 1 {
                    return Err(PipelineError::new(format!(
                        "unsupported WAV format code {} (expected PCM)",
                        format
                    )));
                }
                channels = u16::from_le_bytes([body[2], body[3]]);
                sample_rate = u32::from_le_bytes([body[4], body[5], body[6], body[7]]);
                bits_per_sample = u16::from_le_bytes([body[14], body[15]]);
            }
            b"data" => {
                data = Some(&bytes[body_start..body_end]);
            }
            _ => {}
        }

        // Chunks are padded to 2-byte boundaries.
        offset = body_start + ((chunk_size + 1) & !1);
    }

    let data = data.ok_or_else(|| PipelineError::new("WAV buffer has no data chunk"))?;
    if sample_rate == 0 || channels == 0 {
        return Err(PipelineError::new("WAV buffer has no fmt chunk"));
    }
    if bits_per_sample != 16 {
        return Err(PipelineError::new(format!(
            "unsupported bit depth {} (expected 16)",
            bits_per_sample
        )));
    }

    let samples = data
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / i16::MAX as f32)
        .collect();

    Ok(AudioClip {
        sample_rate,
        channels: channels as u8,
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_writes_riff_header() {
        let bytes = encode_wav_pcm16(&[0.0; 480], 48_000, 1);
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(bytes.len(), 44 + 480 * 2);
    }

    #[test]
    fn test_decode_recovers_format() {
        let clip = AudioClip {
            sample_rate: 48_000,
            channels: 1,
            samples: vec![0.0, 0.5, -0.5, 1.0],
        };
        let decoded = decode_wav(&encode_clip(&clip)).unwrap();
        assert_eq!(decoded.sample_rate, 48_000);
        assert_eq!(decoded.channels, 1);
        assert_eq!(decoded.samples.len(), 4);
        assert!((decoded.samples[1] - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_wav(b"not audio").is_err());
        assert!(decode_wav(&[0u8; 64]).is_err());
    }

    #[test]
    fn test_encode_clamps_out_of_range_samples() {
        let bytes = encode_wav_pcm16(&[2.0, -2.0], 16_000, 1);
        let hi = i16::from_le_bytes([bytes[44], bytes[45]]);
        let lo = i16::from_le_bytes([bytes[46], bytes[47]]);
        assert_eq!(hi, i16::MAX);
        assert_eq!(lo, -i16::MAX);
    }
}
