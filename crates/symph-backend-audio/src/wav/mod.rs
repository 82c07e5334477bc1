//! Deterministic WAV output.
//!
//! Renders are stored as 16-bit mono PCM with a fixed 44-byte header and no
//! metadata chunks, so two renders of the same timeline are byte-identical.
//! The BLAKE3 hash of the PCM payload identifies a render.

mod chunks;
mod encode;

#[cfg(test)]
mod tests;

pub use chunks::{compute_pcm_hash, extract_pcm_data};
pub use encode::{encode_mono, samples_to_pcm16, HEADER_LEN};

/// A rendered mono WAV file and its PCM hash.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 of the PCM payload, lowercase hex.
    pub pcm_hash: String,
    pub sample_rate: u32,
    pub num_samples: usize,
}

impl WavResult {
    /// Quantizes and encodes mono samples.
    pub fn from_mono(samples: &[f64], sample_rate: u32) -> Self {
        let pcm = samples_to_pcm16(samples);
        Self {
            pcm_hash: blake3::hash(&pcm).to_hex().to_string(),
            wav_data: encode_mono(sample_rate, &pcm),
            sample_rate,
            num_samples: samples.len(),
        }
    }

    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}
