//! 16-bit mono encoding.

/// Bytes before the PCM payload.
pub const HEADER_LEN: usize = 44;

const BYTES_PER_SAMPLE: u32 = 2;
const FORMAT_PCM: u16 = 1;
const MONO: u16 = 1;

/// Builds a complete mono WAV file around 16-bit PCM bytes.
pub fn encode_mono(sample_rate: u32, pcm: &[u8]) -> Vec<u8> {
    let data_len = pcm.len() as u32;
    let mut out = Vec::with_capacity(HEADER_LEN + pcm.len());

    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(HEADER_LEN as u32 - 8 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&FORMAT_PCM.to_le_bytes());
    out.extend_from_slice(&MONO.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&(sample_rate * BYTES_PER_SAMPLE).to_le_bytes());
    out.extend_from_slice(&(BYTES_PER_SAMPLE as u16).to_le_bytes());
    out.extend_from_slice(&(BYTES_PER_SAMPLE as u16 * 8).to_le_bytes());

    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    out.extend_from_slice(pcm);
    out
}

/// Quantizes samples to little-endian i16, hard clipping to [-1, 1].
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    samples
        .iter()
        .flat_map(|s| {
            let q = (s.clamp(-1.0, 1.0) * i16::MAX as f64).round() as i16;
            q.to_le_bytes()
        })
        .collect()
}
