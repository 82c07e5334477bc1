use super::*;

fn u32_at(b: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]])
}

#[test]
fn test_header_layout() {
    let wav = encode_mono(44100, &[0u8; 8]);
    assert_eq!(wav.len(), HEADER_LEN + 8);
    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(u32_at(&wav, 4), 44);
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(u16::from_le_bytes([wav[22], wav[23]]), 1);
    assert_eq!(u32_at(&wav, 24), 44100);
    assert_eq!(u32_at(&wav, 28), 88200);
    assert_eq!(&wav[36..40], b"data");
    assert_eq!(u32_at(&wav, 40), 8);
}

#[test]
fn test_pcm16_clipping_and_rounding() {
    let pcm = samples_to_pcm16(&[2.0, -2.0, 0.0, 0.5]);
    let values: Vec<i16> = pcm
        .chunks(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect();
    assert_eq!(values, vec![32767, -32767, 0, 16384]);
}

#[test]
fn test_extract_and_hash() {
    let result = WavResult::from_mono(&[0.1, 0.2, 0.3], 8000);
    let pcm = extract_pcm_data(&result.wav_data).unwrap();
    assert_eq!(pcm.len(), 6);
    assert_eq!(compute_pcm_hash(&result.wav_data), Some(result.pcm_hash.clone()));
    assert!((result.duration_seconds() - 3.0 / 8000.0).abs() < 1e-12);
}

#[test]
fn test_extract_skips_padded_chunks() {
    let mut wav = b"RIFF\0\0\0\0WAVE".to_vec();
    wav.extend_from_slice(b"LIST");
    wav.extend_from_slice(&3u32.to_le_bytes());
    wav.extend_from_slice(&[1, 2, 3, 0]);
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&2u32.to_le_bytes());
    wav.extend_from_slice(&[9, 9]);
    assert_eq!(extract_pcm_data(&wav), Some(&[9u8, 9][..]));
}

#[test]
fn test_extract_rejects_garbage() {
    assert!(extract_pcm_data(b"not a wav").is_none());
    assert!(extract_pcm_data(&[0u8; 64]).is_none());
    assert!(extract_pcm_data(b"RIFF\0\0\0\0WAVE").is_none());
}
