//! Reading RIFF chunks back out of a WAV buffer.

fn read_u32(bytes: &[u8], at: usize) -> Option<u32> {
    let raw = bytes.get(at..at + 4)?;
    Some(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
}

/// Returns the payload of the `data` chunk, or `None` for anything that is
/// not a well-formed RIFF/WAVE buffer.
pub fn extract_pcm_data(wav: &[u8]) -> Option<&[u8]> {
    if wav.get(0..4)? != b"RIFF" || wav.get(8..12)? != b"WAVE" {
        return None;
    }

    let mut cursor = 12;
    loop {
        let id = wav.get(cursor..cursor + 4)?;
        let len = read_u32(wav, cursor + 4)? as usize;
        let body = cursor + 8;
        if id == b"data" {
            return wav.get(body..body + len);
        }
        // Odd-sized chunks carry a pad byte.
        cursor = body + len + (len & 1);
    }
}

/// BLAKE3 of the PCM payload, lowercase hex.
pub fn compute_pcm_hash(wav: &[u8]) -> Option<String> {
    extract_pcm_data(wav).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
