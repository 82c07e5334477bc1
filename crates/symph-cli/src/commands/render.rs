//! Render command implementation
//!
//! Plays a transaction into the offline device and writes the result as a
//! 16-bit mono WAV file.

use anyhow::Result;
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use symph_backend_audio::{AudioSession, OfflineDevice, WavResult};
use symph_spec::Transaction;

use super::json_output::{emit, error_codes, JsonError, RenderResult};
use super::reporting::print_transaction;
use crate::config::SymphConfig;
use crate::input::{self, TxArgs};
use crate::playback::{schedule_for, Voice};

/// Run the render command
///
/// # Arguments
/// * `args` - Transaction arguments
/// * `voice` - Generator that drives the audio
/// * `output` - Path of the WAV file to write
/// * `config` - Resolved configuration
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    args: &TxArgs,
    voice: Voice,
    output: &str,
    config: &SymphConfig,
    json_output: bool,
) -> Result<ExitCode> {
    let tx = input::resolve(args, config);
    if json_output {
        return emit(
            tx.map_err(|e| e.to_json())
                .and_then(|tx| render_to_file(&tx, voice, Path::new(output), config)),
        );
    }

    let tx = tx?;
    println!("{}", "Rendering:".cyan().bold());
    print_transaction(&tx);
    println!("{} {}", "Voice:".dimmed(), voice.as_str());

    let result = render_to_file(&tx, voice, Path::new(output), config)?;

    println!();
    println!(
        "{} {} ({} samples @ {} Hz, {:.2}s)",
        "Wrote".green().bold(),
        result.output,
        result.num_samples,
        result.sample_rate,
        result.duration_seconds
    );
    println!("{} {}", "PCM hash:".dimmed(), &result.pcm_hash[..16]);

    Ok(ExitCode::SUCCESS)
}

/// Plays a transaction through a fresh session and returns the device.
pub fn play_offline(
    tx: &Transaction,
    voice: Voice,
    config: &SymphConfig,
) -> Result<OfflineDevice, JsonError> {
    let schedule = schedule_for(voice, tx, config).map_err(|e| JsonError::from_backend(&e))?;
    let device = OfflineDevice::new(config.sample_rate).map_err(|e| JsonError::from_backend(&e))?;

    let mut session = AudioSession::new(device);
    session.set_master_gain(config.master_gain);
    session
        .play(&schedule)
        .map_err(|e| JsonError::from_backend(&e))?;

    Ok(session.close())
}

/// Renders a transaction to WAV on the offline device.
pub fn render(tx: &Transaction, voice: Voice, config: &SymphConfig) -> Result<WavResult, JsonError> {
    Ok(play_offline(tx, voice, config)?.render_wav())
}

/// Renders and writes the WAV file.
pub fn render_to_file(
    tx: &Transaction,
    voice: Voice,
    output: &Path,
    config: &SymphConfig,
) -> Result<RenderResult, JsonError> {
    let wav = render(tx, voice, config)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            JsonError::new(
                error_codes::FILE_WRITE,
                format!("Failed to create {}: {}", parent.display(), e),
            )
        })?;
    }
    fs::write(output, &wav.wav_data).map_err(|e| {
        JsonError::new(
            error_codes::FILE_WRITE,
            format!("Failed to write {}: {}", output.display(), e),
        )
    })?;
    log::info!("wrote {} bytes to {}", wav.wav_data.len(), output.display());

    Ok(RenderResult {
        signature: tx.signature.clone(),
        voice: voice.as_str().to_string(),
        output: output.display().to_string(),
        sample_rate: wav.sample_rate,
        num_samples: wav.num_samples,
        duration_seconds: wav.duration_seconds(),
        pcm_hash: wav.pcm_hash,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use symph_spec::TransactionType;

    fn config() -> SymphConfig {
        SymphConfig {
            sample_rate: 8000,
            ..Default::default()
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let tx = Transaction::builder("ab12cd34", TransactionType::Swap)
            .value(5000.0)
            .build();
        let a = render(&tx, Voice::Quantum, &config()).unwrap();
        let b = render(&tx, Voice::Quantum, &config()).unwrap();
        assert_eq!(a.pcm_hash, b.pcm_hash);
        // Quantum playback rings on through the delay tail.
        assert!(a.duration_seconds() > 8.0 * 0.2);
    }

    #[test]
    fn test_render_to_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("ab12.wav");
        let tx = Transaction::builder("ab12", TransactionType::Transfer).build();

        let result = render_to_file(&tx, Voice::Notes, &path, &config()).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..4], b"RIFF");
        assert_eq!(result.sample_rate, 8000);
        assert!((6400..=6401).contains(&result.num_samples));
        assert_eq!(result.pcm_hash.len(), 64);
    }
}
