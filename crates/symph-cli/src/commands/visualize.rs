//! Visualize command implementation
//!
//! Renders a transaction offline and draws one text frame of it with a
//! named visualizer.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use symph_spec::Transaction;

use super::json_output::{emit, error_codes, JsonError, VisualizeResult};
use super::render::play_offline;
use crate::config::SymphConfig;
use crate::input::{self, TxArgs};
use crate::playback::{schedule_for, Voice};
use crate::visualizer::{FrameState, VisualizerRegistry};

/// Frame geometry and timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOptions {
    /// Seconds into the playback; `None` picks the middle.
    pub at: Option<f64>,
    pub width: usize,
    pub height: usize,
}

/// Run the visualize command
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    args: &TxArgs,
    name: &str,
    voice: Voice,
    options: FrameOptions,
    config: &SymphConfig,
    json_output: bool,
) -> Result<ExitCode> {
    let tx = input::resolve(args, config);
    if json_output {
        return emit(
            tx.map_err(|e| e.to_json())
                .and_then(|tx| visualize(&tx, name, voice, options, config)),
        );
    }

    let tx = tx?;
    let result = visualize(&tx, name, voice, options, config)?;
    println!(
        "{} {} at {:.2}s",
        result.visualizer.cyan().bold(),
        tx.signature.dimmed(),
        result.time_seconds
    );
    for line in &result.frame {
        println!("{}", line.green());
    }
    Ok(ExitCode::SUCCESS)
}

/// Draws one frame of the transaction's playback.
pub fn visualize(
    tx: &Transaction,
    name: &str,
    voice: Voice,
    options: FrameOptions,
    config: &SymphConfig,
) -> Result<VisualizeResult, JsonError> {
    let registry = VisualizerRegistry::default();
    let visualizer = registry.get(name).ok_or_else(|| {
        JsonError::new(
            error_codes::UNKNOWN_VISUALIZER,
            format!("unknown visualizer: {}", name),
        )
        .with_suggestion(format!("available: {}", registry.names().join(", ")))
    })?;
    if options.width == 0 || options.height == 0 {
        return Err(JsonError::new(
            error_codes::INVALID_ARGUMENT,
            "width and height must be positive",
        ));
    }

    let schedule = schedule_for(voice, tx, config).map_err(|e| JsonError::from_backend(&e))?;
    let device = play_offline(tx, voice, config)?;
    let rendered = device.render();

    let time = options
        .at
        .filter(|t| t.is_finite() && *t >= 0.0)
        .unwrap_or(schedule.duration() / 2.0);

    let sounding: Vec<f64> = schedule
        .events
        .iter()
        .filter(|e| e.start <= time && time < e.end())
        .map(|e| e.frequency)
        .collect();
    let notes = if sounding.is_empty() {
        schedule.events.iter().map(|e| e.frequency).collect()
    } else {
        sounding
    };

    let frame = FrameState::at(
        &rendered,
        device.sample_rate(),
        time,
        notes,
        options.width,
        options.height,
    );

    Ok(VisualizeResult {
        signature: tx.signature.clone(),
        visualizer: visualizer.name().to_string(),
        time_seconds: time,
        frame: visualizer.render(&frame).lines().map(str::to_string).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use symph_spec::TransactionType;

    fn options() -> FrameOptions {
        FrameOptions {
            at: None,
            width: 24,
            height: 8,
        }
    }

    fn config() -> SymphConfig {
        SymphConfig {
            sample_rate: 8000,
            ..Default::default()
        }
    }

    #[test]
    fn test_each_visualizer_draws_a_frame() {
        let tx = Transaction::builder("ab12cd34", TransactionType::Swap).build();
        for name in ["wave", "frequency", "matrix"] {
            let result = visualize(&tx, name, Voice::Notes, options(), &config()).unwrap();
            assert_eq!(result.frame.len(), 8, "{}", name);
            assert!((result.time_seconds - 0.8).abs() < 1e-9);
        }
    }

    #[test]
    fn test_unknown_visualizer() {
        let tx = Transaction::builder("ab12", TransactionType::Swap).build();
        let err = visualize(&tx, "wave_3d", Voice::Notes, options(), &config()).unwrap_err();
        assert_eq!(err.code, error_codes::UNKNOWN_VISUALIZER);
        assert_eq!(err.suggestion.as_deref(), Some("available: frequency, matrix, wave"));
    }

    #[test]
    fn test_frames_are_deterministic() {
        let tx = Transaction::builder("ab12cd34", TransactionType::Mint).build();
        let opts = FrameOptions {
            at: Some(0.3),
            ..options()
        };
        let a = visualize(&tx, "frequency", Voice::Quantum, opts, &config()).unwrap();
        let b = visualize(&tx, "frequency", Voice::Quantum, opts, &config()).unwrap();
        assert_eq!(a.frame, b.frame);
    }
}
