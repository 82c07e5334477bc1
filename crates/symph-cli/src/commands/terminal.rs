//! Terminal command implementation
//!
//! An interactive loop over the command surface of [`Terminal`]. Lines are
//! read on a background thread; playbacks are awaited on the runtime so a
//! finished melody is reported while the prompt stays responsive.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use tokio::sync::mpsc;
use tokio::time::Instant;

use symph_backend_audio::{
    AudioError, AudioSession, OfflineDevice, PlaybackId, PlaybackOutcome, PlaybackToken,
};
use symph_spec::{Transaction, TransactionSource, TransactionType};

use super::reporting::short_signature;
use crate::config::SymphConfig;
use crate::input::{self, TxArgs};
use crate::playback::{schedule_for, Voice};
use crate::terminal::{Terminal, TerminalAction, Theme};

enum Event {
    Line(String),
    Finished(PlaybackId, PlaybackOutcome),
    Closed,
}

/// Run the terminal command
///
/// # Arguments
/// * `args` - Optional initial transaction (`play` needs one)
/// * `record` - Write everything played to this WAV file on exit
/// * `config` - Resolved configuration
///
/// # Returns
/// Exit code: 0 on a clean exit
pub fn run(args: &TxArgs, record: Option<&str>, config: &SymphConfig) -> Result<ExitCode> {
    let initial = if args.signature.is_some() || args.lookup.is_some() {
        Some(input::resolve(args, config)?)
    } else {
        None
    };

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    let app = rt.block_on(repl(TerminalApp::new(config.clone(), initial)?))?;

    if let Some(path) = record {
        let wav = app.close().render_wav();
        fs::write(Path::new(path), &wav.wav_data)
            .with_context(|| format!("Failed to write recording: {}", path))?;
        println!(
            "{} {} ({:.2}s)",
            "Recorded".green().bold(),
            path,
            wav.duration_seconds()
        );
    }

    Ok(ExitCode::SUCCESS)
}

async fn repl(mut app: TerminalApp) -> Result<TerminalApp> {
    let (events_tx, mut events) = mpsc::unbounded_channel();
    spawn_line_reader(events_tx.clone());

    flush(&mut app)?;
    loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(Event::Line(line)) => {
                    if let Some(token) = app.handle_line(&line) {
                        let done = events_tx.clone();
                        tokio::spawn(async move {
                            let id = token.id();
                            let outcome = token.wait().await;
                            let _ = done.send(Event::Finished(id, outcome));
                        });
                    }
                }
                Some(Event::Finished(id, outcome)) => app.finished(id, outcome),
                Some(Event::Closed) | None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        }
        flush(&mut app)?;
    }

    app.stop();
    Ok(app)
}

fn spawn_line_reader(events: mpsc::UnboundedSender<Event>) {
    std::thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if events.send(Event::Line(line)).is_err() {
                        return;
                    }
                }
                Err(e) => {
                    log::warn!("stdin read failed: {}", e);
                    break;
                }
            }
        }
        let _ = events.send(Event::Closed);
    });
}

fn flush(app: &mut TerminalApp) -> Result<()> {
    let theme = app.theme();
    for line in app.take_output() {
        match theme {
            Theme::Dark => println!("{}", line.green()),
            Theme::Light => println!("{}", line.blue()),
        }
    }
    print!("$ ");
    io::stdout().flush().context("Failed to flush stdout")?;
    Ok(())
}

/// Terminal state plus the audio session it drives.
///
/// The offline device clock follows the runtime clock, so replaced
/// playbacks are cut at the moment the user asked.
pub struct TerminalApp {
    terminal: Terminal,
    session: AudioSession<OfflineDevice>,
    config: SymphConfig,
    current: Option<Transaction>,
    last_tick: Instant,
}

impl TerminalApp {
    /// Opens a terminal and its session.
    pub fn new(config: SymphConfig, current: Option<Transaction>) -> Result<Self, AudioError> {
        let mut session = AudioSession::new(OfflineDevice::new(config.sample_rate)?);
        session.set_master_gain(config.master_gain);
        let mut terminal = Terminal::new(config.token_address.clone());
        if let Some(tx) = &current {
            terminal.print(format!("Selected {}", short_signature(&tx.signature)));
        }
        Ok(Self {
            terminal,
            session,
            config,
            current,
            last_tick: Instant::now(),
        })
    }

    pub fn theme(&self) -> Theme {
        self.terminal.theme()
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    /// Lines not yet shown.
    pub fn take_output(&mut self) -> Vec<String> {
        self.terminal.take_unprinted()
    }

    /// Handles one input line; returns the token of a playback it started.
    pub fn handle_line(&mut self, line: &str) -> Option<PlaybackToken> {
        match self.terminal.handle(line) {
            TerminalAction::None => None,
            TerminalAction::Play => match self.current.clone() {
                Some(tx) => self.start(&tx, Voice::Notes),
                None => {
                    self.terminal
                        .print("No transaction selected; try quantum <signature>");
                    None
                }
            },
            TerminalAction::Stop => {
                self.stop();
                None
            }
            TerminalAction::Quantum(signature) => {
                let tx = self.resolve(&signature);
                self.current = Some(tx.clone());
                self.start(&tx, Voice::Quantum)
            }
            TerminalAction::Fallthrough(cmd) => {
                self.terminal.print(format!("Command not found: {}", cmd));
                None
            }
        }
    }

    /// Reports a playback that ran to its end.
    pub fn finished(&mut self, id: PlaybackId, outcome: PlaybackOutcome) {
        if outcome == PlaybackOutcome::Completed && self.session.active() == Some(id) {
            self.terminal.print("Playback finished");
        }
    }

    /// Silences the active playback, if any.
    pub fn stop(&mut self) {
        self.tick();
        if self.session.stop() {
            self.terminal.print("Stopped");
        }
    }

    /// Releases the device with everything played so far.
    pub fn close(self) -> OfflineDevice {
        self.session.close()
    }

    fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.session.device_mut().advance(elapsed.as_secs_f64());
        self.last_tick = now;
    }

    fn resolve(&self, signature: &str) -> Transaction {
        self.config
            .transaction_source()
            .and_then(|source| source.lookup(signature))
            .unwrap_or_else(|| {
                log::debug!("{} not in source, using signature only", signature);
                Transaction::builder(signature, TransactionType::Unknown).build()
            })
    }

    fn start(&mut self, tx: &Transaction, voice: Voice) -> Option<PlaybackToken> {
        let schedule = match schedule_for(voice, tx, &self.config) {
            Ok(schedule) => schedule,
            Err(e) => {
                self.terminal.print(format!("Error: {}", e));
                return None;
            }
        };

        self.tick();
        match self.session.play(&schedule) {
            Ok(token) => {
                self.terminal.print(format!(
                    "Playing {} ({}, {:.1}s)",
                    short_signature(&tx.signature),
                    voice.as_str(),
                    token.duration()
                ));
                Some(token)
            }
            Err(e) => {
                self.terminal.print(format!("Error: {}", e));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config() -> SymphConfig {
        SymphConfig {
            sample_rate: 8000,
            ..Default::default()
        }
    }

    fn selected() -> Option<Transaction> {
        Some(Transaction::builder("ab12cd34", TransactionType::Swap).build())
    }

    #[tokio::test(start_paused = true)]
    async fn test_quantum_replaces_playing_melody() {
        let mut app = TerminalApp::new(config(), selected()).unwrap();
        let first = app.handle_line("play").unwrap();
        let first_id = first.id();

        tokio::time::advance(Duration::from_millis(500)).await;
        let second = app.handle_line("quantum ab12").unwrap();

        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
        assert_eq!(first.wait().await, PlaybackOutcome::Cancelled);

        let device = app.close();
        let cut = device.cut_time(first_id).unwrap();
        assert!((cut - 0.5).abs() < 1e-6);
        assert_eq!(device.playback_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_runs_to_completion() {
        let mut app = TerminalApp::new(config(), selected()).unwrap();
        let token = app.handle_line("play").unwrap();
        let id = token.id();
        assert!((token.duration() - 1.6).abs() < 1e-9);

        let outcome = token.wait().await;
        assert_eq!(outcome, PlaybackOutcome::Completed);
        app.finished(id, outcome);
        assert!(app.take_output().contains(&"Playback finished".to_string()));
    }

    #[test]
    fn test_play_without_selection() {
        let mut app = TerminalApp::new(config(), None).unwrap();
        assert!(app.handle_line("play").is_none());
        let out = app.take_output();
        assert!(out.iter().any(|l| l.starts_with("No transaction selected")));
    }

    #[test]
    fn test_stop_and_fallthrough() {
        let mut app = TerminalApp::new(config(), selected()).unwrap();
        app.take_output();

        app.handle_line("stop");
        assert_eq!(app.take_output(), vec!["$ stop"]);

        app.handle_line("refresh");
        assert_eq!(app.take_output(), vec!["$ refresh", "Command not found: refresh"]);
    }

    #[test]
    fn test_stop_silences_active_playback() {
        let mut app = TerminalApp::new(config(), selected()).unwrap();
        let token = app.handle_line("play").unwrap();
        app.handle_line("stop");
        assert!(token.is_cancelled());
        assert!(app.take_output().contains(&"Stopped".to_string()));
    }
}
