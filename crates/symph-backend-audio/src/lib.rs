//! Symph Audio Backend - Tone Scheduling, Offline Rendering and Playback
//!
//! This crate turns generator output into sound:
//!
//! 1. A [`Schedule`] is built from notes, DNA or a quantum state (see
//!    [`schedule`]).
//! 2. An [`AudioSession`] hands schedules to an [`AudioDevice`], keeping at
//!    most one playback active.
//! 3. The [`OfflineDevice`] renders the timeline to samples and to a
//!    deterministic WAV file.
//!
//! # Example
//!
//! ```
//! use symph_backend_audio::{note_schedule, AudioSession, OfflineDevice, DEFAULT_STEP_SECONDS};
//! use symph_spec::{Note, NoteSequence};
//!
//! let notes = NoteSequence::new(vec![Note::from_frequency(220.0), Note::from_frequency(330.0)]);
//! let schedule = note_schedule(&notes, DEFAULT_STEP_SECONDS);
//!
//! let mut session = AudioSession::new(OfflineDevice::new(44100).unwrap());
//! let token = session.play(&schedule).unwrap();
//! assert!((token.duration() - 0.4).abs() < 1e-9);
//!
//! let wav = session.close().render_wav();
//! assert_eq!(wav.pcm_hash.len(), 64);
//! ```
//!
//! # Crate Structure
//!
//! - [`schedule`] - Tone events, bus effects and schedule builders
//! - [`device`] - Device trait and the offline renderer
//! - [`session`] - Playback sessions and awaitable tokens
//! - [`bus`] - All-pass plus feedback-delay bus
//! - [`filter`] - Biquad all-pass filter
//! - [`delay_line`] - Ring buffer delay
//! - [`oscillator`] - Sine tones with linear fades
//! - [`spectrum`] - FFT magnitude spectra for visualization
//! - [`wav`] - Deterministic WAV file writer

pub mod bus;
pub mod delay_line;
pub mod device;
pub mod error;
pub mod filter;
pub mod oscillator;
pub mod schedule;
pub mod session;
pub mod spectrum;
pub mod wav;

pub use device::{AudioDevice, OfflineDevice, PlaybackId};
pub use error::{AudioError, AudioResult};
pub use schedule::{
    dna_schedule, note_schedule, quantum_schedule, BusEffects, Schedule, ToneEvent,
    DEFAULT_STEP_SECONDS,
};
pub use session::{AudioSession, PlaybackOutcome, PlaybackToken, DEFAULT_MASTER_GAIN};
pub use wav::WavResult;
