//! Tone schedules built from generator output.
//!
//! A [`Schedule`] is a flat list of timed sine tones plus optional bus
//! effects. It is the only thing an [`AudioDevice`](crate::AudioDevice)
//! needs to play a transaction.

use serde::{Deserialize, Serialize};
use symph_spec::{DnaSequence, NoteSequence, QuantumState};

use crate::error::{AudioError, AudioResult};

/// Default time between consecutive notes, in seconds.
pub const DEFAULT_STEP_SECONDS: f64 = 0.2;

/// Gain of a single note in a note or DNA schedule.
pub const NOTE_GAIN: f64 = 0.2;

/// Per-voice gains of the quantum schedule before amplitude scaling.
pub const MELODY_GAIN: f64 = 0.5;
pub const HARMONY_GAIN: f64 = 0.15;
pub const RHYTHM_GAIN: f64 = 0.15;

/// Share of the quantum voice gain kept when the amplitude is zero.
pub const AMPLITUDE_FLOOR: f64 = 0.4;

/// Q of the bus all-pass filter.
pub const ALLPASS_Q: f64 = 0.707;

/// Feedback of the bus delay line.
pub const DELAY_FEEDBACK: f64 = 0.3;

/// A single sine tone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneEvent {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Offset from the start of the playback, in seconds.
    pub start: f64,
    /// Length in seconds.
    pub duration: f64,
    /// Linear peak gain.
    pub gain: f64,
}

impl ToneEvent {
    /// Time at which the tone ends.
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// Effects applied to the mixed playback before the master gain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BusEffects {
    /// All-pass center frequency in Hz.
    pub allpass_hz: f64,
    pub allpass_q: f64,
    /// Delay time in seconds.
    pub delay_seconds: f64,
    /// Delay feedback in [0, 1).
    pub delay_feedback: f64,
    /// Wet share of the delay in [0, 1].
    pub delay_mix: f64,
}

/// Timed tones plus bus effects for one playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub events: Vec<ToneEvent>,
    pub master_gain: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bus: Option<BusEffects>,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            master_gain: 1.0,
            bus: None,
        }
    }
}

impl Schedule {
    /// Creates a dry schedule at unity master gain.
    pub fn new(events: Vec<ToneEvent>) -> Self {
        Self {
            events,
            ..Self::default()
        }
    }

    /// Attaches bus effects.
    pub fn with_bus(mut self, bus: BusEffects) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Time at which the last tone ends (0 for an empty schedule).
    pub fn duration(&self) -> f64 {
        self.events.iter().map(ToneEvent::end).fold(0.0, f64::max)
    }

    /// Checks that every number in the schedule is playable.
    pub fn validate(&self) -> AudioResult<()> {
        for event in &self.events {
            if !event.frequency.is_finite() || event.frequency <= 0.0 {
                return Err(AudioError::InvalidFrequency {
                    freq: event.frequency,
                });
            }
            if !event.start.is_finite() || event.start < 0.0 {
                return Err(AudioError::InvalidDuration {
                    duration: event.start,
                });
            }
            if !event.duration.is_finite() || event.duration < 0.0 {
                return Err(AudioError::InvalidDuration {
                    duration: event.duration,
                });
            }
            if !event.gain.is_finite() || event.gain < 0.0 {
                return Err(AudioError::invalid_param(
                    "gain",
                    format!("must be a non-negative number, got {}", event.gain),
                ));
            }
        }

        if !(0.0..=1.0).contains(&self.master_gain) {
            return Err(AudioError::invalid_param(
                "master_gain",
                format!("must be between 0 and 1, got {}", self.master_gain),
            ));
        }

        if let Some(bus) = &self.bus {
            if !bus.allpass_hz.is_finite() || bus.allpass_hz <= 0.0 {
                return Err(AudioError::InvalidFrequency {
                    freq: bus.allpass_hz,
                });
            }
            if !bus.delay_seconds.is_finite() || bus.delay_seconds < 0.0 {
                return Err(AudioError::InvalidDuration {
                    duration: bus.delay_seconds,
                });
            }
            if !(0.0..1.0).contains(&bus.delay_feedback) {
                return Err(AudioError::invalid_param(
                    "delay_feedback",
                    format!("must be in [0, 1), got {}", bus.delay_feedback),
                ));
            }
            if !(0.0..=1.0).contains(&bus.delay_mix) {
                return Err(AudioError::invalid_param(
                    "delay_mix",
                    format!("must be between 0 and 1, got {}", bus.delay_mix),
                ));
            }
        }

        Ok(())
    }
}

/// One tone per note, `step` seconds apart.
pub fn note_schedule(notes: &NoteSequence, step: f64) -> Schedule {
    Schedule::new(sequential(notes.notes.iter().map(|n| n.frequency), step, NOTE_GAIN))
}

/// The expressed DNA motif, one degree per step above `base_frequency`.
///
/// Louder for more energetic transactions.
pub fn dna_schedule(dna: &DnaSequence, base_frequency: f64, step: f64) -> Schedule {
    let gain = NOTE_GAIN * (0.5 + 0.5 * dna.energy);
    Schedule::new(sequential(
        dna.motif_frequencies(base_frequency).into_iter(),
        step,
        gain,
    ))
}

/// Three simultaneous voices stepping through the quantum state.
///
/// At step `i`:
/// - melody plays `melody[i]` for the full step
/// - harmony plays `harmony[i % harmony.len()]` for the full step
/// - a rhythm pulse an octave below the melody plays for
///   `min(1, rhythm[i % rhythm.len()]) * step`
///
/// The bus all-pass is centred by phase (200-2000 Hz) and the delay is timed
/// and mixed by entanglement.
pub fn quantum_schedule(state: &QuantumState, step: f64) -> Schedule {
    let voices = &state.superposition;
    let scale = AMPLITUDE_FLOOR + (1.0 - AMPLITUDE_FLOOR) * state.amplitude;

    let mut events = Vec::with_capacity(voices.melody.len() * 3);
    for (i, &melody) in voices.melody.iter().enumerate() {
        let start = i as f64 * step;

        events.push(ToneEvent {
            frequency: melody,
            start,
            duration: step,
            gain: MELODY_GAIN * scale,
        });

        if !voices.harmony.is_empty() {
            events.push(ToneEvent {
                frequency: voices.harmony[i % voices.harmony.len()],
                start,
                duration: step,
                gain: HARMONY_GAIN * scale,
            });
        }

        if !voices.rhythm.is_empty() {
            let beat = voices.rhythm[i % voices.rhythm.len()].clamp(0.0, 1.0);
            events.push(ToneEvent {
                frequency: melody / 2.0,
                start,
                duration: beat * step,
                gain: RHYTHM_GAIN * scale,
            });
        }
    }

    Schedule::new(events).with_bus(BusEffects {
        allpass_hz: 200.0 + state.phase * 1800.0,
        allpass_q: ALLPASS_Q,
        delay_seconds: 0.05 + state.entanglement * 0.25,
        delay_feedback: DELAY_FEEDBACK,
        delay_mix: state.entanglement * 0.5,
    })
}

fn sequential(frequencies: impl Iterator<Item = f64>, step: f64, gain: f64) -> Vec<ToneEvent> {
    frequencies
        .enumerate()
        .map(|(i, frequency)| ToneEvent {
            frequency,
            start: i as f64 * step,
            duration: step,
            gain,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use symph_spec::{Note, Superposition};

    fn state(melody_len: usize, amplitude: f64, phase: f64, entanglement: f64) -> QuantumState {
        QuantumState {
            amplitude,
            phase,
            entanglement,
            superposition: Superposition {
                melody: vec![392.0; melody_len],
                harmony: vec![261.63, 293.66, 329.63, 349.23, 392.0, 440.0, 493.88],
                rhythm: vec![1.0, 0.5, 0.25, 0.125],
            },
        }
    }

    #[test]
    fn test_note_schedule_timing() {
        let notes = NoteSequence::new(vec![
            Note::from_frequency(220.0),
            Note::from_frequency(330.0),
            Note::from_frequency(440.0),
        ]);
        let schedule = note_schedule(&notes, DEFAULT_STEP_SECONDS);
        let starts: Vec<f64> = schedule.events.iter().map(|e| e.start).collect();
        assert_eq!(starts.len(), 3);
        assert!((starts[2] - 0.4).abs() < 1e-12);
        assert!((schedule.duration() - 0.6).abs() < 1e-12);
        assert!(schedule.bus.is_none());
        assert!(schedule.validate().is_ok());
    }

    #[test]
    fn test_quantum_schedule_duration_is_melody_length() {
        let s = quantum_schedule(&state(10, 0.5, 0.0, 0.5), 0.2);
        assert_eq!(s.events.len(), 30);
        assert!((s.duration() - 2.0).abs() < 1e-9);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_quantum_rhythm_pulse() {
        let s = quantum_schedule(&state(2, 1.0, 1.0, 0.0), 0.2);
        // Step 0: melody, harmony, rhythm (beat 1.0 spans the full step).
        let rhythm0 = s.events[2];
        assert_eq!(rhythm0.frequency, 196.0);
        assert!((rhythm0.duration - 0.2).abs() < 1e-12);
        // Step 1 harmony cycles to the second table entry.
        assert_eq!(s.events[4].frequency, 293.66);
    }

    #[test]
    fn test_quantum_bus_mapping() {
        let s = quantum_schedule(&state(1, 0.0, 0.5, 1.0), 0.2);
        let bus = s.bus.unwrap();
        assert!((bus.allpass_hz - 1100.0).abs() < 1e-9);
        assert!((bus.delay_seconds - 0.3).abs() < 1e-12);
        assert!((bus.delay_mix - 0.5).abs() < 1e-12);
        // Zero amplitude keeps the floor.
        assert!((s.events[0].gain - MELODY_GAIN * AMPLITUDE_FLOOR).abs() < 1e-12);
    }

    #[test]
    fn test_dna_schedule() {
        let dna = DnaSequence {
            pattern: [1, 3, 8, 5],
            mutations: vec![],
            energy: 1.0,
            rarity: 0.0,
        };
        let s = dna_schedule(&dna, 220.0, 0.2);
        assert_eq!(s.events.len(), 4);
        assert!((s.events[0].frequency - 220.0).abs() < 1e-9);
        assert!((s.events[0].gain - NOTE_GAIN).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_bad_numbers() {
        let bad = Schedule::new(vec![ToneEvent {
            frequency: f64::NAN,
            start: 0.0,
            duration: 0.1,
            gain: 0.1,
        }]);
        assert!(matches!(
            bad.validate(),
            Err(AudioError::InvalidFrequency { .. })
        ));

        let bad = Schedule::new(vec![ToneEvent {
            frequency: 440.0,
            start: -1.0,
            duration: 0.1,
            gain: 0.1,
        }]);
        assert!(bad.validate().is_err());

        let mut loud = Schedule::default();
        loud.master_gain = 1.5;
        assert!(loud.validate().is_err());
    }

    #[test]
    fn test_empty_schedule() {
        assert_eq!(Schedule::default().duration(), 0.0);
    }
}
