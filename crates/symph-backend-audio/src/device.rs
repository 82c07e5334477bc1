//! Audio output devices.
//!
//! The device is the only collaborator that produces sound. It receives
//! whole schedules, appends them to its timeline, and can silence a
//! playback from a given time onward. It reports no progress.

use crate::bus::{tail_seconds, BusProcessor};
use crate::error::{AudioError, AudioResult};
use crate::oscillator::{render_tone, FADE_SECONDS};
use crate::schedule::Schedule;
use crate::wav::WavResult;

/// Identifier of one playback on a device.
pub type PlaybackId = u64;

/// A sink for scheduled tones.
pub trait AudioDevice {
    /// Current device time in seconds.
    fn now(&self) -> f64;

    /// Appends a schedule to the timeline, starting at device time `at`.
    fn schedule(&mut self, id: PlaybackId, at: f64, schedule: &Schedule) -> AudioResult<()>;

    /// Silences a playback from device time `at` onward.
    ///
    /// Silencing an unknown or already silenced playback does nothing.
    fn silence(&mut self, id: PlaybackId, at: f64);
}

/// One playback on the offline timeline.
#[derive(Debug, Clone)]
struct Playback {
    id: PlaybackId,
    at: f64,
    schedule: Schedule,
    cut: Option<f64>,
}

impl Playback {
    /// Device time at which this playback stops producing sound.
    fn end(&self) -> f64 {
        let tail = self.schedule.bus.as_ref().map(tail_seconds).unwrap_or(0.0);
        let natural = self.at + self.schedule.duration() + tail;
        match self.cut {
            Some(cut) => natural.min(cut + FADE_SECONDS),
            None => natural,
        }
    }
}

/// A device that renders its timeline to samples instead of a speaker.
///
/// Time only moves when [`OfflineDevice::advance`] is called, which makes
/// playback behaviour reproducible in tests and batch rendering.
#[derive(Debug, Clone)]
pub struct OfflineDevice {
    sample_rate: u32,
    clock: f64,
    playbacks: Vec<Playback>,
}

impl OfflineDevice {
    /// Creates a device at the given sample rate with its clock at zero.
    pub fn new(sample_rate: u32) -> AudioResult<Self> {
        if sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate { rate: sample_rate });
        }
        Ok(Self {
            sample_rate,
            clock: 0.0,
            playbacks: Vec::new(),
        })
    }

    /// Returns the sample rate.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Moves the clock forward. Negative or non-finite steps are ignored.
    pub fn advance(&mut self, seconds: f64) {
        if seconds.is_finite() && seconds > 0.0 {
            self.clock += seconds;
        }
    }

    /// Number of playbacks ever scheduled.
    pub fn playback_count(&self) -> usize {
        self.playbacks.len()
    }

    /// Time at which a playback was silenced, if it was.
    pub fn cut_time(&self, id: PlaybackId) -> Option<f64> {
        self.playbacks.iter().find(|p| p.id == id).and_then(|p| p.cut)
    }

    /// Device time at which the last sound ends.
    pub fn end_time(&self) -> f64 {
        self.playbacks.iter().map(Playback::end).fold(0.0, f64::max)
    }

    /// Renders the whole timeline, from time zero to [`Self::end_time`].
    ///
    /// Playbacks are rendered independently (tones, then bus, then master
    /// gain), cut with a short fade where silenced, summed, and hard clipped
    /// to [-1, 1].
    pub fn render(&self) -> Vec<f64> {
        let sr = self.sample_rate as f64;
        let total = (self.end_time() * sr).ceil() as usize;
        let mut out = vec![0.0; total];

        for playback in &self.playbacks {
            let offset = (playback.at * sr).round() as usize;
            if offset >= total {
                continue;
            }
            let len = ((playback.end() - playback.at).max(0.0) * sr).ceil() as usize;
            let mut local = vec![0.0; len.min(total - offset)];

            for event in &playback.schedule.events {
                render_tone(event, sr, &mut local);
            }
            if let Some(effects) = &playback.schedule.bus {
                BusProcessor::new(effects, sr).process_buffer(&mut local);
            }

            let gain = playback.schedule.master_gain;
            let cut = playback
                .cut
                .map(|c| ((c - playback.at).max(0.0) * sr).round() as usize);
            let fade = ((FADE_SECONDS * sr).round() as usize).max(1);

            for (i, sample) in local.iter().enumerate() {
                let cut_gain = match cut {
                    Some(c) if i >= c => 1.0 - ((i - c) as f64 / fade as f64).min(1.0),
                    _ => 1.0,
                };
                out[offset + i] += sample * gain * cut_gain;
            }
        }

        for sample in out.iter_mut() {
            *sample = sample.clamp(-1.0, 1.0);
        }
        out
    }

    /// Renders the timeline to a 16-bit mono WAV.
    pub fn render_wav(&self) -> WavResult {
        WavResult::from_mono(&self.render(), self.sample_rate)
    }
}

impl AudioDevice for OfflineDevice {
    fn now(&self) -> f64 {
        self.clock
    }

    fn schedule(&mut self, id: PlaybackId, at: f64, schedule: &Schedule) -> AudioResult<()> {
        schedule.validate()?;
        if !at.is_finite() || at < 0.0 {
            return Err(AudioError::InvalidDuration { duration: at });
        }
        log::debug!(
            "scheduling playback {} at {:.3}s ({} tones, {:.3}s)",
            id,
            at,
            schedule.events.len(),
            schedule.duration()
        );
        self.playbacks.push(Playback {
            id,
            at,
            schedule: schedule.clone(),
            cut: None,
        });
        Ok(())
    }

    fn silence(&mut self, id: PlaybackId, at: f64) {
        if let Some(playback) = self.playbacks.iter_mut().find(|p| p.id == id) {
            if playback.cut.is_none() {
                log::debug!("silencing playback {} at {:.3}s", id, at);
                playback.cut = Some(at.max(playback.at));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ToneEvent;

    fn tone(start: f64, duration: f64) -> ToneEvent {
        ToneEvent {
            frequency: 440.0,
            start,
            duration,
            gain: 0.5,
        }
    }

    #[test]
    fn test_zero_sample_rate_rejected() {
        assert!(matches!(
            OfflineDevice::new(0),
            Err(AudioError::InvalidSampleRate { rate: 0 })
        ));
    }

    #[test]
    fn test_render_length_follows_schedule() {
        let mut device = OfflineDevice::new(8000).unwrap();
        device
            .schedule(1, 0.0, &Schedule::new(vec![tone(0.0, 0.5)]))
            .unwrap();
        assert_eq!(device.render().len(), 4000);
    }

    #[test]
    fn test_one_hertz_device_renders_bus() {
        use crate::schedule::{quantum_schedule, DEFAULT_STEP_SECONDS};
        use symph_spec::{QuantumState, Superposition};

        let state = QuantumState {
            amplitude: 0.5,
            phase: 0.5,
            entanglement: 0.5,
            superposition: Superposition {
                melody: vec![440.0, 523.25],
                harmony: vec![261.63],
                rhythm: vec![0.5],
            },
        };
        let mut device = OfflineDevice::new(1).unwrap();
        device
            .schedule(1, 0.0, &quantum_schedule(&state, DEFAULT_STEP_SECONDS))
            .unwrap();
        let samples = device.render();
        assert!(!samples.is_empty());
        assert!(samples.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn test_silence_truncates() {
        let mut device = OfflineDevice::new(8000).unwrap();
        device
            .schedule(1, 0.0, &Schedule::new(vec![tone(0.0, 1.0)]))
            .unwrap();
        device.silence(1, 0.25);
        // A second silence does not move the cut.
        device.silence(1, 0.5);

        assert_eq!(device.cut_time(1), Some(0.25));
        let samples = device.render();
        assert_eq!(samples.len(), 2080);
        assert!(samples[2070..].iter().all(|s| s.abs() < 0.07));
    }

    #[test]
    fn test_invalid_schedule_rejected() {
        let mut device = OfflineDevice::new(8000).unwrap();
        let bad = Schedule::new(vec![ToneEvent {
            frequency: -1.0,
            ..tone(0.0, 0.1)
        }]);
        assert!(device.schedule(1, 0.0, &bad).is_err());
        assert_eq!(device.playback_count(), 0);
    }

    #[test]
    fn test_master_gain_scales_output() {
        let mut loud = OfflineDevice::new(8000).unwrap();
        loud.schedule(1, 0.0, &Schedule::new(vec![tone(0.0, 0.1)])).unwrap();

        let mut quiet = OfflineDevice::new(8000).unwrap();
        let mut schedule = Schedule::new(vec![tone(0.0, 0.1)]);
        schedule.master_gain = 0.5;
        quiet.schedule(1, 0.0, &schedule).unwrap();

        let a = loud.render();
        let b = quiet.render();
        for (x, y) in a.iter().zip(&b) {
            assert!((x * 0.5 - y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_advance_ignores_bad_steps() {
        let mut device = OfflineDevice::new(8000).unwrap();
        device.advance(1.5);
        device.advance(-1.0);
        device.advance(f64::NAN);
        assert_eq!(device.now(), 1.5);
    }
}
