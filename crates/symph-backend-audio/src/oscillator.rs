//! Sine tone rendering with linear fades.

use std::f64::consts::PI;

use crate::schedule::ToneEvent;

/// Fade-in and fade-out length applied to every tone, in seconds.
pub const FADE_SECONDS: f64 = 0.01;

/// Phase accumulator for a fixed-frequency sine.
#[derive(Debug, Clone)]
pub struct SineOscillator {
    phase: f64,
    increment: f64,
}

impl SineOscillator {
    /// Creates an oscillator at `frequency` Hz.
    pub fn new(frequency: f64, sample_rate: f64) -> Self {
        Self {
            phase: 0.0,
            increment: 2.0 * PI * frequency / sample_rate,
        }
    }

    /// Returns the next sample in [-1, 1].
    #[inline]
    pub fn next_sample(&mut self) -> f64 {
        let out = self.phase.sin();
        self.phase += self.increment;
        if self.phase >= 2.0 * PI {
            self.phase -= 2.0 * PI;
        }
        out
    }
}

/// Linear attack/release envelope value at sample `i` of `len`.
///
/// The fade length is capped at half the tone so short tones still reach a
/// peak.
pub fn fade_envelope(i: usize, len: usize, fade_samples: usize) -> f64 {
    let fade = fade_samples.min(len / 2).max(1) as f64;
    let from_start = i as f64;
    let to_end = (len - 1 - i.min(len - 1)) as f64;
    (from_start / fade).min(to_end / fade).min(1.0)
}

/// Adds one tone into `buffer`, whose first sample sits at time 0.
///
/// Samples past the end of the buffer are dropped.
pub fn render_tone(event: &ToneEvent, sample_rate: f64, buffer: &mut [f64]) {
    let start = (event.start * sample_rate).round() as usize;
    let len = (event.duration * sample_rate).round() as usize;
    if len == 0 || start >= buffer.len() {
        return;
    }
    let fade_samples = (FADE_SECONDS * sample_rate).round() as usize;

    let mut osc = SineOscillator::new(event.frequency, sample_rate);
    let end = (start + len).min(buffer.len());
    for (i, slot) in buffer[start..end].iter_mut().enumerate() {
        *slot += osc.next_sample() * event.gain * fade_envelope(i, len, fade_samples);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        assert_eq!(fade_envelope(0, 100, 10), 0.0);
        assert_eq!(fade_envelope(50, 100, 10), 1.0);
        assert_eq!(fade_envelope(99, 100, 10), 0.0);
        assert!((fade_envelope(5, 100, 10) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_short_tone_envelope() {
        // Fade capped at len/2 = 2.
        assert_eq!(fade_envelope(2, 4, 100), 0.5);
    }

    #[test]
    fn test_render_tone_places_samples() {
        let event = ToneEvent {
            frequency: 100.0,
            start: 0.5,
            duration: 0.25,
            gain: 0.5,
        };
        let mut buffer = vec![0.0; 1000];
        render_tone(&event, 1000.0, &mut buffer);

        assert!(buffer[..500].iter().all(|&s| s == 0.0));
        assert!(buffer[750..].iter().all(|&s| s == 0.0));
        let peak = buffer.iter().fold(0.0f64, |m, s| m.max(s.abs()));
        assert!(peak > 0.4 && peak <= 0.5);
    }

    #[test]
    fn test_render_tone_truncates_at_buffer_end() {
        let event = ToneEvent {
            frequency: 100.0,
            start: 0.9,
            duration: 1.0,
            gain: 1.0,
        };
        let mut buffer = vec![0.0; 1000];
        render_tone(&event, 1000.0, &mut buffer);
        assert!(buffer[900..].iter().any(|&s| s != 0.0));
    }
}
