//! Per-playback effect bus: all-pass filter into a feedback delay.

use crate::delay_line::DelayLine;
use crate::filter::BiquadFilter;
use crate::schedule::BusEffects;

/// Number of delay times rendered after the last tone so echoes can ring out.
pub const TAIL_DELAYS: f64 = 4.0;

/// Stateful processor for one playback's [`BusEffects`].
#[derive(Debug, Clone)]
pub struct BusProcessor {
    allpass: BiquadFilter,
    delay: DelayLine,
    feedback: f64,
    mix: f64,
}

impl BusProcessor {
    /// Creates a processor at the given sample rate.
    pub fn new(effects: &BusEffects, sample_rate: f64) -> Self {
        Self {
            allpass: BiquadFilter::allpass(effects.allpass_hz, effects.allpass_q, sample_rate),
            delay: DelayLine::new(effects.delay_seconds, sample_rate),
            feedback: effects.delay_feedback,
            mix: effects.delay_mix,
        }
    }

    /// Processes one sample.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        let filtered = self.allpass.process(input);
        let delayed = self.delay.tap();
        self.delay.push(filtered + delayed * self.feedback);
        filtered * (1.0 - self.mix) + delayed * self.mix
    }

    /// Processes a buffer in place.
    pub fn process_buffer(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }
}

/// Extra render time a bus needs after the dry signal ends.
pub fn tail_seconds(effects: &BusEffects) -> f64 {
    if effects.delay_mix > 0.0 {
        effects.delay_seconds * TAIL_DELAYS
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effects(mix: f64) -> BusEffects {
        BusEffects {
            allpass_hz: 1000.0,
            allpass_q: 0.707,
            delay_seconds: 0.01,
            delay_feedback: 0.0,
            delay_mix: mix,
        }
    }

    #[test]
    fn test_echo_arrives_after_delay() {
        let mut bus = BusProcessor::new(&effects(1.0), 1000.0);
        let mut buffer = vec![0.0; 40];
        buffer[0] = 1.0;
        bus.process_buffer(&mut buffer);

        // Fully wet: nothing before the 10-sample delay.
        assert!(buffer[..10].iter().all(|&s| s == 0.0));
        assert!(buffer[10..].iter().any(|&s| s != 0.0));
    }

    #[test]
    fn test_tail() {
        assert_eq!(tail_seconds(&effects(0.0)), 0.0);
        assert!((tail_seconds(&effects(0.5)) - 0.04).abs() < 1e-12);
    }
}
