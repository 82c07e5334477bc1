//! Biquad all-pass filter used on the playback bus.
//!
//! Coefficients follow the Audio EQ Cookbook formulas.

use std::f64::consts::PI;

/// Normalized biquad filter coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiquadCoeffs {
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub a1: f64,
    pub a2: f64,
}

impl BiquadCoeffs {
    /// Creates all-pass filter coefficients.
    ///
    /// # Arguments
    /// * `frequency` - Center frequency in Hz (clamped below Nyquist)
    /// * `q` - Q factor
    /// * `sample_rate` - Audio sample rate in Hz
    pub fn allpass(frequency: f64, q: f64, sample_rate: f64) -> Self {
        // Clamp Q to minimum safe value to prevent division by zero
        let q = q.max(0.5);
        let frequency = frequency.clamp(1.0, (sample_rate * 0.49).max(1.0));
        let omega = 2.0 * PI * frequency / sample_rate;
        let sin_omega = omega.sin();
        let cos_omega = omega.cos();
        let alpha = sin_omega / (2.0 * q);

        let b0 = 1.0 - alpha;
        let b1 = -2.0 * cos_omega;
        let b2 = 1.0 + alpha;
        let a0 = 1.0 + alpha;
        let a1 = -2.0 * cos_omega;
        let a2 = 1.0 - alpha;

        Self {
            b0: b0 / a0,
            b1: b1 / a0,
            b2: b2 / a0,
            a1: a1 / a0,
            a2: a2 / a0,
        }
    }
}

/// Direct form I biquad filter.
#[derive(Debug, Clone)]
pub struct BiquadFilter {
    coeffs: BiquadCoeffs,
    x1: f64,
    x2: f64,
    y1: f64,
    y2: f64,
}

impl BiquadFilter {
    /// Creates a new biquad filter with the given coefficients.
    pub fn new(coeffs: BiquadCoeffs) -> Self {
        Self {
            coeffs,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    /// Creates an all-pass filter.
    pub fn allpass(frequency: f64, q: f64, sample_rate: f64) -> Self {
        Self::new(BiquadCoeffs::allpass(frequency, q, sample_rate))
    }

    /// Processes a single sample.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        let output = self.coeffs.b0 * input + self.coeffs.b1 * self.x1 + self.coeffs.b2 * self.x2
            - self.coeffs.a1 * self.y1
            - self.coeffs.a2 * self.y2;

        self.x2 = self.x1;
        self.x1 = input;
        self.y2 = self.y1;
        self.y1 = output;

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rms(samples: &[f64]) -> f64 {
        (samples.iter().map(|s| s * s).sum::<f64>() / samples.len() as f64).sqrt()
    }

    #[test]
    fn test_allpass_preserves_level() {
        let sample_rate = 44100.0;
        let input: Vec<f64> = (0..44100)
            .map(|i| (2.0 * PI * 440.0 * i as f64 / sample_rate).sin())
            .collect();

        let mut filter = BiquadFilter::allpass(1000.0, 0.707, sample_rate);
        let output: Vec<f64> = input.iter().map(|&s| filter.process(s)).collect();

        // Skip the transient at the start.
        let ratio = rms(&output[4410..]) / rms(&input[4410..]);
        assert!((ratio - 1.0).abs() < 0.01, "level ratio {}", ratio);
    }

    #[test]
    fn test_frequency_clamped_below_nyquist() {
        let coeffs = BiquadCoeffs::allpass(1.0e6, 0.707, 44100.0);
        assert!(coeffs.b0.is_finite() && coeffs.a1.is_finite());
    }

    #[test]
    fn test_tiny_sample_rate_does_not_panic() {
        for sample_rate in [1.0, 2.0, 2.04] {
            let coeffs = BiquadCoeffs::allpass(600.0, 0.707, sample_rate);
            assert!(coeffs.b0.is_finite() && coeffs.a2.is_finite());
        }
    }
}
