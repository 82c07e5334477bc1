//! Magnitude spectra for the frequency visualizer.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use std::f64::consts::PI;

fn hann_window(i: usize, size: usize) -> f64 {
    0.5 * (1.0 - (2.0 * PI * i as f64 / size as f64).cos())
}

/// Magnitude spectrum of the first `fft_size` samples (zero-padded).
///
/// Returns `fft_size / 2` bins normalized so a full-scale sine peaks near 1.
pub fn magnitude_spectrum(samples: &[f64], fft_size: usize) -> Vec<f64> {
    if fft_size < 2 {
        return Vec::new();
    }

    let mut buffer: Vec<Complex<f64>> = (0..fft_size)
        .map(|i| {
            let s = samples.get(i).copied().unwrap_or(0.0);
            Complex::new(s * hann_window(i, fft_size), 0.0)
        })
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(fft_size);
    fft.process(&mut buffer);

    // A Hann window halves the coherent gain.
    let scale = 4.0 / fft_size as f64;
    buffer[..fft_size / 2]
        .iter()
        .map(|c| c.norm() * scale)
        .collect()
}

/// Averages a spectrum into `bands` equal-width bands, each clamped to [0, 1].
pub fn band_levels(spectrum: &[f64], bands: usize) -> Vec<f64> {
    if bands == 0 {
        return Vec::new();
    }
    if spectrum.is_empty() {
        return vec![0.0; bands];
    }

    (0..bands)
        .map(|b| {
            let lo = b * spectrum.len() / bands;
            let hi = ((b + 1) * spectrum.len() / bands).max(lo + 1).min(spectrum.len());
            let slice = &spectrum[lo.min(hi - 1)..hi];
            let peak = slice.iter().fold(0.0f64, |m, &v| m.max(v));
            peak.clamp(0.0, 1.0)
        })
        .collect()
}

/// Frequency in Hz at the center of bin `bin`.
pub fn bin_frequency(bin: usize, fft_size: usize, sample_rate: f64) -> f64 {
    bin as f64 * sample_rate / fft_size as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sine_peaks_at_its_bin() {
        let sample_rate = 8000.0;
        let fft_size = 1024;
        // Exactly on bin 64.
        let freq = bin_frequency(64, fft_size, sample_rate);
        let samples: Vec<f64> = (0..fft_size)
            .map(|i| (2.0 * PI * freq * i as f64 / sample_rate).sin())
            .collect();

        let spectrum = magnitude_spectrum(&samples, fft_size);
        assert_eq!(spectrum.len(), 512);
        let peak_bin = spectrum
            .iter()
            .enumerate()
            .fold((0, 0.0), |(bi, bv), (i, &v)| if v > bv { (i, v) } else { (bi, bv) })
            .0;
        assert_eq!(peak_bin, 64);
        assert!((spectrum[64] - 1.0).abs() < 0.05);
    }

    #[test]
    fn test_silence_is_flat() {
        let spectrum = magnitude_spectrum(&[], 256);
        assert!(spectrum.iter().all(|&v| v == 0.0));
        assert_eq!(band_levels(&spectrum, 8), vec![0.0; 8]);
    }

    #[test]
    fn test_band_levels_shape() {
        let spectrum = vec![0.0, 0.2, 0.4, 2.0];
        assert_eq!(band_levels(&spectrum, 2), vec![0.2, 1.0]);
        assert_eq!(band_levels(&spectrum, 8).len(), 8);
        assert!(band_levels(&spectrum, 0).is_empty());
    }
}
