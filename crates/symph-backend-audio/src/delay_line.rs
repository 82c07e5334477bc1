//! Fixed-length delay for the playback bus echo.

/// Circular history with one fractional tap.
///
/// The tap sits `delay` samples behind the most recent [`push`](Self::push),
/// linearly interpolated between neighbouring samples.
#[derive(Debug, Clone)]
pub struct DelayLine {
    history: Vec<f64>,
    head: usize,
    delay: f64,
}

impl DelayLine {
    /// A delay of `seconds` at `sample_rate`, at least one sample long.
    pub fn new(seconds: f64, sample_rate: f64) -> Self {
        let delay = (seconds * sample_rate).max(1.0);
        Self {
            history: vec![0.0; delay.ceil() as usize + 2],
            head: 0,
            delay,
        }
    }

    /// Delay in samples.
    pub fn delay(&self) -> f64 {
        self.delay
    }

    /// Appends the newest sample.
    pub fn push(&mut self, sample: f64) {
        self.history[self.head] = sample;
        self.head = (self.head + 1) % self.history.len();
    }

    /// Sample from `delay` pushes ago.
    pub fn tap(&self) -> f64 {
        let whole = self.delay.floor();
        let frac = self.delay - whole;
        let back = whole as usize;
        self.ago(back) * (1.0 - frac) + self.ago(back + 1) * frac
    }

    fn ago(&self, pushes: usize) -> f64 {
        let len = self.history.len();
        self.history[(self.head + len - pushes.min(len)) % len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impulse_returns_after_delay() {
        let mut line = DelayLine::new(4.0, 1.0);
        let mut out = Vec::new();
        for i in 0..8 {
            out.push(line.tap());
            line.push(if i == 0 { 1.0 } else { 0.0 });
        }
        assert_eq!(out, vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_fractional_tap_interpolates() {
        let mut line = DelayLine::new(1.5, 1.0);
        line.push(2.0);
        line.push(4.0);
        // Halfway between one push ago (4.0) and two pushes ago (2.0).
        assert!((line.tap() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_minimum_delay() {
        let line = DelayLine::new(0.0, 44100.0);
        assert_eq!(line.delay(), 1.0);
    }

    #[test]
    fn test_wraps_around() {
        let mut line = DelayLine::new(2.0, 1.0);
        for i in 0..50 {
            line.push(i as f64);
        }
        assert!((line.tap() - 48.0).abs() < 1e-12);
    }
}
