//! Text visualizers.
//!
//! Each visualizer turns a [`FrameState`] into a block of text, one line per
//! row. They are looked up by name in a [`VisualizerRegistry`].

use std::collections::BTreeMap;

use symph_backend_audio::spectrum::{band_levels, magnitude_spectrum};

/// FFT window used for frame spectra.
pub const FFT_SIZE: usize = 1024;

const HEX_GLYPHS: &[u8; 16] = b"0123456789abcdef";

/// Everything a visualizer may draw from at one instant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameState {
    /// Samples of the current window, in [-1, 1].
    pub samples: Vec<f64>,
    /// Magnitude spectrum of the window.
    pub spectrum: Vec<f64>,
    /// Frequencies of the notes being played.
    pub notes: Vec<f64>,
    /// Seconds since playback start.
    pub time: f64,
    pub width: usize,
    pub height: usize,
}

impl FrameState {
    /// Cuts the frame at `time` out of a rendered buffer.
    pub fn at(
        rendered: &[f64],
        sample_rate: u32,
        time: f64,
        notes: Vec<f64>,
        width: usize,
        height: usize,
    ) -> Self {
        let start = ((time.max(0.0) * sample_rate as f64) as usize).min(rendered.len());
        let end = (start + FFT_SIZE).min(rendered.len());
        let samples = rendered[start..end].to_vec();
        let spectrum = magnitude_spectrum(&samples, FFT_SIZE);
        Self {
            samples,
            spectrum,
            notes,
            time,
            width,
            height,
        }
    }
}

/// A rendering strategy for one frame.
pub trait Visualizer {
    /// Name used to select this visualizer.
    fn name(&self) -> &'static str;

    /// Draws the frame as `height` lines of `width` characters.
    fn render(&self, frame: &FrameState) -> String;
}

fn blank(frame: &FrameState) -> Vec<Vec<u8>> {
    vec![vec![b' '; frame.width]; frame.height]
}

fn join(grid: Vec<Vec<u8>>) -> String {
    grid.into_iter()
        .map(|row| String::from_utf8_lossy(&row).into_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Oscilloscope trace of the sample window.
pub struct WaveVisualizer;

impl Visualizer for WaveVisualizer {
    fn name(&self) -> &'static str {
        "wave"
    }

    fn render(&self, frame: &FrameState) -> String {
        let mut grid = blank(frame);
        if frame.width == 0 || frame.height == 0 {
            return join(grid);
        }
        let rows = frame.height - 1;
        let mid = rows / 2;
        for cell in grid[mid].iter_mut() {
            *cell = b'-';
        }
        if frame.samples.is_empty() {
            return join(grid);
        }

        for col in 0..frame.width {
            let idx = col * frame.samples.len() / frame.width;
            let sample = frame.samples[idx].clamp(-1.0, 1.0);
            let row = ((1.0 - (sample + 1.0) / 2.0) * rows as f64).round() as usize;
            grid[row.min(rows)][col] = b'*';
        }
        join(grid)
    }
}

/// Bar graph of spectrum band levels.
pub struct FrequencyVisualizer;

impl Visualizer for FrequencyVisualizer {
    fn name(&self) -> &'static str {
        "frequency"
    }

    fn render(&self, frame: &FrameState) -> String {
        let mut grid = blank(frame);
        let levels = band_levels(&frame.spectrum, frame.width);
        for (col, level) in levels.iter().enumerate() {
            let bar = (level * frame.height as f64).round() as usize;
            for row in frame.height.saturating_sub(bar)..frame.height {
                grid[row][col] = b'#';
            }
        }
        join(grid)
    }
}

/// Falling columns of hex glyphs, paced by the note frequencies.
pub struct MatrixVisualizer;

/// Rows drawn behind each falling head.
const TRAIL: usize = 4;

impl Visualizer for MatrixVisualizer {
    fn name(&self) -> &'static str {
        "matrix"
    }

    fn render(&self, frame: &FrameState) -> String {
        let mut grid = blank(frame);
        if frame.height == 0 || frame.notes.is_empty() {
            return join(grid);
        }

        for col in 0..frame.width {
            let freq = frame.notes[col % frame.notes.len()].max(0.0);
            // Higher notes fall faster; columns start staggered.
            let travelled = (frame.time * freq / 55.0).floor() as usize;
            let head = (travelled + col * 7) % frame.height;
            for k in 0..TRAIL.min(frame.height) {
                let row = (head + frame.height - k) % frame.height;
                let glyph = (freq as usize + row + col) % HEX_GLYPHS.len();
                grid[row][col] = HEX_GLYPHS[glyph];
            }
        }
        join(grid)
    }
}

/// Visualizers keyed by name.
pub struct VisualizerRegistry {
    entries: BTreeMap<&'static str, Box<dyn Visualizer>>,
}

impl Default for VisualizerRegistry {
    fn default() -> Self {
        let mut registry = Self {
            entries: BTreeMap::new(),
        };
        registry.register(Box::new(WaveVisualizer));
        registry.register(Box::new(FrequencyVisualizer));
        registry.register(Box::new(MatrixVisualizer));
        registry
    }
}

impl VisualizerRegistry {
    /// Adds or replaces a visualizer under its own name.
    pub fn register(&mut self, visualizer: Box<dyn Visualizer>) {
        self.entries.insert(visualizer.name(), visualizer);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Visualizer> {
        self.entries.get(name).map(|v| v.as_ref())
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn sine_frame(freq: f64, width: usize, height: usize) -> FrameState {
        let sr = 8000;
        let rendered: Vec<f64> = (0..sr)
            .map(|i| 0.8 * (2.0 * PI * freq * i as f64 / sr as f64).sin())
            .collect();
        FrameState::at(&rendered, sr, 0.25, vec![freq], width, height)
    }

    fn assert_dimensions(text: &str, width: usize, height: usize) {
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), height);
        assert!(lines.iter().all(|l| l.len() == width));
    }

    #[test]
    fn test_registry_names() {
        let registry = VisualizerRegistry::default();
        assert_eq!(registry.names(), vec!["frequency", "matrix", "wave"]);
        assert!(registry.get("wave_3d").is_none());
    }

    #[test]
    fn test_every_visualizer_respects_dimensions() {
        let registry = VisualizerRegistry::default();
        let frame = sine_frame(440.0, 40, 12);
        for name in registry.names() {
            let text = registry.get(name).unwrap().render(&frame);
            assert_dimensions(&text, 40, 12);
        }
    }

    #[test]
    fn test_frame_window() {
        let frame = sine_frame(440.0, 10, 5);
        assert_eq!(frame.samples.len(), FFT_SIZE);
        assert_eq!(frame.spectrum.len(), FFT_SIZE / 2);

        // Past the end of the buffer the window is empty.
        let late = FrameState::at(&[0.0; 100], 8000, 5.0, vec![], 10, 5);
        assert!(late.samples.is_empty());
    }

    #[test]
    fn test_wave_draws_trace() {
        let text = WaveVisualizer.render(&sine_frame(440.0, 32, 9));
        assert!(text.contains('*'));

        let silent = WaveVisualizer.render(&FrameState {
            width: 8,
            height: 5,
            ..Default::default()
        });
        assert_eq!(silent, "        \n        \n--------\n        \n        ");
    }

    #[test]
    fn test_frequency_bars_rise_from_bottom() {
        let text = FrequencyVisualizer.render(&sine_frame(1000.0, 16, 8));
        let lines: Vec<&str> = text.split('\n').collect();
        let top = lines[0].matches('#').count();
        let bottom = lines[7].matches('#').count();
        assert!(bottom >= 1);
        assert!(bottom >= top);
    }

    #[test]
    fn test_matrix_is_deterministic_and_moves() {
        let mut frame = sine_frame(440.0, 20, 10);
        let a = MatrixVisualizer.render(&frame);
        assert_eq!(a, MatrixVisualizer.render(&frame));
        assert_eq!(a.matches(|c: char| c.is_ascii_hexdigit()).count(), 20 * TRAIL);

        frame.time += 1.0;
        assert_ne!(a, MatrixVisualizer.render(&frame));
    }
}
