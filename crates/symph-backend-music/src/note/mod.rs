//! Note names, MIDI numbers, frequencies and signature character values.

mod constants;
mod conversion;
mod frequency;
mod hex;

#[cfg(test)]
mod tests;

pub use constants::{palette_for, Palette, A4_FREQUENCY, DEFAULT_BASE_FREQUENCY};
pub use conversion::{note_name_to_frequency, note_name_to_midi};
pub use frequency::{equal_tempered, midi_to_freq};
pub use hex::{hex_digit_value, hex_prefix_value};
