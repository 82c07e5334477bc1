//! Schedules for a transaction, by voice.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use symph_backend_audio::{dna_schedule, note_schedule, quantum_schedule, Schedule};
use symph_backend_music::{MappingMode, MusicResult, NoteMapper, QuantumHarmonics, TransactionDna};
use symph_spec::Transaction;

use crate::config::SymphConfig;

/// Which generator drives the audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Voice {
    /// Equal-tempered notes, one per signature character
    #[default]
    Notes,
    /// Type palette notes, one per character pair
    Palette,
    /// Expressed DNA motif
    Dna,
    /// Melody, harmony and rhythm of the quantum state
    Quantum,
}

impl Voice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::Notes => "notes",
            Voice::Palette => "palette",
            Voice::Dna => "dna",
            Voice::Quantum => "quantum",
        }
    }
}

/// Builds the schedule a voice produces for a transaction.
pub fn schedule_for(voice: Voice, tx: &Transaction, config: &SymphConfig) -> MusicResult<Schedule> {
    let step = config.step_seconds;
    let schedule = match voice {
        Voice::Notes | Voice::Palette => {
            let mode = if voice == Voice::Palette {
                MappingMode::Palette
            } else {
                MappingMode::EqualTempered
            };
            let mapper = NoteMapper::new()
                .with_mode(mode)
                .with_base_frequency(config.base_frequency)?;
            note_schedule(&mapper.map_transaction(tx)?, step)
        }
        Voice::Dna => {
            let dna = TransactionDna::new().analyze(tx);
            dna_schedule(&dna, config.base_frequency, step)
        }
        Voice::Quantum => {
            let state = QuantumHarmonics::new().generate(tx)?;
            quantum_schedule(&state, step)
        }
    };
    Ok(schedule)
}
