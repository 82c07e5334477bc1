//! Symph Music Backend - Deterministic Musical Structures from Transactions
//!
//! This crate turns a [`symph_spec::Transaction`] into musical structures.
//! Every generator is synchronous, stateless across calls and free of I/O.
//!
//! # Generators
//!
//! - [`NoteMapper`]: signature characters to a note sequence
//! - [`TransactionDna`]: base motif plus value/fee mutations
//! - [`QuantumHarmonics`]: melody, harmony and rhythm voices with modulation
//!   scalars
//! - [`DreamCatcher`]: decorative fragments (randomized, or seeded from the
//!   signature)
//!
//! # Determinism
//!
//! All outputs except [`DreamCatcher::capture`] are pure functions of the
//! transaction. Where a value cannot come from the transaction fields, it is
//! derived from the signature with BLAKE3 and, where a stream is needed,
//! expanded with PCG32.
//!
//! # Example
//!
//! ```
//! use symph_backend_music::{NoteMapper, QuantumHarmonics, TransactionDna};
//! use symph_spec::{Transaction, TransactionType};
//!
//! let tx = Transaction::builder("ab12cd34", TransactionType::Swap)
//!     .value(5000.0)
//!     .fee(0.2)
//!     .build();
//!
//! let notes = NoteMapper::new().map_transaction(&tx).unwrap();
//! let dna = TransactionDna::new().analyze(&tx);
//! let state = QuantumHarmonics::new().generate(&tx).unwrap();
//!
//! assert_eq!(notes.len(), 8);
//! assert_eq!(dna.mutations.len(), 2);
//! assert_eq!(state.superposition.melody.len(), 8);
//! ```

pub mod dna;
pub mod dream;
pub mod error;
pub mod mapper;
pub mod note;
pub mod quantum;
pub mod rng;

pub use dna::TransactionDna;
pub use dream::DreamCatcher;
pub use error::{MusicError, MusicResult};
pub use mapper::{MappingMode, NoteMapper};
pub use quantum::QuantumHarmonics;

/// Crate version for backend identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Backend identifier.
pub const BACKEND_ID: &str = "symph-backend-music";
