//! Symph Transaction Model Library
//!
//! This crate provides the shared types for Symph: the read-only transaction
//! input, the value objects produced by the generators, validation of
//! signatures and account addresses, share links, and the contract for the
//! external transaction-lookup service.
//!
//! # Overview
//!
//! Every generator in the workspace is a pure function of a [`Transaction`].
//! The signature is the source of determinism: seeds for any pseudo-random
//! stream are derived from it with BLAKE3 (see [`hash`]).
//!
//! # Example
//!
//! ```
//! use symph_spec::{Transaction, TransactionType};
//! use symph_spec::share::{extract_tx, share_link};
//!
//! let tx = Transaction::builder("5Kt3hQx9", TransactionType::Swap)
//!     .fee(0.2)
//!     .value(5000.0)
//!     .build();
//!
//! let link = share_link("https://symph.example", &tx.signature);
//! assert_eq!(extract_tx(&link).as_deref(), Some("5Kt3hQx9"));
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error type and the error-code trait shared by all crates
//! - [`hash`]: Signature hashing and seed derivation
//! - [`model`]: Generator output types (notes, DNA, quantum state, dreams)
//! - [`share`]: Share-link construction and parsing
//! - [`source`]: Transaction lookup contract and file/memory sources
//! - [`transaction`]: The transaction input type
//! - [`validation`]: Signature and address validation

pub mod error;
pub mod hash;
pub mod model;
pub mod share;
pub mod source;
pub mod transaction;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{BackendError, SpecError, SpecResult};
pub use hash::{derive_component_seed, derive_unit_interval, signature_hash, signature_seed};
pub use model::{
    Bead, DnaSequence, DreamEmotion, DreamFragment, DreamPattern, Essence, Feather, Mutation,
    MutationKind, Note, NoteSequence, QuantumState, Spirit, Superposition, Weave, Whisper,
};
pub use source::{JsonFileSource, MemorySource, TransactionSource};
pub use transaction::{Transaction, TransactionBuilder, TransactionStatus, TransactionType};
pub use validation::{is_valid_address, is_valid_signature, validate_address, validate_signature};
