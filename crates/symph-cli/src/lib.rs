//! Symph CLI library.
//!
//! This crate provides the core functionality for the `symph` binary:
//! configuration, transaction input, the terminal command surface, text
//! visualizers, and one module per subcommand.

pub mod commands;
pub mod config;
pub mod input;
pub mod playback;
pub mod terminal;
pub mod visualizer;

pub use config::SymphConfig;
pub use input::TxArgs;
pub use playback::Voice;
