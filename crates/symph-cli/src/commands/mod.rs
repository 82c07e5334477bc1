//! CLI command implementations

pub mod dna;
pub mod dream;
pub mod json_output;
pub mod list;
pub mod lookup;
pub mod notes;
pub mod quantum;
pub mod render;
pub mod share;
pub mod terminal;
pub mod visualize;

mod reporting;
