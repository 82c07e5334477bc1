//! Symph Integration Test Infrastructure
//!
//! This crate holds cross-crate tests:
//!
//! - **Determinism**: generator output and rendered audio are identical
//!   across runs
//! - Properties: generator invariants over arbitrary signatures (proptest)
//! - Sources: enhanced-transaction files through the lookup contract
//! - Playback: last-wins sessions and awaitable tokens
//! - CLI: command functions end to end
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p symph-tests
//! ```

pub mod determinism;
pub mod fixtures;

// Re-export commonly used items
pub use determinism::{compute_hash, verify_determinism, DeterminismResult, DiffInfo};
