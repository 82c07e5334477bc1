//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! Generators that need reproducible randomness seed a PCG32 stream from the
//! transaction signature, one independent stream per named component.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use symph_spec::hash::derive_component_seed;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Creates an RNG for a named component of a signature.
///
/// # Arguments
/// * `signature` - Transaction signature
/// * `key` - Component identifier (e.g. `"dream"`)
pub fn create_component_rng(signature: &str, key: &str) -> Pcg32 {
    create_rng(derive_component_seed(signature, key))
}
